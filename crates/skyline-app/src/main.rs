// File: crates/skyline-app/src/main.rs
// Summary: Windowed host; blits the rendered chart into a winit window via softbuffer (CPU).

mod bootstrap;

use anyhow::Result;
use skyline_core::{theme, RenderOptions};
use std::num::NonZeroU32;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let chart = bootstrap::height_chart();
    tracing::info!(columns = chart.series[0].points.len(), "chart ready");

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Skyline")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 600.0))
        .build(&event_loop)?;

    let context = unsafe { softbuffer::Context::new(&window) }.expect("softbuffer context");
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.expect("softbuffer surface");

    // Any keypress cycles through the theme presets.
    let themes = theme::presets();
    let mut theme_idx = 0usize;
    let mut size = window.inner_size();

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *control_flow = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed {
                        theme_idx = (theme_idx + 1) % themes.len();
                        tracing::debug!(theme = themes[theme_idx].name, "theme switched");
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let w = size.width.max(1);
                let h = size.height.max(1);
                surface
                    .resize(NonZeroU32::new(w).unwrap(), NonZeroU32::new(h).unwrap())
                    .ok();

                let mut opts = RenderOptions::default();
                opts.width = w as i32;
                opts.height = h as i32;
                opts.theme = themes[theme_idx];

                let (rgba, _, _, _) = match chart.render_to_rgba8(&opts) {
                    Ok(frame) => frame,
                    Err(e) => {
                        tracing::error!("render failed: {e}");
                        return;
                    }
                };
                let mut frame = match surface.buffer_mut() {
                    Ok(f) => f,
                    Err(e) => {
                        tracing::error!("frame buffer: {e:?}");
                        return;
                    }
                };
                // Softbuffer expects packed u32 words; BGRA-as-ARGB is common.
                let max_px = frame.len().min(rgba.len() / 4);
                for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
                    let r = px[0] as u32;
                    let g = px[1] as u32;
                    let b = px[2] as u32;
                    let a = px[3] as u32;
                    frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
                }
                if let Err(e) = frame.present() {
                    tracing::error!("present error: {e:?}");
                }
            }
            _ => {}
        }
    });
}
