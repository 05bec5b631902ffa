// File: crates/skyline-core/src/chart.rs
// Summary: Chart composition and the Skia CPU raster pipeline for column charts.

use skia_safe as skia;

use crate::axis::Axis;
use crate::error::ChartError;
use crate::grid::nice_ticks;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Suppress all text (axis titles, ticks, category and value labels).
    /// Pixel tests turn this off to avoid font variance across platforms.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::category(""),
            y_axis: Axis::numeric(""),
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Category labels across all series, first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for s in &self.series {
            for p in &s.points {
                if !out.contains(&p.category.as_str()) {
                    out.push(p.category.as_str());
                }
            }
        }
        out
    }

    /// Resolved top of the numeric range across all series.
    pub fn value_ceiling(&self) -> f64 {
        let data_max = self
            .series
            .iter()
            .map(|s| s.max_value())
            .fold(0.0_f64, f64::max);
        self.y_axis.upper_bound(data_max)
    }

    /// Render the chart to a PNG file, creating parent directories as needed.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), ChartError> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render the chart and return the encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>, ChartError> {
        let mut surface = raster_surface(opts)?;
        self.paint(surface.canvas(), opts);
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a raw RGBA8 buffer: `(pixels, width, height, row stride)`.
    /// The windowed host blits this straight into its surface.
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, u32, u32, usize), ChartError> {
        let mut surface = raster_surface(opts)?;
        self.paint(surface.canvas(), opts);

        let w = opts.width.max(1) as u32;
        let h = opts.height.max(1) as u32;
        let stride = w as usize * 4;
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Readback);
        }
        Ok((pixels, w, h, stride))
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let l = opts.insets.left as i32;
        let t = opts.insets.top as i32;
        let r = opts.width - opts.insets.right as i32;
        let b = opts.height - opts.insets.bottom as i32;
        if r <= l || b <= t {
            return;
        }

        let categories = self.categories();
        let ceiling = self.value_ceiling();
        let ticks = nice_ticks(ceiling, 5);
        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };

        draw_grid(canvas, theme, l, t, r, b, &ticks, ceiling);
        draw_axis_lines(canvas, theme, l, t, r, b);

        let n = categories.len();
        if n > 0 {
            let slot_w = (r - l) as f32 / n as f32;
            let group = self.series.len().max(1) as f32;
            let col_w = (slot_w * 0.62) / group;

            let mut fill = skia::Paint::default();
            fill.set_anti_alias(true);
            fill.set_style(skia::paint::Style::Fill);
            fill.set_color(theme.column);

            for (si, s) in self.series.iter().enumerate() {
                for p in &s.points {
                    let Some(slot) = categories.iter().position(|c| *c == p.category.as_str()) else {
                        continue;
                    };
                    let center = l as f32 + (slot as f32 + 0.5) * slot_w;
                    let group_left = center - col_w * group * 0.5;
                    let x0 = group_left + si as f32 * col_w;
                    let y = scale_y(p.value, ceiling, t, b);
                    let rect = skia::Rect::from_ltrb(x0 + 1.0, y, x0 + col_w - 1.0, b as f32);
                    canvas.draw_rect(rect, &fill);

                    if s.show_labels {
                        if let Some(sh) = &shaper {
                            sh.draw_centered(
                                canvas,
                                &format_value(p.value),
                                x0 + col_w * 0.5,
                                y - 6.0,
                                13.0,
                                theme.value_label,
                                true,
                            );
                        }
                    }
                }
            }

            if let Some(sh) = &shaper {
                for (i, c) in categories.iter().enumerate() {
                    let cx = l as f32 + (i as f32 + 0.5) * slot_w;
                    sh.draw_centered(canvas, c, cx, b as f32 + 22.0, 13.0, theme.tick, false);
                }
            }
        }

        if let Some(sh) = &shaper {
            for &v in &ticks {
                let text = format_value(v);
                let w = sh.measure_width(&text, 12.0, true);
                let y = scale_y(v, ceiling, t, b);
                sh.draw_left(canvas, &text, l as f32 - 10.0 - w, y + 4.0, 12.0, theme.tick, true);
            }
            sh.draw_centered(
                canvas,
                &self.x_axis.title,
                (l + r) as f32 * 0.5,
                b as f32 + 46.0,
                14.0,
                theme.axis_label,
                false,
            );
            sh.draw_left(canvas, &self.y_axis.title, 12.0, t as f32 + 4.0, 14.0, theme.axis_label, false);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn raster_surface(opts: &RenderOptions) -> Result<skia::Surface, ChartError> {
    skia::surfaces::raster_n32_premul((opts.width, opts.height)).ok_or(ChartError::Surface {
        width: opts.width,
        height: opts.height,
    })
}

/// Map a value to its vertical pixel position. Out-of-range values clamp to
/// the plot rect; bounds are a display convention, not a validated contract.
fn scale_y(v: f64, ceiling: f64, t: i32, b: i32) -> f32 {
    let frac = (v / ceiling.max(1e-9)).clamp(0.0, 1.0) as f32;
    b as f32 - frac * (b - t) as f32
}

fn format_value(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{:.0}", v)
    } else {
        format!("{:.1}", v)
    }
}

fn draw_grid(
    canvas: &skia::Canvas,
    theme: &Theme,
    l: i32,
    t: i32,
    r: i32,
    b: i32,
    ticks: &[f64],
    ceiling: f64,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for &v in ticks {
        if v <= 0.0 {
            continue; // the baseline is drawn with the axis lines
        }
        let y = scale_y(v, ceiling, t, b);
        canvas.draw_line((l as f32, y), (r as f32, y), &paint);
    }
}

fn draw_axis_lines(canvas: &skia::Canvas, theme: &Theme, l: i32, t: i32, r: i32, b: i32) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);

    canvas.draw_line((l as f32, b as f32), (r as f32, b as f32), &paint);
    canvas.draw_line((l as f32, t as f32), (l as f32, b as f32), &paint);
}
