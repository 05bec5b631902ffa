// File: crates/skyline-demo/src/main.rs
// Summary: Headless demo; renders the sample height chart to a PNG on disk.

use anyhow::{Context, Result};
use skyline_core::{sample_heights, Axis, Chart, RenderOptions, Series};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Accept an output path from the CLI or fall back under target/out
    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/out/skyline.png"));

    let people = sample_heights();
    println!("Rendering {} columns", people.len());

    let mut chart = Chart::new();
    chart.x_axis = Axis::category("Name");
    chart.y_axis = Axis::numeric("Height (cm)").with_max(220.0);
    chart.add_series(Series::bind(&people, |p| p.name.clone(), |p| p.height).with_labels(true));

    let opts = RenderOptions::default();
    chart
        .render_to_png(&opts, &out)
        .with_context(|| format!("rendering '{}'", out.display()))?;
    println!("Wrote {}", out.display());

    Ok(())
}
