// File: crates/skyline-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use skyline_core::{sample_heights, Axis, Chart, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    let people = sample_heights();
    let mut chart = Chart::new();
    chart.x_axis = Axis::category("Name");
    chart.y_axis = Axis::numeric("Height (cm)").with_max(220.0);
    chart.add_series(Series::bind(&people, |p| p.name.clone(), |p| p.height).with_labels(true));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify the in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
