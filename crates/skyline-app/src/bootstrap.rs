// File: crates/skyline-app/src/bootstrap.rs
// Summary: Builds the chart shown at startup: fixed dataset, two axes, one labelled column series.

use skyline_core::{sample_heights, Axis, Chart, Series};

/// Assemble the startup chart. Pure composition; takes no external input.
pub fn height_chart() -> Chart {
    let people = sample_heights();

    let mut chart = Chart::new();
    chart.x_axis = Axis::category("Name");
    chart.y_axis = Axis::numeric("Height (cm)").with_max(220.0);
    chart.add_series(Series::bind(&people, |p| p.name.clone(), |p| p.height).with_labels(true));
    chart
}
