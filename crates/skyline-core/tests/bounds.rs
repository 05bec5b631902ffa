// File: crates/skyline-core/tests/bounds.rs
// Purpose: Numeric upper-bound resolution with and without a configured max.

use skyline_core::{Axis, CategoryPoint, Chart, Series};

#[test]
fn configured_max_wins_over_data() {
    let axis = Axis::numeric("Height (cm)").with_max(220.0);
    assert_eq!(axis.upper_bound(500.0), 220.0);
    assert_eq!(axis.upper_bound(10.0), 220.0);
}

#[test]
fn unbounded_axis_pads_data_max() {
    let axis = Axis::numeric("Height (cm)");
    let top = axis.upper_bound(200.0);
    assert!(top > 200.0, "headroom expected above the data max");
    assert!(top <= 212.0, "headroom should stay modest");
}

#[test]
fn empty_chart_resolves_nonzero_ceiling() {
    let chart = Chart::new();
    assert!(chart.value_ceiling() > 0.0);
}

#[test]
fn chart_ceiling_spans_all_series() {
    let mut chart = Chart::new();
    chart.add_series(Series::new(vec![CategoryPoint { category: "a".into(), value: 10.0 }]));
    chart.add_series(Series::new(vec![CategoryPoint { category: "b".into(), value: 40.0 }]));
    assert!(chart.value_ceiling() >= 40.0);
}
