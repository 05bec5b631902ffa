// File: crates/skyline-core/src/grid.rs
// Summary: Tick layout helpers for the numeric axis.

/// Tick values from zero up to `max`, stepping in 1/2/5 x 10^k increments
/// and aiming for roughly `target` intervals. Always contains 0.0; never
/// emits a tick above `max`.
pub fn nice_ticks(max: f64, target: usize) -> Vec<f64> {
    if !(max > 0.0) || target == 0 {
        return vec![0.0];
    }
    let raw = max / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let step = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    } * mag;

    let mut out = Vec::new();
    let mut i = 0usize;
    loop {
        let v = step * i as f64;
        if v > max * (1.0 + 1e-9) {
            break;
        }
        out.push(v);
        i += 1;
    }
    out
}
