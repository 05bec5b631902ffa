// File: crates/skyline-core/src/data.rs
// Summary: Name/height data points and the built-in sample dataset.

/// One named measurement, displayed as a single column.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub name: String,
    pub height: f64,
}

impl DataPoint {
    pub fn new(name: impl Into<String>, height: f64) -> Self {
        Self { name: name.into(), height }
    }
}

/// The fixed dataset the bundled binaries display. Heights in centimetres;
/// all values sit inside the chart's 220 cm axis cap.
pub fn sample_heights() -> Vec<DataPoint> {
    vec![
        DataPoint::new("David", 180.0),
        DataPoint::new("Maria", 163.0),
        DataPoint::new("Steve", 198.0),
        DataPoint::new("Joel", 172.0),
        DataPoint::new("Alina", 157.0),
        DataPoint::new("Tomas", 190.0),
    ]
}
