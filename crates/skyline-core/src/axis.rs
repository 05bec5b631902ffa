// File: crates/skyline-core/src/axis.rs
// Summary: Axis model: categorical and numeric scales with an optional upper bound.

/// How positions along an axis are produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    /// Discrete labeled slots; positions come from the bound categories.
    Category,
    /// Continuous range from zero up to a resolved upper bound.
    Numeric,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub title: String,
    pub kind: ScaleKind,
    /// Fixed upper bound for numeric axes. `None` resolves from data.
    pub max: Option<f64>,
}

impl Axis {
    pub fn category(title: impl Into<String>) -> Self {
        Self { title: title.into(), kind: ScaleKind::Category, max: None }
    }

    pub fn numeric(title: impl Into<String>) -> Self {
        Self { title: title.into(), kind: ScaleKind::Numeric, max: None }
    }

    pub fn with_max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Effective top of the numeric range: the configured bound when set,
    /// otherwise the data maximum with 5% headroom (1.0 for empty or
    /// non-positive data).
    pub fn upper_bound(&self, data_max: f64) -> f64 {
        match self.max {
            Some(m) => m,
            None if data_max > 0.0 => data_max * 1.05,
            None => 1.0,
        }
    }
}
