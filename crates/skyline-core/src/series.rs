// File: crates/skyline-core/src/series.rs
// Summary: Column series and the field-selector binding that resolves raw items.

/// One resolved column: a category label and its value.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryPoint {
    pub category: String,
    pub value: f64,
}

/// A bound column series. Points keep the input order of the items they
/// were resolved from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    pub points: Vec<CategoryPoint>,
    pub show_labels: bool,
}

impl Series {
    pub fn new(points: Vec<CategoryPoint>) -> Self {
        Self { points, show_labels: false }
    }

    /// Resolve `items` through a pair of field selectors: `x` names the
    /// category of an item, `y` reads its value.
    pub fn bind<T, X, Y>(items: &[T], x: X, y: Y) -> Self
    where
        X: Fn(&T) -> String,
        Y: Fn(&T) -> f64,
    {
        let points = items
            .iter()
            .map(|item| CategoryPoint { category: x(item), value: y(item) })
            .collect();
        Self::new(points)
    }

    /// Toggle per-column value labels.
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Category labels in first-seen order; duplicates collapse onto one slot.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.points.len());
        for p in &self.points {
            if !out.contains(&p.category.as_str()) {
                out.push(p.category.as_str());
            }
        }
        out
    }

    /// Largest value in the series, or 0.0 when empty. Columns rise from a
    /// zero baseline, so negative values never extend the range.
    pub fn max_value(&self) -> f64 {
        self.points.iter().fold(0.0_f64, |m, p| m.max(p.value))
    }
}
