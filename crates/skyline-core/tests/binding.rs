// File: crates/skyline-core/tests/binding.rs
// Purpose: Field-selector binding semantics and the built-in dataset's bounds.

use skyline_core::{sample_heights, CategoryPoint, Series};

#[test]
fn sample_dataset_fits_numeric_cap() {
    let people = sample_heights();
    assert!(!people.is_empty());
    for p in &people {
        assert!(
            p.height >= 0.0 && p.height <= 220.0,
            "{} is outside the displayable range",
            p.name
        );
    }
}

#[test]
fn selectors_resolve_name_and_height() {
    let people = sample_heights();
    let series = Series::bind(&people, |p| p.name.clone(), |p| p.height);

    assert_eq!(series.points.len(), people.len());
    for (point, person) in series.points.iter().zip(&people) {
        assert_eq!(point.category, person.name);
        assert_eq!(point.value, person.height);
    }
}

#[test]
fn binding_preserves_input_order() {
    let people = sample_heights();
    let series = Series::bind(&people, |p| p.name.clone(), |p| p.height);
    let names: Vec<_> = people.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(series.categories(), names);
}

#[test]
fn duplicate_categories_collapse_onto_one_slot() {
    let series = Series::new(vec![
        CategoryPoint { category: "b".into(), value: 1.0 },
        CategoryPoint { category: "a".into(), value: 2.0 },
        CategoryPoint { category: "b".into(), value: 3.0 },
    ]);
    assert_eq!(series.categories(), vec!["b", "a"]);
}

#[test]
fn max_value_floors_at_zero() {
    let series = Series::new(vec![
        CategoryPoint { category: "a".into(), value: -5.0 },
        CategoryPoint { category: "b".into(), value: -1.0 },
    ]);
    assert_eq!(series.max_value(), 0.0);
    assert_eq!(Series::default().max_value(), 0.0);
}
