//! The match predicate.
//!
//! Three cards match iff, for every feature, their values are either all
//! the same or all different. Equivalently: no value appears exactly twice.

use crate::cards::{Card, Feature, FeatureValue};

/// Whether three values of one feature pass: all equal or all distinct.
#[must_use]
pub fn values_match(values: [FeatureValue; 3]) -> bool {
    let mut counts = [0u8; 3];
    for value in values {
        counts[value.index()] += 1;
    }
    !counts.contains(&2)
}

/// Whether three cards form a match on all four features.
#[must_use]
pub fn is_match(a: &Card, b: &Card, c: &Card) -> bool {
    Feature::ALL
        .iter()
        .all(|&f| values_match([a.feature(f), b.feature(f), c.feature(f)]))
}
