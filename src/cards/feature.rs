//! Card features.
//!
//! Every card has four independent features (number, color, shape, fill),
//! each taking one of three values. The engine never interprets the values:
//! whether `A` means "one", "red", or "diamond" is up to the view layer.

use serde::{Deserialize, Serialize};

/// One of the three values a feature can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FeatureValue {
    A,
    B,
    C,
}

impl FeatureValue {
    /// All values in declaration order.
    pub const ALL: [FeatureValue; 3] = [FeatureValue::A, FeatureValue::B, FeatureValue::C];

    /// Position of this value in `ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            FeatureValue::A => 'A',
            FeatureValue::B => 'B',
            FeatureValue::C => 'C',
        };
        write!(f, "{c}")
    }
}

/// The four feature axes of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Number,
    Color,
    Shape,
    Fill,
}

impl Feature {
    /// All features, in the order cards are generated.
    pub const ALL: [Feature; 4] = [Feature::Number, Feature::Color, Feature::Shape, Feature::Fill];

    /// Lower-case name for display.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Feature::Number => "number",
            Feature::Color => "color",
            Feature::Shape => "shape",
            Feature::Fill => "fill",
        }
    }
}
