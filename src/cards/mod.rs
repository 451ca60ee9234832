//! Card model: features, cards, deck generation, and display views.
//!
//! ## Key Types
//!
//! - `FeatureValue`: One of three values for a feature
//! - `Feature`: The four feature axes
//! - `Card`: Identity, features, lifecycle state
//! - `CardView`: A card plus derived highlight flags

pub mod feature;
pub mod card;
pub mod deck;
pub mod view;

pub use feature::{Feature, FeatureValue};
pub use card::{Card, CardState};
pub use deck::{generate_deck, shuffled_deck, DECK_SIZE};
pub use view::CardView;
