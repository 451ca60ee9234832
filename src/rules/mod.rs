//! Match rules.
//!
//! - `is_match`: the per-feature all-same-or-all-different predicate
//! - `find_all_matches`: exhaustive search over a tableau
//! - `Triple`: an unordered combination of three card ids
//!
//! The game state calls into these; nothing here holds state.

pub mod matching;
pub mod search;
pub mod triple;

pub use matching::{is_match, values_match};
pub use search::find_all_matches;
pub use triple::Triple;
