//! Unordered three-card combinations.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Three card ids, stored sorted so that any selection order of the same
/// cards hashes and compares equal.
///
/// ```
/// use set_engine::core::CardId;
/// use set_engine::rules::Triple;
///
/// let a = Triple::new(CardId(9), CardId(2), CardId(5));
/// let b = Triple::new(CardId(5), CardId(9), CardId(2));
/// assert_eq!(a, b);
/// assert_eq!(a.ids(), [CardId(2), CardId(5), CardId(9)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triple([CardId; 3]);

impl Triple {
    /// Create a triple from three ids in any order.
    #[must_use]
    pub fn new(a: CardId, b: CardId, c: CardId) -> Self {
        let mut ids = [a, b, c];
        ids.sort_unstable();
        Self(ids)
    }

    /// The ids, ascending.
    #[must_use]
    pub fn ids(&self) -> [CardId; 3] {
        self.0
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{{{}, {}, {}}}", a.raw(), b.raw(), c.raw())
    }
}
