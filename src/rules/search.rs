//! Exhaustive match search over the dealt cards.
//!
//! O(N³) in the number of playing cards. Tableaus stay in the tens, so a
//! full search is at most a few thousand predicate checks.

use super::matching::is_match;
use super::triple::Triple;
use crate::cards::Card;

/// All matching triples among `cards`, in `i < j < k` order.
#[must_use]
pub fn find_all_matches(cards: &[Card]) -> Vec<Triple> {
    let n = cards.len();
    let mut found = Vec::new();

    if n < 3 {
        return found;
    }

    for i in 0..n - 2 {
        for j in i + 1..n - 1 {
            for k in j + 1..n {
                let (a, b, c) = (&cards[i], &cards[j], &cards[k]);
                if is_match(a, b, c) {
                    found.push(Triple::new(a.id, b.id, c.id));
                }
            }
        }
    }

    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{generate_deck, FeatureValue};
    use crate::core::CardId;

    #[test]
    fn test_too_few_cards() {
        let deck = generate_deck();
        assert!(find_all_matches(&deck[..0]).is_empty());
        assert!(find_all_matches(&deck[..2]).is_empty());
    }

    #[test]
    fn test_first_three_of_canonical_deck() {
        // Canonical order varies `fill` fastest: AAAA, AAAB, AAAC.
        let deck = generate_deck();
        assert_eq!(deck[2].fill, FeatureValue::C);
        assert_eq!(
            find_all_matches(&deck[..3]),
            vec![Triple::new(CardId(0), CardId(1), CardId(2))]
        );
    }

    #[test]
    fn test_full_deck_match_count() {
        // Any two cards determine exactly one third: C(81,2) / 3 = 1080.
        assert_eq!(find_all_matches(&generate_deck()).len(), 1080);
    }
}
