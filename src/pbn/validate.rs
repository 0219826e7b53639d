use crate::model::{Card, Deal, Rank, Seat, Suit};
use std::collections::BTreeMap;
use thiserror::Error;

/// A way a decoded deal can fail to be a legal 52-card deck.
///
/// The decoder deliberately accepts anything; callers that care run this
/// pass afterwards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckViolation {
    #[error("{seat} {suit}: {ch:?} is not a rank character")]
    UnknownRank { seat: Seat, suit: Suit, ch: char },

    #[error("{card} held by both {first} and {second}")]
    DuplicateCard {
        card: Card,
        first: Seat,
        second: Seat,
    },

    #[error("{card} is missing from the deal")]
    MissingCard { card: Card },

    #[error("{seat} has {count} cards, expected 13")]
    WrongHandSize { seat: Seat, count: usize },
}

/// Check a deal against the 52-card deck.
///
/// Returns every violation found; an empty list means a clean deal. Kept
/// separate from decoding so tolerant parsing and strict checking stay
/// independent.
pub fn validate_deck(deal: &Deal) -> Vec<DeckViolation> {
    let mut violations = Vec::new();
    let mut seen: BTreeMap<Card, Seat> = BTreeMap::new();

    for seat in Seat::ALL {
        let hand = deal.hand(seat);
        for suit in Suit::ALL {
            for ch in hand.holding(suit).chars() {
                let Some(rank) = Rank::from_char(ch) else {
                    violations.push(DeckViolation::UnknownRank { seat, suit, ch });
                    continue;
                };
                let card = Card::new(suit, rank);
                if let Some(&first) = seen.get(&card) {
                    violations.push(DeckViolation::DuplicateCard {
                        card,
                        first,
                        second: seat,
                    });
                } else {
                    seen.insert(card, seat);
                }
            }
        }
        let count = hand.card_count();
        if count != 13 {
            violations.push(DeckViolation::WrongHandSize { seat, count });
        }
    }

    for suit in Suit::ALL {
        for rank in Rank::ALL {
            let card = Card::new(suit, rank);
            if !seen.contains_key(&card) {
                violations.push(DeckViolation::MissingCard { card });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Hand;

    #[test]
    fn test_clean_deck() {
        let mut clean = Deal::new();
        clean.set_hand(Seat::North, Hand::from_group("AKQJ.AKQJ.AKQ.AK").unwrap());
        clean.set_hand(Seat::East, Hand::from_group("T987.T987.JT9.QJ").unwrap());
        clean.set_hand(Seat::South, Hand::from_group("6543.6543.876.T9").unwrap());
        clean.set_hand(Seat::West, Hand::from_group("2.2.5432.8765432").unwrap());
        assert_eq!(validate_deck(&clean), vec![]);
    }

    #[test]
    fn test_duplicate_card() {
        let mut deal = Deal::new();
        deal.set_hand(Seat::North, Hand::from_group("AKQJ.AKQJ.AKQ.AK").unwrap());
        deal.set_hand(Seat::East, Hand::from_group("A987.T987.JT9.QJ").unwrap());
        deal.set_hand(Seat::South, Hand::from_group("6543.6543.876.T9").unwrap());
        deal.set_hand(Seat::West, Hand::from_group("2.2.5432.8765432").unwrap());

        let violations = validate_deck(&deal);
        assert!(violations.contains(&DeckViolation::DuplicateCard {
            card: Card::new(Suit::Spades, Rank::Ace),
            first: Seat::North,
            second: Seat::East,
        }));
        // the spade ten never appears, so it is reported missing
        assert!(violations.contains(&DeckViolation::MissingCard {
            card: Card::new(Suit::Spades, Rank::Ten),
        }));
    }

    #[test]
    fn test_unknown_rank_character() {
        let mut deal = Deal::new();
        deal.set_hand(Seat::North, Hand::from_group("AKX.234.AKQ.2345").unwrap());

        let violations = validate_deck(&deal);
        assert!(violations.contains(&DeckViolation::UnknownRank {
            seat: Seat::North,
            suit: Suit::Spades,
            ch: 'X',
        }));
    }

    #[test]
    fn test_wrong_hand_sizes() {
        let violations = validate_deck(&Deal::new());
        for seat in Seat::ALL {
            assert!(violations.contains(&DeckViolation::WrongHandSize { seat, count: 0 }));
        }
        // all 52 cards reported missing for the empty deal
        let missing = violations
            .iter()
            .filter(|v| matches!(v, DeckViolation::MissingCard { .. }))
            .count();
        assert_eq!(missing, 52);
    }
}
