use super::card::{Rank, Suit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One seat's cards, grouped by suit.
///
/// Holdings are kept as the raw rank characters from the source document.
/// The decoder does not reorder or validate them, so "234" stays "234".
/// An empty string is a void suit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    #[serde(rename = "S")]
    pub spades: String,
    #[serde(rename = "H")]
    pub hearts: String,
    #[serde(rename = "D")]
    pub diamonds: String,
    #[serde(rename = "C")]
    pub clubs: String,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn holding(&self, suit: Suit) -> &str {
        match suit {
            Suit::Spades => &self.spades,
            Suit::Hearts => &self.hearts,
            Suit::Diamonds => &self.diamonds,
            Suit::Clubs => &self.clubs,
        }
    }

    /// Parse one deal-string group, "spades.hearts.diamonds.clubs".
    /// Anything other than exactly four dot-separated fields is rejected.
    pub fn from_group(s: &str) -> Option<Self> {
        let fields: Vec<&str> = s.split('.').collect();
        if fields.len() != 4 {
            return None;
        }

        Some(Hand {
            spades: fields[0].to_string(),
            hearts: fields[1].to_string(),
            diamonds: fields[2].to_string(),
            clubs: fields[3].to_string(),
        })
    }

    /// Format hand as a PBN deal-string group
    pub fn to_group(&self) -> String {
        format!(
            "{}.{}.{}.{}",
            self.spades, self.hearts, self.diamonds, self.clubs
        )
    }

    pub fn card_count(&self) -> usize {
        self.spades.chars().count()
            + self.hearts.chars().count()
            + self.diamonds.chars().count()
            + self.clubs.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.card_count() == 0
    }

    /// High-card points; characters that are not rank characters count zero
    pub fn hcp(&self) -> u8 {
        Suit::ALL
            .iter()
            .flat_map(|&suit| self.holding(suit).chars())
            .filter_map(Rank::from_char)
            .map(|r| r.hcp_value())
            .sum()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "♠{} ♥{} ♦{} ♣{}",
            self.spades, self.hearts, self.diamonds, self.clubs
        )
    }
}
