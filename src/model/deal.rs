use super::hand::Hand;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Seat::North),
            'E' => Some(Seat::East),
            'S' => Some(Seat::South),
            'W' => Some(Seat::West),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }

    pub fn next(&self) -> Seat {
        match self {
            Seat::North => Seat::East,
            Seat::East => Seat::South,
            Seat::South => Seat::West,
            Seat::West => Seat::North,
        }
    }

    pub fn partner(&self) -> Seat {
        self.next().next()
    }

    /// Seats in clockwise order starting from this seat
    pub fn clockwise_from(&self) -> [Seat; 4] {
        [*self, self.next(), self.next().next(), self.next().next().next()]
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::North => write!(f, "North"),
            Seat::East => write!(f, "East"),
            Seat::South => write!(f, "South"),
            Seat::West => write!(f, "West"),
        }
    }
}

/// All four hands of one board, keyed by seat
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(rename = "N")]
    pub north: Hand,
    #[serde(rename = "E")]
    pub east: Hand,
    #[serde(rename = "S")]
    pub south: Hand,
    #[serde(rename = "W")]
    pub west: Hand,
}

impl Deal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        match seat {
            Seat::North => &self.north,
            Seat::East => &self.east,
            Seat::South => &self.south,
            Seat::West => &self.west,
        }
    }

    pub fn set_hand(&mut self, seat: Seat, hand: Hand) {
        match seat {
            Seat::North => self.north = hand,
            Seat::East => self.east = hand,
            Seat::South => self.south = hand,
            Seat::West => self.west = hand,
        }
    }

    /// Format deal in PBN notation anchored at `first`
    pub fn to_pbn(&self, first: Seat) -> String {
        let parts: Vec<String> = first
            .clockwise_from()
            .iter()
            .map(|&seat| self.hand(seat).to_group())
            .collect();
        format!("{}:{}", first.to_char(), parts.join(" "))
    }
}
