use super::deal::{Deal, Seat};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vulnerability {
    #[serde(rename = "None")]
    None,
    #[serde(rename = "NS")]
    NorthSouth,
    #[serde(rename = "EW")]
    EastWest,
    #[serde(rename = "Both")]
    Both,
}

impl Vulnerability {
    /// Map the PBN vocabulary to ours. Only the four exact literals are
    /// accepted; anything else leaves the board's vulnerability unset.
    pub fn from_pbn(s: &str) -> Option<Self> {
        match s {
            "None" => Some(Vulnerability::None),
            "NS" => Some(Vulnerability::NorthSouth),
            "EW" => Some(Vulnerability::EastWest),
            "All" => Some(Vulnerability::Both),
            _ => None,
        }
    }

    pub fn to_pbn(&self) -> &'static str {
        match self {
            Vulnerability::None => "None",
            Vulnerability::NorthSouth => "NS",
            Vulnerability::EastWest => "EW",
            Vulnerability::Both => "All",
        }
    }

    pub fn is_vulnerable(&self, seat: Seat) -> bool {
        match self {
            Vulnerability::None => false,
            Vulnerability::Both => true,
            Vulnerability::NorthSouth => matches!(seat, Seat::North | Seat::South),
            Vulnerability::EastWest => matches!(seat, Seat::East | Seat::West),
        }
    }

    /// Standard 16-board vulnerability rotation. Board numbers start at 1.
    pub fn from_board_number(board: u32) -> Self {
        debug_assert!(board >= 1, "board numbers start at 1");
        match (board - 1) % 16 {
            0 | 7 | 10 | 13 => Vulnerability::None,
            1 | 4 | 11 | 14 => Vulnerability::NorthSouth,
            2 | 5 | 8 | 15 => Vulnerability::EastWest,
            3 | 6 | 9 | 12 => Vulnerability::Both,
            _ => unreachable!(),
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Vulnerability::None => write!(f, "None Vul"),
            Vulnerability::NorthSouth => write!(f, "N-S Vul"),
            Vulnerability::EastWest => write!(f, "E-W Vul"),
            Vulnerability::Both => write!(f, "Both Vul"),
        }
    }
}

/// Dealer for a board number using the standard rotation. Board numbers
/// start at 1.
pub fn dealer_from_board_number(board: u32) -> Seat {
    debug_assert!(board >= 1, "board numbers start at 1");
    match (board - 1) % 4 {
        0 => Seat::North,
        1 => Seat::East,
        2 => Seat::South,
        3 => Seat::West,
        _ => unreachable!(),
    }
}

/// One fully-specified board as decoded from a hand record.
///
/// Ownership transfers to the caller on decode; the decoder keeps nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardRecord {
    #[serde(rename = "boardNumber")]
    pub number: u32,
    pub dealer: Seat,
    pub vulnerability: Vulnerability,
    pub hands: Deal,
}

impl BoardRecord {
    pub fn title(&self) -> String {
        format!(
            "Board {} • {} Deals • {}",
            self.number, self.dealer, self.vulnerability
        )
    }

    /// Whether dealer and vulnerability match the standard rotation for
    /// this board number. Hand records that renumber or rotate boards for
    /// an event legitimately deviate; the CLI flags those on display.
    pub fn follows_standard_rotation(&self) -> bool {
        self.dealer == dealer_from_board_number(self.number)
            && self.vulnerability == Vulnerability::from_board_number(self.number)
    }

    /// HCP per seat as [N, E, S, W]
    pub fn all_hcp(&self) -> [u8; 4] {
        [
            self.hands.north.hcp(),
            self.hands.east.hcp(),
            self.hands.south.hcp(),
            self.hands.west.hcp(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::hand::Hand;

    #[test]
    fn test_vulnerability_vocabulary() {
        assert_eq!(Vulnerability::from_pbn("None"), Some(Vulnerability::None));
        assert_eq!(Vulnerability::from_pbn("NS"), Some(Vulnerability::NorthSouth));
        assert_eq!(Vulnerability::from_pbn("EW"), Some(Vulnerability::EastWest));
        assert_eq!(Vulnerability::from_pbn("All"), Some(Vulnerability::Both));

        // only the exact literals are mapped
        assert_eq!(Vulnerability::from_pbn("Both"), None);
        assert_eq!(Vulnerability::from_pbn("none"), None);
        assert_eq!(Vulnerability::from_pbn("N-S"), None);
        assert_eq!(Vulnerability::from_pbn("Love"), None);
        assert_eq!(Vulnerability::from_pbn(""), None);
    }

    #[test]
    fn test_vulnerability_check() {
        assert!(!Vulnerability::None.is_vulnerable(Seat::North));
        assert!(Vulnerability::Both.is_vulnerable(Seat::West));
        assert!(Vulnerability::NorthSouth.is_vulnerable(Seat::South));
        assert!(!Vulnerability::NorthSouth.is_vulnerable(Seat::East));
    }

    #[test]
    fn test_vulnerability_from_board() {
        assert_eq!(Vulnerability::from_board_number(1), Vulnerability::None);
        assert_eq!(Vulnerability::from_board_number(2), Vulnerability::NorthSouth);
        assert_eq!(Vulnerability::from_board_number(3), Vulnerability::EastWest);
        assert_eq!(Vulnerability::from_board_number(4), Vulnerability::Both);
        assert_eq!(Vulnerability::from_board_number(17), Vulnerability::None);
    }

    #[test]
    fn test_dealer_from_board() {
        assert_eq!(dealer_from_board_number(1), Seat::North);
        assert_eq!(dealer_from_board_number(2), Seat::East);
        assert_eq!(dealer_from_board_number(3), Seat::South);
        assert_eq!(dealer_from_board_number(4), Seat::West);
        assert_eq!(dealer_from_board_number(5), Seat::North);
    }

    #[test]
    #[should_panic(expected = "board numbers start at 1")]
    fn test_vulnerability_from_board_zero_rejected() {
        Vulnerability::from_board_number(0);
    }

    #[test]
    #[should_panic(expected = "board numbers start at 1")]
    fn test_dealer_from_board_zero_rejected() {
        dealer_from_board_number(0);
    }

    #[test]
    fn test_follows_standard_rotation() {
        // board 3: South deals, EW vulnerable
        let mut record = BoardRecord {
            number: 3,
            dealer: Seat::South,
            vulnerability: Vulnerability::EastWest,
            hands: Deal::new(),
        };
        assert!(record.follows_standard_rotation());

        record.dealer = Seat::North;
        assert!(!record.follows_standard_rotation());

        record.dealer = Seat::South;
        record.vulnerability = Vulnerability::Both;
        assert!(!record.follows_standard_rotation());
    }

    #[test]
    fn test_board_record_json_shape() {
        let mut hands = Deal::new();
        hands.set_hand(Seat::North, Hand::from_group("AKQ.234.AKQ.2345").unwrap());

        let record = BoardRecord {
            number: 1,
            dealer: Seat::North,
            vulnerability: Vulnerability::Both,
            hands,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["boardNumber"], 1);
        assert_eq!(json["dealer"], "N");
        assert_eq!(json["vulnerability"], "Both");
        assert_eq!(json["hands"]["N"]["S"], "AKQ");
        assert_eq!(json["hands"]["N"]["H"], "234");
        assert_eq!(json["hands"]["E"]["S"], "");
    }

    #[test]
    fn test_board_title() {
        let record = BoardRecord {
            number: 7,
            dealer: Seat::South,
            vulnerability: Vulnerability::Both,
            hands: Deal::new(),
        };
        assert_eq!(record.title(), "Board 7 • South Deals • Both Vul");
    }
}
