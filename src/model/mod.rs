pub mod board;
pub mod card;
pub mod deal;
pub mod hand;

pub use board::{dealer_from_board_number, BoardRecord, Vulnerability};
pub use card::{Card, Rank, Suit};
pub use deal::{Deal, Seat};
pub use hand::Hand;
