pub mod reader;
pub mod validate;

pub use reader::{decode, decode_verbose, DecodeWarning, Decoded};
pub use validate::{validate_deck, DeckViolation};
