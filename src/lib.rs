pub mod error;
pub mod ingest;
pub mod model;
pub mod pbn;
pub mod store;

pub use error::{Result, TableTalkError};
pub use model::*;
