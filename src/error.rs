use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableTalkError {
    #[error("Game not found: {0}")]
    GameNotFound(String),

    #[error("Board {board} already exists in game {game_id}")]
    DuplicateBoard { game_id: String, board: u32 },

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TableTalkError>;
