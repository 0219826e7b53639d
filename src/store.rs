use crate::error::{Result, TableTalkError};
use crate::model::BoardRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Persistence seam for games and their boards.
///
/// In production this is backed by a relational database; here it is an
/// explicit dependency handed to the ingestion adapter so the core stays
/// testable without one. Implementations are expected to enforce uniqueness
/// of (game, board number).
pub trait GameStore {
    /// Persist one decoded board under the given game
    fn create_board(&mut self, game_id: &str, board: &BoardRecord) -> Result<()>;

    /// Record how many boards the game's hand record contained
    fn set_board_count(&mut self, game_id: &str, count: usize) -> Result<()>;
}

/// One game's stored state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameEntry {
    #[serde(rename = "totalBoards")]
    pub total_boards: usize,
    pub boards: Vec<BoardRecord>,
}

impl GameEntry {
    fn has_board(&self, number: u32) -> bool {
        self.boards.iter().any(|b| b.number == number)
    }
}

/// In-memory store for tests and embedders
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: BTreeMap<String, GameEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_game(&mut self, game_id: &str) {
        self.games.entry(game_id.to_string()).or_default();
    }

    pub fn game(&self, game_id: &str) -> Option<&GameEntry> {
        self.games.get(game_id)
    }
}

impl GameStore for MemoryStore {
    fn create_board(&mut self, game_id: &str, board: &BoardRecord) -> Result<()> {
        let game = self
            .games
            .get_mut(game_id)
            .ok_or_else(|| TableTalkError::GameNotFound(game_id.to_string()))?;
        if game.has_board(board.number) {
            return Err(TableTalkError::DuplicateBoard {
                game_id: game_id.to_string(),
                board: board.number,
            });
        }
        game.boards.push(board.clone());
        Ok(())
    }

    fn set_board_count(&mut self, game_id: &str, count: usize) -> Result<()> {
        let game = self
            .games
            .get_mut(game_id)
            .ok_or_else(|| TableTalkError::GameNotFound(game_id.to_string()))?;
        game.total_boards = count;
        Ok(())
    }
}

/// File-backed store: one JSON document holding every game.
///
/// Loads eagerly, mutates in memory, writes back on `save`. Good enough for
/// the CLI; anything multi-user belongs behind a real database.
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    games: BTreeMap<String, GameEntry>,
}

impl JsonStore {
    /// Open an existing store file, or start an empty one if absent
    pub fn open(path: &Path) -> Result<Self> {
        let games = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        Ok(Self {
            path: path.to_path_buf(),
            games,
        })
    }

    pub fn save(&self) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.games)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn ensure_game(&mut self, game_id: &str) {
        self.games.entry(game_id.to_string()).or_default();
    }

    pub fn game(&self, game_id: &str) -> Option<&GameEntry> {
        self.games.get(game_id)
    }
}

impl GameStore for JsonStore {
    fn create_board(&mut self, game_id: &str, board: &BoardRecord) -> Result<()> {
        let game = self
            .games
            .get_mut(game_id)
            .ok_or_else(|| TableTalkError::GameNotFound(game_id.to_string()))?;
        if game.has_board(board.number) {
            return Err(TableTalkError::DuplicateBoard {
                game_id: game_id.to_string(),
                board: board.number,
            });
        }
        game.boards.push(board.clone());
        Ok(())
    }

    fn set_board_count(&mut self, game_id: &str, count: usize) -> Result<()> {
        let game = self
            .games
            .get_mut(game_id)
            .ok_or_else(|| TableTalkError::GameNotFound(game_id.to_string()))?;
        game.total_boards = count;
        Ok(())
    }
}
