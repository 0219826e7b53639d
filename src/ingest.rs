use crate::error::Result;
use crate::pbn::{decode_verbose, DecodeWarning};
use crate::store::GameStore;

/// What one ingestion pass did
#[derive(Debug)]
pub struct IngestSummary {
    /// Boards the hand record decoded to
    pub decoded: usize,
    /// Boards actually persisted
    pub created: usize,
    /// Diagnostics from the decode pass
    pub warnings: Vec<DecodeWarning>,
}

/// Decode a PBN document and persist its boards under `game_id`.
///
/// Boards are created one at a time in decode order. A board that the store
/// refuses (duplicate number, constraint violation) is logged and skipped;
/// the rest are still attempted, so a single bad board never sinks the game.
/// The game's board count is set to the number decoded, zero included; a
/// game with no boards is a valid state, not an error.
pub fn ingest_boards(
    store: &mut dyn GameStore,
    game_id: &str,
    pbn: &str,
) -> Result<IngestSummary> {
    let decoded = decode_verbose(pbn);
    for warning in &decoded.warnings {
        log::debug!("game {game_id}: {warning}");
    }

    let mut created = 0;
    for board in &decoded.boards {
        match store.create_board(game_id, board) {
            Ok(()) => created += 1,
            Err(err) => {
                log::warn!(
                    "game {game_id}: failed to create board {}: {err}",
                    board.number
                );
            }
        }
    }

    store.set_board_count(game_id, decoded.boards.len())?;

    Ok(IngestSummary {
        decoded: decoded.boards.len(),
        created,
        warnings: decoded.warnings,
    })
}
