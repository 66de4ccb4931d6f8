use std::io;

use thiserror::Error;

/// Failure modes of board access and state reconstruction.
///
/// Collisions and snake death are ordinary simulation outcomes reported
/// through each snake's liveness flag, never through this enum.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("cell ({row}, {col}) lies outside the board")]
    OutOfBounds { row: usize, col: usize },
    #[error("snake chain with tail at ({row}, {col}) never reaches a head")]
    MalformedChain { row: usize, col: usize },
    #[error("snake chain with tail at ({row}, {col}) ends in a dead head")]
    DeadHeadAtLoad { row: usize, col: usize },
    #[error("board text contains no rows")]
    EmptyBoard,
    #[error("a {rows}x{cols} board has no interior inside its border")]
    BoardTooSmall { rows: usize, cols: usize },
    #[error("board could not be read")]
    Io(#[from] io::Error),
}
