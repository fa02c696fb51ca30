use thiserror::Error;

use crate::action::PlayerId;

/// Errors that abort a game run.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("player {player} made an invalid choice: {reason}")]
    InvalidChoice {
        player: PlayerId,
        reason: InvalidChoice,
    },
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(&'static str),
}

/// Details of a pile selection the engine refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidChoice {
    #[error("pile index {0} is out of range")]
    PileIndex(usize),
    #[error("pile {pile} is not available (offered: {offered:?})")]
    PileUnavailable { pile: usize, offered: Vec<usize> },
}
