use std::fmt;

use serde::{Deserialize, Serialize};

/// Zero-based seat of a player within the game.
pub type PlayerId = usize;

/// Choice offered to a player when both taking and drawing are possible.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnAction {
    /// Claim a whole pile and sit out the rest of the round.
    Take,
    /// Draw the top card of the deck and place it on a pile.
    Draw,
}

impl fmt::Display for TurnAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnAction::Take => f.write_str("take"),
            TurnAction::Draw => f.write_str("draw"),
        }
    }
}
