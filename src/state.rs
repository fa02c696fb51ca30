use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::card::{Color, MAX_PLAYERS, MIN_PLAYERS, active_colors};
use crate::error::GameError;
use crate::hand::Hand;
use crate::pile::{Pile, Piles};
use crate::score::{ScoringTable, score};

/// Global constants for a running game.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSettings {
    pub num_players: usize,
    pub two_player: bool,
    pub colors: Vec<Color>,
}

impl GameSettings {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(GameError::InvalidConfiguration(
                "players must be between 2 and 7",
            ));
        }
        Ok(Self {
            num_players,
            two_player: num_players == 2,
            colors: active_colors(num_players),
        })
    }
}

/// What every player may know about one seat.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerPublicState {
    pub id: PlayerId,
    pub name: String,
    pub hand: Hand,
    pub out: bool,
}

/// Read-only snapshot handed to players before each turn.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameStateView {
    pub settings: GameSettings,
    pub scoring: ScoringTable,
    pub players: Vec<PlayerPublicState>,
    pub piles: Piles,
    pub current_player: PlayerId,
    pub deck_count: usize,
    pub round: usize,
    pub last_round: bool,
}

impl GameStateView {
    pub fn takeable_piles(&self) -> Vec<(usize, &Pile)> {
        self.piles.takeable()
    }

    pub fn drawable_piles(&self) -> Vec<(usize, &Pile)> {
        self.piles.drawable()
    }

    /// Current score of a seat under the game's scoring table.
    pub fn score_of(&self, player: PlayerId) -> Option<i32> {
        self.players
            .get(player)
            .map(|p| score(&p.hand, &self.scoring))
    }
}
