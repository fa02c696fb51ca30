//! Chromakin card-drafting game engine: piles, rounds and optimal wild scoring.

pub mod action;
pub mod bots;
pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod pile;
pub mod player;
pub mod score;
pub mod state;
pub mod transcript;
pub mod visualize;

pub use crate::action::{PlayerId, TurnAction};
pub use crate::bots::{HumanBot, RandomBot, create_bot_from_spec, label_for_spec};
pub use crate::card::{Card, Color};
pub use crate::error::{GameError, InvalidChoice};
pub use crate::game::{Game, GameBuilder, GameConfig, GameOutcome};
pub use crate::hand::Hand;
pub use crate::pile::{Pile, Piles};
pub use crate::player::Player;
pub use crate::score::{ScoringTable, WildAssignment, base_score, optimal_wild_assignment, score};
pub use crate::state::{GameSettings, GameStateView, PlayerPublicState};
pub use crate::transcript::{GameLog, LogMode};
pub use crate::visualize::{render_outcome, render_state};
