use crate::action::TurnAction;
use crate::card::Card;
use crate::state::GameStateView;

/// Decision interface between the engine and whoever plays a seat.
///
/// The engine owns all game state. Players only see owned snapshots and answer
/// synchronously; a pile index outside `candidates` aborts the game.
pub trait Player {
    fn name(&self) -> &str;

    /// Receives the shared game state before every turn, for every seat.
    fn update(&mut self, _state: &GameStateView) {}

    /// Only asked when the player may either take or draw.
    fn choose_action(&mut self) -> TurnAction;

    /// Picks a pile from `candidates`. `drawn` carries the card about to be
    /// placed when drawing and is `None` when taking.
    fn select_pile(&mut self, drawn: Option<Card>, candidates: &[usize]) -> usize;

    /// The engine added these cards to this player's hand.
    fn take_cards(&mut self, _cards: &[Card]) {}

    fn end_game(&mut self) {}
}
