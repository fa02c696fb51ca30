use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::TurnAction;
use crate::card::Card;
use crate::player::Player;

/// Baseline bot that picks actions and piles uniformly at random.
pub struct RandomBot<R: Rng> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Player for RandomBot<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_action(&mut self) -> TurnAction {
        if self.rng.gen_bool(0.5) {
            TurnAction::Take
        } else {
            TurnAction::Draw
        }
    }

    fn select_pile(&mut self, _drawn: Option<Card>, candidates: &[usize]) -> usize {
        // The engine never offers an empty candidate list.
        candidates.choose(&mut self.rng).copied().unwrap_or_default()
    }
}
