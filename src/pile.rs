use serde::{Deserialize, Serialize};

use crate::card::{Card, PILE_CAPACITY, TWO_PLAYER_PILE_CAPACITIES};

/// A capacity-bounded row of face-up cards, claimed whole by one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    cards: Vec<Card>,
    capacity: usize,
    taken: bool,
}

impl Pile {
    pub fn new(capacity: usize) -> Self {
        Self {
            cards: Vec::with_capacity(capacity),
            capacity,
            taken: false,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    pub fn is_taken(&self) -> bool {
        self.taken
    }

    pub fn can_take(&self) -> bool {
        !self.taken && !self.cards.is_empty()
    }

    pub fn can_draw(&self) -> bool {
        !self.taken && !self.is_full()
    }

    fn reset(&mut self) {
        self.cards.clear();
        self.taken = false;
    }
}

/// The piles of one round.
///
/// Games with three or more players lay out one pile of capacity 3 per
/// player. Two-player games use three piles with capacities 1, 2 and 3, so
/// pile `i` accepts cards while it holds at most `i` of them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    piles: Vec<Pile>,
}

impl Piles {
    pub fn for_players(num_players: usize) -> Self {
        if num_players == 2 {
            Self::two_player()
        } else {
            Self::standard(num_players)
        }
    }

    pub fn standard(count: usize) -> Self {
        Self {
            piles: (0..count).map(|_| Pile::new(PILE_CAPACITY)).collect(),
        }
    }

    pub fn two_player() -> Self {
        Self {
            piles: TWO_PLAYER_PILE_CAPACITIES.iter().map(|cap| Pile::new(*cap)).collect(),
        }
    }

    /// Empties every pile and clears the taken flags.
    pub fn reset(&mut self) {
        self.piles.iter_mut().for_each(Pile::reset);
    }

    pub fn len(&self) -> usize {
        self.piles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Pile> {
        self.piles.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pile> {
        self.piles.iter()
    }

    /// True when no pile holds a card. Taken piles are always empty.
    pub fn all_empty(&self) -> bool {
        self.piles.iter().all(Pile::is_empty)
    }

    /// True when every pile is either taken or at capacity.
    pub fn all_open_full(&self) -> bool {
        self.piles.iter().all(|pile| pile.taken || pile.is_full())
    }

    /// Untaken piles holding at least one card, with their indices.
    pub fn takeable(&self) -> Vec<(usize, &Pile)> {
        self.piles.iter().enumerate().filter(|(_, pile)| pile.can_take()).collect()
    }

    /// Untaken piles that can still accept a card, with their indices.
    pub fn drawable(&self) -> Vec<(usize, &Pile)> {
        self.piles.iter().enumerate().filter(|(_, pile)| pile.can_draw()).collect()
    }

    pub fn takeable_indices(&self) -> Vec<usize> {
        self.takeable().into_iter().map(|(idx, _)| idx).collect()
    }

    pub fn drawable_indices(&self) -> Vec<usize> {
        self.drawable().into_iter().map(|(idx, _)| idx).collect()
    }

    /// Appends a card. The caller is responsible for checking availability.
    pub(crate) fn place(&mut self, index: usize, card: Card) {
        self.piles[index].cards.push(card);
    }

    /// Empties a pile, marks it taken and returns its former contents.
    pub(crate) fn take(&mut self, index: usize) -> Vec<Card> {
        let pile = &mut self.piles[index];
        pile.taken = true;
        std::mem::take(&mut pile.cards)
    }
}
