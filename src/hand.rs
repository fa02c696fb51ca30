use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::card::{Card, Color};

/// Accumulated card counts of one player.
///
/// Every tag in play is present, with a count of zero while unheld. Counts only
/// grow: a hand is extended with the contents of taken piles and never shrinks
/// during a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    counts: BTreeMap<Card, usize>,
}

impl Hand {
    pub fn new(tags: impl IntoIterator<Item = Card>) -> Self {
        Self {
            counts: tags.into_iter().map(|tag| (tag, 0)).collect(),
        }
    }

    /// Builds a hand from explicit counts. Mostly useful for scoring.
    pub fn from_counts(counts: impl IntoIterator<Item = (Card, usize)>) -> Self {
        let mut hand = Self::default();
        for (card, count) in counts {
            *hand.counts.entry(card).or_default() += count;
        }
        hand
    }

    pub fn add(&mut self, cards: &[Card]) {
        for card in cards {
            *self.counts.entry(*card).or_default() += 1;
        }
    }

    pub fn count(&self, card: Card) -> usize {
        self.counts.get(&card).copied().unwrap_or(0)
    }

    pub fn wilds(&self) -> usize {
        self.count(Card::Wild)
    }

    /// Color tags tracked by this hand, held or not, with their counts.
    pub fn color_counts(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        self.counts
            .iter()
            .filter_map(|(card, count)| card.color().map(|color| (color, *count)))
    }

    /// Total points from bonus cards.
    pub fn bonus_points(&self) -> i32 {
        self.counts
            .iter()
            .filter_map(|(card, count)| card.bonus_value().map(|value| value * *count as i32))
            .sum()
    }

    pub fn total_cards(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Card, usize)> + '_ {
        self.counts.iter().map(|(card, count)| (*card, *count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{active_colors, card_tags};

    #[test]
    fn new_hand_tracks_all_tags_at_zero() {
        let hand = Hand::new(card_tags(&active_colors(2)));
        assert_eq!(hand.iter().count(), 7);
        assert_eq!(hand.total_cards(), 0);
        assert_eq!(hand.color_counts().count(), 5);
    }

    #[test]
    fn add_accumulates() {
        let mut hand = Hand::new(card_tags(&active_colors(4)));
        hand.add(&[Card::Color(Color::Pink), Card::Wild, Card::Color(Color::Pink)]);
        hand.add(&[Card::Bonus(2), Card::Bonus(2)]);
        assert_eq!(hand.count(Card::Color(Color::Pink)), 2);
        assert_eq!(hand.wilds(), 1);
        assert_eq!(hand.bonus_points(), 4);
        assert_eq!(hand.total_cards(), 5);
    }
}
