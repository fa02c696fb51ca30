//! Scoring for Chromakin hands.
//!
//! A hand scores the table value of its three best colors, minus the table
//! value of every other color, plus the face value of its bonus cards. Wilds
//! are assigned to colors so that the color part is as large as possible.

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::GameError;
use crate::hand::Hand;

/// Number of colors that count positively towards a score.
pub const SCORED_COLORS: usize = 3;

/// Points per color-count tier. Index `n` gives the value of holding `n`
/// cards of one color; counts beyond the last tier use the last tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct ScoringTable(Vec<i32>);

impl ScoringTable {
    pub const STANDARD: [i32; 7] = [0, 1, 3, 6, 10, 15, 21];
    pub const ALTERNATE: [i32; 7] = [0, 1, 4, 8, 7, 6, 5];

    /// Any non-empty table is accepted; the length is the caller's business.
    pub fn new(values: Vec<i32>) -> Result<Self, GameError> {
        if values.is_empty() {
            return Err(GameError::InvalidConfiguration("scoring table must not be empty"));
        }
        Ok(Self(values))
    }

    pub fn standard() -> Self {
        Self(Self::STANDARD.to_vec())
    }

    pub fn alternate() -> Self {
        Self(Self::ALTERNATE.to_vec())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[i32] {
        &self.0
    }

    /// Value of holding `count` cards of one color, clamped to the last tier.
    #[inline]
    pub fn value(&self, count: usize) -> i32 {
        self.0[count.min(self.0.len() - 1)]
    }
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<i32>> for ScoringTable {
    type Error = GameError;

    fn try_from(values: Vec<i32>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl From<ScoringTable> for Vec<i32> {
    fn from(table: ScoringTable) -> Self {
        table.0
    }
}

/// Best placement of wilds found for a set of color counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WildAssignment {
    /// Color part of the score under this placement.
    pub score: i32,
    /// Wilds placed on each color, parallel to the input counts.
    pub placed: Vec<usize>,
}

/// Score of a hand against a scoring table. May be negative.
pub fn score(hand: &Hand, table: &ScoringTable) -> i32 {
    let counts: Vec<usize> = hand.color_counts().map(|(_, count)| count).collect();
    optimal_wild_assignment(&counts, hand.wilds(), table).score + hand.bonus_points()
}

/// Top-three-minus-rest score of fixed color counts, without wilds or bonuses.
pub fn base_score(counts: &[usize], table: &ScoringTable) -> i32 {
    let mut values: Vec<i32> = counts.iter().map(|count| table.value(*count)).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values
        .iter()
        .enumerate()
        .map(|(rank, value)| if rank < SCORED_COLORS { *value } else { -*value })
        .sum()
}

/// Finds the placement of `wilds` wild cards over `counts` that maximizes
/// [`base_score`].
///
/// Every multiset of color indices of size `wilds` is tried, i.e.
/// `C(colors + wilds - 1, wilds)` candidates. With at most seven colors and
/// three wilds in the deck that is 84 candidates. The first best candidate in
/// enumeration order wins ties.
pub fn optimal_wild_assignment(
    counts: &[usize],
    wilds: usize,
    table: &ScoringTable,
) -> WildAssignment {
    let unplaced = || WildAssignment {
        score: base_score(counts, table),
        placed: vec![0; counts.len()],
    };
    if wilds == 0 || counts.is_empty() {
        return unplaced();
    }

    let mut best: Option<WildAssignment> = None;
    let mut adjusted = counts.to_vec();
    for combination in (0..counts.len()).combinations_with_replacement(wilds) {
        adjusted.copy_from_slice(counts);
        let mut placed = vec![0; counts.len()];
        for idx in combination {
            adjusted[idx] += 1;
            placed[idx] += 1;
        }
        let candidate = base_score(&adjusted, table);
        if best.as_ref().is_none_or(|b| candidate > b.score) {
            best = Some(WildAssignment {
                score: candidate,
                placed,
            });
        }
    }
    best.unwrap_or_else(unplaced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Color};

    fn hand(entries: &[(Card, usize)]) -> Hand {
        Hand::from_counts(entries.iter().copied())
    }

    #[test]
    fn test_top_three_minus_rest() {
        // green 4 -> 10, blue 3 -> 6, brown 2 -> 3, pink 1 -> 1 (negative)
        let h = hand(&[
            (Card::Color(Color::Green), 4),
            (Card::Color(Color::Blue), 3),
            (Card::Color(Color::Brown), 2),
            (Card::Color(Color::Pink), 1),
        ]);
        assert_eq!(score(&h, &ScoringTable::standard()), 10 + 6 + 3 - 1);
    }

    #[test]
    fn test_bonus_cards_add_face_value() {
        let h = hand(&[(Card::Color(Color::Gray), 2), (Card::Bonus(2), 3)]);
        assert_eq!(score(&h, &ScoringTable::standard()), 3 + 6);
    }

    #[test]
    fn test_wild_goes_where_it_helps_most() {
        // green 5 + blue 2 -> 15 + 3 = 18; green 4 + blue 3 -> 10 + 6 = 16
        let h = hand(&[
            (Card::Color(Color::Green), 4),
            (Card::Color(Color::Blue), 2),
            (Card::Wild, 1),
        ]);
        assert_eq!(score(&h, &ScoringTable::standard()), 18);

        let assignment = optimal_wild_assignment(&[4, 2], 1, &ScoringTable::standard());
        assert_eq!(assignment.placed, vec![1, 0]);
    }

    #[test]
    fn test_alternate_table_prefers_spreading_wilds() {
        // Alternate table peaks at 3 cards (8 points).
        let assignment = optimal_wild_assignment(&[3, 2, 0], 1, &ScoringTable::alternate());
        assert_eq!(assignment.score, 8 + 8);
        assert_eq!(assignment.placed, vec![0, 1, 0]);
    }

    #[test]
    fn test_counts_clamp_to_last_tier() {
        let table = ScoringTable::standard();
        assert_eq!(table.value(7), 21);
        assert_eq!(table.value(12), 21);
        assert_eq!(base_score(&[9], &table), 21);
    }

    #[test]
    fn test_negative_optimum_is_kept() {
        // Seven colors with two cards each: 3 * 3 - 4 * 3 = -3 before wilds.
        // One wild on a top color gives 6 + 3 + 3 - 12 = 0.
        let counts = [2; 7];
        assert_eq!(base_score(&counts, &ScoringTable::standard()), -3);
        assert_eq!(
            optimal_wild_assignment(&counts, 1, &ScoringTable::standard()).score,
            0
        );
        // Three of every color: 3 * 6 - 4 * 6 = -6. The best single wild
        // still leaves the hand negative: 10 + 6 + 6 - 24 = -2.
        let threes = [3; 7];
        assert_eq!(
            optimal_wild_assignment(&threes, 1, &ScoringTable::standard()).score,
            -2
        );
    }

    #[test]
    fn test_only_wilds_and_bonuses() {
        let h = hand(&[(Card::Wild, 2), (Card::Bonus(2), 1)]);
        assert_eq!(score(&h, &ScoringTable::standard()), 2);
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(ScoringTable::new(Vec::new()).is_err());
        assert!(ScoringTable::new(vec![0, 1]).is_ok());
    }
}
