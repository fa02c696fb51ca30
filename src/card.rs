use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The seven Chromakin colors in canonical order.
///
/// Smaller games drop colors from the front of this list.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Color {
    Green,
    Blue,
    Brown,
    Yellow,
    Gray,
    Pink,
    Orange,
}

pub const ALL_COLORS: [Color; 7] = [
    Color::Green,
    Color::Blue,
    Color::Brown,
    Color::Yellow,
    Color::Gray,
    Color::Pink,
    Color::Orange,
];

/// Representation of a Chromakin card.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Card {
    Color(Color),
    /// Counts as one extra card of any single color when scoring.
    Wild,
    /// Fixed point increment, independent of color counting.
    Bonus(i32),
}

pub const COPIES_PER_COLOR: usize = 9;
pub const WILD_COUNT: usize = 3;
pub const BONUS_COUNT: usize = 10;
pub const BONUS_VALUE: i32 = 2;
pub const PILE_CAPACITY: usize = 3;
pub const TWO_PLAYER_PILE_CAPACITIES: [usize; 3] = [1, 2, 3];
/// The last round starts once the deck holds fewer cards than this.
pub const LAST_ROUND_THRESHOLD: usize = 15;
pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = ALL_COLORS.len();

impl Color {
    pub fn name(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Brown => "brown",
            Color::Yellow => "yellow",
            Color::Gray => "gray",
            Color::Pink => "pink",
            Color::Orange => "orange",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Card {
    #[inline]
    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild)
    }

    #[inline]
    pub fn color(&self) -> Option<Color> {
        match self {
            Card::Color(color) => Some(*color),
            _ => None,
        }
    }

    /// Point value for bonus cards.
    #[inline]
    pub fn bonus_value(&self) -> Option<i32> {
        match self {
            Card::Bonus(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Color(color) => write!(f, "{color}"),
            Card::Wild => f.write_str("wild"),
            Card::Bonus(value) => write!(f, "{value:+}"),
        }
    }
}

/// Error returned when a card tag cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown card tag: {0}")]
pub struct UnknownCard(pub String);

impl FromStr for Card {
    type Err = UnknownCard;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let tag = tag.trim();
        if tag.eq_ignore_ascii_case("wild") {
            return Ok(Card::Wild);
        }
        if tag.starts_with('+') || tag.starts_with('-') {
            return tag
                .parse::<i32>()
                .map(Card::Bonus)
                .map_err(|_| UnknownCard(tag.to_string()));
        }
        ALL_COLORS
            .iter()
            .find(|color| color.name().eq_ignore_ascii_case(tag))
            .map(|color| Card::Color(*color))
            .ok_or_else(|| UnknownCard(tag.to_string()))
    }
}

/// Colors in play for the given table size: 5 for two players, 6 for three,
/// all 7 otherwise.
pub fn active_colors(num_players: usize) -> Vec<Color> {
    let dropped = match num_players {
        2 => 2,
        3 => 1,
        _ => 0,
    };
    ALL_COLORS[dropped..].to_vec()
}

/// Builds an unshuffled deck for the given colors plus wilds and bonus cards.
pub fn full_deck(colors: &[Color]) -> Vec<Card> {
    let mut deck = Vec::with_capacity(colors.len() * COPIES_PER_COLOR + WILD_COUNT + BONUS_COUNT);
    for _ in 0..COPIES_PER_COLOR {
        deck.extend(colors.iter().map(|color| Card::Color(*color)));
    }
    deck.extend(std::iter::repeat(Card::Wild).take(WILD_COUNT));
    deck.extend(std::iter::repeat(Card::Bonus(BONUS_VALUE)).take(BONUS_COUNT));
    deck
}

/// Every distinct card tag a hand tracks for the given colors.
pub fn card_tags(colors: &[Color]) -> Vec<Card> {
    let mut tags: Vec<Card> = colors.iter().map(|color| Card::Color(*color)).collect();
    tags.push(Card::Wild);
    tags.push(Card::Bonus(BONUS_VALUE));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_colors_shrink_for_small_tables() {
        assert_eq!(active_colors(2).len(), 5);
        assert_eq!(active_colors(2)[0], Color::Brown);
        assert_eq!(active_colors(3).len(), 6);
        assert_eq!(active_colors(3)[0], Color::Blue);
        assert_eq!(active_colors(4).len(), 7);
        assert_eq!(active_colors(7).len(), 7);
    }

    #[test]
    fn deck_composition() {
        let deck = full_deck(&active_colors(4));
        assert_eq!(deck.len(), 7 * 9 + 3 + 10);
        assert_eq!(deck.iter().filter(|c| c.is_wild()).count(), 3);
        assert_eq!(deck.iter().filter(|c| **c == Card::Bonus(2)).count(), 10);
        assert_eq!(deck.iter().filter(|c| **c == Card::Color(Color::Pink)).count(), 9);
    }

    #[test]
    fn tags_parse_and_render() {
        assert_eq!("green".parse::<Card>(), Ok(Card::Color(Color::Green)));
        assert_eq!("wild".parse::<Card>(), Ok(Card::Wild));
        assert_eq!("+2".parse::<Card>(), Ok(Card::Bonus(2)));
        assert_eq!("-1".parse::<Card>(), Ok(Card::Bonus(-1)));
        assert!("purple".parse::<Card>().is_err());
        assert_eq!(Card::Bonus(2).to_string(), "+2");
        assert_eq!(Card::Color(Color::Gray).to_string(), "gray");
    }
}
