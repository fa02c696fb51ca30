use proptest::prelude::*;
use proptest::sample::Index;

use chromakin::card::ALL_COLORS;
use chromakin::{Card, Color, Hand, ScoringTable, base_score, optimal_wild_assignment, score};

fn table_strategy() -> impl Strategy<Value = ScoringTable> {
    prop_oneof![
        Just(ScoringTable::standard()),
        Just(ScoringTable::alternate()),
    ]
}

fn hand_from(counts: &[usize], wilds: usize, bonuses: usize) -> Hand {
    let mut entries: Vec<(Card, usize)> = counts
        .iter()
        .zip(ALL_COLORS)
        .map(|(count, color)| (Card::Color(color), *count))
        .collect();
    entries.push((Card::Wild, wilds));
    entries.push((Card::Bonus(2), bonuses));
    Hand::from_counts(entries)
}

/// Straightforward reading of the rule: best three colors count, the rest
/// subtract, then bonuses add.
fn manual_score(counts: &[usize], bonuses: usize, table: &[i32]) -> i32 {
    let mut values: Vec<i32> = counts
        .iter()
        .map(|c| table[(*c).min(table.len() - 1)])
        .collect();
    values.sort_by(|a, b| b.cmp(a));
    let top: i32 = values.iter().take(3).sum();
    let rest: i32 = values.iter().skip(3).sum();
    top - rest + 2 * bonuses as i32
}

#[test]
fn worked_example_places_the_wild_on_the_larger_color() {
    let hand = Hand::from_counts([
        (Card::Color(Color::Green), 4),
        (Card::Color(Color::Blue), 2),
        (Card::Wild, 1),
    ]);
    let table = ScoringTable::standard();
    let green_five = base_score(&[5, 2], &table);
    let blue_three = base_score(&[4, 3], &table);
    assert_eq!(green_five, 15 + 3);
    assert_eq!(blue_three, 10 + 6);
    assert_eq!(score(&hand, &table), green_five.max(blue_three));
}

#[test]
fn custom_short_table_clamps() {
    let table = ScoringTable::new(vec![0, 2, 5]).unwrap();
    let hand = Hand::from_counts([(Card::Color(Color::Pink), 9), (Card::Wild, 2)]);
    assert_eq!(score(&hand, &table), 5);
}

proptest! {
    #[test]
    fn without_wilds_score_matches_manual_rule(
        counts in prop::collection::vec(0usize..10, 0..=7),
        bonuses in 0usize..6,
        table in table_strategy(),
    ) {
        let hand = hand_from(&counts, 0, bonuses);
        prop_assert_eq!(score(&hand, &table), manual_score(&counts, bonuses, table.values()));
    }

    #[test]
    fn optimal_wilds_beat_any_fixed_placement(
        counts in prop::collection::vec(0usize..8, 1..=7),
        placement in prop::collection::vec(any::<Index>(), 1..=3),
        table in table_strategy(),
    ) {
        let wilds = placement.len();
        let best = optimal_wild_assignment(&counts, wilds, &table);

        let mut fixed = counts.clone();
        for idx in &placement {
            fixed[idx.index(counts.len())] += 1;
        }
        prop_assert!(best.score >= base_score(&fixed, &table));

        // The reported placement reproduces the reported score.
        prop_assert_eq!(best.placed.iter().sum::<usize>(), wilds);
        let applied: Vec<usize> = counts.iter().zip(&best.placed).map(|(c, w)| c + w).collect();
        prop_assert_eq!(base_score(&applied, &table), best.score);
    }

    #[test]
    fn counts_at_or_beyond_table_length_clamp_identically(
        others in prop::collection::vec(0usize..7, 0..=6),
        extra in 0usize..=5,
        wilds in 0usize..=3,
        table in table_strategy(),
    ) {
        let mut at_len = vec![table.len()];
        at_len.extend(&others);
        let mut beyond = vec![table.len() + extra];
        beyond.extend(&others);
        prop_assert_eq!(
            score(&hand_from(&at_len, wilds, 0), &table),
            score(&hand_from(&beyond, wilds, 0), &table)
        );
    }
}
