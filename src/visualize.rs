use std::fmt::Write;

use crate::card::Card;
use crate::game::GameOutcome;
use crate::hand::Hand;
use crate::pile::Piles;
use crate::score::{ScoringTable, score};
use crate::state::GameStateView;

/// Customize state rendering for CLI visualization.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    pub show_zero_counts: bool,
    pub show_scores: bool,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_zero_counts: true,
            show_scores: true,
        }
    }
}

pub fn format_cards(cards: &[Card]) -> String {
    let inner = cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{inner}]")
}

/// Two tab-separated rows under a score header: card tags, then counts.
pub fn render_player_status(name: &str, hand: &Hand, scoring: &ScoringTable) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{name}:\t{} points", score(hand, scoring));
    for (card, _) in hand.iter() {
        let _ = write!(out, "{card}\t");
    }
    out.push('\n');
    for (_, count) in hand.iter() {
        let _ = write!(out, "{count}\t");
    }
    out
}

pub fn render_piles(piles: &Piles) -> String {
    let mut out = String::from("Pile contents: \n");
    for (idx, pile) in piles.iter().enumerate() {
        if pile.is_taken() {
            let _ = write!(out, "{idx}:[TAKEN] ");
        } else {
            let _ = write!(out, "{idx}:{} ", format_cards(pile.cards()));
        }
    }
    out
}

pub fn render_state(state: &GameStateView) -> String {
    render_state_with_options(state, VisualOptions::default())
}

pub fn render_state_with_options(state: &GameStateView, options: VisualOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Round {}{}  |  Deck: {} cards",
        state.round,
        if state.last_round { " (last round)" } else { "" },
        state.deck_count
    );
    let _ = writeln!(out, "Scoring: {:?}", state.scoring.values());
    let _ = writeln!(out, "{}", render_piles(&state.piles));
    let _ = writeln!(out, "Players:");
    for player in &state.players {
        let current_tag = if player.id == state.current_player {
            " <- current"
        } else {
            ""
        };
        let out_tag = if player.out { " (out)" } else { "" };
        if options.show_scores {
            let _ = writeln!(
                out,
                "  [{}] {}{}{} - {} points",
                player.id,
                player.name,
                out_tag,
                current_tag,
                score(&player.hand, &state.scoring)
            );
        } else {
            let _ = writeln!(out, "  [{}] {}{}{}", player.id, player.name, out_tag, current_tag);
        }
        let cards = player
            .hand
            .iter()
            .filter(|(_, count)| options.show_zero_counts || *count > 0)
            .map(|(card, count)| format!("{card}:{count}"))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "      {cards}");
    }
    out
}

pub fn render_outcome(outcome: &GameOutcome) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Final scores after {} rounds:", outcome.rounds);
    for (idx, name) in outcome.names.iter().enumerate() {
        let marker = if idx == outcome.winner { "  <- winner" } else { "" };
        let _ = writeln!(out, "  {name:<16} {:>4}{marker}", outcome.scores[idx]);
    }
    let _ = write!(out, "Remaining cards: {}", format_cards(&outcome.remaining_deck));
    out
}
