use std::io::{self, Write};

use crate::action::TurnAction;
use crate::card::Card;
use crate::player::Player;
use crate::state::GameStateView;
use crate::visualize::{format_cards, render_state};

/// Interactive player that queries a human via standard input.
pub struct HumanBot {
    name: String,
    state: Option<GameStateView>,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: None,
        }
    }

    fn show_state(&self) {
        println!("\n=== {}'s turn ===", self.name);
        if let Some(state) = &self.state {
            println!("{}", render_state(state));
        }
    }

    fn prompt(&self, message: &str) -> String {
        loop {
            print!("{message} ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                eprintln!("failed to read input");
                continue;
            }
            let trimmed = input.trim().to_ascii_lowercase();
            if trimmed == "q" || trimmed == "quit" {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            return trimmed;
        }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

impl Player for HumanBot {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self, state: &GameStateView) {
        self.state = Some(state.clone());
    }

    fn choose_action(&mut self) -> TurnAction {
        self.show_state();
        loop {
            match self.prompt("Take a pile or draw a card? [t/d]").as_str() {
                "t" | "take" => return TurnAction::Take,
                "d" | "draw" => return TurnAction::Draw,
                other => println!("Invalid input: '{other}'. Type 't', 'd' or 'q'."),
            }
        }
    }

    fn select_pile(&mut self, drawn: Option<Card>, candidates: &[usize]) -> usize {
        match drawn {
            Some(card) => {
                self.show_state();
                println!("You drew a {card}.");
            }
            None => println!("Choose a pile to take."),
        }
        if let Some(state) = &self.state {
            for idx in candidates {
                if let Some(pile) = state.piles.get(*idx) {
                    println!("  [{idx}] {}", format_cards(pile.cards()));
                }
            }
        }
        loop {
            let input = self.prompt("Pile:");
            match input.parse::<usize>() {
                Ok(choice) if candidates.contains(&choice) => return choice,
                Ok(_) => println!("That pile is not available. Options: {candidates:?}"),
                Err(_) => println!("Invalid input: '{input}'. Please enter a number."),
            }
        }
    }

    fn take_cards(&mut self, cards: &[Card]) {
        println!("{} receives {}", self.name, format_cards(cards));
    }
}
