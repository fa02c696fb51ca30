use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::action::{PlayerId, TurnAction};
use crate::card::{Card, Color, LAST_ROUND_THRESHOLD, card_tags, full_deck};
use crate::error::{GameError, InvalidChoice};
use crate::hand::Hand;
use crate::pile::Piles;
use crate::player::Player;
use crate::score::{ScoringTable, score};
use crate::state::{GameSettings, GameStateView, PlayerPublicState};
use crate::transcript::{GameLog, LogMode};
use crate::visualize::{format_cards, render_piles, render_player_status};

const DEFAULT_SEED: u64 = 0xC0_10_12_CA_5EED_0001;
const TWO_PLAYER_STARTING_COLORS: usize = 4;

/// Configuration required to bootstrap a game instance.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub num_players: usize,
    pub seed: u64,
    pub scoring: ScoringTable,
}

impl GameConfig {
    pub fn new(num_players: usize, seed: u64) -> Result<Self, GameError> {
        GameSettings::new(num_players)?;
        Ok(Self {
            num_players,
            seed,
            scoring: ScoringTable::standard(),
        })
    }
}

/// Builder that enables deterministic deck injection for testing and experiments.
pub struct GameBuilder {
    config: GameConfig,
    deck: Option<Vec<Card>>,
    log: GameLog,
}

impl GameBuilder {
    pub fn new(num_players: usize) -> Result<Self, GameError> {
        Ok(Self {
            config: GameConfig::new(num_players, DEFAULT_SEED)?,
            deck: None,
            log: GameLog::default(),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoringTable) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Use this deck, front first, instead of a shuffled standard deck. An
    /// injected deck is never shuffled; starting colors are still sampled
    /// from the seed and removed from it.
    pub fn with_deck(mut self, deck: Vec<Card>) -> Self {
        self.deck = Some(deck);
        self
    }

    pub fn with_log(mut self, mode: LogMode) -> Self {
        self.log.set_mode(mode);
        self
    }

    pub fn build(self) -> Result<Game, GameError> {
        Game::from_builder(self)
    }
}

/// Final result of a completed game.
#[derive(Clone, Debug)]
pub struct GameOutcome {
    pub names: Vec<String>,
    pub scores: Vec<i32>,
    /// First seat holding the highest score.
    pub winner: PlayerId,
    pub hands: Vec<Hand>,
    pub remaining_deck: Vec<Card>,
    pub rounds: usize,
    /// Buffered transcript; empty unless the log was in buffer mode.
    pub transcript: String,
}

/// Core Chromakin engine. Owns the deck, piles, hands and turn order of one
/// game and drives the players through it.
pub struct Game {
    settings: GameSettings,
    scoring: ScoringTable,
    deck: VecDeque<Card>,
    piles: Piles,
    hands: Vec<Hand>,
    out: Vec<bool>,
    names: Vec<String>,
    /// Seat that acted last; `None` before the first turn.
    cursor: Option<PlayerId>,
    round: usize,
    last_round: bool,
    shuffle: bool,
    log: GameLog,
    rng: StdRng,
}

impl Game {
    pub fn builder(num_players: usize) -> Result<GameBuilder, GameError> {
        GameBuilder::new(num_players)
    }

    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder {
            config,
            deck: None,
            log: GameLog::default(),
        }
        .build()
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn scoring(&self) -> &ScoringTable {
        &self.scoring
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    pub fn state_view(&self) -> GameStateView {
        let players = self
            .hands
            .iter()
            .enumerate()
            .map(|(idx, hand)| PlayerPublicState {
                id: idx,
                name: self.names.get(idx).cloned().unwrap_or_default(),
                hand: hand.clone(),
                out: self.out[idx],
            })
            .collect();
        GameStateView {
            settings: self.settings.clone(),
            scoring: self.scoring.clone(),
            players,
            piles: self.piles.clone(),
            current_player: self.cursor.unwrap_or(0),
            deck_count: self.deck.len(),
            round: self.round,
            last_round: self.last_round,
        }
    }

    pub fn compute_scores(&self) -> Vec<i32> {
        self.hands.iter().map(|hand| score(hand, &self.scoring)).collect()
    }

    /// Plays a full game: deal, rounds until the last round completes, then
    /// scoring. `players` must hold one entry per seat.
    pub fn play(mut self, players: &mut [Box<dyn Player>]) -> Result<GameOutcome, GameError> {
        if players.len() != self.settings.num_players {
            return Err(GameError::InvalidConfiguration(
                "number of players does not match the game configuration",
            ));
        }
        self.names = players.iter().map(|p| p.name().to_string()).collect();
        self.deal(players)?;
        while !self.last_round {
            self.play_round(players)?;
        }
        Ok(self.finish(players))
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder { config, deck, log } = builder;
        let settings = GameSettings::new(config.num_players)?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let shuffle = deck.is_none();
        let deck = match deck {
            Some(deck) => deck,
            None => {
                let mut deck = full_deck(&settings.colors);
                deck.shuffle(&mut rng);
                deck
            }
        };
        let hands = (0..settings.num_players)
            .map(|_| Hand::new(card_tags(&settings.colors)))
            .collect();

        Ok(Game {
            piles: Piles::for_players(settings.num_players),
            out: vec![false; settings.num_players],
            names: Vec::new(),
            scoring: config.scoring,
            deck: deck.into(),
            hands,
            cursor: None,
            round: 0,
            last_round: false,
            shuffle,
            log,
            rng,
            settings,
        })
    }

    /// One distinct starting color per player, or two each from four in a
    /// two-player game. Starting cards leave the deck, which is then reshuffled.
    fn deal(&mut self, players: &mut [Box<dyn Player>]) -> Result<(), GameError> {
        let n = self.settings.num_players;
        let wanted = if self.settings.two_player {
            TWO_PLAYER_STARTING_COLORS
        } else {
            n
        };
        let starting: Vec<Color> = self
            .settings
            .colors
            .choose_multiple(&mut self.rng, wanted)
            .copied()
            .collect();
        if starting.len() < wanted {
            return Err(GameError::InvalidConfiguration(
                "not enough colors to deal starting cards",
            ));
        }

        let per_player = wanted / n;
        for (idx, colors) in starting.chunks(per_player).enumerate() {
            let cards: Vec<Card> = colors.iter().map(|color| Card::Color(*color)).collect();
            for card in &cards {
                let position = self
                    .deck
                    .iter()
                    .position(|c| c == card)
                    .ok_or(GameError::InvalidConfiguration(
                        "deck does not contain the starting colors",
                    ))?;
                self.deck.remove(position);
            }
            self.hands[idx].add(&cards);
            players[idx].take_cards(&cards);
        }
        if self.shuffle {
            self.deck.make_contiguous().shuffle(&mut self.rng);
        }
        Ok(())
    }

    fn play_round(&mut self, players: &mut [Box<dyn Player>]) -> Result<(), GameError> {
        self.round += 1;
        self.log.line(format!("\n----Round {}----", self.round));
        log::debug!("round {} starts with {} cards in the deck", self.round, self.deck.len());
        self.piles.reset();
        self.out.fill(false);
        for idx in 0..self.hands.len() {
            self.log_status(idx);
        }

        while !self.out.iter().all(|out| *out) {
            let current = self.next_player();
            self.log.line(format!("\nIt's {}'s turn", self.names[current]));
            self.log.line(render_piles(&self.piles));
            let view = self.state_view();
            for player in players.iter_mut() {
                player.update(&view);
            }

            if self.piles.all_empty() {
                self.log.line("All piles are empty, draw a card");
                self.draw_turn(current, players[current].as_mut())?;
            } else if self.piles.all_open_full() {
                self.log.line("All available piles are full");
                self.take_turn(current, players[current].as_mut())?;
            } else {
                match players[current].choose_action() {
                    TurnAction::Take => self.take_turn(current, players[current].as_mut())?,
                    TurnAction::Draw => self.draw_turn(current, players[current].as_mut())?,
                }
            }

            let cards_left = self.deck.len();
            self.log.line(format!("Cards left: {cards_left}"));
            if cards_left < LAST_ROUND_THRESHOLD {
                if !self.last_round {
                    log::debug!("last round triggered in round {}", self.round);
                }
                self.log.line("Last Round!");
                self.last_round = true;
            }
        }

        // The next round's first advance lands on whoever took the last pile.
        self.rewind_cursor();
        Ok(())
    }

    fn draw_turn(&mut self, current: PlayerId, player: &mut dyn Player) -> Result<(), GameError> {
        let card = self.deck.pop_front().ok_or(GameError::InternalInvariantViolation(
            "draw requested on an empty deck",
        ))?;
        self.log.line(format!("Drew a {card}"));
        let candidates = self.piles.drawable_indices();
        if candidates.is_empty() {
            return Err(GameError::InternalInvariantViolation(
                "no pile can accept a drawn card",
            ));
        }
        let choice = player.select_pile(Some(card), &candidates);
        let pile = self.validate_choice(current, choice, candidates)?;
        self.piles.place(pile, card);
        self.log.line(format!("Placed on pile {pile}"));
        Ok(())
    }

    fn take_turn(&mut self, current: PlayerId, player: &mut dyn Player) -> Result<(), GameError> {
        let candidates = self.piles.takeable_indices();
        if candidates.is_empty() {
            return Err(GameError::InternalInvariantViolation("no pile can be taken"));
        }
        let choice = player.select_pile(None, &candidates);
        let pile = self.validate_choice(current, choice, candidates)?;
        let cards = self.piles.take(pile);
        self.hands[current].add(&cards);
        player.take_cards(&cards);
        self.out[current] = true;
        self.log
            .line(format!("{} takes pile {pile}", self.names[current]));
        Ok(())
    }

    fn validate_choice(
        &self,
        player: PlayerId,
        pile: usize,
        offered: Vec<usize>,
    ) -> Result<usize, GameError> {
        if pile >= self.piles.len() {
            return Err(GameError::InvalidChoice {
                player,
                reason: InvalidChoice::PileIndex(pile),
            });
        }
        if !offered.contains(&pile) {
            return Err(GameError::InvalidChoice {
                player,
                reason: InvalidChoice::PileUnavailable { pile, offered },
            });
        }
        Ok(pile)
    }

    /// Advances past the last seat to act, wrapping around and skipping
    /// players that are out for the round.
    fn next_player(&mut self) -> PlayerId {
        let n = self.settings.num_players;
        loop {
            let next = match self.cursor {
                Some(idx) if idx + 1 < n => idx + 1,
                _ => 0,
            };
            self.cursor = Some(next);
            if !self.out[next] {
                return next;
            }
        }
    }

    fn rewind_cursor(&mut self) {
        self.cursor = match self.cursor {
            Some(idx) if idx > 0 => Some(idx - 1),
            _ => None,
        };
    }

    fn finish(mut self, players: &mut [Box<dyn Player>]) -> GameOutcome {
        self.log.line("\n----Game Over----");
        let scores = self.compute_scores();
        for player in players.iter_mut() {
            player.end_game();
        }
        self.out.fill(false);
        for idx in 0..self.hands.len() {
            self.log_status(idx);
        }
        let remaining_deck: Vec<Card> = self.deck.iter().copied().collect();
        self.log
            .line(format!("Remaining cards: {}", format_cards(&remaining_deck)));

        let mut winner = 0;
        for (idx, points) in scores.iter().enumerate() {
            if *points > scores[winner] {
                winner = idx;
            }
        }
        self.log.line(format!("{} is the winner", self.names[winner]));
        log::info!(
            "game over after {} rounds: {} wins with {} points",
            self.round,
            self.names[winner],
            scores[winner]
        );

        GameOutcome {
            transcript: self.log.flush(),
            names: self.names,
            scores,
            winner,
            hands: self.hands,
            remaining_deck,
            rounds: self.round,
        }
    }

    fn log_status(&mut self, idx: PlayerId) {
        let status = render_player_status(&self.names[idx], &self.hands[idx], &self.scoring);
        self.log.line(status);
    }
}
