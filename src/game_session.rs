//! Game orchestration: players, rounds, the turn state machine, and
//! end-of-game winner selection.
//!
//! A session is exactly one of two phases:
//!
//! - `Active { round, player }` — round is 1-based in [1, num_rounds],
//!   player is the seat index in [0, player_count);
//! - `Over { winner }` — reached exactly when the round counter would
//!   exceed `num_rounds` after a full rotation through all players.
//!
//! Phase transitions ([`GameSession::start_new_game`],
//! [`GameSession::end_turn`], [`GameSession::end_game`]) are the only
//! points that mutate round/player. Rolls-this-turn lives in the owned
//! [`DiceSet`], which resets it at every turn boundary.
//!
//! Every operation is a synchronous no-op with a neutral result when it
//! does not apply (rolling at the limit, scoring after game over).

use rand::Rng;
use serde::Serialize;

use crate::category::Category;
use crate::constants::*;
use crate::dice_mechanics::DiceSet;
use crate::score_engine::ScoreEngine;

/// Session construction parameters. All fields are clamped to >= 1.
#[derive(Clone, Copy, Debug)]
pub struct GameConfig {
    pub num_players: usize,
    pub num_rounds: u32,
    pub num_dice: usize,
    pub rolls_per_turn: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            num_players: DEFAULT_NUM_PLAYERS,
            num_rounds: DEFAULT_NUM_ROUNDS,
            num_dice: DEFAULT_NUM_DICE,
            rolls_per_turn: DEFAULT_ROLLS_PER_TURN,
        }
    }
}

/// One player: an immutable name and their own score table.
#[derive(Clone, Debug)]
pub struct PlayerState {
    name: String,
    engine: ScoreEngine,
}

impl PlayerState {
    fn new(name: String) -> Self {
        PlayerState {
            name,
            engine: ScoreEngine::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of this player's score table.
    pub fn engine(&self) -> &ScoreEngine {
        &self.engine
    }

    pub fn total_score(&self) -> i32 {
        self.engine.total()
    }
}

/// End-of-game result: the winning player's name and total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Winner {
    pub name: String,
    pub total: i32,
}

/// The two-state turn machine. See the module docs.
#[derive(Clone, Debug)]
enum GamePhase {
    Active { round: u32, player: usize },
    Over { winner: Winner },
}

/// One game: players, dice, and turn flow.
pub struct GameSession {
    players: Vec<PlayerState>,
    dice: DiceSet,
    num_rounds: u32,
    rolls_per_turn: u32,
    phase: GamePhase,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameSession {
    /// Create a session with "Player 1".."Player N" seats and fresh dice.
    pub fn new(config: GameConfig) -> Self {
        let num_players = config.num_players.max(1);
        let players = (1..=num_players)
            .map(|i| PlayerState::new(format!("Player {}", i)))
            .collect();
        GameSession {
            players,
            dice: DiceSet::new(config.num_dice.max(1)),
            num_rounds: config.num_rounds.max(1),
            rolls_per_turn: config.rolls_per_turn.max(1),
            phase: GamePhase::Active { round: 1, player: 0 },
        }
    }

    /// (Re)initialize: round 1, first player, all score tables and dice
    /// turn state cleared. Callable at any point — abandons an in-progress
    /// game without recreating player identities.
    pub fn start_new_game(&mut self) {
        for p in &mut self.players {
            p.engine.reset_scores();
        }
        self.dice.reset_turn();
        self.phase = GamePhase::Active { round: 1, player: 0 };
    }

    /// Roll the unheld dice if the per-turn limit allows; otherwise return
    /// the current values unchanged. This is the purely-local roll path.
    pub fn roll(&mut self, rng: &mut impl Rng) -> Vec<i32> {
        if !self.can_roll() {
            return self.dice.values();
        }
        self.dice.roll_all(rng)
    }

    /// Apply an externally supplied roll (same limit gate as [`Self::roll`]).
    /// Missing or invalid values fall back to local randomness per die.
    pub fn apply_external_roll(&mut self, values: &[i32], rng: &mut impl Rng) -> Vec<i32> {
        if !self.can_roll() {
            return self.dice.values();
        }
        self.dice.apply_external_roll(values, rng)
    }

    /// Score the current dice under `category` for the current player.
    /// Returns the points awarded (0 if the selection is invalid or the
    /// game is over). Does not advance the turn.
    pub fn score_selection(&mut self, category: Category) -> i32 {
        let player = match self.phase {
            GamePhase::Active { player, .. } => player,
            GamePhase::Over { .. } => return 0,
        };
        let hand = self.dice.values();
        self.players[player].engine.assign_score(category, &hand)
    }

    /// End the current player's turn: reset dice turn state and advance
    /// the rotation. Completing a full rotation increments the round;
    /// exceeding the configured round count ends the game.
    pub fn end_turn(&mut self) {
        let (round, player) = match self.phase {
            GamePhase::Active { round, player } => (round, player),
            GamePhase::Over { .. } => return,
        };

        self.dice.reset_turn();

        let next_player = (player + 1) % self.players.len();
        if next_player != 0 {
            self.phase = GamePhase::Active {
                round,
                player: next_player,
            };
            return;
        }

        let next_round = round + 1;
        if next_round > self.num_rounds {
            self.end_game();
        } else {
            self.phase = GamePhase::Active {
                round: next_round,
                player: 0,
            };
        }
    }

    /// Finalize the game: the winner is the first player in seat order
    /// with the strictly highest total. Idempotent — recomputes from the
    /// current (frozen) score tables.
    pub fn end_game(&mut self) -> Winner {
        let mut best = &self.players[0];
        for p in &self.players[1..] {
            if p.total_score() > best.total_score() {
                best = p;
            }
        }
        let winner = Winner {
            name: best.name.clone(),
            total: best.total_score(),
        };
        self.phase = GamePhase::Over {
            winner: winner.clone(),
        };
        winner
    }

    // ── Read-only snapshot accessors ────────────────────────────────────

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.current_player_index()]
    }

    /// Seat index of the player whose turn it is (0 once the game is over).
    pub fn current_player_index(&self) -> usize {
        match self.phase {
            GamePhase::Active { player, .. } => player,
            GamePhase::Over { .. } => 0,
        }
    }

    /// 1-based current round (the final round once the game is over).
    pub fn current_round(&self) -> u32 {
        match self.phase {
            GamePhase::Active { round, .. } => round,
            GamePhase::Over { .. } => self.num_rounds,
        }
    }

    pub fn num_rounds(&self) -> u32 {
        self.num_rounds
    }

    pub fn dice_values(&self) -> Vec<i32> {
        self.dice.values()
    }

    pub fn held_flags(&self) -> Vec<bool> {
        self.dice.held_flags()
    }

    pub fn rolls_this_turn(&self) -> u32 {
        self.dice.rolls_this_turn()
    }

    pub fn rolls_per_turn(&self) -> u32 {
        self.rolls_per_turn
    }

    /// Toggle the hold flag on one die. No-op out of range or after the
    /// game is over.
    pub fn toggle_hold(&mut self, index: usize) {
        if matches!(self.phase, GamePhase::Active { .. }) {
            self.dice.toggle_hold(index);
        }
    }

    /// Clear all hold flags without consuming a roll.
    pub fn clear_holds(&mut self) {
        if matches!(self.phase, GamePhase::Active { .. }) {
            self.dice.clear_holds();
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::Over { .. })
    }

    pub fn winner(&self) -> Option<&Winner> {
        match &self.phase {
            GamePhase::Over { winner } => Some(winner),
            GamePhase::Active { .. } => None,
        }
    }

    fn can_roll(&self) -> bool {
        matches!(self.phase, GamePhase::Active { .. })
            && self.dice.rolls_this_turn() < self.rolls_per_turn
    }
}
