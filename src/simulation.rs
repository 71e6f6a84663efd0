//! Heuristic self-play — plays N games through the public [`GameSession`]
//! API and aggregates the score distribution.
//!
//! The policy is deliberately simple and human-like: after each roll, hold
//! every die showing the most frequent face; when the rolls run out, score
//! the best-paying open category. No lookup tables are needed — all
//! decisions use local pattern recognition.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

use crate::category::{calculate_category_score, Category};
use crate::dice_mechanics::count_faces;
use crate::game_session::{GameConfig, GameSession, Winner};

/// Results of a batch simulation.
pub struct SimulationResult {
    pub scores: Vec<i32>,
    pub mean: f64,
    pub std_dev: f64,
    pub min: i32,
    pub max: i32,
    pub median: i32,
    pub elapsed: std::time::Duration,
}

/// Final state of one simulated game.
pub struct GameSummary {
    pub winner: Winner,
    pub totals: Vec<i32>,
}

/// Most frequent face in the hand (ties go to the higher face).
fn dominant_face(hand: &[i32]) -> i32 {
    let counts = count_faces(hand);
    let mut best = 1;
    for f in 1..=6 {
        if counts[f] >= counts[best] {
            best = f;
        }
    }
    best as i32
}

/// Hold every die showing `face`, release everything else.
fn hold_face(session: &mut GameSession, face: i32) {
    session.clear_holds();
    let values = session.dice_values();
    for (i, &v) in values.iter().enumerate() {
        if v == face {
            session.toggle_hold(i);
        }
    }
}

/// Best-paying category still open for the current player.
fn best_open_category(session: &GameSession) -> Option<Category> {
    let hand = session.dice_values();
    let engine = session.current_player().engine();
    Category::ALL
        .into_iter()
        .filter(|&c| !engine.entry(c).used)
        .max_by_key(|&c| calculate_category_score(c, &hand))
}

/// Play one turn for the current player: roll up to the limit with the
/// most-frequent-face hold policy, then score the best open category.
fn play_turn(session: &mut GameSession, rng: &mut SmallRng) {
    session.roll(rng);
    while session.rolls_this_turn() < session.rolls_per_turn() {
        hold_face(session, dominant_face(&session.dice_values()));
        session.roll(rng);
    }
    if let Some(cat) = best_open_category(session) {
        session.score_selection(cat);
    }
    session.end_turn();
}

/// Simulate one full game, returning the winner and all player totals.
pub fn simulate_game(config: &GameConfig, rng: &mut SmallRng) -> GameSummary {
    let mut session = GameSession::new(*config);
    session.start_new_game();
    while !session.is_game_over() {
        play_turn(&mut session, rng);
    }
    let totals = session.players().iter().map(|p| p.total_score()).collect();
    let winner = session.winner().cloned().unwrap_or(Winner {
        name: String::new(),
        total: 0,
    });
    GameSummary { winner, totals }
}

/// Simulate N games in parallel, returning aggregate statistics over the
/// winning totals. Each game gets its own seeded RNG for reproducibility.
pub fn simulate_batch(config: &GameConfig, num_games: usize, seed: u64) -> SimulationResult {
    let start = Instant::now();

    let mut scores: Vec<i32> = (0..num_games)
        .into_par_iter()
        .map(|i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            simulate_game(config, &mut rng).winner.total
        })
        .collect();

    let elapsed = start.elapsed();

    let n = scores.len().max(1);
    let sum: f64 = scores.iter().map(|&s| s as f64).sum();
    let mean = sum / n as f64;
    let variance: f64 = scores
        .iter()
        .map(|&s| (s as f64 - mean).powi(2))
        .sum::<f64>()
        / n as f64;
    let std_dev = variance.sqrt();
    let min = *scores.iter().min().unwrap_or(&0);
    let max = *scores.iter().max().unwrap_or(&0);

    scores.sort_unstable();
    let median = scores.get(n / 2).copied().unwrap_or(0);

    SimulationResult {
        scores,
        mean,
        std_dev,
        min,
        max,
        median,
        elapsed,
    }
}
