//! # Yatzy — multiplayer turn-based dice game engine
//!
//! Implements the full game loop for a 13-category Yatzy variant:
//! dice rolls with per-die holds, category scoring, upper-section bonus,
//! turn/round rotation, and end-of-game winner selection.
//!
//! ## Architecture
//!
//! | Layer | Module | Description |
//! |-------|--------|-------------|
//! | Dice | [`dice_mechanics`] | `Die` / `DiceSet`: face values, holds, per-turn roll counting, external-roll merging |
//! | Rules | [`category`] | The closed 13-category set and the pure scoring function |
//! | Scoring | [`score_engine`] | One player's score table, selection validation, bonus tracking |
//! | Orchestration | [`game_session`] | Players, rounds, the Active/Over state machine, winner selection |
//! | Shell | [`server`] | Stateless HTTP endpoint supplying random dice values |
//! | Tooling | [`simulation`] | Heuristic self-play for statistics and end-to-end exercise |
//!
//! ## Design rules
//!
//! Every core operation is total: malformed input is clamped, invalid
//! selections return 0 and change nothing, and rolling past the per-turn
//! limit returns the current values unchanged. No core operation panics
//! or returns `Result`.
//!
//! Randomness is a capability: operations that roll take `&mut impl Rng`,
//! so callers (and tests) can inject a seeded [`rand::rngs::SmallRng`].
//! Externally supplied values enter through
//! [`dice_mechanics::DiceSet::apply_external_roll`], which validates every
//! value on entry.

pub mod category;
pub mod constants;
pub mod dice_mechanics;
pub mod env_config;
pub mod game_session;
pub mod score_engine;
pub mod server;
pub mod simulation;
