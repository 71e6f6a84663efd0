//! Game rule constants and configuration defaults.
//!
//! This crate plays the 13-category Yatzy variant: six upper-section
//! categories (Ones through Sixes) plus seven lower-section categories.
//! The upper bonus is 35 points at a 63-point threshold.

/// Number of scoring categories (Ones through Yatzy).
pub const CATEGORY_COUNT: usize = 13;

/// Number of faces on a die. Valid face values are 1..=DIE_FACES.
pub const DIE_FACES: i32 = 6;

/// Upper-section subtotal required to earn the bonus.
pub const UPPER_BONUS_THRESHOLD: i32 = 63;

/// Bonus awarded once the upper subtotal reaches the threshold.
pub const UPPER_BONUS: i32 = 35;

/// Fixed payout for Full House, regardless of dice composition.
pub const FULL_HOUSE_SCORE: i32 = 25;

/// Fixed payout for Small Straight, regardless of dice composition.
pub const SMALL_STRAIGHT_SCORE: i32 = 30;

/// Fixed payout for Large Straight, regardless of dice composition.
pub const LARGE_STRAIGHT_SCORE: i32 = 40;

/// Fixed payout for Yatzy, regardless of dice composition.
pub const YATZY_SCORE: i32 = 50;

/// Default player count for a new session.
pub const DEFAULT_NUM_PLAYERS: usize = 1;

/// Default number of rounds: one per category.
pub const DEFAULT_NUM_ROUNDS: u32 = 13;

/// Default number of dice in play.
pub const DEFAULT_NUM_DICE: usize = 5;

/// Default rolls allowed per turn.
pub const DEFAULT_ROLLS_PER_TURN: u32 = 3;
