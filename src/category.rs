//! The closed category set and the pure scoring function.
//!
//! Scoring rules:
//! - Upper section (Ones–Sixes): count of matching faces × face value.
//! - Chance: sum of all dice.
//! - Full House / Small Straight / Large Straight / Yatzy: fixed payout
//!   (25/30/40/50) regardless of dice composition. The ruleset pays these
//!   on selection without verifying the combination; selection validity is
//!   only "category unused + non-empty hand" (see
//!   [`crate::score_engine::ScoreEngine::is_valid_selection`]).
//! - Three/Four of a Kind: sum of all dice if any face appears at least
//!   3 (resp. 4) times, else 0.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::dice_mechanics::count_faces;

/// One of the 13 scoring categories.
///
/// The discriminant doubles as the stable score-table index (Ones=0 ..
/// Yatzy=12).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Chance,
    Yatzy,
}

impl Category {
    /// All categories in score-table order.
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Chance,
        Category::Yatzy,
    ];

    /// Stable 0-based score-table index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// True for the six single-face categories whose subtotal drives the bonus.
    #[inline(always)]
    pub fn is_upper(self) -> bool {
        self.index() < 6
    }

    /// Display name, as shown on a scorecard.
    pub fn name(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Small Straight",
            Category::LargeStraight => "Large Straight",
            Category::Chance => "Chance",
            Category::Yatzy => "Yatzy",
        }
    }
}

/// Compute the score for placing `hand` in `category`. Pure, no mutation.
///
/// An empty hand scores 0 in every hand-dependent category; fixed-payout
/// categories pay their constant unconditionally. Callers that care about
/// hand validity gate on `is_valid_selection` first.
pub fn calculate_category_score(category: Category, hand: &[i32]) -> i32 {
    let face_count = count_faces(hand);
    let sum_all: i32 = hand.iter().sum();

    match category {
        Category::Ones
        | Category::Twos
        | Category::Threes
        | Category::Fours
        | Category::Fives
        | Category::Sixes => {
            let face = (category.index() + 1) as i32;
            face_count[face as usize] * face
        }
        Category::ThreeOfAKind => n_of_a_kind_score(&face_count, sum_all, 3),
        Category::FourOfAKind => n_of_a_kind_score(&face_count, sum_all, 4),
        Category::FullHouse => FULL_HOUSE_SCORE,
        Category::SmallStraight => SMALL_STRAIGHT_SCORE,
        Category::LargeStraight => LARGE_STRAIGHT_SCORE,
        Category::Yatzy => YATZY_SCORE,
        Category::Chance => sum_all,
    }
}

/// Sum of all dice if any face appears >= n times, else 0.
fn n_of_a_kind_score(face_count: &[i32; 7], sum_all: i32, n: i32) -> i32 {
    for face in 1..=6 {
        if face_count[face] >= n {
            return sum_all;
        }
    }
    0
}
