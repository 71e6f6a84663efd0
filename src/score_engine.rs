//! One player's score table: selection validation, score assignment,
//! upper-bonus tracking, and subtotals.
//!
//! Invariants:
//! - A category is scored at most once per game; once `used` is set it
//!   never reverts, and the stored score is immutable.
//! - The bonus flag becomes true exactly when the upper subtotal first
//!   reaches [`UPPER_BONUS_THRESHOLD`], and never reverts.
//!
//! Invalid selections are zero-point no-ops, not errors (the caller can
//! read [`ScoreEngine::entry`] to see why).

use crate::category::{calculate_category_score, Category};
use crate::constants::*;

/// Per-category table entry: `score` is meaningful only when `used`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreEntry {
    pub used: bool,
    pub score: i32,
}

/// Score table and bonus state for a single player.
#[derive(Clone, Debug, Default)]
pub struct ScoreEngine {
    table: [ScoreEntry; CATEGORY_COUNT],
    upper_bonus_awarded: bool,
}

impl ScoreEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff the category is still open and the hand is non-empty.
    ///
    /// Deliberately does NOT check that the hand satisfies the category's
    /// combinatorial requirement — fixed-payout categories are payable on
    /// any non-empty hand. Permissive by ruleset policy.
    pub fn is_valid_selection(&self, category: Category, hand: &[i32]) -> bool {
        !self.table[category.index()].used && !hand.is_empty()
    }

    /// Score `hand` under `category`: marks the entry used, stores the
    /// score, and re-evaluates the bonus flag. Returns the points awarded,
    /// or 0 without any change if the selection is invalid.
    pub fn assign_score(&mut self, category: Category, hand: &[i32]) -> i32 {
        if !self.is_valid_selection(category, hand) {
            return 0;
        }
        let score = calculate_category_score(category, hand);
        self.table[category.index()] = ScoreEntry { used: true, score };
        self.update_upper_bonus();
        score
    }

    /// Copy of the table entry for one category (read-only view).
    pub fn entry(&self, category: Category) -> ScoreEntry {
        self.table[category.index()]
    }

    /// Sum of scored upper-section entries (unused entries count 0).
    pub fn upper_subtotal(&self) -> i32 {
        Category::ALL
            .iter()
            .filter(|c| c.is_upper())
            .map(|c| self.table[c.index()].score)
            .sum()
    }

    /// 35 once the bonus flag is set, else 0.
    pub fn upper_bonus(&self) -> i32 {
        if self.upper_bonus_awarded {
            UPPER_BONUS
        } else {
            0
        }
    }

    /// Sum of scored lower-section entries.
    pub fn lower_subtotal(&self) -> i32 {
        Category::ALL
            .iter()
            .filter(|c| !c.is_upper())
            .map(|c| self.table[c.index()].score)
            .sum()
    }

    /// Grand total: upper subtotal + bonus + lower subtotal.
    pub fn total(&self) -> i32 {
        self.upper_subtotal() + self.upper_bonus() + self.lower_subtotal()
    }

    /// Clear every entry and the bonus flag. Used only when a new game
    /// starts.
    pub fn reset_scores(&mut self) {
        self.table = [ScoreEntry::default(); CATEGORY_COUNT];
        self.upper_bonus_awarded = false;
    }

    // Latches on first crossing of the threshold; never clears.
    fn update_upper_bonus(&mut self) {
        if !self.upper_bonus_awarded && self.upper_subtotal() >= UPPER_BONUS_THRESHOLD {
            self.upper_bonus_awarded = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selection_requires_open_category_and_hand() {
        let mut engine = ScoreEngine::new();
        assert!(engine.is_valid_selection(Category::Ones, &[1, 2, 3, 4, 5]));
        assert!(!engine.is_valid_selection(Category::Ones, &[]));

        engine.assign_score(Category::Ones, &[1, 1, 2, 3, 4]);
        assert!(!engine.is_valid_selection(Category::Ones, &[1, 1, 1, 1, 1]));
        assert!(engine.is_valid_selection(Category::Twos, &[1, 1, 1, 1, 1]));
    }

    #[test]
    fn test_assign_score_marks_used_and_stores() {
        let mut engine = ScoreEngine::new();
        let pts = engine.assign_score(Category::Twos, &[1, 1, 1, 2, 2]);
        assert_eq!(pts, 4);
        let entry = engine.entry(Category::Twos);
        assert!(entry.used);
        assert_eq!(entry.score, 4);
    }

    #[test]
    fn test_second_assignment_is_rejected_not_rescored() {
        let mut engine = ScoreEngine::new();
        assert_eq!(engine.assign_score(Category::Fives, &[5, 5, 5, 1, 2]), 15);
        // Better hand, same category: rejected, original score kept.
        assert_eq!(engine.assign_score(Category::Fives, &[5, 5, 5, 5, 5]), 0);
        assert_eq!(engine.entry(Category::Fives).score, 15);
    }

    #[test]
    fn test_empty_hand_is_a_noop() {
        let mut engine = ScoreEngine::new();
        assert_eq!(engine.assign_score(Category::Chance, &[]), 0);
        assert!(!engine.entry(Category::Chance).used);
    }

    #[test]
    fn test_upper_bonus_at_exact_threshold() {
        let mut engine = ScoreEngine::new();
        // Three of each upper face: 3+6+9+12+15+18 = 63.
        engine.assign_score(Category::Ones, &[1, 1, 1, 2, 3]);
        engine.assign_score(Category::Twos, &[2, 2, 2, 1, 3]);
        engine.assign_score(Category::Threes, &[3, 3, 3, 1, 2]);
        engine.assign_score(Category::Fours, &[4, 4, 4, 1, 2]);
        engine.assign_score(Category::Fives, &[5, 5, 5, 1, 2]);
        assert_eq!(engine.upper_bonus(), 0);
        engine.assign_score(Category::Sixes, &[6, 6, 6, 1, 2]);
        assert_eq!(engine.upper_subtotal(), 63);
        assert_eq!(engine.upper_bonus(), 35);
    }

    #[test]
    fn test_upper_bonus_one_short() {
        let mut engine = ScoreEngine::new();
        engine.assign_score(Category::Ones, &[1, 1, 2, 3, 4]); // 2
        engine.assign_score(Category::Twos, &[2, 2, 2, 1, 3]); // 6
        engine.assign_score(Category::Threes, &[3, 3, 3, 1, 2]); // 9
        engine.assign_score(Category::Fours, &[4, 4, 4, 1, 2]); // 12
        engine.assign_score(Category::Fives, &[5, 5, 5, 1, 2]); // 15
        engine.assign_score(Category::Sixes, &[6, 6, 6, 1, 2]); // 18
        assert_eq!(engine.upper_subtotal(), 62);
        assert_eq!(engine.upper_bonus(), 0);
    }

    #[test]
    fn test_total_decomposition() {
        let mut engine = ScoreEngine::new();
        engine.assign_score(Category::Sixes, &[6, 6, 6, 6, 6]);
        engine.assign_score(Category::Yatzy, &[6, 6, 6, 6, 6]);
        engine.assign_score(Category::Chance, &[1, 2, 3, 4, 5]);
        assert_eq!(
            engine.total(),
            engine.upper_subtotal() + engine.upper_bonus() + engine.lower_subtotal()
        );
        assert_eq!(engine.upper_subtotal(), 30);
        assert_eq!(engine.lower_subtotal(), 65);
        assert_eq!(engine.total(), 95);
    }

    #[test]
    fn test_reset_scores() {
        let mut engine = ScoreEngine::new();
        engine.assign_score(Category::Sixes, &[6, 6, 6, 6, 6]);
        engine.assign_score(Category::Fives, &[5, 5, 5, 5, 5]);
        engine.assign_score(Category::Fours, &[4, 4, 4, 4, 4]);
        engine.reset_scores();
        assert_eq!(engine.total(), 0);
        assert_eq!(engine.upper_bonus(), 0);
        for cat in Category::ALL {
            assert!(!engine.entry(cat).used);
        }
    }
}
