//! Dice state and rolling: single [`Die`] and the fixed-size [`DiceSet`].
//!
//! A `DiceSet` tracks per-die hold flags and a per-turn roll counter. It
//! deliberately does NOT enforce the rolls-per-turn limit — that gate
//! belongs to [`crate::game_session::GameSession`], which owns the set.
//! The counter is exposed so the owner can enforce it.
//!
//! Random values come from a caller-supplied `&mut impl Rng`, never an
//! ambient RNG, so deterministic sequences can be injected in tests.
//! Values from an external supplier enter via
//! [`DiceSet::apply_external_roll`] and are clamped on entry.

use rand::Rng;

use crate::constants::DIE_FACES;

/// Clamp a candidate face value: 1..=6 passes through, anything else
/// becomes 1. Never errors.
#[inline(always)]
pub fn clamp_face(v: i32) -> i32 {
    if (1..=DIE_FACES).contains(&v) {
        v
    } else {
        1
    }
}

/// Count occurrences of each face (1-6) in a hand.
/// face_count[0] is unused; face_count[f] = count of face f.
/// Out-of-range values are ignored.
pub fn count_faces(hand: &[i32]) -> [i32; 7] {
    let mut face_count = [0i32; 7];
    for &d in hand {
        if (1..=DIE_FACES).contains(&d) {
            face_count[d as usize] += 1;
        }
    }
    face_count
}

/// One die: a face value in [1,6] and a hold flag.
///
/// A held die never changes value on a roll.
#[derive(Clone, Copy, Debug)]
pub struct Die {
    value: i32,
    held: bool,
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}

impl Die {
    /// New die showing 1, not held.
    pub fn new() -> Self {
        Die {
            value: 1,
            held: false,
        }
    }

    /// Roll this die. Held dice return their current value unchanged.
    pub fn roll(&mut self, rng: &mut impl Rng) -> i32 {
        if self.held {
            return self.value;
        }
        self.value = rng.random_range(1..=DIE_FACES);
        self.value
    }

    /// Force-set the value, clamping invalid input to a valid face.
    pub fn set_value(&mut self, v: i32) {
        self.value = clamp_face(v);
    }

    /// Flip the hold flag; no other effect.
    pub fn toggle_hold(&mut self) {
        self.held = !self.held;
    }

    #[inline(always)]
    pub fn value(&self) -> i32 {
        self.value
    }

    #[inline(always)]
    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Fixed-size ordered set of dice with a per-turn roll counter.
#[derive(Clone, Debug)]
pub struct DiceSet {
    dice: Vec<Die>,
    rolls_this_turn: u32,
}

impl DiceSet {
    /// Create `count` dice (at least 1), all showing 1, counter at 0.
    pub fn new(count: usize) -> Self {
        DiceSet {
            dice: vec![Die::new(); count.max(1)],
            rolls_this_turn: 0,
        }
    }

    /// Roll every die, respecting individual hold flags, and increment the
    /// roll counter. Returns the resulting values.
    ///
    /// Does not check the rolls-per-turn limit — the caller does.
    pub fn roll_all(&mut self, rng: &mut impl Rng) -> Vec<i32> {
        for die in &mut self.dice {
            die.roll(rng);
        }
        self.rolls_this_turn += 1;
        self.values()
    }

    /// Merge externally supplied values into the unheld dice only.
    ///
    /// Unheld die `i` takes `values[i]` (clamped) when present, otherwise
    /// a locally generated random face. Held dice are untouched. Values
    /// beyond the dice count are ignored. Increments the roll counter.
    pub fn apply_external_roll(&mut self, values: &[i32], rng: &mut impl Rng) -> Vec<i32> {
        for (i, die) in self.dice.iter_mut().enumerate() {
            if die.is_held() {
                continue;
            }
            match values.get(i) {
                Some(&v) => die.set_value(v),
                None => {
                    die.roll(rng);
                }
            }
        }
        self.rolls_this_turn += 1;
        self.values()
    }

    /// Clear all hold flags and reset the roll counter. Called at the
    /// start of every turn, including the first.
    pub fn reset_turn(&mut self) {
        self.clear_holds();
        self.rolls_this_turn = 0;
    }

    /// Clear all hold flags without touching the roll counter.
    pub fn clear_holds(&mut self) {
        for die in &mut self.dice {
            if die.is_held() {
                die.toggle_hold();
            }
        }
    }

    /// Toggle the hold flag on one die. Out-of-range index is a no-op.
    pub fn toggle_hold(&mut self, index: usize) {
        if let Some(die) = self.dice.get_mut(index) {
            die.toggle_hold();
        }
    }

    /// Order-stable snapshot of current face values.
    pub fn values(&self) -> Vec<i32> {
        self.dice.iter().map(|d| d.value()).collect()
    }

    /// Order-stable snapshot of hold flags, parallel to [`Self::values`].
    pub fn held_flags(&self) -> Vec<bool> {
        self.dice.iter().map(|d| d.is_held()).collect()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Rolls taken so far this turn.
    #[inline(always)]
    pub fn rolls_this_turn(&self) -> u32 {
        self.rolls_this_turn
    }
}
