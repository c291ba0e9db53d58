//! Arity selection.

use brainstorm_foundation::{Error, ErrorKind, Result};

/// Default probability of a three-subject title.
pub const THREE_CHANCE: f64 = 0.04;

/// Default probability of a two-subject title.
pub const TWO_CHANCE: f64 = 0.16;

/// Probabilities used to pick how many subjects a title uses.
///
/// A roll `r` in `[0, 1)` picks three subjects if `r < three_chance`, two if
/// `r < three_chance + two_chance`, and one otherwise. Arities that need more
/// subjects than are available fall through to the next one down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationPolicy {
    three_chance: f64,
    two_chance: f64,
}

impl Default for GenerationPolicy {
    fn default() -> Self {
        Self {
            three_chance: THREE_CHANCE,
            two_chance: TWO_CHANCE,
        }
    }
}

impl GenerationPolicy {
    /// Creates a policy with the given probabilities.
    ///
    /// # Errors
    ///
    /// Returns an error unless both chances are in `[0, 1]` and their sum is
    /// at most 1.
    pub fn new(three_chance: f64, two_chance: f64) -> Result<Self> {
        for (name, chance) in [("three_chance", three_chance), ("two_chance", two_chance)] {
            if !(0.0..=1.0).contains(&chance) {
                return Err(Error::new(ErrorKind::InvalidPolicy(format!(
                    "{name} must be between 0 and 1, got {chance}"
                ))));
            }
        }
        if three_chance + two_chance > 1.0 {
            return Err(Error::new(ErrorKind::InvalidPolicy(format!(
                "chances sum to {}, which exceeds 1",
                three_chance + two_chance
            ))));
        }
        Ok(Self {
            three_chance,
            two_chance,
        })
    }

    /// Creates a policy that always uses a single subject.
    #[must_use]
    pub const fn single_subject() -> Self {
        Self {
            three_chance: 0.0,
            two_chance: 0.0,
        }
    }

    /// Returns the probability of a three-subject title.
    #[must_use]
    pub const fn three_chance(&self) -> f64 {
        self.three_chance
    }

    /// Returns the probability of a two-subject title.
    #[must_use]
    pub const fn two_chance(&self) -> f64 {
        self.two_chance
    }

    /// Picks an arity for `roll` given `available` subjects.
    ///
    /// Always returns at least 1; callers check for an empty subject set.
    #[must_use]
    pub fn pick_arity(&self, available: usize, roll: f64) -> usize {
        if available >= 3 && roll < self.three_chance {
            3
        } else if available >= 2 && roll < self.three_chance + self.two_chance {
            2
        } else {
            1
        }
    }
}
