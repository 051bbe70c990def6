//! Interval module - relations between notes or pitches, in cents

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cents in one octave
///
/// Reserved for octave arithmetic on intervals; no operation uses it yet.
pub const CENTS_PER_OCTAVE: i32 = 1200;

/// An interval, or relation, between two musical notes or pitches
///
/// Cents is the single stored unit; any other unit should be derived from it.
/// Negative, zero, and positive values are all legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Interval {
    cents: i32,
}

impl Interval {
    /// Create an interval from a number of cents
    ///
    /// # Examples
    ///
    /// ```
    /// use harmonia_domain::Interval;
    ///
    /// let fifth = Interval::from_cents(700);
    /// assert_eq!(fifth.cents(), 700);
    /// ```
    pub fn from_cents(cents: i32) -> Self {
        Self { cents }
    }

    /// Get the cent value of the interval
    pub fn cents(&self) -> i32 {
        self.cents
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} cents", self.cents)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every integer is a legal interval and is kept as-is
        #[test]
        fn test_cents_preserved(c: i32) {
            prop_assert_eq!(Interval::from_cents(c).cents(), c);
        }
    }
}
