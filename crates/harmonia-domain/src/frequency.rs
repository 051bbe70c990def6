//! Frequency module - validated measurements in hertz

use crate::error::{Result, TheoryError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Sub};

/// A single frequency, in hertz
///
/// The only invalid frequencies are negative ones, positive infinity, and NaN.
/// There is no upper bound besides infinity, and zero is allowed.
///
/// Frequencies are totally ordered by their hertz value. An absent frequency
/// (`None`) sorts below every present one, which `Option<Frequency>` already
/// provides.
///
/// # Examples
///
/// ```
/// use harmonia_domain::Frequency;
///
/// let a4 = Frequency::new(440.0).unwrap();
/// assert_eq!(a4.hertz(), 440.0);
/// assert!(Frequency::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Frequency {
    hertz: f64,
}

impl Frequency {
    /// Create a new frequency
    ///
    /// # Errors
    /// Returns [`TheoryError::InvalidFrequency`] if `hertz` is negative,
    /// positive infinity, or NaN.
    pub fn new(hertz: f64) -> Result<Self> {
        if hertz.is_nan() || hertz < 0.0 || hertz == f64::INFINITY {
            tracing::debug!(hertz, "Rejected invalid frequency");
            return Err(TheoryError::InvalidFrequency { hertz });
        }

        // -0.0 passes the sign check; fold it into 0.0 so Eq, Ord and Hash agree
        Ok(Self { hertz: hertz + 0.0 })
    }

    /// Validating conversion from a bare number
    ///
    /// Same contract as [`Frequency::new`]; reads better at call sites that
    /// treat a literal as a frequency.
    pub fn from_hertz(hertz: impl Into<f64>) -> Result<Self> {
        Self::new(hertz.into())
    }

    /// Get the hertz value
    pub fn hertz(&self) -> f64 {
        self.hertz
    }

    /// Sum of two frequencies, re-validated
    pub fn checked_add(self, other: Frequency) -> Result<Self> {
        Self::new(self.hertz + other.hertz)
    }

    /// Difference of two frequencies, re-validated
    ///
    /// # Errors
    /// Fails with [`TheoryError::InvalidFrequency`] when `other` is higher
    /// than `self`.
    pub fn checked_sub(self, other: Frequency) -> Result<Self> {
        Self::new(self.hertz - other.hertz)
    }
}

impl TryFrom<f64> for Frequency {
    type Error = TheoryError;

    fn try_from(hertz: f64) -> Result<Self> {
        Self::new(hertz)
    }
}

impl From<Frequency> for f64 {
    fn from(frequency: Frequency) -> Self {
        frequency.hertz
    }
}

impl Add for Frequency {
    type Output = Result<Frequency>;

    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for Frequency {
    type Output = Result<Frequency>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl PartialEq for Frequency {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frequency {}

impl PartialOrd for Frequency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frequency {
    fn cmp(&self, other: &Self) -> Ordering {
        // NaN and -0.0 never get past `new`, so total_cmp is plain numeric order here
        self.hertz.total_cmp(&other.hertz)
    }
}

impl Hash for Frequency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hertz.to_bits().hash(state);
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Hz", self.hertz)
    }
}
