//! Pitch module

use crate::error::{Result, TheoryError};
use crate::frequency::Frequency;
use serde::{Deserialize, Serialize};

/// A single musical pitch
///
/// A pitch always owns exactly one frequency. It defines no arithmetic or
/// ordering of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    frequency: Frequency,
}

impl Pitch {
    /// Create a pitch from a frequency
    ///
    /// Accepts either a [`Frequency`] or an `Option<Frequency>`.
    ///
    /// # Errors
    /// Returns [`TheoryError::NullArgument`] if no frequency is supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use harmonia_domain::{Frequency, Pitch, TheoryError};
    ///
    /// let pitch = Pitch::from_frequency(Frequency::new(440.0)?)?;
    /// assert_eq!(pitch.frequency().hertz(), 440.0);
    ///
    /// assert!(matches!(
    ///     Pitch::from_frequency(None),
    ///     Err(TheoryError::NullArgument { .. })
    /// ));
    /// # Ok::<(), TheoryError>(())
    /// ```
    pub fn from_frequency(frequency: impl Into<Option<Frequency>>) -> Result<Self> {
        let frequency = frequency
            .into()
            .ok_or(TheoryError::NullArgument { name: "frequency" })?;

        Ok(Self { frequency })
    }

    /// The frequency value of the pitch
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }
}
