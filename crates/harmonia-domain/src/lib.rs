//! Harmonia Domain Layer
//!
//! Immutable music-theory value objects. Every type here is validated on
//! construction and every derivation returns a new value, so a value that
//! exists is always a legal one.
//!
//! ## Key Concepts
//!
//! - **Frequency**: a nonnegative, finite measurement in hertz
//! - **Interval**: a signed distance in cents (1200 cents = one octave)
//! - **Note**: a letter name (A-G) plus a signed count of accidentals
//! - **Pitch**: a frequency tagged as a musical pitch
//!
//! ## Example
//!
//! ```
//! use harmonia_domain::{Frequency, Note, Pitch};
//!
//! let sum = (Frequency::new(300.0)? + Frequency::new(700.0)?)?;
//! assert_eq!(sum.hertz(), 1000.0);
//!
//! assert_eq!(Note::C.sharps(2)?.to_string(), "C##");
//!
//! let pitch = Pitch::from_frequency(Frequency::new(440.0)?)?;
//! assert_eq!(pitch.frequency().hertz(), 440.0);
//! # Ok::<(), harmonia_domain::TheoryError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod frequency;
pub mod interval;
pub mod letter;
pub mod note;
pub mod pitch;

// Re-exports for convenience
pub use error::{Result, TheoryError};
pub use frequency::Frequency;
pub use interval::{Interval, CENTS_PER_OCTAVE};
pub use letter::Letter;
pub use note::{AccidentalGlyphs, Note};
pub use pitch::Pitch;
