//! Note module - context-less letter names with accidentals
//!
//! A note here is only a spelling: A, A#, G natural, F double flat. It carries
//! no octave and no frequency.

use crate::error::{Result, TheoryError};
use crate::letter::Letter;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol set used when rendering accidentals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentalGlyphs {
    /// `#` and `b`
    #[default]
    Ascii,
    /// `♯` and `♭`
    Unicode,
}

impl AccidentalGlyphs {
    /// Symbol for one sharp
    pub fn sharp(&self) -> char {
        match self {
            AccidentalGlyphs::Ascii => '#',
            AccidentalGlyphs::Unicode => '♯',
        }
    }

    /// Symbol for one flat
    pub fn flat(&self) -> char {
        match self {
            AccidentalGlyphs::Ascii => 'b',
            AccidentalGlyphs::Unicode => '♭',
        }
    }
}

/// A note letter plus a signed count of accidentals
///
/// `accidentals` is 0 for a natural note, positive for sharps and negative
/// for flats. The count is an `i16`; derivations that would leave that range
/// fail with [`TheoryError::OutOfRange`] instead of wrapping.
///
/// Notes are immutable. The seven naturals ([`Note::A`] through [`Note::G`])
/// are constants, and every other note is derived from one of them:
///
/// ```
/// use harmonia_domain::Note;
///
/// let d_flat_flat = Note::D.flat()?.flat()?;
/// assert_eq!(d_flat_flat, Note::D.flats(2)?);
/// assert_eq!(d_flat_flat.to_string(), "Dbb");
/// assert_eq!(Note::D.to_string(), "D");
/// # Ok::<(), harmonia_domain::TheoryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Note {
    letter: Letter,
    accidentals: i16,
}

impl Note {
    /// A natural
    pub const A: Note = Note::natural(Letter::A);
    /// B natural
    pub const B: Note = Note::natural(Letter::B);
    /// C natural
    pub const C: Note = Note::natural(Letter::C);
    /// D natural
    pub const D: Note = Note::natural(Letter::D);
    /// E natural
    pub const E: Note = Note::natural(Letter::E);
    /// F natural
    pub const F: Note = Note::natural(Letter::F);
    /// G natural
    pub const G: Note = Note::natural(Letter::G);

    const fn natural(letter: Letter) -> Self {
        Self::with_accidentals(letter, 0)
    }

    const fn with_accidentals(letter: Letter, accidentals: i16) -> Self {
        Self {
            letter,
            accidentals,
        }
    }

    /// This note shifted by a net accidental count in one step
    ///
    /// Positive values add sharps, negative values add flats. Only the final
    /// count has to fit in an `i16`.
    ///
    /// # Errors
    /// Returns [`TheoryError::OutOfRange`] if the resulting count does not fit
    /// in an `i16`.
    pub fn adjust_by(&self, adjustment: i32) -> Result<Self> {
        let sum = i32::from(self.accidentals).saturating_add(adjustment);
        let accidentals = i16::try_from(sum).map_err(|_| {
            tracing::debug!(
                original = self.accidentals,
                adjustment,
                "Accidental adjustment out of range"
            );
            TheoryError::OutOfRange {
                original: self.accidentals,
                adjustment,
            }
        })?;

        Ok(Self::with_accidentals(self.letter, accidentals))
    }

    /// The seven natural notes, A through G
    pub fn naturals() -> [Note; 7] {
        Letter::ALL.map(Note::natural)
    }

    /// Get the letter name
    pub fn letter(&self) -> Letter {
        self.letter
    }

    /// Get the accidental count (positive = sharps, negative = flats)
    pub fn accidentals(&self) -> i16 {
        self.accidentals
    }

    /// Check whether this note has no accidentals
    pub fn is_natural(&self) -> bool {
        self.accidentals == 0
    }

    /// This note raised by one sharp
    pub fn sharp(&self) -> Result<Self> {
        self.sharps(1)
    }

    /// This note lowered by one flat
    pub fn flat(&self) -> Result<Self> {
        self.flats(1)
    }

    /// This note with `count` additional sharps
    ///
    /// A negative `count` applies flats instead.
    ///
    /// # Errors
    /// Returns [`TheoryError::OutOfRange`] if the resulting count does not fit
    /// in an `i16`.
    pub fn sharps(&self, count: i16) -> Result<Self> {
        self.adjust_by(i32::from(count))
    }

    /// This note with `count` additional flats
    ///
    /// # Errors
    /// Returns [`TheoryError::OutOfRange`] if the resulting count does not fit
    /// in an `i16`.
    pub fn flats(&self, count: i16) -> Result<Self> {
        self.adjust_by(-i32::from(count))
    }

    /// Render with ASCII accidentals, e.g. `"F#"` or `"Bbb"`
    pub fn to_display_string(&self) -> String {
        self.to_display_string_with(AccidentalGlyphs::Ascii)
    }

    /// Render as the letter followed by one glyph per accidental
    pub fn to_display_string_with(&self, glyphs: AccidentalGlyphs) -> String {
        let symbol = match self.accidentals {
            0 => None,
            n if n > 0 => Some(glyphs.sharp()),
            _ => Some(glyphs.flat()),
        };

        let mut output = String::from(self.letter.as_str());
        if let Some(symbol) = symbol {
            let repetitions = usize::from(self.accidentals.unsigned_abs());
            output.extend(std::iter::repeat(symbol).take(repetitions));
        }
        output
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl std::str::FromStr for Note {
    type Err = TheoryError;

    /// Parse a rendered note such as `"C"`, `"F#"`, `"Bbb"` or `"E♭"`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let letter = match chars.next() {
            Some(first) => Letter::parse(first.encode_utf8(&mut [0; 4]))?,
            None => Letter::parse(trimmed)?,
        };

        let suffix = chars.as_str();
        let sharps = suffix.chars().filter(|c| matches!(c, '#' | '♯')).count();
        let flats = suffix.chars().filter(|c| matches!(c, 'b' | '♭')).count();
        let total = suffix.chars().count();

        if sharps + flats != total {
            return Err(TheoryError::invalid_argument(
                "note",
                format!("Unrecognized accidental in '{}'", trimmed),
            ));
        }
        if sharps > 0 && flats > 0 {
            return Err(TheoryError::invalid_argument(
                "note",
                format!("Sharps and flats mixed in '{}'", trimmed),
            ));
        }

        let magnitude = i32::try_from(total).unwrap_or(i32::MAX);
        let adjustment = if flats > 0 { -magnitude } else { magnitude };
        Note::natural(letter).adjust_by(adjustment)
    }
}

impl TryFrom<String> for Note {
    type Error = TheoryError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Note> for String {
    fn from(note: Note) -> Self {
        note.to_display_string()
    }
}
