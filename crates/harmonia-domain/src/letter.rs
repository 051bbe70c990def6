//! Letter module - the seven note letter names

use crate::error::{Result, TheoryError};
use std::fmt;

/// Letter name of a note, without any accidentals
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Letter {
    /// A
    A,
    /// B
    B,
    /// C
    C,
    /// D
    D,
    /// E
    E,
    /// F
    F,
    /// G
    G,
}

impl Letter {
    /// All letters in alphabetical order
    pub const ALL: [Letter; 7] = [
        Letter::A,
        Letter::B,
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
    ];

    /// Get the letter as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Letter::A => "A",
            Letter::B => "B",
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
        }
    }

    /// Parse a letter name (case-insensitive, surrounding whitespace ignored)
    ///
    /// # Errors
    /// Returns [`TheoryError::InvalidArgument`] if the name is empty, blank,
    /// or not one of A-G.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TheoryError::invalid_argument(
                "letter",
                "Supplied note name must not be empty",
            ));
        }

        match trimmed.to_uppercase().as_str() {
            "A" => Ok(Letter::A),
            "B" => Ok(Letter::B),
            "C" => Ok(Letter::C),
            "D" => Ok(Letter::D),
            "E" => Ok(Letter::E),
            "F" => Ok(Letter::F),
            "G" => Ok(Letter::G),
            _ => Err(TheoryError::invalid_argument(
                "letter",
                format!("Unknown note name: {}", trimmed),
            )),
        }
    }
}

impl std::str::FromStr for Letter {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_names() {
        let names: Vec<&str> = Letter::ALL.iter().map(Letter::as_str).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Letter::parse("A").unwrap(), Letter::A);
        assert_eq!(Letter::parse("g").unwrap(), Letter::G);
        assert_eq!(" c ".parse::<Letter>().unwrap(), Letter::C);
    }

    #[test]
    fn test_parse_blank_rejected() {
        for input in ["", "   ", "\t"] {
            assert!(matches!(
                Letter::parse(input),
                Err(TheoryError::InvalidArgument { name: "letter", .. })
            ));
        }
    }

    #[test]
    fn test_parse_unknown_rejected() {
        assert!(Letter::parse("H").is_err());
        assert!(Letter::parse("AB").is_err());
    }
}
