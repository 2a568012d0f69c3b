use miette::SourceSpan;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result, ValidationError};

/// Number of letters in a puzzle
pub const PUZZLE_SIZE: usize = 7;

/// Position of the letter every solution must contain
pub const REQUIRED_POSITION: usize = 3;

/// The seven puzzle letters, already folded to lowercase.
///
/// Duplicates are allowed. They never change the result since matching
/// only checks membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    letters: [char; PUZZLE_SIZE],
}

impl Puzzle {
    pub fn new(letters: [char; PUZZLE_SIZE]) -> Self {
        Self { letters }
    }

    /// Turn raw user input into a puzzle.
    ///
    /// Whitespace and commas are ignored, ASCII letters are folded to
    /// lowercase and anything else is rejected with a span pointing at it.
    pub fn parse(input: &str) -> Result<Self> {
        let mut letters = Vec::with_capacity(PUZZLE_SIZE);

        for (idx, c) in input.char_indices() {
            if c.is_whitespace() || c == ',' {
                continue;
            }

            if !c.is_ascii_alphabetic() {
                return Err(ValidationError::NonAlphabetic {
                    input: input.to_string(),
                    span: SourceSpan::from((idx, c.len_utf8())),
                    found: c,
                }
                .into());
            }

            letters.push(c.to_ascii_lowercase());
        }

        let letters: [char; PUZZLE_SIZE] =
            letters
                .try_into()
                .map_err(|letters: Vec<char>| ValidationError::LetterCount {
                    expected: PUZZLE_SIZE,
                    found: letters.len(),
                })?;

        Ok(Self::new(letters))
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn required(&self) -> char {
        self.letters[REQUIRED_POSITION]
    }
}

impl FromStr for Puzzle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, letter) in self.letters.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }

            let letter = letter.to_ascii_uppercase();
            if idx == REQUIRED_POSITION {
                write!(f, "[{letter}]")?;
            } else {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
