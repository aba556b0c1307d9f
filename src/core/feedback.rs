//! Per-letter feedback for a guess
//!
//! Each of the five positions carries one of three marks:
//! - `X` = Absent (letter not in the answer)
//! - `Y` = Misplaced (letter in the answer, not at this position)
//! - `G` = Correct (letter at this exact position)
//!
//! A position whose symbol was not recognised holds `None` and records nothing.

use super::word::{WORD_LENGTH, Word, letter_index};
use std::fmt;
use thiserror::Error;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Misplaced,
    Correct,
}

impl Mark {
    /// Parse one feedback symbol
    ///
    /// Accepts `X`/`x`/`-`/`_`/⬜/⬛ for absent, `Y`/`y`/🟨 for misplaced and
    /// `G`/`g`/🟩 for correct.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'X' | 'x' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            'Y' | 'y' | '🟨' => Some(Self::Misplaced),
            'G' | 'g' | '🟩' => Some(Self::Correct),
            _ => None,
        }
    }

    /// Canonical ASCII symbol
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'X',
            Self::Misplaced => 'Y',
            Self::Correct => 'G',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Misplaced => '🟨',
            Self::Correct => '🟩',
        }
    }
}

/// Error type for feedback strings that fail strict parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Feedback must be exactly 5 symbols, got {0}")]
    WrongLength(usize),
    #[error("Unrecognized feedback symbol '{symbol}' at position {column} (use X, Y or G)")]
    UnknownSymbol { symbol: char, column: usize },
}

/// Feedback for a whole guess, aligned with the guess letter by letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    marks: [Option<Mark>; WORD_LENGTH],
    /// Set when a lenient parse saw more than five symbols
    overlong: bool,
}

impl Feedback {
    /// All five letters correct
    pub const SOLVED: Self = Self {
        marks: [Some(Mark::Correct); WORD_LENGTH],
        overlong: false,
    };

    /// Build feedback where every position carries a mark
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        let mut slots = [None; WORD_LENGTH];
        let mut i = 0;
        while i < WORD_LENGTH {
            slots[i] = Some(marks[i]);
            i += 1;
        }
        Self {
            marks: slots,
            overlong: false,
        }
    }

    /// Parse a feedback string strictly
    ///
    /// # Errors
    /// Returns `FeedbackError` if the string is not exactly five symbols or
    /// contains a symbol outside the accepted set.
    ///
    /// # Examples
    /// ```
    /// use wordle_freq::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::parse("XYGXX").unwrap();
    /// assert_eq!(feedback.mark(2), Some(Mark::Correct));
    /// assert_eq!(Feedback::parse("🟩🟩🟩🟩🟩").unwrap(), Feedback::SOLVED);
    /// assert!(Feedback::parse("XYZXX").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(FeedbackError::WrongLength(symbols.len()));
        }

        let mut slots = [None; WORD_LENGTH];
        for (position, (&symbol, slot)) in symbols.iter().zip(slots.iter_mut()).enumerate() {
            *slot = Some(Mark::from_symbol(symbol).ok_or(FeedbackError::UnknownSymbol {
                symbol,
                column: position + 1,
            })?);
        }

        Ok(Self {
            marks: slots,
            overlong: false,
        })
    }

    /// Parse a feedback string the forgiving way
    ///
    /// Unknown symbols and missing positions record nothing. Symbols past the
    /// fifth record nothing either, but such a line never counts as solved.
    ///
    /// ```
    /// use wordle_freq::core::{Feedback, Mark};
    ///
    /// let feedback = Feedback::parse_lenient("X?G");
    /// assert_eq!(feedback.mark(0), Some(Mark::Absent));
    /// assert_eq!(feedback.mark(1), None);
    /// assert_eq!(feedback.mark(4), None);
    ///
    /// assert!(!Feedback::parse_lenient("GGGGGX").is_solved());
    /// ```
    #[must_use]
    pub fn parse_lenient(s: &str) -> Self {
        let mut marks = [None; WORD_LENGTH];
        let mut symbols = s.chars();
        for (slot, symbol) in marks.iter_mut().zip(symbols.by_ref()) {
            *slot = Mark::from_symbol(symbol);
        }
        Self {
            marks,
            overlong: symbols.next().is_some(),
        }
    }

    /// Score `guess` against a known `answer` using the game's rules
    ///
    /// Exact matches are marked first and consume their letter; remaining
    /// letters are marked misplaced while unmatched copies remain in the answer.
    ///
    /// # Examples
    /// ```
    /// use wordle_freq::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("react").unwrap();
    /// assert_eq!(Feedback::between(&guess, &answer).to_symbols(), "YYGXY");
    /// ```
    #[must_use]
    pub fn between(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut available = [0u8; 26];

        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == answer.char_at(i) {
                marks[i] = Mark::Correct;
            } else {
                available[letter_index(answer.char_at(i))] += 1;
            }
        }

        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Correct {
                continue;
            }
            let count = &mut available[letter_index(guess.char_at(i))];
            if *count > 0 {
                marks[i] = Mark::Misplaced;
                *count -= 1;
            }
        }

        Self::new(marks)
    }

    /// The mark at `position`, or `None` if that symbol was not recognised
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark(&self, position: usize) -> Option<Mark> {
        self.marks[position]
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Option<Mark>; WORD_LENGTH] {
        &self.marks
    }

    /// Check if every position is correct and nothing followed the fifth
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Whether a lenient parse dropped symbols past the fifth
    #[must_use]
    pub const fn is_overlong(&self) -> bool {
        self.overlong
    }

    /// Render as `X`/`Y`/`G`, with `?` for unrecognised positions
    #[must_use]
    pub fn to_symbols(&self) -> String {
        self.marks
            .iter()
            .map(|mark| mark.map_or('?', Mark::symbol))
            .collect()
    }

    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks
            .iter()
            .map(|mark| mark.map_or('❔', Mark::emoji))
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_symbols())
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
