//! Accumulated knowledge from feedback
//!
//! Three append-only collections built round by round. Feedback is recorded
//! literally, position by position: a letter marked absent in one slot and
//! correct in another lands in both collections, and no cross-check is made.

use crate::core::{Feedback, Mark, WORD_LENGTH, Word};
use log::trace;
use rustc_hash::FxHashSet;

/// A letter pinned to (or excluded from) one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub letter: u8,
    pub position: usize,
}

impl Placement {
    #[must_use]
    pub const fn new(letter: u8, position: usize) -> Self {
        Self { letter, position }
    }
}

/// Constraint state accumulated across rounds
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    excluded: FxHashSet<u8>,
    misplaced: Vec<Placement>,
    correct: Vec<Placement>,
}

impl Constraints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one round of feedback against the guess it describes
    ///
    /// Positions without a recognised mark record nothing.
    pub fn record(&mut self, guess: &Word, feedback: &Feedback) {
        for (position, mark) in feedback.marks().iter().enumerate() {
            let letter = guess.char_at(position);
            match mark {
                Some(Mark::Absent) => {
                    self.excluded.insert(letter);
                }
                Some(Mark::Misplaced) => self.misplaced.push(Placement::new(letter, position)),
                Some(Mark::Correct) => self.correct.push(Placement::new(letter, position)),
                None => trace!("position {position} of {guess} has no mark, skipping"),
            }
        }
    }

    /// Check whether `word` is consistent with everything recorded so far
    ///
    /// # Examples
    /// ```
    /// use wordle_freq::core::{Feedback, Word};
    /// use wordle_freq::solver::Constraints;
    ///
    /// let mut constraints = Constraints::new();
    /// let guess = Word::new("crane").unwrap();
    /// constraints.record(&guess, &Feedback::parse("XXGXG").unwrap());
    ///
    /// assert!(constraints.allows(&Word::new("slate").unwrap()));
    /// assert!(!constraints.allows(&Word::new("stare").unwrap())); // contains R
    /// ```
    #[must_use]
    pub fn allows(&self, word: &Word) -> bool {
        self.has_no_excluded(word) && self.satisfies_misplaced(word) && self.satisfies_correct(word)
    }

    /// Keep only the words that satisfy every constraint
    pub fn filter(&self, candidates: &mut Vec<Word>) {
        candidates.retain(|word| self.allows(word));
    }

    fn has_no_excluded(&self, word: &Word) -> bool {
        !word.chars().iter().any(|letter| self.excluded.contains(letter))
    }

    fn satisfies_misplaced(&self, word: &Word) -> bool {
        self.misplaced
            .iter()
            .all(|p| word.has_letter(p.letter) && word.char_at(p.position) != p.letter)
    }

    fn satisfies_correct(&self, word: &Word) -> bool {
        self.correct
            .iter()
            .all(|p| word.char_at(p.position) == p.letter)
    }

    /// Letters confirmed absent, sorted
    #[must_use]
    pub fn excluded(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.excluded.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    #[must_use]
    pub fn misplaced(&self) -> &[Placement] {
        &self.misplaced
    }

    #[must_use]
    pub fn correct(&self) -> &[Placement] {
        &self.correct
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty() && self.misplaced.is_empty() && self.correct.is_empty()
    }

    /// Known letters laid out by position, `.` where nothing is pinned
    #[must_use]
    pub fn known_pattern(&self) -> String {
        let mut slots = [b'.'; WORD_LENGTH];
        for p in &self.correct {
            slots[p.position] = p.letter.to_ascii_uppercase();
        }
        slots.iter().map(|&b| char::from(b)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn recorded(guess: &str, feedback: &str) -> Constraints {
        let mut constraints = Constraints::new();
        constraints.record(&word(guess), &Feedback::parse_lenient(feedback));
        constraints
    }

    #[test]
    fn record_sorts_marks_into_collections() {
        let constraints = recorded("crane", "XYGXY");

        assert_eq!(constraints.excluded(), vec![b'c', b'n']);
        assert_eq!(
            constraints.misplaced(),
            &[Placement::new(b'r', 1), Placement::new(b'e', 4)]
        );
        assert_eq!(constraints.correct(), &[Placement::new(b'a', 2)]);
    }

    #[test]
    fn record_skips_unknown_positions() {
        let constraints = recorded("crane", "??G??");

        assert!(constraints.excluded().is_empty());
        assert!(constraints.misplaced().is_empty());
        assert_eq!(constraints.correct(), &[Placement::new(b'a', 2)]);
    }

    #[test]
    fn empty_constraints_allow_everything() {
        let constraints = Constraints::new();
        assert!(constraints.is_empty());
        for w in ["crane", "zzzzz", "hello"] {
            assert!(constraints.allows(&word(w)));
        }
    }

    #[test]
    fn all_absent_removes_overlapping_words() {
        let mut candidates = words_from_slice(&["crane", "slate", "hello", "world", "stare"]);
        let constraints = recorded("crane", "XXXXX");
        constraints.filter(&mut candidates);

        // Everything except words sharing none of c, r, a, n, e
        let texts: Vec<&str> = candidates.iter().map(Word::text).collect();
        assert!(texts.is_empty(), "hello (e) and world (r) overlap too: {texts:?}");
    }

    #[test]
    fn all_absent_keeps_disjoint_words() {
        let mut candidates = words_from_slice(&["crane", "slate", "moldy", "built", "stare"]);
        let constraints = recorded("crane", "XXXXX");
        constraints.filter(&mut candidates);

        let texts: Vec<&str> = candidates.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["moldy", "built"]);
    }

    #[test]
    fn misplaced_requires_presence_elsewhere() {
        let constraints = recorded("stare", "YXXXX");

        assert!(constraints.allows(&word("bossy"))); // s present, not at 0
        assert!(!constraints.allows(&word("solid"))); // s at 0
        assert!(!constraints.allows(&word("moldy"))); // no s at all
    }

    #[test]
    fn correct_requires_exact_position() {
        let constraints = recorded("crane", "GXXXX");

        assert!(constraints.allows(&word("cloud")));
        assert!(!constraints.allows(&word("mucky")));
    }

    #[test]
    fn contradictory_constraints_are_kept_and_empty_the_set() {
        // C correct at 0 and C absent at the same time
        let mut constraints = recorded("cxxxx", "GXXXX");
        constraints.record(&word("bcddd"), &Feedback::parse_lenient("XXXXX"));
        assert!(constraints.excluded().contains(&b'c'));
        assert_eq!(constraints.correct(), &[Placement::new(b'c', 0)]);

        let mut candidates = words_from_slice(&["crane", "cloud", "chime", "moldy"]);
        constraints.filter(&mut candidates);
        assert!(candidates.is_empty());
    }

    #[test]
    fn duplicate_letters_recorded_literally() {
        // SPEED against ABIDE: one E misplaced, the other absent
        let guess = word("speed");
        let answer = word("abide");
        let mut constraints = Constraints::new();
        constraints.record(&guess, &Feedback::between(&guess, &answer));

        assert!(constraints.excluded().contains(&b'e'));
        assert!(!constraints.allows(&answer));
    }

    #[test]
    fn filter_is_idempotent_and_monotonic() {
        let mut candidates =
            words_from_slice(&["crane", "slate", "irate", "share", "flare", "moldy", "react"]);
        let constraints = recorded("crane", "XYGXG");

        let before = candidates.len();
        constraints.filter(&mut candidates);
        let once = candidates.clone();
        constraints.filter(&mut candidates);

        assert_eq!(candidates, once);
        assert!(candidates.len() <= before);
        assert_eq!(
            candidates.iter().map(Word::text).collect::<Vec<_>>(),
            vec!["share", "flare"]
        );
    }

    #[test]
    fn known_pattern_shows_correct_letters() {
        let constraints = recorded("crane", "GXGXX");
        assert_eq!(constraints.known_pattern(), "C.A..");
    }
}
