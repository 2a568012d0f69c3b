use serde::Serialize;
use std::collections::HashSet;
use tracing::debug;

use crate::puzzle::dictionary::Dictionary;
use crate::puzzle::letters::Puzzle;

/// Words matching a single query, in dictionary order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution<'d> {
    count: usize,
    words: Vec<&'d str>,
}

impl<'d> Solution<'d> {
    fn new(words: Vec<&'d str>) -> Self {
        Self {
            count: words.len(),
            words,
        }
    }

    pub fn words(&self) -> &[&'d str] {
        &self.words
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Answers puzzles against a borrowed, immutable dictionary
#[derive(Debug, Clone, Copy)]
pub struct Solver<'d> {
    dictionary: &'d Dictionary,
}

impl<'d> Solver<'d> {
    pub fn new(dictionary: &'d Dictionary) -> Self {
        Self { dictionary }
    }

    pub fn solve(&self, puzzle: &Puzzle) -> Solution<'d> {
        let solution = Solution::new(search(self.dictionary, puzzle.letters(), puzzle.required()));

        debug!("Puzzle {} has {} solutions", puzzle, solution.count());

        solution
    }
}

/// Every entry that contains `required` and is spelled only with `letters`.
///
/// Matching is case-sensitive; callers pass lowercase letters. Blank entries
/// never contain `required` and so never match.
pub fn search<'d>(dictionary: &'d Dictionary, letters: &[char], required: char) -> Vec<&'d str> {
    let allowed: HashSet<char> = letters.iter().copied().collect();

    dictionary
        .iter()
        .filter(|word| word.contains(required))
        .filter(|word| word.chars().all(|c| allowed.contains(&c)))
        .collect()
}
