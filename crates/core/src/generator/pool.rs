//! The working set of candidate movies for one question.

use rand::Rng;

use crate::provider::MovieRef;

/// A pool must hold more than this many movies to build a question.
pub const MIN_POOL_SIZE: usize = 3;

/// Candidate movies drawn from one seed letter.
///
/// Entries leave the pool as they are drawn, so a movie is never used twice
/// within the same question.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionPool {
    letter: char,
    entries: Vec<MovieRef>,
}

impl QuestionPool {
    /// Build a pool from search results, keeping only distinct movies.
    pub fn from_search(letter: char, results: Vec<MovieRef>) -> Self {
        let mut entries: Vec<MovieRef> = Vec::with_capacity(results.len());
        for entry in results {
            if entry.is_movie() && !entries.iter().any(|e| e.id == entry.id) {
                entries.push(entry);
            }
        }
        Self { letter, entries }
    }

    /// The seed letter this pool was searched with.
    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether there are enough movies for a correct answer and three
    /// wrong ones.
    pub fn is_playable(&self) -> bool {
        self.entries.len() > MIN_POOL_SIZE
    }

    pub fn contains(&self, id: u32) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Remove and return a uniformly chosen entry.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<MovieRef> {
        if self.entries.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.entries.len());
        Some(self.entries.remove(index))
    }
}
