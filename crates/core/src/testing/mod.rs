//! Testing utilities and mock implementations.
//!
//! This module provides a mock movie provider and a scripted console,
//! allowing whole games to be played without network access or a terminal.
//!
//! # Example
//!
//! ```rust,ignore
//! use cinequiz_core::testing::{fixtures, MockMovieProvider, ScriptedConsole};
//!
//! let provider = MockMovieProvider::new();
//! provider.set_movies(fixtures::catalog(10)).await;
//!
//! let console = ScriptedConsole::new(["easy", "A", "B", "C"]);
//! ```

mod mock_provider;
mod scripted_console;

pub use mock_provider::{MockMovieProvider, RecordedProviderQuery};
pub use scripted_console::{Responder, ScriptedConsole};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::provider::MovieRecord;

    /// Create a movie record with a plot derived from the title.
    pub fn movie_record(id: u32, title: &str, year: i32, directors: &[&str]) -> MovieRecord {
        MovieRecord {
            id,
            title: title.to_string(),
            year: Some(year),
            plot: Some(format!(
                "A story about {}, told over two long hours by people who care deeply about it.",
                title.to_lowercase()
            )),
            directors: directors.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Create `count` movies with distinct titles, plots and director lists.
    ///
    /// IDs run from 1 to `count`. Every fourth movie has two directors.
    pub fn catalog(count: u32) -> Vec<MovieRecord> {
        (1..=count)
            .map(|id| {
                let mut directors = vec![format!("Director {}", id)];
                if id % 4 == 0 {
                    directors.push(format!("Co-Director {}", id));
                }
                MovieRecord {
                    id,
                    title: format!("Feature Film {}", id),
                    year: Some(1960 + (id as i32 * 3) % 60),
                    plot: Some(format!(
                        "Chapter {} of an invented saga, in which a hero called Hero{} \
                         crosses a desert, loses a friend and finds a way home.",
                        id, id
                    )),
                    directors,
                }
            })
            .collect()
    }
}
