//! Shared helpers for game integration tests.
//!
//! The oracle reads the console transcript the same way a player would and
//! looks the question up in the fixture catalog to find the right option.

#![allow(dead_code)]

use std::sync::Arc;

use cinequiz_core::{
    testing::{fixtures, MockMovieProvider, Responder, ScriptedConsole},
    Game, GameConfig, MovieProvider, MovieRecord, QuestionGenerator, RetryPolicy,
};

/// Year used to clamp year answers, so runs do not depend on the clock.
pub const CURRENT_YEAR: i32 = 2024;

/// Catalog size used by most tests.
pub const CATALOG_SIZE: u32 = 12;

/// A game wired to a mock provider holding the fixture catalog.
pub struct TestHarness {
    pub provider: Arc<MockMovieProvider>,
    pub catalog: Vec<MovieRecord>,
}

impl TestHarness {
    pub async fn new() -> Self {
        let catalog = fixtures::catalog(CATALOG_SIZE);
        let provider = Arc::new(MockMovieProvider::new());
        provider.set_movies(catalog.clone()).await;
        Self { provider, catalog }
    }

    pub fn game(&self, retry: RetryPolicy, console: ScriptedConsole) -> Game<ScriptedConsole> {
        let provider: Arc<dyn MovieProvider> = self.provider.clone();
        let generator = QuestionGenerator::new(provider, retry).with_current_year(CURRENT_YEAR);
        Game::new(generator, console, GameConfig::default())
    }

    /// Responder answering round `n` (1-indexed) correctly iff `correct(n)`.
    pub fn responder<F>(&self, correct: F) -> Responder
    where
        F: Fn(usize) -> bool + Send + 'static,
    {
        let catalog = self.catalog.clone();
        Box::new(move |output: &[String]| {
            let round = question_count(output);
            let options = current_options(output);
            let expected = expected_answer(output, &catalog)?;
            let pick = if correct(round) {
                options.iter().find(|(_, text)| *text == expected)
            } else {
                options.iter().find(|(_, text)| *text != expected)
            };
            pick.map(|(label, _)| label.clone())
        })
    }
}

/// Number of question headers printed so far.
pub fn question_count(output: &[String]) -> usize {
    output.iter().filter(|line| line.starts_with(">>")).count()
}

fn last_question(output: &[String]) -> Option<usize> {
    output.iter().rposition(|line| line.starts_with(">>"))
}

/// `(label, answer text)` pairs of the question on screen.
pub fn current_options(output: &[String]) -> Vec<(String, String)> {
    let Some(start) = last_question(output) else {
        return Vec::new();
    };
    output[start..]
        .iter()
        .filter(|line| line.starts_with("   "))
        .filter_map(|line| line.trim_start().split_once(") "))
        .map(|(label, text)| (label.to_string(), text.to_string()))
        .collect()
}

/// The text of the right option for the question on screen.
pub fn expected_answer(output: &[String], catalog: &[MovieRecord]) -> Option<String> {
    let start = last_question(output)?;
    let header = &output[start];

    if let Some(title) = header
        .strip_prefix(">> In what year was \"")
        .and_then(|rest| rest.strip_suffix("\" released?"))
    {
        let movie = catalog.iter().find(|m| m.title == title)?;
        return movie.year.map(|y| y.to_string());
    }

    if let Some(title) = header
        .strip_prefix(">> Who directed \"")
        .and_then(|rest| rest.strip_suffix("\"?"))
    {
        let movie = catalog.iter().find(|m| m.title == title)?;
        return Some(movie.directors.join(", "));
    }

    // Title question: the plot sits between two blank lines below the header.
    let plot = output[start + 2..]
        .iter()
        .take_while(|line| !line.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ");
    catalog
        .iter()
        .find(|m| {
            m.plot
                .as_deref()
                .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" ") == plot)
                .unwrap_or(false)
        })
        .map(|m| m.title.clone())
}

/// Last line of the transcript that starts with `prefix`.
pub fn line_starting_with<'a>(output: &'a [String], prefix: &str) -> Option<&'a str> {
    output
        .iter()
        .rev()
        .find(|line| line.starts_with(prefix))
        .map(String::as_str)
}
