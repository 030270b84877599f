//! Question generation.
//!
//! A question is built in five steps, each a separate function handing a new
//! value to the next:
//!
//! 1. seed a [`QuestionPool`] from a random letter
//! 2. pick a [`QuestionKind`]
//! 3. draw the movie the question is about
//! 4. build three wrong answers
//! 5. shuffle and label the options
//!
//! Every provider call goes through the injected [`RetryPolicy`], and all
//! randomness comes from the caller's `Rng`.

mod pool;
mod retry;

pub use pool::{QuestionPool, MIN_POOL_SIZE};
pub use retry::{RetryCallback, RetryConfig, RetryNotice, RetryPolicy};

use std::sync::Arc;

use chrono::Datelike;
use rand::Rng;
use tracing::{debug, info, warn};

use crate::difficulty::DifficultyLevel;
use crate::error::QuizError;
use crate::provider::{MovieProvider, MovieRecord, ProviderError};
use crate::question::{Answer, Question, QuestionKind};

/// Default number of times a question is rebuilt from a fresh pool after the
/// pool ran dry.
pub const DEFAULT_MAX_REBUILDS: u32 = 3;

/// Smallest spread that still leaves room for three wrong years.
const MIN_YEAR_SPREAD: i32 = 3;

/// Builds questions from a movie provider.
pub struct QuestionGenerator {
    provider: Arc<dyn MovieProvider>,
    retry: RetryPolicy,
    current_year: i32,
    max_rebuilds: u32,
}

impl QuestionGenerator {
    /// Create a generator using the local calendar year as "now".
    pub fn new(provider: Arc<dyn MovieProvider>, retry: RetryPolicy) -> Self {
        Self {
            provider,
            retry,
            current_year: chrono::Local::now().year(),
            max_rebuilds: DEFAULT_MAX_REBUILDS,
        }
    }

    /// Sets the year used to clamp year answers.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = year;
        self
    }

    /// Sets how many times an exhausted pool is re-seeded.
    pub fn with_max_rebuilds(mut self, max_rebuilds: u32) -> Self {
        self.max_rebuilds = max_rebuilds;
        self
    }

    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Build one question for `level`.
    ///
    /// If the pool runs dry before four options are collected, the question
    /// is rebuilt from a freshly seeded pool up to `max_rebuilds` times.
    pub async fn generate<R: Rng + ?Sized>(
        &self,
        level: DifficultyLevel,
        rng: &mut R,
    ) -> Result<Question, QuizError> {
        let mut rebuilds = 0;
        loop {
            match self.build(level, rng).await {
                Err(QuizError::PoolExhausted { kind }) if rebuilds < self.max_rebuilds => {
                    rebuilds += 1;
                    warn!(
                        "Pool exhausted building a {:?} question, re-seeding ({}/{})",
                        kind, rebuilds, self.max_rebuilds
                    );
                }
                result => return result,
            }
        }
    }

    async fn build<R: Rng + ?Sized>(
        &self,
        level: DifficultyLevel,
        rng: &mut R,
    ) -> Result<Question, QuizError> {
        let pool = self.seed_pool(rng).await?;
        let kind = pick_kind(rng);
        let (subject, pool) = self.pick_subject(kind, pool, rng).await?;
        let correct = kind
            .answer_for(&subject)
            .ok_or(QuizError::PoolExhausted { kind })?;

        let wrong = match &correct {
            Answer::Year(year) => wrong_years(*year, level.year_spread(), self.current_year, rng),
            _ => self.wrong_from_pool(kind, &correct, pool, rng).await?,
        };

        info!(
            "Built {:?} question about '{}' (id {})",
            kind, subject.title, subject.id
        );

        Question::shuffled(kind, subject, wrong, rng).ok_or(QuizError::PoolExhausted { kind })
    }

    /// Search a random letter until the pool holds enough movies.
    pub async fn seed_pool<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<QuestionPool, QuizError> {
        self.retry
            .run("Seeding question pool", |attempt| {
                let letter = random_letter(rng);
                async move {
                    debug!("Seeding pool with '{}' (attempt {})", letter, attempt);
                    let results = self.provider.search(&letter.to_string()).await?;
                    let pool = QuestionPool::from_search(letter, results);
                    if pool.is_playable() {
                        Ok(pool)
                    } else {
                        Err(QuizError::PoolTooSmall {
                            letter,
                            eligible: pool.len(),
                        })
                    }
                }
            })
            .await
    }

    /// Fetch a record, treating a missing movie as unusable rather than
    /// failing.
    async fn fetch(&self, id: u32) -> Result<Option<MovieRecord>, QuizError> {
        let result = self
            .retry
            .run("Fetching movie details", |_| async move {
                self.provider.details(id).await.map_err(QuizError::from)
            })
            .await;

        match result {
            Ok(record) => Ok(Some(record)),
            Err(QuizError::Provider(ProviderError::NotFound(what))) => {
                debug!("Skipping missing movie: {}", what);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Draw the movie the question is about.
    async fn pick_subject<R: Rng + ?Sized>(
        &self,
        kind: QuestionKind,
        mut pool: QuestionPool,
        rng: &mut R,
    ) -> Result<(MovieRecord, QuestionPool), QuizError> {
        while let Some(entry) = pool.draw(rng) {
            match self.fetch(entry.id).await? {
                Some(record) if kind.can_ask_about(&record) => return Ok((record, pool)),
                Some(record) => debug!(
                    "Movie '{}' (id {}) lacks data for a {:?} question",
                    record.title, record.id, kind
                ),
                None => {}
            }
        }
        Err(QuizError::PoolExhausted { kind })
    }

    /// Draw three distinct wrong titles or director lists from the pool.
    async fn wrong_from_pool<R: Rng + ?Sized>(
        &self,
        kind: QuestionKind,
        correct: &Answer,
        mut pool: QuestionPool,
        rng: &mut R,
    ) -> Result<[Answer; 3], QuizError> {
        let mut wrong: Vec<Answer> = Vec::with_capacity(3);
        while wrong.len() < 3 {
            let entry = pool.draw(rng).ok_or(QuizError::PoolExhausted { kind })?;
            let Some(record) = self.fetch(entry.id).await? else {
                continue;
            };
            match kind.answer_for(&record) {
                Some(answer) if &answer != correct && !wrong.contains(&answer) => {
                    wrong.push(answer)
                }
                _ => debug!("Discarding movie {} as a wrong {:?} answer", record.id, kind),
            }
        }
        wrong
            .try_into()
            .map_err(|_| QuizError::PoolExhausted { kind })
    }
}

/// Uniformly pick a question kind.
pub fn pick_kind<R: Rng + ?Sized>(rng: &mut R) -> QuestionKind {
    QuestionKind::ALL[rng.gen_range(0..QuestionKind::ALL.len())]
}

/// Uniformly pick a lowercase ASCII letter.
pub fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'a' + rng.gen_range(0..26u8))
}

/// Inclusive range wrong years are drawn from.
///
/// The range extends `spread` years below the correct year and up to
/// `spread` years above it, never past `current_year`.
pub fn year_window(correct: i32, spread: i32, current_year: i32) -> (i32, i32) {
    let spread = spread.max(MIN_YEAR_SPREAD);
    let above = spread.min((current_year - correct).max(0));
    (correct - spread, correct + above)
}

/// Three distinct years from the window, none equal to `correct`.
pub fn wrong_years<R: Rng + ?Sized>(
    correct: i32,
    spread: i32,
    current_year: i32,
    rng: &mut R,
) -> [Answer; 3] {
    let (low, high) = year_window(correct, spread, current_year);
    let mut years: Vec<i32> = Vec::with_capacity(3);
    while years.len() < 3 {
        let year = rng.gen_range(low..=high);
        if year != correct && !years.contains(&year) {
            years.push(year);
        }
    }
    [
        Answer::Year(years[0]),
        Answer::Year(years[1]),
        Answer::Year(years[2]),
    ]
}
