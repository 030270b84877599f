//! The game loop: choose a difficulty, play the rounds, report the score.

mod console;
pub mod render;

pub use console::{Console, LineConsole, StdConsole};

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::difficulty::DifficultyLevel;
use crate::error::QuizError;
use crate::generator::{QuestionGenerator, DEFAULT_MAX_REBUILDS};
use crate::question::{Label, Question};

/// Game presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    /// Column at which plots are wrapped.
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,

    /// Times a question is rebuilt when its pool runs dry.
    #[serde(default = "default_max_rebuilds")]
    pub max_rebuilds: u32,
}

fn default_wrap_width() -> usize {
    70
}

fn default_max_rebuilds() -> u32 {
    DEFAULT_MAX_REBUILDS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            wrap_width: default_wrap_width(),
            max_rebuilds: default_max_rebuilds(),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct GameSummary {
    pub difficulty: DifficultyLevel,
    /// Questions asked.
    pub questions: u32,
    /// Questions answered correctly.
    pub correct: u32,
    pub score: u32,
}

impl GameSummary {
    pub fn new(difficulty: DifficultyLevel) -> Self {
        Self {
            difficulty,
            questions: 0,
            correct: 0,
            score: 0,
        }
    }

    /// Count one answered question.
    pub fn record(&mut self, correct: bool) {
        self.questions += 1;
        if correct {
            self.correct += 1;
            self.score += self.difficulty.points_per_correct();
        }
    }
}

/// One play session.
pub struct Game<C: Console> {
    generator: QuestionGenerator,
    console: C,
    config: GameConfig,
}

impl<C: Console> Game<C> {
    pub fn new(generator: QuestionGenerator, console: C, config: GameConfig) -> Self {
        Self {
            generator,
            console,
            config,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Ask until the player names a difficulty level.
    pub fn select_difficulty(&mut self) -> Result<DifficultyLevel, QuizError> {
        loop {
            let input = self
                .console
                .ask("Choose a difficulty: easy, normal or hard: ")?;
            match input.parse::<DifficultyLevel>() {
                Ok(level) => return Ok(level),
                Err(_) => {
                    self.console.say("")?;
                    self.console
                        .say("That is not a valid difficulty, please try again.")?;
                }
            }
        }
    }

    /// Ask until the player picks one of the four labels.
    fn read_answer(&mut self) -> Result<Label, QuizError> {
        loop {
            let input = self.console.ask("Answer with A, B, C or D: ")?;
            match input.parse::<Label>() {
                Ok(label) => return Ok(label),
                Err(()) => {
                    self.console.say("")?;
                    self.console
                        .say("That is not a valid answer, please try again.")?;
                }
            }
        }
    }

    /// Show a question, read the answer and report the verdict.
    pub fn play_question(&mut self, question: &Question) -> Result<bool, QuizError> {
        for line in render::question_lines(question, self.config.wrap_width) {
            self.console.say(&line)?;
        }

        let chosen = self.read_answer()?;
        let correct = question.is_correct(chosen);

        for line in render::verdict_lines(question, chosen) {
            self.console.say(&line)?;
        }
        Ok(correct)
    }

    /// Play a full game.
    ///
    /// `preset` skips the difficulty prompt.
    pub async fn run<R: Rng + ?Sized>(
        &mut self,
        preset: Option<DifficultyLevel>,
        rng: &mut R,
    ) -> Result<GameSummary, QuizError> {
        let level = match preset {
            Some(level) => level,
            None => self.select_difficulty()?,
        };
        self.console
            .say(&format!("You chose {} difficulty. Let's play!", level))?;
        self.console.say("")?;

        info!(
            "Starting {} game with {} questions",
            level,
            level.question_count()
        );

        let mut summary = GameSummary::new(level);
        for round in 1..=level.question_count() {
            let question = self.generator.generate(level, rng).await?;
            let correct = self.play_question(&question)?;
            summary.record(correct);
            info!(
                "Round {}/{}: {} (score {})",
                round,
                level.question_count(),
                if correct { "correct" } else { "wrong" },
                summary.score
            );
        }

        for line in render::summary_lines(&summary) {
            self.console.say(&line)?;
        }
        Ok(summary)
    }
}
