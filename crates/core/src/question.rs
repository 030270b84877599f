//! Multiple-choice questions and answer judging.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::provider::MovieRecord;

/// Which movie field a question quizzes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Release year of a named movie.
    Year,
    /// Title of a movie described by its plot.
    Title,
    /// Directors of a named movie.
    Director,
}

impl QuestionKind {
    pub const ALL: [QuestionKind; 3] = [Self::Year, Self::Title, Self::Director];

    /// The answer this kind of question expects for `record`, if it has one.
    pub fn answer_for(self, record: &MovieRecord) -> Option<Answer> {
        match self {
            Self::Year => record.year.map(Answer::Year),
            Self::Title => Some(Answer::Title(record.title.clone())),
            Self::Director if record.directors.is_empty() => None,
            Self::Director => Some(Answer::Directors(record.directors.clone())),
        }
    }

    /// Whether `record` carries everything needed to ask about it.
    ///
    /// Title questions show the plot, so the subject needs one.
    pub fn can_ask_about(self, record: &MovieRecord) -> bool {
        match self {
            Self::Title => record.plot.is_some(),
            _ => self.answer_for(record).is_some(),
        }
    }
}

/// An answer option.
///
/// Equality is plain value equality; director lists compare as whole ordered
/// lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Year(i32),
    Title(String),
    Directors(Vec<String>),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year(year) => write!(f, "{}", year),
            Self::Title(title) => f.write_str(title),
            Self::Directors(names) => f.write_str(&names.join(", ")),
        }
    }
}

/// Option label shown to the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    A,
    B,
    C,
    D,
}

impl Label {
    pub const ALL: [Label; 4] = [Self::A, Self::B, Self::C, Self::D];

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.write_str(letter)
    }
}

impl FromStr for Label {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(()),
        }
    }
}

/// A fully built question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    kind: QuestionKind,
    subject: MovieRecord,
    correct: Answer,
    correct_label: Label,
    options: [Answer; 4],
}

impl Question {
    /// Shuffle the correct answer and three distinct wrong answers into
    /// labelled options.
    ///
    /// Returns `None` if the options would not be four distinct values
    /// containing the correct answer once, or if `subject` lacks the field
    /// `kind` asks about.
    pub fn shuffled<R: Rng + ?Sized>(
        kind: QuestionKind,
        subject: MovieRecord,
        wrong: [Answer; 3],
        rng: &mut R,
    ) -> Option<Self> {
        if !kind.can_ask_about(&subject) {
            return None;
        }
        let correct = kind.answer_for(&subject)?;
        if wrong.contains(&correct) {
            return None;
        }
        for i in 0..wrong.len() {
            if wrong[i + 1..].contains(&wrong[i]) {
                return None;
            }
        }

        let mut options = Vec::from(wrong);
        options.shuffle(rng);
        let correct_label = Label::ALL[rng.gen_range(0..Label::ALL.len())];
        options.insert(correct_label.index(), correct.clone());
        let options: [Answer; 4] = options.try_into().ok()?;

        Some(Self {
            kind,
            subject,
            correct,
            correct_label,
            options,
        })
    }

    pub fn kind(&self) -> QuestionKind {
        self.kind
    }

    /// The movie the question is about.
    pub fn subject(&self) -> &MovieRecord {
        &self.subject
    }

    pub fn correct_answer(&self) -> &Answer {
        &self.correct
    }

    pub fn option(&self, label: Label) -> &Answer {
        &self.options[label.index()]
    }

    /// Labelled options in display order.
    pub fn options(&self) -> impl Iterator<Item = (Label, &Answer)> {
        Label::ALL.into_iter().zip(self.options.iter())
    }

    /// The label whose option equals the correct answer.
    pub fn correct_label(&self) -> Label {
        self.correct_label
    }

    pub fn is_correct(&self, chosen: Label) -> bool {
        chosen == self.correct_label()
    }
}
