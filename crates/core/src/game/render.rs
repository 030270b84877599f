//! Text shown to the player.

use crate::question::{Label, Question, QuestionKind};

use super::GameSummary;

pub const SEPARATOR: &str = "      -----------------";

/// Wrap `text` at `width` columns. Words longer than `width` are kept whole
/// on a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let options = textwrap::Options::new(width).break_words(false);
    textwrap::wrap(text.trim(), options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

/// The question text followed by its labelled options.
pub fn question_lines(question: &Question, wrap_width: usize) -> Vec<String> {
    let subject = question.subject();
    let mut lines = Vec::new();

    match question.kind() {
        QuestionKind::Year => {
            lines.push(format!(">> In what year was \"{}\" released?", subject.title));
            lines.push(String::new());
        }
        QuestionKind::Title => {
            lines.push(">> Which movie is this plot about?".to_string());
            lines.push(String::new());
            if let Some(plot) = &subject.plot {
                lines.extend(wrap(plot, wrap_width));
            }
            lines.push(String::new());
        }
        QuestionKind::Director => {
            lines.push(format!(">> Who directed \"{}\"?", subject.title));
            lines.push(String::new());
        }
    }

    lines.push("Choose one of the following answers:".to_string());
    lines.extend(
        question
            .options()
            .map(|(label, answer)| format!("   {}) {}", label, answer)),
    );
    lines
}

pub fn verdict_lines(question: &Question, chosen: Label) -> Vec<String> {
    let mut lines = vec![String::new()];
    if question.is_correct(chosen) {
        lines.push("Correct!".to_string());
    } else {
        lines.push("Wrong!".to_string());
        lines.push(format!(
            "The correct answer was: '{}'",
            question.correct_answer()
        ));
    }
    lines.push(SEPARATOR.to_string());
    lines.push(String::new());
    lines
}

pub fn summary_lines(summary: &GameSummary) -> Vec<String> {
    vec![
        "You answered all the questions.".to_string(),
        format!(
            "Correct answers: {}/{}",
            summary.correct, summary.questions
        ),
        format!("Your final score is: {}", summary.score),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::difficulty::DifficultyLevel;
    use crate::question::Answer;
    use crate::testing::fixtures;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_wrap_respects_width() {
        let text = "A computer hacker learns from mysterious rebels about the true nature \
                    of his reality and his role in the war against its controllers.";
        let lines = wrap(text, 30);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 30, "line too long: {:?}", line);
        }
        assert_eq!(lines.join(" "), text.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    #[test]
    fn test_wrap_long_word_and_empty() {
        assert_eq!(wrap("supercalifragilistic ok", 5), vec!["supercalifragilistic", "ok"]);
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn test_wrap_counts_columns_not_bytes() {
        let lines = wrap("Amélie découvre un trésor caché à Montmartre", 14);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 14, "line too long: {:?}", line);
        }
    }

    #[test]
    fn test_director_options_joined() {
        let mut rng = StdRng::seed_from_u64(4);
        let subject = fixtures::movie_record(1, "Fargo", 1996, &["Joel Coen", "Ethan Coen"]);
        let wrong = [
            Answer::Directors(vec!["Sam Raimi".into()]),
            Answer::Directors(vec!["David Lynch".into()]),
            Answer::Directors(vec!["Lana Wachowski".into(), "Lilly Wachowski".into()]),
        ];
        let question =
            Question::shuffled(QuestionKind::Director, subject, wrong, &mut rng).unwrap();

        let lines = question_lines(&question, 70);
        assert_eq!(lines[0], ">> Who directed \"Fargo\"?");
        assert!(lines.iter().any(|l| l.ends_with(") Joel Coen, Ethan Coen")));
        assert!(lines.iter().any(|l| l.ends_with(") Lana Wachowski, Lilly Wachowski")));
        assert_eq!(lines.iter().filter(|l| l.starts_with("   ")).count(), 4);
    }

    #[test]
    fn test_title_question_shows_wrapped_plot() {
        let mut rng = StdRng::seed_from_u64(4);
        let subject = fixtures::movie_record(1, "Heat", 1995, &["Michael Mann"]);
        let plot = subject.plot.clone().unwrap();
        let wrong = [
            Answer::Title("Ronin".into()),
            Answer::Title("Collateral".into()),
            Answer::Title("Thief".into()),
        ];
        let question = Question::shuffled(QuestionKind::Title, subject, wrong, &mut rng).unwrap();

        let lines = question_lines(&question, 20);
        assert_eq!(lines[0], ">> Which movie is this plot about?");
        assert!(!lines.iter().any(|l| l.contains("Heat\"")));
        let body: Vec<&str> = lines[2..]
            .iter()
            .take_while(|l| !l.is_empty())
            .map(|l| l.as_str())
            .collect();
        assert_eq!(body.join(" "), plot);
    }

    #[test]
    fn test_verdict_reveals_answer_on_miss() {
        let mut rng = StdRng::seed_from_u64(2);
        let subject = fixtures::movie_record(1, "Heat", 1995, &["Michael Mann"]);
        let wrong = [Answer::Year(1990), Answer::Year(1991), Answer::Year(1992)];
        let question = Question::shuffled(QuestionKind::Year, subject, wrong, &mut rng).unwrap();

        let right = question.correct_label();
        let miss = Label::ALL.into_iter().find(|l| *l != right).unwrap();

        assert!(verdict_lines(&question, right).contains(&"Correct!".to_string()));
        let lines = verdict_lines(&question, miss);
        assert!(lines.contains(&"Wrong!".to_string()));
        assert!(lines.contains(&"The correct answer was: '1995'".to_string()));
    }

    #[test]
    fn test_summary_lines() {
        let summary = GameSummary {
            difficulty: DifficultyLevel::Hard,
            questions: 5,
            correct: 4,
            score: 12,
        };
        let lines = summary_lines(&summary);
        assert_eq!(lines[1], "Correct answers: 4/5");
        assert_eq!(lines[2], "Your final score is: 12");
    }
}
