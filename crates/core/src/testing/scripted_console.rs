//! Console fed from a script of input lines.

use std::collections::VecDeque;

use crate::error::QuizError;
use crate::game::Console;

/// Produces the next input line from what has been printed so far.
pub type Responder = Box<dyn FnMut(&[String]) -> Option<String> + Send>;

/// A [`Console`] that replays scripted input and captures output.
///
/// Scripted lines are used first; once they run out the optional responder
/// is consulted, and after that input is closed.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    responder: Option<Responder>,
    output: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            responder: None,
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Console that answers every prompt through `responder`.
    pub fn with_responder(responder: Responder) -> Self {
        let mut console = Self::new(Vec::<String>::new());
        console.responder = Some(responder);
        console
    }

    /// Queue one more scripted input line.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.inputs.push_back(line.into());
    }

    /// Lines printed with [`Console::say`].
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Prompts shown, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// All printed lines joined with newlines.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn say(&mut self, line: &str) -> Result<(), QuizError> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> Result<String, QuizError> {
        self.prompts.push(prompt.to_string());
        if let Some(line) = self.inputs.pop_front() {
            return Ok(line);
        }
        match self.responder.as_mut() {
            Some(respond) => respond(&self.output).ok_or(QuizError::InputClosed),
            None => Err(QuizError::InputClosed),
        }
    }
}
