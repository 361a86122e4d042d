//! Scripted console adapter with a queue of canned answers.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::ports::console::Console;

/// Console double that pops answers from a queue.
///
/// When the queue runs dry, `ask` returns the question's default and
/// `choose` returns the default option, mirroring a developer who accepts
/// every suggestion.
#[derive(Default)]
pub struct ScriptedConsole {
    answers: Mutex<VecDeque<String>>,
}

impl ScriptedConsole {
    /// Creates a console that always answers with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a console pre-loaded with answers, consumed in order.
    #[must_use]
    pub fn with_answers(answers: &[&str]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().map(|a| (*a).to_string()).collect()),
        }
    }

    fn next_answer(&self) -> Option<String> {
        self.answers.lock().expect("answer queue lock poisoned").pop_front()
    }
}

impl Console for ScriptedConsole {
    fn ask(
        &self,
        _question: &str,
        default: &str,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        match self.next_answer() {
            Some(answer) if !answer.is_empty() => Ok(answer),
            _ => Ok(default.to_string()),
        }
    }

    fn choose(
        &self,
        _question: &str,
        options: &[&str],
        default: usize,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        match self.next_answer() {
            Some(answer) if options.contains(&answer.as_str()) => Ok(answer),
            _ => Ok(options[default].to_string()),
        }
    }
}
