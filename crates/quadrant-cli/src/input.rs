use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

/// Where survey answers come from.
pub trait LineSource {
    /// Reads one line.
    ///
    /// # Arguments
    ///
    /// * `prompt` - Prompt printed before the cursor
    /// * `suggestions` - Values offered for completion at this step
    ///
    /// # Returns
    ///
    /// `None` when the user aborts (Ctrl-C or Ctrl-D).
    fn read_line(&mut self, prompt: &str, suggestions: &[String]) -> Result<Option<String>>;
}

/// rustyline helper that completes and hints the suggestions of the current
/// step (locale labels, skip keywords, answer values).
#[derive(Clone, Default)]
struct SurveyHelper {
    suggestions: Vec<String>,
}

impl SurveyHelper {
    fn matching<'a>(&'a self, line: &'a str) -> impl Iterator<Item = &'a String> + 'a {
        let lowered = line.to_lowercase();
        self.suggestions
            .iter()
            .filter(move |s| !lowered.is_empty() && s.to_lowercase().starts_with(&lowered))
    }
}

impl Helper for SurveyHelper {}

impl Completer for SurveyHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates = self
            .matching(&line[..pos])
            .map(|s| Pair {
                display: s.clone(),
                replacement: s.clone(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for SurveyHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.suggestions.iter().any(|s| s == line) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for SurveyHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        self.matching(line)
            .find(|s| s.len() > line.len())
            .and_then(|s| s.get(line.len()..))
            .map(str::to_string)
    }
}

impl Validator for SurveyHelper {}

/// Interactive terminal input.
pub struct ReadlineSource {
    editor: Editor<SurveyHelper, DefaultHistory>,
}

impl ReadlineSource {
    pub fn new() -> Result<Self> {
        let mut editor = Editor::new()?;
        editor.set_helper(Some(SurveyHelper::default()));
        Ok(Self { editor })
    }
}

impl LineSource for ReadlineSource {
    fn read_line(&mut self, prompt: &str, suggestions: &[String]) -> Result<Option<String>> {
        if let Some(helper) = self.editor.helper_mut() {
            helper.suggestions = suggestions.to_vec();
        }

        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(rustyline::error::ReadlineError::Interrupted)
            | Err(rustyline::error::ReadlineError::Eof) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestions_match_case_insensitively() {
        let helper = SurveyHelper {
            suggestions: vec!["Skip ➡️".to_string(), "skip".to_string(), "UA".to_string()],
        };
        let found: Vec<&String> = helper.matching("sk").collect();
        assert_eq!(found.len(), 2);
        assert_eq!(helper.matching("u").next().map(String::as_str), Some("UA"));
        assert_eq!(helper.matching("").count(), 0);
    }
}
