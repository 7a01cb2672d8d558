use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use krishi_core::i18n::SUPPORTED_LANGUAGES;
use krishi_core::quick_question::quick_questions;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

pub const COMMANDS: &[&str] = &[
    "/help",
    "/back",
    "/lang",
    "/languages",
    "/profile",
    "/quick",
    "/start",
    "quit",
];

/// Rustyline helper for the krishi REPL.
///
/// Completes command names, language codes after `/lang` and question
/// numbers after `/quick`.
#[derive(Clone, Default)]
pub struct CliHelper;

impl CliHelper {
    pub fn new() -> Self {
        Self
    }

    /// Completion candidates for the text before the cursor, with the byte
    /// offset the replacement starts at.
    fn candidates(&self, line: &str) -> (usize, Vec<Pair>) {
        if let Some(prefix) = line.strip_prefix("/lang ") {
            let pairs = SUPPORTED_LANGUAGES
                .iter()
                .filter(|lang| lang.code.starts_with(prefix))
                .map(|lang| Pair {
                    display: format!("{:<3} {}", lang.code, lang.native),
                    replacement: lang.code.to_string(),
                })
                .collect();
            return (line.len() - prefix.len(), pairs);
        }

        if let Some(prefix) = line.strip_prefix("/quick ") {
            let pairs = quick_questions()
                .iter()
                .enumerate()
                .map(|(index, question)| ((index + 1).to_string(), question))
                .filter(|(number, _)| number.starts_with(prefix))
                .map(|(number, question)| Pair {
                    display: format!("{number} {question}"),
                    replacement: number,
                })
                .collect();
            return (line.len() - prefix.len(), pairs);
        }

        if line.starts_with('/') && !line.contains(' ') {
            let pairs = COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.to_string(),
                    replacement: cmd.to_string(),
                })
                .collect();
            return (0, pairs);
        }

        (0, vec![])
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.candidates(&line[..pos]))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        match line.split_once(' ') {
            Some((command, argument)) if line.starts_with('/') => Owned(format!(
                "{} {}",
                command.bright_cyan(),
                argument.yellow()
            )),
            _ if line.starts_with('/') => Owned(line.bright_cyan().to_string()),
            _ => Borrowed(line),
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    /// Suggests the rest of the first candidate.
    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') {
            return None;
        }

        let (start, pairs) = self.candidates(line);
        let typed = &line[start..];
        pairs
            .into_iter()
            .map(|pair| pair.replacement)
            .find(|replacement| replacement.len() > typed.len())
            .map(|replacement| replacement[typed.len()..].to_string())
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn replacements(line: &str) -> (usize, Vec<String>) {
        let (start, pairs) = CliHelper::new().candidates(line);
        (start, pairs.into_iter().map(|pair| pair.replacement).collect())
    }

    #[test]
    fn test_command_candidates_by_prefix() {
        assert_eq!(replacements("/la"), (0, vec!["/lang".into(), "/languages".into()]));
        assert_eq!(replacements("/x").1.len(), 0);
        assert_eq!(replacements("hello").1.len(), 0);
    }

    #[test]
    fn test_lang_argument_completes_language_codes() {
        let (start, codes) = replacements("/lang m");
        assert_eq!(start, "/lang ".len());
        assert_eq!(codes, vec!["mr".to_string(), "ml".to_string()]);

        assert_eq!(replacements("/lang ").1.len(), SUPPORTED_LANGUAGES.len());
        assert!(replacements("/lang zz").1.is_empty());
    }

    #[test]
    fn test_quick_argument_completes_question_numbers() {
        let (start, numbers) = replacements("/quick ");
        assert_eq!(start, "/quick ".len());
        assert_eq!(numbers, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(replacements("/quick 4").1, vec!["4".to_string()]);
    }
}
