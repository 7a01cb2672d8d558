//! Interactive farm form.

use colored::Colorize;
use krishi_core::farm::{FarmContextDraft, FieldChoice, FormField};
use krishi_core::i18n::Translator;
use rustyline::Editor;
use rustyline::history::DefaultHistory;

use crate::helper::CliHelper;
use crate::render;

pub type CliEditor = Editor<CliHelper, DefaultHistory>;

pub enum FormOutcome {
    Submit,
    Quit,
    /// A slash command typed at a prompt. The draft keeps its values.
    Command(String),
}

/// What a line typed at a form prompt means.
#[derive(Debug, PartialEq, Eq)]
enum FieldInput<'a> {
    Keep,
    Quit,
    Command(&'a str),
    Pick(usize),
    Value(&'a str),
}

fn classify(line: &str) -> FieldInput<'_> {
    let line = line.trim();
    match line {
        "" => FieldInput::Keep,
        "quit" | "exit" => FieldInput::Quit,
        _ if line.starts_with('/') => FieldInput::Command(line),
        _ => match line.parse() {
            Ok(number) => FieldInput::Pick(number),
            Err(_) => FieldInput::Value(line),
        },
    }
}

/// Walks the five fields until the draft is complete and confirmed.
///
/// Entering nothing keeps a field's current value, so a draft carried over
/// from a previous conversation can be resubmitted as is.
pub fn fill(
    rl: &mut CliEditor,
    draft: &mut FarmContextDraft,
    t: &Translator,
) -> rustyline::Result<FormOutcome> {
    render::form_header(t);
    let mut fields: Vec<FormField> = FormField::all().collect();

    loop {
        for field in &fields {
            if let Some(outcome) = ask_field(rl, draft, *field, t)? {
                return Ok(outcome);
            }
        }

        if draft.is_complete() {
            println!("{}", t.t("readyToProceed").bright_green());
            let answer = rl.readline(&format!("[Enter] {} / edit > ", t.t("continue")))?;
            match classify(&answer) {
                FieldInput::Keep => return Ok(FormOutcome::Submit),
                FieldInput::Quit => return Ok(FormOutcome::Quit),
                FieldInput::Command(command) => {
                    return Ok(FormOutcome::Command(command.to_string()));
                }
                _ => fields = FormField::all().collect(),
            }
        } else {
            println!("{}", t.t("completeAllFields").yellow());
            fields = draft.missing_fields();
        }
    }
}

/// Returns an outcome when the input leaves the form, `None` once the field
/// is settled.
fn ask_field(
    rl: &mut CliEditor,
    draft: &mut FarmContextDraft,
    field: FormField,
    t: &Translator,
) -> rustyline::Result<Option<FormOutcome>> {
    let choices = field.choices();
    println!();
    println!("{}", t.t(field.prompt_key()).bright_yellow());
    for (index, choice) in choices.iter().enumerate() {
        println!("  {:>2}. {}", index + 1, choice_label(choice, t));
    }

    loop {
        let current = draft.get(field).unwrap_or_default();
        let line = rl.readline(&format!("{} [{}] > ", field.title(), current))?;

        let value = match classify(&line) {
            FieldInput::Keep => return Ok(None),
            FieldInput::Quit => return Ok(Some(FormOutcome::Quit)),
            FieldInput::Command(command) => {
                return Ok(Some(FormOutcome::Command(command.to_string())));
            }
            FieldInput::Pick(number) => match number.checked_sub(1).and_then(|i| choices.get(i)) {
                Some(choice) => choice.value.as_str(),
                None => {
                    render::error(format!("Choose 1-{}", choices.len()));
                    continue;
                }
            },
            FieldInput::Value(value) => value,
        };

        match draft.set(field, value) {
            Ok(()) => return Ok(None),
            Err(err) => render::error(err),
        }
    }
}

fn choice_label(choice: &FieldChoice, t: &Translator) -> String {
    match &choice.label_key {
        Some(key) => {
            let label = t.t(key);
            if label == choice.value {
                label
            } else {
                format!("{} {}", label, format!("({})", choice.value).bright_black())
            }
        }
        None => choice.value.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_input_is_a_command_not_a_value() {
        assert_eq!(classify("/lang hi"), FieldInput::Command("/lang hi"));
        assert_eq!(classify("  /help "), FieldInput::Command("/help"));
        assert_eq!(classify("/languages"), FieldInput::Command("/languages"));
    }

    #[test]
    fn test_field_input_kinds() {
        assert_eq!(classify(""), FieldInput::Keep);
        assert_eq!(classify("   "), FieldInput::Keep);
        assert_eq!(classify("exit"), FieldInput::Quit);
        assert_eq!(classify("3"), FieldInput::Pick(3));
        assert_eq!(classify(" Tamil Nadu "), FieldInput::Value("Tamil Nadu"));
    }
}
