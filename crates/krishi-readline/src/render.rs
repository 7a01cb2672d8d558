//! Terminal rendering of the assistant views.

use colored::Colorize;
use krishi_application::ChatEvent;
use krishi_core::farm::{FarmContext, FormField};
use krishi_core::i18n::{SUPPORTED_LANGUAGES, Translator, find_language};
use krishi_core::quick_question::quick_questions;
use tokio::sync::{mpsc, watch};

pub fn introduction(t: &Translator) {
    println!();
    println!("{}", t.t("heroTitle").bright_green().bold());
    println!("{}", t.t("heroSubtitle"));
    println!();
    println!(
        "{}",
        format!("[Enter] {}  ·  /lang <code>  ·  quit", t.t("getStarted")).bright_black()
    );
}

pub fn form_header(t: &Translator) {
    println!();
    println!("{}", t.t("categoryTitle").bright_green().bold());
    println!("{}", t.t("categorySubtitle").bright_black());
    println!("{}", "[Enter] keep value  ·  /lang <code>  ·  /help  ·  quit".bright_black());
}

pub fn conversation_header(t: &Translator, context: &FarmContext) {
    println!();
    println!("{}", t.t("chatTitle").bright_magenta().bold());
    profile(t, context);
    quick_question_list(t);
    println!(
        "{}",
        format!("{} · /help · /back ({})", t.t("chatPlaceholder"), t.t("backToForm")).bright_black()
    );
}

/// The five captured values plus the active language.
pub fn profile(t: &Translator, context: &FarmContext) {
    println!("{}", t.t("farmProfile").bright_yellow());
    for (field, value) in FormField::all().zip(context.summary()) {
        println!("  {:<18} {}", format!("{}:", field.title()), value.cyan());
    }
    let language = find_language(t.language())
        .map(|lang| lang.native.to_string())
        .unwrap_or_else(|| t.language().to_string());
    println!("  {:<18} {}", format!("{}:", t.t("language")), language.cyan());
}

pub fn quick_question_list(t: &Translator) {
    println!("{}", t.t("quickQuestions").bright_yellow());
    for (index, question) in quick_questions().iter().enumerate() {
        println!("  {}", format!("/quick {} - {}", index + 1, question).bright_black());
    }
}

pub fn languages(t: &Translator) {
    println!("{}", t.t("selectLanguage").bright_yellow());
    for lang in SUPPORTED_LANGUAGES {
        let marker = if lang.code == t.language() { "*" } else { " " };
        println!("  {} {:<3} {} ({})", marker, lang.code, lang.native, lang.name);
    }
}

pub fn help() {
    println!("{}", "Commands:".bright_yellow());
    for (command, text) in [
        ("/back", "return to the farm form"),
        ("/lang <code>", "switch language"),
        ("/languages", "list available languages"),
        ("/profile", "show the farm profile"),
        ("/quick <n>", "ask a quick question"),
        ("quit", "exit"),
    ] {
        println!("  {:<14} {}", command.bright_cyan(), text.bright_black());
    }
}

pub fn error(message: impl std::fmt::Display) {
    eprintln!("{}", format!("{message}").red());
}

/// Prints assistant output as it arrives, with labels in the current language.
pub async fn print_events(
    mut events: mpsc::UnboundedReceiver<ChatEvent>,
    translator: watch::Receiver<Translator>,
) {
    while let Some(event) = events.recv().await {
        match event {
            // user input is echoed by the REPL itself
            ChatEvent::MessageAppended(message) if message.is_user() => {}
            ChatEvent::MessageAppended(message) => {
                println!();
                for line in message.text.lines() {
                    println!("{}", line.bright_blue());
                }
            }
            ChatEvent::Composing(true) => {
                let label = translator.borrow().t("composing");
                println!("{}", label.bright_black().italic());
            }
            ChatEvent::Composing(false) => {}
        }
    }
}
