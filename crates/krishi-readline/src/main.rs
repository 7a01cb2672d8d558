mod form;
mod helper;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use tokio::sync::{mpsc, watch};

use krishi_application::FarmAssistant;
use krishi_core::config::ConfigRepository;
use krishi_core::farm::FarmContextDraft;
use krishi_core::i18n::{TranslationCatalog, TranslationProvider, Translator, is_supported};
use krishi_core::quick_question::find_quick_question;
use krishi_core::wizard::WizardView;
use krishi_infrastructure::{KrishiPaths, TomlConfigRepository, logging};

use crate::form::{CliEditor, FormOutcome};
use crate::helper::CliHelper;

/// Farming assistant REPL.
#[derive(Parser, Debug)]
#[command(name = "krishi", version, about)]
struct Args {
    /// Path to config.toml (defaults to ~/.config/krishi/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Language code to start with, e.g. `hi`
    #[arg(long)]
    lang: Option<String>,

    /// Simulated typing delay before each reply, in milliseconds
    #[arg(long)]
    reply_delay_ms: Option<u64>,

    /// Write the configuration file and exit
    #[arg(long)]
    init_config: bool,
}

enum Flow {
    Continue,
    Quit,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = logging::init(&KrishiPaths::logs_dir()?)?;

    let repository = match &args.config {
        Some(path) => TomlConfigRepository::with_path(path),
        None => TomlConfigRepository::default_location()?,
    };
    let mut config = repository.load()?;
    if let Some(lang) = args.lang {
        config.language = lang;
    }
    if let Some(ms) = args.reply_delay_ms {
        config.reply_delay_ms = ms;
    }

    if args.init_config {
        repository.save(&config)?;
        println!(
            "{}",
            format!("Wrote {}", repository.path().display()).bright_green()
        );
        return Ok(());
    }

    tracing::info!(language = %config.language, "starting krishi");

    let translations = TranslationProvider::with_catalog(TranslationCatalog::builtin()?);
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let mut assistant = FarmAssistant::from_config(&config, translations, event_tx)?;

    let (translator_tx, translator_rx) = watch::channel(assistant.translator()?);
    let printer = tokio::spawn(render::print_events(event_rx, translator_rx));

    let mut rl: CliEditor = CliEditor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== Krishi ===".bright_magenta().bold());

    let mut draft = FarmContextDraft::new();
    loop {
        let flow = match assistant.view() {
            WizardView::Introduction => introduction(&mut rl, &mut assistant, &translator_tx)?,
            WizardView::Form => {
                let t = assistant.translator()?;
                match form::fill(&mut rl, &mut draft, &t) {
                    Ok(FormOutcome::Submit) => {
                        if assistant.submit(&draft) {
                            if let Some(context) = assistant.context() {
                                render::conversation_header(&t, context);
                            }
                        }
                        Flow::Continue
                    }
                    Ok(FormOutcome::Quit) => Flow::Quit,
                    Ok(FormOutcome::Command(line)) => {
                        shared_command(&line, &mut assistant, &translator_tx)?
                    }
                    Err(err) => readline_failure(err),
                }
            }
            WizardView::Conversation => conversation(&mut rl, &mut assistant, &translator_tx).await?,
        };

        if let Flow::Quit = flow {
            println!("{}", "Goodbye!".bright_green());
            break;
        }
    }

    // closes the event channel so the printer can finish
    drop(assistant);
    let _ = printer.await;

    Ok(())
}

fn introduction(
    rl: &mut CliEditor,
    assistant: &mut FarmAssistant,
    translator: &watch::Sender<Translator>,
) -> Result<Flow> {
    let t = assistant.translator()?;
    render::introduction(&t);

    let line = match rl.readline(">> ") {
        Ok(line) => line,
        Err(err) => return Ok(readline_failure(err)),
    };
    match line.trim() {
        "" | "/start" => {
            assistant.start();
            Ok(Flow::Continue)
        }
        other => shared_command(other, assistant, translator),
    }
}

async fn conversation(
    rl: &mut CliEditor,
    assistant: &mut FarmAssistant,
    translator: &watch::Sender<Translator>,
) -> Result<Flow> {
    let line = match rl.readline(">> ") {
        Ok(line) => line,
        Err(err) => return Ok(readline_failure(err)),
    };
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(Flow::Continue);
    }
    let _ = rl.add_history_entry(trimmed);

    let (command, argument) = match trimmed.split_once(' ') {
        Some((command, argument)) => (command, argument.trim()),
        None => (trimmed, ""),
    };

    match command {
        "/back" => {
            assistant.back();
            Ok(Flow::Continue)
        }
        "/profile" => {
            if let Some(context) = assistant.context() {
                render::profile(&assistant.translator()?, context);
            }
            Ok(Flow::Continue)
        }
        "/quick" => {
            let t = assistant.translator()?;
            match argument.parse().ok().and_then(find_quick_question) {
                Some(question) => {
                    println!("{}", format!("> {}", question).green());
                    assistant.send(question).await;
                }
                None => render::quick_question_list(&t),
            }
            Ok(Flow::Continue)
        }
        _ if command.starts_with('/') || matches!(command, "quit" | "exit") => {
            shared_command(trimmed, assistant, translator)
        }
        _ => {
            println!("{}", format!("> {}", trimmed).green());
            assistant.send(trimmed).await;
            Ok(Flow::Continue)
        }
    }
}

/// Commands available on every view.
fn shared_command(
    line: &str,
    assistant: &mut FarmAssistant,
    translator: &watch::Sender<Translator>,
) -> Result<Flow> {
    let (command, argument) = match line.split_once(' ') {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match command {
        "quit" | "exit" => return Ok(Flow::Quit),
        "/help" => render::help(),
        "/languages" => render::languages(&assistant.translator()?),
        "/lang" if argument.is_empty() => render::languages(&assistant.translator()?),
        "/lang" => {
            if !is_supported(argument) {
                render::error(format!("Unknown language '{argument}', using English fallback"));
            }
            assistant.set_language(argument);
            let t = assistant.translator()?;
            println!("{}", format!("{}: {}", t.t("language"), argument).bright_green());
            // the printer only goes away on shutdown
            let _ = translator.send(t);
        }
        _ => println!("{}", "Unknown command, try /help".bright_black()),
    }
    Ok(Flow::Continue)
}

fn readline_failure(err: ReadlineError) -> Flow {
    match err {
        ReadlineError::Interrupted => {
            println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            Flow::Continue
        }
        ReadlineError::Eof => {
            println!("{}", "CTRL-D detected. Exiting...".bright_green());
            Flow::Quit
        }
        err => {
            render::error(format!("Error: {:?}", err));
            Flow::Quit
        }
    }
}
