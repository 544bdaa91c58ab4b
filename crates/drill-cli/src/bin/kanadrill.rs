use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use drill_cli::commands::drill_ops::DrillOptions;
use drill_cli::commands::{check_ops, config_ops, drill_ops};
use drill_core::settings::{ContentFilter, DrillMode};
use drill_core::AnswerMode;

#[derive(Parser)]
#[command(name = "kanadrill", about = "Kanji and vocabulary drill with romaji-aware answer checking")]
struct Cli {
    /// Custom romaji table (TOML)
    #[arg(long, global = true)]
    romaji: Option<String>,
    /// Custom drill settings (TOML)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Also write a JSON-lines trace into this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check one answer against a card (exit status 1 if wrong)
    Check {
        /// reading or meaning
        #[arg(long)]
        mode: AnswerMode,
        /// Dataset JSON file (default: built-in sample)
        #[arg(long)]
        dataset: Option<String>,
        /// Card id or prompt
        card: String,
        /// The answer to check
        answer: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the accepted answers for a card
    Reveal {
        /// Dataset JSON file (default: built-in sample)
        #[arg(long)]
        dataset: Option<String>,
        /// Card id or prompt
        card: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the normalized form of a reading or meaning
    Normalize {
        /// reading or meaning
        mode: AnswerMode,
        text: String,
    },
    /// Convert romaji to hiragana
    Transliterate { text: String },
    /// Interactive drill on stdin
    Drill {
        /// Dataset JSON file (default: built-in sample)
        #[arg(long)]
        dataset: Option<String>,
        /// reading, meaning or mixed (default: saved preference)
        #[arg(long)]
        mode: Option<DrillMode>,
        /// kanji, word or both (default: saved preference)
        #[arg(long)]
        content: Option<ContentFilter>,
        /// Seed for a reproducible card order
        #[arg(long)]
        seed: Option<u64>,
        /// Where stats and preferences are kept
        #[arg(long, default_value = ".kanadrill")]
        state_dir: PathBuf,
    },
    /// Export default romaji mappings as TOML
    RomajiExport,
    /// Validate a custom romaji TOML file
    RomajiValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let guard = config_ops::setup(
        cli.verbose,
        cli.log_dir.as_deref(),
        cli.romaji.as_deref(),
        cli.settings.as_deref(),
    );

    match cli.command {
        Command::Check {
            mode,
            dataset,
            card,
            answer,
            json,
        } => {
            if !check_ops::check_answer(dataset.as_deref(), &card, mode, &answer, json) {
                drop(guard);
                process::exit(1);
            }
        }
        Command::Reveal {
            dataset,
            card,
            json,
        } => check_ops::reveal(dataset.as_deref(), &card, json),
        Command::Normalize { mode, text } => check_ops::normalize(mode, &text),
        Command::Transliterate { text } => check_ops::transliterate(&text),
        Command::Drill {
            dataset,
            mode,
            content,
            seed,
            state_dir,
        } => drill_ops::drill(DrillOptions {
            dataset,
            mode,
            content,
            seed,
            state_dir,
        }),
        Command::RomajiExport => config_ops::romaji_export(),
        Command::RomajiValidate { file } => config_ops::romaji_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
