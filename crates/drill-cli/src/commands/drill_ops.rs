use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use drill_core::settings::{settings, ContentFilter, DrillMode};
use drill_core::{parse_dataset, Dataset, DatasetError};
use drill_session::{
    CheckOutcome, DrillSession, Preferences, Stats, StoreError, PREFERENCES_FILE, STATS_FILE,
};

use super::check_ops::load_dataset;

pub struct DrillOptions {
    pub dataset: Option<String>,
    pub mode: Option<DrillMode>,
    pub content: Option<ContentFilter>,
    pub seed: Option<u64>,
    pub state_dir: PathBuf,
}

const HELP: &str = "Commands: :r reveal, :n next, :s shuffle, :mode <reading|meaning|mixed>, \
:content <kanji|word|both>, :load <file>, :reset, :q quit. Anything else is an answer.";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot load {path}: {source}")]
    Dataset {
        path: String,
        #[source]
        source: DatasetError,
    },
}

/// Run the interactive drill on stdin/stdout, then save stats and preferences.
pub fn drill(opts: DrillOptions) {
    let dataset = load_dataset(opts.dataset.as_deref());
    let mut session = open_session(dataset, &opts);

    let stdin = io::stdin();
    let stdout = io::stdout();
    die!(run(&mut session, stdin.lock(), stdout.lock()), "Error: {}");
    die!(save_state(&session, &opts.state_dir), "Error: {}");
}

/// Session over `dataset` with stats and preferences restored from the
/// state directory; `--mode`/`--content` override the saved preferences.
fn open_session(dataset: Dataset, opts: &DrillOptions) -> DrillSession {
    let stats_path = opts.state_dir.join(STATS_FILE);
    let prefs_path = opts.state_dir.join(PREFERENCES_FILE);

    let stats = Stats::open(&stats_path).unwrap_or_else(|e| {
        warn!(error = %e, "starting with fresh stats");
        Stats::default()
    });
    let fallback = Preferences::from(settings().drill);
    let mut prefs = Preferences::open(&prefs_path, fallback).unwrap_or_else(|e| {
        warn!(error = %e, "starting with default preferences");
        fallback
    });
    if let Some(mode) = opts.mode {
        prefs.mode = mode;
    }
    if let Some(content) = opts.content {
        prefs.content = content;
    }

    let session = match opts.seed {
        Some(seed) => DrillSession::with_seed(dataset, prefs, stats, seed),
        None => DrillSession::new(dataset, prefs, stats),
    };
    debug!(
        cards = session.dataset().len(),
        mode = %prefs.mode,
        content = %prefs.content,
        "drill started"
    );
    session
}

fn save_state(session: &DrillSession, state_dir: &Path) -> Result<(), StoreError> {
    session.stats().save(&state_dir.join(STATS_FILE))?;
    session.preferences().save(&state_dir.join(PREFERENCES_FILE))
}

/// Merge the cards in `path` into the session.
/// Returns how many cards the file held and how many of them were new.
fn load_file(session: &mut DrillSession, path: &str) -> Result<(usize, usize), LoadError> {
    let json = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_string(),
        source,
    })?;
    let cards = parse_dataset(&json).map_err(|source| LoadError::Dataset {
        path: path.to_string(),
        source,
    })?;
    let read = cards.len();
    let added = session.load(cards);
    debug!(path, read, added, "merged dataset file");
    Ok((read, added))
}

fn stats_line(stats: Stats) -> String {
    format!(
        "Correct {}/{} · Accuracy {}% · Streak {}",
        stats.correct,
        stats.total,
        stats.accuracy(),
        stats.streak
    )
}

fn show_card<W: Write>(session: &DrillSession, out: &mut W) -> io::Result<()> {
    match session.current() {
        Some(card) => writeln!(out, "\n{}  [{}]", card.prompt(), card.hint()),
        None => writeln!(out, "\nNo cards match the current filter."),
    }
}

/// Drive `session` from line-oriented `input` until EOF or `:q`.
pub fn run<R: BufRead, W: Write>(
    session: &mut DrillSession,
    input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "{HELP}")?;
    show_card(session, &mut out)?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
        match command {
            ":q" | ":quit" => break,
            ":h" | ":help" => writeln!(out, "{HELP}")?,
            ":n" | ":next" => {
                session.next_card();
                show_card(session, &mut out)?;
            }
            ":r" | ":reveal" => match session.reveal() {
                Some(reveal) if !reveal.is_empty() => writeln!(out, "{reveal}")?,
                Some(_) => writeln!(out, "No answers recorded for this card.")?,
                None => writeln!(out, "{}", CheckOutcome::NoCard.message())?,
            },
            ":s" | ":shuffle" => {
                session.shuffle();
                writeln!(out, "Shuffled.")?;
                show_card(session, &mut out)?;
            }
            ":load" if arg.trim().is_empty() => writeln!(out, "Usage: :load <file>")?,
            ":load" => match load_file(session, arg.trim()) {
                Ok((read, added)) => {
                    writeln!(out, "Loaded {read} cards ({added} new).")?;
                    show_card(session, &mut out)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            ":reset" => {
                session.reset_stats();
                writeln!(out, "{}", stats_line(session.stats()))?;
            }
            ":mode" => match arg.trim().parse::<DrillMode>() {
                Ok(mode) => {
                    session.set_mode(mode);
                    show_card(session, &mut out)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            ":content" => match arg.trim().parse::<ContentFilter>() {
                Ok(content) => {
                    session.set_content(content);
                    show_card(session, &mut out)?;
                }
                Err(e) => writeln!(out, "{e}")?,
            },
            _ => {
                let outcome = session.check(line);
                writeln!(out, "{}", outcome.message())?;
                if matches!(outcome, CheckOutcome::Correct | CheckOutcome::Incorrect) {
                    writeln!(out, "{}", stats_line(session.stats()))?;
                }
            }
        }
    }
    writeln!(out, "{}", stats_line(session.stats()))?;
    out.flush()
}
