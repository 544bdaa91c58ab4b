use std::fs;
use std::path::Path;

use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;

use drill_core::romaji::{self, RomajiTrie};
use drill_core::settings;

use crate::trace_init::init_tracing;

/// Logging first, then any custom tables, before anything touches the globals.
pub fn setup(
    verbose: bool,
    log_dir: Option<&Path>,
    romaji_file: Option<&str>,
    settings_file: Option<&str>,
) -> Option<WorkerGuard> {
    let guard = die!(init_tracing(verbose, log_dir), "Error: cannot open trace log: {}");
    if let Some(file) = romaji_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(RomajiTrie::init_custom(content), "Error in {file}: {}");
        debug!(file, "installed custom romaji table");
    }
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
        debug!(file, "installed custom settings");
    }
    guard
}

pub fn romaji_export() {
    print!("{}", romaji::default_toml());
}

/// Spot-check words printed after a custom table validates.
const SAMPLE_WORDS: [&str; 4] = ["gakkou", "shinbun", "kon'ya", "ra-men"];

pub fn romaji_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let trie = die!(RomajiTrie::from_toml(&content), "Error in {file}: {}");
    println!("{file}: {} romaji keys", trie.len());
    for word in SAMPLE_WORDS {
        println!("  {word} -> {}", romaji::transliterate_with(&trie, word));
    }
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error in {file}: {}");
    println!("{file}: drill {} / {}", s.drill.mode, s.drill.content);
    println!(
        "  mixed: kanji asks reading {:.0}%, words ask reading {:.0}%",
        s.mixed.kanji_reading_ratio * 100.0,
        s.mixed.word_reading_ratio * 100.0
    );
}
