use std::fs;
use std::process;

use serde::Serialize;

use drill_core::settings::settings;
use drill_core::{
    check, normalize_meaning, normalize_reading, transliterate as romaji_to_kana, AnswerMode,
    CanonicalAnswers, Dataset, VocabularyEntry,
};

/// The file at `path`, or the built-in sample when none is given.
pub fn load_dataset(path: Option<&str>) -> Dataset {
    match path {
        None => Dataset::sample(),
        Some(file) => {
            let json = die!(fs::read_to_string(file), "Error reading {file}: {}");
            die!(Dataset::from_json(&json), "Error in {file}: {}")
        }
    }
}

fn find_card<'a>(dataset: &'a Dataset, key: &str) -> &'a VocabularyEntry {
    dataset.find(key).unwrap_or_else(|| {
        eprintln!("Error: no card with id or prompt {key:?}");
        process::exit(1);
    })
}

fn normalize_for(mode: AnswerMode, input: &str) -> String {
    match mode {
        AnswerMode::Reading => normalize_reading(input),
        AnswerMode::Meaning => normalize_meaning(input),
    }
}

#[derive(Debug, Serialize)]
struct CheckReport<'a> {
    prompt: &'a str,
    mode: AnswerMode,
    input: &'a str,
    normalized: String,
    correct: bool,
}

/// Returns whether the answer was accepted.
pub fn check_answer(
    dataset: Option<&str>,
    key: &str,
    mode: AnswerMode,
    answer: &str,
    json: bool,
) -> bool {
    let dataset = load_dataset(dataset);
    let entry = find_card(&dataset, key);
    let report = CheckReport {
        prompt: &entry.prompt,
        mode,
        input: answer,
        normalized: normalize_for(mode, answer),
        correct: check(mode, answer, entry),
    };
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&report), "Error: {}"));
    } else {
        let verdict = if report.correct { "correct" } else { "incorrect" };
        println!("{} ({mode}): {verdict}", report.prompt);
        println!("  normalized: {:?}", report.normalized);
    }
    report.correct
}

pub fn reveal(dataset: Option<&str>, key: &str, json: bool) {
    let dataset = load_dataset(dataset);
    let entry = find_card(&dataset, key);
    let reveal = CanonicalAnswers::of(entry).reveal(&settings().display);
    if json {
        println!("{}", die!(serde_json::to_string_pretty(&reveal), "Error: {}"));
    } else {
        println!("{}: {reveal}", entry.prompt);
    }
}

pub fn normalize(mode: AnswerMode, text: &str) {
    println!("{}", normalize_for(mode, text));
}

pub fn transliterate(text: &str) {
    println!("{}", romaji_to_kana(text));
}
