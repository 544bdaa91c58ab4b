use drill_core::settings::{settings, ContentFilter, DrillMode};

use super::*;
use crate::{StoreError, PREFERENCES_FILE, STATS_FILE};

#[test]
fn missing_files_give_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let stats = Stats::open(&dir.path().join(STATS_FILE)).unwrap();
    assert_eq!(stats, Stats::default());

    let fallback = Preferences::from(settings().drill);
    let p = Preferences::open(&dir.path().join(PREFERENCES_FILE), fallback).unwrap();
    assert_eq!(p, fallback);
}

#[test]
fn stats_survive_save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STATS_FILE);
    let mut session = sample_session(DrillMode::Reading, ContentFilter::Both);
    let answer = right_answer(&session);
    session.check(&answer);
    session.next_card();
    session.check("zzz");

    session.stats().save(&path).unwrap();
    assert!(!path.with_extension("tmp").exists());
    let restored = Stats::open(&path).unwrap();
    assert_eq!(
        restored,
        Stats {
            correct: 1,
            total: 2,
            streak: 0
        }
    );
}

#[test]
fn preferences_survive_save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join(PREFERENCES_FILE);
    let p = prefs(DrillMode::Meaning, ContentFilter::Kanji);
    p.save(&path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    assert!(json.contains("\"meaning\""), "{json}");
    assert!(json.contains("\"kanji\""), "{json}");
    assert_eq!(Preferences::open(&path, Preferences::default()).unwrap(), p);
}

#[test]
fn partial_stats_fill_in_zeroes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STATS_FILE);
    std::fs::write(&path, r#"{"correct": 4, "total": 9}"#).unwrap();
    let stats = Stats::open(&path).unwrap();
    assert_eq!(
        stats,
        Stats {
            correct: 4,
            total: 9,
            streak: 0
        }
    );
    assert_eq!(stats.accuracy(), 44);
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(STATS_FILE);
    std::fs::write(&path, "{not json").unwrap();
    let err = Stats::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Json { .. }));
    assert!(err.to_string().contains(STATS_FILE));

    std::fs::write(&path, r#"{"mode": "writing"}"#).unwrap();
    assert!(Preferences::open(&path, Preferences::default()).is_err());
}
