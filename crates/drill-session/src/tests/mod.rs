mod persistence;

use drill_core::settings::{ContentFilter, DrillMode};
use drill_core::{AnswerMode, Dataset};

use super::{DrillSession, Preferences, Stats};

pub(super) fn prefs(mode: DrillMode, content: ContentFilter) -> Preferences {
    Preferences { mode, content }
}

pub(super) fn sample_session(mode: DrillMode, content: ContentFilter) -> DrillSession {
    DrillSession::with_seed(Dataset::sample(), prefs(mode, content), Stats::default(), 7)
}

/// A correct answer for whatever the current card asks.
pub(super) fn right_answer(session: &DrillSession) -> String {
    let card = session.current().unwrap();
    let reveal = session.reveal().unwrap();
    let (joined, sep) = match card.expected {
        AnswerMode::Reading => (reveal.readings, "、"),
        AnswerMode::Meaning => (reveal.meanings, ", "),
    };
    joined.split(sep).next().unwrap().to_string()
}
