//! Drill defaults: mode, content filter, mixed-mode ratios and reveal separators.
//!
//! The embedded `default_settings.toml` is used unless a custom file is
//! registered with [`init_custom`] before the first [`settings`] call.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Register a custom settings file. Only the first registration wins.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML.get().map_or(DEFAULT_SETTINGS_TOML, String::as_str);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

/// What the drill asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillMode {
    Reading,
    Meaning,
    #[default]
    Mixed,
}

/// Which cards enter the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentFilter {
    Kanji,
    Word,
    #[default]
    Both,
}

macro_rules! str_enum {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(match self {
                    $(Self::$variant => $name,)+
                })
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    other => Err(format!(
                        "unknown {} {:?}, expected one of: {}",
                        stringify!($ty),
                        other,
                        [$($name),+].join(", ")
                    )),
                }
            }
        }
    };
}

str_enum!(DrillMode {
    Reading => "reading",
    Meaning => "meaning",
    Mixed => "mixed",
});

str_enum!(ContentFilter {
    Kanji => "kanji",
    Word => "word",
    Both => "both",
});

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub drill: DrillSettings,
    pub mixed: MixedSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DrillSettings {
    pub mode: DrillMode,
    pub content: ContentFilter,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct MixedSettings {
    pub kanji_reading_ratio: f64,
    pub word_reading_ratio: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    pub reading_separator: String,
    pub meaning_separator: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_ratio {
        ($section:ident . $field:ident) => {
            if !(0.0..=1.0).contains(&s.$section.$field) {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be between 0.0 and 1.0".to_string(),
                });
            }
        };
    }
    macro_rules! check_non_empty {
        ($section:ident . $field:ident) => {
            if s.$section.$field.is_empty() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        };
    }

    check_ratio!(mixed.kanji_reading_ratio);
    check_ratio!(mixed.word_reading_ratio);

    check_non_empty!(display.reading_separator);
    check_non_empty!(display.meaning_separator);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"
[drill]
mode = "reading"
content = "kanji"

[mixed]
kanji_reading_ratio = 0.5
word_reading_ratio = 1.0

[display]
reading_separator = " / "
meaning_separator = "; "
"#;

    #[test]
    fn embedded_defaults() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.drill.mode, DrillMode::Mixed);
        assert_eq!(s.drill.content, ContentFilter::Both);
        assert!((s.mixed.kanji_reading_ratio - 0.6).abs() < f64::EPSILON);
        assert!((s.mixed.word_reading_ratio - 0.7).abs() < f64::EPSILON);
        assert_eq!(s.display.reading_separator, "、");
        assert_eq!(s.display.meaning_separator, ", ");
    }

    #[test]
    fn custom_file_overrides_every_section() {
        let s = parse_settings_toml(VALID).unwrap();
        assert_eq!(s.drill.mode, DrillMode::Reading);
        assert_eq!(s.drill.content, ContentFilter::Kanji);
        assert_eq!(s.display.reading_separator, " / ");
    }

    #[test]
    fn error_ratio_out_of_range() {
        let toml = VALID.replace("kanji_reading_ratio = 0.5", "kanji_reading_ratio = 1.5");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("mixed.kanji_reading_ratio"));
    }

    #[test]
    fn error_negative_ratio() {
        let toml = VALID.replace("word_reading_ratio = 1.0", "word_reading_ratio = -0.1");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("mixed.word_reading_ratio"));
    }

    #[test]
    fn error_empty_separator() {
        let toml = VALID.replace(r#"meaning_separator = "; ""#, r#"meaning_separator = """#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(err.to_string().contains("display.meaning_separator"));
    }

    #[test]
    fn error_unknown_mode() {
        let toml = VALID.replace(r#"mode = "reading""#, r#"mode = "writing""#);
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn garbage_is_a_parse_error() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn every_section_is_required() {
        let toml = r#"
[drill]
mode = "mixed"
content = "both"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn enum_strings_round_trip() {
        for mode in [DrillMode::Reading, DrillMode::Meaning, DrillMode::Mixed] {
            assert_eq!(mode.to_string().parse::<DrillMode>().unwrap(), mode);
        }
        for content in [ContentFilter::Kanji, ContentFilter::Word, ContentFilter::Both] {
            assert_eq!(content.to_string().parse::<ContentFilter>().unwrap(), content);
        }
        let err = "all".parse::<ContentFilter>().unwrap_err();
        assert!(err.contains("kanji"));
    }
}
