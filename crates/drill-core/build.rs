//! Reject broken embedded data before it is compiled in with `include_str!`.

const TOML_FILES: [(&str, &str); 2] = [
    (
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
    ),
    (
        "src/romaji/default_romaji.toml",
        include_str!("src/romaji/default_romaji.toml"),
    ),
];

const SAMPLE_DATASET: (&str, &str) = ("src/sample_n5.json", include_str!("src/sample_n5.json"));

fn main() {
    for (path, _) in TOML_FILES.iter().chain([&SAMPLE_DATASET]) {
        println!("cargo:rerun-if-changed={path}");
    }
    for (path, text) in TOML_FILES {
        if let Err(e) = text.parse::<toml::Table>() {
            panic!("embedded table {path} does not parse: {e}");
        }
    }
    check_sample(SAMPLE_DATASET.0, SAMPLE_DATASET.1);
}

/// The bundled dataset must be an object with a non-empty `cards` array.
fn check_sample(path: &str, text: &str) {
    let doc: serde_json::Value = match serde_json::from_str(text) {
        Ok(doc) => doc,
        Err(e) => panic!("bundled dataset {path} is not JSON: {e}"),
    };
    match doc.get("cards").and_then(|c| c.as_array()) {
        Some(cards) if !cards.is_empty() => {}
        _ => panic!("bundled dataset {path} has no \"cards\" array"),
    }
}
