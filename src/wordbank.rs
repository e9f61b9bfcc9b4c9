use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constraints::WORD_LENGTH;
use crate::info_log;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.json");

const APP_DIR: &str = "wordle-assistant";
const WORDBANK_FILE: &str = "words.json";

fn normalize<I, S>(entries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut words: Vec<String> = Vec::new();
    for entry in entries {
        let word = entry.as_ref().trim().to_uppercase();
        if word.len() == WORD_LENGTH
            && word.chars().all(|c| c.is_ascii_alphabetic())
            && !words.contains(&word)
        {
            words.push(word);
        }
    }
    words
}

/// Newline-delimited word list.
pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    normalize(data.lines())
}

/// Word list stored as a JSON array of strings.
///
/// # Errors
/// Returns `io::ErrorKind::InvalidData` if `data` is not a JSON string array.
pub fn load_wordbank_from_json_str(data: &str) -> io::Result<Vec<String>> {
    let entries: Vec<String> = serde_json::from_str(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(normalize(entries))
}

/// Load a word list file. Files ending in `.json` are read as a JSON array,
/// anything else as one word per line.
///
/// # Errors
/// Returns an I/O error if the file cannot be read, is malformed, or holds no
/// usable five-letter words.
pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let words = if is_json {
        load_wordbank_from_json_str(&data)?
    } else {
        load_wordbank_from_str(&data)
    };
    info_log!("Loaded {} words from {}", words.len(), path.display());
    non_empty(words)
}

/// The word list compiled into the binary.
///
/// # Errors
/// Returns `io::ErrorKind::InvalidData` if the embedded list cannot be parsed.
pub fn default_wordbank() -> io::Result<Vec<String>> {
    non_empty(load_wordbank_from_json_str(EMBEDDED_WORDBANK)?)
}

/// Per-user word list, `<config dir>/wordle-assistant/words.json`.
#[must_use]
pub fn user_wordbank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(WORDBANK_FILE))
}

/// Resolve the word list: an explicit path, then the per-user file if it
/// exists, then the embedded list.
///
/// # Errors
/// Propagates any error from loading the chosen source.
pub fn resolve_wordbank(explicit: Option<&Path>) -> io::Result<Vec<String>> {
    if let Some(path) = explicit {
        return load_wordbank_from_file(path);
    }
    if let Some(path) = user_wordbank_path()
        && path.is_file()
    {
        return load_wordbank_from_file(&path);
    }
    default_wordbank()
}

fn non_empty(words: Vec<String>) -> io::Result<Vec<String>> {
    if words.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "word list contains no five-letter words",
        ));
    }
    Ok(words)
}
