//! Contraction expansion ("haven't" -> "have not").
//!
//! Works unit by unit over whitespace-delimited text. Punctuation glued to
//! a unit ("isn't." or "(we're") is kept around the expansion, and the
//! whitespace between units is left exactly as it was.

use crate::nlp::traits::Expand;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Contraction table, embedded at compile time.
const CONTRACTIONS_JSON: &str = include_str!("data/contractions.json");

type ContractionTable = HashMap<String, String>;

/// Parse and cache the embedded contraction table.
fn contraction_table() -> &'static ContractionTable {
    static TABLE: OnceLock<ContractionTable> = OnceLock::new();
    TABLE.get_or_init(|| serde_json::from_str(CONTRACTIONS_JSON).unwrap_or_default())
}

/// Table-driven contraction expander.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContractionExpander;

impl ContractionExpander {
    pub fn new() -> Self {
        Self
    }

    /// Number of known contracted forms.
    pub fn len(&self) -> usize {
        contraction_table().len()
    }

    pub fn is_empty(&self) -> bool {
        contraction_table().is_empty()
    }

    /// Expand a single unit, or `None` if it holds no known contraction.
    pub fn expand_word(&self, word: &str) -> Option<String> {
        // Try with apostrophes kept at the edges first ("'cause"), then
        // with them stripped ("'don't'").
        let (prefix, core, suffix) = split_edges(word, |c| c.is_alphabetic() || is_apostrophe(c))?;
        if let Some(expanded) = lookup(core) {
            return Some(format!("{prefix}{expanded}{suffix}"));
        }

        let (inner_prefix, inner, inner_suffix) = split_edges(core, char::is_alphabetic)?;
        let expanded = lookup(inner)?;
        Some(format!(
            "{prefix}{inner_prefix}{expanded}{inner_suffix}{suffix}"
        ))
    }
}

impl Expand for ContractionExpander {
    fn expand(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / 8);
        for piece in text.split_inclusive(char::is_whitespace) {
            let word = piece.trim_end_matches(char::is_whitespace);
            let gap = &piece[word.len()..];
            match self.expand_word(word) {
                Some(expanded) => out.push_str(&expanded),
                None => out.push_str(word),
            }
            out.push_str(gap);
        }
        out
    }
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// Split `word` into (leading junk, core, trailing junk), where the core
/// starts and ends with a character accepted by `keep`.
fn split_edges(word: &str, keep: impl Fn(char) -> bool) -> Option<(&str, &str, &str)> {
    let start = word.find(&keep)?;
    let (last_idx, last_char) = word.char_indices().rev().find(|(_, c)| keep(*c))?;
    let end = last_idx + last_char.len_utf8();
    Some((&word[..start], &word[start..end], &word[end..]))
}

/// Look up a core unit case-insensitively and carry its casing over.
fn lookup(core: &str) -> Option<String> {
    if !core.chars().any(is_apostrophe) {
        return None;
    }
    let key = core.replace('\u{2019}', "'").to_lowercase();
    let expanded = contraction_table().get(&key)?;
    Some(match_case(core, expanded))
}

fn match_case(original: &str, expanded: &str) -> String {
    let letters: Vec<char> = original.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.len() > 1 && letters.iter().all(|c| c.is_uppercase()) {
        return expanded.to_uppercase();
    }
    match letters.first() {
        Some(first) if first.is_uppercase() => {
            let mut chars = expanded.chars();
            match chars.next() {
                Some(head) => head.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        _ => expanded.to_string(),
    }
}
