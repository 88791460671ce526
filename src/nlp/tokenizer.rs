//! Word tokenization.
//!
//! Pipeline: UAX#29 word bounds → drop whitespace → Treebank clitic split
//! (`n't`, `'s`, `'re`, ...) and fused forms (`cannot`, `gonna`) → keep
//! purely alphabetic tokens.

use crate::nlp::traits::Tokenize;
use regex::Regex;
use std::sync::LazyLock;
use unicode_segmentation::UnicodeSegmentation;

/// Trailing clitics split off a word, as the Penn Treebank does.
static CLITIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(.+?)(n['\u{2019}]t|['\u{2019}](?:s|re|ve|ll|d|m))$").unwrap()
});

/// Fused forms split at a fixed offset: "cannot" → "can" + "not".
const FUSED: &[(&str, usize)] = &[
    ("cannot", 3),
    ("gimme", 3),
    ("gonna", 3),
    ("gotta", 3),
    ("lemme", 3),
    ("wanna", 3),
];

/// Unicode-aware word tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Segment text into candidate tokens, punctuation included.
    ///
    /// "today." yields "today" and "."; whitespace runs are dropped.
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        for piece in text.split_word_bounds() {
            if piece.chars().all(char::is_whitespace) {
                continue;
            }
            split_clitics(piece, &mut out);
        }
        out
    }
}

impl Tokenize for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        self.segment(text)
            .into_iter()
            .filter(|token| is_alphabetic(token))
            .collect()
    }
}

/// True when the token is non-empty and made only of alphabetic characters.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

fn split_clitics(piece: &str, out: &mut Vec<String>) {
    let lower = piece.to_lowercase();
    if let Some(&(_, at)) = FUSED.iter().find(|(word, _)| *word == lower) {
        // Fused forms are ASCII, so the byte offset is a char boundary.
        out.push(piece[..at].to_string());
        out.push(piece[at..].to_string());
        return;
    }

    match CLITIC_RE.captures(piece) {
        Some(caps) => {
            out.push(caps[1].to_string());
            out.push(caps[2].to_string());
        }
        None => out.push(piece.to_string()),
    }
}
