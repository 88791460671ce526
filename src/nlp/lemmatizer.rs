//! Dictionary-backed lemmatization in the style of WordNet's morphy.
//!
//! For a word and a word class the lemmatizer tries, in order:
//!
//! 1. the class's exception list ("ate" → "eat", "children" → "child");
//! 2. the word itself, if it is a known base form;
//! 3. suffix substitutions for the class, keeping the shortest candidate that
//!    is a known base form;
//! 4. a guarded heuristic for nouns and verbs, or the word unchanged for
//!    adjectives and adverbs.
//!
//! Calling without a word class applies the default rule, which treats the
//! word as a noun.

use crate::nlp::traits::Lemmatize;
use crate::nlp::types::{PosCategory, TaggedToken};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Exception lists and base-form lexicons, embedded at compile time.
const LEMMAS_JSON: &str = include_str!("data/lemmas.json");

/// Word class understood by the lemmatizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordClass {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PosCategory {
    /// Lemmatizer argument for this bucket; `Other` uses the default rule.
    pub fn word_class(&self) -> Option<WordClass> {
        match self {
            PosCategory::Noun => Some(WordClass::Noun),
            PosCategory::Verb => Some(WordClass::Verb),
            PosCategory::Adjective => Some(WordClass::Adjective),
            PosCategory::Adverb => Some(WordClass::Adverb),
            PosCategory::Other => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ClassTables<T> {
    #[serde(default)]
    noun: T,
    #[serde(default)]
    verb: T,
    #[serde(default)]
    adjective: T,
    #[serde(default)]
    adverb: T,
}

impl<T> ClassTables<T> {
    fn get(&self, class: WordClass) -> &T {
        match class {
            WordClass::Noun => &self.noun,
            WordClass::Verb => &self.verb,
            WordClass::Adjective => &self.adjective,
            WordClass::Adverb => &self.adverb,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct LemmaData {
    exceptions: ClassTables<HashMap<String, String>>,
    lexicon: ClassTables<HashSet<String>>,
}

/// Parse and cache the embedded lemma tables.
fn lemma_data() -> &'static LemmaData {
    static DATA: OnceLock<LemmaData> = OnceLock::new();
    DATA.get_or_init(|| serde_json::from_str(LEMMAS_JSON).unwrap_or_default())
}

const NOUN_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

const VERB_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ies", "y"),
    ("es", "e"),
    ("es", ""),
    ("ed", "e"),
    ("ed", ""),
    ("ied", "y"),
    ("ing", "e"),
    ("ing", ""),
];

const ADJECTIVE_RULES: &[(&str, &str)] = &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")];

/// Morphy-style lemmatizer over the embedded tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct MorphyLemmatizer;

impl MorphyLemmatizer {
    pub fn new() -> Self {
        Self
    }

    /// Lemmatize `word` as `class`, or with the default rule when `None`.
    ///
    /// The default rule only maps onto known noun bases; a word with no
    /// known base comes back unchanged.
    pub fn lemmatize_as(&self, word: &str, class: Option<WordClass>) -> String {
        let default_rule = class.is_none();
        let class = class.unwrap_or(WordClass::Noun);
        let data = lemma_data();
        let lower = word.to_lowercase();

        if let Some(base) = data.exceptions.get(class).get(&lower) {
            return base.clone();
        }

        let lexicon = data.lexicon.get(class);
        if lexicon.contains(&lower) {
            return word.to_string();
        }

        let known = candidates(&lower, class)
            .into_iter()
            .filter(|c| lexicon.contains(c))
            .min_by_key(|c| c.chars().count());
        if let Some(base) = known {
            return base;
        }

        if default_rule {
            return word.to_string();
        }

        match class {
            WordClass::Noun => guess_noun(word),
            WordClass::Verb => guess_verb(word),
            WordClass::Adjective | WordClass::Adverb => word.to_string(),
        }
    }
}

impl Lemmatize for MorphyLemmatizer {
    fn lemmatize(&self, token: &TaggedToken) -> String {
        self.lemmatize_as(&token.text, token.category().word_class())
    }
}

/// Substitution candidates in rule order, including undoubled stems
/// ("stopped" → "stop", "bigger" → "big").
fn candidates(lower: &str, class: WordClass) -> Vec<String> {
    let rules = match class {
        WordClass::Noun => NOUN_RULES,
        WordClass::Verb => VERB_RULES,
        WordClass::Adjective => ADJECTIVE_RULES,
        WordClass::Adverb => return Vec::new(),
    };

    let mut out = Vec::new();
    for (suffix, replacement) in rules {
        let Some(stem) = lower.strip_suffix(suffix) else {
            continue;
        };
        if stem.is_empty() {
            continue;
        }
        out.push(format!("{stem}{replacement}"));
        if replacement.is_empty() {
            if let Some(single) = undouble(stem) {
                out.push(single.to_string());
            }
        }
    }
    out
}

/// Drop a doubled final consonant, except the l/s/z doubles that base forms
/// keep ("fill", "pass", "buzz").
fn undouble(stem: &str) -> Option<&str> {
    let mut rev = stem.chars().rev();
    let last = rev.next()?;
    let before = rev.next()?;
    if last == before && is_consonant(last) && !matches!(last, 'l' | 's' | 'z') {
        Some(&stem[..stem.len() - last.len_utf8()])
    } else {
        None
    }
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Case-preserving suffix strip: checks the suffix case-insensitively and
/// cuts the original word when byte lengths line up.
fn strip_ci<'a>(word: &'a str, suffix: &str) -> Option<&'a str> {
    let cut = word.len().checked_sub(suffix.len())?;
    let tail = word.get(cut..)?;
    if tail.eq_ignore_ascii_case(suffix) {
        Some(&word[..cut])
    } else {
        None
    }
}

/// Plural-to-singular heuristic for nouns missing from the lexicon.
fn guess_noun(word: &str) -> String {
    let lower = word.to_lowercase();
    if let Some(stem) = strip_ci(word, "ies").filter(|s| s.len() >= 2) {
        return format!("{stem}y");
    }
    if let Some(stem) = strip_ci(word, "sses") {
        return format!("{stem}ss");
    }
    for sibilant in ["xes", "zes", "ches", "shes"] {
        if let Some(stem) = strip_ci(word, sibilant) {
            return format!("{stem}{}", &sibilant[..sibilant.len() - 2]);
        }
    }
    let keeps_s = ["ss", "us", "is"].iter().any(|s| lower.ends_with(s));
    if !keeps_s {
        if let Some(stem) = strip_ci(word, "s").filter(|s| s.chars().count() >= 3) {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// Inflection-stripping heuristic for verbs missing from the lexicon.
fn guess_verb(word: &str) -> String {
    let lower = word.to_lowercase();
    for (suffix, replacement) in [("ies", "y"), ("ied", "y")] {
        if let Some(stem) = strip_ci(word, suffix).filter(|s| s.len() >= 2) {
            return format!("{stem}{replacement}");
        }
    }
    for sibilant in ["sses", "xes", "zes", "ches", "shes"] {
        if let Some(stem) = strip_ci(word, sibilant) {
            return format!("{stem}{}", &sibilant[..sibilant.len() - 2]);
        }
    }
    for suffix in ["ing", "ed"] {
        if let Some(stem) = strip_ci(word, suffix) {
            if stem.chars().count() >= 2 && contains_vowel(stem) {
                return restore_stem(stem);
            }
        }
    }
    let keeps_s = ["ss", "us", "is"].iter().any(|s| lower.ends_with(s));
    if !keeps_s {
        if let Some(stem) = strip_ci(word, "s").filter(|s| s.chars().count() >= 2) {
            return stem.to_string();
        }
    }
    word.to_string()
}

/// Repair a stem left by removing "-ed"/"-ing" (Porter step 1b):
/// "creat" → "create", "stopp" → "stop", "shar" → "share".
fn restore_stem(stem: &str) -> String {
    let lower = stem.to_lowercase();
    if ["at", "bl", "iz"].iter().any(|s| lower.ends_with(s)) {
        return format!("{stem}e");
    }
    if let Some(single) = undouble(stem) {
        return single.to_string();
    }
    if measure(&lower) == 1 && ends_cvc(&lower) {
        return format!("{stem}e");
    }
    stem.to_string()
}

fn contains_vowel(s: &str) -> bool {
    s.chars()
        .any(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

/// Consonant test in Porter's sense: `y` after a consonant is a vowel.
fn porter_consonant(chars: &[char], i: usize) -> bool {
    match chars[i] {
        'a' | 'e' | 'i' | 'o' | 'u' => false,
        'y' => i == 0 || !porter_consonant(chars, i - 1),
        _ => true,
    }
}

/// Porter measure: number of vowel-consonant sequences in the stem.
fn measure(stem: &str) -> usize {
    let chars: Vec<char> = stem.chars().collect();
    let mut m = 0;
    let mut prev_vowel = false;
    for i in 0..chars.len() {
        let consonant = porter_consonant(&chars, i);
        if consonant && prev_vowel {
            m += 1;
        }
        prev_vowel = !consonant;
    }
    m
}

/// Stem ends consonant-vowel-consonant, the last not w, x or y.
fn ends_cvc(stem: &str) -> bool {
    let chars: Vec<char> = stem.chars().collect();
    let n = chars.len();
    if n < 3 {
        return false;
    }
    porter_consonant(&chars, n - 3)
        && !porter_consonant(&chars, n - 2)
        && porter_consonant(&chars, n - 1)
        && !matches!(chars[n - 1], 'w' | 'x' | 'y')
}
