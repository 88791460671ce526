//! Rule-based part-of-speech tagger producing Penn Treebank tags.
//!
//! Tagging runs in two passes over the whole token sequence:
//!
//! 1. **Initial tags**: closed-class words and irregular verb forms come
//!    from an embedded lexicon; unknown words are guessed from their suffix.
//! 2. **Contextual rules**: one left-to-right pass that revises a tag from
//!    its neighbours (e.g. `to collect` → `VB`, `animal runs the` → `VBZ`).
//!
//! Because of the second pass a word's tag depends on the sequence it sits
//! in, so callers must tag a document in one call.

use crate::nlp::traits::Tag;
use crate::nlp::types::TaggedToken;
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// Tag lexicon (tag -> words), embedded at compile time.
const LEXICON_JSON: &str = include_str!("data/lexicon.json");

type Lexicon = HashMap<String, String>;

/// Parse and cache the embedded lexicon as a word -> tag map.
fn lexicon() -> &'static Lexicon {
    static LEXICON: OnceLock<Lexicon> = OnceLock::new();
    LEXICON.get_or_init(|| {
        let groups: BTreeMap<String, Vec<String>> =
            serde_json::from_str(LEXICON_JSON).unwrap_or_default();
        let mut words = Lexicon::new();
        for (tag, members) in groups {
            for word in members {
                words.entry(word).or_insert_with(|| tag.clone());
            }
        }
        words
    })
}

/// Forms of "have" and "be" that take a past participle.
const PERFECT_AUXILIARIES: &[&str] = &[
    "have", "has", "had", "having", "am", "is", "are", "was", "were", "be", "been", "being",
];

/// Forms of "do" that take a bare infinitive.
const DO_SUPPORT: &[&str] = &["do", "does", "did"];

/// Pronouns that can head a clause and take a present-tense verb.
const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "we", "they"];

/// Third-person subjects that take a `-s` verb.
const SINGULAR_SUBJECT_TAGS: &[&str] = &["NN", "NNP", "WDT", "WP"];

/// Pronouns and demonstratives that head a clause with a `-s` verb.
const THIRD_PERSON_SUBJECTS: &[&str] = &["it", "he", "she", "this"];

/// Tags that typically open the object of a `-s` verb.
const OBJECT_START_TAGS: &[&str] = &["DT", "PRP", "PRP$", "IN", "TO", "RB", "CD", "JJ"];

/// Lexicon-and-rules tagger.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTagger;

impl RuleTagger {
    pub fn new() -> Self {
        Self
    }

    /// Lexicon tag for a word, if it is a known closed-class or irregular form.
    pub fn lexicon_tag(&self, word: &str) -> Option<&'static str> {
        lexicon().get(&word.to_lowercase()).map(String::as_str)
    }

    /// Tag assigned before context is considered.
    fn initial_tag(&self, word: &str, sentence_start: bool) -> String {
        if let Some(tag) = self.lexicon_tag(word) {
            return tag.to_string();
        }

        let starts_upper = word.chars().next().is_some_and(char::is_uppercase);
        if starts_upper && !sentence_start {
            return "NNP".to_string();
        }

        suffix_tag(&word.to_lowercase()).to_string()
    }
}

impl Tag for RuleTagger {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken> {
        let mut tags: Vec<String> = tokens
            .iter()
            .enumerate()
            .map(|(i, word)| self.initial_tag(word, i == 0))
            .collect();

        for i in 0..tokens.len() {
            if let Some(revised) = self.contextual_tag(tokens, &tags, i) {
                tags[i] = revised.to_string();
            }
        }

        tokens
            .iter()
            .zip(tags)
            .map(|(word, tag)| TaggedToken::new(word.clone(), tag))
            .collect()
    }
}

impl RuleTagger {
    /// Revise the tag at `i` given its already-revised left context and
    /// initial right context. Returns `None` to keep the current tag.
    fn contextual_tag(&self, tokens: &[String], tags: &[String], i: usize) -> Option<&'static str> {
        let word = tokens[i].to_lowercase();
        let tag = tags[i].as_str();
        let known = self.lexicon_tag(&word).is_some();
        let prev_tag = i.checked_sub(1).map(|p| tags[p].as_str());
        let prev_word = i.checked_sub(1).map(|p| tokens[p].to_lowercase());
        let next_tag = tags.get(i + 1).map(String::as_str);
        let next_word = tokens.get(i + 1).map(|w| w.to_lowercase());

        // Comparative before "than": "taller than" → RBR.
        if !known
            && word.len() > 3
            && word.ends_with("er")
            && next_word.as_deref() == Some("than")
        {
            return Some("RBR");
        }

        // Base form after to, a modal or do-support: "to collect",
        // "may share", "do not sell" → VB.
        if matches!(tag, "NN" | "VBP") && self.follows_base_form_trigger(tokens, tags, i) {
            return Some("VB");
        }

        // Clause subject: "we collect" → VBP.
        if tag == "NN"
            && prev_word
                .as_deref()
                .is_some_and(|p| SUBJECT_PRONOUNS.contains(&p))
        {
            return Some("VBP");
        }

        // Third-person verb: "animal runs the ...", "it uses cookies",
        // "this website uses cookies" → VBZ.
        if tag == "NNS" && !known {
            let pronoun_subject = prev_word
                .as_deref()
                .is_some_and(|p| THIRD_PERSON_SUBJECTS.contains(&p));
            let noun_subject = prev_tag.is_some_and(|p| SINGULAR_SUBJECT_TAGS.contains(&p));
            let determined_subject = noun_subject
                && matches!(prev_tag, Some("NN" | "NNP"))
                && i >= 2
                && matches!(tags[i - 2].as_str(), "DT" | "PRP$");
            let object_start = next_tag.is_some_and(|n| OBJECT_START_TAGS.contains(&n));
            let noun_object = next_tag.is_some_and(|n| matches!(n, "NN" | "NNS" | "NNP"));

            if ((pronoun_subject || noun_subject) && object_start)
                || ((pronoun_subject || determined_subject) && noun_object)
            {
                return Some("VBZ");
            }
        }

        // Perfect or passive: "have eaten", "was collected", "has not used".
        if tag == "VBD" && self.follows_auxiliary(tokens, tags, i) {
            return Some("VBN");
        }

        // Attributive use after a determiner: "the collected data", "the processing".
        if matches!(prev_tag, Some("DT") | Some("PRP$")) {
            match tag {
                "VBD" | "VBN" => return Some("JJ"),
                "VBG" if !known => return Some("NN"),
                _ => {}
            }
        }

        None
    }

    /// Whether `to`, a modal or a form of "do" precedes position `i`,
    /// skipping adverbs.
    fn follows_base_form_trigger(&self, tokens: &[String], tags: &[String], i: usize) -> bool {
        let Some(j) = (0..i).rev().find(|&j| !tags[j].starts_with("RB")) else {
            return false;
        };
        matches!(tags[j].as_str(), "TO" | "MD")
            || DO_SUPPORT.contains(&tokens[j].to_lowercase().as_str())
    }

    /// Whether a have/be form precedes position `i`, skipping adverbs.
    fn follows_auxiliary(&self, tokens: &[String], tags: &[String], i: usize) -> bool {
        let mut j = i;
        while j > 0 {
            j -= 1;
            if tags[j].starts_with("RB") {
                continue;
            }
            return PERFECT_AUXILIARIES.contains(&tokens[j].to_lowercase().as_str());
        }
        false
    }
}

/// Guess a tag for an unknown lower-cased word from its ending.
fn suffix_tag(word: &str) -> &'static str {
    let len = word.chars().count();

    if len > 4 && word.ends_with("ing") {
        return "VBG";
    }
    if len > 3 && word.ends_with("ed") {
        return "VBD";
    }
    if len > 3 && word.ends_with("ly") {
        return "RB";
    }
    if len > 4 && word.ends_with("est") {
        return "JJS";
    }
    if ["ous", "ful", "able", "ible", "ive", "ical", "less"]
        .iter()
        .any(|s| len > s.len() + 2 && word.ends_with(s))
    {
        return "JJ";
    }
    if len > 3 && word.ends_with('s') && !["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return "NNS";
    }
    "NN"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags_of(sentence: &[&str]) -> Vec<String> {
        let tokens: Vec<String> = sentence.iter().map(|s| s.to_string()).collect();
        RuleTagger::new()
            .tag(&tokens)
            .into_iter()
            .map(|t| t.tag)
            .collect()
    }

    #[test]
    fn test_lexicon_loaded() {
        let tagger = RuleTagger::new();
        assert_eq!(tagger.lexicon_tag("the"), Some("DT"));
        assert_eq!(tagger.lexicon_tag("Which"), Some("WDT"));
        assert_eq!(tagger.lexicon_tag("eaten"), Some("VBN"));
        assert_eq!(tagger.lexicon_tag("zebra"), None);
    }

    #[test]
    fn test_tag_is_parallel_to_input() {
        let tokens: Vec<String> = ["we", "store", "cookies"].iter().map(|s| s.to_string()).collect();
        let tagged = RuleTagger::new().tag(&tokens);
        assert_eq!(tagged.len(), 3);
        for (token, tagged) in tokens.iter().zip(&tagged) {
            assert_eq!(token, &tagged.text);
        }
    }

    #[test]
    fn test_tag_plural_noun_after_determiner() {
        assert_eq!(tags_of(&["I", "have", "some", "dogs"]), vec!["PRP", "VBP", "DT", "NNS"]);
    }

    #[test]
    fn test_tag_past_tense() {
        assert_eq!(
            tags_of(&["I", "walked", "to", "a", "park", "today"]),
            vec!["PRP", "VBD", "TO", "DT", "NN", "NN"]
        );
    }

    #[test]
    fn test_tag_comparative_before_than() {
        assert_eq!(
            tags_of(&["I", "am", "taller", "than", "you"]),
            vec!["PRP", "VBP", "RBR", "IN", "PRP"]
        );
    }

    #[test]
    fn test_tag_third_person_verb() {
        assert_eq!(
            tags_of(&["Which", "animal", "runs", "the", "fastest"]),
            vec!["WDT", "NN", "VBZ", "DT", "JJS"]
        );
    }

    #[test]
    fn test_tag_third_person_verb_before_noun_object() {
        assert_eq!(
            tags_of(&["this", "website", "uses", "cookies"]),
            vec!["DT", "NN", "VBZ", "NNS"]
        );
        assert_eq!(tags_of(&["it", "uses", "cookies"]), vec!["PRP", "VBZ", "NNS"]);
        assert_eq!(
            tags_of(&["she", "stores", "the", "files"]),
            vec!["PRP", "VBZ", "DT", "NNS"]
        );
    }

    #[test]
    fn test_tag_plural_subject_stays_noun() {
        assert_eq!(
            tags_of(&["we", "share", "data", "partners", "who"]),
            vec!["PRP", "VBP", "NN", "NNS", "WP"]
        );
    }

    #[test]
    fn test_tag_perfect_participle() {
        assert_eq!(
            tags_of(&["we", "have", "not", "shared", "it"]),
            vec!["PRP", "VBP", "RB", "VBN", "PRP"]
        );
    }

    #[test]
    fn test_tag_infinitive_and_modal() {
        assert_eq!(tags_of(&["to", "collect"]), vec!["TO", "VB"]);
        assert_eq!(tags_of(&["we", "may", "share"]), vec!["PRP", "MD", "VB"]);
        assert_eq!(tags_of(&["we", "collect"]), vec!["PRP", "VBP"]);
        assert_eq!(
            tags_of(&["we", "do", "not", "sell", "cookies"]),
            vec!["PRP", "VBP", "RB", "VB", "NNS"]
        );
    }

    #[test]
    fn test_tag_attributive_participle() {
        assert_eq!(tags_of(&["the", "collected", "data"]), vec!["DT", "JJ", "NN"]);
        assert_eq!(tags_of(&["the", "processing"]), vec!["DT", "NN"]);
    }

    #[test]
    fn test_tag_proper_noun_mid_sentence() {
        assert_eq!(tags_of(&["visit", "London"])[1], "NNP");
        // Sentence-initial capitals are not proper nouns by default.
        assert_eq!(tags_of(&["Cookies", "help"])[0], "NNS");
    }

    #[test]
    fn test_tag_empty() {
        assert!(RuleTagger::new().tag(&[]).is_empty());
    }

    #[test]
    fn test_suffix_tag() {
        assert_eq!(suffix_tag("processing"), "VBG");
        assert_eq!(suffix_tag("collected"), "VBD");
        assert_eq!(suffix_tag("quickly"), "RB");
        assert_eq!(suffix_tag("fastest"), "JJS");
        assert_eq!(suffix_tag("dangerous"), "JJ");
        assert_eq!(suffix_tag("cookies"), "NNS");
        assert_eq!(suffix_tag("address"), "NN");
        assert_eq!(suffix_tag("website"), "NN");
    }
}
