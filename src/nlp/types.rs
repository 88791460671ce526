//! Shared token types for the text pipeline.

/// Coarse part-of-speech bucket used to pick a lemmatization rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

impl PosCategory {
    /// Map a Penn Treebank tag onto its bucket.
    ///
    /// Prefixes are checked in the order `NN`, `VB`, `JJ`, `R`; anything
    /// else (determiners, pronouns, prepositions, ...) is `Other`.
    pub fn from_penn(tag: &str) -> Self {
        if tag.starts_with("NN") {
            PosCategory::Noun
        } else if tag.starts_with("VB") {
            PosCategory::Verb
        } else if tag.starts_with("JJ") {
            PosCategory::Adjective
        } else if tag.starts_with('R') {
            PosCategory::Adverb
        } else {
            PosCategory::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PosCategory::Noun => "noun",
            PosCategory::Verb => "verb",
            PosCategory::Adjective => "adjective",
            PosCategory::Adverb => "adverb",
            PosCategory::Other => "other",
        }
    }
}

/// A token paired with its fine-grained Penn Treebank tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// The token as it appeared after tokenization.
    pub text: String,
    /// Penn Treebank tag (`NN`, `VBD`, `JJS`, `PRP`, ...).
    pub tag: String,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }

    /// Coarse bucket of this token's tag.
    pub fn category(&self) -> PosCategory {
        PosCategory::from_penn(&self.tag)
    }
}
