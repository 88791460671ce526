//! Capability traits for each stage of the text pipeline.
//!
//! Every stage is a single transform. The built-in implementations are
//! stateless and backed by embedded data tables; callers can swap any of
//! them for another backend through [`crate::nlp::Pipeline::with_stages`].

use crate::nlp::types::TaggedToken;

/// Rewrites contracted word forms into their expanded equivalents.
///
/// Must be total: unknown forms pass through unchanged.
pub trait Expand {
    fn expand(&self, text: &str) -> String;
}

/// Splits text into alphabetic word tokens, preserving encounter order.
pub trait Tokenize {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Assigns a Penn Treebank tag to every token.
///
/// Tagging is context-sensitive, so it is always called once over the whole
/// sequence. The output is parallel to the input.
pub trait Tag {
    fn tag(&self, tokens: &[String]) -> Vec<TaggedToken>;
}

/// Reduces a tagged token to its dictionary base form.
pub trait Lemmatize {
    fn lemmatize(&self, token: &TaggedToken) -> String;
}
