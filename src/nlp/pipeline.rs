//! End-to-end text normalization: expand → tokenize → tag → lemmatize → rank.

use crate::nlp::contractions::ContractionExpander;
use crate::nlp::frequency::FrequencyTable;
use crate::nlp::lemmatizer::MorphyLemmatizer;
use crate::nlp::tagger::RuleTagger;
use crate::nlp::tokenizer::WordTokenizer;
use crate::nlp::traits::{Expand, Lemmatize, Tag, Tokenize};
use crate::nlp::types::TaggedToken;

/// The normalization pipeline over pluggable stages.
///
/// Holds no state between calls; running it twice on the same text gives
/// the same table.
#[derive(Debug, Clone, Default)]
pub struct Pipeline<
    E = ContractionExpander,
    T = WordTokenizer,
    P = RuleTagger,
    L = MorphyLemmatizer,
> {
    expander: E,
    tokenizer: T,
    tagger: P,
    lemmatizer: L,
}

impl Pipeline {
    /// Pipeline over the built-in stages.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E, T, P, L> Pipeline<E, T, P, L>
where
    E: Expand,
    T: Tokenize,
    P: Tag,
    L: Lemmatize,
{
    pub fn with_stages(expander: E, tokenizer: T, tagger: P, lemmatizer: L) -> Self {
        Self {
            expander,
            tokenizer,
            tagger,
            lemmatizer,
        }
    }

    /// Expanded, tokenized and tagged text.
    pub fn tagged(&self, text: &str) -> Vec<TaggedToken> {
        let expanded = self.expander.expand(text);
        let tokens = self.tokenizer.tokenize(&expanded);
        self.tagger.tag(&tokens)
    }

    /// Lemma sequence of `text`, in token order.
    pub fn word_list(&self, text: &str) -> Vec<String> {
        self.tagged(text)
            .iter()
            .map(|token| self.lemmatizer.lemmatize(token))
            .collect()
    }

    /// Ranked lemma counts of `text`.
    pub fn frequencies(&self, text: &str) -> FrequencyTable {
        let lemmas = self.word_list(text);
        let table = FrequencyTable::from_lemmas(&lemmas);
        tracing::debug!(
            tokens = lemmas.len(),
            distinct = table.len(),
            "Computed word frequencies"
        );
        table
    }
}
