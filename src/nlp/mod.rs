//! Text normalization: contraction expansion, tokenization, part-of-speech
//! tagging, lemmatization and frequency ranking.
//!
//! Every stage sits behind a trait in [`traits`] and the built-in stages are
//! driven by data tables embedded in the binary.

pub mod contractions;
pub mod frequency;
pub mod lemmatizer;
pub mod pipeline;
pub mod tagger;
pub mod tokenizer;
pub mod traits;
pub mod types;

pub use contractions::ContractionExpander;
pub use frequency::FrequencyTable;
pub use lemmatizer::{MorphyLemmatizer, WordClass};
pub use pipeline::Pipeline;
pub use tagger::RuleTagger;
pub use tokenizer::WordTokenizer;
pub use traits::{Expand, Lemmatize, Tag, Tokenize};
pub use types::{PosCategory, TaggedToken};
