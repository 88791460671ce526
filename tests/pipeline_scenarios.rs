//! End-to-end behaviour of the text pipeline.

use privscan::nlp::{
    ContractionExpander, Expand, FrequencyTable, Lemmatize, MorphyLemmatizer, Pipeline, RuleTagger, Tag,
    TaggedToken, Tokenize, WordTokenizer,
};

#[test]
fn test_reference_sentences() {
    let pipeline = Pipeline::new();
    let cases: [(&str, &[&str]); 5] = [
        ("I have some dogs.", &["I", "have", "some", "dog"]),
        ("I walked to a park today.", &["I", "walk", "to", "a", "park", "today"]),
        ("I am taller than you.", &["I", "be", "taller", "than", "you"]),
        ("Which animal runs the fastest?", &["Which", "animal", "run", "the", "fast"]),
        ("I haven't eaten snack!", &["I", "have", "not", "eat", "snack"]),
    ];
    for (text, expected) in cases {
        assert_eq!(pipeline.word_list(text), expected, "input: {text}");
    }
}

#[test]
fn test_frequency_of_lemma_sequence() {
    let table = FrequencyTable::from_lemmas(["dog", "dog", "cat"]);
    assert_eq!(
        serde_json::to_string(&table).unwrap(),
        r#"{"dog":2,"cat":1}"#
    );
}

const POLICY: &str = "privacy policy we collect personal data when you use our services. \
    we don't sell your data. we may share data with partners who process it on our behalf. \
    cookies are small files; we use cookies to improve the services you've used. \
    you can't opt out of essential cookies, but you can contact us at any time.";

#[test]
fn test_pipeline_is_idempotent() {
    let pipeline = Pipeline::new();
    assert_eq!(pipeline.frequencies(POLICY), pipeline.frequencies(POLICY));
    assert_eq!(
        Pipeline::new().frequencies(POLICY),
        Pipeline::new().frequencies(POLICY)
    );
}

#[test]
fn test_ranking_is_non_increasing() {
    let table = Pipeline::new().frequencies(POLICY);
    let counts: Vec<usize> = table.iter().map(|(_, c)| c).collect();
    assert!(!counts.is_empty());
    assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(table.iter().next().map(|(w, _)| w), Some("we"));
}

#[test]
fn test_policy_lemmas() {
    let table = Pipeline::new().frequencies(POLICY);
    assert_eq!(table.count("cookie"), 3);
    assert_eq!(table.count("cookies"), 0);
    assert_eq!(table.count("data"), 3);
    assert!(table.count("not") >= 2);
    assert_eq!(table.count("n't"), 0);
}

#[test]
fn test_tokens_are_always_alphabetic() {
    let tokenizer = WordTokenizer::new();
    let expander = ContractionExpander::new();
    let samples = [
        POLICY,
        "e-mail: info@example.com, tel. +44 (0)20 7469 0100!",
        "Don't/won't/can't. 3rd-party “cookies” & SDKs…",
        "",
    ];
    for text in samples {
        for token in tokenizer.tokenize(&expander.expand(text)) {
            assert!(token.chars().all(char::is_alphabetic), "{token:?} from {text:?}");
            assert!(!token.is_empty());
        }
    }
}

#[test]
fn test_base_forms_are_fixed_points() {
    let lemmatizer = MorphyLemmatizer::new();
    for (word, tag) in [("dog", "NN"), ("park", "NN"), ("walk", "VB"), ("fast", "JJ"), ("not", "RB"), ("the", "DT")] {
        assert_eq!(lemmatizer.lemmatize(&TaggedToken::new(word, tag)), word);
    }
}

#[test]
fn test_tagging_uses_whole_sequence() {
    let tagger = RuleTagger::new();
    let words = |s: &str| s.split(' ').map(String::from).collect::<Vec<_>>();

    let alone = tagger.tag(&words("share"));
    let after_modal = tagger.tag(&words("we may share"));
    assert_eq!(alone[0].tag, "NN");
    assert_eq!(after_modal[2].tag, "VB");
}
