//! Lemma counting and ranking.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Lemma counts ordered by descending count.
///
/// Equal counts keep the order in which the lemmas were first seen; there is
/// no secondary key. Serialises as a JSON object in ranking order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    /// Count a lemma sequence and rank it.
    pub fn from_lemmas<I, S>(lemmas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, usize)> = Vec::new();

        for lemma in lemmas {
            let lemma = lemma.as_ref();
            match index.get(lemma) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    index.insert(lemma.to_string(), entries.len());
                    entries.push((lemma.to_string(), 1));
                }
            }
        }

        // `sort_by` is stable, so ties stay in first-seen order.
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for a lemma, or 0 when absent.
    pub fn count(&self, lemma: &str) -> usize {
        self.entries
            .iter()
            .find(|(l, _)| l == lemma)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Entries in ranking order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// The `n` highest-ranked entries.
    pub fn top(&self, n: usize) -> &[(String, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (lemma, count) in &self.entries {
            map.serialize_entry(lemma, count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_order() {
        let table = FrequencyTable::from_lemmas(["dog", "dog", "cat"]);
        assert_eq!(
            table.entries(),
            &[("dog".to_string(), 2), ("cat".to_string(), 1)]
        );
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let table = FrequencyTable::from_lemmas(["b", "a", "c", "a", "b", "d"]);
        let order: Vec<&str> = table.iter().map(|(l, _)| l).collect();
        assert_eq!(order, vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_ranking_is_non_increasing() {
        let words = "the cat saw the dog and the dog saw a cat run by the park";
        let table = FrequencyTable::from_lemmas(words.split(' '));
        let counts: Vec<usize> = table.iter().map(|(_, c)| c).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(table.count("the"), 4);
        assert_eq!(table.total(), 15);
    }

    #[test]
    fn test_empty() {
        let table = FrequencyTable::from_lemmas(Vec::<String>::new());
        assert!(table.is_empty());
        assert_eq!(serde_json::to_string(&table).unwrap(), "{}");
    }

    #[test]
    fn test_serializes_in_rank_order() {
        let table = FrequencyTable::from_lemmas(["z", "a", "a"]);
        assert_eq!(serde_json::to_string(&table).unwrap(), r#"{"a":2,"z":1}"#);
    }

    #[test]
    fn test_top() {
        let table = FrequencyTable::from_lemmas(["x", "y", "y"]);
        assert_eq!(table.top(1), &[("y".to_string(), 2)]);
        assert_eq!(table.top(10).len(), 2);
        assert_eq!(table.count("missing"), 0);
    }
}
