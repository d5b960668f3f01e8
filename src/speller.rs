//! The dictionary-speller boundary (§6).
//!
//! The pipeline treats candidate generation as an external collaborator: it only ever
//! calls [`Speller::suggest`] and never looks at how a suggestion was produced. The
//! symspell-style training, persistence, and fuzzy-matching machinery that produced those
//! suggestions upstream is out of scope here; [`WordListSpeller`] exists only as a
//! reference implementation for tests and the demo binary.

use std::collections::HashMap;

/// A source of candidate dictionary words for a misspelled or mangled probe.
///
/// Implementations are free to use any matching strategy (symmetric delete, BK-tree,
/// trigram index, ...); the pipeline only requires that `suggest` return plausible source
/// words, roughly ordered by how likely each is to be the password's origin.
pub trait Speller {
    /// Returns candidate source words for `probe`, best guess first.
    fn suggest(&self, probe: &str) -> Vec<String>;
}

/// An in-memory [`Speller`] backed by a precomputed map from probe to suggestions.
///
/// This is the simplest possible implementation of the trait: no training, no on-disk
/// format, just a lookup table. It exists so the rest of the pipeline can be built and
/// tested without depending on a real dictionary-speller crate.
#[derive(Debug, Clone, Default)]
pub struct WordListSpeller {
    suggestions: HashMap<String, Vec<String>>,
}

impl WordListSpeller {
    /// Builds an empty speller with no suggestions.
    pub fn new() -> Self {
        WordListSpeller {
            suggestions: HashMap::new(),
        }
    }

    /// Registers `words` as the suggestion list for `probe`.
    pub fn insert(&mut self, probe: impl Into<String>, words: Vec<String>) {
        self.suggestions.insert(probe.into(), words);
    }

    /// Builds a speller from an iterator of `(probe, suggestions)` pairs.
    pub fn from_pairs<I, W>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<W>)>,
        W: Into<String>,
    {
        let mut speller = WordListSpeller::new();
        for (probe, words) in pairs {
            speller.insert(probe, words.into_iter().map(Into::into).collect());
        }
        speller
    }
}

impl Speller for WordListSpeller {
    fn suggest(&self, probe: &str) -> Vec<String> {
        self.suggestions.get(probe).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_probes_yield_no_suggestions() {
        let speller = WordListSpeller::new();
        assert!(speller.suggest("whatever").is_empty());
    }

    #[test]
    fn registered_probes_return_their_suggestions() {
        let mut speller = WordListSpeller::new();
        speller.insert("calfornia", vec!["california".to_string()]);
        assert_eq!(speller.suggest("calfornia"), vec!["california".to_string()]);
    }

    #[test]
    fn from_pairs_builds_the_same_lookup_as_repeated_insert() {
        let speller = WordListSpeller::from_pairs(vec![(
            "helo".to_string(),
            vec!["hello"],
        )]);
        assert_eq!(speller.suggest("helo"), vec!["hello".to_string()]);
    }
}
