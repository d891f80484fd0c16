pub mod tokens;

use tracing::debug;

use crate::engine::analyzer::tokens::TextTokensDistribution;

const LOG_TARGET: &str = "analyzer";

/// Words seen more than once, most frequent first.
///
/// Words with equal counts keep the order in which they first appeared in
/// the text. Only built by [`analyze`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repetitions {
    entries: Vec<(String, usize)>,
}

impl Repetitions {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries
            .iter()
            .map(|(word, count)| (word.as_str(), *count))
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == word)
            .map(|(_, count)| *count)
    }

    pub fn into_vec(self) -> Vec<(String, usize)> {
        self.entries
    }
}

/// Counts lowercased tokens of at least `min_length` characters and keeps
/// the ones that occur more than once.
pub fn analyze(text: &str, min_length: usize) -> Repetitions {
    let dist = TextTokensDistribution::from_text(text, min_length);
    let distinct = dist.len();

    let mut entries: Vec<_> = dist
        .into_entries()
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .collect();

    // sort_by is stable, ties stay in first-seen order
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    debug!(
        target: LOG_TARGET,
        distinct,
        repeated = entries.len(),
        min_length,
        "Analyzed text"
    );

    Repetitions { entries }
}
