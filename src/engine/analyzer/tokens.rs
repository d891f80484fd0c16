use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("word pattern compiles"));

/// Maximal runs of word characters, in source order.
pub fn get_tokens(text: &str) -> impl Iterator<Item = &str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str())
}

/// Per-word occurrence counts that remember the order in which each
/// distinct word was first seen.
#[derive(Debug, Clone, Default)]
pub struct TextTokensDistribution {
    positions: HashMap<String, usize>,
    distribution: Vec<(String, usize)>,
}

impl TextTokensDistribution {
    pub fn from_text(text: &str, min_length: usize) -> Self {
        let mut dist = TextTokensDistribution::default();

        for word in get_tokens(text) {
            if word.chars().count() >= min_length {
                dist.add_word(word.to_lowercase());
            }
        }

        dist
    }

    pub fn add_word(&mut self, word: String) {
        match self.positions.get(&word) {
            Some(&index) => self.distribution[index].1 += 1,
            None => {
                self.positions.insert(word.clone(), self.distribution.len());
                self.distribution.push((word, 1));
            }
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.distribution.len()
    }

    pub fn into_entries(self) -> Vec<(String, usize)> {
        self.distribution
    }
}
