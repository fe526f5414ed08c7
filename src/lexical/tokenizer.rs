//! Lexical tokenizer: lower-case, strip punctuation, drop short tokens and stop words.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use crate::constants::MIN_TOKEN_CHARS_EXCLUSIVE;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "will", "would",
        "could", "should", "may", "might", "can", "must", "shall",
    ]
    .into_iter()
    .collect()
});

/// Returns `true` for words the lexical scorer ignores.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Tokenizes text for lexical scoring.
///
/// Characters other than letters, digits, `_` and whitespace become spaces; tokens of two
/// characters or fewer and stop words are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS_EXCLUSIVE)
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Free-form text plus its token sequence. Built per call, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    text: String,
    tokens: Vec<String>,
}

impl TextDocument {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            tokens: tokenize(text),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Token count (multiset size).
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Token → occurrence count.
    pub fn term_frequencies(&self) -> HashMap<&str, usize> {
        let mut tf = HashMap::with_capacity(self.tokens.len());
        for token in &self.tokens {
            *tf.entry(token.as_str()).or_insert(0) += 1;
        }
        tf
    }

    /// Distinct tokens in sorted order (sorted so float sums over them are reproducible).
    pub fn unique_terms(&self) -> BTreeSet<&str> {
        self.tokens.iter().map(String::as_str).collect()
    }
}
