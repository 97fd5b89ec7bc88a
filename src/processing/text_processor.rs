//! Text normalization and tokenization

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// How raw text is split into terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenizerKind {
    /// Runs of two or more word characters (`\b\w\w+\b`)
    #[default]
    WordPattern,
    /// Unicode word boundaries, dropping single-character words
    UnicodeWords,
}

pub struct TextProcessor {
    kind: TokenizerKind,
    lowercase: bool,
    stop_words: Option<HashSet<&'static str>>,
    word_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        Self::with_options(TokenizerKind::default(), true, false)
    }

    pub fn with_options(kind: TokenizerKind, lowercase: bool, remove_stop_words: bool) -> Self {
        let word_regex = Regex::new(r"\b\w\w+\b").expect("Invalid word regex");

        Self {
            kind,
            lowercase,
            stop_words: remove_stop_words.then(Self::create_stop_words),
            word_regex,
        }
    }

    /// Split text into normalized terms, in document order
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let normalized = self.normalize_unicode(text);
        let normalized = if self.lowercase {
            normalized.to_lowercase()
        } else {
            normalized
        };

        let raw: Vec<&str> = match self.kind {
            TokenizerKind::WordPattern => self
                .word_regex
                .find_iter(&normalized)
                .map(|m| m.as_str())
                .collect(),
            TokenizerKind::UnicodeWords => normalized
                .unicode_words()
                .filter(|w| w.chars().count() > 1)
                .collect(),
        };

        raw.into_iter()
            .filter(|token| !self.is_stop_word(token))
            .map(str::to_string)
            .collect()
    }

    fn is_stop_word(&self, token: &str) -> bool {
        match &self.stop_words {
            Some(words) => words.contains(token.to_lowercase().as_str()),
            None => false,
        }
    }

    /// Normalize Unicode punctuation to ASCII equivalents
    pub fn normalize_unicode(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '\u{2018}' | '\u{2019}' => '\'',
                '\u{201C}' | '\u{201D}' => '"',
                '\u{2013}' | '\u{2014}' => '-',
                '\u{2026}' => '.',
                '\u{00A0}' => ' ',
                _ => c,
            })
            .collect()
    }

    fn create_stop_words() -> HashSet<&'static str> {
        [
            "a", "about", "above", "after", "again", "against", "all", "also", "am", "an",
            "and", "any", "are", "as", "at", "be", "because", "been", "before", "being",
            "below", "between", "both", "but", "by", "can", "could", "did", "do", "does",
            "doing", "down", "during", "each", "few", "for", "from", "further", "had", "has",
            "have", "having", "he", "her", "here", "hers", "him", "his", "how", "i", "if",
            "in", "into", "is", "it", "its", "itself", "just", "me", "more", "most", "my",
            "no", "nor", "not", "now", "of", "off", "on", "once", "only", "or", "other",
            "our", "ours", "out", "over", "own", "same", "she", "should", "so", "some",
            "such", "than", "that", "the", "their", "theirs", "them", "then", "there",
            "these", "they", "this", "those", "through", "to", "too", "under", "until",
            "up", "very", "was", "we", "were", "what", "when", "where", "which", "while",
            "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
        ]
        .into_iter()
        .collect()
    }
}
