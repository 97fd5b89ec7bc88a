//! TF-IDF weighting fitted jointly over a small corpus

use crate::processing::text_processor::{TextProcessor, TokenizerKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Options controlling tokenization and term weighting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfidfOptions {
    pub tokenizer: TokenizerKind,
    pub lowercase: bool,
    pub remove_stop_words: bool,
    /// Use `1 + ln(tf)` instead of the raw count
    pub sublinear_tf: bool,
    /// Add one to document frequencies as if an extra document held every term
    pub smooth_idf: bool,
    /// L2-normalize every document vector
    pub normalize: bool,
}

impl Default for TfidfOptions {
    fn default() -> Self {
        Self {
            tokenizer: TokenizerKind::WordPattern,
            lowercase: true,
            remove_stop_words: false,
            sublinear_tf: false,
            smooth_idf: true,
            normalize: true,
        }
    }
}

/// Dense document-term matrix produced by a single fit.
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfMatrix {
    /// Term to column index, in lexicographic order
    pub vocabulary: BTreeMap<String, usize>,
    pub idf: Vec<f32>,
    pub rows: Vec<Vec<f32>>,
}

impl TfidfMatrix {
    pub fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    /// Weight of `term` in document `index`, zero when absent
    pub fn weight(&self, index: usize, term: &str) -> f32 {
        match (self.vocabulary.get(term), self.rows.get(index)) {
            (Some(&col), Some(row)) => row[col],
            _ => 0.0,
        }
    }
}

pub struct TfidfVectorizer {
    options: TfidfOptions,
    processor: TextProcessor,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(TfidfOptions::default())
    }
}

impl TfidfVectorizer {
    pub fn new(options: TfidfOptions) -> Self {
        let processor = TextProcessor::with_options(
            options.tokenizer,
            options.lowercase,
            options.remove_stop_words,
        );
        Self { options, processor }
    }

    pub fn options(&self) -> &TfidfOptions {
        &self.options
    }

    /// Learn the vocabulary and IDF weights from `documents` and return their vectors.
    ///
    /// Every row has the same dimensionality, one column per distinct term seen
    /// anywhere in the corpus. Nothing is retained between calls.
    pub fn fit_transform<S: AsRef<str>>(&self, documents: &[S]) -> TfidfMatrix {
        let term_counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut counts = HashMap::new();
                for token in self.processor.tokenize(doc.as_ref()) {
                    *counts.entry(token).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for counts in &term_counts {
            for term in counts.keys() {
                *document_frequency.entry(term.clone()).or_insert(0) += 1;
            }
        }

        let vocabulary: BTreeMap<String, usize> = document_frequency
            .keys()
            .enumerate()
            .map(|(col, term)| (term.clone(), col))
            .collect();

        let n_docs = documents.len() as f32;
        let idf: Vec<f32> = document_frequency
            .values()
            .map(|&df| self.inverse_document_frequency(n_docs, df as f32))
            .collect();

        let rows = term_counts
            .iter()
            .map(|counts| {
                let mut row = vec![0.0f32; vocabulary.len()];
                for (term, &count) in counts {
                    let col = vocabulary[term];
                    row[col] = self.term_frequency(count) * idf[col];
                }
                if self.options.normalize {
                    l2_normalize(&mut row);
                }
                row
            })
            .collect();

        log::debug!(
            "Fitted TF-IDF over {} documents, {} terms",
            documents.len(),
            vocabulary.len()
        );

        TfidfMatrix {
            vocabulary,
            idf,
            rows,
        }
    }

    fn term_frequency(&self, count: usize) -> f32 {
        if self.options.sublinear_tf {
            1.0 + (count as f32).ln()
        } else {
            count as f32
        }
    }

    // df >= 1 for every vocabulary term, so both forms are >= 1.
    fn inverse_document_frequency(&self, n_docs: f32, df: f32) -> f32 {
        if self.options.smooth_idf {
            ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
        } else {
            (n_docs / df).ln() + 1.0
        }
    }
}

fn l2_normalize(row: &mut [f32]) {
    let norm = row.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        row.iter_mut().for_each(|x| *x /= norm);
    }
}
