//! Relevance ranking of resumes against a job description

use crate::processing::tfidf::{TfidfOptions, TfidfVectorizer};
use serde::{Deserialize, Serialize};

/// A score re-associated with the candidate it belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResume {
    pub name: String,
    pub score: f32,
    /// Position of the candidate in the input sequence
    pub index: usize,
}

/// Scores candidates by TF-IDF cosine similarity to a query.
///
/// Each call fits its own vectorizer over `[query] ++ candidates`, so a
/// `Ranker` can be shared freely and repeated calls are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Ranker {
    options: TfidfOptions,
}

impl Ranker {
    pub fn new(options: TfidfOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &TfidfOptions {
        &self.options
    }

    /// One score in `[0, 1]` per candidate, index-aligned with `candidates`
    pub fn rank<S: AsRef<str>>(&self, query: &str, candidates: &[S]) -> Vec<f32> {
        if candidates.is_empty() {
            return Vec::new();
        }

        let corpus: Vec<&str> = std::iter::once(query)
            .chain(candidates.iter().map(|c| c.as_ref()))
            .collect();

        let matrix = TfidfVectorizer::new(self.options.clone()).fit_transform(&corpus);
        let Some((query_vector, candidate_vectors)) = matrix.rows.split_first() else {
            return vec![0.0; candidates.len()];
        };

        candidate_vectors
            .iter()
            .map(|candidate| cosine_similarity(query_vector, candidate))
            .collect()
    }

    /// Rank named candidates and return them ordered by descending score.
    ///
    /// Ties keep their input order.
    pub fn rank_named<N, S>(&self, query: &str, candidates: &[(N, S)]) -> Vec<RankedResume>
    where
        N: AsRef<str>,
        S: AsRef<str>,
    {
        let texts: Vec<&str> = candidates.iter().map(|(_, text)| text.as_ref()).collect();
        let scores = self.rank(query, &texts);

        let mut ranked: Vec<RankedResume> = candidates
            .iter()
            .zip(scores)
            .enumerate()
            .map(|(index, ((name, _), score))| RankedResume {
                name: name.as_ref().to_string(),
                score,
                index,
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}

/// Rank with default TF-IDF options
pub fn rank<S: AsRef<str>>(query: &str, candidates: &[S]) -> Vec<f32> {
    Ranker::default().rank(query, candidates)
}

/// Cosine similarity of two equal-length, non-negative vectors.
///
/// Zero when either vector has zero norm. Clamped to `[0, 1]` to absorb
/// floating-point overshoot.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        (dot_product / (norm_a * norm_b)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::text_processor::TokenizerKind;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_length_matches_candidates() {
        let scores = rank("rust engineer", &["rust", "go", "", "engineer rust"]);
        assert_eq!(scores.len(), 4);
    }

    #[test]
    fn test_no_candidates() {
        assert!(rank::<&str>("rust engineer", &[]).is_empty());
        assert!(rank::<&str>("", &[]).is_empty());
    }

    #[test]
    fn test_scores_in_unit_interval() {
        let candidates = [
            "python python python",
            "Python developer, MongoDB",
            "",
            "!!!",
            "developer developer developer developer",
            "Ünïcödé dévéloper",
        ];
        for score in rank("python developer with mongodb experience", &candidates) {
            assert!((0.0..=1.0).contains(&score), "score out of range: {}", score);
        }
    }

    #[test]
    fn test_deterministic() {
        let candidates = ["backend rust services", "frontend react", "rust and react"];
        let first = rank("rust backend", &candidates);
        let second = rank("rust backend", &candidates);
        assert_eq!(first, second);
    }

    #[test]
    fn test_self_similarity() {
        let query = "distributed systems engineer";
        let scores = rank(query, &[query]);
        assert!((scores[0] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_all_empty() {
        assert_eq!(rank("", &[""]), vec![0.0]);
        assert_eq!(rank("", &["", ""]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(rank("", &["rust developer", "python"]), vec![0.0, 0.0]);
    }

    #[test]
    fn test_order_preservation() {
        let c1 = "python and mongodb developer";
        let c2 = "java backend engineer";
        let c3 = "python scripting";
        let query = "python developer with mongodb experience";

        let forward = rank(query, &[c1, c2, c3]);
        let swapped = rank(query, &[c3, c2, c1]);

        assert!((forward[0] - swapped[2]).abs() < EPSILON);
        assert!((forward[1] - swapped[1]).abs() < EPSILON);
        assert!((forward[2] - swapped[0]).abs() < EPSILON);
    }

    #[test]
    fn test_disjoint_vocabulary() {
        assert_eq!(rank("alpha beta", &["gamma delta"]), vec![0.0]);
    }

    #[test]
    fn test_end_to_end_ordering() {
        let scores = rank(
            "python developer with mongodb experience",
            &["experienced python and mongodb developer", "java backend engineer"],
        );
        assert!(scores[0] > scores[1]);
        assert_eq!(scores[1], 0.0);
    }

    #[test]
    fn test_rank_named_sorts_descending() {
        let ranker = Ranker::default();
        let ranked = ranker.rank_named(
            "rust systems programming",
            &[
                ("java.pdf", "java enterprise"),
                ("rust.pdf", "rust systems programming"),
                ("mixed.pdf", "rust and java"),
            ],
        );

        let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["rust.pdf", "mixed.pdf", "java.pdf"]);
        assert_eq!(ranked[0].index, 1);
        assert_eq!(ranked[2].index, 0);
    }

    #[test]
    fn test_rank_named_ties_keep_input_order() {
        let ranked = Ranker::default().rank_named("rust", &[("a", "go"), ("b", "java")]);
        assert_eq!(ranked[0].name, "a");
        assert_eq!(ranked[1].name, "b");
    }

    #[test]
    fn test_options_variants_stay_in_range() {
        let ranker = Ranker::new(TfidfOptions {
            tokenizer: TokenizerKind::UnicodeWords,
            sublinear_tf: true,
            smooth_idf: false,
            normalize: false,
            remove_stop_words: true,
            ..TfidfOptions::default()
        });
        let query = "python developer with mongodb experience";
        let scores = ranker.rank(query, &[query, "java backend engineer", ""]);

        assert!((scores[0] - 1.0).abs() < EPSILON);
        assert_eq!(scores[1], 0.0);
        assert_eq!(scores[2], 0.0);
    }

    #[test]
    fn test_concurrent_calls_do_not_interfere() {
        let ranker = Ranker::default();
        let python_query = "python developer with mongodb experience";
        let python_resumes = ["experienced python and mongodb developer", "java backend engineer"];
        let rust_query = "rust systems programming";
        let rust_resumes = ["rust systems programming", "java enterprise", "rust and java"];

        let python_serial = ranker.rank(python_query, &python_resumes);
        let rust_serial = ranker.rank(rust_query, &rust_resumes);

        std::thread::scope(|s| {
            let ranker = &ranker;
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    s.spawn(move || {
                        if i % 2 == 0 {
                            (i, ranker.rank(python_query, &python_resumes))
                        } else {
                            (i, ranker.rank(rust_query, &rust_resumes))
                        }
                    })
                })
                .collect();

            for handle in handles {
                let (i, scores) = handle.join().unwrap();
                if i % 2 == 0 {
                    assert_eq!(scores, python_serial);
                } else {
                    assert_eq!(scores, rust_serial);
                }
            }
        });
    }

    #[test]
    fn test_cosine_zero_norm() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }
}
