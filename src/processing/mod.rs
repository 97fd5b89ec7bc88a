//! Text processing and ranking module

pub mod text_processor;
pub mod tfidf;
pub mod ranker;

pub use ranker::{rank, RankedResume, Ranker};
