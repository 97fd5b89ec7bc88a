//! Integration tests for the resume ranker

use resume_ranker::input::InputManager;
use resume_ranker::pipeline::{self, SaveOutcome};
use resume_ranker::store::{JsonFileStore, RecordStore};
use resume_ranker::{rank, Ranker, ResumeRankerError};
use std::path::Path;
use tempfile::TempDir;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("MongoDB"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("Python"));
    assert!(text.contains("Node.js"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_loaded_document_keeps_bytes_and_name() {
    let mut manager = InputManager::new().with_cache(false);
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let document = manager.load(path).await.unwrap();
    assert_eq!(document.name, "sample_resume.txt");
    assert_eq!(document.content, std::fs::read(path).unwrap());
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeRankerError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(ResumeRankerError::InvalidInput(_))));
}

#[tokio::test]
async fn test_broken_pdf_is_best_effort() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/broken.pdf");

    let document = manager.load(path).await.unwrap();
    assert!(document.text.trim().is_empty());
    assert!(!document.content.is_empty());

    // An empty resume still gets a score
    let scores = rank("python developer", &[document.text.as_str()]);
    assert_eq!(scores, vec![0.0]);
}

#[tokio::test]
async fn test_rank_and_store_fixtures() {
    let mut manager = InputManager::new();
    let job = manager
        .extract_text(Path::new("tests/fixtures/job_description.txt"))
        .await
        .unwrap();
    let documents = vec![
        manager.load(Path::new("tests/fixtures/java_resume.txt")).await.unwrap(),
        manager.load(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap(),
        manager.load(Path::new("tests/fixtures/broken.pdf")).await.unwrap(),
    ];

    let report = pipeline::rank_documents(&Ranker::default(), &job, &documents, Vec::new()).unwrap();
    assert_eq!(report.results.len(), 3);
    assert_eq!(report.results[0].name, "sample_resume.txt");
    assert!(report.results.iter().all(|r| (0.0..=1.0).contains(&r.score)));

    let temp_dir = TempDir::new().unwrap();
    let store_path = temp_dir.path().join("resumes.json");
    let mut store = JsonFileStore::open(&store_path).unwrap();

    let outcomes = pipeline::store_results(&mut store, &report, &documents).unwrap();
    assert!(outcomes.iter().all(|o| matches!(o, SaveOutcome::Inserted { .. })));

    // Ranking the same files again must not overwrite stored scores
    let second = pipeline::rank_documents(&Ranker::default(), "java engineer", &documents, Vec::new()).unwrap();
    let outcomes = pipeline::store_results(&mut store, &second, &documents).unwrap();
    assert!(outcomes.iter().all(|o| matches!(o, SaveOutcome::Duplicate { .. })));

    let reopened = JsonFileStore::open(&store_path).unwrap();
    let stored = reopened.find_all_sorted_by_score().unwrap();
    assert_eq!(stored.len(), 3);
    assert_eq!(stored[0].name, "sample_resume.txt");
    assert_eq!(stored[0].job_description, job);

    let mut store = reopened;
    assert!(store.delete_by_name("java_resume.txt").unwrap());
    assert_eq!(store.delete_all().unwrap(), 2);
}

#[test]
fn test_ranking_contract_examples() {
    assert_eq!(rank("alpha beta", &["gamma delta"]), vec![0.0]);
    assert_eq!(rank("", &[""]), vec![0.0]);
    assert!(rank::<&str>("anything", &[]).is_empty());

    let scores = rank(
        "python developer with mongodb experience",
        &["experienced python and mongodb developer", "java backend engineer"],
    );
    assert_eq!(scores.len(), 2);
    assert!(scores[0] > scores[1]);
}
