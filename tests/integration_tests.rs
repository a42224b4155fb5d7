//! Integration tests for resume ingestion

use comeback_coach::input::{InputManager, ResumeSource};
use comeback_coach::model::ResumePayload;
use std::path::PathBuf;

fn fixture(name: &str) -> ResumeSource {
    ResumeSource::File(PathBuf::from(format!("tests/fixtures/{}", name)))
}

#[tokio::test]
async fn test_payload_from_txt() {
    let mut manager = InputManager::new();

    let payload = manager.resolve(&fixture("sample_resume.txt")).await.unwrap();
    let ResumePayload::Text(text) = payload else {
        panic!("expected extracted text for a .txt resume");
    };

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Frontend Developer"));
    assert!(text.contains("jQuery"));
    assert!(text.contains("Git"));
}

#[tokio::test]
async fn test_payload_from_markdown_strips_formatting() {
    let mut manager = InputManager::new();

    let payload = manager.resolve(&fixture("sample_resume.md")).await.unwrap();
    let ResumePayload::Text(text) = payload else {
        panic!("expected extracted text for a .md resume");
    };

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Basic React"));
    // Markdown syntax is stripped during extraction
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_file_payloads_are_cached() {
    let mut manager = InputManager::new();
    let source = fixture("sample_resume.txt");

    let first = manager.resolve(&source).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.resolve(&source).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_inline_text_is_not_cached() {
    let mut manager = InputManager::new();
    let source = ResumeSource::Inline("I am a frontend developer.".to_string());

    let payload = manager.resolve(&source).await.unwrap();
    assert_eq!(
        payload,
        ResumePayload::Text("I am a frontend developer.".to_string())
    );
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_inline_sentinel_becomes_file_payload() {
    let mut manager = InputManager::new();
    let source = ResumeSource::Inline("[FILE_DATA:application/pdf:JVBERi0xLjQ=]".to_string());

    let payload = manager.resolve(&source).await.unwrap();
    assert_eq!(
        payload,
        ResumePayload::File {
            mime: "application/pdf".to_string(),
            data: "JVBERi0xLjQ=".to_string(),
        }
    );
}

#[tokio::test]
async fn test_empty_inline_text_is_rejected() {
    let mut manager = InputManager::new();
    let source = ResumeSource::Inline("   \n".to_string());
    assert!(manager.resolve(&source).await.is_err());
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let source = fixture("unsupported.xyz");
    assert!(manager.resolve(&source).await.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let source = fixture("nonexistent.txt");
    assert!(manager.resolve(&source).await.is_err());
}
