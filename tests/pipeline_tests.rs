//! Integration tests for the demo-mode analysis pipeline
//!
//! Live-service behavior is covered by unit tests on extraction and request
//! payload construction; these tests exercise the full degraded path the
//! wizard takes when no credential is configured.

use comeback_coach::config::Config;
use comeback_coach::llm::{mock, CareerCoach};
use comeback_coach::model::ResumePayload;

fn demo_config() -> Config {
    let mut config = Config::default();
    config.service.api_key = None;
    config.service.demo_mode = true;
    config
}

#[tokio::test]
async fn test_full_demo_walkthrough() {
    let config = demo_config();
    let mut coach = CareerCoach::new(&config, false);
    assert!(coach.is_demo());

    // Analysis narrates, then yields tagged demo data
    let mut narration = Vec::new();
    let payload = ResumePayload::Text("I am a frontend developer.".to_string());
    let analysis = coach
        .analyze_resume(&payload, &mut |line| narration.push(line.to_string()))
        .await
        .unwrap();

    assert!(analysis.is_mock());
    assert!(!analysis.current_skills.is_empty());
    assert_eq!(narration.len(), mock::ANALYSIS_NARRATION.len());
    assert_eq!(narration[0], mock::ANALYSIS_NARRATION[0]);

    // Roadmap generation follows the same contract
    let mut narration = Vec::new();
    let roadmap = coach
        .generate_roadmap(&analysis, 4, &mut |line| narration.push(line.to_string()))
        .await
        .unwrap();

    assert!(roadmap.is_mock());
    assert_eq!(roadmap.weeks.len(), 4);
    assert!(roadmap.estimated_hours > 0);
    assert_eq!(narration, mock::ROADMAP_NARRATION);

    // Interview turns keep the conversation going with the canned reply
    let reply = coach
        .interview_turn("", &[], "Tell me about your background")
        .await
        .unwrap();
    assert_eq!(reply, mock::DEMO_CHAT_REPLY);
}

#[tokio::test]
async fn test_demo_mode_forced_even_with_key_configured() {
    let mut config = demo_config();
    config.service.api_key = Some("key-that-must-not-be-used".to_string());
    config.service.demo_mode = true;

    let coach = CareerCoach::new(&config, false);
    assert!(coach.is_demo());
}

#[tokio::test]
async fn test_file_payload_accepted_in_demo_mode() {
    let config = demo_config();
    let mut coach = CareerCoach::new(&config, false);

    let payload = ResumePayload::File {
        mime: "application/pdf".to_string(),
        data: "JVBERi0xLjQ=".to_string(),
    };
    let analysis = coach.analyze_resume(&payload, &mut |_| {}).await.unwrap();
    assert!(analysis.is_mock());
}
