//! Integration tests for session persistence and restoration

use comeback_coach::llm::mock;
use comeback_coach::session::{
    InterviewMode, SessionState, SessionStep, SessionStore, SessionUpdate,
};
use tempfile::TempDir;

fn slot(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("session.json")
}

#[test]
fn test_wizard_walkthrough_persists_every_step() {
    let dir = TempDir::new().unwrap();
    let mut store = SessionStore::open(slot(&dir));

    // Fresh start
    assert_eq!(store.state(), &SessionState::default());

    // Resume submitted
    store
        .set_resume(
            "I am a frontend developer with 5 years experience...".to_string(),
            4,
        )
        .unwrap();
    assert_eq!(store.state().current_step, SessionStep::ResumeInput);
    assert_eq!(store.state().roadmap_weeks, Some(4));
    assert!(store.state().analysis_result.is_none());
    assert!(store.state().roadmap_data.is_none());

    // Analysis runs
    store.start_session(SessionStep::Analyzing).unwrap();
    store
        .update(SessionUpdate {
            analysis_result: Some(mock::skill_analysis()),
            ..Default::default()
        })
        .unwrap();

    // Roadmap lands
    store
        .update(SessionUpdate {
            roadmap_data: Some(mock::roadmap()),
            current_step: Some(SessionStep::Roadmap),
            ..Default::default()
        })
        .unwrap();

    // Interview begins
    store
        .update(SessionUpdate {
            current_step: Some(SessionStep::Interview),
            interview_mode: Some(InterviewMode::Text),
            ..Default::default()
        })
        .unwrap();

    // A process restart restores the whole session
    let restored = SessionStore::open(slot(&dir));
    assert_eq!(restored.state(), store.state());
    assert_eq!(restored.state().current_step, SessionStep::Interview);
    assert_eq!(
        restored.state().analysis_result.as_ref().unwrap(),
        &mock::skill_analysis()
    );
    assert_eq!(
        restored.state().roadmap_data.as_ref().unwrap(),
        &mock::roadmap()
    );
}

#[test]
fn test_new_resume_discards_previous_results() {
    let dir = TempDir::new().unwrap();
    let mut store = SessionStore::open(slot(&dir));

    store.set_resume("old resume".to_string(), 4).unwrap();
    store
        .update(SessionUpdate {
            analysis_result: Some(mock::skill_analysis()),
            roadmap_data: Some(mock::roadmap()),
            interview_mode: Some(InterviewMode::Text),
            ..Default::default()
        })
        .unwrap();

    store.set_resume("new resume".to_string(), 6).unwrap();

    let restored = SessionStore::open(slot(&dir));
    assert_eq!(restored.state().resume_data.as_deref(), Some("new resume"));
    assert_eq!(restored.state().roadmap_weeks, Some(6));
    assert!(restored.state().analysis_result.is_none());
    assert!(restored.state().roadmap_data.is_none());
    assert!(restored.state().interview_mode.is_none());
}

#[test]
fn test_clear_removes_slot_and_restart_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = slot(&dir);
    let mut store = SessionStore::open(path.clone());

    store.set_resume("resume".to_string(), 4).unwrap();
    assert!(path.exists());

    store.clear().unwrap();
    assert!(!path.exists());

    let restored = SessionStore::open(path);
    assert_eq!(restored.state(), &SessionState::default());
    assert!(!restored.has_unfinished_work());
}

#[test]
fn test_restore_from_roadmap_export() {
    let dir = TempDir::new().unwrap();

    // A roadmap exported in a previous session
    let export = dir.path().join("Career_Roadmap.json");
    std::fs::write(&export, serde_json::to_string(&mock::roadmap()).unwrap()).unwrap();

    let mut store = SessionStore::open(slot(&dir));
    store.restore_roadmap(&export).unwrap();

    let state = store.state();
    assert!(state.has_active_session);
    assert_eq!(state.current_step, SessionStep::Interview);
    let roadmap = state.roadmap_data.as_ref().unwrap();
    assert_eq!(roadmap.restored_from.as_deref(), Some("Career_Roadmap.json"));
    assert_eq!(roadmap.weeks.len(), 4);

    // And it survives a restart like everything else
    let restored = SessionStore::open(slot(&dir));
    assert_eq!(restored.state(), store.state());
}

#[test]
fn test_restore_rejects_non_roadmap_files() {
    let dir = TempDir::new().unwrap();
    let export = dir.path().join("notes.json");
    std::fs::write(&export, "just some notes").unwrap();

    let mut store = SessionStore::open(slot(&dir));
    assert!(store.restore_roadmap(&export).is_err());
    assert_eq!(store.state(), &SessionState::default());
}

#[test]
fn test_snapshot_uses_wire_field_names() {
    let dir = TempDir::new().unwrap();
    let mut store = SessionStore::open(slot(&dir));
    store.set_resume("resume".to_string(), 4).unwrap();

    let raw = std::fs::read_to_string(slot(&dir)).unwrap();
    assert!(raw.contains("\"hasActiveSession\""));
    assert!(raw.contains("\"currentStep\""));
    assert!(raw.contains("\"resume-input\""));
    assert!(raw.contains("\"roadmapWeeks\""));
}
