//! Session state and its merge semantics

use crate::model::{Roadmap, SkillAnalysis};
use serde::{Deserialize, Serialize};

/// Wizard step the session is currently at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStep {
    #[default]
    Idle,
    ResumeInput,
    Analyzing,
    Roadmap,
    Interview,
}

impl std::fmt::Display for SessionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SessionStep::Idle => "idle",
            SessionStep::ResumeInput => "resume-input",
            SessionStep::Analyzing => "analyzing",
            SessionStep::Roadmap => "roadmap",
            SessionStep::Interview => "interview",
        };
        f.write_str(label)
    }
}

/// Interview channel. Voice is carried for session fidelity; this CLI only
/// drives text interviews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterviewMode {
    Voice,
    Text,
}

/// The full wizard state, mirrored to the storage slot on every mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    pub has_active_session: bool,
    pub current_step: SessionStep,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roadmap_weeks: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_result: Option<SkillAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roadmap_data: Option<Roadmap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_mode: Option<InterviewMode>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            has_active_session: false,
            current_step: SessionStep::Idle,
            resume_data: None,
            roadmap_weeks: None,
            analysis_result: None,
            roadmap_data: None,
            interview_mode: None,
        }
    }
}

/// A partial state change; `None` fields are left untouched by `apply`.
#[derive(Debug, Clone, Default)]
pub struct SessionUpdate {
    pub has_active_session: Option<bool>,
    pub current_step: Option<SessionStep>,
    pub resume_data: Option<String>,
    pub roadmap_weeks: Option<u32>,
    pub analysis_result: Option<SkillAnalysis>,
    pub roadmap_data: Option<Roadmap>,
    pub interview_mode: Option<InterviewMode>,
}

impl SessionState {
    /// Merge a partial update into the state.
    pub fn apply(&mut self, update: SessionUpdate) {
        if let Some(active) = update.has_active_session {
            self.has_active_session = active;
        }
        if let Some(step) = update.current_step {
            self.current_step = step;
        }
        if let Some(resume) = update.resume_data {
            self.resume_data = Some(resume);
        }
        if let Some(weeks) = update.roadmap_weeks {
            self.roadmap_weeks = Some(weeks);
        }
        if let Some(analysis) = update.analysis_result {
            self.analysis_result = Some(analysis);
        }
        if let Some(roadmap) = update.roadmap_data {
            self.roadmap_data = Some(roadmap);
        }
        if let Some(mode) = update.interview_mode {
            self.interview_mode = Some(mode);
        }
    }

    /// Mark the session active at the given step.
    pub fn start(&mut self, step: SessionStep) {
        self.has_active_session = true;
        self.current_step = step;
    }

    /// Begin a fresh run from a new resume: keeps only the new inputs and
    /// explicitly clears any earlier analysis, roadmap and interview choice.
    pub fn set_resume(&mut self, resume_data: String, roadmap_weeks: u32) {
        *self = SessionState {
            has_active_session: true,
            current_step: SessionStep::ResumeInput,
            resume_data: Some(resume_data),
            roadmap_weeks: Some(roadmap_weeks),
            analysis_result: None,
            roadmap_data: None,
            interview_mode: None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_merges_independent_fields() {
        let mut state = SessionState::default();
        state.apply(SessionUpdate {
            resume_data: Some("resume text".to_string()),
            ..Default::default()
        });
        state.apply(SessionUpdate {
            roadmap_weeks: Some(6),
            ..Default::default()
        });

        assert_eq!(state.resume_data.as_deref(), Some("resume text"));
        assert_eq!(state.roadmap_weeks, Some(6));
    }

    #[test]
    fn test_set_resume_replaces_state() {
        let mut state = SessionState::default();
        state.start(SessionStep::Roadmap);
        state.apply(SessionUpdate {
            analysis_result: Some(SkillAnalysis::default()),
            roadmap_data: Some(crate::model::Roadmap::default()),
            interview_mode: Some(InterviewMode::Text),
            ..Default::default()
        });

        state.set_resume(
            "I am a frontend developer with 5 years experience...".to_string(),
            4,
        );

        assert!(state.has_active_session);
        assert_eq!(state.current_step, SessionStep::ResumeInput);
        assert_eq!(
            state.resume_data.as_deref(),
            Some("I am a frontend developer with 5 years experience...")
        );
        assert_eq!(state.roadmap_weeks, Some(4));
        assert!(state.analysis_result.is_none());
        assert!(state.roadmap_data.is_none());
        assert!(state.interview_mode.is_none());
    }

    #[test]
    fn test_step_serializes_kebab_case() {
        let json = serde_json::to_string(&SessionStep::ResumeInput).unwrap();
        assert_eq!(json, "\"resume-input\"");
        let step: SessionStep = serde_json::from_str("\"analyzing\"").unwrap();
        assert_eq!(step, SessionStep::Analyzing);
    }
}
