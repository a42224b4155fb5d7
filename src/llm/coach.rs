//! The analysis/roadmap/interview pipeline
//!
//! One orchestrator sits between the CLI and the generative service. Every
//! entry point resolves to something usable: live results when a credential
//! is present and the call succeeds, canned data otherwise. Only two error
//! kinds escape to the caller: rate limiting and semantic resume rejection.

use crate::config::Config;
use crate::error::{CoachError, Result};
use crate::limiter::{RateLimiter, ANALYSIS_KEY, CHAT_KEY};
use crate::llm::client::{ChatTurn, GeminiClient};
use crate::llm::extract;
use crate::llm::mock;
use crate::llm::prompts::PromptTemplates;
use crate::model::{ResumePayload, Roadmap, SkillAnalysis};
use log::warn;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;

pub struct CareerCoach {
    client: Option<GeminiClient>,
    limiter: RateLimiter,
    templates: PromptTemplates,
    analysis_max: usize,
    chat_max: usize,
    window: Duration,
}

impl CareerCoach {
    /// Build a coach from configuration. Without a resolvable API key, or
    /// with demo mode forced, the coach serves canned data and never touches
    /// the network.
    pub fn new(config: &Config, force_demo: bool) -> Self {
        let client = if force_demo || config.service.demo_mode {
            None
        } else {
            config
                .resolve_api_key()
                .map(|key| GeminiClient::new(config.service.model.clone(), key))
        };

        Self {
            client,
            limiter: RateLimiter::new(),
            templates: PromptTemplates::default(),
            analysis_max: config.limits.analysis_max_requests,
            chat_max: config.limits.chat_max_requests,
            window: Duration::from_secs(config.limits.window_secs),
        }
    }

    pub fn is_demo(&self) -> bool {
        self.client.is_none()
    }

    /// Analyze a resume into a structured skill assessment.
    ///
    /// `on_progress` receives demo narration lines or live stream chunks in
    /// arrival order. Transport and parse failures degrade to canned data;
    /// the errors that surface are rate limiting and the service explicitly
    /// rejecting the input as not-a-resume.
    pub async fn analyze_resume(
        &mut self,
        payload: &ResumePayload,
        on_progress: &mut dyn FnMut(&str),
    ) -> Result<SkillAnalysis> {
        let Some(client) = self.client.as_ref() else {
            return Ok(Self::narrated(mock::ANALYSIS_NARRATION, on_progress, mock::skill_analysis).await);
        };

        if !self
            .limiter
            .is_allowed(ANALYSIS_KEY, self.analysis_max, self.window)
        {
            return Err(CoachError::RateLimited(
                "Too many analysis requests. Please wait a minute and try again.".to_string(),
            ));
        }

        let prompt = self.templates.render_analysis(payload);
        match client
            .stream_generate(&prompt, Some(payload), &[], on_progress)
            .await
        {
            Ok(accumulated) => Self::decode_or_fallback(&accumulated, "analysis", mock::skill_analysis),
            Err(e) => {
                warn!("Resume analysis call failed, using demo data: {}", e);
                // A failed attempt should not eat the user's quota
                self.limiter.reset(ANALYSIS_KEY);
                Ok(mock::skill_analysis())
            }
        }
    }

    /// Generate a learning roadmap from an analysis. Same degradation rules
    /// as `analyze_resume`; counted under the analysis rate-limit key.
    pub async fn generate_roadmap(
        &mut self,
        analysis: &SkillAnalysis,
        weeks: u32,
        on_progress: &mut dyn FnMut(&str),
    ) -> Result<Roadmap> {
        let Some(client) = self.client.as_ref() else {
            return Ok(Self::narrated(mock::ROADMAP_NARRATION, on_progress, mock::roadmap).await);
        };

        if !self
            .limiter
            .is_allowed(ANALYSIS_KEY, self.analysis_max, self.window)
        {
            return Err(CoachError::RateLimited(
                "Too many roadmap requests. Please wait a minute and try again.".to_string(),
            ));
        }

        let prompt = self.templates.render_roadmap(analysis, weeks);
        match client.stream_generate(&prompt, None, &[], on_progress).await {
            Ok(accumulated) => Self::decode_or_fallback(&accumulated, "roadmap", mock::roadmap),
            Err(e) => {
                warn!("Roadmap generation call failed, using demo data: {}", e);
                self.limiter.reset(ANALYSIS_KEY);
                Ok(mock::roadmap())
            }
        }
    }

    /// One interview chat turn. A failed live call substitutes a short
    /// apologetic reply so the conversation keeps going.
    pub async fn interview_turn(
        &mut self,
        goal_context: &str,
        history: &[ChatTurn],
        latest_response: &str,
    ) -> Result<String> {
        let Some(client) = self.client.as_ref() else {
            sleep(mock::NARRATION_DELAY).await;
            return Ok(mock::DEMO_CHAT_REPLY.to_string());
        };

        if !self.limiter.is_allowed(CHAT_KEY, self.chat_max, self.window) {
            return Err(CoachError::RateLimited(
                "You are sending replies too quickly. Take a breath and try again shortly."
                    .to_string(),
            ));
        }

        let prompt = self
            .templates
            .render_interview(goal_context, latest_response);
        match client
            .stream_generate(&prompt, None, history, &mut |_| {})
            .await
        {
            Ok(reply) if !reply.trim().is_empty() => Ok(reply.trim().to_string()),
            Ok(_) => {
                warn!("Interview turn produced an empty reply, substituting fallback");
                Ok(mock::CHAT_FALLBACK.to_string())
            }
            Err(e) => {
                warn!("Interview turn failed, substituting fallback: {}", e);
                self.limiter.reset(CHAT_KEY);
                Ok(mock::CHAT_FALLBACK.to_string())
            }
        }
    }

    /// Emit canned narration with small delays, then the canned result.
    async fn narrated<T>(
        narration: &[&str],
        on_progress: &mut dyn FnMut(&str),
        result: impl FnOnce() -> T,
    ) -> T {
        for line in narration {
            on_progress(line);
            sleep(mock::NARRATION_DELAY).await;
        }
        result()
    }

    /// Decode the structured result out of accumulated stream text.
    ///
    /// An explicit `error` field is a semantic rejection and propagates;
    /// everything else that goes wrong resolves to the fallback.
    fn decode_or_fallback<T: DeserializeOwned>(
        accumulated: &str,
        what: &str,
        fallback: impl FnOnce() -> T,
    ) -> Result<T> {
        let Some(raw) = extract::last_json_object(accumulated) else {
            warn!("No JSON object found in {} stream, using demo data", what);
            return Ok(fallback());
        };

        let value: Value = match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Malformed JSON in {} stream ({}), using demo data", what, e);
                return Ok(fallback());
            }
        };

        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return Err(CoachError::InvalidResume(message.to_string()));
        }

        match serde_json::from_value(value) {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!(
                    "Unexpected {} result shape ({}), using demo data",
                    what, e
                );
                Ok(fallback())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_analysis(stream: &str) -> Result<SkillAnalysis> {
        CareerCoach::decode_or_fallback(stream, "analysis", mock::skill_analysis)
    }

    #[test]
    fn test_decode_picks_last_object_from_narrated_stream() {
        let stream = concat!(
            "Let me assess this. Example shape: {\"currentSkills\": []}\n",
            "Here is the result:\n",
            "{\"currentSkills\": [\"Rust\"], \"skillGaps\": [\"Kubernetes\"]}"
        );
        let analysis = decode_analysis(stream).unwrap();
        assert_eq!(analysis.current_skills, vec!["Rust"]);
        assert_eq!(analysis.skill_gaps, vec!["Kubernetes"]);
        assert!(!analysis.is_mock());
    }

    #[test]
    fn test_decode_empty_stream_falls_back_to_mock() {
        let analysis = decode_analysis("").unwrap();
        assert!(analysis.is_mock());
    }

    #[test]
    fn test_decode_narration_only_falls_back_to_mock() {
        let analysis = decode_analysis("I could not produce structured output, sorry.").unwrap();
        assert!(analysis.is_mock());
    }

    #[test]
    fn test_decode_malformed_json_falls_back_to_mock() {
        let analysis = decode_analysis("{\"currentSkills\": [unquoted]}").unwrap();
        assert!(analysis.is_mock());
    }

    #[test]
    fn test_decode_error_field_surfaces_validation_failure() {
        let stream = r#"{"error": "This looks like a shopping list, not a resume."}"#;
        let err = decode_analysis(stream).unwrap_err();
        match err {
            CoachError::InvalidResume(msg) => {
                assert!(msg.contains("shopping list"));
            }
            other => panic!("expected InvalidResume, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_demo_analysis_streams_narration_then_mock() {
        let config = Config::default();
        let mut coach = CareerCoach::new(&config, true);
        assert!(coach.is_demo());

        let mut seen: Vec<String> = Vec::new();
        let payload = ResumePayload::Text("I am a frontend developer.".to_string());
        let analysis = coach
            .analyze_resume(&payload, &mut |line| seen.push(line.to_string()))
            .await
            .unwrap();

        assert_eq!(
            seen,
            mock::ANALYSIS_NARRATION
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
        );
        assert!(analysis.is_mock());
    }

    #[tokio::test]
    async fn test_demo_roadmap_and_chat() {
        let config = Config::default();
        let mut coach = CareerCoach::new(&config, true);

        let roadmap = coach
            .generate_roadmap(&mock::skill_analysis(), 4, &mut |_| {})
            .await
            .unwrap();
        assert!(roadmap.is_mock());
        assert_eq!(roadmap.weeks.len(), 4);

        let reply = coach.interview_turn("", &[], "Hello").await.unwrap();
        assert_eq!(reply, mock::DEMO_CHAT_REPLY);
    }

    #[tokio::test]
    async fn test_demo_mode_bypasses_rate_limiter() {
        let config = Config::default();
        let mut coach = CareerCoach::new(&config, true);
        let payload = ResumePayload::Text("resume".to_string());

        // Many more calls than the live policy would allow
        for _ in 0..5 {
            assert!(coach.analyze_resume(&payload, &mut |_| {}).await.is_ok());
        }
    }
}
