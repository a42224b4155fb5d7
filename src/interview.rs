//! Mock interview transcript and feedback summary

use crate::llm::client::ChatTurn;
use crate::model::Roadmap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// One transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Context phrase woven into interview prompts when a roadmap exists.
pub fn goal_context(roadmap: Option<&Roadmap>) -> String {
    match roadmap {
        Some(roadmap) if !roadmap.overall_goal.is_empty() => {
            format!(" focusing on {}", roadmap.overall_goal)
        }
        _ => String::new(),
    }
}

/// Opening question shown before the first user turn.
pub fn opening_question(roadmap: Option<&Roadmap>) -> String {
    let context = match roadmap {
        Some(roadmap) if !roadmap.overall_goal.is_empty() => {
            format!("focusing on {}", roadmap.overall_goal)
        }
        _ => "covering general tech skills".to_string(),
    };
    format!(
        "Welcome to your interview practice! I'm here to help you prepare for your tech comeback {}. \
         Let's start with a simple question: Tell me about your background and what brought you back to tech.",
        context
    )
}

/// An interview transcript with helpers for the turn loop.
#[derive(Debug, Default)]
pub struct InterviewTranscript {
    messages: Vec<Message>,
}

impl InterviewTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::new(MessageRole::User, content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages
            .push(Message::new(MessageRole::Assistant, content));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn user_turns(&self) -> usize {
        self.messages
            .iter()
            .filter(|m| m.role == MessageRole::User)
            .count()
    }

    /// Map the transcript into service history turns. The assistant role
    /// becomes `model` on the wire.
    pub fn history(&self) -> Vec<ChatTurn> {
        self.messages
            .iter()
            .map(|m| match m.role {
                MessageRole::User => ChatTurn::user(m.content.clone()),
                MessageRole::Assistant => ChatTurn::model(m.content.clone()),
            })
            .collect()
    }
}

/// Format a countdown as MM:SS.
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// One scored area of the feedback report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSection {
    pub title: String,
    pub score: u8,
    pub max_score: u8,
    pub feedback: String,
    pub highlights: Vec<String>,
    pub improvements: Vec<String>,
}

/// End-of-interview feedback summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackSummary {
    pub overall_score: u8,
    pub sections: Vec<FeedbackSection>,
}

impl FeedbackSummary {
    /// The standard practice-session report. Scores are canned coaching
    /// guidance, not a measurement of the transcript.
    pub fn standard() -> Self {
        let sections = vec![
            FeedbackSection {
                title: "Technical Knowledge".to_string(),
                score: 80,
                max_score: 100,
                feedback: "Strong understanding of fundamental concepts with room for growth in advanced topics.".to_string(),
                highlights: vec![
                    "Clear explanations of core concepts".to_string(),
                    "Good problem-solving approach".to_string(),
                    "Real-world examples used effectively".to_string(),
                ],
                improvements: vec![
                    "Deepen knowledge in system design".to_string(),
                    "Practice more complex algorithmic problems".to_string(),
                ],
            },
            FeedbackSection {
                title: "Communication".to_string(),
                score: 85,
                max_score: 100,
                feedback: "Excellent communication skills with clear, structured responses.".to_string(),
                highlights: vec![
                    "Well-organized thoughts".to_string(),
                    "Active listening demonstrated".to_string(),
                    "Professional tone maintained".to_string(),
                ],
                improvements: vec![
                    "Use more technical terminology".to_string(),
                    "Be more concise in some responses".to_string(),
                ],
            },
            FeedbackSection {
                title: "Confidence & Presence".to_string(),
                score: 70,
                max_score: 100,
                feedback: "Good foundation, but showing some nervousness. Practice will help!".to_string(),
                highlights: vec![
                    "Honest about knowledge gaps".to_string(),
                    "Willing to ask clarifying questions".to_string(),
                    "Positive attitude".to_string(),
                ],
                improvements: vec![
                    "Pause before answering to gather thoughts".to_string(),
                    "Maintain steady pace when speaking".to_string(),
                    "Project more confidence in your expertise".to_string(),
                ],
            },
        ];

        let overall_score = (sections.iter().map(|s| s.score as u32).sum::<u32>()
            / sections.len() as u32) as u8;

        Self {
            overall_score,
            sections,
        }
    }
}
