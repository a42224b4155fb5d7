//! Prompt templates for the coaching pipeline

use crate::model::{ResumePayload, SkillAnalysis};

/// Prompt templates, kept together so wording changes happen in one place.
#[derive(Debug, Clone)]
pub struct PromptTemplates {
    pub analysis: String,
    pub roadmap: String,
    pub interview: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            analysis: ANALYSIS_TEMPLATE.to_string(),
            roadmap: ROADMAP_TEMPLATE.to_string(),
            interview: INTERVIEW_TEMPLATE.to_string(),
        }
    }
}

impl PromptTemplates {
    /// Render the skill-gap analysis prompt. File payloads travel as inline
    /// attachments, so the prompt only references them.
    pub fn render_analysis(&self, payload: &ResumePayload) -> String {
        let resume = match payload {
            ResumePayload::Text(text) => text.as_str(),
            ResumePayload::File { .. } => "(the resume is provided as an attached document)",
        };
        self.analysis.replace("{resume}", resume)
    }

    /// Render the roadmap generation prompt from an existing analysis.
    pub fn render_roadmap(&self, analysis: &SkillAnalysis, weeks: u32) -> String {
        self.roadmap
            .replace("{weeks}", &weeks.to_string())
            .replace("{current_skills}", &analysis.current_skills.join(", "))
            .replace("{skill_gaps}", &analysis.skill_gaps.join(", "))
            .replace("{suggested_roles}", &analysis.suggested_roles.join(", "))
    }

    /// Render an interview turn prompt. `goal_context` is empty or a phrase
    /// like " focusing on Modern Frontend Developer Career Comeback".
    pub fn render_interview(&self, goal_context: &str, latest_response: &str) -> String {
        self.interview
            .replace("{context}", goal_context)
            .replace("{input}", latest_response)
    }
}

const ANALYSIS_TEMPLATE: &str = r#"You are a career coach specializing in helping experienced professionals return to tech careers after a break.

Analyze the following resume/skills summary and provide a structured assessment:

<RESUME>
{resume}
</RESUME>

Provide your analysis in JSON format with these fields:
- currentSkills: Array of currently relevant skills
- outdatedSkills: Array of skills that need updating
- skillGaps: Array of missing skills for modern tech roles
- suggestedRoles: Array of suitable comeback roles
- strengthAreas: Array of areas where the candidate is strong
- improvementAreas: Array of areas that need work

If the provided text does not resemble a resume or skills summary, respond with {"error": "one short sentence explaining why"} instead.

Return ONLY valid JSON, no additional text."#;

const ROADMAP_TEMPLATE: &str = r#"You are a career coach creating a {weeks}-week comeback roadmap for a professional returning to tech.

Based on this skill analysis:
- Current Skills: {current_skills}
- Skill Gaps: {skill_gaps}
- Suggested Roles: {suggested_roles}

Create a detailed {weeks}-week learning roadmap in JSON format:
{
  "overallGoal": "Brief description of the roadmap goal",
  "estimatedHours": total estimated hours needed,
  "weeks": [
    {
      "week": 1,
      "title": "Week title",
      "goals": ["Goal 1", "Goal 2"],
      "topics": ["Topic to learn"],
      "resources": ["Title|URL entries or resource names"],
      "projects": ["Hands-on project ideas"]
    }
  ]
}

Focus on modern, in-demand technologies. Return ONLY valid JSON."#;

const INTERVIEW_TEMPLATE: &str = r#"You are conducting a mock technical interview for someone returning to tech{context}.

Candidate's latest response: {input}

Provide a thoughtful follow-up question or feedback. Be encouraging but professional. Ask about technical skills, problem-solving, or past experiences. Keep responses concise (2-3 sentences)."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_analysis_embeds_text() {
        let templates = PromptTemplates::default();
        let payload = ResumePayload::Text("Software Engineer with Python experience.".to_string());
        let prompt = templates.render_analysis(&payload);

        assert!(prompt.contains("Software Engineer with Python experience."));
        assert!(prompt.contains("<RESUME>"));
        assert!(prompt.contains("currentSkills"));
        assert!(!prompt.contains("{resume}"));
    }

    #[test]
    fn test_render_analysis_references_attachment() {
        let templates = PromptTemplates::default();
        let payload = ResumePayload::File {
            mime: "application/pdf".to_string(),
            data: "Zm9v".to_string(),
        };
        let prompt = templates.render_analysis(&payload);
        assert!(prompt.contains("attached document"));
        assert!(!prompt.contains("Zm9v"));
    }

    #[test]
    fn test_render_roadmap_substitutes_analysis() {
        let templates = PromptTemplates::default();
        let analysis = SkillAnalysis {
            current_skills: vec!["HTML5".to_string(), "Git".to_string()],
            skill_gaps: vec!["TypeScript".to_string()],
            suggested_roles: vec!["Frontend Developer".to_string()],
            ..Default::default()
        };
        let prompt = templates.render_roadmap(&analysis, 6);

        assert!(prompt.contains("6-week"));
        assert!(prompt.contains("HTML5, Git"));
        assert!(prompt.contains("TypeScript"));
        assert!(prompt.contains("Frontend Developer"));
        assert!(!prompt.contains("{weeks}"));
    }

    #[test]
    fn test_render_interview_with_and_without_context() {
        let templates = PromptTemplates::default();
        let with = templates.render_interview(" focusing on frontend work", "I used jQuery.");
        assert!(with.contains("returning to tech focusing on frontend work"));
        assert!(with.contains("I used jQuery."));

        let without = templates.render_interview("", "I used jQuery.");
        assert!(without.contains("returning to tech."));
    }
}
