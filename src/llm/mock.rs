//! Canned demo data and degraded-path fallbacks
//!
//! Without a service credential (or with demo mode forced) the pipeline
//! serves these instead of contacting anything. They are also the fallback
//! whenever a live call fails, so the wizard never dead-ends.

use crate::model::{Roadmap, RoadmapWeek, SkillAnalysis, MOCK_SOURCE};
use std::time::Duration;

/// Pacing between narration lines when demo mode simulates streaming.
pub const NARRATION_DELAY: Duration = Duration::from_millis(350);

/// Progress narration emitted while "analyzing" in demo mode.
pub const ANALYSIS_NARRATION: &[&str] = &[
    "Analyzing your skills and experience...",
    "Comparing your background against current market demand...",
    "Identifying transferable strengths...",
];

/// Progress narration emitted while "generating" the roadmap in demo mode.
pub const ROADMAP_NARRATION: &[&str] = &[
    "Creating your personalized roadmap...",
    "Selecting topics and hands-on projects...",
    "Collecting learning resources...",
];

/// Substituted inline when a chat turn fails; the conversation continues.
pub const CHAT_FALLBACK: &str =
    "I apologize, I had trouble processing that. Could you rephrase your response?";

/// Demo-mode interview reply.
pub const DEMO_CHAT_REPLY: &str = "That's great! Can you tell me more about a challenging technical problem you solved in your previous role?";

pub fn skill_analysis() -> SkillAnalysis {
    SkillAnalysis {
        current_skills: vec![
            "JavaScript ES5".to_string(),
            "HTML5".to_string(),
            "CSS3".to_string(),
            "Basic React".to_string(),
            "Git".to_string(),
        ],
        outdated_skills: vec![
            "jQuery".to_string(),
            "Bootstrap 3".to_string(),
            "Float-based layouts".to_string(),
            "AngularJS 1.x".to_string(),
        ],
        skill_gaps: vec![
            "TypeScript".to_string(),
            "Modern React (Hooks, Next.js)".to_string(),
            "Tailwind CSS".to_string(),
            "State Management (Redux/Zustand)".to_string(),
            "CI/CD Basics".to_string(),
        ],
        suggested_roles: vec![
            "Frontend Developer".to_string(),
            "UI Engineer".to_string(),
            "Junior Full Stack Developer".to_string(),
        ],
        strength_areas: vec![
            "Strong understanding of web fundamentals".to_string(),
            "Experience with version control".to_string(),
            "Problem-solving mindset".to_string(),
        ],
        improvement_areas: vec![
            "Modern framework ecosystems".to_string(),
            "Type safety (TypeScript)".to_string(),
            "Responsive design patterns".to_string(),
        ],
        source: Some(MOCK_SOURCE.to_string()),
        error: None,
    }
}

pub fn roadmap() -> Roadmap {
    Roadmap {
        overall_goal: "Modern Frontend Developer Career Comeback".to_string(),
        estimated_hours: 120,
        source: Some(MOCK_SOURCE.to_string()),
        restored_from: None,
        weeks: vec![
            RoadmapWeek {
                week: 1,
                title: "Foundation Refresher & Modern Standards".to_string(),
                goals: vec![
                    "Transition from ES5 to ES6+".to_string(),
                    "Master semantic HTML".to_string(),
                    "Understand modern CSS layouts".to_string(),
                ],
                topics: vec![
                    "Arrow Functions & Destructuring".to_string(),
                    "Flexbox & CSS Grid".to_string(),
                    "Semantic Web".to_string(),
                ],
                resources: vec![
                    "MDN Web Docs|https://developer.mozilla.org".to_string(),
                    "JavaScript.info|https://javascript.info".to_string(),
                    "CSS-Tricks Flexbox Guide|https://css-tricks.com/snippets/css/a-guide-to-flexbox"
                        .to_string(),
                ],
                projects: vec![
                    "Refactor a legacy landing page to semantic HTML & Flexbox".to_string()
                ],
            },
            RoadmapWeek {
                week: 2,
                title: "TypeScript & Modern React".to_string(),
                goals: vec![
                    "Understand Type Safety".to_string(),
                    "Learn Functional Components".to_string(),
                    "Master Hooks".to_string(),
                ],
                topics: vec![
                    "TypeScript Interfaces & Types".to_string(),
                    "React useState & useEffect".to_string(),
                    "Component Lifecycle".to_string(),
                ],
                resources: vec![
                    "TypeScript Official Handbook|https://www.typescriptlang.org/docs/".to_string(),
                    "React.dev|https://react.dev".to_string(),
                ],
                projects: vec!["Build a specialized Todo App with TypeScript and Hooks".to_string()],
            },
            RoadmapWeek {
                week: 3,
                title: "State Management & Styling".to_string(),
                goals: vec![
                    "Manage complex application state".to_string(),
                    "Implement modern styling".to_string(),
                ],
                topics: vec![
                    "Context API vs Redux".to_string(),
                    "Tailwind CSS Fundamentals".to_string(),
                    "Responsive Design".to_string(),
                ],
                resources: vec![
                    "Tailwind CSS Docs|https://tailwindcss.com/docs".to_string(),
                    "Redux Toolkit Quick Start|https://redux-toolkit.js.org/introduction/getting-started"
                        .to_string(),
                ],
                projects: vec!["Create a Weather Dashboard using public API and Tailwind".to_string()],
            },
            RoadmapWeek {
                week: 4,
                title: "Deployments & Professional Practices".to_string(),
                goals: vec![
                    "Learn CI/CD pipelines".to_string(),
                    "Polish portfolio".to_string(),
                    "Mock interviews".to_string(),
                ],
                topics: vec![
                    "Git branching strategies".to_string(),
                    "Vercel/Netlify Deployment".to_string(),
                    "Code Review Etiquette".to_string(),
                ],
                resources: vec![
                    "GitHub Actions Docs|https://docs.github.com/en/actions".to_string(),
                    "Vercel Deployment Guide|https://vercel.com/docs".to_string(),
                ],
                projects: vec!["Deploy your Portfolio and Weather App".to_string()],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_results_are_tagged() {
        assert!(skill_analysis().is_mock());
        assert!(roadmap().is_mock());
    }

    #[test]
    fn test_mock_roadmap_weeks_are_contiguous() {
        let roadmap = roadmap();
        for (i, week) in roadmap.weeks.iter().enumerate() {
            assert_eq!(week.week, i as u32 + 1);
        }
    }
}
