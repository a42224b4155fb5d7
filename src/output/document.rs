//! Printable HTML documents rendered with askama
//!
//! The roadmap export is the document a user prints or shares: one styled
//! page set with a header, a week-by-week grid, and resources resolved into
//! real links.

use crate::error::{CoachError, Result};
use crate::model::{ResourceLink, Roadmap, SkillAnalysis};
use askama::Template;

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Career Comeback Roadmap</title>
    <style>
        @page {
            margin: 20mm;
            size: A4;
        }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
        }
        .header {
            text-align: center;
            border-bottom: 3px solid #0d9488;
            padding-bottom: 16px;
            margin-bottom: 24px;
        }
        .header h1 { margin: 0 0 8px 0; }
        .header .meta { color: #6c757d; }
        .week-container {
            margin-top: 28px;
            page-break-inside: avoid;
        }
        .week-header h2 {
            color: #0d9488;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 8px;
        }
        .grid-container {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
            gap: 16px;
        }
        .section h3 { margin-bottom: 6px; }
        .goals h3, .topics h3 { color: #0d9488; }
        .resources h3, .projects h3 { color: #7e22ce; }
        ul.styled-list { margin: 6px 0; padding-left: 20px; }
        ul.styled-list li { margin: 4px 0; }
        a { color: #7e22ce; }
        .demo-note {
            background: #fef9c3;
            border-left: 4px solid #eab308;
            padding: 10px 14px;
            border-radius: 4px;
            margin-bottom: 18px;
        }
        .footer {
            margin-top: 32px;
            border-top: 1px solid #e9ecef;
            padding-top: 10px;
            font-size: 0.85em;
            color: #6c757d;
        }
    </style>
</head>
<body>
    <div class="header">
        <h1>Career Comeback Roadmap</h1>
        <p class="meta">{{ overall_goal }} · {{ estimated_hours }} hours · {{ week_count }} weeks</p>
    </div>
    {% if is_demo %}
    <div class="demo-note">Demo data shown. Configure an API key for a personalized roadmap.</div>
    {% endif %}
    {{ weeks_html|safe }}
    <div class="footer">Generated by Comeback Coach v{{ version }} on {{ generated_at }}</div>
</body>
</html>"#,
    ext = "html"
)]
struct RoadmapTemplate {
    overall_goal: String,
    estimated_hours: u32,
    week_count: usize,
    is_demo: bool,
    weeks_html: String,
    version: String,
    generated_at: String,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Skill Gap Analysis</title>
    <style>
        @page { margin: 20mm; size: A4; }
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
        }
        h1 { border-bottom: 3px solid #0d9488; padding-bottom: 12px; }
        .section { margin: 18px 0; }
        .section h2 { color: #0d9488; margin-bottom: 6px; }
        ul { margin: 6px 0; padding-left: 20px; }
        .demo-note {
            background: #fef9c3;
            border-left: 4px solid #eab308;
            padding: 10px 14px;
            border-radius: 4px;
        }
        .footer {
            margin-top: 32px;
            border-top: 1px solid #e9ecef;
            padding-top: 10px;
            font-size: 0.85em;
            color: #6c757d;
        }
    </style>
</head>
<body>
    <h1>Skill Gap Analysis</h1>
    {% if is_demo %}
    <div class="demo-note">Demo data shown. Configure an API key for a personalized analysis.</div>
    {% endif %}
    {{ sections_html|safe }}
    <div class="footer">Generated by Comeback Coach v{{ version }} on {{ generated_at }}</div>
</body>
</html>"#,
    ext = "html"
)]
struct AnalysisTemplate {
    is_demo: bool,
    sections_html: String,
    version: String,
    generated_at: String,
}

pub struct HtmlDocument;

impl HtmlDocument {
    pub fn new() -> Self {
        Self
    }

    pub fn render_roadmap(&self, roadmap: &Roadmap) -> Result<String> {
        let weeks_html = roadmap
            .weeks
            .iter()
            .map(Self::week_html)
            .collect::<Vec<_>>()
            .join("\n");

        let template = RoadmapTemplate {
            overall_goal: escape(&roadmap.overall_goal),
            estimated_hours: roadmap.estimated_hours,
            week_count: roadmap.weeks.len(),
            is_demo: roadmap.is_mock(),
            weeks_html,
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
        };

        template
            .render()
            .map_err(|e| CoachError::OutputFormatting(e.to_string()))
    }

    pub fn render_analysis(&self, analysis: &SkillAnalysis) -> Result<String> {
        let sections = [
            ("Current Skills", &analysis.current_skills),
            ("Outdated Skills", &analysis.outdated_skills),
            ("Skill Gaps", &analysis.skill_gaps),
            ("Suggested Roles", &analysis.suggested_roles),
            ("Strength Areas", &analysis.strength_areas),
            ("Improvement Areas", &analysis.improvement_areas),
        ];

        let sections_html = sections
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(title, items)| {
                format!(
                    "<div class=\"section\">\n  <h2>{}</h2>\n  <ul>\n{}\n  </ul>\n</div>",
                    title,
                    items
                        .iter()
                        .map(|item| format!("    <li>{}</li>", escape(item)))
                        .collect::<Vec<_>>()
                        .join("\n")
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        let template = AnalysisTemplate {
            is_demo: analysis.is_mock(),
            sections_html,
            version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
        };

        template
            .render()
            .map_err(|e| CoachError::OutputFormatting(e.to_string()))
    }

    fn week_html(week: &crate::model::RoadmapWeek) -> String {
        let list = |items: &[String]| {
            items
                .iter()
                .map(|item| format!("      <li>{}</li>", escape(item)))
                .collect::<Vec<_>>()
                .join("\n")
        };

        let resources = week
            .resources
            .iter()
            .map(|resource| {
                let link = ResourceLink::parse(resource);
                format!(
                    "      <li><a href=\"{}\">{}</a></li>",
                    escape(&link.href()),
                    escape(link.label())
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"<div class="week-container">
  <div class="week-header"><h2>Week {} | {}</h2></div>
  <div class="grid-container">
    <div class="section goals"><h3>🎯 Goals</h3><ul class="styled-list">
{}
    </ul></div>
    <div class="section topics"><h3>📚 Topics</h3><ul class="styled-list">
{}
    </ul></div>
  </div>
  <div class="grid-container">
    <div class="section resources"><h3>🔗 Resources</h3><ul class="styled-list">
{}
    </ul></div>
    <div class="section projects"><h3>💻 Projects</h3><ul class="styled-list">
{}
    </ul></div>
  </div>
</div>"#,
            week.week,
            escape(&week.title),
            list(&week.goals),
            list(&week.topics),
            resources,
            list(&week.projects),
        )
    }
}

impl Default for HtmlDocument {
    fn default() -> Self {
        Self::new()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
