//! Output formatters: console, JSON and Markdown views of analyses and roadmaps

use crate::config::OutputFormat;
use crate::error::Result;
use crate::model::{ResourceLink, Roadmap, SkillAnalysis};
use crate::output::document::HtmlDocument;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering pipeline results in a given format.
pub trait OutputFormatter {
    fn format_analysis(&self, analysis: &SkillAnalysis) -> Result<String>;
    fn format_roadmap(&self, roadmap: &Roadmap) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation-style exports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Coordinates the formatters and dispatches on the requested format.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_document: HtmlDocument,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_list(&self, items: &[String], color: Color) -> String {
        let mut output = String::new();
        for item in items {
            output.push_str(&format!("  • {}\n", self.colorize(item, color)));
        }
        output
    }

    fn demo_notice(&self) -> String {
        format!(
            "{}\n",
            self.colorize(
                "ℹ️  Demo data shown - configure an API key for a personalized result.",
                Color::BrightBlack
            )
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_analysis(&self, analysis: &SkillAnalysis) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 SKILL GAP ANALYSIS", 1));
        if analysis.is_mock() {
            output.push_str(&self.demo_notice());
        }

        output.push_str(&self.format_header("✅ Current Skills", 2));
        output.push_str(&self.format_list(&analysis.current_skills, Color::Green));

        output.push_str(&self.format_header("⏳ Outdated Skills", 2));
        output.push_str(&self.format_list(&analysis.outdated_skills, Color::Yellow));

        output.push_str(&self.format_header("🎯 Skill Gaps", 2));
        output.push_str(&self.format_list(&analysis.skill_gaps, Color::Red));

        output.push_str(&self.format_header("💼 Suggested Roles", 2));
        output.push_str(&self.format_list(&analysis.suggested_roles, Color::Cyan));

        output.push_str(&self.format_header("💪 Strength Areas", 2));
        output.push_str(&self.format_list(&analysis.strength_areas, Color::Green));

        output.push_str(&self.format_header("📈 Improvement Areas", 2));
        output.push_str(&self.format_list(&analysis.improvement_areas, Color::Yellow));

        Ok(output)
    }

    fn format_roadmap(&self, roadmap: &Roadmap) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("🗺️  LEARNING ROADMAP", 1));
        if roadmap.is_mock() {
            output.push_str(&self.demo_notice());
        }

        output.push_str(&format!(
            "Goal: {}\n",
            self.colorize(&roadmap.overall_goal, Color::Cyan)
        ));
        output.push_str(&format!(
            "Estimated effort: {} hours over {} weeks\n",
            roadmap.estimated_hours,
            roadmap.weeks.len()
        ));

        for week in &roadmap.weeks {
            output.push_str(&self.format_header(
                &format!("Week {} - {}", week.week, week.title),
                2,
            ));

            if !week.goals.is_empty() {
                output.push_str(&format!("{}\n", self.colorize("Goals:", Color::Green)));
                output.push_str(&self.format_list(&week.goals, Color::White));
            }
            if !week.topics.is_empty() {
                output.push_str(&format!("{}\n", self.colorize("Topics:", Color::Green)));
                output.push_str(&self.format_list(&week.topics, Color::White));
            }
            if !week.resources.is_empty() {
                output.push_str(&format!("{}\n", self.colorize("Resources:", Color::Magenta)));
                for resource in &week.resources {
                    let link = ResourceLink::parse(resource);
                    output.push_str(&format!(
                        "  • {} {}\n",
                        link.label(),
                        self.colorize(&format!("<{}>", link.href()), Color::BrightBlack)
                    ));
                }
            }
            if !week.projects.is_empty() {
                output.push_str(&format!("{}\n", self.colorize("Projects:", Color::Magenta)));
                output.push_str(&self.format_list(&week.projects, Color::White));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_analysis(&self, analysis: &SkillAnalysis) -> Result<String> {
        self.to_json(analysis)
    }

    fn format_roadmap(&self, roadmap: &Roadmap) -> Result<String> {
        self.to_json(roadmap)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn list_section(output: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        output.push_str(&format!("### {}\n\n", title));
        for item in items {
            output.push_str(&format!("- {}\n", item));
        }
        output.push('\n');
    }

    fn footer(&self, output: &mut String) {
        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Comeback Coach v{} on {}*\n",
                env!("CARGO_PKG_VERSION"),
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_analysis(&self, analysis: &SkillAnalysis) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 Skill Gap Analysis\n\n");
        if analysis.is_mock() {
            output.push_str("> ℹ️ Demo data - configure an API key for a personalized result.\n\n");
        }

        Self::list_section(&mut output, "✅ Current Skills", &analysis.current_skills);
        Self::list_section(&mut output, "⏳ Outdated Skills", &analysis.outdated_skills);
        Self::list_section(&mut output, "🎯 Skill Gaps", &analysis.skill_gaps);
        Self::list_section(&mut output, "💼 Suggested Roles", &analysis.suggested_roles);
        Self::list_section(&mut output, "💪 Strength Areas", &analysis.strength_areas);
        Self::list_section(&mut output, "📈 Improvement Areas", &analysis.improvement_areas);

        self.footer(&mut output);
        Ok(output)
    }

    fn format_roadmap(&self, roadmap: &Roadmap) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 🗺️ Career Comeback Roadmap\n\n");
        if roadmap.is_mock() {
            output.push_str("> ℹ️ Demo data - configure an API key for a personalized result.\n\n");
        }
        output.push_str(&format!("**Goal:** {}\n\n", roadmap.overall_goal));
        output.push_str(&format!(
            "**Estimated effort:** {} hours over {} weeks\n\n",
            roadmap.estimated_hours,
            roadmap.weeks.len()
        ));

        for week in &roadmap.weeks {
            output.push_str(&format!("## Week {} - {}\n\n", week.week, week.title));

            Self::list_section(&mut output, "🎯 Goals", &week.goals);
            Self::list_section(&mut output, "📚 Topics", &week.topics);

            if !week.resources.is_empty() {
                output.push_str("### 🔗 Resources\n\n");
                for resource in &week.resources {
                    let link = ResourceLink::parse(resource);
                    output.push_str(&format!("- [{}]({})\n", link.label(), link.href()));
                }
                output.push('\n');
            }

            Self::list_section(&mut output, "💻 Projects", &week.projects);
        }

        self.footer(&mut output);
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_document: HtmlDocument::new(),
        }
    }

    pub fn generate_analysis(&self, analysis: &SkillAnalysis, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_analysis(analysis),
            OutputFormat::Json => self.json_formatter.format_analysis(analysis),
            OutputFormat::Markdown => self.markdown_formatter.format_analysis(analysis),
            OutputFormat::Html => self.html_document.render_analysis(analysis),
        }
    }

    pub fn generate_roadmap(&self, roadmap: &Roadmap, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_roadmap(roadmap),
            OutputFormat::Json => self.json_formatter.format_roadmap(roadmap),
            OutputFormat::Markdown => self.markdown_formatter.format_roadmap(roadmap),
            OutputFormat::Html => self.html_document.render_roadmap(roadmap),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, base_name: &str) -> String {
    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };
    format!("{}.{}", base_name, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::mock;

    #[test]
    fn test_console_analysis_without_colors() {
        let formatter = ConsoleFormatter::new(false);
        let output = formatter.format_analysis(&mock::skill_analysis()).unwrap();

        assert!(output.contains("SKILL GAP ANALYSIS"));
        assert!(output.contains("TypeScript"));
        assert!(output.contains("Demo data"));
        // No ANSI escapes in plain mode
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_console_roadmap_resolves_resource_links() {
        let formatter = ConsoleFormatter::new(false);
        let output = formatter.format_roadmap(&mock::roadmap()).unwrap();

        assert!(output.contains("Week 1 - Foundation Refresher & Modern Standards"));
        assert!(output.contains("MDN Web Docs <https://developer.mozilla.org>"));
    }

    #[test]
    fn test_json_round_trips() {
        let formatter = JsonFormatter::new(false);
        let json = formatter.format_roadmap(&mock::roadmap()).unwrap();
        let parsed: Roadmap = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, mock::roadmap());
    }

    #[test]
    fn test_markdown_roadmap_links() {
        let formatter = MarkdownFormatter::new(false);
        let output = formatter.format_roadmap(&mock::roadmap()).unwrap();
        assert!(output.contains("[MDN Web Docs](https://developer.mozilla.org)"));
        assert!(output.contains("## Week 2 - TypeScript & Modern React"));
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(suggest_filename(OutputFormat::Html, "roadmap"), "roadmap.html");
        assert_eq!(suggest_filename(OutputFormat::Markdown, "analysis"), "analysis.md");
    }

    #[test]
    fn test_generator_dispatches_all_formats() {
        let generator = ReportGenerator::with_options(false, true, false);
        for format in [
            OutputFormat::Console,
            OutputFormat::Json,
            OutputFormat::Markdown,
            OutputFormat::Html,
        ] {
            assert!(generator.generate_roadmap(&mock::roadmap(), format).is_ok());
            assert!(generator
                .generate_analysis(&mock::skill_analysis(), format)
                .is_ok());
        }
    }
}
