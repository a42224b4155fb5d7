//! Core data model: skill analyses, roadmaps, and resume payloads

use serde::{Deserialize, Serialize};

/// Provenance tag attached to results that came from canned demo data.
pub const MOCK_SOURCE: &str = "mock";

/// Structured skill assessment produced by the analysis pipeline.
///
/// All lists preserve the insertion order of the source (model output or
/// canned data); no uniqueness is enforced. Field names are camelCase on the
/// wire because that is what the generation prompts ask the model for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SkillAnalysis {
    pub current_skills: Vec<String>,
    pub outdated_skills: Vec<String>,
    pub skill_gaps: Vec<String>,
    pub suggested_roles: Vec<String>,
    pub strength_areas: Vec<String>,
    pub improvement_areas: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SkillAnalysis {
    pub fn is_mock(&self) -> bool {
        self.source.as_deref() == Some(MOCK_SOURCE)
    }
}

/// A multi-week learning roadmap.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Roadmap {
    pub overall_goal: String,
    pub estimated_hours: u32,
    pub weeks: Vec<RoadmapWeek>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restored_from: Option<String>,
}

impl Roadmap {
    pub fn is_mock(&self) -> bool {
        self.source.as_deref() == Some(MOCK_SOURCE)
    }
}

/// One week of a roadmap. `week` is 1-based; contiguity is expected from the
/// generator but deliberately not enforced here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoadmapWeek {
    pub week: u32,
    pub title: String,
    pub goals: Vec<String>,
    pub topics: Vec<String>,
    pub resources: Vec<String>,
    pub projects: Vec<String>,
}

/// A parsed roadmap resource entry.
///
/// Week resources arrive as free text in one of three shapes: `"Title|URL"`,
/// a bare URL (or `www.` host), or plain text that is best served as a web
/// search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLink {
    Labeled { title: String, url: String },
    Bare { url: String },
    Search { query: String },
}

impl ResourceLink {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if let Some((title, url)) = raw.split_once('|') {
            let title = title.trim();
            let url = url.trim();
            if !title.is_empty() && !url.is_empty() {
                return ResourceLink::Labeled {
                    title: title.to_string(),
                    url: Self::normalize_url(url),
                };
            }
        }

        if raw.starts_with("http://") || raw.starts_with("https://") || raw.starts_with("www.") {
            return ResourceLink::Bare {
                url: Self::normalize_url(raw),
            };
        }

        ResourceLink::Search {
            query: raw.to_string(),
        }
    }

    fn normalize_url(url: &str) -> String {
        if url.starts_with("www.") {
            format!("https://{}", url)
        } else {
            url.to_string()
        }
    }

    /// Target to open for this resource.
    pub fn href(&self) -> String {
        match self {
            ResourceLink::Labeled { url, .. } | ResourceLink::Bare { url } => url.clone(),
            ResourceLink::Search { query } => {
                format!(
                    "https://www.google.com/search?q={}",
                    urlencode(query)
                )
            }
        }
    }

    /// Human-readable text for this resource.
    pub fn label(&self) -> &str {
        match self {
            ResourceLink::Labeled { title, .. } => title,
            ResourceLink::Bare { url } => url,
            ResourceLink::Search { query } => query,
        }
    }
}

/// Minimal percent-encoding for search query URLs. Covers the characters a
/// free-text resource title realistically contains.
fn urlencode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Sentinel wrapper used when a binary resume file travels through a plain
/// string channel (the session slot, pasted input). Format:
/// `[FILE_DATA:<mime-type>:<base64-payload>]`.
pub const FILE_DATA_PREFIX: &str = "[FILE_DATA:";
pub const FILE_DATA_SUFFIX: &str = "]";

/// Resume content handed to the analysis pipeline: either extracted text or
/// an inline file payload forwarded to the model as base64.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumePayload {
    Text(String),
    File { mime: String, data: String },
}

impl ResumePayload {
    /// Interpret raw string input, unwrapping the file sentinel when present.
    /// Anything that does not match the sentinel shape is treated as text.
    pub fn from_input(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with(FILE_DATA_PREFIX) && trimmed.ends_with(FILE_DATA_SUFFIX) {
            let inner = &trimmed[FILE_DATA_PREFIX.len()..trimmed.len() - FILE_DATA_SUFFIX.len()];
            if let Some((mime, data)) = inner.split_once(':') {
                if !mime.is_empty() && !data.is_empty() {
                    return ResumePayload::File {
                        mime: mime.to_string(),
                        data: data.to_string(),
                    };
                }
            }
        }
        ResumePayload::Text(raw.to_string())
    }

    /// String form suitable for the session slot: text passes through, file
    /// payloads are wrapped in the sentinel.
    pub fn to_session_string(&self) -> String {
        match self {
            ResumePayload::Text(text) => text.clone(),
            ResumePayload::File { mime, data } => {
                format!("{}{}:{}{}", FILE_DATA_PREFIX, mime, data, FILE_DATA_SUFFIX)
            }
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, ResumePayload::File { .. })
    }
}
