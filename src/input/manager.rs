//! Resume ingestion: turns a file path or pasted text into an analysis payload

use crate::error::{CoachError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use crate::model::ResumePayload;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;
use tokio::fs;

/// A PDF whose extracted text is shorter than this is treated as scanned or
/// image-only and shipped to the model as an inline payload instead.
const MIN_EXTRACTED_CHARS: usize = 40;

/// Where the resume came from.
#[derive(Debug, Clone)]
pub enum ResumeSource {
    File(std::path::PathBuf),
    Inline(String),
}

pub struct InputManager {
    cache: HashMap<String, ResumePayload>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Resolve a resume source into a payload for the analysis pipeline.
    ///
    /// Inline text is checked for the file sentinel and otherwise passed
    /// through. Files are extracted to text where possible; a PDF that
    /// yields no usable text falls back to an inline base64 payload so the
    /// model can read the document directly.
    pub async fn resolve(&mut self, source: &ResumeSource) -> Result<ResumePayload> {
        match source {
            ResumeSource::Inline(text) => {
                if text.trim().is_empty() {
                    return Err(CoachError::InvalidInput(
                        "Resume text is empty".to_string(),
                    ));
                }
                Ok(ResumePayload::from_input(text))
            }
            ResumeSource::File(path) => self.resolve_file(path).await,
        }
    }

    async fn resolve_file(&mut self, path: &Path) -> Result<ResumePayload> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached resume payload for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        if !path.exists() {
            return Err(CoachError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path)?;

        let payload = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                match PdfExtractor.extract(path).await {
                    Ok(text) if text.trim().len() >= MIN_EXTRACTED_CHARS => {
                        ResumePayload::Text(text)
                    }
                    Ok(_) => {
                        warn!(
                            "PDF '{}' yielded no usable text, sending as inline payload",
                            path.display()
                        );
                        self.inline_payload(path, &file_type).await?
                    }
                    Err(e) => {
                        warn!(
                            "PDF extraction failed ({}), sending as inline payload",
                            e
                        );
                        self.inline_payload(path, &file_type).await?
                    }
                }
            }
            FileType::Text => {
                info!("Reading plain text resume: {}", path.display());
                ResumePayload::Text(PlainTextExtractor.extract(path).await?)
            }
            FileType::Markdown => {
                info!("Processing markdown resume: {}", path.display());
                ResumePayload::Text(MarkdownExtractor.extract(path).await?)
            }
            FileType::Unknown => {
                return Err(CoachError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, payload.clone());
        }

        Ok(payload)
    }

    async fn inline_payload(&self, path: &Path, file_type: &FileType) -> Result<ResumePayload> {
        let mime = file_type.mime_type().ok_or_else(|| {
            CoachError::UnsupportedFormat(format!(
                "No mime type for file: {}",
                path.display()
            ))
        })?;
        let bytes = fs::read(path).await?;
        Ok(ResumePayload::File {
            mime: mime.to_string(),
            data: BASE64.encode(bytes),
        })
    }

    fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                CoachError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
