//! File type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    /// Mime type used when the file travels to the service as an inline
    /// payload.
    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            FileType::Pdf => Some("application/pdf"),
            FileType::Text => Some("text/plain"),
            FileType::Markdown => Some("text/markdown"),
            FileType::Unknown => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(FileType::from_extension("PDF"), FileType::Pdf);
        assert_eq!(FileType::from_extension("markdown"), FileType::Markdown);
        assert_eq!(FileType::from_extension("docx"), FileType::Unknown);
    }

    #[test]
    fn test_mime_types() {
        assert_eq!(FileType::Pdf.mime_type(), Some("application/pdf"));
        assert_eq!(FileType::Unknown.mime_type(), None);
    }
}
