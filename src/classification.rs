//! The classification result handed back to callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::format::{Category, FileFormat};

/// Label reported when no signature matches.
pub const UNKNOWN_LABEL: &str = "unknown";

/// MIME type reported when no signature matches.
pub const UNKNOWN_MIME: &str = "application/octet-stream";

/// Outcome of classifying a byte buffer.
///
/// Produced fresh per call and cheap to copy. An unmatched buffer is a
/// valid outcome, not an error: accessors fall back to the `unknown`
/// sentinels instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    format: Option<FileFormat>,
}

impl Classification {
    pub(crate) fn new(format: Option<FileFormat>) -> Self {
        Self { format }
    }

    /// The detected format, if any rule matched.
    pub fn format(&self) -> Option<FileFormat> {
        self.format
    }

    /// Whether any signature rule matched.
    pub fn is_matched(&self) -> bool {
        self.format.is_some()
    }

    /// Display label of the detected format, or [`UNKNOWN_LABEL`].
    pub fn label(&self) -> &'static str {
        self.format.map_or(UNKNOWN_LABEL, |format| format.label())
    }

    /// MIME type of the detected format, or [`UNKNOWN_MIME`].
    pub fn mime_type(&self) -> &'static str {
        self.format.map_or(UNKNOWN_MIME, |format| format.mime_type())
    }

    /// Category of the detected format, `None` when nothing matched.
    pub fn category(&self) -> Option<Category> {
        self.format.map(|format| format.category())
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_classification() {
        let result = Classification::new(None);
        assert!(!result.is_matched());
        assert_eq!(result.format(), None);
        assert_eq!(result.label(), UNKNOWN_LABEL);
        assert_eq!(result.mime_type(), UNKNOWN_MIME);
        assert_eq!(result.category(), None);
    }

    #[test]
    fn test_matched_classification() {
        let result = Classification::new(Some(FileFormat::Png));
        assert!(result.is_matched());
        assert_eq!(result.format(), Some(FileFormat::Png));
        assert_eq!(result.label(), "PNG");
        assert_eq!(result.mime_type(), "image/png");
        assert_eq!(result.category(), Some(Category::Image));
    }

    #[test]
    fn test_display_renders_label() {
        assert_eq!(Classification::new(Some(FileFormat::Pdf)).to_string(), "PDF");
        assert_eq!(Classification::new(None).to_string(), "unknown");
    }
}
