// ============================================================
// Layer 3 - Document Domain Type
// ============================================================
// A corpus file loaded from disk: where it came from and its
// full UTF-8 text, before any normalisation.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A raw corpus document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The file name, kept for log messages
    pub source: String,

    /// The full text content before cleaning or segmentation
    pub text: String,
}

impl Document {
    /// Create a new Document with a source name and text content.
    ///
    /// Example:
    ///   let doc = Document::new("ponniyin_selvan.txt", "அத்தியாயம் ஒன்று...");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// True when the document holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
