// ============================================================
// Layer 3 - Core Traits (Abstractions)
// ============================================================
// The seams of the pipeline. The application layer only sees
// these traits, so a different corpus source or a different
// script-specific segmenter can be dropped in without touching
// the rest of the pipeline.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use std::path::Path;

use crate::domain::document::Document;
use crate::domain::error::PipelineError;
use crate::domain::language::Language;

// ─── CorpusSource ─────────────────────────────────────────────────────────────
/// Any component that can load corpus documents.
///
/// Implementations:
///   - TextFileLoader → one UTF-8 plain-text file
pub trait CorpusSource {
    /// Load all available documents from this source.
    fn load_all(&self) -> Result<Vec<Document>>;
}

// ─── Segmenter ────────────────────────────────────────────────────────────────
/// Splits normalised text into sentences of lowercased word tokens.
///
/// Implementations:
///   - TextSegmenter → punctuation sentence rules + tokenizers word splitting
pub trait Segmenter {
    /// Returns sentences in corpus order. Sentences with two or fewer
    /// tokens are dropped. A language the implementation cannot handle
    /// is `PipelineError::UnsupportedLanguage`.
    fn segment(&self, text: &str, lang: Language) -> Result<Vec<Vec<String>>, PipelineError>;
}

// ─── Persistable ──────────────────────────────────────────────────────────────
/// Any component whose state can be saved and restored from disk.
///
/// Implementations:
///   - WordVectors → word-vector text format
///   - Vocabulary  → JSON
pub trait Persistable: Sized {
    /// Save this component's state to the given path
    fn save(&self, path: &Path) -> Result<()>;

    /// Load a component's state from the given path
    fn load(path: &Path) -> Result<Self>;
}
