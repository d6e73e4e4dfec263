// ============================================================
// Layer 3 - Pipeline Errors
// ============================================================
// Every failure is fatal to the run. The application layer
// wraps these in anyhow with file-path context.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    /// The corpus file is missing or cannot be read
    #[error("cannot read corpus '{}': {source}", path.display())]
    InputNotFound {
        path:   PathBuf,
        source: std::io::Error,
    },

    /// No segmenter is bound for the requested language tag
    #[error("unsupported tokenizer language '{0}' (supported: ta, en)")]
    UnsupportedLanguage(String),

    /// The bound word segmenter rejected the text
    #[error("segmentation failed: {0}")]
    Segmentation(String),

    /// Nothing survived normalisation and segmentation
    #[error("corpus produced no training pairs")]
    EmptyCorpus,

    /// A vocabulary id has no row in the trained matrix.
    /// Cannot happen when the matrix was trained on the same vocabulary.
    #[error("vocabulary id {id} ('{token}') has no embedding row (matrix has {rows} rows)")]
    MissingEmbedding {
        id:    u32,
        token: String,
        rows:  usize,
    },

    /// A word-vector file that does not follow the text format
    #[error("malformed vector file at line {line}: {reason}")]
    MalformedVectors {
        line:   usize,
        reason: String,
    },

    /// Similarity lookup for a word that has no vector
    #[error("'{0}' is not in the vocabulary")]
    UnknownWord(String),
}
