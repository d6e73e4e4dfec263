// ============================================================
// Layer 4 - Corpus Loader
// ============================================================
// Loads the UTF-8 plain-text corpus. The path may be a single
// file or a directory; a directory contributes every `.txt`
// file in it, in file-name order so runs are reproducible.
//
// A missing or unreadable corpus is fatal: there is nothing to
// train on, so the run stops with PipelineError::InputNotFound.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (Reading a File)

use anyhow::{Context, Result};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::document::Document;
use crate::domain::error::PipelineError;
use crate::domain::traits::CorpusSource;

/// Loads corpus text from a file or a directory of `.txt` files.
pub struct TextFileLoader {
    path: PathBuf,
}

impl TextFileLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CorpusSource for TextFileLoader {
    fn load_all(&self) -> Result<Vec<Document>> {
        let meta = fs::metadata(&self.path).map_err(|source| PipelineError::InputNotFound {
            path: self.path.clone(),
            source,
        })?;

        if meta.is_file() {
            return Ok(vec![load_single_text(&self.path)?]);
        }

        let mut files: Vec<PathBuf> = fs::read_dir(&self.path)
            .with_context(|| format!("Cannot read directory '{}'", self.path.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("txt"))
            .collect();
        files.sort();

        let mut docs = Vec::with_capacity(files.len());
        for path in &files {
            let doc = load_single_text(path)?;
            tracing::debug!("Loaded: {} ({} chars)", doc.source, doc.text.chars().count());
            docs.push(doc);
        }

        tracing::info!("Loaded {} corpus file(s) from '{}'", docs.len(), self.path.display());
        Ok(docs)
    }
}

/// Read one UTF-8 file into a Document named after the file.
fn load_single_text(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path).map_err(|source| PipelineError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let source = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown")
        .to_string();

    Ok(Document::new(source, text))
}
