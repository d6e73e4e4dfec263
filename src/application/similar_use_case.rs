// ============================================================
// Layer 2 - SimilarUseCase
// ============================================================
// Loads an exported word-vector file and lists the words whose
// vectors are closest to a query word. A quick way to eyeball
// embedding quality after a run.

use anyhow::Result;
use std::path::PathBuf;

use crate::data::segmenter::TextSegmenter;
use crate::domain::traits::Persistable;
use crate::infra::vector_store::WordVectors;

pub struct SimilarUseCase {
    vectors:   WordVectors,
    segmenter: TextSegmenter,
}

impl SimilarUseCase {
    pub fn new(vectors_path: impl Into<PathBuf>) -> Result<Self> {
        let path    = vectors_path.into();
        let vectors = WordVectors::load(&path)?;
        if vectors.is_empty() {
            anyhow::bail!("'{}' holds no word vectors", path.display());
        }
        tracing::info!(
            "Loaded {} vectors (dim={}) from '{}'",
            vectors.len(),
            vectors.dim(),
            path.display()
        );
        Ok(Self { vectors, segmenter: TextSegmenter::new() })
    }

    /// Up to `top_k` (word, cosine similarity) pairs, best first.
    /// The query goes through the same NFC + lowercase step as the
    /// corpus tokens did.
    pub fn run(&self, word: &str, top_k: usize) -> Result<Vec<(String, f32)>> {
        let query = self.segmenter.normalize_token(word.trim())?;
        Ok(self.vectors.nearest(&query, top_k)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PipelineError;

    fn write_vectors(dir: &std::path::Path) -> PathBuf {
        let path = dir.join("vectors.txt");
        std::fs::write(&path, "3 2\nராஜா 1 0\nராணி 0.9 0.1\nமரம் 0 1\n").unwrap();
        path
    }

    #[test]
    fn test_lists_closest_words() {
        let dir = tempfile::tempdir().unwrap();
        let uc  = SimilarUseCase::new(write_vectors(dir.path())).unwrap();

        let near = uc.run(" ராஜா ", 1).unwrap();
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].0, "ராணி");
    }

    #[test]
    fn test_query_is_normalised_like_corpus_tokens() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");
        // "கொடி" stored in composed form, queried decomposed
        std::fs::write(&path, "3 2\n\u{0B95}\u{0BCA}\u{0B9F}\u{0BBF} 1 0\nking 0.9 0.1\nமரம் 0 1\n")
            .unwrap();
        let uc = SimilarUseCase::new(&path).unwrap();

        let near = uc.run("\u{0B95}\u{0BC6}\u{0BBE}\u{0B9F}\u{0BBF}", 1).unwrap();
        assert_eq!(near[0].0, "king");

        let near = uc.run("KING", 1).unwrap();
        assert_eq!(near[0].0, "\u{0B95}\u{0BCA}\u{0B9F}\u{0BBF}");
    }

    #[test]
    fn test_empty_vector_file_fails() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("vectors.txt");
        std::fs::write(&path, "0 4\n").unwrap();
        assert!(SimilarUseCase::new(&path).is_err());
    }

    #[test]
    fn test_unknown_word_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let uc  = SimilarUseCase::new(write_vectors(dir.path())).unwrap();

        let err = uc.run("கடல்", 5).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::UnknownWord(_))
        ));
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(SimilarUseCase::new(dir.path().join("none.txt")).is_err());
    }
}
