// ============================================================
// Layer 6 - Word-Vector Store
// ============================================================
// Reads and writes the standard word-vector text format used by
// word2vec-compatible tooling:
//
//   <count> <dim>
//   <token> <f1> <f2> ... <fD>
//   ...
//
// One row per vocabulary token in id order; the padding row
// (id 0) is never written, so count = V - 1. Floats use Rust's
// shortest round-trip formatting, which means parsing a saved
// file gives back exactly the trained values.
//
// Reference: Mikolov et al. (2013), word2vec text output format

use anyhow::{Context, Result};
use std::{
    collections::HashMap,
    fmt::Write as _,
    fs,
    path::Path,
};

use crate::data::vocabulary::Vocabulary;
use crate::domain::embedding::EmbeddingMatrix;
use crate::domain::error::PipelineError;
use crate::domain::traits::Persistable;

/// Tokens and their vectors, in vocabulary id order.
#[derive(Debug, Clone, PartialEq)]
pub struct WordVectors {
    dim:     usize,
    words:   Vec<String>,
    vectors: Vec<Vec<f32>>,
    index:   HashMap<String, usize>,
}

impl WordVectors {
    /// Pair every real vocabulary token with its row of the trained matrix.
    pub fn export(vocab: &Vocabulary, matrix: &EmbeddingMatrix) -> Result<Self, PipelineError> {
        let mut words   = Vec::with_capacity(vocab.len().saturating_sub(1));
        let mut vectors = Vec::with_capacity(words.capacity());

        for (id, token) in vocab.tokens() {
            let row = matrix.row(id).ok_or_else(|| PipelineError::MissingEmbedding {
                id,
                token: token.to_string(),
                rows:  matrix.rows(),
            })?;
            words.push(token.to_string());
            vectors.push(row.to_vec());
        }

        Ok(Self::from_parts(matrix.dim(), words, vectors))
    }

    fn from_parts(dim: usize, words: Vec<String>, vectors: Vec<Vec<f32>>) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), i))
            .collect();
        Self { dim, words, vectors, index }
    }

    /// Number of rows (V - 1)
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    #[cfg(test)]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn vector(&self, word: &str) -> Option<&[f32]> {
        self.index.get(word).map(|&i| self.vectors[i].as_slice())
    }

    /// Render the whole file, header first.
    pub fn to_text(&self) -> String {
        let mut out = format!("{} {}\n", self.len(), self.dim);
        for (word, vector) in self.words.iter().zip(&self.vectors) {
            out.push_str(word);
            for x in vector {
                // Writing to a String cannot fail
                let _ = write!(out, " {x}");
            }
            out.push('\n');
        }
        out
    }

    /// Parse the text format, checking the header against the rows.
    pub fn parse(text: &str) -> Result<Self, PipelineError> {
        let malformed = |line: usize, reason: String| PipelineError::MalformedVectors { line, reason };

        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (_, header) = lines
            .next()
            .ok_or_else(|| malformed(1, "missing header".into()))?;
        let fields: Vec<&str> = header.split_whitespace().collect();
        let [count, dim] = fields.as_slice() else {
            return Err(malformed(1, format!("expected '<count> <dim>', got '{header}'")));
        };
        let count: usize = count
            .parse()
            .map_err(|e| malformed(1, format!("bad count '{count}': {e}")))?;
        let dim: usize = dim
            .parse()
            .map_err(|e| malformed(1, format!("bad dimension '{dim}': {e}")))?;

        let mut words   = Vec::with_capacity(count);
        let mut vectors = Vec::with_capacity(count);

        for (line_no, line) in lines {
            if line.trim().is_empty() {
                continue;
            }
            let mut parts = line.split_whitespace();
            let word = parts
                .next()
                .ok_or_else(|| malformed(line_no, "missing token".into()))?;
            let vector = parts
                .map(|v| {
                    v.parse::<f32>()
                        .map_err(|e| malformed(line_no, format!("bad float '{v}': {e}")))
                })
                .collect::<Result<Vec<f32>, _>>()?;
            if vector.len() != dim {
                return Err(malformed(
                    line_no,
                    format!("expected {dim} components, found {}", vector.len()),
                ));
            }
            words.push(word.to_string());
            vectors.push(vector);
        }

        if words.len() != count {
            return Err(malformed(
                1,
                format!("header declares {count} rows, file has {}", words.len()),
            ));
        }

        Ok(Self::from_parts(dim, words, vectors))
    }

    /// The `k` words closest to `word` by cosine similarity,
    /// most similar first. The query word itself is excluded.
    pub fn nearest(&self, word: &str, k: usize) -> Result<Vec<(String, f32)>, PipelineError> {
        let query = self
            .vector(word)
            .ok_or_else(|| PipelineError::UnknownWord(word.to_string()))?;

        let mut scored: Vec<(String, f32)> = self
            .words
            .iter()
            .zip(&self.vectors)
            .filter(|(w, _)| w.as_str() != word)
            .map(|(w, v)| (w.clone(), cosine(query, v)))
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(k);
        Ok(scored)
    }
}

impl Persistable for WordVectors {
    fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_text())
            .with_context(|| format!("Cannot write vectors to '{}'", path.display()))?;
        tracing::info!(
            "Wrote {} vectors of dimension {} to '{}'",
            self.len(),
            self.dim,
            path.display()
        );
        Ok(())
    }

    fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read vectors from '{}'", path.display()))?;
        Self::parse(&text).with_context(|| format!("In '{}'", path.display()))
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let na = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let nb = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if na == 0.0 || nb == 0.0 {
        0.0
    } else {
        dot / (na * nb)
    }
}
