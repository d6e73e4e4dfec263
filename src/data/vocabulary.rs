// ============================================================
// Layer 4 - Vocabulary Indexer
// ============================================================
// Maps every distinct token to a positive integer id in the
// order the tokens are first seen in the corpus.
//
//   id 0  → reserved for padding / out-of-vocabulary
//   id 1  → first token of the first sentence
//   id 2  → next token not seen before
//   ...
//
// For a fixed corpus and sentence order the same vocabulary is
// produced every run. Frequency plays no part in the ids.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::Path};

use crate::domain::traits::Persistable;
use crate::domain::training_pair::PAD_ID;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    /// Tokens in id order; index 0 holds id 1
    tokens: Vec<String>,

    #[serde(skip)]
    index: HashMap<String, u32>,
}

impl Vocabulary {
    /// Scan sentences in order and give each new token the next id.
    pub fn build(sentences: &[Vec<String>]) -> Self {
        let mut vocab = Self { tokens: Vec::new(), index: HashMap::new() };
        for token in sentences.iter().flatten() {
            if !vocab.index.contains_key(token) {
                let id = vocab.tokens.len() as u32 + 1;
                vocab.index.insert(token.clone(), id);
                vocab.tokens.push(token.clone());
            }
        }
        vocab
    }

    fn from_tokens(tokens: Vec<String>) -> Self {
        let index = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i as u32 + 1))
            .collect();
        Self { tokens, index }
    }

    /// V: distinct tokens plus the reserved id 0
    pub fn len(&self) -> usize {
        self.tokens.len() + 1
    }

    /// True when no real token has been indexed
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn id(&self, token: &str) -> Option<u32> {
        self.index.get(token).copied()
    }

    /// The token for `id`; None for the padding id and unknown ids
    #[cfg(test)]
    pub fn token(&self, id: u32) -> Option<&str> {
        if id == PAD_ID {
            return None;
        }
        self.tokens.get(id as usize - 1).map(String::as_str)
    }

    /// Real tokens paired with their ids, in id order
    pub fn tokens(&self) -> impl Iterator<Item = (u32, &str)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, t)| (i as u32 + 1, t.as_str()))
    }

    /// Ids for one sentence; unknown tokens become the padding id
    pub fn encode_sentence(&self, sentence: &[String]) -> Vec<u32> {
        sentence
            .iter()
            .map(|t| self.id(t).unwrap_or(PAD_ID))
            .collect()
    }

    /// Parallel id sequences for the whole corpus
    pub fn encode_corpus(&self, sentences: &[Vec<String>]) -> Vec<Vec<u32>> {
        sentences.iter().map(|s| self.encode_sentence(s)).collect()
    }
}

impl Persistable for Vocabulary {
    fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("Cannot write vocabulary to '{}'", path.display()))
    }

    fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Cannot read vocabulary from '{}'", path.display()))?;
        let stored: Vocabulary = serde_json::from_str(&json)?;
        // The lookup index is not serialised; rebuild it from the token list
        Ok(Self::from_tokens(stored.tokens))
    }
}
