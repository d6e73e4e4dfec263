// ============================================================
// Layer 4 - Data Pipeline
// ============================================================
// Everything from the corpus file to tensor batches:
//
//   corpus .txt
//       │
//       ▼
//   TextFileLoader    → reads UTF-8 text
//       │
//       ▼
//   Normalizer        → punctuation, quotes, digits, numerals
//       │
//       ▼
//   TextSegmenter  → sentences of lowercased word tokens
//       │
//       ▼
//   Vocabulary        → first-seen token ids, 0 reserved
//       │
//       ▼
//   PairGenerator     → (context[2W], target) pairs
//       │
//       ▼
//   PairDataset       → Burn Dataset
//       │
//       ▼
//   PairBatcher       → tensor batches for the trainer
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Loads the plain-text corpus
pub mod loader;

/// Rewrites raw text with the normalisation rules
pub mod normalizer;

/// Splits text into sentences and word tokens
pub mod segmenter;

/// Token → id indexing in first-seen order
pub mod vocabulary;

/// Sliding context windows around each token
pub mod pairs;

/// Seeded train/validation split
pub mod splitter;

/// Burn Dataset over training pairs
pub mod dataset;

/// Burn Batcher producing context/target tensors
pub mod batcher;
