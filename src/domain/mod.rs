// ============================================================
// Layer 3 - Domain Layer
// ============================================================
// Plain Rust structs, enums and traits describing the corpus,
// the training examples and the learned vectors.
//
// Rules for this layer:
//   - NO Burn framework types
//   - NO file I/O
//   - Only plain data and the traits other layers implement
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// The raw corpus as loaded from disk
pub mod document;

// One (context window, target id) example
pub mod training_pair;

// Dense V x D matrix produced by the trainer
pub mod embedding;

// Language tag understood by the segmenter
pub mod language;

// Failure classes of a pipeline run
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
