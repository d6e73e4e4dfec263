// ============================================================
// Layer 6 - Infrastructure Layer
// ============================================================
// Everything that writes to or reads from the output directory:
//
//   checkpoint.rs   - run artifacts: train_config.json,
//                     vocab.json and the final model record
//                     (Burn CompactRecorder)
//
//   vector_store.rs - word-vector text format: export from the
//                     trained matrix, save, load, and cosine
//                     nearest-neighbour lookup
//
//   metrics.rs      - per-epoch loss/accuracy rows in metrics.csv
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)
//            Burn Book §5 (Checkpointing)

/// Training artifacts in the output directory
pub mod checkpoint;

/// Word-vector file export and lookup
pub mod vector_store;

/// Training metrics CSV logger
pub mod metrics;
