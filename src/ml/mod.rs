// ============================================================
// Layer 5 - ML / Model Layer (Burn)
// ============================================================
// All Burn model and optimiser code lives here; the data layer
// only touches Burn through its Dataset and Batcher traits.
//
//   model.rs   - CBoW network: embedding lookup, mean over the
//                context window, dense layer over the vocabulary
//
//   trainer.rs - epoch loop with Adam, optional validation pass,
//                per-epoch metrics, final model record
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)
//            Mikolov et al. (2013) Efficient Estimation of Word
//            Representations in Vector Space

/// CBoW embedding model
pub mod model;

/// Training loop returning the learned embedding matrix
pub mod trainer;
