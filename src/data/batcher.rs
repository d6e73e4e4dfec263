// ============================================================
// Layer 4 - Pair Batcher
// ============================================================
// Implements Burn's Batcher trait to stack a Vec<TrainingPair>
// into tensors for one forward pass.
//
//   Input:  N pairs, each with a context of width 2W
//   Output: contexts [N, 2W] and targets [N]
//
// Every context already has the same width, so the batcher only
// flattens and reshapes; no padding happens here.
//
// Reference: Burn Book §4 (Batcher)

use burn::{
    data::dataloader::batcher::Batcher,
    prelude::*,
};

use crate::domain::training_pair::TrainingPair;

// ─── PairBatch ────────────────────────────────────────────────────────────────
/// A batch of CBoW pairs on backend B.
#[derive(Debug, Clone)]
pub struct PairBatch<B: Backend> {
    /// Context ids, shape [batch_size, 2W]
    pub contexts: Tensor<B, 2, Int>,

    /// Centre token ids, shape [batch_size]
    pub targets: Tensor<B, 1, Int>,
}

// ─── PairBatcher ──────────────────────────────────────────────────────────────
#[derive(Clone, Debug)]
pub struct PairBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> PairBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }
}

impl<B: Backend> Batcher<TrainingPair, PairBatch<B>> for PairBatcher<B> {
    fn batch(&self, items: Vec<TrainingPair>) -> PairBatch<B> {
        let batch_size = items.len();
        let width      = items.first().map_or(0, |p| p.context.len());

        // Burn Int tensors are built from i32 here
        let context_flat: Vec<i32> = items
            .iter()
            .flat_map(|p| p.context.iter().map(|&id| id as i32))
            .collect();

        let targets: Vec<i32> = items
            .iter()
            .map(|p| p.target as i32)
            .collect();

        let contexts = Tensor::<B, 1, Int>::from_ints(
            context_flat.as_slice(), &self.device
        ).reshape([batch_size, width]);

        let targets = Tensor::<B, 1, Int>::from_ints(
            targets.as_slice(), &self.device
        );

        PairBatch { contexts, targets }
    }
}
