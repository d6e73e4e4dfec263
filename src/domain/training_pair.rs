// ============================================================
// Layer 3 - TrainingPair Domain Type
// ============================================================
// One CBoW training example: a fixed-width window of
// neighbouring vocabulary ids and the id of the centre token
// the model must predict from them.
//
// Example (window_size = 2, sentence ids [5, 9, 2], position 1):
//   context: [0, 5, 0, 2]
//   target:  9
//
// Id 0 is the padding id. It fills positions that fall outside
// the sentence and the centre position itself.

use serde::{Deserialize, Serialize};

/// Vocabulary id reserved for padding and out-of-vocabulary tokens
pub const PAD_ID: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingPair {
    /// Neighbour ids, always exactly 2 x window_size long
    pub context: Vec<u32>,

    /// The centre token id
    pub target: u32,
}

impl TrainingPair {
    pub fn new(context: Vec<u32>, target: u32) -> Self {
        Self { context, target }
    }
}

