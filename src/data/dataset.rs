use burn::data::dataset::Dataset;

use crate::domain::training_pair::TrainingPair;

/// In-memory Burn dataset over CBoW training pairs.
pub struct PairDataset {
    pairs: Vec<TrainingPair>,
}

impl PairDataset {
    pub fn new(pairs: Vec<TrainingPair>) -> Self { Self { pairs } }

    pub fn pair_count(&self) -> usize { self.pairs.len() }
}

impl Dataset<TrainingPair> for PairDataset {
    fn get(&self, index: usize) -> Option<TrainingPair> {
        self.pairs.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.pairs.len()
    }
}
