use burn::{
    nn::{Embedding, EmbeddingConfig, Linear, LinearConfig},
    prelude::*,
};

use crate::domain::embedding::EmbeddingMatrix;

// NOTE: #[derive(Config)] already generates Clone and Serialize/Deserialize
// internally; do NOT add them again or you get conflicting impls.
#[derive(Config, Debug)]
pub struct CbowConfig {
    pub vocab_size:    usize,
    pub embedding_dim: usize,
}

impl CbowConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> CbowModel<B> {
        let embedding = EmbeddingConfig::new(self.vocab_size, self.embedding_dim).init(device);
        let output    = LinearConfig::new(self.embedding_dim, self.vocab_size).init(device);
        CbowModel { embedding, output }
    }
}

/// Embedding lookup → mean over the context window → dense layer
/// producing one logit per vocabulary id.
#[derive(Module, Debug)]
pub struct CbowModel<B: Backend> {
    pub embedding: Embedding<B>,
    pub output:    Linear<B>,
}

impl<B: Backend> CbowModel<B> {
    /// contexts: [batch, 2W] → logits: [batch, vocab_size]
    pub fn forward(&self, contexts: Tensor<B, 2, Int>) -> Tensor<B, 2> {
        let emb = self.embedding.forward(contexts); // [batch, 2W, dim]

        // Plain average over every slot, padding slots included.
        let pooled = emb.mean_dim(1).squeeze::<2>(1); // [batch, dim]

        self.output.forward(pooled)
    }

    /// Cross-entropy of the logits against the centre ids.
    pub fn forward_loss(
        &self,
        contexts: Tensor<B, 2, Int>,
        targets:  Tensor<B, 1, Int>,
    ) -> (Tensor<B, 1>, Tensor<B, 2>) {
        let logits = self.forward(contexts);
        let ce = burn::nn::loss::CrossEntropyLossConfig::new().init(&logits.device());
        let loss = ce.forward(logits.clone(), targets);
        (loss, logits)
    }

    /// Copy the [vocab_size, dim] embedding weights out of the backend.
    pub fn embedding_matrix(&self) -> anyhow::Result<EmbeddingMatrix> {
        let weights = self.embedding.weight.val();
        let [rows, dim] = weights.dims();
        let values: Vec<f32> = weights
            .into_data()
            .convert::<f32>()
            .to_vec()
            .map_err(|e| anyhow::anyhow!("Cannot read embedding weights: {e:?}"))?;

        EmbeddingMatrix::from_flat(rows, dim, values)
            .ok_or_else(|| anyhow::anyhow!("Embedding weights do not match shape [{rows}, {dim}]"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    #[test]
    fn test_forward_shapes() {
        let device = Default::default();
        let model: CbowModel<NdArray> = CbowConfig::new(7, 4).init(&device);

        let contexts = Tensor::<NdArray, 1, Int>::from_ints([0, 5, 0, 2, 5, 6, 0, 0], &device)
            .reshape([2, 4]);
        let logits = model.forward(contexts);

        assert_eq!(logits.dims(), [2, 7]);
    }

    #[test]
    fn test_loss_is_finite() {
        let device = Default::default();
        let model: CbowModel<NdArray> = CbowConfig::new(7, 4).init(&device);

        let contexts = Tensor::<NdArray, 1, Int>::from_ints([0, 5, 0, 2], &device).reshape([1, 4]);
        let targets  = Tensor::<NdArray, 1, Int>::from_ints([3], &device);
        let (loss, _) = model.forward_loss(contexts, targets);

        let value: f32 = loss.into_scalar().elem();
        assert!(value.is_finite() && value > 0.0);
    }

    #[test]
    fn test_embedding_matrix_shape() {
        let device = Default::default();
        let model: CbowModel<NdArray> = CbowConfig::new(7, 4).init(&device);

        let matrix = model.embedding_matrix().unwrap();
        assert_eq!(matrix.rows(), 7);
        assert_eq!(matrix.dim(), 4);
    }
}
