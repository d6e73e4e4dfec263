// ============================================================
// Layer 5 - Training Loop
// ============================================================
// Trains the CBoW model with Burn's DataLoader and Adam, then
// hands back the learned embedding table.
//
//   - Training runs on TrainBackend (Autodiff<NdArray>)
//   - model.valid() gives the same model on ValidBackend (NdArray)
//     for the validation pass, without autodiff bookkeeping
//   - argmax(1) returns [batch, 1], so it is flattened before
//     being compared with the [batch] targets
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use anyhow::Result;
use burn::{
    backend::{ndarray::NdArrayDevice, Autodiff, NdArray},
    data::dataloader::DataLoaderBuilder,
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
};

use crate::application::train_use_case::TrainConfig;
use crate::data::{
    batcher::{PairBatch, PairBatcher},
    dataset::PairDataset,
};
use crate::domain::{embedding::EmbeddingMatrix, error::PipelineError};
use crate::infra::checkpoint::CheckpointManager;
use crate::infra::metrics::{EpochMetrics, MetricsLogger};
use crate::ml::model::{CbowConfig, CbowModel};

type TrainBackend = Autodiff<NdArray>;
type ValidBackend = NdArray;

/// Log a running loss every this many batches
const LOG_EVERY: usize = 100;

pub fn run_training(
    cfg:           &TrainConfig,
    vocab_size:    usize,
    train_dataset: PairDataset,
    val_dataset:   Option<PairDataset>,
    ckpt_manager:  &CheckpointManager,
    metrics:       &MetricsLogger,
) -> Result<EmbeddingMatrix> {
    if train_dataset.pair_count() == 0 {
        return Err(PipelineError::EmptyCorpus.into());
    }

    let device = NdArrayDevice::default();
    TrainBackend::seed(cfg.seed);
    tracing::info!("Training on NdArray CPU backend");

    // ── Build model ───────────────────────────────────────────────────────────
    let model_cfg = CbowConfig::new(vocab_size, cfg.embedding_dim);
    let mut model: CbowModel<TrainBackend> = model_cfg.init(&device);
    tracing::info!(
        "Model ready: vocab_size={}, embedding_dim={}",
        vocab_size,
        cfg.embedding_dim
    );

    // ── Adam optimiser ────────────────────────────────────────────────────────
    let mut optim = AdamConfig::new().with_epsilon(1e-8).init();

    // ── Data loaders ──────────────────────────────────────────────────────────
    let train_loader = DataLoaderBuilder::new(PairBatcher::<TrainBackend>::new(device.clone()))
        .batch_size(cfg.batch_size)
        .shuffle(cfg.seed)
        .num_workers(1)
        .build(train_dataset);

    let val_loader = val_dataset
        .filter(|ds| ds.pair_count() > 0)
        .map(|ds| {
            DataLoaderBuilder::new(PairBatcher::<ValidBackend>::new(device.clone()))
                .batch_size(cfg.batch_size)
                .num_workers(1)
                .build(ds)
        });

    // ── Epoch loop ────────────────────────────────────────────────────────────
    for epoch in 1..=cfg.epochs {
        let mut loss_sum = 0.0f64;
        let mut batches  = 0usize;

        for batch in train_loader.iter() {
            let (loss, _) = model.forward_loss(batch.contexts, batch.targets);

            let loss_val: f64 = loss.clone().into_scalar().elem::<f64>();
            loss_sum += loss_val;
            batches  += 1;

            let grads = loss.backward();
            let grads = GradientsParams::from_grads(grads, &model);
            model = optim.step(cfg.learning_rate, model, grads);

            if batches % LOG_EVERY == 0 {
                tracing::debug!("epoch {} batch {}: loss={:.4}", epoch, batches, loss_val);
            }
        }

        let train_loss = if batches > 0 { loss_sum / batches as f64 } else { f64::NAN };

        let (val_loss, val_acc) = match &val_loader {
            Some(loader) => {
                let (l, a) = evaluate(&model.valid(), loader.iter());
                (Some(l), Some(a))
            }
            None => (None, None),
        };

        let row = EpochMetrics::new(epoch, train_loss, val_loss, val_acc);
        tracing::info!("{}", row.summary(cfg.epochs));
        metrics.log(&row)?;
    }

    ckpt_manager.save_model(&model)?;
    tracing::info!("Training complete; metrics in '{}'", metrics.csv_path().display());

    model.embedding_matrix()
}

/// Mean cross-entropy and top-1 accuracy over every validation batch.
fn evaluate<I>(model: &CbowModel<ValidBackend>, batches: I) -> (f64, f64)
where
    I: Iterator<Item = PairBatch<ValidBackend>>,
{
    let mut loss_sum  = 0.0f64;
    let mut n_batches = 0usize;
    let mut correct   = 0usize;
    let mut total     = 0usize;

    for batch in batches {
        let (loss, logits) = model.forward_loss(batch.contexts, batch.targets.clone());
        loss_sum  += loss.into_scalar().elem::<f64>();
        n_batches += 1;

        total += batch.targets.dims()[0];
        let predicted = logits.argmax(1).flatten::<1>(0, 1);
        let hits: i64 = predicted
            .equal(batch.targets)
            .int()
            .sum()
            .into_scalar()
            .elem::<i64>();
        correct += hits as usize;
    }

    let loss = if n_batches > 0 { loss_sum / n_batches as f64 } else { f64::NAN };
    let acc  = if total > 0 { correct as f64 / total as f64 } else { 0.0 };
    (loss, acc)
}
