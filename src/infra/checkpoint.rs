// ============================================================
// Layer 6 - Checkpoint Manager
// ============================================================
// Saves the artifacts of a training run next to the vectors:
//
//   <out_dir>/
//     train_config.json   ← hyperparameters of the run
//     vocab.json          ← tokens in id order
//     cbow_model.mpk.gz   ← final model record (CompactRecorder)
//
// The record holds the output projection as well as the
// embedding table; only the embedding table is exported as
// word vectors. Runs always train from scratch, so nothing here
// resumes an interrupted run.
//
// Reference: Burn Book §5 (Records and Checkpointing)
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use burn::{
    prelude::*,
    record::{CompactRecorder, Recorder},
};
use std::{fs, path::PathBuf};

use crate::application::train_use_case::TrainConfig;
use crate::data::vocabulary::Vocabulary;
use crate::domain::traits::Persistable;
use crate::ml::model::CbowModel;

const CONFIG_FILE: &str = "train_config.json";
const VOCAB_FILE:  &str = "vocab.json";
const MODEL_FILE:  &str = "cbow_model";

/// Manages the files of one training run's output directory.
pub struct CheckpointManager {
    dir: PathBuf,
}

impl CheckpointManager {
    /// Create the manager, creating the directory (like `mkdir -p`).
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// Save the final model weights. The recorder appends `.mpk.gz`.
    pub fn save_model<B: Backend>(&self, model: &CbowModel<B>) -> Result<()> {
        let path = self.dir.join(MODEL_FILE);

        CompactRecorder::new()
            .record(model.clone().into_record(), path.clone())
            .with_context(|| format!("Failed to save model to '{}'", path.display()))?;

        tracing::debug!("Saved model record to '{}.mpk.gz'", path.display());
        Ok(())
    }

    /// Save the training configuration to JSON.
    pub fn save_config(&self, cfg: &TrainConfig) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved training config to '{}'", path.display());
        Ok(())
    }

    pub fn save_vocabulary(&self, vocab: &Vocabulary) -> Result<()> {
        vocab.save(&self.dir.join(VOCAB_FILE))
    }
}

// Read-back of the JSON artifacts; the pipeline itself only writes them.
#[cfg(test)]
impl CheckpointManager {
    pub fn load_config(&self) -> Result<TrainConfig> {
        let path = self.dir.join(CONFIG_FILE);

        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        Ok(serde_json::from_str(&json)?)
    }

    pub fn load_vocabulary(&self) -> Result<Vocabulary> {
        Vocabulary::load(&self.dir.join(VOCAB_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::model::CbowConfig;
    use burn::backend::NdArray;

    #[test]
    fn test_config_round_trip() {
        let dir  = tempfile::tempdir().unwrap();
        let ckpt = CheckpointManager::new(dir.path()).unwrap();

        let cfg = TrainConfig { window_size: 3, epochs: 7, ..TrainConfig::default() };
        ckpt.save_config(&cfg).unwrap();

        let loaded = ckpt.load_config().unwrap();
        assert_eq!(loaded.window_size, 3);
        assert_eq!(loaded.epochs, 7);
    }

    #[test]
    fn test_vocabulary_round_trip() {
        let dir  = tempfile::tempdir().unwrap();
        let ckpt = CheckpointManager::new(dir.path()).unwrap();

        let vocab = Vocabulary::build(&[vec!["அவன்".to_string(), "வந்தான்".to_string()]]);
        ckpt.save_vocabulary(&vocab).unwrap();
        assert_eq!(ckpt.load_vocabulary().unwrap(), vocab);
    }

    #[test]
    fn test_model_record_written() {
        let dir    = tempfile::tempdir().unwrap();
        let ckpt   = CheckpointManager::new(dir.path()).unwrap();
        let device = Default::default();

        let model: CbowModel<NdArray> = CbowConfig::new(6, 3).init(&device);
        ckpt.save_model(&model).unwrap();

        let record = dir.path().join(format!("{MODEL_FILE}.mpk.gz"));
        assert!(record.is_file());
        assert!(std::fs::metadata(&record).unwrap().len() > 0);
    }
}
