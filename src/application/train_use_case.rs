// ============================================================
// Layer 2 - TrainUseCase
// ============================================================
// Orchestrates the full pipeline in order:
//
//   Step 1: Load the corpus             (Layer 4 - data)
//   Step 2: Normalise the text          (Layer 4 - data)
//   Step 3: Segment sentences / words   (Layer 4 - data)
//   Step 4: Keep the sentence subset    (Layer 4 - data)
//   Step 5: Build the vocabulary        (Layer 4 - data)
//   Step 6: Generate context pairs      (Layer 4 - data)
//   Step 7: Split train / validation    (Layer 4 - data)
//   Step 8: Save config + vocabulary    (Layer 6 - infra)
//   Step 9: Train                       (Layer 5 - ml)
//   Step 10: Export word vectors        (Layer 6 - infra)
//
// Reference: Rust Book §13 (Iterators and Closures)
//            Burn Book §5 (Training)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::{
    dataset::PairDataset,
    loader::TextFileLoader,
    normalizer::Normalizer,
    pairs::PairGenerator,
    segmenter::TextSegmenter,
    splitter::split_train_val,
    vocabulary::Vocabulary,
};
use crate::domain::{
    error::PipelineError,
    language::Language,
    traits::{CorpusSource, Persistable, Segmenter},
};
use crate::infra::{
    checkpoint::CheckpointManager,
    metrics::MetricsLogger,
    vector_store::WordVectors,
};
use crate::ml::trainer::run_training;

// ─── Training Configuration ──────────────────────────────────────────────────
// Every constant of a run in one immutable struct. Serialisable
// so it is saved next to the vectors it produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Corpus file, or a directory of .txt files
    pub corpus:         String,
    /// Directory for config, vocabulary, model record and metrics
    pub out_dir:        String,
    /// Word-vector output; relative paths land in out_dir
    pub vectors_file:   String,
    pub language:       Language,
    /// Context radius W; each context holds 2W ids
    pub window_size:    usize,
    pub embedding_dim:  usize,
    /// Keep only the first N sentences (None keeps all)
    pub subset_size:    Option<usize>,
    pub batch_size:     usize,
    pub epochs:         usize,
    pub learning_rate:  f64,
    /// Share of pairs used for training; the rest is validation
    pub train_fraction: f64,
    pub seed:           u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            corpus:         "data/corpus.txt".to_string(),
            out_dir:        "output".to_string(),
            vectors_file:   "vectors.txt".to_string(),
            language:       Language::Tamil,
            window_size:    2,
            embedding_dim:  100,
            subset_size:    None,
            batch_size:     64,
            epochs:         5,
            learning_rate:  1e-2,
            train_fraction: 1.0,
            seed:           42,
        }
    }
}

impl TrainConfig {
    /// Where the word vectors are written
    pub fn vectors_path(&self) -> PathBuf {
        PathBuf::from(&self.out_dir).join(&self.vectors_file)
    }
}

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct TrainReport {
    pub sentences:    usize,
    pub vocab_size:   usize,
    pub pairs:        usize,
    pub vectors_path: PathBuf,
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full pipeline end to end
    pub fn execute(&self) -> Result<TrainReport> {
        let cfg = &self.config;

        // ── Step 1: Load the corpus ───────────────────────────────────────────
        let docs = TextFileLoader::new(&cfg.corpus).load_all()?;

        // ── Steps 2-3: Normalise and segment each document ────────────────────
        let normalizer = Normalizer::new().context("Cannot compile normalisation rules")?;
        let segmenter  = TextSegmenter::new();

        let mut sentences = Vec::new();
        for doc in docs.iter().filter(|d| !d.is_blank()) {
            let clean = normalizer.normalize(&doc.text);
            let found = segmenter.segment(&clean, cfg.language)?;
            tracing::info!("{}: {} sentences", doc.source, found.len());
            sentences.extend(found);
        }

        // ── Step 4: Subset ────────────────────────────────────────────────────
        if let Some(n) = cfg.subset_size {
            sentences.truncate(n);
        }

        // ── Step 5: Vocabulary ────────────────────────────────────────────────
        let vocab = Vocabulary::build(&sentences);
        if vocab.is_empty() {
            return Err(PipelineError::EmptyCorpus.into());
        }
        let ids = vocab.encode_corpus(&sentences);
        tracing::info!(
            "Vocabulary: {} tokens from {} sentences",
            vocab.len() - 1,
            sentences.len()
        );

        // ── Step 6: Context-window pairs ──────────────────────────────────────
        let pairs = PairGenerator::new(cfg.window_size).generate(&ids);
        let pair_count = pairs.len();
        tracing::info!(
            "Generated {} training pairs (context width {})",
            pair_count,
            pairs.width()
        );

        // ── Step 7: Train / validation split ──────────────────────────────────
        let (train, val) = split_train_val(pairs.into_pairs(), cfg.train_fraction, cfg.seed);
        tracing::info!("Split: {} train, {} validation", train.len(), val.len());

        // ── Step 8: Save config and vocabulary ────────────────────────────────
        let ckpt_manager = CheckpointManager::new(&cfg.out_dir)?;
        ckpt_manager.save_config(cfg)?;
        ckpt_manager.save_vocabulary(&vocab)?;
        let metrics = MetricsLogger::new(&cfg.out_dir)?;

        // ── Step 9: Train ─────────────────────────────────────────────────────
        let val_dataset = (!val.is_empty()).then(|| PairDataset::new(val));
        let matrix = run_training(
            cfg,
            vocab.len(),
            PairDataset::new(train),
            val_dataset,
            &ckpt_manager,
            &metrics,
        )?;

        // ── Step 10: Export vectors ───────────────────────────────────────────
        let vectors_path = cfg.vectors_path();
        WordVectors::export(&vocab, &matrix)?.save(&vectors_path)?;

        Ok(TrainReport {
            sentences:  sentences.len(),
            vocab_size: vocab.len(),
            pairs:      pair_count,
            vectors_path,
        })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const NOVEL: &str = "அத்தியாயம் I\n\
        அவன் நேற்று மாலை வீட்டுக்கு வந்தான்.\n\
        அவள், \"நீ ஏன் தாமதமாக வந்தாய்?\" என்று கேட்டாள்.\n\
        அவன் பதில் சொல்லாமல் சிரித்தான்!\n\
        சரி.\n";

    fn config(dir: &std::path::Path, corpus: &std::path::Path) -> TrainConfig {
        TrainConfig {
            corpus:        corpus.to_string_lossy().into_owned(),
            out_dir:       dir.join("out").to_string_lossy().into_owned(),
            embedding_dim: 6,
            batch_size:    8,
            epochs:        1,
            ..TrainConfig::default()
        }
    }

    #[test]
    fn test_pipeline_writes_vectors_for_every_token() {
        let dir    = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("novel.txt");
        fs::write(&corpus, NOVEL).unwrap();

        let cfg    = config(dir.path(), &corpus);
        let report = TrainUseCase::new(cfg.clone()).execute().unwrap();

        let vectors = WordVectors::load(&report.vectors_path).unwrap();
        assert_eq!(vectors.len(), report.vocab_size - 1);
        assert_eq!(vectors.dim(), 6);
        assert!(vectors.vector("அவன்").is_some());
        assert!(vectors.vector("xxpause").is_some());

        let ckpt  = CheckpointManager::new(&cfg.out_dir).unwrap();
        let vocab = ckpt.load_vocabulary().unwrap();
        assert_eq!(vocab.len(), report.vocab_size);
        assert_eq!(vocab.id("அத்தியாயம்"), Some(1));
    }

    #[test]
    fn test_pair_count_equals_token_count() {
        let dir    = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("novel.txt");
        fs::write(&corpus, NOVEL).unwrap();

        let report = TrainUseCase::new(config(dir.path(), &corpus)).execute().unwrap();

        // "என்று கேட்டாள்" and "சரி" are too short to keep
        assert_eq!(report.sentences, 3);
        let normalizer = Normalizer::new().unwrap();
        let sentences  = TextSegmenter::new()
            .segment(&normalizer.normalize(NOVEL), Language::Tamil)
            .unwrap();
        let tokens: usize = sentences.iter().map(Vec::len).sum();
        assert_eq!(report.pairs, tokens);
    }

    #[test]
    fn test_subset_limits_sentences() {
        let dir    = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("novel.txt");
        fs::write(&corpus, NOVEL).unwrap();

        let cfg    = TrainConfig { subset_size: Some(1), ..config(dir.path(), &corpus) };
        let report = TrainUseCase::new(cfg).execute().unwrap();
        assert_eq!(report.sentences, 1);
    }

    #[test]
    fn test_zero_subset_is_empty_corpus() {
        let dir    = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("novel.txt");
        fs::write(&corpus, NOVEL).unwrap();

        let cfg = TrainConfig { subset_size: Some(0), ..config(dir.path(), &corpus) };
        let err = TrainUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::EmptyCorpus)
        ));
    }

    #[test]
    fn test_missing_corpus_fails() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(dir.path(), &dir.path().join("absent.txt"));

        let err = TrainUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::InputNotFound { .. })
        ));
    }

    #[test]
    fn test_corpus_without_sentences_fails() {
        let dir    = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("short.txt");
        fs::write(&corpus, "சரி.\nஆம்.\n").unwrap();

        let err = TrainUseCase::new(config(dir.path(), &corpus)).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::EmptyCorpus)
        ));
    }
}
