// ============================================================
// Layer 1 - CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `train` and `similar`, and all
// their flags. clap's derive macros supply --help, errors for
// missing values and the string → number conversions.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{builder::RangedU64ValueParser, Args, Subcommand};

use crate::application::train_use_case::TrainConfig;
use crate::domain::language::Language;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train CBoW word vectors on a Tamil text corpus
    Train(TrainArgs),

    /// List the nearest neighbours of a word in a vector file
    Similar(SimilarArgs),
}

/// All arguments for the `train` command.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Corpus file, or a directory of .txt files
    #[arg(long, default_value = "data/corpus.txt")]
    pub corpus: String,

    /// Directory for the vocabulary, config, model record and metrics
    #[arg(long, default_value = "output")]
    pub out_dir: String,

    /// Word-vector file name (relative paths are placed in --out-dir)
    #[arg(long, default_value = "vectors.txt")]
    pub vectors: String,

    /// Corpus language tag: ta or en
    #[arg(long, default_value = "ta")]
    pub lang: Language,

    /// Context words taken on each side of the centre word
    #[arg(long, default_value_t = 2, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub window_size: usize,

    /// Length of each word vector
    #[arg(long, default_value_t = 100, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub embedding_dim: usize,

    /// Train on the first N sentences only
    #[arg(long)]
    pub subset_size: Option<usize>,

    #[arg(long, default_value_t = 64, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub batch_size: usize,

    #[arg(long, default_value_t = 5)]
    pub epochs: usize,

    /// Adam learning rate
    #[arg(long, default_value_t = 1e-2)]
    pub lr: f64,

    /// Share of pairs kept for training; below 1.0 the rest is
    /// held out and scored after every epoch
    #[arg(long, default_value_t = 1.0, value_parser = parse_fraction)]
    pub train_fraction: f64,

    /// Seed for the split, the shuffle and weight init
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// A share in (0, 1].
fn parse_fraction(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("'{s}' is not a number: {e}"))?;
    if value > 0.0 && value <= 1.0 {
        Ok(value)
    } else {
        Err(format!("{value} is outside (0, 1]"))
    }
}

/// The application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            corpus:         a.corpus,
            out_dir:        a.out_dir,
            vectors_file:   a.vectors,
            language:       a.lang,
            window_size:    a.window_size,
            embedding_dim:  a.embedding_dim,
            subset_size:    a.subset_size,
            batch_size:     a.batch_size,
            epochs:         a.epochs,
            learning_rate:  a.lr,
            train_fraction: a.train_fraction,
            seed:           a.seed,
        }
    }
}

/// All arguments for the `similar` command
#[derive(Args, Debug)]
pub struct SimilarArgs {
    /// The word to look up
    #[arg(long)]
    pub word: String,

    /// Vector file written by `train`
    #[arg(long, default_value = "output/vectors.txt")]
    pub vectors: String,

    /// How many neighbours to print
    #[arg(long, default_value_t = 10)]
    pub top_k: usize,
}
