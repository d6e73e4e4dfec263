// ============================================================
// Layer 1 - CLI / Presentation Layer
// ============================================================
// Parses arguments with clap and routes to Layer 2. Nothing
// here computes; it only converts arguments and prints results.
//
//   1. `train`   - corpus → word vectors
//   2. `similar` - nearest neighbours of a word
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, SimilarArgs, TrainArgs};

#[derive(Parser, Debug)]
#[command(
    name = "tamil-cbow",
    version,
    about = "Train CBoW word embeddings on a Tamil corpus and export word vectors."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args)   => run_train(args),
            Commands::Similar(args) => run_similar(args),
        }
    }
}

fn run_train(args: TrainArgs) -> Result<()> {
    use crate::application::train_use_case::TrainUseCase;

    tracing::info!("Starting training on corpus: {}", args.corpus);

    let report = TrainUseCase::new(args.into()).execute()?;

    println!("Training complete.");
    println!("  sentences : {}", report.sentences);
    println!("  vocabulary: {} (including padding id 0)", report.vocab_size);
    println!("  pairs     : {}", report.pairs);
    println!("  vectors   : {}", report.vectors_path.display());
    Ok(())
}

fn run_similar(args: SimilarArgs) -> Result<()> {
    use crate::application::similar_use_case::SimilarUseCase;

    let use_case = SimilarUseCase::new(&args.vectors)?;
    let nearest  = use_case.run(&args.word, args.top_k)?;

    println!("Nearest to '{}':", args.word);
    for (word, score) in nearest {
        println!("  {score:>7.4}  {word}");
    }
    Ok(())
}
