// ============================================================
// Layer 6 - Metrics Logger
// ============================================================
// Appends one CSV row per training epoch to metrics.csv.
//
// Columns:
//   - epoch:      epoch number, starting at 1
//   - train_loss: mean cross-entropy over the training batches
//   - val_loss:   mean cross-entropy on the validation pairs
//   - val_acc:    fraction of validation targets ranked first
//
// The validation columns are empty when the run keeps every
// pair for training (train_fraction = 1.0).
//
// Example:
//   epoch,train_loss,val_loss,val_acc
//   1,8.912345,8.700001,0.031250
//   2,7.004512,7.310044,0.062500

use anyhow::Result;
use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::PathBuf,
};
use serde::{Deserialize, Serialize};

const HEADER: &str = "epoch,train_loss,val_loss,val_acc";

/// One row of metrics for a single training epoch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpochMetrics {
    pub epoch:      usize,
    pub train_loss: f64,
    pub val_loss:   Option<f64>,
    pub val_acc:    Option<f64>,
}

impl EpochMetrics {
    pub fn new(
        epoch:      usize,
        train_loss: f64,
        val_loss:   Option<f64>,
        val_acc:    Option<f64>,
    ) -> Self {
        Self { epoch, train_loss, val_loss, val_acc }
    }

    /// One-line progress message for the log
    pub fn summary(&self, total_epochs: usize) -> String {
        let mut line = format!(
            "Epoch {:>3}/{} | train_loss={:.4}",
            self.epoch, total_epochs, self.train_loss
        );
        if let Some(l) = self.val_loss {
            line.push_str(&format!(" | val_loss={l:.4}"));
        }
        if let Some(a) = self.val_acc {
            line.push_str(&format!(" | val_acc={:.1}%", a * 100.0));
        }
        line
    }

    fn csv_row(&self) -> String {
        let opt = |v: Option<f64>| v.map(|x| format!("{x:.6}")).unwrap_or_default();
        format!(
            "{},{:.6},{},{}",
            self.epoch,
            self.train_loss,
            opt(self.val_loss),
            opt(self.val_acc),
        )
    }
}

/// Logs epoch metrics to a CSV file for later analysis.
pub struct MetricsLogger {
    csv_path: PathBuf,
}

impl MetricsLogger {
    /// Create a new MetricsLogger.
    /// Writes the CSV header if the file doesn't exist yet.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let csv_path = dir.join("metrics.csv");

        // Existing files are appended to, so earlier runs stay in the log
        if !csv_path.exists() {
            let mut f = fs::File::create(&csv_path)?;
            writeln!(f, "{HEADER}")?;
            tracing::debug!("Created metrics CSV: '{}'", csv_path.display());
        }

        Ok(Self { csv_path })
    }

    /// Append one epoch's metrics as a new row.
    pub fn log(&self, m: &EpochMetrics) -> Result<()> {
        let mut f = OpenOptions::new()
            .append(true)
            .open(&self.csv_path)?;

        writeln!(f, "{}", m.csv_row())?;
        Ok(())
    }

    /// Where the rows are appended
    pub fn csv_path(&self) -> &PathBuf {
        &self.csv_path
    }
}
