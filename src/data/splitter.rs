// ============================================================
// Layer 4 - Train/Validation Splitter
// ============================================================
// Shuffles training pairs and splits them into two sets:
//   - Training set:   used to update the embedding weights
//   - Validation set: used to report loss and accuracy on
//                     pairs the optimiser never stepped on
//
// The shuffle is seeded so a run can be repeated exactly.
// A train_fraction of 1.0 keeps every pair for training; a
// fraction small enough to round down to zero still keeps one.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Shuffle `samples` with `seed` and split into (train, validation).
pub fn split_train_val<T>(mut samples: Vec<T>, train_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let total = samples.len();

    if train_fraction >= 1.0 {
        return (samples, Vec::new());
    }

    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    // at least one training sample whenever there is any data
    let split_at = ((total as f64) * train_fraction.max(0.0)).round() as usize;
    let split_at = split_at.clamp(total.min(1), total);

    // split_off(n) leaves [0..n) in `samples` and returns [n..total)
    let val = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} validation",
        samples.len(),
        val.len()
    );

    (samples, val)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, val)      = split_train_val(items, 0.8, 42);
        assert_eq!(train.len(), 80);
        assert_eq!(val.len(),   20);
    }

    #[test]
    fn test_all_items_preserved() {
        let items: Vec<usize> = (0..50).collect();
        let (train, val)      = split_train_val(items, 0.7, 7);
        let mut all: Vec<usize> = train.into_iter().chain(val).collect();
        all.sort();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let a = split_train_val((0..30).collect::<Vec<u32>>(), 0.5, 9);
        let b = split_train_val((0..30).collect::<Vec<u32>>(), 0.5, 9);
        assert_eq!(a, b);
    }

    #[test]
    fn test_full_training_split_keeps_order() {
        let items: Vec<usize> = (0..10).collect();
        let (train, val)      = split_train_val(items, 1.0, 42);
        assert_eq!(train, (0..10).collect::<Vec<_>>());
        assert!(val.is_empty());
    }

    #[test]
    fn test_tiny_fraction_keeps_one_training_sample() {
        let (train, val) = split_train_val((0..10).collect::<Vec<u32>>(), 0.01, 3);
        assert_eq!(train.len(), 1);
        assert_eq!(val.len(), 9);
    }

    #[test]
    fn test_empty_dataset() {
        let (train, val) = split_train_val(Vec::<usize>::new(), 0.8, 42);
        assert!(train.is_empty());
        assert!(val.is_empty());
    }
}
