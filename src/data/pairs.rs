// ============================================================
// Layer 4 - Context-Window Pair Generator
// ============================================================
// Builds CBoW training examples from id sequences.
//
// For every sentence S of length L and every position i, the
// context is a fixed window of 2W slots:
//
//   context[k] = S[i - W + k]   if that index is inside S and ≠ i
//              = 0              otherwise          (k in 0..2W)
//   target     = S[i]
//
// The window covers positions i-W ..= i+W-1. The centre slot is
// padded with 0 rather than removed, so every context has
// exactly 2W entries. Windows never cross a sentence boundary.
//
// Example, W = 2, sentence [5, 9, 2]:
//   i = 0 → [0, 0, 0, 9] → 5
//   i = 1 → [0, 5, 0, 2] → 9
//   i = 2 → [5, 9, 0, 0] → 2

use crate::domain::training_pair::{TrainingPair, PAD_ID};

pub struct PairGenerator {
    window_size: usize,
}

impl PairGenerator {
    /// # Panics
    /// Panics if window_size is 0, which would give empty contexts
    pub fn new(window_size: usize) -> Self {
        assert!(window_size > 0, "window_size must be at least 1");
        Self { window_size }
    }

    /// Emit one pair per token of every sentence, in corpus order.
    pub fn generate(&self, corpus: &[Vec<u32>]) -> PairSet {
        let width = 2 * self.window_size;
        let total: usize = corpus.iter().map(Vec::len).sum();

        let mut contexts = Vec::with_capacity(total * width);
        let mut targets  = Vec::with_capacity(total);

        for sentence in corpus {
            let len = sentence.len() as isize;
            for i in 0..len {
                for k in 0..width as isize {
                    let j = i - self.window_size as isize + k;
                    let id = if j >= 0 && j < len && j != i {
                        sentence[j as usize]
                    } else {
                        PAD_ID
                    };
                    contexts.push(id);
                }
                targets.push(sentence[i as usize]);
            }
        }

        tracing::debug!(
            "Generated {} pairs (window_size={}, {} sentences)",
            targets.len(),
            self.window_size,
            corpus.len()
        );

        PairSet { width, contexts, targets }
    }
}

/// N training pairs stored as two parallel arrays:
/// contexts (N x 2W, row-major) and targets (N).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairSet {
    width:    usize,
    contexts: Vec<u32>,
    targets:  Vec<u32>,
}

impl PairSet {
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Context width, 2 x window_size
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row `n` of the context array
    #[cfg(test)]
    pub fn context(&self, n: usize) -> &[u32] {
        &self.contexts[n * self.width..(n + 1) * self.width]
    }

    pub fn contexts(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.contexts.chunks_exact(self.width)
    }

    pub fn targets(&self) -> &[u32] {
        &self.targets
    }

    /// One TrainingPair per row, for the Burn dataset
    pub fn into_pairs(self) -> Vec<TrainingPair> {
        self.contexts()
            .zip(self.targets())
            .map(|(ctx, &target)| TrainingPair::new(ctx.to_vec(), target))
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_fixture() {
        let pairs = PairGenerator::new(2).generate(&[vec![5, 9, 2]]);

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs.context(0), &[0, 0, 0, 9]);
        assert_eq!(pairs.context(1), &[0, 5, 0, 2]);
        assert_eq!(pairs.context(2), &[5, 9, 0, 0]);
        assert_eq!(pairs.targets(), &[5, 9, 2]);
    }

    #[test]
    fn test_pair_count_is_sum_of_lengths() {
        let corpus = vec![vec![1, 2, 3], vec![4, 5, 6, 7, 8], vec![9]];
        let pairs  = PairGenerator::new(3).generate(&corpus);
        assert_eq!(pairs.len(), 9);
    }

    #[test]
    fn test_context_width_everywhere() {
        let corpus = vec![vec![1, 2], vec![3, 4, 5, 6, 7, 8, 9, 10]];
        for window in 1..=4 {
            let pairs = PairGenerator::new(window).generate(&corpus);
            assert!(pairs.contexts().all(|c| c.len() == 2 * window));
            assert_eq!(pairs.width(), 2 * window);
        }
    }

    #[test]
    fn test_windows_do_not_cross_sentences() {
        let pairs = PairGenerator::new(1).generate(&[vec![1, 2], vec![3, 4]]);
        // window covers i-1 ..= i
        assert_eq!(pairs.context(0), &[0, 0]);
        assert_eq!(pairs.context(1), &[1, 0]);
        assert_eq!(pairs.context(2), &[0, 0]);
        assert_eq!(pairs.context(3), &[3, 0]);
    }

    #[test]
    fn test_empty_corpus_gives_no_pairs() {
        let pairs = PairGenerator::new(2).generate(&[vec![], vec![]]);
        assert!(pairs.is_empty());
        assert!(pairs.into_pairs().is_empty());
    }

    #[test]
    fn test_short_sentences_are_kept() {
        let pairs = PairGenerator::new(2).generate(&[vec![], vec![7]]);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs.context(0), &[0, 0, 0, 0]);
        assert_eq!(pairs.targets(), &[7]);
    }

    #[test]
    fn test_repeated_pairs_not_deduplicated() {
        let pairs = PairGenerator::new(1).generate(&[vec![1, 1], vec![1, 1]]);
        let rows  = pairs.clone().into_pairs();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], rows[3]);
    }

    #[test]
    fn test_into_pairs_matches_arrays() {
        let pairs = PairGenerator::new(2).generate(&[vec![5, 9, 2]]);
        let rows  = pairs.clone().into_pairs();
        assert_eq!(rows[1], TrainingPair::new(vec![0, 5, 0, 2], 9));
        assert_eq!(rows.len(), pairs.len());
    }

    #[test]
    #[should_panic]
    fn test_zero_window_rejected() {
        let _ = PairGenerator::new(0);
    }
}
