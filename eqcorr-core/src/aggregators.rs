//! Aggregator state machines. The histogram and full-map sinks
//! are simple enough that their `eqcorr_types` containers carry their own
//! mutation helpers; the worst-tracker's reset/insert protocol has enough
//! invariants (duplicate-freedom, presence bitmap) to deserve its own type.

use eqcorr_types::Error;

/// Tracks the set of `(iA, iB)` pairs achieving the global maximum
/// match count observed so far.
#[derive(Debug, Clone)]
pub struct WorstTracker {
    max_val: i32,
    n_b: usize,
    present: Vec<bool>,
    pairs: Vec<(usize, usize)>,
}

impl WorstTracker {
    pub fn new(n_a: usize, n_b: usize) -> Self {
        Self { max_val: i32::MIN, n_b, present: vec![false; n_a * n_b], pairs: Vec::new() }
    }

    /// Fallible counterpart of [`WorstTracker::new`]: the
    /// presence bitmap is the only allocation here that scales with
    /// `nA * nB`, so it's the one worth a `try_reserve_exact` guard.
    pub fn try_new(n_a: usize, n_b: usize) -> Result<Self, Error> {
        let len = n_a * n_b;
        let mut present: Vec<bool> = Vec::new();
        present
            .try_reserve_exact(len)
            .map_err(|_| Error::Alloc { what: "worst-tracker presence bitmap", requested_bytes: len })?;
        present.resize(len, false);
        Ok(Self { max_val: i32::MIN, n_b, present, pairs: Vec::new() })
    }

    pub fn max_val(&self) -> i32 {
        self.max_val
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn into_pairs(self) -> Vec<(usize, usize)> {
        self.pairs
    }

    /// Applies one translation's match count for pair `(i_a, i_b)`: a new
    /// strict maximum resets the tracked set, a tie appends to it, anything
    /// lower is ignored.
    pub fn observe(&mut self, i_a: usize, i_b: usize, acc: i32) {
        if acc > self.max_val {
            self.reset(acc);
            self.insert(i_a, i_b);
        } else if acc == self.max_val {
            self.insert(i_a, i_b);
        }
    }

    /// Resets to a new maximum. A no-op on the sequence/bitmap when
    /// `new_max == self.max_val`.
    fn reset(&mut self, new_max: i32) {
        if new_max == self.max_val {
            return;
        }
        self.max_val = new_max;
        self.present.iter_mut().for_each(|b| *b = false);
        self.pairs.clear();
    }

    fn insert(&mut self, i_a: usize, i_b: usize) {
        let idx = i_a * self.n_b + i_b;
        if self.present[idx] {
            return;
        }
        self.present[idx] = true;
        self.pairs.push((i_a, i_b));
    }
}
