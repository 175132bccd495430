//! The Murnaghan–Nakayama recursion and its memo cache.
//!
//! A character value `χ(D, μ)` is computed by peeling the parts of the class
//! label `μ` off one at a time: remove a border strip of that size from `D`
//! in every possible way, weight each result by the sign of the strip, and
//! recurse on the remaining parts. The value only depends on the shape and
//! on the parts still to be consumed, so that pair keys the memo.

pub mod table;

use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::diagram::Shape;
use crate::partition::{Partition, SignedPartition};

pub use table::{
    generate_hn_table, generate_sn_table, generate_table, CharacterTable, GroupKind, Matrix,
    TableRequest,
};

/// A conjugacy-class label, read as a sequence of strip sizes. Negative
/// sizes stand for negative cycles.
pub trait ClassLabel {
    fn strips(&self) -> Vec<i64>;
}

impl ClassLabel for Partition {
    fn strips(&self) -> Vec<i64> {
        self.parts().iter().map(|&p| p as i64).collect()
    }
}

/// Positive cycles first, then the negative ones.
impl ClassLabel for SignedPartition {
    fn strips(&self) -> Vec<i64> {
        let positive = self.positive().parts().iter().map(|&p| p as i64);
        let negative = self.negative().parts().iter().map(|&p| -(p as i64));
        positive.chain(negative).collect()
    }
}

/// Write-once cache: a key is filled the first time it is asked for and never
/// changes afterwards.
#[derive(Debug)]
pub struct Memo<K> {
    values: FxHashMap<K, i64>,
    hits: usize,
    misses: usize,
}

impl<K: Eq + Hash> Memo<K> {
    pub fn new() -> Self {
        Self {
            values: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the cached value for `key`, or runs `compute` and caches its
    /// result. `compute` gets the memo back so it can recurse.
    pub fn compute_if_absent<F>(&mut self, key: K, compute: F) -> i64
    where
        F: FnOnce(&mut Self) -> i64,
    {
        if let Some(&value) = self.values.get(&key) {
            self.hits += 1;
            return value;
        }
        self.misses += 1;
        let value = compute(self);
        *self.values.entry(key).or_insert(value)
    }

    pub fn get(&self, key: &K) -> Option<i64> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }
}

impl<K: Eq + Hash> Default for Memo<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sign of one strip removal. `weight` is the signed row span reported by
/// [`Shape::reduce`]; `negative` marks a negative cycle in the class label.
///
/// Gives `(-1)^(rows - 1)`, flipped once more when a negative cycle is
/// removed from the negative half of a signed diagram.
pub fn sign_factor(weight: i64, negative: bool) -> i64 {
    if (negative && weight < 0) == (weight.abs() % 2 == 0) {
        1
    } else {
        -1
    }
}

/// Evaluates characters of one group for one size `n`.
///
/// The memo is keyed on shapes and strip sequences only, so an engine must
/// not be reused for a different `n` or a different group.
#[derive(Debug)]
pub struct CharacterEngine<S> {
    memo: Memo<(S, Vec<i64>)>,
}

impl<S: Shape> CharacterEngine<S> {
    pub fn new() -> Self {
        Self { memo: Memo::new() }
    }

    pub fn memo(&self) -> &Memo<(S, Vec<i64>)> {
        &self.memo
    }

    /// `χ(shape, label)` with the first `index` parts of `label` already
    /// consumed.
    pub fn chi<L: ClassLabel>(&mut self, shape: &S, label: &L, index: usize) -> i64 {
        let strips = label.strips();
        let rest = &strips[index.min(strips.len())..];
        chi_strips(&mut self.memo, shape, rest)
    }

    /// One row per shape, one column per class label.
    pub fn table<L: ClassLabel>(&mut self, shapes: &[S], labels: &[L]) -> Matrix {
        let strips: Vec<Vec<i64>> = labels.iter().map(ClassLabel::strips).collect();
        let mut rows = Vec::with_capacity(shapes.len());
        for shape in shapes {
            let mut row = Vec::with_capacity(strips.len());
            for label in &strips {
                row.push(chi_strips(&mut self.memo, shape, label));
            }
            rows.push(row);
        }
        rows
    }
}

impl<S: Shape> Default for CharacterEngine<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn chi_strips<S: Shape>(memo: &mut Memo<(S, Vec<i64>)>, shape: &S, strips: &[i64]) -> i64 {
    if shape.is_empty() {
        return 1;
    }
    // Cells left over with no strips to remove them.
    let Some((&strip, rest)) = strips.split_first() else {
        return 0;
    };
    memo.compute_if_absent((shape.clone(), strips.to_vec()), |memo| {
        trace!(size = shape.size(), strip, "evaluating");
        let negative = strip < 0;
        shape
            .reduce(strip.unsigned_abs() as usize)
            .into_iter()
            .map(|(next, weight)| sign_factor(weight, negative) * chi_strips(memo, &next, rest))
            .sum()
    })
}
