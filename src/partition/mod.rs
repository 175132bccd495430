//! Integer partitions, their builder, and enumeration in canonical order.

pub mod signed;

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use signed::{signed_partition_count, SignedPartition, SignedPartitionBuilder};

/// A non-increasing sequence of positive integers.
///
/// A `Partition` is always complete: every way of obtaining one (validation in
/// [`Partition::new`], [`PartitionBuilder`], enumeration) checks the
/// invariants, and the parts are frozen afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Partition {
    size: usize,
    parts: Vec<usize>,
}

impl Partition {
    /// The partition of zero.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validates an explicit list of parts.
    pub fn new(parts: Vec<usize>) -> Result<Self> {
        if let Some(i) = parts.iter().position(|&p| p == 0) {
            return Err(Error::InvalidState(format!(
                "part {i} of {parts:?} is zero"
            )));
        }
        if let Some(i) = parts.windows(2).position(|w| w[0] < w[1]) {
            return Err(Error::InvalidState(format!(
                "parts {parts:?} increase at index {}",
                i + 1
            )));
        }
        Ok(Self::from_parts_unchecked(parts))
    }

    pub(crate) fn from_parts_unchecked(parts: Vec<usize>) -> Self {
        debug_assert!(parts.iter().all(|&p| p > 0), "zero part in {parts:?}");
        debug_assert!(
            parts.windows(2).all(|w| w[0] >= w[1]),
            "increasing parts in {parts:?}"
        );
        Self {
            size: parts.iter().sum(),
            parts,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn parts(&self) -> &[usize] {
        &self.parts
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The transposed partition: part `i` of the result counts the parts that
    /// are at least `i + 1`.
    pub fn conjugate(&self) -> Self {
        let mut parts = Vec::with_capacity(self.parts.first().copied().unwrap_or(0));
        let mut column = 1;
        let mut row = self.parts.len();
        while row > 0 {
            if self.parts[row - 1] >= column {
                parts.push(row);
                column += 1;
            } else {
                row -= 1;
            }
        }
        Self::from_parts_unchecked(parts)
    }

    /// Every partition of `n`, in canonical order.
    pub fn all(n: usize) -> Vec<Self> {
        let mut ret = vec![];
        for_each_partition(n, &mut |parts| {
            ret.push(Self::from_parts_unchecked(parts.to_owned()));
        });
        ret.sort();
        ret
    }
}

/// Canonical order: more parts first, then lexicographic on the parts.
impl Ord for Partition {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .parts
            .len()
            .cmp(&self.parts.len())
            .then_with(|| self.parts.cmp(&other.parts))
    }
}

impl PartialOrd for Partition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<Vec<usize>> for Partition {
    type Error = Error;

    fn try_from(parts: Vec<usize>) -> Result<Self> {
        Self::new(parts)
    }
}

impl From<Partition> for Vec<usize> {
    fn from(partition: Partition) -> Self {
        partition.parts
    }
}

impl Display for Partition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{part}")?;
        }
        write!(f, ")")
    }
}

/// Calls `cb` with every partition of `n`, largest parts first, in reverse
/// lexicographic order.
pub fn for_each_partition<F: FnMut(&[usize])>(n: usize, cb: &mut F) {
    fn helper<F: FnMut(&[usize])>(remaining: usize, cur: &mut Vec<usize>, cb: &mut F) {
        if remaining == 0 {
            cb(cur);
            return;
        }
        let lim = cur.last().cloned().unwrap_or(remaining).min(remaining);
        for part in (1..=lim).rev() {
            cur.push(part);
            helper(remaining - part, cur, cb);
            cur.pop();
        }
    }

    helper(n, &mut vec![], cb);
}

/// `p(0..=end)`: the number of partitions of each size up to `end`.
pub fn partition_counts(end: usize) -> Vec<usize> {
    // by_largest[n][k] is the number of partitions of n with largest part k.
    let mut by_largest: Vec<Vec<usize>> = vec![vec![1]];
    for n in 1..=end {
        let row = (0..=n)
            .map(|k| match k {
                0 => 0,
                _ => by_largest[n - k].iter().take(k + 1).sum(),
            })
            .collect();
        by_largest.push(row);
    }
    by_largest
        .into_iter()
        .map(|row| row.into_iter().sum())
        .collect()
}

/// Builds a [`Partition`] one part at a time.
#[derive(Clone, Debug)]
pub struct PartitionBuilder {
    size: usize,
    parts: Vec<usize>,
    filled: usize,
}

impl PartitionBuilder {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            parts: Vec::new(),
            filled: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn remainder(&self) -> usize {
        self.size - self.filled
    }

    pub fn is_complete(&self) -> bool {
        self.filled == self.size
    }

    /// Appends `part`, which must fit in the remainder and not exceed the
    /// previous part.
    pub fn add_part(&mut self, part: usize) -> Result<&mut Self> {
        check_part(part, self.remainder(), self.parts.last().copied())?;
        self.parts.push(part);
        self.filled += part;
        Ok(self)
    }

    /// Fills whatever remains with parts of size one.
    pub fn complete(mut self) -> Partition {
        let remainder = self.remainder();
        self.parts.extend(std::iter::repeat(1).take(remainder));
        Partition::from_parts_unchecked(self.parts)
    }

    /// Like [`complete`](Self::complete), but refuses to fill in missing parts.
    pub fn finish(self) -> Result<Partition> {
        if !self.is_complete() {
            return Err(Error::InvalidState(format!(
                "partition {:?} of {} is missing {}",
                self.parts,
                self.size,
                self.remainder()
            )));
        }
        Ok(Partition::from_parts_unchecked(self.parts))
    }
}

pub(crate) fn check_part(part: usize, remainder: usize, last: Option<usize>) -> Result<()> {
    if remainder == 0 {
        return Err(Error::InvalidState(format!(
            "cannot add part {part} to a complete partition"
        )));
    }
    if part == 0 || part > remainder {
        return Err(Error::InvalidState(format!(
            "part {part} outside 1..={remainder}"
        )));
    }
    match last {
        Some(last) if part > last => Err(Error::InvalidState(format!(
            "part {part} exceeds previous part {last}"
        ))),
        _ => Ok(()),
    }
}
