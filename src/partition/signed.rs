//! Signed partitions: the conjugacy-class labels of the hyperoctahedral group.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use super::{check_part, partition_counts, Partition};
use crate::error::{Error, Result};

/// A pair of partitions whose sizes add up to the size of the signed partition.
///
/// For a signed permutation the positive half lists the cycle lengths of
/// cycles with an even number of sign changes, the negative half those with an
/// odd number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedPartition {
    positive: Partition,
    negative: Partition,
}

impl SignedPartition {
    pub fn new(positive: Partition, negative: Partition) -> Self {
        Self { positive, negative }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn positive(&self) -> &Partition {
        &self.positive
    }

    pub fn negative(&self) -> &Partition {
        &self.negative
    }

    pub fn size(&self) -> usize {
        self.positive.size() + self.negative.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Swaps the positive and negative halves.
    pub fn reverse(&self) -> Self {
        Self::new(self.negative.clone(), self.positive.clone())
    }

    /// Conjugates both halves independently.
    pub fn conjugate(&self) -> Self {
        Self::new(self.positive.conjugate(), self.negative.conjugate())
    }

    /// Every signed partition of total size `n`, in canonical order.
    pub fn all(n: usize) -> Vec<Self> {
        let mut ret = vec![];
        for negative_size in 0..=n {
            let negatives = Partition::all(negative_size);
            for positive in Partition::all(n - negative_size) {
                for negative in &negatives {
                    ret.push(Self::new(positive.clone(), negative.clone()));
                }
            }
        }
        ret.sort();
        ret
    }
}

/// Orders by total size, then by the size of the negative half. Part counts
/// break the next ties; which half is consulted first depends on whether the
/// negative half outweighs the positive one. The parts themselves come last:
/// positive parts ascending, then negative parts descending.
impl Ord for SignedPartition {
    fn cmp(&self, other: &Self) -> Ordering {
        signed_order(
            (&self.positive, &self.negative),
            (&other.positive, &other.negative),
        )
    }
}

/// The ordering behind [`SignedPartition`]'s `Ord`, on borrowed halves so
/// signed diagrams can share it.
pub(crate) fn signed_order(
    (positive, negative): (&Partition, &Partition),
    (other_positive, other_negative): (&Partition, &Partition),
) -> Ordering {
    let positive_len = other_positive.len().cmp(&positive.len());
    let negative_len = negative.len().cmp(&other_negative.len());
    let lengths = if positive.size() < negative.size() {
        positive_len.then(negative_len)
    } else {
        negative_len.then(positive_len)
    };
    (positive.size() + negative.size())
        .cmp(&(other_positive.size() + other_negative.size()))
        .then(negative.size().cmp(&other_negative.size()))
        .then(lengths)
        .then_with(|| positive.parts().cmp(other_positive.parts()))
        .then_with(|| other_negative.parts().cmp(negative.parts()))
}

impl PartialOrd for SignedPartition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for SignedPartition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.positive, self.negative)
    }
}

/// `q(n)`, the number of signed partitions of `n`.
pub fn signed_partition_count(n: usize) -> usize {
    let counts = partition_counts(n);
    (0..=n).map(|i| counts[n - i] * counts[i]).sum()
}

/// Builds a [`SignedPartition`]; negative parts go to the negative half.
#[derive(Clone, Debug)]
pub struct SignedPartitionBuilder {
    size: usize,
    positive: Vec<usize>,
    negative: Vec<usize>,
    filled: usize,
}

impl SignedPartitionBuilder {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            positive: Vec::new(),
            negative: Vec::new(),
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

    /// Appends `part` to the positive half, or `-part` to the negative half
    /// when `part` is negative. Each half must stay non-increasing.
    pub fn add_part(&mut self, part: i64) -> Result<&mut Self> {
        let remainder = self.remainder();
        let magnitude = usize::try_from(part.unsigned_abs()).map_err(|_| {
            Error::InvalidState(format!("part {part} outside 1..={remainder}"))
        })?;
        let side = if part < 0 {
            &mut self.negative
        } else {
            &mut self.positive
        };
        check_part(magnitude, remainder, side.last().copied())?;
        side.push(magnitude);
        self.filled += magnitude;
        Ok(self)
    }

    /// Fills whatever remains with positive parts of size one.
    pub fn complete(mut self) -> SignedPartition {
        let remainder = self.remainder();
        self.positive.extend(std::iter::repeat(1).take(remainder));
        self.build()
    }

    /// Like [`complete`](Self::complete), but refuses to fill in missing parts.
    pub fn finish(self) -> Result<SignedPartition> {
        if !self.is_complete() {
            return Err(Error::InvalidState(format!(
                "signed partition ({:?}, {:?}) of {} is missing {}",
                self.positive,
                self.negative,
                self.size,
                self.remainder()
            )));
        }
        Ok(self.build())
    }

    fn build(self) -> SignedPartition {
        SignedPartition::new(
            Partition::from_parts_unchecked(self.positive),
            Partition::from_parts_unchecked(self.negative),
        )
    }
}
