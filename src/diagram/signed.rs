//! Pairs of Young diagrams, indexing the irreducible characters of the
//! hyperoctahedral group.

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use rustc_hash::FxHashMap;

use super::{Diagram, Shape};
use crate::partition::signed::signed_order;
use crate::partition::SignedPartition;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SignedDiagram {
    positive: Diagram,
    negative: Diagram,
}

impl SignedDiagram {
    pub fn new(positive: Diagram, negative: Diagram) -> Self {
        Self { positive, negative }
    }

    pub fn positive(&self) -> &Diagram {
        &self.positive
    }

    pub fn negative(&self) -> &Diagram {
        &self.negative
    }

    pub fn size(&self) -> usize {
        self.positive.size() + self.negative.size()
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.positive.conjugate(), self.negative.conjugate())
    }

    pub fn reflect(&self) -> Self {
        self.conjugate()
    }

    /// Swaps the two halves.
    pub fn reverse(&self) -> Self {
        Self::new(self.negative.clone(), self.positive.clone())
    }

    /// Every signed diagram with `n` cells in total, in the same order as
    /// [`SignedPartition::all`].
    pub fn all(n: usize) -> Vec<Self> {
        SignedPartition::all(n).into_iter().map(Self::from).collect()
    }

    /// Removes a strip from either half. Strips taken from the negative half
    /// are reported with negated weight.
    pub fn reduce(&self, strip: usize) -> FxHashMap<SignedDiagram, i64> {
        let mut reduced = FxHashMap::default();
        for (next, rows) in self.positive.reduce(strip) {
            *reduced
                .entry(Self::new(next, self.negative.clone()))
                .or_insert(0) += rows;
        }
        for (next, rows) in self.negative.reduce(strip) {
            *reduced
                .entry(Self::new(self.positive.clone(), next))
                .or_insert(0) -= rows;
        }
        reduced
    }
}

impl Shape for SignedDiagram {
    fn size(&self) -> usize {
        SignedDiagram::size(self)
    }

    fn is_empty(&self) -> bool {
        SignedDiagram::is_empty(self)
    }

    fn reduce(&self, strip: usize) -> FxHashMap<Self, i64> {
        SignedDiagram::reduce(self, strip)
    }
}

impl From<SignedPartition> for SignedDiagram {
    fn from(partition: SignedPartition) -> Self {
        Self::new(
            Diagram::new(partition.positive().clone()),
            Diagram::new(partition.negative().clone()),
        )
    }
}

impl Ord for SignedDiagram {
    fn cmp(&self, other: &Self) -> Ordering {
        signed_order(
            (self.positive.partition(), self.negative.partition()),
            (other.positive.partition(), other.negative.partition()),
        )
    }
}

impl PartialOrd for SignedDiagram {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for SignedDiagram {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "+")?;
        if !self.positive.is_empty() {
            writeln!(f, "{}", self.positive)?;
        }
        writeln!(f, "-")?;
        if !self.negative.is_empty() {
            write!(f, "{}", self.negative)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::Partition;

    fn d(parts: &[usize]) -> Diagram {
        Diagram::new(Partition::new(parts.to_vec()).unwrap())
    }

    #[test]
    fn test_reduce_negates_negative_half() {
        let signed = SignedDiagram::new(d(&[2]), d(&[1, 1]));
        let map = signed.reduce(2);
        assert_eq!(map.len(), 2);
        assert_eq!(map[&SignedDiagram::new(Diagram::empty(), d(&[1, 1]))], 1);
        assert_eq!(map[&SignedDiagram::new(d(&[2]), Diagram::empty())], -2);

        let map = signed.reduce(1);
        assert_eq!(map[&SignedDiagram::new(d(&[1]), d(&[1, 1]))], 1);
        assert_eq!(map[&SignedDiagram::new(d(&[2]), d(&[1]))], -1);
    }

    #[test]
    fn test_reduce_one_sided() {
        let signed = SignedDiagram::new(Diagram::empty(), d(&[3]));
        let map = signed.reduce(3);
        assert_eq!(map.len(), 1);
        assert_eq!(map[&SignedDiagram::default()], -1);
        assert!(SignedDiagram::default().reduce(1).is_empty());
    }

    #[test]
    fn test_order_matches_partitions() {
        let partitions = SignedPartition::all(4);
        let diagrams = SignedDiagram::all(4);
        let mut sorted = diagrams.clone();
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, diagrams);
        for (p, d) in partitions.into_iter().zip(diagrams) {
            assert_eq!(SignedDiagram::from(p), d);
        }
    }

    #[test]
    fn test_reverse() {
        let signed = SignedDiagram::new(d(&[2, 1]), d(&[1]));
        assert_eq!(signed.reverse(), SignedDiagram::new(d(&[1]), d(&[2, 1])));
        assert_eq!(signed.size(), 4);
        assert!(!signed.is_empty());
        assert_eq!(signed.reflect(), signed);
    }
}
