//! Young diagrams and border-strip removal.

pub mod corner;
pub mod signed;

use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::partition::Partition;

pub use corner::{Corner, CornerSequence};
pub use signed::SignedDiagram;

/// What the character recursion needs from a diagram.
pub trait Shape: Clone + Eq + Hash + Debug {
    /// Number of cells.
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Every shape left after removing a border strip of `strip` cells, with
    /// the signed row span of the removed strip.
    ///
    /// The magnitude of each weight is the number of rows the strip spans,
    /// so it is never zero and its sign carries which half of a signed
    /// diagram the strip came from.
    fn reduce(&self, strip: usize) -> FxHashMap<Self, i64>;
}

/// A left-justified array of rows; row `i` has `parts[i]` cells.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Diagram {
    partition: Partition,
}

impl Diagram {
    pub fn new(partition: Partition) -> Self {
        Self { partition }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn size(&self) -> usize {
        self.partition.size()
    }

    pub fn is_empty(&self) -> bool {
        self.partition.is_empty()
    }

    /// The diagram of the conjugate partition.
    pub fn conjugate(&self) -> Self {
        Self::new(self.partition.conjugate())
    }

    /// Reflection about the main diagonal; the same as [`conjugate`](Self::conjugate).
    pub fn reflect(&self) -> Self {
        self.conjugate()
    }

    /// Every diagram with `n` cells, in the canonical partition order.
    pub fn all(n: usize) -> Vec<Self> {
        Partition::all(n).into_iter().map(Self::new).collect()
    }

    /// The steps of the boundary staircase, top to bottom. The last corner
    /// always runs down to the foot of the diagram.
    pub fn corners(&self) -> Vec<Corner> {
        let parts = self.partition.parts();
        let mut corners = vec![];
        let mut start = 0;
        for (i, pair) in parts.windows(2).enumerate() {
            if pair[0] != pair[1] {
                corners.push(Corner::new_unchecked(
                    start,
                    parts[start],
                    i - start + 1,
                    pair[0] - pair[1],
                ));
                start = i + 1;
            }
        }
        if let Some(&last) = parts.get(start) {
            corners.push(Corner::new_unchecked(
                start,
                last,
                parts.len() - start,
                last,
            ));
        }
        corners
    }

    /// Every contiguous run of corners, singletons included.
    pub fn corner_sequences(&self) -> Vec<CornerSequence> {
        let corners = self.corners();
        let mut sequences = Vec::with_capacity(corners.len() * (corners.len() + 1) / 2);
        for i in 0..corners.len() {
            for j in i..corners.len() {
                sequences.push(CornerSequence::new_unchecked(corners[i..=j].to_vec()));
            }
        }
        sequences
    }

    /// Removes a border strip of `strip` cells in every possible way.
    ///
    /// Each strip lies along exactly one corner sequence and is fixed by its
    /// offset along that sequence. Rows strictly inside the strip lose one
    /// cell, an interior corner it crosses loses its width plus one, and the
    /// last corner it reaches absorbs whatever is left of the strip.
    pub fn reduce(&self, strip: usize) -> FxHashMap<Diagram, i64> {
        let parts = self.partition.parts();
        let mut reduced = FxHashMap::default();
        for seq in self.corner_sequences() {
            let first = *seq.first();
            let start = seq.start_index();
            let end = start + seq.height();
            let min_length = seq.min_length();
            let top = (first.corner_index() + min_length) as isize - strip as isize;
            let overhang = (first.height() + min_length - 1).saturating_sub(strip);
            for offset in 0..seq.degrees_of_freedom(strip) {
                let mut next = Vec::with_capacity(parts.len());
                let mut corner = 0;
                let mut cut = strip;
                for (row, &part) in parts.iter().enumerate() {
                    let inside = row as isize - offset as isize >= top
                        && row >= start + offset
                        && row < end;
                    let kept = if !inside {
                        part
                    } else if row == seq.corners()[corner].corner_index() {
                        if corner == seq.len() - 1 {
                            part - cut
                        } else {
                            let taken = seq.corners()[corner].width() + 1;
                            cut -= taken;
                            corner += 1;
                            part - taken
                        }
                    } else {
                        cut -= 1;
                        part - 1
                    };
                    if kept > 0 {
                        next.push(kept);
                    }
                }
                let rows = (seq.height() - overhang - offset) as i64;
                *reduced
                    .entry(Diagram::new(Partition::from_parts_unchecked(next)))
                    .or_insert(0) += rows;
            }
        }
        reduced
    }
}

impl Shape for Diagram {
    fn size(&self) -> usize {
        Diagram::size(self)
    }

    fn reduce(&self, strip: usize) -> FxHashMap<Self, i64> {
        Diagram::reduce(self, strip)
    }
}

impl From<Partition> for Diagram {
    fn from(partition: Partition) -> Self {
        Self::new(partition)
    }
}

/// Draws the cells as coloured blocks; rim cells are lighter.
impl Display for Diagram {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let parts = self.partition.parts();
        for (y, &len) in parts.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            let below = parts.get(y + 1).copied().unwrap_or(0);
            for x in 0..len {
                let c = match (below <= x + 1, (x + y) % 2 == 0) {
                    (true, true) => 253,
                    (true, false) => 251,
                    (false, true) => 240,
                    (false, false) => 238,
                };
                write!(f, "\x1b[48;5;{c}m  \x1b[m")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(parts: &[usize]) -> Diagram {
        Diagram::new(Partition::new(parts.to_vec()).unwrap())
    }

    fn reduced(parts: &[usize], strip: usize) -> Vec<(Vec<usize>, i64)> {
        let mut ret: Vec<_> = d(parts)
            .reduce(strip)
            .into_iter()
            .map(|(k, v)| (k.partition().parts().to_vec(), v))
            .collect();
        ret.sort();
        ret
    }

    /// Rim hooks via beta numbers: moving a bead from `b` to an empty
    /// position `b - n` removes a hook of `n` cells whose leg length is the
    /// number of beads strictly between the two positions.
    fn rim_hooks(parts: &[usize], n: usize) -> Vec<(Vec<usize>, i64)> {
        let len = parts.len();
        let beta: Vec<usize> = parts
            .iter()
            .enumerate()
            .map(|(i, &p)| p + len - 1 - i)
            .collect();
        let mut ret = vec![];
        for &b in &beta {
            if b < n || beta.contains(&(b - n)) {
                continue;
            }
            let leg = beta.iter().filter(|&&x| b - n < x && x < b).count();
            let mut moved: Vec<usize> = beta
                .iter()
                .map(|&x| if x == b { b - n } else { x })
                .collect();
            moved.sort_unstable_by(|a, b| b.cmp(a));
            let shape = moved
                .iter()
                .enumerate()
                .map(|(i, &x)| x - (len - 1 - i))
                .filter(|&p| p > 0)
                .collect();
            ret.push((shape, leg as i64 + 1));
        }
        ret.sort();
        ret
    }

    #[test]
    fn test_corners() {
        let corners = d(&[4, 4, 2, 1]).corners();
        assert_eq!(
            corners,
            vec![
                Corner::new(0, 4, 2, 2).unwrap(),
                Corner::new(2, 2, 1, 1).unwrap(),
                Corner::new(3, 1, 1, 1).unwrap(),
            ]
        );
        assert_eq!(d(&[3, 3]).corners(), vec![Corner::new(0, 3, 2, 3).unwrap()]);
        assert!(Diagram::empty().corners().is_empty());
        assert_eq!(d(&[4, 4, 2, 1]).corner_sequences().len(), 6);
    }

    #[test]
    fn test_reduce_examples() {
        assert_eq!(
            reduced(&[3, 2, 1], 3),
            vec![(vec![1, 1, 1], 2), (vec![3], 2)]
        );
        assert_eq!(reduced(&[2, 2], 2), vec![(vec![1, 1], 2), (vec![2], 1)]);
        assert_eq!(
            reduced(&[4, 4, 2, 1], 3),
            vec![(vec![3, 2, 2, 1], 2), (vec![4, 4], 2)]
        );
        assert_eq!(
            reduced(&[3, 3, 1], 2),
            vec![(vec![2, 2, 1], 2), (vec![3, 1, 1], 1)]
        );
        assert_eq!(
            reduced(&[3, 2, 1], 1),
            vec![(vec![2, 2, 1], 1), (vec![3, 1, 1], 1), (vec![3, 2], 1)]
        );
        assert_eq!(reduced(&[3, 3, 1], 4), vec![(vec![3], 2)]);
        // The hook of cell (0, 0) has length 3 and spans both rows.
        assert_eq!(reduced(&[2, 2], 3), vec![(vec![1], 2)]);
        // No hook of (2,2) is as long as the whole square.
        assert!(reduced(&[2, 2], 4).is_empty());
        assert!(reduced(&[2, 2], 0).is_empty());
    }

    #[test]
    fn test_reduce_whole_hook() {
        for n in 1..=8 {
            for arm in 0..n {
                let mut parts = vec![n - arm];
                parts.extend(std::iter::repeat(1).take(arm));
                let hook = d(&parts);
                let map = hook.reduce(n);
                assert_eq!(map.get(&Diagram::empty()), Some(&(arm as i64 + 1)));
            }
        }
    }

    #[test]
    fn test_reduce_matches_rim_hooks() {
        for n in 1..=10 {
            for partition in Partition::all(n) {
                for strip in 1..=n {
                    assert_eq!(
                        reduced(partition.parts(), strip),
                        rim_hooks(partition.parts(), strip),
                        "{partition} minus {strip}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_reduce_preserves_size() {
        for partition in Partition::all(7) {
            let diagram = Diagram::new(partition);
            for strip in 1..=7 {
                for next in diagram.reduce(strip).keys() {
                    assert_eq!(next.size(), 7 - strip);
                }
            }
        }
    }

    #[test]
    fn test_reflect() {
        assert_eq!(d(&[3, 1]).reflect(), d(&[2, 1, 1]));
        assert_eq!(d(&[3, 1]).conjugate().conjugate(), d(&[3, 1]));
    }

    #[test]
    fn test_display_rows() {
        let text = d(&[2, 1]).to_string();
        assert_eq!(text.lines().count(), 2);
        assert_eq!(text.matches("  ").count(), 3);
        assert_eq!(Diagram::empty().to_string(), "");
    }
}
