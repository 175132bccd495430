//! Corners of a Young diagram and runs of adjacent corners.
//!
//! The boundary of a diagram is a staircase. A [`Corner`] is one step of that
//! staircase: a block of equal-length rows together with the drop in length to
//! the next distinct row (or to zero below the last row). A border strip
//! always lies along a [`CornerSequence`], a run of corners with no gap
//! between them, so counting strip placements reduces to arithmetic on the
//! heights and widths of the run.

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Corner {
    start_index: usize,
    start_part_size: usize,
    height: usize,
    width: usize,
}

impl Corner {
    pub fn new(
        start_index: usize,
        start_part_size: usize,
        height: usize,
        width: usize,
    ) -> Result<Self> {
        if height < 1 {
            return Err(Error::InvalidGeometry(format!(
                "corner at row {start_index} has height {height}"
            )));
        }
        if width < 1 {
            return Err(Error::InvalidGeometry(format!(
                "corner at row {start_index} has width {width}"
            )));
        }
        if width > start_part_size {
            return Err(Error::InvalidGeometry(format!(
                "corner at row {start_index} is {width} wide but its rows have length {start_part_size}"
            )));
        }
        Ok(Self::new_unchecked(start_index, start_part_size, height, width))
    }

    pub(crate) fn new_unchecked(
        start_index: usize,
        start_part_size: usize,
        height: usize,
        width: usize,
    ) -> Self {
        debug_assert!(height >= 1 && width >= 1 && width <= start_part_size);
        Self {
            start_index,
            start_part_size,
            height,
            width,
        }
    }

    /// Row where the run of equal rows begins.
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Length of the rows in the run.
    pub fn start_part_size(&self) -> usize {
        self.start_part_size
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Row holding the tip of the corner, i.e. the last row of the run.
    pub fn corner_index(&self) -> usize {
        self.start_index + self.height - 1
    }

    /// True if `next` continues the staircase directly below this corner.
    pub fn precedes(&self, next: &Corner) -> bool {
        next.start_index == self.start_index + self.height
            && self.start_part_size == next.start_part_size + self.width
    }
}

/// A non-empty run of adjacent corners, ordered top to bottom.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CornerSequence {
    corners: Vec<Corner>,
}

impl CornerSequence {
    pub fn new(corners: Vec<Corner>) -> Result<Self> {
        if corners.is_empty() {
            return Err(Error::InvalidSequence("no corners".to_string()));
        }
        for pair in corners.windows(2) {
            if pair[0].start_index >= pair[1].start_index {
                return Err(Error::InvalidSequence(format!(
                    "corner at row {} does not come after row {}",
                    pair[1].start_index, pair[0].start_index
                )));
            }
            if !pair[0].precedes(&pair[1]) {
                return Err(Error::InvalidSequence(format!(
                    "corners at rows {} and {} are not adjacent",
                    pair[0].start_index, pair[1].start_index
                )));
            }
        }
        Ok(Self { corners })
    }

    pub(crate) fn new_unchecked(corners: Vec<Corner>) -> Self {
        debug_assert!(!corners.is_empty());
        debug_assert!(corners.windows(2).all(|pair| pair[0].precedes(&pair[1])));
        Self { corners }
    }

    pub fn corners(&self) -> &[Corner] {
        &self.corners
    }

    pub fn first(&self) -> &Corner {
        &self.corners[0]
    }

    /// Number of corners in the run.
    pub fn len(&self) -> usize {
        self.corners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    pub fn start_index(&self) -> usize {
        self.first().start_index
    }

    pub fn start_part_size(&self) -> usize {
        self.first().start_part_size
    }

    /// Total number of rows covered.
    pub fn height(&self) -> usize {
        self.corners.iter().map(Corner::height).sum()
    }

    /// Total number of columns covered.
    pub fn width(&self) -> usize {
        self.corners.iter().map(Corner::width).sum()
    }

    /// Number of boundary cells along the run.
    pub fn length(&self) -> usize {
        self.corners.len() - 1
            + self
                .corners
                .iter()
                .map(|c| c.height + c.width - 1)
                .sum::<usize>()
    }

    /// Cells from the tip of the first corner to the tip of the last,
    /// inclusive: the shortest strip that touches every corner.
    pub fn min_length(&self) -> usize {
        let last = self.corners.len() - 1;
        1 + self
            .corners
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let below = if i > 0 { c.height } else { 0 };
                let across = if i < last { c.width } else { 0 };
                below + across
            })
            .sum::<usize>()
    }

    /// Number of ways to place a strip of `n` cells along this run that
    /// touches every corner tip and nothing outside the run.
    pub fn degrees_of_freedom(&self, n: usize) -> usize {
        let length = self.length();
        let min_length = self.min_length();
        if n > length || n < min_length {
            return 0;
        }
        let first_height = self.first().height;
        [
            length - n + 1,
            n - min_length + 1,
            first_height,
            (length + 2).saturating_sub(first_height + min_length),
        ]
        .into_iter()
        .min()
        .unwrap_or(0)
    }
}

impl From<Corner> for CornerSequence {
    fn from(corner: Corner) -> Self {
        Self {
            corners: vec![corner],
        }
    }
}
