// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use std::fmt::Display;

/// Row index on the deck grid, numbered from the bow-ward edge.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct RowIndex(usize);

impl RowIndex {
    #[inline]
    pub const fn new(v: usize) -> Self {
        RowIndex(v)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl Display for RowIndex {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RowIndex({})", self.0)
    }
}

impl From<usize> for RowIndex {
    #[inline]
    fn from(v: usize) -> Self {
        RowIndex(v)
    }
}

/// Column index on the deck grid, numbered port to starboard.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct ColIndex(usize);

impl ColIndex {
    #[inline]
    pub const fn new(v: usize) -> Self {
        ColIndex(v)
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn abs_distance(self, other: ColIndex) -> usize {
        self.0.abs_diff(other.0)
    }
}

impl Display for ColIndex {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ColIndex({})", self.0)
    }
}

impl From<usize> for ColIndex {
    #[inline]
    fn from(v: usize) -> Self {
        ColIndex(v)
    }
}

/// One addressable grid cell.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct SlotPosition {
    row: RowIndex,
    col: ColIndex,
}

impl SlotPosition {
    #[inline]
    pub const fn new(row: RowIndex, col: ColIndex) -> Self {
        SlotPosition { row, col }
    }

    #[inline]
    pub const fn row(self) -> RowIndex {
        self.row
    }

    #[inline]
    pub const fn col(self) -> ColIndex {
        self.col
    }
}

impl Display for SlotPosition {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SlotPosition({}, {})", self.row.value(), self.col.value())
    }
}

/// Left/right half of the grid relative to its center column.
///
/// A geometric partition only; no hull physics behind it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Side {
    Port,
    Starboard,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Port => Side::Starboard,
            Side::Starboard => Side::Port,
        }
    }
}

impl Display for Side {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Port => write!(f, "PORT"),
            Side::Starboard => write!(f, "STARBOARD"),
        }
    }
}

/// Dimensions of a deck grid.
///
/// Owns the row-major slot enumeration order, which downstream code relies
/// on as the deterministic tie-break when placement scores are equal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct GridDims {
    rows: usize,
    cols: usize,
}

impl GridDims {
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        GridDims { rows, cols }
    }

    #[inline]
    pub const fn rows(self) -> usize {
        self.rows
    }

    #[inline]
    pub const fn cols(self) -> usize {
        self.cols
    }

    #[inline]
    pub const fn capacity(self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub const fn center_col(self) -> ColIndex {
        ColIndex::new(self.cols / 2)
    }

    /// Columns strictly left of the center column count as port.
    #[inline]
    pub const fn side_of(self, col: ColIndex) -> Side {
        if col.value() < self.center_col().value() {
            Side::Port
        } else {
            Side::Starboard
        }
    }

    #[inline]
    pub const fn contains(self, slot: SlotPosition) -> bool {
        slot.row().value() < self.rows && slot.col().value() < self.cols
    }

    #[inline]
    pub const fn row_major_index(self, slot: SlotPosition) -> usize {
        slot.row().value() * self.cols + slot.col().value()
    }

    /// All slot positions in row-major order.
    #[inline]
    pub fn iter_positions(self) -> impl Iterator<Item = SlotPosition> {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols).map(move |c| SlotPosition::new(RowIndex::new(r), ColIndex::new(c)))
        })
    }
}

impl Display for GridDims {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GridDims({}x{})", self.rows, self.cols)
    }
}
