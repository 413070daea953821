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

use deck_balance_core::{
    BalanceVariable,
    grid::{ColIndex, GridDims, RowIndex, SlotPosition},
    weight::Weight,
};

/// Accumulated weight-density signal per slot.
///
/// Not an occupancy map: recording a placement adds the full weight to
/// the placed cell and `weight * spread_factor` to every in-bounds Moore
/// neighbor, so cells adjacent to heavy placements carry partial heat
/// even while empty.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapTracker<W = f64>
where
    W: BalanceVariable,
{
    dims: GridDims,
    cells: Vec<Weight<W>>,
    spread_factor: W,
}

impl<W: BalanceVariable> HeatmapTracker<W> {
    pub fn new(dims: GridDims, spread_factor: W) -> Self {
        Self {
            dims,
            cells: vec![Weight::zero(); dims.capacity()],
            spread_factor,
        }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Heat of a slot; zero outside the grid.
    #[inline]
    pub fn heat(&self, slot: SlotPosition) -> Weight<W> {
        if !self.dims.contains(slot) {
            return Weight::zero();
        }
        self.cells[self.dims.row_major_index(slot)]
    }

    /// Records a placement: full weight on the cell, spread on the
    /// neighborhood, clamped at the grid edges.
    pub fn record(&mut self, slot: SlotPosition, weight: Weight<W>) {
        debug_assert!(self.dims.contains(slot));
        let idx = self.dims.row_major_index(slot);
        self.cells[idx] += weight;

        let spread = weight * self.spread_factor;
        let r = slot.row().value() as isize;
        let c = slot.col().value() as isize;
        for dr in -1..=1isize {
            for dc in -1..=1isize {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (nr, nc) = (r + dr, c + dc);
                if nr < 0 || nc < 0 {
                    continue;
                }
                let neighbor =
                    SlotPosition::new(RowIndex::new(nr as usize), ColIndex::new(nc as usize));
                if self.dims.contains(neighbor) {
                    self.cells[self.dims.row_major_index(neighbor)] += spread;
                }
            }
        }
    }

    pub fn max_heat(&self) -> Weight<W> {
        self.cells
            .iter()
            .copied()
            .fold(Weight::zero(), |acc, h| acc.max(h))
    }

    /// True if any cell's heat strictly exceeds the threshold.
    pub fn any_above(&self, threshold: Weight<W>) -> bool {
        self.cells.iter().any(|h| *h > threshold)
    }

    #[inline]
    pub fn into_cells(self) -> Vec<Weight<W>> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(r: usize, c: usize) -> SlotPosition {
        SlotPosition::new(RowIndex::new(r), ColIndex::new(c))
    }

    #[test]
    fn test_record_spreads_to_moore_neighborhood() {
        let mut heat = HeatmapTracker::new(GridDims::new(3, 3), 0.1);
        heat.record(slot(1, 1), Weight::new(1_000.0));

        assert_eq!(heat.heat(slot(1, 1)).value(), 1_000.0);
        for (r, c) in [
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
            (2, 2),
        ] {
            assert_eq!(heat.heat(slot(r, c)).value(), 100.0, "neighbor ({r},{c})");
        }
    }

    #[test]
    fn test_record_clamps_at_corner() {
        let mut heat = HeatmapTracker::new(GridDims::new(3, 3), 0.1);
        heat.record(slot(0, 0), Weight::new(1_000.0));

        assert_eq!(heat.heat(slot(0, 0)).value(), 1_000.0);
        assert_eq!(heat.heat(slot(0, 1)).value(), 100.0);
        assert_eq!(heat.heat(slot(1, 0)).value(), 100.0);
        assert_eq!(heat.heat(slot(1, 1)).value(), 100.0);
        assert_eq!(heat.heat(slot(2, 2)).value(), 0.0);
    }

    #[test]
    fn test_heat_accumulates_across_records() {
        let mut heat = HeatmapTracker::new(GridDims::new(2, 2), 0.1);
        heat.record(slot(0, 0), Weight::new(1_000.0));
        heat.record(slot(0, 1), Weight::new(2_000.0));

        // 1000 placed + 0.1 * 2000 spread from the neighbor.
        assert_eq!(heat.heat(slot(0, 0)).value(), 1_200.0);
        assert_eq!(heat.max_heat().value(), 2_100.0);
    }

    #[test]
    fn test_any_above_is_strict() {
        let mut heat = HeatmapTracker::new(GridDims::new(1, 1), 0.1);
        heat.record(slot(0, 0), Weight::new(8_000.0));
        assert!(!heat.any_above(Weight::new(8_000.0)));
        assert!(heat.any_above(Weight::new(7_999.0)));
    }
}
