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

use crate::{container::Container, id::ContainerId};
use deck_balance_core::{
    BalanceVariable,
    grid::{GridDims, Side, SlotPosition},
    weight::Weight,
};
use std::fmt::Display;

/// One committed placement decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<W = f64>
where
    W: BalanceVariable,
{
    container: Container<W>,
    slot: SlotPosition,
    side: Side,
}

impl<W: BalanceVariable> Placement<W> {
    #[inline]
    pub fn new(container: Container<W>, slot: SlotPosition, side: Side) -> Self {
        Self {
            container,
            slot,
            side,
        }
    }

    #[inline]
    pub fn container(&self) -> &Container<W> {
        &self.container
    }

    #[inline]
    pub fn slot(&self) -> SlotPosition {
        self.slot
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }
}

impl<W: BalanceVariable> Display for Placement<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {} [{}]", self.container, self.slot, self.side)
    }
}

/// Summary metrics derived from a finished placement run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StowageStats<W = f64>
where
    W: BalanceVariable,
{
    total_weight: Weight<W>,
    port_weight: Weight<W>,
    starboard_weight: Weight<W>,
    balance_ratio: W,
    overload_detected: bool,
}

impl<W: BalanceVariable> StowageStats<W> {
    /// Derives the stats from the per-side totals.
    ///
    /// The balance ratio is `min/max` of the side weights, pinned to 1.0
    /// when no weight was placed at all so that an empty run reads as
    /// perfectly balanced instead of dividing zero by zero.
    pub fn compute(port_weight: Weight<W>, starboard_weight: Weight<W>, overload: bool) -> Self {
        let total_weight = port_weight + starboard_weight;
        let balance_ratio = if total_weight.is_zero() {
            W::one()
        } else {
            port_weight
                .min(starboard_weight)
                .ratio(port_weight.max(starboard_weight))
                .unwrap_or(W::one())
        };
        Self {
            total_weight,
            port_weight,
            starboard_weight,
            balance_ratio,
            overload_detected: overload,
        }
    }

    #[inline]
    pub fn total_weight(&self) -> Weight<W> {
        self.total_weight
    }

    #[inline]
    pub fn port_weight(&self) -> Weight<W> {
        self.port_weight
    }

    #[inline]
    pub fn starboard_weight(&self) -> Weight<W> {
        self.starboard_weight
    }

    #[inline]
    pub fn balance_ratio(&self) -> W {
        self.balance_ratio
    }

    #[inline]
    pub fn overload_detected(&self) -> bool {
        self.overload_detected
    }
}

impl<W: BalanceVariable> Display for StowageStats<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let percent = self.balance_ratio * W::from_f64(100.0).unwrap_or(W::one());
        writeln!(f, "Stowage statistics:")?;
        writeln!(f, "  Balance ratio: {:.1}%", percent)?;
        writeln!(f, "  Total weight: {}", self.total_weight.value())?;
        writeln!(f, "  Port weight: {}", self.port_weight.value())?;
        writeln!(f, "  Starboard weight: {}", self.starboard_weight.value())?;
        write!(f, "  Overload detected: {}", self.overload_detected)
    }
}

/// One line of the human-readable loading sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StowInstruction {
    index: usize,
    container_number: String,
    slot: SlotPosition,
    side: Side,
}

impl StowInstruction {
    #[inline]
    pub fn new(
        index: usize,
        container_number: impl Into<String>,
        slot: SlotPosition,
        side: Side,
    ) -> Self {
        Self {
            index,
            container_number: container_number.into(),
            slot,
            side,
        }
    }

    /// 1-based position in the loading sequence.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn container_number(&self) -> &str {
        &self.container_number
    }

    #[inline]
    pub fn slot(&self) -> SlotPosition {
        self.slot
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }
}

impl Display for StowInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Rows and columns are 1-based on the printed plan.
        write!(
            f,
            "{}. Container {} -> Row {}, Col {} ({})",
            self.index,
            self.container_number,
            self.slot.row().value() + 1,
            self.slot.col().value() + 1,
            self.side
        )
    }
}

/// Complete result of a placement run.
///
/// Occupancy and heat are stored row-major per [`GridDims`]; placements
/// are in commit order (heaviest container first). Recomputed in full on
/// every engine call, never incrementally updated.
#[derive(Debug, Clone, PartialEq)]
pub struct StowagePlan<W = f64>
where
    W: BalanceVariable,
{
    dims: GridDims,
    slots: Vec<Option<ContainerId>>,
    heatmap: Vec<Weight<W>>,
    placements: Vec<Placement<W>>,
    stats: StowageStats<W>,
}

impl<W: BalanceVariable> StowagePlan<W> {
    #[inline]
    pub fn new(
        dims: GridDims,
        slots: Vec<Option<ContainerId>>,
        heatmap: Vec<Weight<W>>,
        placements: Vec<Placement<W>>,
        stats: StowageStats<W>,
    ) -> Self {
        Self {
            dims,
            slots,
            heatmap,
            placements,
            stats,
        }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn stats(&self) -> &StowageStats<W> {
        &self.stats
    }

    #[inline]
    pub fn placements(&self) -> &[Placement<W>] {
        &self.placements
    }

    /// Occupant of a slot, if any. Out-of-range slots read as empty.
    #[inline]
    pub fn occupant(&self, slot: SlotPosition) -> Option<ContainerId> {
        if !self.dims.contains(slot) {
            return None;
        }
        self.slots[self.dims.row_major_index(slot)]
    }

    /// Accumulated heat of a slot; zero outside the grid.
    #[inline]
    pub fn heat(&self, slot: SlotPosition) -> Weight<W> {
        if !self.dims.contains(slot) {
            return Weight::zero();
        }
        self.heatmap[self.dims.row_major_index(slot)]
    }

    #[inline]
    pub fn heatmap(&self) -> &[Weight<W>] {
        &self.heatmap
    }

    /// Ordered loading directives, one per placement, heaviest first.
    pub fn instructions(&self) -> Vec<StowInstruction> {
        self.placements
            .iter()
            .enumerate()
            .map(|(i, p)| StowInstruction::new(i + 1, p.container().number(), p.slot(), p.side()))
            .collect()
    }
}

impl<W: BalanceVariable> Display for StowagePlan<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Stowage plan for {}:", self.dims)?;
        for instruction in self.instructions() {
            writeln!(f, "{}", instruction)?;
        }
        writeln!(f)?;
        write!(f, "{}", self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_balance_core::grid::{ColIndex, RowIndex};

    fn slot(r: usize, c: usize) -> SlotPosition {
        SlotPosition::new(RowIndex::new(r), ColIndex::new(c))
    }

    #[test]
    fn test_stats_zero_weight_ratio_is_one() {
        let stats: StowageStats = StowageStats::compute(Weight::zero(), Weight::zero(), false);
        assert_eq!(stats.balance_ratio(), 1.0);
        assert!(stats.total_weight().is_zero());
    }

    #[test]
    fn test_stats_one_sided_ratio_is_zero() {
        let stats: StowageStats =
            StowageStats::compute(Weight::new(5_000.0), Weight::zero(), false);
        assert_eq!(stats.balance_ratio(), 0.0);
        assert_eq!(stats.total_weight().value(), 5_000.0);
    }

    #[test]
    fn test_stats_ratio_is_min_over_max() {
        let stats: StowageStats =
            StowageStats::compute(Weight::new(3_000.0), Weight::new(4_000.0), false);
        assert_eq!(stats.balance_ratio(), 0.75);
        let flipped: StowageStats =
            StowageStats::compute(Weight::new(4_000.0), Weight::new(3_000.0), false);
        assert_eq!(flipped.balance_ratio(), 0.75);
    }

    #[test]
    fn test_instruction_display_is_one_based() {
        let i = StowInstruction::new(3, "CNT0007", slot(1, 4), Side::Port);
        assert_eq!(format!("{}", i), "3. Container CNT0007 -> Row 2, Col 5 (PORT)");
    }

    #[test]
    fn test_plan_instructions_follow_placement_order() {
        let dims = GridDims::new(2, 2);
        let heavy = Container::new(ContainerId::new(1), "CNT0001", Weight::new(9_000.0));
        let light = Container::new(ContainerId::new(2), "CNT0002", Weight::new(1_000.0));

        let mut slots = vec![None; dims.capacity()];
        slots[dims.row_major_index(slot(0, 0))] = Some(heavy.id());
        slots[dims.row_major_index(slot(0, 1))] = Some(light.id());

        let placements = vec![
            Placement::new(heavy, slot(0, 0), Side::Port),
            Placement::new(light, slot(0, 1), Side::Starboard),
        ];
        let stats = StowageStats::compute(Weight::new(9_000.0), Weight::new(1_000.0), false);
        let plan = StowagePlan::new(dims, slots, vec![Weight::zero(); 4], placements, stats);

        let instructions = plan.instructions();
        assert_eq!(instructions.len(), 2);
        assert_eq!(instructions[0].index(), 1);
        assert_eq!(instructions[0].container_number(), "CNT0001");
        assert_eq!(instructions[1].index(), 2);
        assert_eq!(instructions[1].container_number(), "CNT0002");

        assert_eq!(plan.occupant(slot(0, 0)), Some(ContainerId::new(1)));
        assert_eq!(plan.occupant(slot(1, 1)), None);
        assert_eq!(plan.occupant(slot(5, 5)), None);
    }
}
