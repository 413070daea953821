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

use deck_balance_core::grid::{GridDims, SlotPosition};
use deck_balance_model::id::ContainerId;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotOutOfBoundsError {
    slot: SlotPosition,
    dims: GridDims,
}

impl SlotOutOfBoundsError {
    #[inline]
    pub fn new(slot: SlotPosition, dims: GridDims) -> Self {
        Self { slot, dims }
    }

    #[inline]
    pub fn slot(&self) -> SlotPosition {
        self.slot
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }
}

impl Display for SlotOutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is outside {}", self.slot, self.dims)
    }
}

impl std::error::Error for SlotOutOfBoundsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotOccupiedError {
    slot: SlotPosition,
    occupant: ContainerId,
}

impl SlotOccupiedError {
    #[inline]
    pub fn new(slot: SlotPosition, occupant: ContainerId) -> Self {
        Self { slot, occupant }
    }

    #[inline]
    pub fn slot(&self) -> SlotPosition {
        self.slot
    }

    #[inline]
    pub fn occupant(&self) -> ContainerId {
        self.occupant
    }
}

impl Display for SlotOccupiedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is already occupied by container {}",
            self.slot, self.occupant
        )
    }
}

impl std::error::Error for SlotOccupiedError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GridPlaceError {
    OutOfBounds(SlotOutOfBoundsError),
    Occupied(SlotOccupiedError),
}

impl Display for GridPlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridPlaceError::OutOfBounds(e) => write!(f, "{e}"),
            GridPlaceError::Occupied(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GridPlaceError {}

impl From<SlotOutOfBoundsError> for GridPlaceError {
    fn from(value: SlotOutOfBoundsError) -> Self {
        GridPlaceError::OutOfBounds(value)
    }
}

impl From<SlotOccupiedError> for GridPlaceError {
    fn from(value: SlotOccupiedError) -> Self {
        GridPlaceError::Occupied(value)
    }
}

/// Occupancy state of the deck grid: each slot empty or holding one
/// container id.
///
/// `free_slots` enumerates in row-major order; the engine's score
/// tie-break depends on that order and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckGrid {
    dims: GridDims,
    slots: Vec<Option<ContainerId>>,
}

impl DeckGrid {
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            slots: vec![None; dims.capacity()],
        }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// True for in-bounds slots with no occupant.
    #[inline]
    pub fn is_free(&self, slot: SlotPosition) -> bool {
        self.dims.contains(slot) && self.slots[self.dims.row_major_index(slot)].is_none()
    }

    #[inline]
    pub fn occupant(&self, slot: SlotPosition) -> Option<ContainerId> {
        if !self.dims.contains(slot) {
            return None;
        }
        self.slots[self.dims.row_major_index(slot)]
    }

    pub fn place(&mut self, slot: SlotPosition, id: ContainerId) -> Result<(), GridPlaceError> {
        if !self.dims.contains(slot) {
            return Err(SlotOutOfBoundsError::new(slot, self.dims).into());
        }
        let idx = self.dims.row_major_index(slot);
        if let Some(occupant) = self.slots[idx] {
            return Err(SlotOccupiedError::new(slot, occupant).into());
        }
        self.slots[idx] = Some(id);
        Ok(())
    }

    /// Free slots in row-major order, lazily.
    pub fn free_slots(&self) -> impl Iterator<Item = SlotPosition> + '_ {
        self.dims.iter_positions().filter(|p| self.is_free(*p))
    }

    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    #[inline]
    pub fn into_slots(self) -> Vec<Option<ContainerId>> {
        self.slots
    }
}
