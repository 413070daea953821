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

use crate::id::ContainerId;
use deck_balance_core::{BalanceVariable, grid::GridDims, weight::Weight};
use std::fmt::Display;

/// The manifest holds more containers than the grid has slots.
///
/// Raised before any placement begins; the grid is never partially
/// mutated and no container is silently dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityExceededError {
    count: usize,
    dims: GridDims,
}

impl CapacityExceededError {
    #[inline]
    pub fn new(count: usize, dims: GridDims) -> Self {
        Self { count, dims }
    }

    #[inline]
    pub fn container_count(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.dims.capacity()
    }
}

impl Display for CapacityExceededError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Manifest of {} containers exceeds capacity {} of {}",
            self.count,
            self.dims.capacity(),
            self.dims
        )
    }
}

impl std::error::Error for CapacityExceededError {}

/// A single reason a container cannot enter the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContainerFault<W: BalanceVariable> {
    NonFiniteWeight { id: ContainerId, weight: Weight<W> },
    NonPositiveWeight { id: ContainerId, weight: Weight<W> },
    DuplicateId { id: ContainerId },
}

impl<W: BalanceVariable> ContainerFault<W> {
    #[inline]
    pub fn id(&self) -> ContainerId {
        match self {
            ContainerFault::NonFiniteWeight { id, .. } => *id,
            ContainerFault::NonPositiveWeight { id, .. } => *id,
            ContainerFault::DuplicateId { id } => *id,
        }
    }
}

impl<W: BalanceVariable> Display for ContainerFault<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerFault::NonFiniteWeight { id, weight } => {
                write!(f, "Container {} has non-finite weight {}", id, weight.value())
            }
            ContainerFault::NonPositiveWeight { id, weight } => {
                write!(
                    f,
                    "Container {} has non-positive weight {}",
                    id,
                    weight.value()
                )
            }
            ContainerFault::DuplicateId { id } => {
                write!(f, "Container id {} appears more than once", id)
            }
        }
    }
}

/// One or more containers failed validation; the whole batch is rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidContainerError<W: BalanceVariable> {
    faults: Vec<ContainerFault<W>>,
}

impl<W: BalanceVariable> InvalidContainerError<W> {
    #[inline]
    pub fn new(faults: Vec<ContainerFault<W>>) -> Self {
        Self { faults }
    }

    #[inline]
    pub fn faults(&self) -> &[ContainerFault<W>] {
        &self.faults
    }
}

impl<W: BalanceVariable> Display for InvalidContainerError<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid containers in manifest: ")?;
        for (i, fault) in self.faults.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", fault)?;
        }
        Ok(())
    }
}

impl<W: BalanceVariable> std::error::Error for InvalidContainerError<W> {}

/// Whole-call failure of a placement run.
#[derive(Debug, Clone, PartialEq)]
pub enum PlacementError<W: BalanceVariable = f64> {
    CapacityExceeded(CapacityExceededError),
    InvalidContainer(InvalidContainerError<W>),
}

impl<W: BalanceVariable> Display for PlacementError<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::CapacityExceeded(e) => write!(f, "{e}"),
            PlacementError::InvalidContainer(e) => write!(f, "{e}"),
        }
    }
}

impl<W: BalanceVariable> std::error::Error for PlacementError<W> {}

impl<W: BalanceVariable> From<CapacityExceededError> for PlacementError<W> {
    fn from(value: CapacityExceededError) -> Self {
        PlacementError::CapacityExceeded(value)
    }
}

impl<W: BalanceVariable> From<InvalidContainerError<W>> for PlacementError<W> {
    fn from(value: InvalidContainerError<W>) -> Self {
        PlacementError::InvalidContainer(value)
    }
}
