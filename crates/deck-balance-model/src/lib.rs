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

//! # Deck Balance Model (`deck-balance-model`)
//!
//! Domain model for deck stowage load balancing. It builds on the
//! type-safe primitives of `deck-balance-core` to describe the input
//! manifest, the error taxonomy, and the stowage plan the engine hands
//! back to rendering and reporting collaborators.
//!
//! ## Key Data Structures
//!
//! - **`ContainerId`**: Unique identifier of a cargo container.
//!
//! - **`Container<W>`**: One weighted container: id, display number, and
//!   a positive weight. Immutable once it enters the engine.
//!
//! - **`PlacementError<W>`**: Whole-batch failures. A batch is either
//!   placed completely or rejected completely; there is no partial plan.
//!
//! - **`StowagePlan<W>`**: The sole engine output: occupancy and heat per
//!   slot, the ordered placements, and the derived [`StowageStats`]
//!   (per-side weights, balance ratio, overload flag). Loading
//!   instructions are derived from it on demand.
//!
//! - **`ManifestGenerator`**: Seeded random manifests for benchmarks and
//!   tests, with weights in the observed 1,000 to 50,000 unit range.
//!
//! ## Genericity
//!
//! All weight-carrying structs are generic over the floating point weight
//! primitive `W` (default `f64`), mirroring the numeric genericity of the
//! core crate.
//!
//! [`StowageStats`]: crate::plan::StowageStats

pub mod container;
pub mod err;
pub mod generator;
pub mod id;
pub mod plan;

pub mod prelude {
    pub use crate::container::Container;
    pub use crate::err::{
        CapacityExceededError, ContainerFault, InvalidContainerError, PlacementError,
    };
    pub use crate::generator::{ManifestGenConfig, ManifestGenerator};
    pub use crate::id::ContainerId;
    pub use crate::plan::{Placement, StowInstruction, StowagePlan, StowageStats};
}
