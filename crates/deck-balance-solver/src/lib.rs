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

//! Greedy deck stowage engine.
//!
//! Containers are placed heaviest first; every free slot is scored with a
//! weighted sum of balance, center preference, row stability, heat
//! density and side alternation terms, and ties resolve to the first
//! slot in row-major order. Each run is a pure function of the manifest
//! and the [`config::EngineConfig`]; nothing is cached between calls.

pub mod balance;
pub mod config;
pub mod engine;
pub mod grid;
pub mod heatmap;

pub mod prelude {
    pub use crate::balance::BalanceAccumulator;
    pub use crate::config::{EngineConfig, ScoringWeights};
    pub use crate::engine::{PlacementEngine, StowagePlanner};
    pub use crate::grid::DeckGrid;
    pub use crate::heatmap::HeatmapTracker;
}
