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

use deck_balance_core::{BalanceVariable, grid::Side, weight::Weight};

/// Running port/starboard weight totals of an in-progress run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceAccumulator<W = f64>
where
    W: BalanceVariable,
{
    port: Weight<W>,
    starboard: Weight<W>,
}

impl<W: BalanceVariable> Default for BalanceAccumulator<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: BalanceVariable> BalanceAccumulator<W> {
    #[inline]
    pub fn new() -> Self {
        Self {
            port: Weight::zero(),
            starboard: Weight::zero(),
        }
    }

    #[inline]
    pub fn port(&self) -> Weight<W> {
        self.port
    }

    #[inline]
    pub fn starboard(&self) -> Weight<W> {
        self.starboard
    }

    #[inline]
    pub fn total(&self) -> Weight<W> {
        self.port + self.starboard
    }

    #[inline]
    pub fn add(&mut self, side: Side, weight: Weight<W>) {
        match side {
            Side::Port => self.port += weight,
            Side::Starboard => self.starboard += weight,
        }
    }

    /// Side totals as they would look with `weight` added to `side`,
    /// without committing anything.
    #[inline]
    pub fn with_added(&self, side: Side, weight: Weight<W>) -> (Weight<W>, Weight<W>) {
        match side {
            Side::Port => (self.port + weight, self.starboard),
            Side::Starboard => (self.port, self.starboard + weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulator_tracks_sides() {
        let mut acc = BalanceAccumulator::new();
        acc.add(Side::Port, Weight::new(3_000.0));
        acc.add(Side::Starboard, Weight::new(1_000.0));
        acc.add(Side::Port, Weight::new(500.0));

        assert_eq!(acc.port().value(), 3_500.0);
        assert_eq!(acc.starboard().value(), 1_000.0);
        assert_eq!(acc.total().value(), 4_500.0);
    }

    #[test]
    fn test_with_added_does_not_commit() {
        let mut acc = BalanceAccumulator::new();
        acc.add(Side::Port, Weight::new(2_000.0));

        let (p, s) = acc.with_added(Side::Starboard, Weight::new(1_000.0));
        assert_eq!(p.value(), 2_000.0);
        assert_eq!(s.value(), 1_000.0);
        assert_eq!(acc.starboard().value(), 0.0);
    }
}
