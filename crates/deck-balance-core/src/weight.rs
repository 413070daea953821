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

use crate::BalanceVariable;
use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, AddAssign, Mul, Sub, SubAssign},
};

/// A weight in cargo weight units (kilograms in the observed data).
///
/// Thin newtype over a [`BalanceVariable`]; no `Eq`/`Ord`/`Hash` since the
/// underlying primitive is floating point.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
pub struct Weight<W = f64>(W);

impl<W: BalanceVariable> Weight<W> {
    #[inline]
    pub fn new(value: W) -> Self {
        Weight(value)
    }

    #[inline]
    pub fn zero() -> Self {
        Weight(W::zero())
    }

    #[inline]
    pub fn value(self) -> W {
        self.0
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == W::zero()
    }

    /// True for weights the engine accepts: finite and strictly positive.
    #[inline]
    pub fn is_loadable(self) -> bool {
        self.0.is_finite() && self.0 > W::zero()
    }

    #[inline]
    pub fn abs_diff(self, other: Weight<W>) -> Weight<W> {
        Weight((self.0 - other.0).abs())
    }

    #[inline]
    pub fn min(self, other: Weight<W>) -> Weight<W> {
        Weight(self.0.min(other.0))
    }

    #[inline]
    pub fn max(self, other: Weight<W>) -> Weight<W> {
        Weight(self.0.max(other.0))
    }

    /// `self / divisor`, or `None` when the divisor is zero.
    #[inline]
    pub fn ratio(self, divisor: Weight<W>) -> Option<W> {
        if divisor.0 == W::zero() {
            None
        } else {
            Some(self.0 / divisor.0)
        }
    }
}

impl<W: BalanceVariable> Display for Weight<W> {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Weight({})", self.0)
    }
}

impl<W: BalanceVariable> From<W> for Weight<W> {
    #[inline]
    fn from(value: W) -> Self {
        Weight(value)
    }
}

impl<W: BalanceVariable> Add for Weight<W> {
    type Output = Weight<W>;

    #[inline]
    fn add(self, rhs: Weight<W>) -> Self::Output {
        Weight(self.0 + rhs.0)
    }
}

impl<W: BalanceVariable> AddAssign for Weight<W> {
    #[inline]
    fn add_assign(&mut self, rhs: Weight<W>) {
        self.0 = self.0 + rhs.0;
    }
}

impl<W: BalanceVariable> Sub for Weight<W> {
    type Output = Weight<W>;

    #[inline]
    fn sub(self, rhs: Weight<W>) -> Self::Output {
        Weight(self.0 - rhs.0)
    }
}

impl<W: BalanceVariable> SubAssign for Weight<W> {
    #[inline]
    fn sub_assign(&mut self, rhs: Weight<W>) {
        self.0 = self.0 - rhs.0;
    }
}

impl<W: BalanceVariable> Mul<W> for Weight<W> {
    type Output = Weight<W>;

    #[inline]
    fn mul(self, rhs: W) -> Self::Output {
        Weight(self.0 * rhs)
    }
}

impl<W: BalanceVariable> Sum for Weight<W> {
    #[inline]
    fn sum<I: Iterator<Item = Weight<W>>>(iter: I) -> Self {
        iter.fold(Weight::zero(), |acc, w| acc + w)
    }
}
