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
use deck_balance_core::{BalanceVariable, weight::Weight};
use std::fmt::Display;

/// One cargo container awaiting a deck slot.
///
/// The `number` is the human-facing label painted on the box; the `id` is
/// the opaque identity the engine tracks. Weight bounds (1,000 to 50,000
/// units in the observed data) are enforced by the intake layer; the
/// engine only rejects weights that are non-finite or not positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Container<W = f64>
where
    W: BalanceVariable,
{
    id: ContainerId,
    number: String,
    weight: Weight<W>,
}

impl<W: BalanceVariable> Container<W> {
    #[inline]
    pub fn new(id: ContainerId, number: impl Into<String>, weight: Weight<W>) -> Self {
        Self {
            id,
            number: number.into(),
            weight,
        }
    }

    #[inline]
    pub fn id(&self) -> ContainerId {
        self.id
    }

    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    #[inline]
    pub fn weight(&self) -> Weight<W> {
        self.weight
    }
}

impl<W: BalanceVariable> Display for Container<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Container({}, {}, {})",
            self.id,
            self.number,
            self.weight.value()
        )
    }
}
