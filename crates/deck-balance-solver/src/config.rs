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

use deck_balance_core::{BalanceVariable, grid::GridDims, weight::Weight};

#[inline]
fn constant<W: BalanceVariable>(v: f64) -> W {
    W::from_f64(v).expect("scoring constant fits the balance variable")
}

/// Weights of the five scoring terms.
///
/// The canonical profile is the full five-term policy; `reduced()` is the
/// attested two-term variant (balance plus unscaled density penalty) kept
/// reproducible as configuration rather than as a second code path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights<W = f64>
where
    W: BalanceVariable,
{
    /// Multiplier on the normalized balance term.
    pub balance_scale: W,
    /// Multiplier on the center-column proximity term.
    pub center_scale: W,
    /// Multiplier on the low-row stability term.
    pub stability_scale: W,
    /// Multiplier on the accumulated heat penalty.
    pub density_scale: W,
    /// Magnitude of the alternating port/starboard bias.
    pub alternation_bias: W,
}

impl<W: BalanceVariable> ScoringWeights<W> {
    pub fn canonical() -> Self {
        Self {
            balance_scale: constant(100.0),
            center_scale: constant(2.0),
            stability_scale: constant(3.0),
            density_scale: constant(1.0 / 1000.0),
            alternation_bias: constant(10.0),
        }
    }

    pub fn reduced() -> Self {
        Self {
            balance_scale: constant(100.0),
            center_scale: W::zero(),
            stability_scale: W::zero(),
            density_scale: W::one(),
            alternation_bias: W::zero(),
        }
    }
}

impl<W: BalanceVariable> Default for ScoringWeights<W> {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Full configuration surface of a placement run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig<W = f64>
where
    W: BalanceVariable,
{
    pub dims: GridDims,
    /// Per-cell heat above which the advisory overload flag trips.
    pub overload_threshold: Weight<W>,
    /// Fraction of a placed weight bled into each neighboring cell.
    pub heat_spread_factor: W,
    pub scoring: ScoringWeights<W>,
}

impl<W: BalanceVariable> EngineConfig<W> {
    pub fn canonical() -> Self {
        Self {
            dims: GridDims::new(6, 14),
            overload_threshold: Weight::new(constant(8_000.0)),
            heat_spread_factor: constant(0.1),
            scoring: ScoringWeights::canonical(),
        }
    }

    pub fn reduced() -> Self {
        Self {
            overload_threshold: Weight::new(constant(5_000.0)),
            scoring: ScoringWeights::reduced(),
            ..Self::canonical()
        }
    }

    pub fn with_dims(mut self, dims: GridDims) -> Self {
        self.dims = dims;
        self
    }
}

impl<W: BalanceVariable> Default for EngineConfig<W> {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_matches_observed_constants() {
        let cfg = EngineConfig::<f64>::canonical();
        assert_eq!(cfg.dims, GridDims::new(6, 14));
        assert_eq!(cfg.overload_threshold.value(), 8_000.0);
        assert_eq!(cfg.heat_spread_factor, 0.1);
        assert_eq!(cfg.scoring.balance_scale, 100.0);
        assert_eq!(cfg.scoring.center_scale, 2.0);
        assert_eq!(cfg.scoring.stability_scale, 3.0);
        assert_eq!(cfg.scoring.density_scale, 0.001);
        assert_eq!(cfg.scoring.alternation_bias, 10.0);
    }

    #[test]
    fn test_reduced_profile_zeroes_extra_terms() {
        let cfg = EngineConfig::<f64>::reduced();
        assert_eq!(cfg.overload_threshold.value(), 5_000.0);
        assert_eq!(cfg.scoring.center_scale, 0.0);
        assert_eq!(cfg.scoring.stability_scale, 0.0);
        assert_eq!(cfg.scoring.alternation_bias, 0.0);
        assert_eq!(cfg.scoring.density_scale, 1.0);
    }

    #[test]
    fn test_with_dims() {
        let cfg = EngineConfig::<f64>::canonical().with_dims(GridDims::new(1, 1));
        assert_eq!(cfg.dims.capacity(), 1);
    }
}
