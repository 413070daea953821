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
use deck_balance_core::{BalanceVariable, weight::Weight};
use rand::{SeedableRng, rngs::SmallRng};
use rand_distr::{Distribution, Uniform, uniform::SampleUniform};
use std::fmt::Display;

/// Configuration for random manifest generation.
///
/// Weight bounds default to the 1,000 to 50,000 unit range the intake
/// form enforces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManifestGenConfig<W = f64>
where
    W: BalanceVariable,
{
    amount: usize,
    min_weight: Weight<W>,
    max_weight: Weight<W>,
    seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightRangeError<W: BalanceVariable> {
    min: Weight<W>,
    max: Weight<W>,
}

impl<W: BalanceVariable> WeightRangeError<W> {
    #[inline]
    pub fn new(min: Weight<W>, max: Weight<W>) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn min(&self) -> Weight<W> {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Weight<W> {
        self.max
    }
}

impl<W: BalanceVariable> Display for WeightRangeError<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid weight range [{}, {}]: bounds must be loadable and ordered",
            self.min.value(),
            self.max.value()
        )
    }
}

impl<W: BalanceVariable> std::error::Error for WeightRangeError<W> {}

impl<W: BalanceVariable> ManifestGenConfig<W> {
    pub fn new(
        amount: usize,
        min_weight: Weight<W>,
        max_weight: Weight<W>,
        seed: u64,
    ) -> Result<Self, WeightRangeError<W>> {
        if !min_weight.is_loadable() || !max_weight.is_loadable() || max_weight < min_weight {
            return Err(WeightRangeError::new(min_weight, max_weight));
        }
        Ok(Self {
            amount,
            min_weight,
            max_weight,
            seed,
        })
    }

    #[inline]
    pub fn amount(&self) -> usize {
        self.amount
    }

    #[inline]
    pub fn min_weight(&self) -> Weight<W> {
        self.min_weight
    }

    #[inline]
    pub fn max_weight(&self) -> Weight<W> {
        self.max_weight
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl<W: BalanceVariable> Default for ManifestGenConfig<W> {
    fn default() -> Self {
        Self {
            amount: 20,
            min_weight: Weight::new(W::from_f64(1_000.0).expect("bound fits weight primitive")),
            max_weight: Weight::new(W::from_f64(50_000.0).expect("bound fits weight primitive")),
            seed: 42,
        }
    }
}

/// Seeded random manifest generator for benchmarks and tests.
///
/// Deterministic for a given config: same seed, same manifest.
pub struct ManifestGenerator<W = f64>
where
    W: BalanceVariable + SampleUniform,
{
    config: ManifestGenConfig<W>,
    rng: SmallRng,
    weight_distribution: Uniform<W>,
    next_id: u64,
}

impl<W> From<ManifestGenConfig<W>> for ManifestGenerator<W>
where
    W: BalanceVariable + SampleUniform,
{
    fn from(config: ManifestGenConfig<W>) -> Self {
        Self::new(config)
    }
}

impl<W> ManifestGenerator<W>
where
    W: BalanceVariable + SampleUniform,
{
    pub fn new(config: ManifestGenConfig<W>) -> Self {
        Self {
            weight_distribution: Uniform::new_inclusive(
                config.min_weight().value(),
                config.max_weight().value(),
            )
            .expect("valid [min_weight, max_weight]"),
            rng: SmallRng::seed_from_u64(config.seed()),
            config,
            next_id: 0,
        }
    }

    #[inline]
    fn fresh_id(&mut self) -> ContainerId {
        let id = self.next_id;
        self.next_id += 1;
        ContainerId::new(id)
    }

    /// Produces the next manifest of `amount` containers.
    pub fn generate(&mut self) -> Vec<Container<W>> {
        let mut manifest = Vec::with_capacity(self.config.amount());
        for _ in 0..self.config.amount() {
            let id = self.fresh_id();
            let number = format!("CNT{:04}", id.value() + 1);
            let weight = Weight::new(self.weight_distribution.sample(&mut self.rng).round());
            manifest.push(Container::new(id, number, weight));
        }
        manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_is_deterministic_per_seed() {
        let config = ManifestGenConfig::<f64>::default();
        let a = ManifestGenerator::new(config).generate();
        let b = ManifestGenerator::new(config).generate();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generator_respects_bounds_and_count() {
        let config =
            ManifestGenConfig::new(50, Weight::new(1_000.0), Weight::new(50_000.0), 7).unwrap();
        let manifest = ManifestGenerator::new(config).generate();
        assert_eq!(manifest.len(), 50);
        for c in &manifest {
            assert!(c.weight().value() >= 1_000.0);
            assert!(c.weight().value() <= 50_000.0);
        }
    }

    #[test]
    fn test_generator_ids_are_unique_and_sequential() {
        let config =
            ManifestGenConfig::new(10, Weight::new(1_000.0), Weight::new(2_000.0), 1).unwrap();
        let manifest = ManifestGenerator::new(config).generate();
        for (i, c) in manifest.iter().enumerate() {
            assert_eq!(c.id(), ContainerId::new(i as u64));
            assert_eq!(c.number(), format!("CNT{:04}", i + 1));
        }
    }

    #[test]
    fn test_config_rejects_inverted_range() {
        let err = ManifestGenConfig::new(5, Weight::new(5_000.0), Weight::new(1_000.0), 0);
        assert!(err.is_err());

        let err = ManifestGenConfig::new(5, Weight::new(0.0), Weight::new(1_000.0), 0);
        assert!(err.is_err());
    }
}
