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

use crate::{
    balance::BalanceAccumulator, config::EngineConfig, grid::DeckGrid, heatmap::HeatmapTracker,
};
use deck_balance_core::{
    BalanceVariable,
    grid::{Side, SlotPosition},
    weight::Weight,
};
use deck_balance_model::{
    container::Container,
    err::{CapacityExceededError, ContainerFault, InvalidContainerError, PlacementError},
    plan::{Placement, StowagePlan, StowageStats},
};
use std::{cmp::Ordering, collections::HashSet};
use tracing::{debug, instrument, trace};

#[inline]
fn cast<W: BalanceVariable>(v: usize) -> W {
    W::from_usize(v).expect("grid dimension fits the balance variable")
}

/// Seam for anything that turns a manifest into a stowage plan.
pub trait StowagePlanner<W: BalanceVariable = f64> {
    type PlanError;

    fn plan(&self, manifest: &[Container<W>]) -> Result<StowagePlan<W>, Self::PlanError>;
}

/// Greedy multi-factor placement engine.
///
/// Sorts the manifest heaviest first, then commits each container to the
/// highest-scoring free slot. Deterministic: the sort is stable and score
/// ties resolve to the first slot in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementEngine<W = f64>
where
    W: BalanceVariable,
{
    config: EngineConfig<W>,
}

impl<W: BalanceVariable> Default for PlacementEngine<W> {
    fn default() -> Self {
        Self::new(EngineConfig::canonical())
    }
}

impl<W: BalanceVariable> PlacementEngine<W> {
    #[inline]
    pub fn new(config: EngineConfig<W>) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig<W> {
        &self.config
    }

    /// Runs one full placement pass over `manifest`.
    ///
    /// Fails atomically before touching any state: an invalid batch or a
    /// manifest larger than the grid never yields a partial plan.
    #[instrument(skip(self, manifest), fields(containers = manifest.len()))]
    pub fn place(&self, manifest: &[Container<W>]) -> Result<StowagePlan<W>, PlacementError<W>> {
        self.validate(manifest)?;

        let dims = self.config.dims;
        if manifest.len() > dims.capacity() {
            return Err(CapacityExceededError::new(manifest.len(), dims).into());
        }

        // Heaviest first; the stable sort keeps input order among equal
        // weights. Weights are validated finite, so the comparison never
        // actually falls back to Equal.
        let mut order: Vec<&Container<W>> = manifest.iter().collect();
        order.sort_by(|a, b| {
            b.weight()
                .partial_cmp(&a.weight())
                .unwrap_or(Ordering::Equal)
        });

        let mut grid = DeckGrid::new(dims);
        let mut heatmap = HeatmapTracker::new(dims, self.config.heat_spread_factor);
        let mut balance = BalanceAccumulator::new();
        let mut placements = Vec::with_capacity(order.len());

        let count = order.len();
        for (index, container) in order.into_iter().enumerate() {
            let weight = container.weight();
            let mut best: Option<(SlotPosition, W)> = None;
            for slot in grid.free_slots() {
                let score = self.score_slot(slot, weight, &balance, &heatmap, index, count);
                // Strict comparison keeps the first row-major maximum.
                if best.is_none_or(|(_, s)| score > s) {
                    best = Some((slot, score));
                }
            }
            let (slot, score) = best.expect("capacity checked, a free slot exists");

            let side = dims.side_of(slot.col());
            grid.place(slot, container.id())
                .expect("chosen slot is free and in bounds");
            balance.add(side, weight);
            heatmap.record(slot, weight);
            trace!(%container, %slot, %side, score = %score, "placed container");
            placements.push(Placement::new(container.clone(), slot, side));
        }

        let overload = heatmap.any_above(self.config.overload_threshold);
        let stats = StowageStats::compute(balance.port(), balance.starboard(), overload);
        debug!(
            placed = placements.len(),
            balance_ratio = %stats.balance_ratio(),
            overload,
            "placement run complete"
        );

        Ok(StowagePlan::new(
            dims,
            grid.into_slots(),
            heatmap.into_cells(),
            placements,
            stats,
        ))
    }

    fn validate(&self, manifest: &[Container<W>]) -> Result<(), PlacementError<W>> {
        let mut faults = Vec::new();
        let mut seen = HashSet::with_capacity(manifest.len());
        for container in manifest {
            let weight = container.weight();
            if !weight.value().is_finite() {
                faults.push(ContainerFault::NonFiniteWeight {
                    id: container.id(),
                    weight,
                });
            } else if weight.value() <= W::zero() {
                faults.push(ContainerFault::NonPositiveWeight {
                    id: container.id(),
                    weight,
                });
            }
            if !seen.insert(container.id()) {
                faults.push(ContainerFault::DuplicateId { id: container.id() });
            }
        }
        if faults.is_empty() {
            Ok(())
        } else {
            Err(InvalidContainerError::new(faults).into())
        }
    }

    /// Composite score of placing `weight` at `slot`, higher is better.
    fn score_slot(
        &self,
        slot: SlotPosition,
        weight: Weight<W>,
        balance: &BalanceAccumulator<W>,
        heatmap: &HeatmapTracker<W>,
        index: usize,
        count: usize,
    ) -> W {
        let scoring = &self.config.scoring;
        let dims = self.config.dims;
        let side = dims.side_of(slot.col());

        // How even the sides would be with this container committed.
        let (port, starboard) = balance.with_added(side, weight);
        let balance_term = match port.abs_diff(starboard).ratio(port + starboard) {
            Some(skew) => (W::one() - skew) * scoring.balance_scale,
            None => W::zero(),
        };

        let center_distance = slot.col().abs_distance(dims.center_col());
        let center_term = cast::<W>(dims.cols() - center_distance) * scoring.center_scale;

        let stability_term = cast::<W>(dims.rows() - slot.row().value()) * scoring.stability_scale;

        let density_term = -(heatmap.heat(slot).value() * scoring.density_scale);

        // First half of the placement order favors port, second half
        // starboard, so neither side fills up front.
        let first_half = index * 2 < count;
        let alternation_term = match (first_half, side) {
            (true, Side::Port) | (false, Side::Starboard) => scoring.alternation_bias,
            _ => -scoring.alternation_bias,
        };

        balance_term + center_term + stability_term + density_term + alternation_term
    }
}

impl<W: BalanceVariable> StowagePlanner<W> for PlacementEngine<W> {
    type PlanError = PlacementError<W>;

    fn plan(&self, manifest: &[Container<W>]) -> Result<StowagePlan<W>, Self::PlanError> {
        self.place(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_balance_core::grid::{ColIndex, GridDims, RowIndex};
    use deck_balance_model::{
        generator::{ManifestGenConfig, ManifestGenerator},
        id::ContainerId,
    };

    fn container(id: u64, weight: f64) -> Container {
        Container::new(
            ContainerId::new(id),
            format!("CNT{:04}", id),
            Weight::new(weight),
        )
    }

    fn slot(r: usize, c: usize) -> SlotPosition {
        SlotPosition::new(RowIndex::new(r), ColIndex::new(c))
    }

    fn generated_manifest(amount: usize, seed: u64) -> Vec<Container> {
        let config =
            ManifestGenConfig::new(amount, Weight::new(1_000.0), Weight::new(50_000.0), seed)
                .unwrap();
        ManifestGenerator::new(config).generate()
    }

    #[test]
    fn test_every_container_placed_in_distinct_slots() {
        let manifest = generated_manifest(84, 3);
        let engine = PlacementEngine::default();
        let plan = engine.place(&manifest).unwrap();

        assert_eq!(plan.placements().len(), manifest.len());

        let mut slots = HashSet::new();
        for p in plan.placements() {
            assert!(slots.insert(plan.dims().row_major_index(p.slot())));
        }

        let placed_ids: HashSet<_> = plan.placements().iter().map(|p| p.container().id()).collect();
        for c in &manifest {
            assert!(placed_ids.contains(&c.id()));
        }
    }

    #[test]
    fn test_weight_conservation() {
        let manifest = generated_manifest(30, 11);
        let engine = PlacementEngine::default();
        let plan = engine.place(&manifest).unwrap();
        let stats = plan.stats();

        let side_sum = stats.port_weight() + stats.starboard_weight();
        assert!((side_sum - stats.total_weight()).value().abs() < 1e-9);

        let manifest_total: Weight = manifest.iter().map(|c| c.weight()).sum();
        assert!((stats.total_weight() - manifest_total).value().abs() < 1e-6);
    }

    #[test]
    fn test_balance_ratio_bounds() {
        let engine = PlacementEngine::default();
        for seed in 0..8 {
            let manifest = generated_manifest(40, seed);
            let plan = engine.place(&manifest).unwrap();
            let ratio = plan.stats().balance_ratio();
            assert!((0.0..=1.0).contains(&ratio), "ratio {ratio} out of bounds");
        }
    }

    #[test]
    fn test_identical_inputs_give_identical_plans() {
        let manifest = generated_manifest(50, 21);
        let engine = PlacementEngine::default();
        let a = engine.place(&manifest).unwrap();
        let b = engine.place(&manifest).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_heaviest_container_is_placed_first() {
        let manifest = vec![container(1, 1_000.0), container(2, 3_000.0)];
        let engine = PlacementEngine::default();
        let plan = engine.place(&manifest).unwrap();

        assert_eq!(plan.placements()[0].container().id(), ContainerId::new(2));
        assert_eq!(plan.placements()[1].container().id(), ContainerId::new(1));
    }

    #[test]
    fn test_equal_weights_keep_input_order() {
        let manifest = vec![
            container(7, 2_000.0),
            container(3, 2_000.0),
            container(9, 2_000.0),
        ];
        let engine = PlacementEngine::default();
        let plan = engine.place(&manifest).unwrap();

        let ids: Vec<_> = plan
            .placements()
            .iter()
            .map(|p| p.container().id().value())
            .collect();
        assert_eq!(ids, vec![7, 3, 9]);
    }

    #[test]
    fn test_capacity_exceeded_fails_whole_call() {
        let config = EngineConfig::canonical().with_dims(GridDims::new(1, 1));
        let engine = PlacementEngine::new(config);
        let manifest = vec![container(1, 1_000.0), container(2, 2_000.0)];

        let err = engine.place(&manifest).unwrap_err();
        match err {
            PlacementError::CapacityExceeded(e) => {
                assert_eq!(e.container_count(), 2);
                assert_eq!(e.capacity(), 1);
            }
            other => panic!("expected CapacityExceeded, got {other:?}"),
        }
    }

    #[test]
    fn test_single_container_ratio_is_zero() {
        let engine = PlacementEngine::default();
        let plan = engine.place(&[container(1, 12_345.0)]).unwrap();
        assert_eq!(plan.stats().balance_ratio(), 0.0);
        assert_eq!(plan.stats().total_weight().value(), 12_345.0);
    }

    #[test]
    fn test_first_placement_is_port_of_center_top_row() {
        // Balance is a wash for the very first container, so center
        // preference plus the port-favoring alternation bias decide.
        let engine = PlacementEngine::default();
        let plan = engine.place(&[container(1, 5_000.0)]).unwrap();

        let p = &plan.placements()[0];
        assert_eq!(p.slot(), slot(0, 6));
        assert_eq!(p.side(), Side::Port);
    }

    #[test]
    fn test_two_equal_containers_balance_out() {
        let engine = PlacementEngine::default();
        let plan = engine
            .place(&[container(1, 4_000.0), container(2, 4_000.0)])
            .unwrap();

        assert_eq!(plan.stats().balance_ratio(), 1.0);
        let sides: Vec<_> = plan.placements().iter().map(|p| p.side()).collect();
        assert_eq!(sides[0], sides[1].opposite());
    }

    #[test]
    fn test_overload_flag_set_for_heavy_cell() {
        let engine = PlacementEngine::default();
        let plan = engine.place(&[container(1, 9_000.0)]).unwrap();
        assert!(plan.stats().overload_detected());
    }

    #[test]
    fn test_overload_flag_clear_for_light_load() {
        let engine = PlacementEngine::default();
        let plan = engine
            .place(&[container(1, 1_000.0), container(2, 1_500.0)])
            .unwrap();
        assert!(!plan.stats().overload_detected());
    }

    #[test]
    fn test_rejects_non_positive_weights() {
        let engine = PlacementEngine::default();
        let manifest = vec![container(1, 1_000.0), container(2, 0.0), container(3, -4.0)];

        let err = engine.place(&manifest).unwrap_err();
        match err {
            PlacementError::InvalidContainer(e) => {
                let ids: Vec<_> = e.faults().iter().map(|f| f.id().value()).collect();
                assert_eq!(ids, vec![2, 3]);
            }
            other => panic!("expected InvalidContainer, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_non_finite_weights() {
        let engine = PlacementEngine::default();
        let manifest = vec![container(1, f64::NAN), container(2, f64::INFINITY)];

        let err = engine.place(&manifest).unwrap_err();
        match err {
            PlacementError::InvalidContainer(e) => {
                assert_eq!(e.faults().len(), 2);
                assert!(e
                    .faults()
                    .iter()
                    .all(|f| matches!(f, ContainerFault::NonFiniteWeight { .. })));
            }
            other => panic!("expected InvalidContainer, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let engine = PlacementEngine::default();
        let manifest = vec![container(1, 1_000.0), container(1, 2_000.0)];

        let err = engine.place(&manifest).unwrap_err();
        match err {
            PlacementError::InvalidContainer(e) => {
                assert_eq!(e.faults().len(), 1);
                assert!(matches!(
                    e.faults()[0],
                    ContainerFault::DuplicateId { id } if id == ContainerId::new(1)
                ));
            }
            other => panic!("expected InvalidContainer, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_manifest_gives_empty_balanced_plan() {
        let engine: PlacementEngine<f64> = PlacementEngine::default();
        let plan = engine.place(&[]).unwrap();

        assert!(plan.placements().is_empty());
        assert_eq!(plan.stats().balance_ratio(), 1.0);
        assert!(plan.stats().total_weight().is_zero());
        assert!(!plan.stats().overload_detected());
    }

    #[test]
    fn test_full_capacity_fill() {
        let config = EngineConfig::canonical().with_dims(GridDims::new(2, 2));
        let engine = PlacementEngine::new(config);
        let manifest = vec![
            container(1, 1_000.0),
            container(2, 2_000.0),
            container(3, 3_000.0),
            container(4, 4_000.0),
        ];

        let plan = engine.place(&manifest).unwrap();
        assert_eq!(plan.placements().len(), 4);
        for position in plan.dims().iter_positions() {
            assert!(plan.occupant(position).is_some());
        }
    }

    #[test]
    fn test_reduced_profile_runs_under_same_harness() {
        let manifest = generated_manifest(40, 5);
        let engine = PlacementEngine::new(EngineConfig::reduced());
        let plan = engine.place(&manifest).unwrap();

        assert_eq!(plan.placements().len(), manifest.len());
        let ratio = plan.stats().balance_ratio();
        assert!((0.0..=1.0).contains(&ratio));
    }

    #[test]
    fn test_profiles_are_independent_configurations() {
        let manifest = generated_manifest(30, 9);
        let canonical = PlacementEngine::new(EngineConfig::canonical())
            .place(&manifest)
            .unwrap();
        let reduced = PlacementEngine::new(EngineConfig::reduced())
            .place(&manifest)
            .unwrap();

        // Same invariants, different scoring policies.
        assert_eq!(canonical.placements().len(), reduced.placements().len());
    }

    #[test]
    fn test_planner_trait_delegates_to_place() {
        let engine = PlacementEngine::default();
        let manifest = vec![container(1, 2_500.0)];
        let via_trait = StowagePlanner::plan(&engine, &manifest).unwrap();
        let direct = engine.place(&manifest).unwrap();
        assert_eq!(via_trait, direct);
    }
}
