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

use deck_balance_core::weight::Weight;
use deck_balance_model::prelude::*;
use deck_balance_solver::{config::EngineConfig, engine::PlacementEngine};
use serde::Serialize;
use std::{fs::File, io::BufWriter, time::Instant};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();
}

#[derive(Debug, Clone, Serialize)]
struct InstanceInfo {
    idx: usize,
    seed: u64,
    rows: usize,
    cols: usize,
    container_count: usize,
    min_weight: f64,
    max_weight: f64,
}

#[derive(Debug, Clone, Serialize)]
struct ProfileResult {
    profile: String,
    balance_ratio: f64,
    total_weight: f64,
    port_weight: f64,
    starboard_weight: f64,
    overload_detected: bool,
    elapsed_us: u128,
}

#[derive(Debug, Clone, Serialize)]
struct RunResult {
    instance: InstanceInfo,
    canonical: ProfileResult,
    reduced: ProfileResult,
}

#[derive(Debug, Clone, Serialize)]
struct StowageReport {
    description: String,
    runs: Vec<RunResult>,
}

fn interpolate_u(val0: usize, val1: usize, step: usize, steps: usize) -> usize {
    if steps <= 1 {
        return val1;
    }
    val0 + (val1 - val0) * step / (steps - 1)
}

fn run_profile(
    name: &str,
    config: EngineConfig,
    manifest: &[Container],
) -> (ProfileResult, StowagePlan) {
    let engine = PlacementEngine::new(config);
    let t0 = Instant::now();
    let plan = engine.place(manifest).expect("placement plan");
    let elapsed = t0.elapsed();
    let stats = plan.stats();

    let result = ProfileResult {
        profile: name.to_string(),
        balance_ratio: stats.balance_ratio(),
        total_weight: stats.total_weight().value(),
        port_weight: stats.port_weight().value(),
        starboard_weight: stats.starboard_weight().value(),
        overload_detected: stats.overload_detected(),
        elapsed_us: elapsed.as_micros(),
    };
    (result, plan)
}

fn main() {
    enable_tracing();

    let n_instances = 6usize;
    let min_containers = 10usize;
    let max_containers = 80usize;

    let min_weight = Weight::new(1_000.0);
    let max_weight = Weight::new(50_000.0);
    let dims = EngineConfig::<f64>::canonical().dims;

    let mut runs: Vec<RunResult> = Vec::with_capacity(n_instances);
    let mut last_plan: Option<StowagePlan> = None;

    for i in 0..n_instances {
        let container_count = interpolate_u(min_containers, max_containers, i, n_instances);
        let seed: u64 = 42 + (i as u64);

        let gen_config = ManifestGenConfig::new(container_count, min_weight, max_weight, seed)
            .expect("valid manifest config");
        let manifest = ManifestGenerator::new(gen_config).generate();

        let (canonical, plan) = run_profile("canonical", EngineConfig::canonical(), &manifest);
        let (reduced, _) = run_profile("reduced", EngineConfig::reduced(), &manifest);

        runs.push(RunResult {
            instance: InstanceInfo {
                idx: i,
                seed,
                rows: dims.rows(),
                cols: dims.cols(),
                container_count,
                min_weight: min_weight.value(),
                max_weight: max_weight.value(),
            },
            canonical,
            reduced,
        });
        last_plan = Some(plan);
    }

    let report = StowageReport {
        description: format!(
            "Deck stowage balancing: {} instances from {} to {} containers on a {} deck; \
             canonical five-term scoring vs reduced two-term profile.",
            n_instances, min_containers, max_containers, dims
        ),
        runs,
    };

    let file = File::create("stowage_results.json").expect("create stowage_results.json");
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &report).expect("write json report");

    println!("{}", report.description);
    for run in &report.runs {
        println!(
            "instance {:>2} ({} containers): canonical ratio {:.3} ({} us), reduced ratio {:.3} ({} us)",
            run.instance.idx,
            run.instance.container_count,
            run.canonical.balance_ratio,
            run.canonical.elapsed_us,
            run.reduced.balance_ratio,
            run.reduced.elapsed_us,
        );
    }

    if let Some(plan) = last_plan {
        println!();
        println!("{}", plan);
    }
}
