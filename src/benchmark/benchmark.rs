use std::time::Instant;

use crate::configuration::config::TickOrdering;
use crate::simulation::engine::Engine;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec3};

/// Helper to build a deterministic scenario of size `n`
pub fn make_scenario(n: usize, ordering: TickOrdering) -> Scenario {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions on the scale of the inner solar system, no rand needed
        let x = NVec3::new(
            (i_f * 0.37).sin() * 5.0e11,
            (i_f * 0.13).cos() * 5.0e11,
            (i_f * 0.07).sin() * 5.0e10,
        );

        bodies.push(Body::new(format!("body{i}"), 1.0e24, x, NVec3::zeros()));
    }

    let engine = Engine {
        ordering,
        ..Engine::default()
    };
    Scenario::new(engine, Parameters::default(), bodies)
}

/// Time ticks of the direct O(n^2) stepper for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_tick_curve() {
    println!("N,sequential_ms,snapshot_ms");

    for n in (50..=1000).step_by(50) {
        // Small n: average over a few ticks to smooth noise
        let ticks = if n <= 300 { 20 } else { 3 };

        let ms_sequential = time_ticks(&mut make_scenario(n, TickOrdering::Sequential), ticks);
        let ms_snapshot = time_ticks(&mut make_scenario(n, TickOrdering::Snapshot), ticks);

        println!("{},{:.6},{:.6}", n, ms_sequential, ms_snapshot);
    }
}

/// Mean wall-clock milliseconds per tick
fn time_ticks(scenario: &mut Scenario, ticks: u64) -> f64 {
    // Warm-up one tick
    scenario.tick();

    let t0 = Instant::now();
    scenario.run_ticks(ticks);
    t0.elapsed().as_secs_f64() * 1000.0 / ticks as f64
}
