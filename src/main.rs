use orbsim::{bench_tick_curve, write_trajectories, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(version, about = "Direct-sum Newtonian N-body stepper")]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless the path exists
    #[arg(short, long, default_value = "solar_system.yaml")]
    file_name: String,

    /// Number of ticks, overrides `tick_count` from the scenario
    ticks: Option<u64>,

    /// Write recorded trajectories as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Time the stepper for growing body counts instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };
    let scenario_cfg = ScenarioConfig::load(&config_path)?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_tick_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)
        .with_context(|| format!("failed to load scenario '{}'", args.file_name))?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    if let Some(ticks) = args.ticks {
        scenario.set_tick_count(ticks);
    }

    println!(
        "running {} bodies for {} ticks (dt = {} s, {:?})",
        scenario.system.bodies.len(),
        scenario.parameters().tick_count,
        scenario.parameters().time_step,
        scenario.engine.ordering,
    );

    let e0 = scenario.total_energy();
    let t0 = Instant::now();
    scenario.run();
    let elapsed = t0.elapsed();
    let e1 = scenario.total_energy();

    println!("finished in {:.3} s, simulated {:.3e} s", elapsed.as_secs_f64(), scenario.system.t);
    if e0 != 0.0 {
        println!("relative energy drift {:.3e}", (e1 - e0) / e0.abs());
    }
    for b in &scenario.system.bodies {
        let x = b.position();
        let v = b.velocity();
        println!(
            "{:>10}  x = ({:.4e}, {:.4e}, {:.4e})  v = ({:.4e}, {:.4e}, {:.4e})  samples = {}",
            b.name(), x.x, x.y, x.z, v.x, v.y, v.z, b.trajectory().len()
        );
    }

    if let Some(path) = args.output {
        let file = File::create(&path).with_context(|| format!("failed to create {}", path.display()))?;
        write_trajectories(BufWriter::new(file), &scenario.system.bodies)
            .with_context(|| format!("failed to write trajectories to {}", path.display()))?;
        println!("trajectories written to {}", path.display());
    }

    Ok(())
}
