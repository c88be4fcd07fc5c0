//! Build fully-initialized simulation scenarios from configuration and drive them
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! (`Scenario`) containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - the integrator with its force law
//!
//! `Scenario::tick` advances every body once, in the fixed order of
//! `system.bodies`; `Scenario::run` repeats that `tick_count` times.

use crate::configuration::config::{BodyConfig, ScenarioConfig, TickOrdering};
use crate::configuration::error::ConfigError;
use crate::simulation::engine::Engine;
use crate::simulation::forces::NewtonianGravity;
use crate::simulation::history::Origin;
use crate::simulation::integrator::SemiImplicitEuler;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyKind, NVec3, System};

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub system: System,
    // dt, stride and G live in both; only `new` writes them
    parameters: Parameters,
    integrator: SemiImplicitEuler<NewtonianGravity>,
}

impl Scenario {
    pub fn new(engine: Engine, parameters: Parameters, bodies: Vec<Body>) -> Self {
        let integrator = SemiImplicitEuler::from_params(NewtonianGravity { g: parameters.g }, &parameters);
        Self {
            engine,
            parameters,
            system: System::new(bodies),
            integrator,
        }
    }

    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        if !(p_cfg.time_step.is_finite() && p_cfg.time_step > 0.0) {
            return Err(ConfigError::InvalidTimeStep(p_cfg.time_step));
        }
        if p_cfg.decimation_stride == 0 {
            return Err(ConfigError::ZeroDecimationStride);
        }
        let parameters = Parameters {
            time_step: p_cfg.time_step,
            decimation_stride: p_cfg.decimation_stride,
            tick_count: p_cfg.tick_count,
            g: p_cfg.g,
        };

        // Bodies: map `BodyConfig` -> runtime `Body` using nalgebra vectors
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc| build_body(bc, parameters.g))
            .collect::<Result<Vec<_>, _>>()?;

        let engine = Engine {
            ordering: cfg.engine.ordering,
            origin: Origin::Absolute,
        };
        let mut scenario = Self::new(engine, parameters, bodies);

        // origin is resolved by name against the built system
        if let Some(name) = cfg.engine.origin {
            match scenario.system.index_of(&name) {
                Some(i) => scenario.engine.origin = Origin::Body(i),
                None => return Err(ConfigError::UnknownOrigin(name)),
            }
        }

        Ok(scenario)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn integrator(&self) -> &SemiImplicitEuler<NewtonianGravity> {
        &self.integrator
    }

    /// Override the number of ticks `run` performs.
    /// Time step, stride and G are fixed once the scenario is built.
    pub fn set_tick_count(&mut self, tick_count: u64) {
        self.parameters.tick_count = tick_count;
    }

    /// Sun, Earth, Moon and Jupiter, stepped in the order Earth, Moon, Sun, Jupiter
    pub fn solar_system() -> Self {
        let bodies = vec![
            Body::new("earth", 5.972e24, NVec3::new(150e9, 0.0, 0.0), NVec3::new(0.0, 29.8e3, 0.0))
                .with_kind(BodyKind::Planet),
            Body::new(
                "moon",
                7.342e22,
                NVec3::new(150e9 + 380e6, 0.0, 0.0),
                NVec3::new(0.0, 29.8e3 + 1.022e3, 0.0),
            )
            .with_kind(BodyKind::Moon),
            Body::new("sun", 1.9885e30, NVec3::zeros(), NVec3::zeros()).with_kind(BodyKind::Star),
            Body::new("jupiter", 1.898e27, NVec3::new(778e9, 0.0, 0.0), NVec3::new(0.0, 13.07e3, 0.0))
                .with_kind(BodyKind::Planet),
        ];
        Self::new(Engine::default(), Parameters::default(), bodies)
    }

    /// Advance every body by one time step
    pub fn tick(&mut self) {
        let bodies = &mut self.system.bodies;
        let origin = &self.engine.origin;
        match self.engine.ordering {
            TickOrdering::Sequential => {
                for i in 0..bodies.len() {
                    self.integrator.step(bodies, i, origin);
                }
            }
            TickOrdering::Snapshot => {
                // every acceleration sees the pre-tick positions
                let snapshot: &[Body] = bodies;
                let accels: Vec<NVec3> = (0..snapshot.len())
                    .map(|i| self.integrator.acceleration(snapshot, i))
                    .collect();
                for (b, a) in bodies.iter_mut().zip(accels) {
                    self.integrator.advance(b, a);
                }
                for i in 0..bodies.len() {
                    self.integrator.record(bodies, i, origin);
                }
            }
        }
        self.system.t += self.parameters.time_step;
        self.system.tick += 1;
    }

    pub fn run_ticks(&mut self, ticks: u64) {
        for _ in 0..ticks {
            self.tick();
        }
    }

    /// Run the configured `tick_count`
    pub fn run(&mut self) {
        self.run_ticks(self.parameters.tick_count);
    }

    pub fn total_energy(&self) -> f64 {
        self.system.total_energy(self.parameters.g)
    }
}

fn build_body(bc: &BodyConfig, g: f64) -> Result<Body, ConfigError> {
    let body = match (&bc.x, &bc.orbit) {
        (Some(x), None) => {
            let x = vec3(&bc.name, "x", x)?;
            let v = match &bc.v {
                Some(v) => vec3(&bc.name, "v", v)?,
                None => NVec3::zeros(),
            };
            Body::new(bc.name.clone(), bc.m, x, v)
        }
        (None, Some(orbit)) => {
            if bc.v.is_some() {
                return Err(ConfigError::AmbiguousInitialState { body: bc.name.clone() });
            }
            Body::from_orbit_with_g(bc.name.clone(), orbit.central_mass, bc.m, orbit.radius, g)
        }
        (Some(_), Some(_)) => {
            return Err(ConfigError::AmbiguousInitialState { body: bc.name.clone() });
        }
        (None, None) => {
            return Err(ConfigError::MissingInitialState { body: bc.name.clone() });
        }
    };

    let body = body.with_kind(bc.kind).with_record(bc.record);
    Ok(match &bc.color {
        Some(color) => body.with_color(color.clone()),
        None => body,
    })
}

fn vec3(body: &str, field: &'static str, xs: &[f64]) -> Result<NVec3, ConfigError> {
    match xs {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(ConfigError::VectorLength {
            body: body.to_string(),
            field,
            len: xs.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(yaml: &str) -> Result<Scenario, ConfigError> {
        Scenario::build_scenario(ScenarioConfig::from_yaml_str(yaml)?)
    }

    #[test]
    fn builds_cartesian_and_orbital_bodies() {
        let scenario = load(
            r#"
engine: { origin: sun }
parameters: { G: 1.0, decimation_stride: 10 }
bodies:
  - { name: sun, kind: star, m: 4.0, x: [0.0, 0.0, 0.0] }
  - { name: rock, m: 1.0, orbit: { central_mass: 4.0, radius: 1.0 }, color: grey }
"#,
        )
        .unwrap();
        assert_eq!(scenario.engine.origin, Origin::Body(0));
        assert_eq!(scenario.integrator.recorder.stride(), 10);
        let rock = scenario.system.body("rock").unwrap();
        assert_eq!(rock.velocity(), NVec3::new(0.0, 2.0, 0.0));
        assert_eq!(rock.color(), "grey");
        assert_eq!(scenario.system.bodies[0].kind(), BodyKind::Star);
    }

    #[test]
    fn rejects_short_vectors() {
        let err = load("bodies:\n  - { name: a, m: 1.0, x: [1.0, 2.0] }\n");
        assert!(matches!(err, Err(ConfigError::VectorLength { field: "x", len: 2, .. })));
    }

    #[test]
    fn rejects_ambiguous_and_missing_state() {
        let both = load("bodies:\n  - { name: a, m: 1.0, x: [0, 0, 0], orbit: { central_mass: 1.0, radius: 1.0 } }\n");
        assert!(matches!(both, Err(ConfigError::AmbiguousInitialState { .. })));
        let neither = load("bodies:\n  - { name: a, m: 1.0 }\n");
        assert!(matches!(neither, Err(ConfigError::MissingInitialState { .. })));
    }

    #[test]
    fn rejects_bad_parameters_and_origin() {
        let dt = load("parameters: { time_step: 0.0 }\nbodies: []\n");
        assert!(matches!(dt, Err(ConfigError::InvalidTimeStep(_))));
        let stride = load("parameters: { decimation_stride: 0 }\nbodies: []\n");
        assert!(matches!(stride, Err(ConfigError::ZeroDecimationStride)));
        let origin = load("engine: { origin: pluto }\nbodies: []\n");
        assert!(matches!(origin, Err(ConfigError::UnknownOrigin(name)) if name == "pluto"));
    }

    #[test]
    fn tick_advances_clock() {
        let mut scenario = Scenario::solar_system();
        scenario.run_ticks(3);
        assert_eq!(scenario.system.tick, 3);
        assert_eq!(scenario.system.t, 3000.0);
    }

    #[test]
    fn empty_scenario_ticks() {
        let mut scenario = load("bodies: []\n").unwrap();
        scenario.run_ticks(2);
        assert_eq!(scenario.system.tick, 2);
    }

    #[test]
    fn clock_motion_and_stride_share_one_configuration() {
        let params = Parameters {
            time_step: 10.0,
            decimation_stride: 1,
            ..Parameters::default()
        };
        let free = Body::new("free", 1.0, NVec3::zeros(), NVec3::new(1.0, 0.0, 0.0));
        let mut scenario = Scenario::new(Engine::default(), params, vec![free]);
        scenario.set_tick_count(3);
        scenario.run();

        let body = &scenario.system.bodies[0];
        assert_eq!(scenario.system.t, 30.0);
        assert_eq!(body.position().x, scenario.system.t);
        assert_eq!(body.trajectory().len(), 3);
        assert_eq!(scenario.integrator().dt, scenario.parameters().time_step);
        assert_eq!(scenario.integrator().recorder.stride(), scenario.parameters().decimation_stride);
        assert_eq!(scenario.integrator().force.g, scenario.parameters().g);
    }

    #[test]
    fn tick_count_override_only_changes_run_length() {
        let mut scenario = Scenario::solar_system();
        scenario.set_tick_count(5);
        scenario.run();
        assert_eq!(scenario.system.tick, 5);
        assert_eq!(scenario.parameters().time_step, 1000.0);
        assert_eq!(scenario.system.t, 5000.0);
    }
}
