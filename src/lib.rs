pub mod simulation;
pub mod configuration;
pub mod export;
pub mod benchmark;

pub use simulation::states::{Body, BodyKind, System, NVec3};
pub use simulation::forces::{PairwiseForce, NewtonianGravity};
pub use simulation::integrator::SemiImplicitEuler;
pub use simulation::history::{HistoryRecorder, Origin, Trajectory};
pub use simulation::params::{Parameters, G, C};
pub use simulation::engine::Engine;
pub use simulation::scenario::Scenario;

pub use configuration::config::{TickOrdering, EngineConfig, ParametersConfig, BodyConfig, OrbitConfig, ScenarioConfig};
pub use configuration::error::ConfigError;

pub use export::trajectory::write_trajectories;

pub use benchmark::benchmark::bench_tick_curve;
