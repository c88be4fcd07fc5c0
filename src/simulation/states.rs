//! Core state types for the N-body simulation.
//!
//! - `Body`   a point mass with position, velocity, scratch acceleration and
//!   its own decimated trajectory history
//! - `System` the ordered body collection plus simulated time and tick index
//!
//! Bodies never reference each other. Interaction is computed by handing the
//! whole `System::bodies` slice to the integrator.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::history::Trajectory;
use super::params::G;

pub type NVec3 = Vector3<f64>;

/// Classification tag, carried as metadata only
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    #[default]
    Planet,
    Moon,
    Star,
    Asteroid,
    Comet,
    DwarfPlanet,
    Galaxy,
    BlackHole,
    Blazar,
    Quasar,
    Exoplanet,
    NeutronStar,
    Pulsar,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) name: String,
    pub(crate) kind: BodyKind,
    pub(crate) color: String,
    pub(crate) m: f64, // mass (kg)
    pub(crate) drag: f64, // never applied
    pub(crate) x: NVec3, // position (m)
    pub(crate) v: NVec3, // velocity (m/s)
    pub(crate) a: NVec3, // acceleration of the last tick (m/s^2)
    pub(crate) record: bool,
    pub(crate) inc: u64, // decimation counter
    pub(crate) history: Trajectory,
}

impl Body {
    /// Build a body from its Cartesian initial state
    pub fn new(name: impl Into<String>, m: f64, x: NVec3, v: NVec3) -> Self {
        Self {
            name: name.into(),
            kind: BodyKind::default(),
            color: String::from("def"),
            m,
            drag: 0.0,
            x,
            v,
            a: NVec3::zeros(),
            record: true,
            inc: 0,
            history: Trajectory::default(),
        }
    }

    /// Seed a circular orbit of radius `r` around a central mass `central_m`
    /// sitting at the origin: x = (r, 0, 0), v = (0, sqrt(G M / r), 0).
    ///
    /// `r` must be positive; zero or negative radii give non-finite speeds.
    pub fn from_orbit(name: impl Into<String>, central_m: f64, m: f64, r: f64) -> Self {
        Self::from_orbit_with_g(name, central_m, m, r, G)
    }

    /// Same as [`Body::from_orbit`] with an explicit gravitational constant
    pub fn from_orbit_with_g(name: impl Into<String>, central_m: f64, m: f64, r: f64, g: f64) -> Self {
        let speed = (g * central_m / r).sqrt();
        Self::new(name, m, NVec3::new(r, 0.0, 0.0), NVec3::new(0.0, speed, 0.0))
    }

    pub fn with_kind(mut self, kind: BodyKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_record(mut self, record: bool) -> Self {
        self.record = record;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn drag(&self) -> f64 {
        self.drag
    }

    pub fn position(&self) -> NVec3 {
        self.x
    }

    pub fn velocity(&self) -> NVec3 {
        self.v
    }

    /// Acceleration accumulated during the most recent step
    pub fn acceleration(&self) -> NVec3 {
        self.a
    }

    /// Overwrite the position, e.g. when rebasing initial conditions
    pub fn set_position(&mut self, x: NVec3) {
        self.x = x;
    }

    pub fn set_velocity(&mut self, v: NVec3) {
        self.v = v;
    }

    pub fn is_recording(&self) -> bool {
        self.record
    }

    /// Exclude (or re-include) this body from history collection.
    /// Forces involving the body are unaffected.
    pub fn set_record(&mut self, record: bool) {
        self.record = record;
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.history
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // fixed iteration order
    pub t: f64, // simulated time (s)
    pub tick: u64, // completed ticks
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            tick: 0,
        }
    }

    /// Index of the first body called `name`
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.bodies.iter().position(|b| b.name == name)
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Pairwise potential energy with gravitational constant `g`.
    /// Coincident pairs are skipped, matching the force guard.
    pub fn potential_energy(&self, g: f64) -> f64 {
        let n = self.bodies.len();
        let mut pe = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let r = (self.bodies[i].x - self.bodies[j].x).norm();
                if r == 0.0 {
                    continue;
                }
                pe -= g * self.bodies[i].m * self.bodies[j].m / r;
            }
        }
        pe
    }

    pub fn total_energy(&self, g: f64) -> f64 {
        self.kinetic_energy() + self.potential_energy(g)
    }
}
