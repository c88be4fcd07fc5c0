//! Fixed-step semi-implicit (symplectic) Euler integrator
//!
//! One call to [`SemiImplicitEuler::step`] advances a single body:
//! 1. sum pairwise accelerations over every body in the set (itself included)
//! 2. kick:  v += a dt
//! 3. drift: x += v dt, with the velocity from step 2
//! 4. hand the body to the [`HistoryRecorder`]
//!
//! The body is updated in place, so bodies stepped later in the same tick see
//! the new positions of bodies stepped earlier.

use super::forces::PairwiseForce;
use super::history::{HistoryRecorder, Origin};
use super::params::Parameters;
use super::states::{Body, NVec3};

#[derive(Debug, Clone)]
pub struct SemiImplicitEuler<F> {
    pub force: F,
    pub dt: f64, // time step (s)
    pub recorder: HistoryRecorder,
}

impl<F: PairwiseForce> SemiImplicitEuler<F> {
    pub fn new(force: F, dt: f64, decimation_stride: u64) -> Self {
        Self {
            force,
            dt,
            recorder: HistoryRecorder::new(decimation_stride),
        }
    }

    pub fn from_params(force: F, params: &Parameters) -> Self {
        Self::new(force, params.time_step, params.decimation_stride)
    }

    /// Advance `bodies[index]` by one time step against the current state of
    /// `bodies`, then record it relative to `origin`.
    ///
    /// # Panics
    /// If `index` (or an `Origin::Body` index) is out of bounds.
    pub fn step(&self, bodies: &mut [Body], index: usize, origin: &Origin) {
        let a = self.acceleration(bodies, index);
        self.advance(&mut bodies[index], a);
        self.record(bodies, index, origin);
    }

    /// Net acceleration on `bodies[index]` from every body in iteration order.
    /// Starts from zero; nothing carries over from the previous tick.
    pub fn acceleration(&self, bodies: &[Body], index: usize) -> NVec3 {
        let subject = &bodies[index];
        let mut acc = NVec3::zeros();
        for other in bodies {
            self.force.accumulate(subject, other, &mut acc);
        }
        acc
    }

    /// Kick then drift with a precomputed acceleration
    pub fn advance(&self, body: &mut Body, a: NVec3) {
        body.a = a;
        body.v += body.a * self.dt;
        body.x += body.v * self.dt;
    }

    /// Sample `bodies[index]`; the origin is resolved now, not at tick start
    pub fn record(&self, bodies: &mut [Body], index: usize, origin: &Origin) {
        let origin = origin.resolve(bodies);
        self.recorder.record(&mut bodies[index], origin);
    }
}
