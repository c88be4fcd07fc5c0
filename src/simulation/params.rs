//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed time step and number of ticks,
//! - history decimation stride,
//! - gravitational constant `g`

/// Gravitational constant (m^3 kg^-1 s^-2)
pub const G: f64 = 6.67430e-11;

/// Speed of light (m/s). Defined for completeness, no relativistic terms use it.
pub const C: f64 = 299_792_458.0;

pub const DEFAULT_TIME_STEP: f64 = 1000.0;
pub const DEFAULT_DECIMATION_STRIDE: u64 = 100;
pub const DEFAULT_TICK_COUNT: u64 = 100_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub time_step: f64, // dt (s)
    pub decimation_stride: u64, // ticks between history samples
    pub tick_count: u64, // ticks per run
    pub g: f64, // gravitational constant
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            decimation_stride: DEFAULT_DECIMATION_STRIDE,
            tick_count: DEFAULT_TICK_COUNT,
            g: G,
        }
    }
}
