//! Decimated trajectory recording
//!
//! After a body moves, the recorder appends its position (optionally relative
//! to an origin) every `stride` recorded ticks. Buffers are append-only.

use serde::Serialize;

use super::states::{Body, NVec3};

/// Sampled coordinates of one body, one entry per recorded tick
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Trajectory {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    fn push(&mut self, p: NVec3) {
        self.x.push(p.x);
        self.y.push(p.y);
        self.z.push(p.z);
    }
}

/// Reference point that samples are taken relative to.
///
/// `Body(i)` is resolved against the live body set when the sample is taken,
/// so a moving body gives a frame-shifted trajectory ("as seen from Earth").
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Origin {
    #[default]
    Absolute,
    Body(usize),
    Fixed(NVec3),
}

impl Origin {
    /// Current coordinates of the reference point.
    ///
    /// # Panics
    /// If `Origin::Body` indexes past the end of `bodies`.
    pub fn resolve(&self, bodies: &[Body]) -> NVec3 {
        match *self {
            Origin::Absolute => NVec3::zeros(),
            Origin::Body(i) => bodies[i].x,
            Origin::Fixed(p) => p,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRecorder {
    stride: u64,
}

impl HistoryRecorder {
    /// A stride of 0 is treated as 1 (record every tick)
    pub fn new(stride: u64) -> Self {
        Self { stride: stride.max(1) }
    }

    pub fn stride(&self) -> u64 {
        self.stride
    }

    /// Sample on ticks whose pre-increment counter is a multiple of the
    /// stride, then advance the counter. Bodies with recording disabled are
    /// left untouched, counter included.
    pub fn record(&self, body: &mut Body, origin: NVec3) {
        if !body.record {
            return;
        }
        let due = body.inc % self.stride == 0;
        body.inc += 1;
        if due {
            body.history.push(body.x - origin);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rock() -> Body {
        Body::new("rock", 1.0, NVec3::new(3.0, 4.0, 5.0), NVec3::zeros())
    }

    #[test]
    fn samples_first_tick_then_every_stride() {
        let recorder = HistoryRecorder::new(3);
        let mut b = rock();
        for _ in 0..7 {
            recorder.record(&mut b, NVec3::zeros());
        }
        // ticks 0, 3, 6
        assert_eq!(b.trajectory().len(), 3);
        assert_eq!(b.inc, 7);
    }

    #[test]
    fn disabled_body_keeps_counter() {
        let recorder = HistoryRecorder::new(1);
        let mut b = rock().with_record(false);
        recorder.record(&mut b, NVec3::zeros());
        assert!(b.trajectory().is_empty());
        assert_eq!(b.inc, 0);
    }

    #[test]
    fn sample_is_offset_by_origin() {
        let recorder = HistoryRecorder::new(1);
        let mut b = rock();
        recorder.record(&mut b, NVec3::new(1.0, 1.0, 1.0));
        let t = b.trajectory();
        assert_eq!((t.x[0], t.y[0], t.z[0]), (2.0, 3.0, 4.0));
    }

    #[test]
    fn zero_stride_records_every_tick() {
        let recorder = HistoryRecorder::new(0);
        let mut b = rock();
        recorder.record(&mut b, NVec3::zeros());
        recorder.record(&mut b, NVec3::zeros());
        assert_eq!(b.trajectory().len(), 2);
    }

    #[test]
    fn origin_resolves_against_live_bodies() {
        let mut bodies = vec![rock(), Body::new("ref", 1.0, NVec3::x(), NVec3::zeros())];
        assert_eq!(Origin::Body(1).resolve(&bodies), NVec3::x());
        bodies[1].x = NVec3::y();
        assert_eq!(Origin::Body(1).resolve(&bodies), NVec3::y());
        assert_eq!(Origin::Absolute.resolve(&bodies), NVec3::zeros());
        assert_eq!(Origin::Fixed(NVec3::z()).resolve(&bodies), NVec3::z());
    }
}
