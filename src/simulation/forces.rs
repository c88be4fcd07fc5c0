//! Pairwise force contributors for the n-body engine
//!
//! A [`PairwiseForce`] adds the acceleration one body induces on another into
//! an accumulator. The integrator calls it once per body in the set,
//! the subject included.

use crate::simulation::states::{Body, NVec3};

/// Trait for pairwise acceleration sources.
/// Implementations add the contribution of `other` on `subject` into `acc`.
pub trait PairwiseForce {
    fn accumulate(&self, subject: &Body, other: &Body, acc: &mut NVec3);
}

/// Unsoftened Newtonian gravity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl PairwiseForce for NewtonianGravity {
    fn accumulate(&self, subject: &Body, other: &Body, acc: &mut NVec3) {
        // d points from other to subject, so the pull is along -d
        let d = subject.x - other.x;
        let r2 = d.norm_squared();
        let r3 = r2.powf(1.5);

        // Exactly coincident, which also covers self-interaction.
        // Near misses are not guarded and give huge but finite accelerations.
        if r3 == 0.0 {
            return;
        }

        *acc -= d.map(|c| self.g * other.m * c / r3);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, m: f64) -> Body {
        Body::new("b", m, NVec3::new(x, 0.0, 0.0), NVec3::zeros())
    }

    #[test]
    fn self_contribution_is_skipped() {
        let gravity = NewtonianGravity { g: 1.0 };
        let b = at(1.0, 5.0);
        let mut acc = NVec3::new(1.0, 2.0, 3.0);
        gravity.accumulate(&b, &b, &mut acc);
        assert_eq!(acc, NVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn pull_is_toward_other_body() {
        let gravity = NewtonianGravity { g: 1.0 };
        let mut acc = NVec3::zeros();
        gravity.accumulate(&at(0.0, 1.0), &at(2.0, 8.0), &mut acc);
        assert_eq!(acc, NVec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn contributions_accumulate() {
        let gravity = NewtonianGravity { g: 1.0 };
        let subject = at(0.0, 1.0);
        let mut acc = NVec3::zeros();
        gravity.accumulate(&subject, &at(1.0, 1.0), &mut acc);
        gravity.accumulate(&subject, &at(-1.0, 1.0), &mut acc);
        assert_eq!(acc, NVec3::zeros());
    }
}
