//! High-level runtime engine settings
//!
//! Selects the in-tick update ordering and the reference point used when
//! recording trajectories

use crate::configuration::config::TickOrdering;
use crate::simulation::history::Origin;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    pub ordering: TickOrdering, // sequential (in place) or snapshot
    pub origin: Origin, // recording frame
}
