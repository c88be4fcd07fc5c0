//! Trajectory export for plotting tools
//!
//! Writes every body's recorded history as a JSON array:
//!
//! ```json
//! [{ "name": "earth", "kind": "planet", "color": "def", "x": [..], "y": [..], "z": [..] }]
//! ```

use std::io::Write;

use serde::Serialize;

use crate::simulation::history::Trajectory;
use crate::simulation::states::{Body, BodyKind};

#[derive(Serialize)]
struct TrajectoryRecord<'a> {
    name: &'a str,
    kind: BodyKind,
    color: &'a str,
    #[serde(flatten)]
    trajectory: &'a Trajectory,
}

impl<'a> From<&'a Body> for TrajectoryRecord<'a> {
    fn from(b: &'a Body) -> Self {
        Self {
            name: b.name(),
            kind: b.kind(),
            color: b.color(),
            trajectory: b.trajectory(),
        }
    }
}

/// Serialize the trajectories of `bodies` in iteration order
pub fn write_trajectories<W: Write>(writer: W, bodies: &[Body]) -> serde_json::Result<()> {
    let records: Vec<TrajectoryRecord> = bodies.iter().map(TrajectoryRecord::from).collect();
    serde_json::to_writer_pretty(writer, &records)
}
