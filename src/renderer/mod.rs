//! CPU-side render data
//!
//! Turns a [`SimulationState`] into plain vertex/instance arrays that any
//! graphics backend can upload. Nothing here mutates the simulation.

pub mod shapes;
pub mod vertex;

pub use vertex::{Instance, Vertex};

use crate::sim::{DrawingMode, ObjectType, SimulationState};

/// Everything the renderer needs for one frame
#[derive(Debug, Clone)]
pub struct FrameData {
    pub clear_color: [f32; 4],
    pub drawing_mode: DrawingMode,
    /// Mesh to bind for the primary object and balls of the same shape
    pub primary_kind: ObjectType,
    pub instances: Vec<Instance>,
    pub grid: Vec<Vertex>,
    pub trail: Vec<Vertex>,
    pub particles: Vec<Vertex>,
}

impl FrameData {
    /// Snapshot the state after the frame's update
    pub fn build(state: &SimulationState) -> Self {
        Self {
            clear_color: state.background_color(),
            drawing_mode: state.drawing_mode,
            primary_kind: state.primary.kind,
            instances: shapes::object_instances(state),
            grid: shapes::grid_lines(&state.bounds, state.grid_mode),
            trail: shapes::trajectory_vertices(state),
            particles: shapes::particle_quads(state.particles.particles()),
        }
    }
}
