//! Vertex types for the 2D overlay and object instances

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Per-object transform and tint for drawing a shape mesh
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    /// Window-space centre
    pub position: [f32; 2],
    /// Uniform scale applied to the unit-extent mesh
    pub scale: f32,
    /// Spin around the view axis, degrees
    pub rotation: f32,
    pub color: [f32; 4],
}

/// Colors for overlay elements
pub mod colors {
    pub const TRAJECTORY: [f32; 4] = [1.0, 1.0, 1.0, 0.8];
    pub const GRID: [f32; 4] = [0.3, 0.3, 0.3, 0.5];
    pub const GRID_MAJOR: [f32; 4] = [0.45, 0.45, 0.45, 0.6];
}
