//! Bounce Lab - a bouncing-object physics playground
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, spawning, particles, trails)
//! - `renderer`: CPU-side vertex builders for whatever graphics backend hosts us
//! - `geometry`: Cube/sphere generators and OFF mesh loading
//! - `settings`: JSON configuration
//! - `screenshot`: PPM export of a captured framebuffer

pub mod error;
pub mod geometry;
pub mod renderer;
pub mod screenshot;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, MeshError};
pub use settings::SimConfig;

/// Simulation constants
pub mod consts {
    /// Default window dimensions
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 600.0;

    /// Gravitational acceleration (pixels per tick²)
    pub const GRAVITY: f32 = 0.35;
    /// Energy retention on bounce (1.0 = perfect bounce)
    pub const RESTITUTION: f32 = 0.92;
    /// Per-tick horizontal damping (1.0 = no resistance)
    pub const AIR_RESISTANCE: f32 = 0.998;

    /// Base edge length / diameter of objects
    pub const BALL_SIZE: f32 = 60.0;

    /// Initial velocity of the primary object
    pub const INITIAL_VELOCITY_X: f32 = 6.0;
    pub const INITIAL_VELOCITY_Y: f32 = -2.0;

    /// Trail capacity
    pub const MAX_TRAJECTORY_POINTS: usize = 150;

    /// Seconds between automatic launches in multi-object mode
    pub const LAUNCH_INTERVAL: f32 = 1.5;
    /// Oldest balls are dropped beyond this many
    pub const MAX_BALLS: usize = 24;

    /// Particle budget
    pub const MAX_PARTICLES: usize = 400;
    pub const PARTICLES_PER_BOUNCE: usize = 12;
    pub const PARTICLE_LIFE: f32 = 1.0;
    pub const PARTICLE_DAMPING: f32 = 0.98;

    /// Rotation of cube/bunny in degrees per tick
    pub const ROTATION_SPEED: f32 = 2.0;

    /// Host frames are converted to ticks at this rate
    pub const TICKS_PER_SECOND: f32 = 60.0;
    /// Largest frame delta fed to the integrator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Rainbow mode colour step period (seconds)
    pub const RAINBOW_PERIOD: f32 = 0.15;

    /// Runtime adjustment ranges
    pub const GRAVITY_STEP: f32 = 0.05;
    pub const GRAVITY_MIN: f32 = 0.0;
    pub const GRAVITY_MAX: f32 = 2.0;
    pub const SPEED_STEP: f32 = 0.25;
    pub const SPEED_MIN: f32 = 0.25;
    pub const SPEED_MAX: f32 = 4.0;
    pub const SCALE_STEP: f32 = 0.1;
    pub const SCALE_MIN: f32 = 0.3;
    pub const SCALE_MAX: f32 = 3.0;
}

/// Object colours (red, orange, yellow, green, blue, purple, pink, cyan)
pub const COLOR_PALETTE: [[f32; 4]; 8] = [
    [1.0, 0.3, 0.3, 1.0],
    [1.0, 0.7, 0.2, 1.0],
    [1.0, 1.0, 0.3, 1.0],
    [0.4, 1.0, 0.4, 1.0],
    [0.3, 0.6, 1.0, 1.0],
    [0.9, 0.3, 1.0, 1.0],
    [1.0, 0.5, 1.0, 1.0],
    [0.2, 1.0, 1.0, 1.0],
];

/// Clear colours cycled by the background command
pub const BACKGROUND_PALETTE: [[f32; 4]; 5] = [
    [0.1, 0.1, 0.1, 1.0],
    [0.0, 0.0, 0.0, 1.0],
    [0.05, 0.05, 0.2, 1.0],
    [0.15, 0.05, 0.15, 1.0],
    [0.9, 0.9, 0.9, 1.0],
];

/// Palette lookup that tolerates any index
#[inline]
pub fn palette_color(index: usize) -> [f32; 4] {
    COLOR_PALETTE[index % COLOR_PALETTE.len()]
}

/// Wrap an angle in degrees to [0, 360)
#[inline]
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
