//! Deterministic simulation module
//!
//! All physics and object lifecycle logic lives here. This module must stay
//! pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (launch order)
//! - No rendering or platform dependencies

pub mod balls;
pub mod collision;
pub mod input;
pub mod kinematics;
pub mod modes;
pub mod particles;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use balls::{BallBounce, BallManager, BallObject, LaunchTemplate};
pub use collision::{Bounds, Wall, WallContact, resolve_walls};
pub use input::{Command, Effect, HELP_TEXT, MouseButton, apply};
pub use kinematics::{Body, Physics, advance_rotation, integrate};
pub use modes::{DrawingMode, GridMode, ObjectType, TrajectoryMode};
pub use particles::{Particle, ParticleSystem};
pub use state::{PrimaryObject, SimulationState};
pub use tick::{FrameReport, frame_ticks, step};
pub use trajectory::{TrajectoryPoint, TrajectorySampler};
