//! Simulation configuration
//!
//! Loaded once at startup from an optional JSON file. Missing fields fall
//! back to the defaults in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Startup configuration for a [`crate::sim::SimulationState`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Window ===
    pub window_width: f32,
    pub window_height: f32,

    // === Physics ===
    pub gravity: f32,
    /// Fraction of velocity kept on a wall hit (0.0 - 1.0)
    pub restitution: f32,
    /// Per-tick horizontal damping factor (0.0 - 1.0]
    pub air_resistance: f32,

    // === Primary object ===
    pub object_size: f32,
    pub initial_velocity: (f32, f32),

    // === Multi-object mode ===
    /// Seconds between automatic launches
    pub launch_interval: f32,
    pub max_balls: usize,

    // === Effects ===
    pub max_particles: usize,
    pub particles_per_bounce: usize,
    pub trajectory_capacity: usize,

    /// Seed for ball and particle randomness
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,

            gravity: GRAVITY,
            restitution: RESTITUTION,
            air_resistance: AIR_RESISTANCE,

            object_size: BALL_SIZE,
            initial_velocity: (INITIAL_VELOCITY_X, INITIAL_VELOCITY_Y),

            launch_interval: LAUNCH_INTERVAL,
            max_balls: MAX_BALLS,

            max_particles: MAX_PARTICLES,
            particles_per_bounce: PARTICLES_PER_BOUNCE,
            trajectory_capacity: MAX_TRAJECTORY_POINTS,

            seed: 0x5EED_BA11,
        }
    }
}

impl SimConfig {
    /// Default config file looked up next to the working directory
    pub const DEFAULT_PATH: &'static str = "bounce_lab.json";

    /// Parse and validate a JSON config string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a config file, falling back to defaults when it is absent or bad
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{} ({}), using defaults", e, path.display());
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make the simulation diverge or stall
    pub fn validate(&self) -> Result<(), ConfigError> {
        let window_ok = |v: f32| v.is_finite() && v > 0.0;
        if !(window_ok(self.window_width) && window_ok(self.window_height)) {
            return Err(ConfigError::Invalid(format!(
                "window size must be finite and positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if !(self.object_size > 0.0
            && self.object_size < self.window_width
            && self.object_size < self.window_height)
        {
            return Err(ConfigError::Invalid(format!(
                "object_size {} must be positive and fit the window",
                self.object_size
            )));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::Invalid(format!(
                "restitution {} must be within [0, 1]",
                self.restitution
            )));
        }
        if !(self.air_resistance > 0.0 && self.air_resistance <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "air_resistance {} must be within (0, 1]",
                self.air_resistance
            )));
        }
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "gravity {} must be finite and non-negative",
                self.gravity
            )));
        }
        let (vx, vy) = self.initial_velocity;
        if !(vx.is_finite() && vy.is_finite()) {
            return Err(ConfigError::Invalid("initial_velocity must be finite".into()));
        }
        if !(self.launch_interval.is_finite() && self.launch_interval >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "launch_interval {} must be finite and non-negative",
                self.launch_interval
            )));
        }
        if self.max_balls == 0 {
            return Err(ConfigError::Invalid("max_balls must be at least 1".into()));
        }
        if self.trajectory_capacity == 0 {
            return Err(ConfigError::Invalid(
                "trajectory_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
