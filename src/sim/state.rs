//! Simulation state and core object types
//!
//! Everything the frame update mutates and the renderer reads lives in
//! [`SimulationState`]. There is no other mutable state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::balls::{BallManager, LaunchTemplate};
use super::collision::Bounds;
use super::kinematics::{Body, Physics};
use super::modes::{DrawingMode, GridMode, ObjectType, TrajectoryMode};
use super::particles::ParticleSystem;
use super::trajectory::TrajectorySampler;
use crate::consts::*;
use crate::settings::SimConfig;
use crate::{BACKGROUND_PALETTE, COLOR_PALETTE, palette_color};

/// The object the user is watching
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrimaryObject {
    pub body: Body,
    pub color_index: usize,
    pub kind: ObjectType,
    /// Cosmetic spin in degrees, [0, 360)
    pub rotation: f32,
}

impl PrimaryObject {
    /// Place an object at the launch corner with the given velocity
    pub fn new(size: f32, velocity: Vec2, kind: ObjectType, color_index: usize) -> Self {
        Self {
            body: Body::new(launch_point(size), velocity, size),
            color_index,
            kind,
            rotation: 0.0,
        }
    }

    pub fn color(&self) -> [f32; 4] {
        palette_color(self.color_index)
    }
}

/// Where the primary object and launched balls start: top-left, one size down
#[inline]
pub fn launch_point(size: f32) -> Vec2 {
    let half = size * 0.5;
    Vec2::new(half, half * 2.0)
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Startup configuration (restored by `reset_settings`)
    pub config: SimConfig,
    pub bounds: Bounds,
    pub physics: Physics,

    pub primary: PrimaryObject,
    pub balls: BallManager,
    pub particles: ParticleSystem,
    pub trajectory: TrajectorySampler,

    // === Modes ===
    pub trajectory_mode: TrajectoryMode,
    pub grid_mode: GridMode,
    pub drawing_mode: DrawingMode,

    // === Appearance ===
    pub rainbow: bool,
    rainbow_timer: f32,
    pub background_index: usize,
    /// Multiplier on the configured object size
    pub object_scale: f32,

    /// Simulation time in seconds since the last restart
    pub time: f32,
    /// Frames stepped since the last restart
    pub frame: u64,
    /// Whether the bunny mesh is available for selection
    pub bunny_available: bool,

    pub(crate) rng: Pcg32,
}

impl SimulationState {
    pub fn new(config: SimConfig) -> Self {
        let bounds = Bounds::new(config.window_width, config.window_height);
        let physics = Physics {
            gravity: config.gravity,
            restitution: config.restitution,
            air_resistance: config.air_resistance,
            time_scale: 1.0,
        };
        let (vx, vy) = config.initial_velocity;
        let primary = PrimaryObject::new(
            config.object_size,
            Vec2::new(vx, vy),
            ObjectType::default(),
            0,
        );

        Self {
            bounds,
            physics,
            primary,
            balls: BallManager::new(config.launch_interval, config.max_balls),
            particles: ParticleSystem::new(config.max_particles),
            trajectory: TrajectorySampler::new(config.trajectory_capacity),
            trajectory_mode: TrajectoryMode::default(),
            grid_mode: GridMode::default(),
            drawing_mode: DrawingMode::default(),
            rainbow: false,
            rainbow_timer: 0.0,
            background_index: 0,
            object_scale: 1.0,
            time: 0.0,
            frame: 0,
            bunny_available: true,
            rng: Pcg32::seed_from_u64(config.seed),
            config,
        }
    }

    /// Current edge length / diameter after scaling
    pub fn object_size(&self) -> f32 {
        self.config.object_size * self.object_scale
    }

    pub fn background_color(&self) -> [f32; 4] {
        BACKGROUND_PALETTE[self.background_index % BACKGROUND_PALETTE.len()]
    }

    /// Template for balls launched right now
    pub fn launch_template(&self) -> LaunchTemplate {
        LaunchTemplate {
            kind: self.primary.kind,
            size: self.object_size(),
        }
    }

    /// Restart the motion: primary object back to its launch point,
    /// every ball, particle and trail sample discarded
    ///
    /// Modes and adjusted settings are kept.
    pub fn reset(&mut self) {
        let (vx, vy) = self.config.initial_velocity;
        let size = self.object_size();
        self.primary.body = Body::new(launch_point(size), Vec2::new(vx, vy), size);
        self.primary.rotation = 0.0;

        self.balls.clear();
        self.balls.set_last_launch_time(0.0);
        self.particles.clear();
        self.trajectory.clear();
        self.time = 0.0;
        self.frame = 0;
        self.rainbow_timer = 0.0;
        log::info!("Simulation restarted");
    }

    /// Launch: a new ball in multi-object mode, otherwise a restart
    pub fn launch(&mut self) {
        if self.balls.is_enabled() {
            let template = self.launch_template();
            self.balls.launch(&mut self.rng, self.time, template);
        } else {
            self.reset();
        }
    }

    /// Restore every runtime-adjusted setting to its startup value, then restart
    pub fn reset_settings(&mut self) {
        self.physics = Physics {
            gravity: self.config.gravity,
            restitution: self.config.restitution,
            air_resistance: self.config.air_resistance,
            time_scale: 1.0,
        };
        self.object_scale = 1.0;
        self.primary.color_index = 0;
        self.rainbow = false;
        self.background_index = 0;
        self.grid_mode = GridMode::default();
        self.set_trajectory_mode(TrajectoryMode::None);
        self.reset();
        log::info!("Settings reset to defaults");
    }

    // === Mode transitions ===

    pub fn set_trajectory_mode(&mut self, mode: TrajectoryMode) {
        self.trajectory_mode = mode;
        if !mode.is_recording() {
            self.trajectory.clear();
        }
    }

    pub fn cycle_trajectory_mode(&mut self) {
        self.set_trajectory_mode(self.trajectory_mode.next());
        log::info!("Trajectory mode: {:?}", self.trajectory_mode);
    }

    pub fn cycle_grid_mode(&mut self) {
        self.grid_mode = self.grid_mode.next();
        log::info!("Grid mode: {:?}", self.grid_mode);
    }

    pub fn toggle_drawing_mode(&mut self) {
        self.drawing_mode = self.drawing_mode.next();
        log::info!("Drawing mode: {:?}", self.drawing_mode);
    }

    /// Switch shape; refused (returns false) for a bunny that failed to load
    pub fn select_object(&mut self, kind: ObjectType) -> bool {
        if kind == ObjectType::Bunny && !self.bunny_available {
            log::warn!("Bunny mesh not loaded, keeping {}", self.primary.kind.as_str());
            return false;
        }
        self.primary.kind = kind;
        log::info!("Object: {}", kind.as_str());
        true
    }

    pub fn cycle_object(&mut self) {
        let next = self.primary.kind.next_available(self.bunny_available);
        self.select_object(next);
    }

    /// Record whether the bunny mesh loaded; falls back to a sphere if not
    pub fn set_bunny_available(&mut self, available: bool) {
        self.bunny_available = available;
        if !available && self.primary.kind == ObjectType::Bunny {
            self.primary.kind = ObjectType::Sphere;
        }
    }

    pub fn toggle_multi_objects(&mut self) {
        let enabled = !self.balls.is_enabled();
        self.balls.set_enabled(enabled, self.time);
        log::info!("Multiple objects: {}", if enabled { "on" } else { "off" });
    }

    pub fn toggle_particles(&mut self) {
        let enabled = !self.particles.is_enabled();
        self.particles.set_enabled(enabled);
        log::info!("Particle effects: {}", if enabled { "on" } else { "off" });
    }

    // === Appearance ===

    pub fn cycle_color(&mut self) {
        self.primary.color_index = (self.primary.color_index + 1) % COLOR_PALETTE.len();
    }

    pub fn toggle_rainbow(&mut self) {
        self.rainbow = !self.rainbow;
        self.rainbow_timer = 0.0;
        log::info!("Rainbow mode: {}", if self.rainbow { "on" } else { "off" });
    }

    /// Advance rainbow colour cycling by `dt` seconds
    pub(crate) fn advance_rainbow(&mut self, dt: f32) {
        if !self.rainbow {
            return;
        }
        self.rainbow_timer += dt;
        while self.rainbow_timer >= RAINBOW_PERIOD {
            self.rainbow_timer -= RAINBOW_PERIOD;
            self.cycle_color();
        }
    }

    pub fn cycle_background(&mut self) {
        self.background_index = (self.background_index + 1) % BACKGROUND_PALETTE.len();
    }

    // === Runtime adjustments ===

    pub fn adjust_gravity(&mut self, delta: f32) {
        self.physics.gravity = (self.physics.gravity + delta).clamp(GRAVITY_MIN, GRAVITY_MAX);
        log::info!("Gravity: {:.2}", self.physics.gravity);
    }

    pub fn adjust_speed(&mut self, delta: f32) {
        self.physics.time_scale = (self.physics.time_scale + delta).clamp(SPEED_MIN, SPEED_MAX);
        log::info!("Simulation speed: {:.2}x", self.physics.time_scale);
    }

    /// Rescale the primary object and every ball
    pub fn adjust_scale(&mut self, delta: f32) {
        self.object_scale = (self.object_scale + delta).clamp(SCALE_MIN, SCALE_MAX);
        let size = self.object_size();
        self.primary.body.size = size;
        self.balls.set_size(size);
        log::info!("Object scale: {:.1}", self.object_scale);
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
