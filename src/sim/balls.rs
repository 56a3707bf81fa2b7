//! Multi-object mode: timed launches of independent balls
//!
//! The collection is capacity bounded. Walls keep every ball on screen, so
//! the only pruning is dropping the oldest launches once over capacity.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, WallContact};
use super::kinematics::{Body, Physics, integrate};
use super::modes::ObjectType;
use super::state::launch_point;
use crate::COLOR_PALETTE;

/// A ball launched in multi-object mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallObject {
    pub id: u32,
    pub body: Body,
    pub color_index: usize,
    pub kind: ObjectType,
    /// Simulation time (seconds) of the launch
    pub launch_time: f32,
}

/// Bounce of one managed ball during `update_all`
#[derive(Debug, Clone, Copy)]
pub struct BallBounce {
    pub id: u32,
    pub color_index: usize,
    pub contact: WallContact,
}

/// What a freshly launched ball looks like
#[derive(Debug, Clone, Copy)]
pub struct LaunchTemplate {
    pub kind: ObjectType,
    pub size: f32,
}

#[derive(Debug, Clone)]
pub struct BallManager {
    balls: Vec<BallObject>,
    enabled: bool,
    launch_interval: f32,
    last_launch_time: f32,
    max_balls: usize,
    next_id: u32,
}

impl BallManager {
    pub fn new(launch_interval: f32, max_balls: usize) -> Self {
        Self {
            balls: Vec::new(),
            enabled: false,
            launch_interval,
            last_launch_time: 0.0,
            max_balls: max_balls.max(1),
            next_id: 1,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Switch multi-object mode; disabling removes every ball
    ///
    /// Enabling restarts the launch timer at `current_time`.
    pub fn set_enabled(&mut self, enabled: bool, current_time: f32) {
        self.enabled = enabled;
        if enabled {
            self.last_launch_time = current_time;
        } else {
            self.balls.clear();
        }
    }

    pub fn balls(&self) -> &[BallObject] {
        &self.balls
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn last_launch_time(&self) -> f32 {
        self.last_launch_time
    }

    pub fn set_last_launch_time(&mut self, time: f32) {
        self.last_launch_time = time;
    }

    pub fn launch_interval(&self) -> f32 {
        self.launch_interval
    }

    pub fn clear(&mut self) {
        self.balls.clear();
    }

    /// Launch a ball if the mode is on and the interval has elapsed
    ///
    /// Returns the new ball's id.
    pub fn maybe_spawn(
        &mut self,
        rng: &mut Pcg32,
        current_time: f32,
        template: LaunchTemplate,
    ) -> Option<u32> {
        if !self.enabled || current_time - self.last_launch_time <= self.launch_interval {
            return None;
        }
        Some(self.launch(rng, current_time, template))
    }

    /// Launch a ball immediately, regardless of mode and timer
    pub fn launch(&mut self, rng: &mut Pcg32, current_time: f32, template: LaunchTemplate) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let vel = Vec2::new(rng.random_range(3.0..9.0), rng.random_range(-12.0..-4.0));
        let color_index = rng.random_range(0..COLOR_PALETTE.len());

        self.balls.push(BallObject {
            id,
            body: Body::new(launch_point(template.size), vel, template.size),
            color_index,
            kind: template.kind,
            launch_time: current_time,
        });
        self.last_launch_time = current_time;
        log::debug!("Launched ball {} at t={:.2}", id, current_time);

        self.prune();
        id
    }

    /// Integrate every ball, collecting the ones that bounced
    pub fn update_all(&mut self, dt: f32, bounds: &Bounds, physics: &Physics) -> Vec<BallBounce> {
        let mut bounces = Vec::new();
        for ball in &mut self.balls {
            let contact = integrate(&mut ball.body, dt, bounds, physics);
            if contact.bounced() {
                bounces.push(BallBounce {
                    id: ball.id,
                    color_index: ball.color_index,
                    contact,
                });
            }
        }
        bounces
    }

    /// Resize every ball (object scale changed)
    pub fn set_size(&mut self, size: f32) {
        for ball in &mut self.balls {
            ball.body.size = size;
        }
    }

    /// Drop the oldest balls beyond capacity
    fn prune(&mut self) {
        if self.balls.len() > self.max_balls {
            let excess = self.balls.len() - self.max_balls;
            self.balls.drain(..excess);
            log::debug!("Pruned {} oldest balls", excess);
        }
    }
}
