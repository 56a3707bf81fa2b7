//! Short-lived visual particles
//!
//! Particles never influence the simulation; they only decorate bounces.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: [f32; 4],
    /// Remaining life, starts at `PARTICLE_LIFE` and counts down in seconds
    pub life: f32,
    pub size: f32,
}

impl Particle {
    /// Remaining life as a 0-1 fraction (for fading)
    pub fn life_fraction(&self) -> f32 {
        (self.life / PARTICLE_LIFE).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    max_particles: usize,
    enabled: bool,
}

impl ParticleSystem {
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::new(),
            max_particles,
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Turn effects on or off; switching off drops every live particle
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.particles.clear();
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Emit a burst at `origin`; returns how many particles were created
    ///
    /// Bursts are truncated at the particle budget.
    pub fn spawn(
        &mut self,
        rng: &mut Pcg32,
        origin: Vec2,
        count: usize,
        color_hint: [f32; 4],
    ) -> usize {
        if !self.enabled {
            return 0;
        }
        let room = self.max_particles.saturating_sub(self.particles.len());
        let count = count.min(room);

        for _ in 0..count {
            let angle: f32 = rng.random_range(0.0..std::f32::consts::TAU);
            let speed: f32 = rng.random_range(1.0..4.0);
            let shade: f32 = rng.random_range(0.8..1.2);
            let [r, g, b, a] = color_hint;
            self.particles.push(Particle {
                pos: origin,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                color: [
                    (r * shade).min(1.0),
                    (g * shade).min(1.0),
                    (b * shade).min(1.0),
                    a,
                ],
                life: PARTICLE_LIFE,
                size: rng.random_range(2.0..5.0),
            });
        }
        count
    }

    /// Age and move every particle, dropping the expired ones
    ///
    /// `dt` is wall-clock seconds (drives life); `dt_scale` is ticks (drives motion).
    pub fn update(&mut self, dt: f32, dt_scale: f32, gravity: f32) {
        if !self.enabled {
            return;
        }
        for particle in self.particles.iter_mut() {
            particle.life -= dt;
            particle.pos += particle.vel * dt_scale;
            particle.vel.y += gravity * 0.5 * dt_scale;
            particle.vel *= PARTICLE_DAMPING;
        }
        self.particles.retain(|p| p.life > 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn enabled_system(max: usize) -> ParticleSystem {
        let mut system = ParticleSystem::new(max);
        system.set_enabled(true);
        system
    }

    #[test]
    fn test_spawn_at_origin() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut system = enabled_system(100);
        let origin = Vec2::new(10.0, 20.0);

        assert_eq!(system.spawn(&mut rng, origin, 12, [1.0, 0.3, 0.3, 1.0]), 12);
        assert_eq!(system.len(), 12);
        for p in system.particles() {
            assert_eq!(p.pos, origin);
            assert_eq!(p.life, PARTICLE_LIFE);
            assert!(p.vel.length() >= 0.99);
            assert!(p.color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }

    #[test]
    fn test_spawn_respects_budget() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut system = enabled_system(10);
        assert_eq!(system.spawn(&mut rng, Vec2::ZERO, 8, [1.0; 4]), 8);
        assert_eq!(system.spawn(&mut rng, Vec2::ZERO, 8, [1.0; 4]), 2);
        assert_eq!(system.len(), 10);
    }

    #[test]
    fn test_disabled_system_is_inert() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut system = ParticleSystem::new(10);
        assert_eq!(system.spawn(&mut rng, Vec2::ZERO, 5, [1.0; 4]), 0);
        system.update(1.0, 60.0, 0.35);
        assert!(system.is_empty());
    }

    #[test]
    fn test_toggle_off_clears() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut system = enabled_system(10);
        system.spawn(&mut rng, Vec2::ZERO, 5, [1.0; 4]);
        system.set_enabled(false);
        assert!(system.is_empty());
    }

    #[test]
    fn test_update_removes_expired_in_one_call() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut system = enabled_system(50);
        system.spawn(&mut rng, Vec2::ZERO, 20, [1.0; 4]);

        system.update(0.4, 24.0, 0.35);
        assert_eq!(system.len(), 20);
        assert!(system.particles().iter().all(|p| p.life > 0.0 && p.life <= PARTICLE_LIFE));

        // Overshoot: life goes negative within this call
        system.update(0.7, 42.0, 0.35);
        assert!(system.is_empty());
    }

    #[test]
    fn test_update_moves_and_pulls_down() {
        let mut system = enabled_system(1);
        system.particles.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, 0.0),
            color: [1.0; 4],
            life: 1.0,
            size: 3.0,
        });
        system.update(0.1, 1.0, 0.4);
        let p = &system.particles()[0];
        assert_eq!(p.pos, Vec2::new(1.0, 0.0));
        assert!(p.vel.y > 0.0);
        assert!(p.vel.x < 1.0);
    }
}
