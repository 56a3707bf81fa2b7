//! Per-tick integration of a single moving object
//!
//! Semi-implicit Euler: velocity first, then position, then wall response.
//! Time is measured in ticks; `dt = 1.0` is one reference frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, WallContact, resolve_walls};
use crate::consts::*;
use crate::wrap_degrees;

/// Physical parameters shared by every object in a step
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Physics {
    pub gravity: f32,
    pub restitution: f32,
    pub air_resistance: f32,
    /// Global simulation speed multiplier
    pub time_scale: f32,
}

impl Default for Physics {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            restitution: RESTITUTION,
            air_resistance: AIR_RESISTANCE,
            time_scale: 1.0,
        }
    }
}

impl Physics {
    /// Effective step length after the speed multiplier
    #[inline]
    pub fn dt_scale(&self, dt: f32) -> f32 {
        dt * self.time_scale
    }
}

/// Position, velocity and extent of a moving object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Edge length / diameter in pixels
    pub size: f32,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    #[inline]
    pub fn half_extent(&self) -> f32 {
        self.size * 0.5
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Advance a body by `dt` ticks and bounce it off the window edges
///
/// Air resistance is applied once per call regardless of `dt`.
pub fn integrate(body: &mut Body, dt: f32, bounds: &Bounds, physics: &Physics) -> WallContact {
    let dt_scale = physics.dt_scale(dt);

    body.vel.y += physics.gravity * dt_scale;
    body.vel.x *= physics.air_resistance;

    body.pos += body.vel * dt_scale;

    // A floor impact no faster than one tick of gravity is a body at rest
    let rest_speed = physics.gravity * dt_scale * (1.0 + f32::EPSILON * 8.0);
    let half = body.half_extent();
    resolve_walls(
        &mut body.pos,
        &mut body.vel,
        half,
        bounds,
        physics.restitution,
        rest_speed,
    )
}

/// Advance a cosmetic rotation angle (degrees)
#[inline]
pub fn advance_rotation(angle: f32, dt_scale: f32) -> f32 {
    wrap_degrees(angle + ROTATION_SPEED * dt_scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Wall;
    use proptest::prelude::*;

    const BOUNDS: Bounds = Bounds {
        width: 800.0,
        height: 600.0,
    };

    #[test]
    fn test_free_flight_is_exact() {
        let physics = Physics::default();
        let mut body = Body::new(Vec2::new(400.0, 200.0), Vec2::new(3.0, -2.0), 60.0);
        let contact = integrate(&mut body, 1.0, &BOUNDS, &physics);

        assert!(!contact.bounced());
        let vx = 3.0 * AIR_RESISTANCE;
        let vy = -2.0 + GRAVITY;
        assert_eq!(body.vel, Vec2::new(vx, vy));
        assert_eq!(body.pos, Vec2::new(400.0 + vx, 200.0 + vy));
    }

    #[test]
    fn test_zero_dt_only_damps() {
        let physics = Physics::default();
        let mut body = Body::new(Vec2::new(400.0, 200.0), Vec2::new(3.0, -2.0), 60.0);
        integrate(&mut body, 0.0, &BOUNDS, &physics);
        assert_eq!(body.pos, Vec2::new(400.0, 200.0));
        assert_eq!(body.vel, Vec2::new(3.0 * AIR_RESISTANCE, -2.0));
    }

    #[test]
    fn test_floor_scenario() {
        let physics = Physics {
            gravity: 0.0,
            restitution: 0.92,
            ..Default::default()
        };
        let mut body = Body::new(Vec2::new(0.0, 590.0), Vec2::new(6.0, 10.0), 60.0);
        let contact = integrate(&mut body, 1.0, &BOUNDS, &physics);

        assert_eq!(contact.vertical, Some(Wall::Floor));
        assert_eq!(body.pos.y, 600.0 - 30.0);
        assert_eq!(body.vel.y, -10.0 * 0.92);
    }

    #[test]
    fn test_floor_crossing_with_gravity() {
        let physics = Physics::default();
        let mut body = Body::new(Vec2::new(400.0, 565.0), Vec2::new(0.0, 8.0), 60.0);
        let impact = 8.0 + GRAVITY;
        integrate(&mut body, 1.0, &BOUNDS, &physics);
        assert_eq!(body.pos.y, 570.0);
        assert_eq!(body.vel.y, -impact * RESTITUTION);
    }

    #[test]
    fn test_speed_multiplier_scales_motion() {
        let physics = Physics {
            gravity: 0.0,
            time_scale: 2.0,
            air_resistance: 1.0,
            ..Default::default()
        };
        let mut body = Body::new(Vec2::new(100.0, 100.0), Vec2::new(5.0, 0.0), 20.0);
        integrate(&mut body, 1.0, &BOUNDS, &physics);
        assert_eq!(body.pos.x, 110.0);
    }

    #[test]
    fn test_horizontal_velocity_decays() {
        let physics = Physics {
            gravity: 0.0,
            ..Default::default()
        };
        let mut body = Body::new(Vec2::new(400.0, 300.0), Vec2::new(2.0, 0.0), 10.0);
        let mut last = body.vel.x.abs();
        for _ in 0..2000 {
            integrate(&mut body, 1.0, &BOUNDS, &physics);
            assert!(body.vel.x.abs() <= last);
            last = body.vel.x.abs();
        }
        assert!(last < 0.1);
    }

    #[test]
    fn test_body_comes_to_rest_on_floor() {
        let physics = Physics::default();
        let mut body = Body::new(Vec2::new(400.0, 100.0), Vec2::ZERO, 60.0);
        for _ in 0..5000 {
            integrate(&mut body, 1.0, &BOUNDS, &physics);
            assert!(body.vel.is_finite());
        }
        assert_eq!(body.pos.y, 570.0);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_rotation_wraps() {
        let angle = advance_rotation(359.0, 1.0);
        assert!((angle - (359.0 + ROTATION_SPEED - 360.0)).abs() < 1e-4);
        assert!((0.0..360.0).contains(&angle));
    }

    proptest! {
        #[test]
        fn prop_bounces_lose_energy(
            start_y in 100.0f32..500.0,
            start_vy in -12.0f32..12.0,
            restitution in 0.3f32..0.99,
        ) {
            let physics = Physics {
                restitution,
                ..Default::default()
            };
            let mut body = Body::new(Vec2::new(400.0, start_y), Vec2::new(0.0, start_vy), 60.0);
            let mut last_impact: Option<f32> = None;

            for _ in 0..4000 {
                let before = body.vel.y + physics.gravity;
                let contact = integrate(&mut body, 1.0, &BOUNDS, &physics);
                if contact.vertical == Some(Wall::Floor) {
                    if let Some(prev) = last_impact {
                        prop_assert!(before.abs() < prev);
                    }
                    last_impact = Some(before.abs());
                }
                prop_assert!(body.pos.y <= 570.0);
            }
        }

        #[test]
        fn prop_inside_flight_matches_formula(
            x in 100.0f32..700.0,
            y in 100.0f32..500.0,
            vx in -20.0f32..20.0,
            vy in -20.0f32..20.0,
            dt in 0.0f32..2.0,
        ) {
            let physics = Physics::default();
            let mut body = Body::new(Vec2::new(x, y), Vec2::new(vx, vy), 20.0);
            let contact = integrate(&mut body, dt, &BOUNDS, &physics);
            prop_assert!(!contact.bounced());
            let new_vy = vy + physics.gravity * dt;
            let new_vx = vx * physics.air_resistance;
            prop_assert_eq!(body.pos, Vec2::new(x + new_vx * dt, y + new_vy * dt));
        }
    }
}
