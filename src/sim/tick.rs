//! Per-frame simulation update
//!
//! One call per rendered frame: spawn, integrate, particles, trail. The
//! renderer reads the state only after `step` returns.

use glam::Vec2;

use super::collision::WallContact;
use super::kinematics::{advance_rotation, integrate};
use super::state::SimulationState;
use crate::consts::*;
use crate::palette_color;

/// What happened during one frame
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// Primary object wall contact (if it bounced)
    pub primary_bounce: Option<WallContact>,
    /// Number of managed balls that bounced
    pub ball_bounces: usize,
    /// Id of a ball launched by the timer this frame
    pub launched: Option<u32>,
    pub particles_spawned: usize,
}

/// Convert a wall-clock frame delta into integration ticks
#[inline]
pub fn frame_ticks(dt_secs: f32) -> f32 {
    dt_secs.clamp(0.0, MAX_FRAME_DT) * TICKS_PER_SECOND
}

/// Advance the whole simulation by one host frame of `dt_secs` seconds
pub fn step(state: &mut SimulationState, dt_secs: f32) -> FrameReport {
    let dt_secs = dt_secs.clamp(0.0, MAX_FRAME_DT);
    let dt = frame_ticks(dt_secs);
    let mut report = FrameReport::default();

    state.time += dt_secs;
    state.frame += 1;

    // Timed launches in multi-object mode
    let template = state.launch_template();
    report.launched = state.balls.maybe_spawn(&mut state.rng, state.time, template);

    // Primary object
    let contact = integrate(&mut state.primary.body, dt, &state.bounds, &state.physics);
    if state.primary.kind.rotates() {
        state.primary.rotation =
            advance_rotation(state.primary.rotation, state.physics.dt_scale(dt));
    }
    state.advance_rainbow(dt_secs);

    let mut bursts: Vec<(Vec2, [f32; 4])> = Vec::new();
    if contact.bounced() {
        report.primary_bounce = Some(contact);
        bursts.push((contact.point, state.primary.color()));
    }

    // Managed balls
    let ball_bounces = state.balls.update_all(dt, &state.bounds, &state.physics);
    report.ball_bounces = ball_bounces.len();
    bursts.extend(
        ball_bounces
            .iter()
            .map(|b| (b.contact.point, palette_color(b.color_index))),
    );

    // Particles: bounce bursts, then age everything
    let per_bounce = state.config.particles_per_bounce;
    for (origin, color) in bursts {
        report.particles_spawned +=
            state
                .particles
                .spawn(&mut state.rng, origin, per_bounce, color);
    }
    state
        .particles
        .update(dt_secs, state.physics.dt_scale(dt), state.physics.gravity);

    // Trail of the primary object
    if state.trajectory_mode.is_recording() {
        state.trajectory.record(state.primary.body.pos, state.time);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::SimConfig;
    use crate::sim::modes::{ObjectType, TrajectoryMode};

    const FRAME: f32 = 1.0 / TICKS_PER_SECOND;

    #[test]
    fn test_one_frame_is_one_tick() {
        let mut state = SimulationState::default();
        let before = state.primary.body;
        step(&mut state, FRAME);

        let expected_vx = before.vel.x * AIR_RESISTANCE;
        assert!((state.primary.body.vel.x - expected_vx).abs() < 1e-5);
        assert!((state.primary.body.vel.y - (before.vel.y + GRAVITY)).abs() < 1e-4);
        assert_eq!(state.frame, 1);
    }

    #[test]
    fn test_large_frames_are_clamped() {
        assert_eq!(frame_ticks(5.0), MAX_FRAME_DT * TICKS_PER_SECOND);
        assert_eq!(frame_ticks(-1.0), 0.0);
    }

    #[test]
    fn test_trail_only_recorded_when_enabled() {
        let mut state = SimulationState::default();
        for _ in 0..10 {
            step(&mut state, FRAME);
        }
        assert!(state.trajectory.is_empty());

        state.set_trajectory_mode(TrajectoryMode::Line);
        for _ in 0..10 {
            step(&mut state, FRAME);
        }
        assert_eq!(state.trajectory.len(), 10);
        assert_eq!(state.trajectory.newest().unwrap().pos, state.primary.body.pos);
    }

    #[test]
    fn test_trail_stays_bounded() {
        let mut state = SimulationState::default();
        state.set_trajectory_mode(TrajectoryMode::Strobe);
        for _ in 0..(MAX_TRAJECTORY_POINTS * 3) {
            step(&mut state, FRAME);
            assert!(state.trajectory.len() <= MAX_TRAJECTORY_POINTS);
        }
        assert_eq!(state.trajectory.len(), MAX_TRAJECTORY_POINTS);
    }

    #[test]
    fn test_multi_mode_spawns_on_timer() {
        let mut state = SimulationState::default();
        state.toggle_multi_objects();

        // 1.4 s of frames: nothing yet
        for _ in 0..84 {
            step(&mut state, FRAME);
        }
        assert!(state.balls.is_empty());

        // Past 1.5 s exactly one launch
        for _ in 0..12 {
            step(&mut state, FRAME);
        }
        assert_eq!(state.balls.len(), 1);
        let ball = &state.balls.balls()[0];
        assert!(ball.launch_time <= state.time);
        assert_eq!(state.balls.last_launch_time(), ball.launch_time);
    }

    #[test]
    fn test_ball_count_bounded_under_continuous_spawning() {
        let config = SimConfig {
            launch_interval: 0.0,
            max_balls: 5,
            ..Default::default()
        };
        let mut state = SimulationState::new(config);
        state.toggle_multi_objects();
        for _ in 0..300 {
            step(&mut state, FRAME);
            assert!(state.balls.len() <= 5);
        }
        assert_eq!(state.balls.len(), 5);
    }

    #[test]
    fn test_bounce_spawns_particles() {
        let mut state = SimulationState::default();
        state.toggle_particles();
        // About to hit the floor
        state.primary.body.pos = Vec2::new(400.0, 565.0);
        state.primary.body.vel = Vec2::new(0.0, 10.0);

        let report = step(&mut state, FRAME);
        assert!(report.primary_bounce.is_some());
        assert_eq!(report.particles_spawned, PARTICLES_PER_BOUNCE);
        assert_eq!(state.particles.len(), PARTICLES_PER_BOUNCE);
    }

    #[test]
    fn test_no_particles_when_disabled() {
        let mut state = SimulationState::default();
        state.primary.body.pos = Vec2::new(400.0, 565.0);
        state.primary.body.vel = Vec2::new(0.0, 10.0);
        let report = step(&mut state, FRAME);
        assert!(report.primary_bounce.is_some());
        assert_eq!(report.particles_spawned, 0);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_particles_expire() {
        let mut state = SimulationState::default();
        state.toggle_particles();
        state.primary.body.pos = Vec2::new(400.0, 565.0);
        state.primary.body.vel = Vec2::new(0.0, 10.0);
        step(&mut state, FRAME);
        assert!(!state.particles.is_empty());

        // Park the object so no further bounces happen
        state.primary.body.pos = Vec2::new(400.0, 300.0);
        state.primary.body.vel = Vec2::ZERO;
        state.physics.gravity = 0.0;
        for _ in 0..((PARTICLE_LIFE * TICKS_PER_SECOND) as usize + 2) {
            step(&mut state, FRAME);
            assert!(state.particles.particles().iter().all(|p| p.life > 0.0));
        }
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_sphere_does_not_spin() {
        let mut state = SimulationState::default();
        step(&mut state, FRAME);
        assert_eq!(state.primary.rotation, 0.0);

        state.select_object(ObjectType::Cube);
        step(&mut state, FRAME);
        assert!(state.primary.rotation > 0.0);
    }

    #[test]
    fn test_determinism() {
        let config = SimConfig {
            launch_interval: 0.2,
            ..Default::default()
        };
        let mut a = SimulationState::new(config.clone());
        let mut b = SimulationState::new(config);
        for state in [&mut a, &mut b] {
            state.toggle_multi_objects();
            state.toggle_particles();
        }
        for _ in 0..240 {
            step(&mut a, FRAME);
            step(&mut b, FRAME);
        }
        assert_eq!(a.primary.body, b.primary.body);
        assert_eq!(a.balls.len(), b.balls.len());
        assert_eq!(a.particles.len(), b.particles.len());
        for (x, y) in a.balls.balls().iter().zip(b.balls.balls()) {
            assert_eq!(x.body, y.body);
        }
    }
}
