//! Overlay geometry generation: trails, particles, grid

use glam::Vec2;

use super::vertex::{Instance, Vertex, colors};
use crate::sim::{
    Bounds, GridMode, Particle, SimulationState, TrajectoryMode, TrajectorySampler,
};
use crate::palette_color;

/// Strobe mode draws every Nth sample
pub const STROBE_STRIDE: usize = 5;
/// Half edge of a strobe marker in pixels
pub const STROBE_MARKER_HALF: f32 = 4.0;
/// Every Nth grid line is emphasised
const MAJOR_LINE_EVERY: usize = 4;

fn with_alpha(color: [f32; 4], alpha: f32) -> [f32; 4] {
    [color[0], color[1], color[2], color[3] * alpha]
}

/// Two triangles covering a square centred at `center`
fn push_quad(vertices: &mut Vec<Vertex>, center: Vec2, half: f32, color: [f32; 4]) {
    let (x0, y0) = (center.x - half, center.y - half);
    let (x1, y1) = (center.x + half, center.y + half);
    vertices.push(Vertex::new(x0, y0, color));
    vertices.push(Vertex::new(x1, y0, color));
    vertices.push(Vertex::new(x1, y1, color));

    vertices.push(Vertex::new(x0, y0, color));
    vertices.push(Vertex::new(x1, y1, color));
    vertices.push(Vertex::new(x0, y1, color));
}

/// Trail as a line list (one pair per segment), fading toward the oldest sample
pub fn trajectory_line(trail: &TrajectorySampler, color: [f32; 4]) -> Vec<Vertex> {
    if trail.len() < 2 {
        return Vec::new();
    }

    let last = (trail.len() - 1) as f32;
    let mut vertices = Vec::with_capacity((trail.len() - 1) * 2);
    let points: Vec<_> = trail.iter().collect();
    for (i, pair) in points.windows(2).enumerate() {
        let alpha1 = i as f32 / last;
        let alpha2 = (i + 1) as f32 / last;
        vertices.push(Vertex::new(pair[0].pos.x, pair[0].pos.y, with_alpha(color, alpha1)));
        vertices.push(Vertex::new(pair[1].pos.x, pair[1].pos.y, with_alpha(color, alpha2)));
    }
    vertices
}

/// Trail as discrete square markers, always including the newest sample
pub fn trajectory_strobe(trail: &TrajectorySampler, color: [f32; 4]) -> Vec<Vertex> {
    let len = trail.len();
    if len == 0 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((len / STROBE_STRIDE + 1) * 6);
    let newest = len - 1;
    for (i, point) in trail.iter().enumerate() {
        // Count back from the newest so markers stay put as the trail scrolls
        if (newest - i) % STROBE_STRIDE != 0 {
            continue;
        }
        let alpha = (i + 1) as f32 / len as f32;
        push_quad(&mut vertices, point.pos, STROBE_MARKER_HALF, with_alpha(color, alpha));
    }
    vertices
}

/// Trail vertices for the active mode (empty when trails are off)
pub fn trajectory_vertices(state: &SimulationState) -> Vec<Vertex> {
    match state.trajectory_mode {
        TrajectoryMode::None => Vec::new(),
        TrajectoryMode::Line => trajectory_line(&state.trajectory, colors::TRAJECTORY),
        TrajectoryMode::Strobe => trajectory_strobe(&state.trajectory, colors::TRAJECTORY),
    }
}

/// Particles as quads, fading and shrinking with remaining life
pub fn particle_quads(particles: &[Particle]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(particles.len() * 6);
    for particle in particles {
        let life = particle.life_fraction();
        let half = particle.size * 0.5 * (0.5 + 0.5 * life);
        push_quad(&mut vertices, particle.pos, half, with_alpha(particle.color, life));
    }
    vertices
}

/// Grid as a line list covering the window
pub fn grid_lines(bounds: &Bounds, mode: GridMode) -> Vec<Vertex> {
    let Some(spacing) = mode.spacing() else {
        return Vec::new();
    };

    let mut vertices = Vec::new();
    let line_color = |index: usize| {
        if mode == GridMode::Detailed && index % MAJOR_LINE_EVERY == 0 {
            colors::GRID_MAJOR
        } else {
            colors::GRID
        }
    };

    let columns = (bounds.width / spacing).floor() as usize;
    for i in 0..=columns {
        let x = i as f32 * spacing;
        let color = line_color(i);
        vertices.push(Vertex::new(x, 0.0, color));
        vertices.push(Vertex::new(x, bounds.height, color));
    }
    let rows = (bounds.height / spacing).floor() as usize;
    for j in 0..=rows {
        let y = j as f32 * spacing;
        let color = line_color(j);
        vertices.push(Vertex::new(0.0, y, color));
        vertices.push(Vertex::new(bounds.width, y, color));
    }
    vertices
}

/// Instances for the primary object followed by every managed ball
///
/// Every mesh has unit extent, so the scale is simply the object size.
pub fn object_instances(state: &SimulationState) -> Vec<Instance> {
    let primary = &state.primary;
    let mut instances = Vec::with_capacity(state.balls.len() + 1);
    instances.push(Instance {
        position: primary.body.pos.to_array(),
        scale: primary.body.size,
        rotation: primary.rotation,
        color: primary.color(),
    });
    for ball in state.balls.balls() {
        instances.push(Instance {
            position: ball.body.pos.to_array(),
            scale: ball.body.size,
            rotation: 0.0,
            color: palette_color(ball.color_index),
        });
    }
    instances
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trail(n: usize) -> TrajectorySampler {
        let mut trail = TrajectorySampler::new(100);
        for i in 0..n {
            trail.record(Vec2::new(i as f32 * 10.0, 100.0), i as f32);
        }
        trail
    }

    #[test]
    fn test_line_needs_two_points() {
        assert!(trajectory_line(&trail(1), [1.0; 4]).is_empty());
        let vertices = trajectory_line(&trail(5), [1.0; 4]);
        assert_eq!(vertices.len(), 8);
        // Newest end fully opaque, oldest end transparent
        assert_eq!(vertices[0].color[3], 0.0);
        assert_eq!(vertices[7].color[3], 1.0);
        assert_eq!(vertices[7].position, [40.0, 100.0]);
    }

    #[test]
    fn test_strobe_markers() {
        let vertices = trajectory_strobe(&trail(11), [1.0; 4]);
        // Samples 10, 5, 0
        assert_eq!(vertices.len(), 3 * 6);
        assert!(trajectory_strobe(&trail(0), [1.0; 4]).is_empty());
    }

    #[test]
    fn test_grid_modes() {
        let bounds = Bounds::new(800.0, 600.0);
        assert!(grid_lines(&bounds, GridMode::None).is_empty());
        // 17 vertical + 13 horizontal lines at 50px
        assert_eq!(grid_lines(&bounds, GridMode::Basic).len(), (17 + 13) * 2);
        assert_eq!(grid_lines(&bounds, GridMode::Detailed).len(), (33 + 25) * 2);
    }

    #[test]
    fn test_particle_quads_fade() {
        let particles = [Particle {
            pos: Vec2::new(5.0, 5.0),
            vel: Vec2::ZERO,
            color: [1.0, 0.0, 0.0, 1.0],
            life: 0.5,
            size: 4.0,
        }];
        let vertices = particle_quads(&particles);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].color[3], 0.5);
    }

    #[test]
    fn test_instances_follow_state() {
        let mut state = SimulationState::default();
        state.toggle_multi_objects();
        state.launch();
        let instances = object_instances(&state);
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[0].position, state.primary.body.pos.to_array());
        assert_eq!(instances[0].color, state.primary.color());
    }

    #[test]
    fn test_trail_follows_mode() {
        let mut state = SimulationState::default();
        state.trajectory.record(Vec2::ZERO, 0.0);
        state.trajectory.record(Vec2::ONE, 0.1);
        assert!(trajectory_vertices(&state).is_empty());
        state.trajectory_mode = TrajectoryMode::Line;
        assert_eq!(trajectory_vertices(&state).len(), 2);
    }
}
