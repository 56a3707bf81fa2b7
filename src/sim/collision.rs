//! Window boundary collision detection and response
//!
//! Screen coordinates: origin top-left, +y points down, so the floor is
//! the bottom edge at `height`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Visible region objects are kept inside
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Allowed range for an object's center given its half extent
    pub fn inset(&self, half_extent: f32) -> (Vec2, Vec2) {
        let min = Vec2::splat(half_extent);
        let max = Vec2::new(self.width - half_extent, self.height - half_extent).max(min);
        (min, max)
    }

    /// Whether a point lies within the window
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }
}

/// One of the four window edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Ceiling,
    Floor,
}

impl Wall {
    /// Unit normal pointing back into the window
    pub fn normal(self) -> Vec2 {
        match self {
            Wall::Left => Vec2::X,
            Wall::Right => Vec2::NEG_X,
            Wall::Ceiling => Vec2::Y,
            Wall::Floor => Vec2::NEG_Y,
        }
    }
}

/// Result of resolving one object against the walls
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WallContact {
    /// Side wall that reflected the velocity, if any
    pub horizontal: Option<Wall>,
    /// Floor or ceiling that reflected the velocity, if any
    pub vertical: Option<Wall>,
    /// Point on the object's surface touching the wall
    pub point: Vec2,
}

impl WallContact {
    pub fn miss() -> Self {
        Self::default()
    }

    /// True when at least one velocity component was reflected
    pub fn bounced(&self) -> bool {
        self.horizontal.is_some() || self.vertical.is_some()
    }
}

/// Reflect a velocity component off a wall if it points out of bounds
///
/// `outward` is +1.0 when positive velocity leaves through this wall.
#[inline]
pub fn reflect_component(velocity: f32, outward: f32, restitution: f32) -> Option<f32> {
    if velocity * outward > 0.0 {
        Some(-velocity * restitution)
    } else {
        None
    }
}

/// Clamp an object into bounds and reflect the crossing velocity components
///
/// A component that already points inward is left untouched, so running this
/// twice on the same object never pushes it further out. Floor impacts no
/// faster than `rest_speed` settle instead of bouncing.
pub fn resolve_walls(
    pos: &mut Vec2,
    vel: &mut Vec2,
    half_extent: f32,
    bounds: &Bounds,
    restitution: f32,
    rest_speed: f32,
) -> WallContact {
    let (min, max) = bounds.inset(half_extent);
    let mut contact = WallContact::miss();

    if pos.x < min.x {
        pos.x = min.x;
        if let Some(vx) = reflect_component(vel.x, -1.0, restitution) {
            vel.x = vx;
            contact.horizontal = Some(Wall::Left);
        }
    } else if pos.x > max.x {
        pos.x = max.x;
        if let Some(vx) = reflect_component(vel.x, 1.0, restitution) {
            vel.x = vx;
            contact.horizontal = Some(Wall::Right);
        }
    }

    if pos.y < min.y {
        pos.y = min.y;
        if let Some(vy) = reflect_component(vel.y, -1.0, restitution) {
            vel.y = vy;
            contact.vertical = Some(Wall::Ceiling);
        }
    } else if pos.y > max.y {
        pos.y = max.y;
        if vel.y > 0.0 && vel.y <= rest_speed {
            // Only this tick's gravity carried it down: resting contact
            vel.y = 0.0;
        } else if let Some(vy) = reflect_component(vel.y, 1.0, restitution) {
            vel.y = vy;
            contact.vertical = Some(Wall::Floor);
        }
    }

    let mut offset = Vec2::ZERO;
    if let Some(wall) = contact.horizontal {
        offset -= wall.normal() * half_extent;
    }
    if let Some(wall) = contact.vertical {
        offset -= wall.normal() * half_extent;
    }
    contact.point = *pos + offset;
    contact
}
