//! Display and object modes toggled by input
//!
//! Each mode is a closed cycle; `next()` is the only transition.

use serde::{Deserialize, Serialize};

/// Shape of the simulated object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObjectType {
    Cube,
    #[default]
    Sphere,
    Bunny,
}

impl ObjectType {
    pub const ALL: [ObjectType; 3] = [ObjectType::Cube, ObjectType::Sphere, ObjectType::Bunny];

    pub fn next(self) -> Self {
        match self {
            ObjectType::Cube => ObjectType::Sphere,
            ObjectType::Sphere => ObjectType::Bunny,
            ObjectType::Bunny => ObjectType::Cube,
        }
    }

    /// Next shape in the cycle, skipping the bunny when its mesh failed to load
    pub fn next_available(self, bunny_loaded: bool) -> Self {
        let next = self.next();
        if next == ObjectType::Bunny && !bunny_loaded {
            next.next()
        } else {
            next
        }
    }

    /// Whether the shape spins while moving
    pub fn rotates(self) -> bool {
        matches!(self, ObjectType::Cube | ObjectType::Bunny)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectType::Cube => "Cube",
            ObjectType::Sphere => "Sphere",
            ObjectType::Bunny => "Bunny",
        }
    }
}

/// Polygon fill mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DrawingMode {
    Wireframe,
    #[default]
    Solid,
}

impl DrawingMode {
    pub fn next(self) -> Self {
        match self {
            DrawingMode::Wireframe => DrawingMode::Solid,
            DrawingMode::Solid => DrawingMode::Wireframe,
        }
    }
}

/// How recorded positions are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TrajectoryMode {
    #[default]
    None,
    /// Connected polyline
    Line,
    /// Discrete markers
    Strobe,
}

impl TrajectoryMode {
    pub fn next(self) -> Self {
        match self {
            TrajectoryMode::None => TrajectoryMode::Line,
            TrajectoryMode::Line => TrajectoryMode::Strobe,
            TrajectoryMode::Strobe => TrajectoryMode::None,
        }
    }

    /// Whether positions should be sampled at all
    pub fn is_recording(self) -> bool {
        self != TrajectoryMode::None
    }
}

/// Background grid overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GridMode {
    #[default]
    None,
    Basic,
    Detailed,
}

impl GridMode {
    pub fn next(self) -> Self {
        match self {
            GridMode::None => GridMode::Basic,
            GridMode::Basic => GridMode::Detailed,
            GridMode::Detailed => GridMode::None,
        }
    }

    /// Distance between grid lines in pixels
    pub fn spacing(self) -> Option<f32> {
        match self {
            GridMode::None => None,
            GridMode::Basic => Some(50.0),
            GridMode::Detailed => Some(25.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycles_return_to_start() {
        let mut t = TrajectoryMode::None;
        for _ in 0..3 {
            t = t.next();
        }
        assert_eq!(t, TrajectoryMode::None);

        let mut g = GridMode::None;
        for _ in 0..3 {
            g = g.next();
        }
        assert_eq!(g, GridMode::None);

        assert_eq!(DrawingMode::Solid.next().next(), DrawingMode::Solid);
    }

    #[test]
    fn test_object_cycle_visits_every_shape() {
        for kind in ObjectType::ALL {
            let mut seen = vec![kind];
            let mut current = kind.next();
            while current != kind {
                seen.push(current);
                current = current.next();
            }
            assert_eq!(seen.len(), ObjectType::ALL.len());
            assert!(ObjectType::ALL.iter().all(|k| seen.contains(k)));
        }
    }

    #[test]
    fn test_object_cycle_skips_missing_bunny() {
        assert_eq!(ObjectType::Sphere.next_available(true), ObjectType::Bunny);
        assert_eq!(ObjectType::Sphere.next_available(false), ObjectType::Cube);
        assert_eq!(ObjectType::Bunny.next_available(false), ObjectType::Cube);
    }

    #[test]
    fn test_only_active_modes_record() {
        assert!(!TrajectoryMode::None.is_recording());
        assert!(TrajectoryMode::Line.is_recording());
        assert!(TrajectoryMode::Strobe.is_recording());
    }
}
