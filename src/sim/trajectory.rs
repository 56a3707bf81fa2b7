//! Bounded position history for trail rendering
//!
//! Fixed-capacity ring buffer: pushes go to the back, the oldest sample is
//! overwritten once full. Iteration is always oldest → newest.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::MAX_TRAJECTORY_POINTS;

/// One recorded sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    pub pos: Vec2,
    /// Simulation time (seconds) when recorded
    pub timestamp: f32,
}

#[derive(Debug, Clone)]
pub struct TrajectorySampler {
    points: Vec<TrajectoryPoint>,
    /// Index of the oldest sample
    head: usize,
    len: usize,
    capacity: usize,
}

impl Default for TrajectorySampler {
    fn default() -> Self {
        Self::new(MAX_TRAJECTORY_POINTS)
    }
}

impl TrajectorySampler {
    /// Create an empty sampler; a zero capacity is bumped to one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: Vec::with_capacity(capacity),
            head: 0,
            len: 0,
            capacity,
        }
    }

    /// Append a sample, evicting the oldest when full
    pub fn record(&mut self, pos: Vec2, timestamp: f32) {
        let point = TrajectoryPoint { pos, timestamp };
        if self.len < self.capacity {
            let slot = (self.head + self.len) % self.capacity;
            if slot == self.points.len() {
                self.points.push(point);
            } else {
                self.points[slot] = point;
            }
            self.len += 1;
        } else {
            self.points[self.head] = point;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.head = 0;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest retained sample
    pub fn oldest(&self) -> Option<&TrajectoryPoint> {
        self.get(0)
    }

    /// Most recent sample
    pub fn newest(&self) -> Option<&TrajectoryPoint> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Sample by chronological index (0 = oldest)
    pub fn get(&self, index: usize) -> Option<&TrajectoryPoint> {
        if index >= self.len {
            return None;
        }
        self.points.get((self.head + index) % self.capacity)
    }

    /// Samples in chronological order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TrajectoryPoint> + '_ {
        (0..self.len).map(move |i| &self.points[(self.head + i) % self.capacity])
    }
}
