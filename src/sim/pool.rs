//! Fixed-capacity body pool
//!
//! Dense storage with swap-remove: removing a body moves the last live
//! body into the vacated slot in O(1). Any remove therefore invalidates
//! indices; per-frame algorithms must not cache them across removals.

use glam::Vec2;

use super::body::{Body, Color};

/// Dense, order-unstable collection of bodies
#[derive(Debug, Clone)]
pub struct BodyPool {
    bodies: Vec<Body>,
    capacity: usize,
}

impl BodyPool {
    /// Empty pool holding at most `capacity` bodies
    pub fn new(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Spawn a body at rest, returning its current index. A spawn into a
    /// full pool is dropped and returns `None`.
    pub fn spawn(&mut self, radius: f32, color: Color, position: Vec2) -> Option<usize> {
        if self.bodies.len() >= self.capacity {
            log::debug!("spawn ignored, pool at capacity ({})", self.capacity);
            return None;
        }
        self.bodies.push(Body::new(radius, color, position));
        Some(self.bodies.len() - 1)
    }

    /// Swap-remove the body at `index`; the last live body takes its
    /// slot. Out-of-range indices are a no-op.
    pub fn remove(&mut self, index: usize) -> Option<Body> {
        if index >= self.bodies.len() {
            return None;
        }
        Some(self.bodies.swap_remove(index))
    }

    /// Drop every body
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Maximum number of live bodies
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Body> {
        self.bodies.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    /// Distinct mutable borrows of the bodies at `i` and `j`.
    ///
    /// Panics unless `i < j < len`.
    pub fn pair_mut(&mut self, i: usize, j: usize) -> (&mut Body, &mut Body) {
        assert!(i < j, "pair_mut requires i < j (got {i}, {j})");
        let (head, tail) = self.bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    }
}
