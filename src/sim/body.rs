//! Body and color records
//!
//! A body is a non-rotating circular point mass. Mass is always derived
//! from radius at construction and never set independently.

use glam::Vec2;
use rand::Rng;

/// RGBA display color. Irrelevant to physics, carried only for the
/// rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Random fully-opaque color; every channel stays at or above 10 so
    /// bodies never vanish against a dark background
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random_range(10..=255),
            g: rng.random_range(10..=255),
            b: rng.random_range(10..=255),
            a: 255,
        }
    }
}

/// A simulated ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Circle radius
    pub radius: f32,
    /// Always 2 x radius; written once by [`Body::new`]
    pub mass: f32,
    /// Display color
    pub color: Color,
    /// Circle center in arena coordinates (origin top-left, y down)
    pub position: Vec2,
    /// Displacement per frame
    pub velocity: Vec2,
}

impl Body {
    /// New body at rest
    pub fn new(radius: f32, color: Color, position: Vec2) -> Self {
        Self {
            radius,
            mass: 2.0 * radius,
            color,
            position,
            velocity: Vec2::ZERO,
        }
    }

    /// Whether `point` lies inside this body's disc (boundary inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance_squared(point) <= self.radius * self.radius
    }
}
