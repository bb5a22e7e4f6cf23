//! Arena walls
//!
//! Axis-aligned rectangle anchored at the origin. A body whose edge
//! reaches a wall has that velocity component reflected with restitution
//! and its position clamped so the edge sits exactly on the boundary.
//! The horizontal and vertical checks are independent; a corner hit
//! reflects both axes in the same frame.

use super::body::Body;

/// The fixed rectangular arena `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Reflect and clamp `body` against the walls. Edge contact is
    /// inclusive. Returns whether any reflection occurred.
    pub fn bounce(&self, body: &mut Body, restitution: f32) -> bool {
        let mut bounced = false;

        if body.position.x + body.radius >= self.width {
            body.velocity.x = -body.velocity.x * restitution;
            body.position.x = self.width - body.radius;
            bounced = true;
        } else if body.position.x - body.radius <= 0.0 {
            body.velocity.x = -body.velocity.x * restitution;
            body.position.x = body.radius;
            bounced = true;
        }

        if body.position.y + body.radius >= self.height {
            body.velocity.y = -body.velocity.y * restitution;
            body.position.y = self.height - body.radius;
            bounced = true;
        } else if body.position.y - body.radius <= 0.0 {
            body.velocity.y = -body.velocity.y * restitution;
            body.position.y = body.radius;
            bounced = true;
        }

        bounced
    }
}
