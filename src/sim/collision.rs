//! Pairwise collision detection and elastic response
//!
//! Bodies are non-rotating, so the response acts purely along the line
//! between centers, per the two-dimensional elastic collision equations
//! (<https://en.wikipedia.org/wiki/Elastic_collision#Two-dimensional>).

use glam::Vec2;

use super::body::Body;
use crate::consts::SEPARATION_OVERSHOOT;

/// Whether two bodies currently overlap. Exact tangency counts as a
/// collision, so a touching pair never sits unresolved.
pub fn overlaps(a: &Body, b: &Body) -> bool {
    let contact = a.radius + b.radius;
    a.position.distance_squared(b.position) <= contact * contact
}

/// Elastic velocity exchange plus positional correction for an
/// overlapping pair.
///
/// Both outgoing velocities are computed from a snapshot of the incoming
/// state before either body is written back. Afterwards `one` is pushed
/// out along the contact normal to just past contact distance; `two`
/// keeps its position, so the caller's pair ordering decides which body
/// moves.
///
/// Returns `false` without touching either body when the centers
/// coincide; the contact normal is undefined there and the pair is left
/// for a later frame.
pub fn resolve_collision(one: &mut Body, two: &mut Body) -> bool {
    let delta = one.position - two.position;
    let dist_sq = delta.length_squared();
    if dist_sq == 0.0 {
        return false;
    }

    let one_vel = deflected(one, two, delta, dist_sq);
    let two_vel = deflected(two, one, -delta, dist_sq);
    one.velocity = one_vel;
    two.velocity = two_vel;

    let normal = delta / dist_sq.sqrt();
    one.position = two.position + normal * (two.radius + one.radius * SEPARATION_OVERSHOOT);
    true
}

/// Post-collision velocity for `one` against `two`, with `delta` the
/// center offset `one - two`
fn deflected(one: &Body, two: &Body, delta: Vec2, dist_sq: f32) -> Vec2 {
    let mass_share = 2.0 * two.mass / (one.mass + two.mass);
    let closing = (one.velocity - two.velocity).dot(delta) / dist_sq;
    one.velocity - mass_share * closing * delta
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::Color;
    use proptest::prelude::*;

    fn body(radius: f32, position: Vec2, velocity: Vec2) -> Body {
        let mut body = Body::new(radius, Color::WHITE, position);
        body.velocity = velocity;
        body
    }

    fn momentum(a: &Body, b: &Body) -> Vec2 {
        a.mass * a.velocity + b.mass * b.velocity
    }

    #[test]
    fn test_overlap_at_exact_tangency() {
        let a = body(10.0, Vec2::new(0.0, 0.0), Vec2::ZERO);
        let b = body(20.0, Vec2::new(30.0, 0.0), Vec2::ZERO);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_no_overlap_beyond_tangency() {
        let a = body(10.0, Vec2::new(0.0, 0.0), Vec2::ZERO);
        let b = body(20.0, Vec2::new(30.1, 0.0), Vec2::ZERO);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_equal_masses_swap_velocities_head_on() {
        // Catches a resolver that feeds one body's updated velocity into
        // the other's computation
        let mut a = body(20.0, Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0));
        let mut b = body(20.0, Vec2::new(30.0, 0.0), Vec2::new(-5.0, 0.0));

        assert!(resolve_collision(&mut a, &mut b));
        assert!((a.velocity.x - (-5.0)).abs() < 1e-4);
        assert!((b.velocity.x - 5.0).abs() < 1e-4);
        assert!(a.velocity.y.abs() < 1e-4);
        assert!(b.velocity.y.abs() < 1e-4);
    }

    #[test]
    fn test_momentum_is_conserved() {
        let mut a = body(10.0, Vec2::new(0.0, 0.0), Vec2::new(3.0, -2.0));
        let mut b = body(15.0, Vec2::new(18.0, 7.0), Vec2::new(-1.0, 4.0));
        let before = momentum(&a, &b);

        assert!(resolve_collision(&mut a, &mut b));
        let after = momentum(&a, &b);
        assert!((before - after).length() < 1e-3);
    }

    #[test]
    fn test_depenetration_separates_pair() {
        let mut a = body(10.0, Vec2::new(100.0, 100.0), Vec2::ZERO);
        let mut b = body(15.0, Vec2::new(110.0, 100.0), Vec2::ZERO);

        assert!(resolve_collision(&mut a, &mut b));
        let dist = a.position.distance(b.position);
        // Pushed to contact distance plus the overshoot on a's radius
        assert!((dist - (15.0 + 10.0 * SEPARATION_OVERSHOOT)).abs() < 1e-3);
        assert!(dist >= a.radius + b.radius);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_only_first_body_is_relocated() {
        let mut a = body(10.0, Vec2::new(100.0, 100.0), Vec2::ZERO);
        let mut b = body(10.0, Vec2::new(105.0, 100.0), Vec2::ZERO);

        resolve_collision(&mut a, &mut b);
        assert_eq!(b.position, Vec2::new(105.0, 100.0));
        assert_ne!(a.position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_coincident_centers_skip_resolution() {
        let mut a = body(10.0, Vec2::new(50.0, 50.0), Vec2::new(1.0, 2.0));
        let mut b = body(12.0, Vec2::new(50.0, 50.0), Vec2::new(-3.0, 0.5));

        assert!(!resolve_collision(&mut a, &mut b));
        assert_eq!(a.velocity, Vec2::new(1.0, 2.0));
        assert_eq!(b.velocity, Vec2::new(-3.0, 0.5));
        assert_eq!(a.position, b.position);
        assert!(a.velocity.is_finite() && b.velocity.is_finite());
    }

    proptest! {
        #[test]
        fn momentum_conserved_for_overlapping_pairs(
            x in -200.0f32..200.0,
            y in -200.0f32..200.0,
            angle in 0.0f32..std::f32::consts::TAU,
            gap in 0.05f32..0.99,
            r1 in 5.0f32..60.0,
            r2 in 5.0f32..60.0,
            v1x in -10.0f32..10.0,
            v1y in -10.0f32..10.0,
            v2x in -10.0f32..10.0,
            v2y in -10.0f32..10.0,
        ) {
            let p1 = Vec2::new(x, y);
            let offset = Vec2::new(angle.cos(), angle.sin()) * gap * (r1 + r2);
            let mut a = body(r1, p1, Vec2::new(v1x, v1y));
            let mut b = body(r2, p1 + offset, Vec2::new(v2x, v2y));
            let before = momentum(&a, &b);

            prop_assert!(overlaps(&a, &b));
            prop_assert!(resolve_collision(&mut a, &mut b));

            let after = momentum(&a, &b);
            let tolerance = 1e-3 * before.length().max(1.0);
            prop_assert!((before - after).length() <= tolerance);
        }

        #[test]
        fn resolved_pairs_no_longer_overlap(
            angle in 0.0f32..std::f32::consts::TAU,
            gap in 0.05f32..0.99,
            r1 in 5.0f32..60.0,
            r2 in 5.0f32..60.0,
        ) {
            let p1 = Vec2::new(300.0, 300.0);
            let offset = Vec2::new(angle.cos(), angle.sin()) * gap * (r1 + r2);
            let mut a = body(r1, p1, Vec2::ZERO);
            let mut b = body(r2, p1 + offset, Vec2::ZERO);

            prop_assert!(resolve_collision(&mut a, &mut b));
            prop_assert!(a.position.distance(b.position) + 1e-3 >= r1 + r2);
        }
    }
}
