//! Per-frame simulation step
//!
//! One `tick` per rendered frame: queued intents first, then a single
//! pairwise collision pass, wall handling, and integration. The pairwise
//! pass is non-iterative; resolving one pair may push a body into a
//! third, and that overlap waits for the next frame.

use glam::Vec2;

use super::collision::{overlaps, resolve_collision};
use super::state::{SimEvent, SimState};

/// Intents gathered by the input collaborator for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Spawn a body at this point with the current spawn radius
    pub spawn_at: Option<Vec2>,
    /// Remove the first body whose disc contains this point
    pub remove_at: Option<Vec2>,
    /// Scroll-wheel notches this frame; scales the spawn radius
    pub scroll: f32,
    /// Drop every body
    pub clear: bool,
}

/// Advance the simulation by one frame.
///
/// `dt` is the wall-clock time in seconds since the previous frame
/// started. It is not clamped; a long stall feeds one large gravity
/// impulse into the next frame.
///
/// Events from the previous frame are discarded when the new one
/// starts, so after `tick` the queue holds exactly this frame's events.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    state.events.clear();
    apply_intents(state, input);
    resolve_pairs(state);
    handle_walls(state);
    integrate(state, dt);
}

fn apply_intents(state: &mut SimState, input: &TickInput) {
    if input.scroll != 0.0 {
        state.adjust_spawn_radius(input.scroll);
    }
    if let Some(point) = input.spawn_at {
        state.spawn_at(point);
    }
    if let Some(point) = input.remove_at {
        state.remove_at(point);
    }
    if input.clear {
        state.clear();
    }
}

/// Single pass over all unordered pairs in pool order. The body at the
/// lower index is the one relocated during de-penetration.
fn resolve_pairs(state: &mut SimState) {
    let count = state.bodies.len();
    for i in 0..count {
        for j in (i + 1)..count {
            let (a, b) = state.bodies.pair_mut(i, j);
            if overlaps(a, b) && resolve_collision(a, b) {
                state.events.push(SimEvent::BodiesCollided { a: i, b: j });
            }
        }
    }
}

fn handle_walls(state: &mut SimState) {
    let arena = state.arena;
    let restitution = state.settings.restitution;
    for (index, body) in state.bodies.iter_mut().enumerate() {
        if arena.bounce(body, restitution) {
            state.events.push(SimEvent::WallBounce { body: index });
        }
    }
}

/// Semi-implicit Euler in per-frame units: gravity feeds velocity once,
/// velocity is applied to position as a straight displacement
fn integrate(state: &mut SimState, dt: f32) {
    let gravity = state.settings.gravity;
    for body in state.bodies.iter_mut() {
        body.velocity.y += gravity * dt;
        body.position += body.velocity;
    }
}

/// Repeat the pairwise collision pass until no pair overlaps or
/// `max_rounds` is reached, returning the number of rounds that resolved
/// at least one pair.
///
/// The regular [`tick`] never does this; it exists for embeddings that
/// want a fully separated pool (scene setup, screenshots). Emits no
/// events.
pub fn settle_overlaps(state: &mut SimState, max_rounds: usize) -> usize {
    for round in 0..max_rounds {
        let mut resolved_any = false;
        let count = state.bodies.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (a, b) = state.bodies.pair_mut(i, j);
                if overlaps(a, b) && resolve_collision(a, b) {
                    resolved_any = true;
                }
            }
        }
        if !resolved_any {
            return round;
        }
    }
    max_rounds
}
