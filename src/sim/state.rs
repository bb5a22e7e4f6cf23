//! Simulation state and frame events
//!
//! Everything the simulation owns lives in one explicit context object
//! threaded through input handling, stepping and rendering. No globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::body::Color;
use super::boundary::Arena;
use super::pool::BodyPool;
use crate::settings::Settings;

/// Observable per-frame signals for external collaborators; the audio
/// side plays a hit sound per `BodiesCollided`.
///
/// Body indices are valid only until the next tick, since any remove
/// reorders the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    /// A pair of bodies collided and was resolved
    BodiesCollided { a: usize, b: usize },
    /// A body reflected off an arena wall
    WallBounce { body: usize },
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct SimState {
    /// Physics tunables, fixed after construction
    pub settings: Settings,
    /// Arena rectangle derived from the settings
    pub arena: Arena,
    /// Live bodies
    pub bodies: BodyPool,
    /// Radius for the next spawn, scroll-adjustable
    spawn_radius: f32,
    /// Spawn color source. Seeded, so runs with equal seeds and inputs
    /// produce identical pools.
    rng: Pcg32,
    /// Events emitted by the current frame, drained by collaborators
    pub(crate) events: Vec<SimEvent>,
}

impl SimState {
    /// New state with default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(Settings::default(), seed)
    }

    /// New state with explicit settings
    pub fn with_settings(settings: Settings, seed: u64) -> Self {
        let arena = Arena::new(settings.arena_width, settings.arena_height);
        let bodies = BodyPool::new(settings.max_bodies);
        let spawn_radius = settings.min_radius;
        Self {
            settings,
            arena,
            bodies,
            spawn_radius,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Radius the next spawn will use
    pub fn spawn_radius(&self) -> f32 {
        self.spawn_radius
    }

    /// Nudge the spawn radius by a scroll delta (in wheel notches),
    /// clamped to the configured range
    pub fn adjust_spawn_radius(&mut self, notches: f32) {
        let step = self.settings.scroll_step;
        self.spawn_radius = self.settings.clamp_radius(self.spawn_radius + notches * step);
    }

    /// Spawn a body at rest at `position` with the current spawn radius
    /// and a random color. Silently dropped when the pool is full.
    pub fn spawn_at(&mut self, position: Vec2) {
        let color = Color::random(&mut self.rng);
        if let Some(index) = self.bodies.spawn(self.spawn_radius, color, position) {
            log::debug!("spawned body {index} r={} at {position}", self.spawn_radius);
        }
    }

    /// Remove the first body (in pool order) whose disc contains
    /// `point`. A miss is a no-op.
    pub fn remove_at(&mut self, point: Vec2) {
        let found = self.bodies.iter().position(|b| b.contains(point));
        if let Some(index) = found {
            self.bodies.remove(index);
            log::debug!("removed body {index}");
        }
    }

    /// Drop every body
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    /// Events emitted since the last drain
    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    /// Drain the event queue. Collaborators call this once per frame,
    /// after `tick`.
    pub fn take_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }
}
