//! Bounce - a gravity sandbox of elastically colliding balls
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, frame stepping)
//! - `settings`: Data-driven physics tunables
//!
//! Windowing, input polling, rendering and audio playback are external
//! collaborators. They feed a [`sim::TickInput`] into each frame, read the
//! body pool back out, and drain the event queue. The crate itself stays
//! headless.

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Simulation constants
pub mod consts {
    /// Arena width in pixels (origin top-left, x right, y down)
    pub const ARENA_WIDTH: f32 = 600.0;
    /// Arena height in pixels
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Hard cap on live bodies; spawns beyond this are dropped
    pub const MAX_BODIES: usize = 512;

    /// Smallest spawnable radius
    pub const MIN_RADIUS: f32 = 5.0;
    /// Largest spawnable radius
    pub const MAX_RADIUS: f32 = 100.0;

    /// Gravity gain on `velocity.y` per second of frame time
    pub const GRAVITY: f32 = 8.0;

    /// Spawn radius change per scroll-wheel notch
    pub const SCROLL_STEP: f32 = 1.5;

    /// Fraction of speed kept after a wall bounce
    pub const RESTITUTION: f32 = 0.80;

    /// De-penetration pushes the corrected body slightly past contact
    /// distance so the pair does not re-collide on the next frame
    pub const SEPARATION_OVERSHOOT: f32 = 1.1;

    /// Frame delta at the 60 FPS target
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}
