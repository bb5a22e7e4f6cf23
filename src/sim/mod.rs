//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and headless:
//! - One `tick` per rendered frame, with the frame delta supplied by the caller
//! - Seeded RNG only (spawn colors)
//! - No rendering, audio or platform dependencies

pub mod body;
pub mod boundary;
pub mod collision;
pub mod pool;
pub mod state;
pub mod tick;

pub use body::{Body, Color};
pub use boundary::Arena;
pub use collision::{overlaps, resolve_collision};
pub use pool::BodyPool;
pub use state::{SimEvent, SimState};
pub use tick::{TickInput, settle_overlaps, tick};
