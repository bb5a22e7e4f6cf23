//! Bounce entry point
//!
//! Headless demo loop standing in for the windowing collaborator: spawns
//! a short rain of balls, steps the simulation with 60 FPS frame deltas
//! and logs what the audio collaborator would hear.

use bounce::consts::FRAME_DT;
use bounce::sim::{SimEvent, SimState, TickInput, tick};
use glam::Vec2;

fn main() {
    env_logger::init();
    log::info!("Bounce (headless) starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let mut state = SimState::new(seed);
    log::info!("Simulation seeded with {seed}");

    let spawn_points = [
        Vec2::new(120.0, 60.0),
        Vec2::new(300.0, 40.0),
        Vec2::new(480.0, 60.0),
        Vec2::new(200.0, 90.0),
        Vec2::new(400.0, 90.0),
        Vec2::new(300.0, 120.0),
    ];

    let mut collisions = 0usize;
    let mut wall_bounces = 0usize;

    for frame in 0..600u32 {
        let mut input = TickInput::default();

        // One spawn every 20 frames until the script runs out; larger
        // balls for the second half of the script
        if frame % 20 == 0 {
            let index = (frame / 20) as usize;
            if index < spawn_points.len() {
                input.spawn_at = Some(spawn_points[index]);
            }
            if index == 3 {
                input.scroll = 4.0;
            }
        }
        // Pluck a ball out of the pile near the end of the run; a miss
        // is a silent no-op
        if frame == 500 {
            input.remove_at = Some(Vec2::new(300.0, 580.0));
        }

        tick(&mut state, &input, FRAME_DT);

        for event in state.take_events() {
            match event {
                SimEvent::BodiesCollided { a, b } => {
                    collisions += 1;
                    log::debug!("frame {frame}: bodies {a} and {b} collided");
                }
                SimEvent::WallBounce { body } => {
                    wall_bounces += 1;
                    log::debug!("frame {frame}: body {body} bounced off a wall");
                }
            }
        }
    }

    log::info!(
        "600 frames done: {} bodies live, {collisions} body collisions, {wall_bounces} wall bounces",
        state.bodies.len()
    );
}
