//! Ball Simulator: soft discs pushing each other around a fixed playfield.
//!
//! - `body`: physics shared by every simulated disc
//! - `ball`: the concrete disc and its random spawning
//! - `sim`: simulation state, commands and the per-frame step
//! - `render`: piston/OpenGL drawing of a simulation

#[macro_use]
extern crate derive_new;

#[macro_use]
pub mod body;

pub mod ball;
pub mod config;
pub mod controls;
pub mod format;
pub mod playfield;
pub mod render;
pub mod scenes;
pub mod sim;
pub mod tools;

pub use ball::Ball;
pub use body::Body;
pub use config::Config;
pub use controls::Command;
pub use playfield::Playfield;
pub use sim::Simulation;

pub type Float = f64;

/// Radius shared by every disc.
pub const RADIUS: Float = 50.0;
/// Speed given to randomly spawned discs.
pub const MAXVEL: i32 = 4;
/// Stiffness of the wall penalty force.
pub const WALL_BOUNCY: Float = 0.01;
/// Stiffness of the disc-disc penalty force.
pub const REPULSION: Float = 0.01;
/// Placement attempts made by a single random spawn.
pub const SPAWN_ATTEMPTS: usize = 10;

pub const TWO_PI: Float = std::f64::consts::PI * 2.0;
