//! Brick Breaker - a single-screen paddle-and-ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `settings`: Field dimensions and tuning knobs
//! - `renderer`: Snapshot to draw commands and vertex data
//! - `platform`: Key mapping and fixed-step clock for hosts

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, GameConfig};
pub use sim::{GamePhase, GameSession, SessionError, Snapshot, TickEvents};

/// Game configuration constants
pub mod consts {
    /// Simulation timestep in milliseconds (100 Hz)
    pub const TICK_MS: u32 = 10;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame delta the clock will accept (ms)
    pub const MAX_FRAME_MS: u32 = 100;

    /// Default field dimensions
    pub const FIELD_WIDTH: i32 = 800;
    pub const FIELD_HEIGHT: i32 = 600;
    /// Largest accepted field width or height
    pub const MAX_FIELD_DIM: i32 = 16_384;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 20;
    pub const PADDLE_STEP: i32 = 5;
    /// Distance from the paddle's top edge to the bottom of the field
    pub const PADDLE_BOTTOM_OFFSET: i32 = 50;

    /// Ball defaults
    pub const BALL_DIAMETER: i32 = 20;
    /// Per-axis speed (units per tick)
    pub const BALL_START_SPEED: i32 = 2;

    /// Brick defaults
    pub const BRICK_WIDTH: i32 = 80;
    pub const BRICK_HEIGHT: i32 = 20;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 8;
    /// Horizontal distance between brick origins
    pub const BRICK_PITCH_X: i32 = 100;
    /// Vertical distance between brick origins
    pub const BRICK_PITCH_Y: i32 = 30;
    pub const BRICK_OFFSET_X: i32 = 20;
    pub const BRICK_OFFSET_Y: i32 = 50;
    /// Points awarded per destroyed brick
    pub const BRICK_POINTS: u32 = 10;
}
