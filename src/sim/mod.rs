//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one `tick()` per step, no wall clock)
//! - Integer geometry only
//! - Stable iteration order (bricks are walked row-major)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use autopilot::{PaddleIntent, steer};
pub use collision::{Rect, ball_hits_brick, ball_hits_paddle};
pub use snapshot::{BallView, Snapshot};
pub use state::{Ball, Brick, BrickGrid, GamePhase, GameSession, Paddle, SessionError};
pub use tick::TickEvents;
