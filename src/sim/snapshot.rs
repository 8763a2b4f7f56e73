//! Read-only per-frame view of a session for renderers

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{GamePhase, GameSession};

/// Ball as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallView {
    /// Top-left of the bounding box
    pub pos: IVec2,
    pub diameter: i32,
}

/// Everything a frame needs to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub paddle: Rect,
    pub ball: BallView,
    /// Visible bricks only, row-major
    pub bricks: Vec<Rect>,
    pub score: u32,
    pub phase: GamePhase,
}

impl GameSession {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            paddle: self.paddle.rect(),
            ball: BallView {
                pos: self.ball.pos,
                diameter: self.ball.diameter(),
            },
            bricks: self
                .bricks
                .iter_visible()
                .map(|(_, _, brick)| brick.rect())
                .collect(),
            score: self.score(),
            phase: self.phase(),
        }
    }
}
