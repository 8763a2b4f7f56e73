//! Frame description: a session snapshot turned into styled shapes

use glam::{IVec2, Vec2};

use super::vertex::colors;
use crate::sim::{Rect, Snapshot};

/// Where the score label is drawn
pub const SCORE_POS: IVec2 = IVec2::new(10, 20);

/// A single shape for the host to draw
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: [f32; 4],
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Text {
        /// Baseline origin
        pos: IVec2,
        text: String,
        color: [f32; 4],
    },
}

/// Draw list for one frame: paddle, ball, bricks, then the score label
pub fn frame_commands(snapshot: &Snapshot) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(snapshot.bricks.len() + 3);

    commands.push(DrawCommand::FillRect {
        rect: snapshot.paddle,
        color: colors::PADDLE,
    });

    let radius = snapshot.ball.diameter as f32 / 2.0;
    commands.push(DrawCommand::FillCircle {
        center: snapshot.ball.pos.as_vec2() + Vec2::splat(radius),
        radius,
        color: colors::BALL,
    });

    commands.extend(snapshot.bricks.iter().map(|&rect| DrawCommand::FillRect {
        rect,
        color: colors::BRICK,
    }));

    commands.push(DrawCommand::Text {
        pos: SCORE_POS,
        text: format!("Score: {}", snapshot.score),
        color: colors::TEXT,
    });

    commands
}
