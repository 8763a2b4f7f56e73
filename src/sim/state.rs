//! Game state and core simulation types
//!
//! The session owns every entity. Entities expose their geometry for
//! collision tests but never mutate each other.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::collision::{Rect, ball_hits_brick, ball_hits_paddle};
use crate::consts::*;
use crate::settings::{ConfigError, GameConfig};

/// Where the session is in its play / game-over cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay, `tick()` is accepted
    Running,
    /// Ball fell out of the field, waiting for the replay decision
    GameOverPending,
    /// Player declined to replay; the host should stop
    Exited,
}

/// An operation was called in a phase that does not allow it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("tick() requires a running session (phase: {phase:?})")]
    NotRunning { phase: GamePhase },
    #[error("no replay decision is pending (phase: {phase:?})")]
    NoPendingDecision { phase: GamePhase },
    #[error("session has exited and cannot be restarted")]
    Exited,
}

/// A destructible target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pos: IVec2,
    visible: bool,
}

impl Brick {
    pub fn new(pos: IVec2) -> Self {
        Self { pos, visible: true }
    }

    /// Brick at its slot in the grid
    pub fn at_cell(row: usize, col: usize) -> Self {
        Self::new(IVec2::new(
            col as i32 * BRICK_PITCH_X + BRICK_OFFSET_X,
            row as i32 * BRICK_PITCH_Y + BRICK_OFFSET_Y,
        ))
    }

    #[inline]
    pub fn pos(&self) -> IVec2 {
        self.pos
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(BRICK_WIDTH, BRICK_HEIGHT)
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size(),
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

/// Fixed rows x cols arrangement of bricks, stored row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    rows: usize,
    cols: usize,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut grid = Self {
            rows,
            cols,
            bricks: Vec::with_capacity(rows * cols),
        };
        grid.reset();
        grid
    }

    /// Rebuild every brick at its grid position, all visible
    pub fn reset(&mut self) {
        self.bricks.clear();
        for row in 0..self.rows {
            for col in 0..self.cols {
                self.bricks.push(Brick::at_cell(row, col));
            }
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        self.index(row, col).map(|i| &self.bricks[i])
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Brick> {
        self.index(row, col).map(|i| &mut self.bricks[i])
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Call `f(row, col, brick)` for every visible brick in row-major order
    pub fn for_each_visible(&self, mut f: impl FnMut(usize, usize, &Brick)) {
        for (row, col, brick) in self.iter_visible() {
            f(row, col, brick);
        }
    }

    /// Visible bricks in row-major order
    pub fn iter_visible(&self) -> impl Iterator<Item = (usize, usize, &Brick)> {
        let cols = self.cols;
        self.bricks
            .iter()
            .enumerate()
            .filter(|(_, b)| b.visible)
            .map(move |(i, b)| (i / cols, i % cols, b))
    }

    /// Mutable row-major walk over all bricks; visibility is checked by the caller
    pub(crate) fn iter_cells_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut Brick)> {
        let cols = self.cols;
        self.bricks
            .iter_mut()
            .enumerate()
            .map(move |(i, b)| (i / cols, i % cols, b))
    }

    pub fn remaining(&self) -> usize {
        self.bricks.iter().filter(|b| b.visible).count()
    }

    pub fn any_remaining(&self) -> bool {
        self.bricks.iter().any(|b| b.visible)
    }

    pub fn all_destroyed(&self) -> bool {
        !self.any_remaining()
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: IVec2,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Paddle {
    /// Paddle centred horizontally near the bottom of the field
    pub fn for_field(config: &GameConfig) -> Self {
        Self {
            pos: IVec2::new(
                config.field_width / 2 - PADDLE_WIDTH / 2,
                config.field_height - PADDLE_BOTTOM_OFFSET,
            ),
            moving_left: false,
            moving_right: false,
        }
    }

    pub fn set_moving_left(&mut self, pressed: bool) {
        self.moving_left = pressed;
    }

    pub fn set_moving_right(&mut self, pressed: bool) {
        self.moving_right = pressed;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Apply held directions. Left is applied before right, so holding both
    /// can still move the paddle.
    pub fn tick(&mut self, step: i32, max_x: i32) {
        if self.moving_left && self.pos.x > 0 {
            self.pos.x = self.pos.x.saturating_sub(step).max(0);
        }
        if self.moving_right && self.pos.x < max_x {
            self.pos.x = self.pos.x.saturating_add(step).min(max_x);
        }
    }
}

/// The ball. `pos` is the top-left of its bounding box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
}

impl Ball {
    /// Ball at the field centre, heading up and to the right
    pub fn for_field(config: &GameConfig) -> Self {
        let speed = config.ball_initial_speed;
        Self {
            pos: IVec2::new(config.field_width / 2, config.field_height / 2),
            vel: IVec2::new(speed, -speed),
        }
    }

    #[inline]
    pub fn diameter(&self) -> i32 {
        BALL_DIAMETER
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, BALL_DIAMETER, BALL_DIAMETER)
    }

    /// Move by one velocity step, then bounce off the side and top walls.
    ///
    /// The bounce test uses the post-move position and the position is not
    /// pulled back inside, so the ball may overshoot a wall for a tick.
    pub fn tick(&mut self, max_x: i32) {
        self.pos += self.vel;

        if self.pos.x < 0 || self.pos.x > max_x {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y < 0 {
            self.vel.y = -self.vel.y;
        }
    }

    pub fn collides_with_paddle(&self, paddle: &Paddle) -> bool {
        ball_hits_paddle(&self.rect(), &paddle.rect())
    }

    pub fn collides_with_brick(&self, brick: &Brick) -> bool {
        ball_hits_brick(&self.rect(), &brick.rect())
    }

    /// Flip vertical velocity and lift the ball by one diameter so it does
    /// not register the same contact again next tick.
    pub fn reverse_vertical_direction(&mut self) {
        self.vel.y = -self.vel.y;
        self.pos.y -= BALL_DIAMETER;
    }
}

/// One playthrough: entities, score and phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    pub(crate) paddle: Paddle,
    pub(crate) ball: Ball,
    pub(crate) bricks: BrickGrid,
    score: u32,
    phase: GamePhase,
    /// Ticks since the current round started
    time_ticks: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Session on the default 800x600 field, already running
    pub fn new() -> Self {
        Self::build(GameConfig::default())
    }

    /// Session with a custom config, validated first
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: GameConfig) -> Self {
        let mut session = Self {
            config,
            paddle: Paddle::for_field(&config),
            ball: Ball::for_field(&config),
            bricks: BrickGrid::new(config.brick_rows, config.brick_cols),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
        };
        session.restart();
        session
    }

    /// Begin a fresh round: score 0, full grid, ball at its start.
    /// The paddle keeps its position.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.phase == GamePhase::Exited {
            return Err(SessionError::Exited);
        }
        self.restart();
        Ok(())
    }

    pub(crate) fn restart(&mut self) {
        self.score = 0;
        self.bricks.reset();
        self.ball = Ball::for_field(&self.config);
        self.phase = GamePhase::Running;
        self.time_ticks = 0;
        log::info!(
            "Session started: {}x{} bricks on a {}x{} field",
            self.bricks.rows(),
            self.bricks.cols(),
            self.config.field_width,
            self.config.field_height
        );
    }

    pub fn set_moving_left(&mut self, pressed: bool) {
        self.paddle.set_moving_left(pressed);
    }

    pub fn set_moving_right(&mut self, pressed: bool) {
        self.paddle.set_moving_right(pressed);
    }

    #[inline]
    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    #[inline]
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    #[inline]
    pub fn bricks(&self) -> &BrickGrid {
        &self.bricks
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score += points;
    }

    pub(crate) fn set_phase(&mut self, phase: GamePhase) {
        self.phase = phase;
    }

    pub(crate) fn advance_clock(&mut self) {
        self.time_ticks += 1;
    }
}
