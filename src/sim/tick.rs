//! Fixed timestep simulation tick
//!
//! Advances a session by exactly one step and drives the game-over / replay
//! transitions.

use serde::Serialize;

use super::state::{GamePhase, GameSession, SessionError};
use crate::consts::BRICK_POINTS;

/// What happened during a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TickEvents {
    /// Ball bounced off the paddle
    pub paddle_hit: bool,
    /// (row, col) of each brick destroyed, in the order they were hit
    pub bricks_destroyed: Vec<(usize, usize)>,
    /// Score gained this tick
    pub points: u32,
    /// Ball left the bottom of the field
    pub game_over: bool,
}

impl GameSession {
    /// Advance the simulation by one fixed timestep
    pub fn tick(&mut self) -> Result<TickEvents, SessionError> {
        if self.phase() != GamePhase::Running {
            return Err(SessionError::NotRunning {
                phase: self.phase(),
            });
        }

        let mut events = TickEvents::default();
        let config = *self.config();
        self.advance_clock();

        self.paddle.tick(config.paddle_step, config.paddle_max_x());
        self.ball.tick(config.ball_max_x());

        if self.ball.collides_with_paddle(&self.paddle) {
            self.ball.reverse_vertical_direction();
            events.paddle_hit = true;
        }

        // Every visible brick is tested against the ball's current position,
        // including bricks after one that was just hit this tick.
        for (row, col, brick) in self.bricks.iter_cells_mut() {
            if brick.is_visible() && self.ball.collides_with_brick(brick) {
                brick.set_visible(false);
                self.ball.reverse_vertical_direction();
                events.bricks_destroyed.push((row, col));
                events.points += BRICK_POINTS;
                log::debug!("Brick ({row}, {col}) destroyed");
            }
        }
        self.add_score(events.points);

        if self.ball.pos.y > config.field_height {
            self.set_phase(GamePhase::GameOverPending);
            events.game_over = true;
            log::info!(
                "Game over after {} ticks, score {}",
                self.time_ticks(),
                self.score()
            );
        }

        Ok(events)
    }

    /// Resolve a pending game over: replay restarts, otherwise exit
    pub fn on_replay_decision(&mut self, play_again: bool) -> Result<(), SessionError> {
        if self.phase() != GamePhase::GameOverPending {
            return Err(SessionError::NoPendingDecision {
                phase: self.phase(),
            });
        }

        if play_again {
            self.restart();
        } else {
            self.set_phase(GamePhase::Exited);
            log::info!("Player exited with score {}", self.score());
        }
        Ok(())
    }
}
