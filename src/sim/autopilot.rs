//! Demo player
//!
//! Tracks the ball with the paddle so the game can run unattended. Produces
//! held-direction intents only; the session is never touched.

use super::state::GameSession;
use crate::consts::PADDLE_WIDTH;

/// Directions the paddle should hold for the next tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub left: bool,
    pub right: bool,
}

impl PaddleIntent {
    pub fn apply(self, session: &mut GameSession) {
        session.set_moving_left(self.left);
        session.set_moving_right(self.right);
    }
}

/// Steer the paddle centre toward the ball centre, idling within one step
pub fn steer(session: &GameSession) -> PaddleIntent {
    let ball = &session.ball;
    let ball_center = ball.pos.x + ball.diameter() / 2;
    let paddle_center = session.paddle.pos.x + PADDLE_WIDTH / 2;
    let dead_zone = session.config().paddle_step;

    let offset = ball_center - paddle_center;
    PaddleIntent {
        left: offset < -dead_zone,
        right: offset > dead_zone,
    }
}

#[cfg(test)]
mod tests {
    use glam::IVec2;

    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_steer_toward_ball() {
        let mut session = GameSession::new();
        session.ball.pos = IVec2::new(100, 300);
        assert_eq!(
            steer(&session),
            PaddleIntent {
                left: true,
                right: false
            }
        );

        session.ball.pos = IVec2::new(700, 300);
        assert_eq!(
            steer(&session),
            PaddleIntent {
                left: false,
                right: true
            }
        );
    }

    #[test]
    fn test_idle_when_centred() {
        let mut session = GameSession::new();
        // Paddle centre is 400, ball centre 402
        session.ball.pos = IVec2::new(392, 300);
        assert_eq!(steer(&session), PaddleIntent::default());
    }

    #[test]
    fn test_autopilot_keeps_ball_alive() {
        let mut session = GameSession::new();
        for _ in 0..20_000 {
            steer(&session).apply(&mut session);
            session.tick().unwrap();
            assert_eq!(session.phase(), GamePhase::Running);
        }
        assert!(session.score() > 0);
    }
}
