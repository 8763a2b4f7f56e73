//! Keyboard input adapter

use crate::sim::GameSession;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a browser / winit style key name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            _ => None,
        }
    }
}

/// A press or release of a game key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub pressed: bool,
}

impl KeyEvent {
    pub fn pressed(key: Key) -> Self {
        Self { key, pressed: true }
    }

    pub fn released(key: Key) -> Self {
        Self {
            key,
            pressed: false,
        }
    }
}

/// Forward a key event to the paddle's held-direction flags
pub fn apply_key_event(session: &mut GameSession, event: KeyEvent) {
    match event.key {
        Key::Left => session.set_moving_left(event.pressed),
        Key::Right => session.set_moving_right(event.pressed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_name("Right"), Some(Key::Right));
        assert_eq!(Key::from_name(" "), None);
        assert_eq!(Key::from_name("arrowleft"), None);
    }

    #[test]
    fn test_press_and_release() {
        let mut session = GameSession::new();
        apply_key_event(&mut session, KeyEvent::pressed(Key::Left));
        assert!(session.paddle.moving_left);
        assert!(!session.paddle.moving_right);

        // Repeats are harmless
        apply_key_event(&mut session, KeyEvent::pressed(Key::Left));
        session.tick().unwrap();
        assert_eq!(session.paddle.pos.x, 345);

        apply_key_event(&mut session, KeyEvent::released(Key::Left));
        assert!(!session.paddle.moving_left);
        session.tick().unwrap();
        assert_eq!(session.paddle.pos.x, 345);
    }
}
