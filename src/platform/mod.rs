//! Platform abstraction layer
//!
//! Pieces a host needs to drive a session:
//! - Key events to paddle intents
//! - Wall-clock frame time to whole simulation ticks

pub mod clock;
pub mod input;

pub use clock::FixedStep;
pub use input::{Key, KeyEvent, apply_key_event};
