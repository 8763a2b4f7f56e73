//! Rendering adapters
//!
//! Turns a session snapshot into draw commands and triangle vertices. No GPU
//! or window code lives here; the host uploads the vertices however it likes.

pub mod draw;
pub mod shapes;
pub mod vertex;

pub use draw::{DrawCommand, frame_commands};
pub use shapes::tessellate;
pub use vertex::Vertex;
