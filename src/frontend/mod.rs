//! Headless frontend: everything between a platform layer and the core that
//! doesn't need a window.
//!
//! - `input`: abstract keys/clicks and the classic bindings
//! - `session`: per-frame command queue, tick and restart handling
//! - `scene`: display list for a frame snapshot

pub mod input;
pub mod scene;
pub mod session;

pub use input::{Command, Controls, InputEvent, Key, PointerButton, Rect, RESTART_BUTTON};
pub use scene::{DrawCommand, Scene};
pub use session::{Session, FRAME_INTERVAL};
