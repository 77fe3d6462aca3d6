//! Input handling: event types, cursor tracking, and the input processor
//! that converts raw window events into per-frame camera commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Cursor anchoring and offset accumulation.
pub(crate) mod mouse;
/// Converts raw events into camera commands.
pub mod processor;

pub use event::InputEvent;
pub use keyboard::KeyAction;
pub use processor::{FrameInput, InputProcessor};
