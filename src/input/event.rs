use serde::{Deserialize, Serialize};

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor), which
/// records them and emits camera commands once per frame when polled.
///
/// Serialized with a `type` tag so input scripts read naturally:
/// ```toml
/// events = [
///     { type = "key", key = "KeyW", pressed = true },
///     { type = "cursor_moved", x = 410.0, y = 300.0 },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// A physical key changed state.
    Key {
        /// Key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyW"`, `"Space"`, `"Escape"`).
        key: String,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (grows downward).
        y: f32,
    },
    /// Vertical scroll wheel movement (positive = away from the user).
    Scroll {
        /// Scroll amount in lines.
        delta: f32,
    },
    /// The window lost keyboard/cursor focus.
    FocusLost,
}

impl InputEvent {
    /// Shorthand for a key press.
    #[must_use]
    pub fn key_down(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            pressed: true,
        }
    }

    /// Shorthand for a key release.
    #[must_use]
    pub fn key_up(key: impl Into<String>) -> Self {
        Self::Key {
            key: key.into(),
            pressed: false,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Translate a winit window event, if it carries camera input.
    ///
    /// Key repeats are dropped since held keys are polled per frame.
    /// Pixel-precise wheel deltas are scaled to roughly one line per 100
    /// pixels.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, MouseScrollDelta, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return None;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(Self::Key {
                    key: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::CursorMoved { position, .. } => Some(Self::CursorMoved {
                x: position.x as f32,
                y: position.y as f32,
            }),
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                Some(Self::Scroll { delta })
            }
            WindowEvent::Focused(false) => Some(Self::FocusLost),
            _ => None,
        }
    }
}
