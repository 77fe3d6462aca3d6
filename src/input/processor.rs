//! Converts raw platform events into per-frame camera commands.
//!
//! The `InputProcessor` owns all transient input state (held keys, cursor
//! anchor, accumulated look and scroll offsets) and the key-binding map.
//! Events are only recorded as they arrive; the camera is touched once per
//! frame, when the render loop polls for that frame's command batch.

use std::collections::HashSet;

use super::event::InputEvent;
use super::keyboard::KeyAction;
use super::mouse::CursorTracker;
use crate::engine::command::CameraCommand;
use crate::options::KeybindingOptions;

/// Commands gathered for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Camera commands, in the order they should be applied.
    pub commands: Vec<CameraCommand>,
    /// A key bound to [`KeyAction::Quit`] was pressed since the last poll.
    pub quit_requested: bool,
}

/// Records input events and emits a batch of [`CameraCommand`]s per frame.
///
/// # Usage
///
/// ```
/// use flycam::input::{InputEvent, InputProcessor};
///
/// let mut input = InputProcessor::new();
/// input.handle_event(InputEvent::key_down("KeyW"));
///
/// let frame = input.poll(0.016);
/// assert_eq!(frame.commands.len(), 1);
/// ```
#[derive(Debug)]
pub struct InputProcessor {
    /// Cursor anchor and accumulated look offsets.
    cursor: CursorTracker,
    /// Key strings currently held down.
    held: HashSet<String>,
    /// Scroll accumulated since the last poll.
    scroll: f32,
    /// Set by a quit key press, cleared by the next poll.
    quit_requested: bool,
    /// Action ↔ key mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            cursor: CursorTracker::default(),
            held: HashSet::new(),
            scroll: 0.0,
            quit_requested: false,
            key_bindings,
        }
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeybindingOptions {
        &mut self.key_bindings
    }

    /// Whether the key is currently held.
    #[must_use]
    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Record a raw input event. Never produces commands directly.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key { key, pressed } => self.handle_key(key, pressed),
            InputEvent::CursorMoved { x, y } => {
                self.cursor.handle_position(x, y);
            }
            InputEvent::Scroll { delta } => self.scroll += delta,
            InputEvent::FocusLost => {
                // Releases won't arrive while unfocused
                self.held.clear();
                self.cursor.reset();
            }
        }
    }

    fn handle_key(&mut self, key: String, pressed: bool) {
        if !pressed {
            let _ = self.held.remove(&key);
            return;
        }
        if self.key_bindings.lookup(&key) == Some(KeyAction::Quit) {
            log::info!("quit requested via {key}");
            self.quit_requested = true;
        }
        let _ = self.held.insert(key);
    }

    /// Drain everything recorded since the previous poll into one frame's
    /// commands.
    ///
    /// Emits one `Move` per held movement key (forward, backward, left,
    /// right, up, down), then at most one `Look`, then at most one `Zoom`.
    /// Held keys carry over to the next frame.
    pub fn poll(&mut self, delta_time: f32) -> FrameInput {
        let mut commands = Vec::new();

        for action in KeyAction::ALL {
            let Some(direction) = action.movement() else {
                continue;
            };
            // A key drives only the action its reverse lookup names
            let held = self.key_bindings.key_for(action).is_some_and(|key| {
                self.held.contains(key)
                    && self.key_bindings.lookup(key) == Some(action)
            });
            if held {
                commands.push(CameraCommand::Move {
                    direction,
                    delta_time,
                });
            }
        }

        let look = self.cursor.take_offset();
        if look.x != 0.0 || look.y != 0.0 {
            commands.push(CameraCommand::Look {
                x_offset: look.x,
                y_offset: look.y,
            });
        }

        let scroll = std::mem::take(&mut self.scroll);
        if scroll != 0.0 {
            commands.push(CameraCommand::Zoom { delta: scroll });
        }

        FrameInput {
            commands,
            quit_requested: std::mem::take(&mut self.quit_requested),
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}
