//! Recorded input scripts for headless replay.
//!
//! A script is a list of frames, each with a delta time and the events
//! that arrived before it:
//!
//! ```toml
//! [[frames]]
//! dt = 0.016
//! events = [{ type = "key", key = "KeyW", pressed = true }]
//!
//! [[frames]]
//! dt = 0.016
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::{FlyEngine, FrameState};
use crate::error::FlycamError;
use crate::input::InputEvent;

/// One recorded frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    /// Seconds elapsed since the previous frame.
    pub dt: f32,
    /// Events delivered before this frame is polled.
    #[serde(default)]
    pub events: Vec<InputEvent>,
}

/// Ordered list of recorded frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    /// Frames in playback order.
    #[serde(default)]
    pub frames: Vec<ScriptFrame>,
}

impl InputScript {
    /// Parse a script from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, FlycamError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| FlycamError::ScriptParse(e.to_string()))?;

        for (index, frame) in script.frames.iter().enumerate() {
            if !(frame.dt.is_finite() && frame.dt >= 0.0) {
                return Err(FlycamError::ScriptParse(format!(
                    "frame {index}: dt must be a non-negative number of \
                     seconds, got {}",
                    frame.dt
                )));
            }
        }
        Ok(script)
    }

    /// Load a script from a TOML file.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path)?;
        let script = Self::from_toml_str(&content)?;
        log::debug!(
            "loaded {} script frames from {}",
            script.frames.len(),
            path.display()
        );
        Ok(script)
    }
}

/// Feed every frame of `script` through `engine`.
///
/// Returns the state after each frame. Playback stops after the first
/// frame that requests quit.
pub fn replay(engine: &mut FlyEngine, script: &InputScript) -> Vec<FrameState> {
    let mut states = Vec::with_capacity(script.frames.len());
    for frame in &script.frames {
        for event in &frame.events {
            engine.handle_event(event.clone());
        }
        let state = engine.begin_frame(frame.dt);
        states.push(state);
        if state.quit_requested {
            break;
        }
    }
    states
}
