//! Read and reconfiguration access for [`FlyEngine`].

use super::FlyEngine;
use crate::camera::{Camera, Projection};
use crate::input::InputProcessor;
use crate::options::{CameraOptions, Options};

impl FlyEngine {
    /// The camera being driven.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera access for direct placement (e.g. respawn).
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Current options: the camera section the engine was built from and
    /// the input processor's live key bindings.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            camera: self.camera_options.clone(),
            keybindings: self.input.key_bindings().clone(),
        }
    }

    /// Camera section of the options (pitch constraint, clip planes).
    #[must_use]
    pub fn camera_options(&self) -> &CameraOptions {
        &self.camera_options
    }

    /// Input processor, e.g. to inspect held keys.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Mutable input processor, e.g. to rebind keys at runtime.
    pub fn input_mut(&mut self) -> &mut InputProcessor {
        &mut self.input
    }

    /// Current perspective parameters.
    #[must_use]
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Smoothed frames per second, fed by [`tick`](Self::tick).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }
}
