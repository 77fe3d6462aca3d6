//! The render loop's camera context.
//!
//! [`FlyEngine`] bundles the camera with everything that drives it (input
//! processor, frame timing, options, projection) so the render loop can
//! own one value and pass it by reference to its event and draw code.

mod accessors;
pub mod command;

use glam::{Mat4, Vec3};

use self::command::CameraCommand;
use crate::camera::{Camera, Projection};
use crate::input::{InputEvent, InputProcessor};
use crate::options::{CameraOptions, Options};
use crate::util::frame_timing::FrameTiming;

/// Camera state captured after a frame's input has been applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// World → eye transform.
    pub view: Mat4,
    /// Perspective transform built from the camera's zoom.
    pub projection: Mat4,
    /// Eye position.
    pub position: Vec3,
    /// Unit look direction.
    pub forward: Vec3,
    /// Yaw in degrees.
    pub yaw: f32,
    /// Pitch in degrees.
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub zoom: f32,
    /// The user asked to quit during this frame.
    pub quit_requested: bool,
}

/// Camera, input, and timing context owned by the render loop.
///
/// # Usage
///
/// ```
/// use flycam::{FlyEngine, InputEvent, Options};
///
/// let mut engine = FlyEngine::new(Options::default());
///
/// // Event handling: record only.
/// engine.handle_event(InputEvent::key_down("KeyW"));
///
/// // Once per frame: apply the batch, then read the matrices.
/// let frame = engine.begin_frame(0.5);
/// assert!(frame.position.z < 3.0);
/// ```
#[derive(Debug)]
pub struct FlyEngine {
    camera: Camera,
    input: InputProcessor,
    projection: Projection,
    timing: FrameTiming,
    /// Key bindings live in `input`; only the camera section is kept here.
    camera_options: CameraOptions,
}

impl FlyEngine {
    /// Build the camera and input processor from `options`.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let camera = Camera::from_options(&options.camera);
        Self::with_camera(camera, options)
    }

    /// Use a pre-built camera; `options` still supplies key bindings, the
    /// pitch constraint, and clip planes.
    #[must_use]
    pub fn with_camera(camera: Camera, options: Options) -> Self {
        let Options { camera: camera_options, keybindings } = options;
        let projection = Projection {
            znear: camera_options.znear,
            zfar: camera_options.zfar,
            ..Projection::default()
        };
        Self {
            camera,
            input: InputProcessor::with_key_bindings(keybindings),
            projection,
            timing: FrameTiming::new(),
            camera_options,
        }
    }

    /// Record a platform input event for the next frame.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.handle_event(event);
    }

    /// Apply a single command to the camera immediately.
    pub fn execute(&mut self, command: CameraCommand) {
        log::trace!("camera command: {command:?}");
        self.camera.apply(command, self.camera_options.constrain_pitch);
    }

    /// Apply every command recorded since the previous frame, in order,
    /// and return the resulting camera state.
    ///
    /// `delta_time` is the elapsed seconds since the previous frame; it
    /// scales movement only.
    pub fn begin_frame(&mut self, delta_time: f32) -> FrameState {
        let frame = self.input.poll(delta_time);
        for command in frame.commands {
            self.execute(command);
        }
        self.frame_state(frame.quit_requested)
    }

    /// Measure the time since the previous tick and run
    /// [`begin_frame`](Self::begin_frame) with it.
    pub fn tick(&mut self) -> FrameState {
        let delta_time = self.timing.tick();
        self.begin_frame(delta_time)
    }

    /// Update the projection for a new viewport size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.projection.resize(width, height);
    }

    fn frame_state(&self, quit_requested: bool) -> FrameState {
        FrameState {
            view: self.camera.view_matrix(),
            projection: self.projection.matrix(self.camera.zoom()),
            position: self.camera.position(),
            forward: self.camera.forward(),
            yaw: self.camera.yaw(),
            pitch: self.camera.pitch(),
            zoom: self.camera.zoom(),
            quit_requested,
        }
    }
}
