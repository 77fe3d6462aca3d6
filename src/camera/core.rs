use glam::{Mat4, Vec3};

use super::basis::Basis;
use super::movement::Movement;
use crate::options::CameraOptions;

/// Initial yaw in degrees; looks down -Z.
pub const DEFAULT_YAW: f32 = -90.0;
/// Initial pitch in degrees.
pub const DEFAULT_PITCH: f32 = 0.0;
/// World units per second.
pub const DEFAULT_SPEED: f32 = 2.5;
/// Degrees of rotation per pixel of cursor travel.
pub const DEFAULT_SENSITIVITY: f32 = 0.1;
/// Initial vertical field of view in degrees.
pub const DEFAULT_ZOOM: f32 = 45.0;
/// Pitch is kept strictly inside ±90° so forward never becomes parallel to
/// world up.
pub const PITCH_LIMIT: f32 = 89.0;

/// Closed interval (degrees) the field of view is held to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRange {
    min: f32,
    max: f32,
}

impl ZoomRange {
    /// Narrowest-to-widest range used when nothing else is configured.
    pub const DEFAULT: Self = Self {
        min: 1.0,
        max: 45.0,
    };

    /// Create a range from two bounds given in either order.
    #[must_use]
    pub fn new(a: f32, b: f32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Lower bound in degrees.
    #[must_use]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound in degrees.
    #[must_use]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Saturate `value` into the range.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// Whether `value` lies inside the range (inclusive).
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

impl Default for ZoomRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// First-person camera driven by Euler angles.
///
/// Owns position, yaw/pitch, and field of view; the orthonormal
/// [`Basis`] is derived from the angles and rebuilt after every
/// orientation change. All operations are total: out-of-range pitch and
/// zoom saturate instead of failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    basis: Basis,
    movement_speed: f32,
    mouse_sensitivity: f32,
    zoom: f32,
    zoom_range: ZoomRange,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl Camera {
    /// Create a camera at `position` with the given reference up vector
    /// and orientation (degrees). Speed, sensitivity, and zoom take their
    /// defaults.
    #[must_use]
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            world_up,
            yaw,
            pitch,
            basis: Basis::from_euler(yaw, pitch, world_up),
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            zoom_range: ZoomRange::DEFAULT,
        }
    }

    /// Scalar form of [`Camera::new`].
    #[must_use]
    pub fn from_components(
        pos_x: f32,
        pos_y: f32,
        pos_z: f32,
        up_x: f32,
        up_y: f32,
        up_z: f32,
        yaw: f32,
        pitch: f32,
    ) -> Self {
        Self::new(
            Vec3::new(pos_x, pos_y, pos_z),
            Vec3::new(up_x, up_y, up_z),
            yaw,
            pitch,
        )
    }

    /// Create a camera from configured options.
    ///
    /// The configured pitch is clamped when `constrain_pitch` is set and
    /// the configured zoom is clamped into the configured bounds.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let pitch = if options.constrain_pitch {
            options.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT)
        } else {
            options.pitch
        };
        let zoom_range = options.zoom_range();

        let mut camera = Self::new(
            Vec3::from_array(options.position),
            Vec3::Y,
            options.yaw,
            pitch,
        );
        camera.movement_speed = options.movement_speed;
        camera.mouse_sensitivity = options.mouse_sensitivity;
        camera.zoom_range = zoom_range;
        camera.zoom = zoom_range.clamp(options.zoom);
        camera
    }

    /// Translate along the camera frame for `delta_time` seconds.
    ///
    /// `delta_time` must be non-negative; it is not validated.
    pub fn process_movement(&mut self, direction: Movement, delta_time: f32) {
        let velocity = self.movement_speed * delta_time;
        match direction {
            Movement::None => {}
            Movement::Forward => self.position += self.basis.forward * velocity,
            Movement::Backward => {
                self.position -= self.basis.forward * velocity;
            }
            Movement::Left => self.position -= self.basis.right * velocity,
            Movement::Right => self.position += self.basis.right * velocity,
            Movement::Up => self.position += self.world_up * velocity,
            Movement::Down => self.position -= self.world_up * velocity,
        }
    }

    /// Turn by a cursor offset in pixels.
    ///
    /// `x_offset` feeds yaw and `y_offset` feeds pitch, both scaled by the
    /// mouse sensitivity. With `constrain_pitch` the pitch saturates at
    /// ±[`PITCH_LIMIT`].
    pub fn process_mouse_look(
        &mut self,
        x_offset: f32,
        y_offset: f32,
        constrain_pitch: bool,
    ) {
        self.yaw += x_offset * self.mouse_sensitivity;
        self.pitch += y_offset * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_basis();
    }

    /// Narrow (positive offset) or widen the field of view by a scroll
    /// offset, saturating at the zoom bounds.
    pub fn process_zoom(&mut self, scroll_offset: f32) {
        self.zoom = self.zoom_range.clamp(self.zoom - scroll_offset);
    }

    /// Right-handed look-at transform from the current position along
    /// forward.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position,
            self.position + self.basis.forward,
            self.basis.up,
        )
    }

    /// Replace yaw and pitch (degrees) and rebuild the basis. Pitch is
    /// taken as given.
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch;
        self.update_basis();
    }

    /// Move the camera to `position` without changing orientation.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the movement speed in world units per second.
    pub fn set_movement_speed(&mut self, speed: f32) {
        self.movement_speed = speed;
    }

    /// Set the degrees of rotation per pixel of cursor travel.
    pub fn set_mouse_sensitivity(&mut self, sensitivity: f32) {
        self.mouse_sensitivity = sensitivity;
    }

    /// Replace the zoom bounds and re-clamp the current zoom into them.
    pub fn set_zoom_range(&mut self, range: ZoomRange) {
        self.zoom_range = range;
        self.zoom = range.clamp(self.zoom);
    }

    /// World-space eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Fixed reference up vector.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current orthonormal frame.
    #[must_use]
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// Unit look direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.basis.forward
    }

    /// Unit camera-right vector.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.basis.right
    }

    /// Unit camera-up vector.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.basis.up
    }

    /// Movement speed in world units per second.
    #[must_use]
    pub fn movement_speed(&self) -> f32 {
        self.movement_speed
    }

    /// Degrees of rotation per pixel of cursor travel.
    #[must_use]
    pub fn mouse_sensitivity(&self) -> f32 {
        self.mouse_sensitivity
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Bounds the field of view is held to.
    #[must_use]
    pub fn zoom_range(&self) -> ZoomRange {
        self.zoom_range
    }

    fn update_basis(&mut self) {
        self.basis = Basis::from_euler(self.yaw, self.pitch, self.world_up);
    }
}

/// Perspective parameters owned by the renderer. The camera only supplies
/// the field of view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            aspect: 800.0 / 600.0,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl Projection {
    /// Update the aspect ratio for a new viewport size. Zero-sized
    /// viewports (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Right-handed perspective matrix for the given vertical field of view
    /// in degrees.
    #[must_use]
    pub fn matrix(&self, fovy: f32) -> Mat4 {
        // perspective_rh uses [0,1] depth range (wgpu/Vulkan convention)
        Mat4::perspective_rh(fovy.to_radians(), self.aspect, self.znear, self.zfar)
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the view-projection matrix and camera
/// metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Padding for GPU alignment.
    pub(crate) _pad: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            fovy: DEFAULT_ZOOM,
            forward: [0.0, 0.0, -1.0],
            _pad: 0.0,
        }
    }

    /// Refresh every field from the camera and the renderer's projection.
    pub fn update(&mut self, camera: &Camera, projection: &Projection) {
        let view_proj = projection.matrix(camera.zoom()) * camera.view_matrix();
        self.view_proj = view_proj.to_cols_array_2d();
        self.position = camera.position().to_array();
        self.fovy = camera.zoom();
        self.forward = camera.forward().to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn default_camera_looks_down_negative_z() {
        let cam = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::Y, -90.0, 0.0);
        assert!(cam.forward().abs_diff_eq(Vec3::NEG_Z, EPS));

        let expected = Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::new(0.0, 0.0, 2.0),
            Vec3::Y,
        );
        assert!(cam.view_matrix().abs_diff_eq(expected, EPS));
    }

    #[test]
    fn mouse_look_scales_by_sensitivity() {
        let mut cam = Camera::default();
        let before = cam.forward();
        cam.process_mouse_look(100.0, 0.0, true);

        assert!((cam.yaw() - -80.0).abs() < 1e-6);
        assert_eq!(cam.pitch(), 0.0);
        assert!(!cam.forward().abs_diff_eq(before, EPS));
        assert!(cam
            .forward()
            .abs_diff_eq(Basis::from_euler(-80.0, 0.0, Vec3::Y).forward, EPS));
    }

    #[test]
    fn pitch_saturates_at_limit() {
        let mut cam = Camera::default();
        cam.process_mouse_look(0.0, 10_000.0, true);
        assert_eq!(cam.pitch(), PITCH_LIMIT);

        cam.process_mouse_look(0.0, -1.0e6, true);
        assert_eq!(cam.pitch(), -PITCH_LIMIT);

        // Small increments past the limit stay pinned
        for _ in 0..100 {
            cam.process_mouse_look(0.0, -3.0, true);
        }
        assert_eq!(cam.pitch(), -PITCH_LIMIT);
    }

    #[test]
    fn unconstrained_pitch_passes_limit() {
        let mut cam = Camera::default();
        cam.process_mouse_look(0.0, 950.0, false);
        assert!(cam.pitch() > PITCH_LIMIT);
    }

    #[test]
    fn zoom_stays_in_bounds() {
        let mut cam = Camera::default();
        for _ in 0..500 {
            cam.process_zoom(0.7);
            assert!(cam.zoom_range().contains(cam.zoom()));
        }
        assert_eq!(cam.zoom(), 1.0);

        for _ in 0..500 {
            cam.process_zoom(-3.0);
            assert!(cam.zoom_range().contains(cam.zoom()));
        }
        assert_eq!(cam.zoom(), 45.0);

        cam.process_zoom(f32::MAX);
        assert_eq!(cam.zoom(), 1.0);
    }

    #[test]
    fn zoom_range_reclamps_current_zoom() {
        let mut cam = Camera::default();
        cam.set_zoom_range(ZoomRange::new(135.0, 60.0));
        assert_eq!(cam.zoom_range().min(), 60.0);
        assert_eq!(cam.zoom(), 60.0);
    }

    #[test]
    fn no_movement_keeps_position() {
        let mut cam = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 30.0, 10.0);
        for dt in [0.0, 0.016, 1.0, 250.0] {
            cam.process_movement(Movement::None, dt);
            assert_eq!(cam.position(), Vec3::new(1.0, 2.0, 3.0));
        }
    }

    #[test]
    fn opposite_moves_cancel() {
        let start = Vec3::new(0.5, -1.0, 4.0);
        for dir in Movement::DIRECTIONS {
            let mut cam = Camera::new(start, Vec3::Y, 17.0, -33.0);
            cam.process_movement(dir, 0.25);
            assert!(!cam.position().abs_diff_eq(start, EPS));
            cam.process_movement(dir.opposite(), 0.25);
            assert!(cam.position().abs_diff_eq(start, EPS), "{dir:?}");
        }
    }

    #[test]
    fn movement_follows_basis() {
        let mut cam = Camera::new(Vec3::ZERO, Vec3::Y, -90.0, 0.0);
        cam.process_movement(Movement::Forward, 1.0);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 0.0, -2.5), EPS));

        cam.set_position(Vec3::ZERO);
        cam.process_movement(Movement::Right, 2.0);
        assert!(cam.position().abs_diff_eq(Vec3::new(5.0, 0.0, 0.0), EPS));

        // Vertical movement ignores pitch
        cam.set_position(Vec3::ZERO);
        cam.set_orientation(-90.0, 60.0);
        cam.process_movement(Movement::Up, 1.0);
        assert!(cam.position().abs_diff_eq(Vec3::new(0.0, 2.5, 0.0), EPS));
    }

    #[test]
    fn scalar_constructor_matches_vector_constructor() {
        let a = Camera::from_components(1.0, 2.0, 3.0, 0.0, 1.0, 0.0, 45.0, 5.0);
        let b = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::Y, 45.0, 5.0);
        assert_eq!(a, b);
    }

    #[test]
    fn from_options_clamps_pitch_and_zoom() {
        let options = CameraOptions {
            pitch: 120.0,
            zoom: 90.0,
            ..CameraOptions::default()
        };
        let cam = Camera::from_options(&options);
        assert_eq!(cam.pitch(), PITCH_LIMIT);
        assert_eq!(cam.zoom(), options.zoom_max);
        assert_eq!(cam.position(), Vec3::from_array(options.position));
    }

    #[test]
    fn uniform_tracks_camera() {
        let cam = Camera::new(Vec3::new(0.0, 1.0, 5.0), Vec3::Y, -90.0, 0.0);
        let projection = Projection::default();
        let mut uniform = CameraUniform::new();
        uniform.update(&cam, &projection);

        assert_eq!(uniform.position, [0.0, 1.0, 5.0]);
        assert_eq!(uniform.fovy, cam.zoom());
        let expected = projection.matrix(cam.zoom()) * cam.view_matrix();
        assert_eq!(uniform.view_proj, expected.to_cols_array_2d());
    }

    #[test]
    fn uniform_is_tightly_packed() {
        assert_eq!(bytemuck::bytes_of(&CameraUniform::new()).len(), 96);
    }

    #[test]
    fn projection_ignores_zero_sized_viewport() {
        let mut projection = Projection::default();
        projection.resize(1920, 1080);
        assert!((projection.aspect - 16.0 / 9.0).abs() < EPS);
        projection.resize(0, 1080);
        assert!((projection.aspect - 16.0 / 9.0).abs() < EPS);
    }
}
