use glam::Vec3;

/// Orthonormal camera frame derived from yaw and pitch.
///
/// `right` and `up` are rebuilt from cross products on every update rather
/// than rotated incrementally, so the frame cannot drift away from
/// orthonormality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    /// Look direction.
    pub forward: Vec3,
    /// Camera-local +X.
    pub right: Vec3,
    /// Camera-local +Y.
    pub up: Vec3,
}

impl Basis {
    /// Build the frame for the given Euler angles (degrees).
    ///
    /// Yaw turns around `world_up`; pitch tilts the look direction toward
    /// it. Yaw of -90° with zero pitch looks down -Z.
    #[must_use]
    pub fn from_euler(yaw: f32, pitch: f32, world_up: Vec3) -> Self {
        let (yaw_sin, yaw_cos) = yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = pitch.to_radians().sin_cos();

        let forward =
            Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos)
                .normalize();
        // Normalize: the cross product shrinks as forward approaches
        // world_up, which would otherwise slow sideways movement.
        let right = forward.cross(world_up).normalize();
        let up = right.cross(forward).normalize();

        Self { forward, right, up }
    }
}
