//! First-person camera model.
//!
//! Euler-angle orientation with an orthonormal basis rebuilt on every
//! change, keyboard-style movement, mouse look with pitch clamping, and
//! field-of-view zoom.

/// Orthonormal frame derived from yaw and pitch.
pub mod basis;
/// Camera state, view matrix, and GPU uniform types.
pub mod core;
/// Movement directions.
pub mod movement;

pub use basis::Basis;
pub use self::core::{Camera, CameraUniform, Projection, ZoomRange, PITCH_LIMIT};
pub use movement::Movement;
