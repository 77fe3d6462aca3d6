use serde::{Deserialize, Serialize};

/// Direction of a keyboard-style movement step.
///
/// Kept independent of any windowing library: the input layer maps
/// physical keys onto these variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    /// No movement.
    #[default]
    None,
    /// Along the camera's forward vector.
    Forward,
    /// Against the camera's forward vector.
    Backward,
    /// Against the camera's right vector.
    Left,
    /// Along the camera's right vector.
    Right,
    /// Along the world up vector.
    Up,
    /// Against the world up vector.
    Down,
}

impl Movement {
    /// Every direction that actually moves the camera, in the order the
    /// input processor emits them.
    pub const DIRECTIONS: [Self; 6] = [
        Self::Forward,
        Self::Backward,
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
    ];

    /// The direction that undoes this one.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::None => Self::None,
            Self::Forward => Self::Backward,
            Self::Backward => Self::Forward,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}
