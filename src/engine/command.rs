//! The camera's complete interactive vocabulary.
//!
//! Every camera change, whether it came from a held key, cursor motion,
//! the scroll wheel, or a script, is represented as a `CameraCommand`.
//! Consumers construct commands and pass them to
//! [`FlyEngine::execute`](super::FlyEngine::execute).

use crate::camera::{Camera, Movement};

/// A single camera update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Translate for one frame.
    Move {
        /// Which way to move.
        direction: Movement,
        /// Seconds elapsed since the previous frame.
        delta_time: f32,
    },
    /// Turn by a cursor offset.
    Look {
        /// Horizontal offset in pixels (feeds yaw).
        x_offset: f32,
        /// Vertical offset in pixels, positive upward (feeds pitch).
        y_offset: f32,
    },
    /// Change the field of view by a scroll offset.
    Zoom {
        /// Scroll amount (positive narrows the view).
        delta: f32,
    },
}

impl Camera {
    /// Apply one command. `constrain_pitch` is forwarded to mouse look.
    pub fn apply(&mut self, command: CameraCommand, constrain_pitch: bool) {
        match command {
            CameraCommand::Move {
                direction,
                delta_time,
            } => self.process_movement(direction, delta_time),
            CameraCommand::Look { x_offset, y_offset } => {
                self.process_mouse_look(x_offset, y_offset, constrain_pitch);
            }
            CameraCommand::Zoom { delta } => self.process_zoom(delta),
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn apply_matches_direct_calls() {
        let mut via_commands = Camera::default();
        let mut direct = Camera::default();

        via_commands.apply(
            CameraCommand::Move {
                direction: Movement::Left,
                delta_time: 0.2,
            },
            true,
        );
        via_commands.apply(
            CameraCommand::Look {
                x_offset: 30.0,
                y_offset: -12.0,
            },
            true,
        );
        via_commands.apply(CameraCommand::Zoom { delta: 4.0 }, true);

        direct.process_movement(Movement::Left, 0.2);
        direct.process_mouse_look(30.0, -12.0, true);
        direct.process_zoom(4.0);

        assert_eq!(via_commands, direct);
    }

    #[test]
    fn pitch_constraint_is_forwarded() {
        let look = CameraCommand::Look {
            x_offset: 0.0,
            y_offset: 2000.0,
        };

        let mut constrained = Camera::new(Vec3::ZERO, Vec3::Y, -90.0, 0.0);
        constrained.apply(look, true);
        assert_eq!(constrained.pitch(), 89.0);

        let mut free = Camera::new(Vec3::ZERO, Vec3::Y, -90.0, 0.0);
        free.apply(look, false);
        assert_eq!(free.pitch(), 200.0);
    }
}
