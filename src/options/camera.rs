use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::core::{
    ZoomRange, DEFAULT_PITCH, DEFAULT_SENSITIVITY, DEFAULT_SPEED, DEFAULT_YAW,
    DEFAULT_ZOOM,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera state, control sensitivities, and projection planes.
pub struct CameraOptions {
    /// Initial eye position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial yaw in degrees.
    #[schemars(title = "Yaw")]
    pub yaw: f32,
    /// Initial pitch in degrees.
    #[schemars(title = "Pitch", range(min = -89.0, max = 89.0))]
    pub pitch: f32,
    /// Movement speed in world units per second.
    #[schemars(title = "Movement Speed", range(min = 0.1, max = 50.0), extend("step" = 0.1))]
    pub movement_speed: f32,
    /// Degrees of rotation per pixel of cursor travel.
    #[schemars(title = "Mouse Sensitivity", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub mouse_sensitivity: f32,
    /// Initial vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub zoom: f32,
    /// Narrowest field of view reachable by zooming.
    #[schemars(title = "Min Field of View", range(min = 1.0, max = 179.0))]
    pub zoom_min: f32,
    /// Widest field of view reachable by zooming.
    #[schemars(title = "Max Field of View", range(min = 1.0, max = 179.0))]
    pub zoom_max: f32,
    /// Hold pitch within ±89° during mouse look.
    #[schemars(title = "Constrain Pitch")]
    pub constrain_pitch: bool,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 3.0],
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            movement_speed: DEFAULT_SPEED,
            mouse_sensitivity: DEFAULT_SENSITIVITY,
            zoom: DEFAULT_ZOOM,
            zoom_min: ZoomRange::DEFAULT.min(),
            zoom_max: ZoomRange::DEFAULT.max(),
            constrain_pitch: true,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}

impl CameraOptions {
    /// Configured zoom bounds.
    #[must_use]
    pub fn zoom_range(&self) -> ZoomRange {
        ZoomRange::new(self.zoom_min, self.zoom_max)
    }

    /// Check for values the camera or projection cannot work with.
    ///
    /// Returns a human-readable description of the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.position.iter().any(|c| !c.is_finite()) {
            return Err("camera.position must be finite".into());
        }
        if !(self.movement_speed.is_finite() && self.movement_speed >= 0.0) {
            return Err(format!(
                "camera.movement_speed must be non-negative, got {}",
                self.movement_speed
            ));
        }
        if !(self.mouse_sensitivity.is_finite() && self.mouse_sensitivity >= 0.0) {
            return Err(format!(
                "camera.mouse_sensitivity must be non-negative, got {}",
                self.mouse_sensitivity
            ));
        }
        for (name, value) in [("yaw", self.yaw), ("pitch", self.pitch), ("zoom", self.zoom)] {
            if !value.is_finite() {
                return Err(format!("camera.{name} must be finite, got {value}"));
            }
        }
        if self.zoom_min > self.zoom_max {
            return Err(format!(
                "camera.zoom_min ({}) exceeds camera.zoom_max ({})",
                self.zoom_min, self.zoom_max
            ));
        }
        if !(self.zoom_min > 0.0 && self.zoom_max < 180.0) {
            return Err(format!(
                "camera zoom bounds must lie inside (0, 180), got [{}, {}]",
                self.zoom_min, self.zoom_max
            ));
        }
        if !(self.znear > 0.0 && self.zfar > self.znear) {
            return Err(format!(
                "camera clip planes must satisfy 0 < znear < zfar, got {} / {}",
                self.znear, self.zfar
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(CameraOptions::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_zoom_bounds_rejected() {
        let opts = CameraOptions {
            zoom_min: 135.0,
            zoom_max: 45.0,
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());
        // The range itself still orders the bounds
        assert_eq!(opts.zoom_range().min(), 45.0);
    }

    #[test]
    fn wide_zoom_range_accepted() {
        let opts = CameraOptions {
            zoom: 90.0,
            zoom_min: 45.0,
            zoom_max: 135.0,
            ..CameraOptions::default()
        };
        assert_eq!(opts.validate(), Ok(()));
    }

    #[test]
    fn bad_clip_planes_rejected() {
        let opts = CameraOptions {
            znear: 10.0,
            zfar: 1.0,
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn negative_speed_rejected() {
        let opts = CameraOptions {
            movement_speed: -1.0,
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());
    }

    #[test]
    fn negative_sensitivity_rejected() {
        let opts = CameraOptions {
            mouse_sensitivity: -0.5,
            ..CameraOptions::default()
        };
        assert!(opts.validate().is_err());

        let zero = CameraOptions {
            mouse_sensitivity: 0.0,
            ..CameraOptions::default()
        };
        assert_eq!(zero.validate(), Ok(()));
    }

    #[test]
    fn non_finite_angles_and_zoom_rejected() {
        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let yaw = CameraOptions {
                yaw: bad,
                ..CameraOptions::default()
            };
            let pitch = CameraOptions {
                pitch: bad,
                ..CameraOptions::default()
            };
            let zoom = CameraOptions {
                zoom: bad,
                ..CameraOptions::default()
            };
            assert!(yaw.validate().is_err(), "yaw = {bad}");
            assert!(pitch.validate().is_err(), "pitch = {bad}");
            assert!(zoom.validate().is_err(), "zoom = {bad}");
        }
    }
}
