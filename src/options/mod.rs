//! Camera and input options with TOML preset support.
//!
//! Options serialize to/from TOML so a render loop can ship presets such
//! as a wide-angle "inspection" camera alongside the default one.

mod camera;
mod keybindings;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::FlycamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial camera state and control parameters.
    pub camera: CameraOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the user-tunable options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse and validate options from TOML text. Missing fields use
    /// defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, FlycamError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, FlycamError> {
        let content = std::fs::read_to_string(path).map_err(FlycamError::Io)?;
        let options = Self::from_toml_str(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), FlycamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FlycamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(FlycamError::Io)?;
        }
        std::fs::write(path, content).map_err(FlycamError::Io)?;
        log::debug!("saved options to {}", path.display());
        Ok(())
    }

    /// Check every section for values the camera cannot work with.
    pub fn validate(&self) -> Result<(), FlycamError> {
        self.camera
            .validate()
            .and_then(|()| self.keybindings.validate())
            .map_err(FlycamError::InvalidOptions)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::input::KeyAction;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("flycam-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[camera]
movement_speed = 5.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.camera.movement_speed, 5.0);
        // Everything else should be default
        assert_eq!(opts.camera.mouse_sensitivity, 0.1);
        assert_eq!(opts.keybindings, KeybindingOptions::default());
    }

    #[test]
    fn partial_keybindings_overlay_defaults() {
        let toml_str = r#"
[keybindings.bindings]
move_up = "KeyE"
move_down = "KeyQ"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.keybindings.lookup("KeyE"), Some(KeyAction::MoveUp));
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::MoveDown));
        assert_eq!(
            opts.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
        assert_eq!(opts.keybindings.lookup("Space"), None);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(opts.keybindings.lookup("KeyW"), Some(KeyAction::MoveForward));
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn invalid_zoom_bounds_rejected_on_parse() {
        let toml_str = r"
[camera]
zoom_min = 90.0
zoom_max = 30.0
";
        let err = Options::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, FlycamError::InvalidOptions(_)));
    }

    #[test]
    fn unusable_camera_values_rejected_on_parse() {
        for toml_str in [
            "[camera]\nmouse_sensitivity = -0.5\n",
            "[camera]\nyaw = nan\n",
            "[camera]\npitch = inf\n",
            "[camera]\nzoom = -nan\n",
        ] {
            let err = Options::from_toml_str(toml_str).unwrap_err();
            assert!(
                matches!(err, FlycamError::InvalidOptions(_)),
                "{toml_str:?} gave {err}"
            );
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml_str("[camera\nyaw = ").unwrap_err();
        assert!(matches!(err, FlycamError::OptionsParse(_)));
    }

    #[test]
    fn save_load_and_list_presets() {
        let dir = scratch_dir("presets");
        let mut wide = Options::default();
        wide.camera.zoom_min = 45.0;
        wide.camera.zoom_max = 135.0;
        wide.camera.zoom = 90.0;

        wide.save(&dir.join("wide.toml")).unwrap();
        Options::default().save(&dir.join("default.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["default", "wide"]);
        assert_eq!(Options::load(&dir.join("wide.toml")).unwrap(), wide);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = scratch_dir("missing");
        let err = Options::load(&dir.join("nope.toml")).unwrap_err();
        assert!(matches!(err, FlycamError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("mouse_sensitivity").is_some());
        assert!(camera.get("zoom_max").is_some());
        assert!(camera.get("position").is_none());
        assert!(camera.get("znear").is_none());
    }
}
