use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::hari_warn;

/// User-facing toggles for the selection overlay.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Draw the coordinate label next to the marker.
    pub show_hit_position: bool,
    /// Express label coordinates in the target's object space instead of world space.
    pub show_measurement_in_local: bool,
}

/// Reasons persisting [Settings] failed.
#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Yaml(serde_yaml::Error),
}

/// Loads and saves [Settings] between sessions.
pub trait SettingsStore {
    /// Returns the stored [Settings], or defaults if there are none.
    fn load(&self) -> Settings;
    /// Persists `settings`.
    fn save(&self, settings: &Settings) -> Result<(), StoreError>;
}

/// A [SettingsStore] backed by a yaml file.
pub struct YamlSettingsStore {
    path: PathBuf,
}

impl YamlSettingsStore {
    /// Creates a new `YamlSettingsStore` on `path`. The file does not need to
    /// exist until the first save.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl SettingsStore for YamlSettingsStore {
    fn load(&self) -> Settings {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(settings) => settings,
                Err(why) => {
                    hari_warn!(
                        "Settings in '{}' don't parse, using defaults: {}",
                        self.path.to_string_lossy(),
                        why
                    );
                    Settings::default()
                }
            },
            Err(why) if why.kind() == std::io::ErrorKind::NotFound => Settings::default(),
            Err(why) => {
                hari_warn!(
                    "Could not read settings from '{}', using defaults: {}",
                    self.path.to_string_lossy(),
                    why
                );
                Settings::default()
            }
        }
    }

    fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        let contents = serde_yaml::to_string(settings).map_err(StoreError::Yaml)?;
        std::fs::write(&self.path, contents).map_err(StoreError::Io)
    }
}
