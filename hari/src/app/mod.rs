mod util;

pub use util::try_load_scene;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{
    camera::CameraParameters,
    expect, hari_info, hari_warn,
    math::{Point3, Transform, Vec2},
    overlay::{overlay, Overlay},
    picker::{pick, History, Selection},
    scene::SceneLoadSettings,
    settings::{SettingsStore, YamlSettingsStore},
    viewport::Viewport,
};

/// Startup overrides for the demo, read from a YAML given on the command line.
#[derive(Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    pub load_settings: Option<SceneLoadSettings>,
    pub camera: Option<CameraParameters>,
    pub resolution: Option<Vec2<u16>>,
    pub settings_file: Option<PathBuf>,
    pub clicks: Vec<Vec2<f64>>,
}

/// Reads a [`DemoConfig`] from the YAML at `path`.
///
/// Falls back to defaults if the file can't be read or doesn't parse.
pub fn load_config(path: &Path) -> DemoConfig {
    match std::fs::read_to_string(path) {
        Ok(text) => match serde_yaml::from_str(&text) {
            Ok(config) => config,
            Err(why) => {
                hari_warn!(
                    "Config in '{}' doesn't parse, using defaults: {}",
                    path.to_string_lossy(),
                    why
                );
                DemoConfig::default()
            }
        },
        Err(why) => {
            hari_warn!(
                "Could not read config '{}', using defaults: {}",
                path.to_string_lossy(),
                why
            );
            DemoConfig::default()
        }
    }
}

/// A [`History`] that logs selection changes instead of stacking undo states.
#[derive(Default)]
pub struct LogHistory;

impl History for LogHistory {
    fn record(&mut self, previous: Option<Point3<f32>>, current: Point3<f32>) {
        match previous {
            Some(p) => hari_info!(
                "Selection moved from ({:.2},{:.2},{:.2}) to ({:.2},{:.2},{:.2})",
                p.x,
                p.y,
                p.z,
                current.x,
                current.y,
                current.z
            ),
            None => hari_info!(
                "Selection set to ({:.2},{:.2},{:.2})",
                current.x,
                current.y,
                current.z
            ),
        }
    }
}

pub fn run(config: DemoConfig) {
    let load_settings = config.load_settings.unwrap_or_default();

    let (scene, scene_camera, _) = expect!(try_load_scene(&load_settings), "Scene loading failed");
    hari_info!("Opened scene '{}'", scene.name);

    let camera_params = config.camera.unwrap_or(scene_camera);
    let resolution = config.resolution.unwrap_or(Vec2::new(640, 480));
    let viewport = expect!(
        Viewport::new(camera_params, resolution),
        "Viewport creation failed"
    );

    let settings_file = config
        .settings_file
        .unwrap_or_else(|| PathBuf::from("hari_settings.yaml"));
    let store = YamlSettingsStore::new(settings_file);
    let settings = store.load();

    let window_size = Vec2::new(f64::from(resolution.x), f64::from(resolution.y));
    let clicks = if config.clicks.is_empty() {
        // Nothing happens without input so poke the center of the window
        vec![window_size / 2.0]
    } else {
        config.clicks
    };

    // Labels measure against the first instance when local space is active
    let target = scene
        .instances
        .first()
        .map_or_else(Transform::default, |i| i.transform.clone());

    let mut selection = Selection::new();
    let mut history = LogHistory::default();

    for click in clicks {
        hari_info!("Click at window ({:.1},{:.1})", click.x, click.y);

        let ray = match viewport.cast(window_size, click) {
            Some(ray) => ray,
            None => {
                hari_info!("Click outside the viewport");
                continue;
            }
        };

        let result = pick(ray, &scene.instances);
        if result.is_none() {
            hari_info!("No triangle under the cursor");
        }
        selection.apply(result, &mut history);

        if let Some(Overlay { marker, label }) = overlay(&selection, settings, &target) {
            hari_info!(
                "Marker at ({:.2},{:.2},{:.2}) radius {:.2}",
                marker.position.x,
                marker.position.y,
                marker.position.z,
                marker.radius
            );
            for line in &label {
                hari_info!("Label {}", line.text);
            }
        }
    }

    if let Err(why) = store.save(&settings) {
        hari_warn!("Failed to store settings: {:?}", why);
    }
}
