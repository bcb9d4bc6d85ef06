mod ply;

use crate::{
    camera::{CameraParameters, FoV},
    hari_info,
    math::{Point3, Transform},
    mesh::Mesh,
    picker::MeshInstance,
};
use ply::PlyResult;
use serde::{Deserialize, Serialize};

use std::{path::PathBuf, sync::Arc, time::Instant};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SceneLoadSettings {
    pub path: PathBuf,
}

#[derive(Debug)]
pub struct Scene {
    pub name: String,
    pub load_settings: SceneLoadSettings,
    pub instances: Vec<MeshInstance>,
}

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

impl Scene {
    /// Loads the mesh in a PLY file, scales it to fit 2 units around the origin
    /// and orients the camera on it at an angle.
    ///
    /// Also returns the time it took to load in seconds.
    pub fn ply(settings: &SceneLoadSettings) -> Result<(Scene, CameraParameters, f32)> {
        let load_start = Instant::now();

        let PlyResult { mesh, fit } = ply::load(&settings.path)?;

        let instances = vec![MeshInstance::new(mesh, fit)];

        let cam_pos = Point3::new(2.0, 2.0, 2.0);
        let cam_target = Point3::new(0.0, 0.0, 0.0);
        let cam_fov = FoV::X(40.0);

        let total_secs = load_start.elapsed().as_secs_f32();

        hari_info!("PLY: Loading took {:.2}s in total", total_secs);

        Ok((
            Self {
                name: settings
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("unnamed")
                    .into(),
                load_settings: settings.clone(),
                instances,
            },
            CameraParameters {
                position: cam_pos,
                target: cam_target,
                fov: cam_fov,
                ..CameraParameters::default()
            },
            total_secs,
        ))
    }

    /// Constructs the Cornell box holding a tall box
    // Lifted from http://www.graphics.cornell.edu/online/box/data.html
    pub fn cornell() -> (Scene, CameraParameters, f32) {
        let load_start = Instant::now();

        // Original uses a right-handed coordinate system so flip z
        let handedness_swap = Transform::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, -1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        let mut instances: Vec<MeshInstance> = Vec::new();

        // Walls
        {
            // Index and point counts are static so Mesh::new can't fail
            let wall_meshes = vec![
                // Floor
                Arc::new(
                    Mesh::new(
                        vec![0, 1, 2, 0, 2, 3],
                        vec![
                            Point3::new(0.0, 0.0, 559.2),
                            Point3::new(549.6, 0.0, 559.2),
                            Point3::new(552.8, 0.0, 0.0),
                            Point3::new(0.0, 0.0, 0.0),
                        ],
                    )
                    .unwrap(),
                ),
                // Ceiling
                Arc::new(
                    Mesh::new(
                        vec![0, 1, 2, 0, 2, 3],
                        vec![
                            Point3::new(0.0, 548.8, 0.0),
                            Point3::new(556.0, 548.8, 0.0),
                            Point3::new(556.0, 548.8, 559.2),
                            Point3::new(0.0, 548.8, 559.2),
                        ],
                    )
                    .unwrap(),
                ),
                // Back wall
                Arc::new(
                    Mesh::new(
                        vec![0, 1, 2, 0, 2, 3],
                        vec![
                            Point3::new(0.0, 548.8, 559.2),
                            Point3::new(556.0, 548.8, 559.2),
                            Point3::new(549.6, 0.0, 559.2),
                            Point3::new(0.0, 0.0, 559.2),
                        ],
                    )
                    .unwrap(),
                ),
                // Right wall
                Arc::new(
                    Mesh::new(
                        vec![0, 1, 2, 0, 2, 3],
                        vec![
                            Point3::new(0.0, 548.8, 0.0),
                            Point3::new(0.0, 548.8, 559.2),
                            Point3::new(0.0, 0.0, 559.2),
                            Point3::new(0.0, 0.0, 0.0),
                        ],
                    )
                    .unwrap(),
                ),
                // Left wall
                Arc::new(
                    Mesh::new(
                        vec![0, 1, 2, 0, 2, 3],
                        vec![
                            Point3::new(552.8, 0.0, 0.0),
                            Point3::new(549.6, 0.0, 559.2),
                            Point3::new(556.0, 548.8, 559.2),
                            Point3::new(556.0, 548.8, 0.0),
                        ],
                    )
                    .unwrap(),
                ),
            ];

            for mesh in wall_meshes {
                instances.push(MeshInstance::new(mesh, handedness_swap.clone()));
            }
        }

        // Tall box
        {
            let mesh = Arc::new(
                Mesh::new(
                    vec![
                        0, 1, 2, 0, 2, 3, 4, 0, 3, 4, 3, 5, 5, 3, 2, 5, 2, 6, 6, 2, 1, 6, 1, 7, 7,
                        1, 0, 7, 0, 4,
                    ],
                    vec![
                        Point3::new(423.0, 330.0, 247.0),
                        Point3::new(265.0, 330.0, 296.0),
                        Point3::new(314.0, 330.0, 456.0),
                        Point3::new(472.0, 330.0, 406.0),
                        Point3::new(423.0, 0.0, 247.0),
                        Point3::new(472.0, 0.0, 406.0),
                        Point3::new(314.0, 0.0, 456.0),
                        Point3::new(265.0, 0.0, 296.0),
                    ],
                )
                .unwrap(),
            );

            instances.push(MeshInstance::new(mesh, handedness_swap));
        }

        let cam_pos = Point3::new(278.0, 273.0, 800.0);
        let cam_target = Point3::new(278.0, 273.0, -260.0);
        let cam_fov = FoV::X(40.0);

        let total_secs = load_start.elapsed().as_secs_f32();

        (
            Scene {
                name: "Cornell Box".into(),
                load_settings: SceneLoadSettings::default(),
                instances,
            },
            CameraParameters {
                position: cam_pos,
                target: cam_target,
                fov: cam_fov,
                ..CameraParameters::default()
            },
            total_secs,
        )
    }
}
