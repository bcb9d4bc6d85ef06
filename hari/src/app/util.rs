use crate::{
    camera::CameraParameters,
    hari_info,
    scene::{Scene, SceneLoadSettings},
};

pub fn try_load_scene(
    settings: &SceneLoadSettings,
) -> Result<(Scene, CameraParameters, f32), String> {
    if settings.path.exists() {
        match settings.path.extension() {
            Some(ext) => match ext.to_str() {
                Some("ply") => match Scene::ply(settings) {
                    Ok(ret) => {
                        hari_info!("PLY loaded from '{}'", settings.path.to_string_lossy());
                        Ok(ret)
                    }
                    Err(why) => Err(format!("Loading PLY failed: {}", why)),
                },
                Some(ext) => Err(format!("Unknown extension '{}'", ext)),
                None => Err(String::from("Expected a unicode extension")),
            },
            None => Err(String::from("Expected a file with an extension")),
        }
    } else if settings.path.as_os_str().is_empty() {
        Ok(Scene::cornell())
    } else {
        Err(format!(
            "Scene does not exist '{}'",
            settings.path.to_string_lossy()
        ))
    }
}
