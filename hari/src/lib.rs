mod macros;

pub mod app;
pub mod camera;
pub mod math;
pub mod mesh;
pub mod overlay;
pub mod picker;
pub mod scene;
pub mod settings;
pub mod viewport;
