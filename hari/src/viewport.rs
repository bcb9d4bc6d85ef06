use crate::{
    camera::{Camera, CameraParameters, CameraSample, FoV},
    hari_info,
    math::{Point2, Ray, Vec2},
};

/// Reasons a [Viewport] cannot be constructed.
#[derive(Debug)]
pub enum ViewportError {
    /// The film has a zero-sized dimension.
    ZeroResolution,
    /// The field of view is not inside (0,180) degrees.
    FoVOutOfRange(f32),
    /// The camera position, target and up vector don't span a valid view.
    LookAtUndefined,
}

/// A film-backed view into a scene that turns window pixels into world rays.
pub struct Viewport {
    camera: Camera,
    res: Vec2<u16>,
}

impl Viewport {
    /// Creates a new `Viewport`, validating the camera parameters.
    pub fn new(params: CameraParameters, res: Vec2<u16>) -> Result<Self, ViewportError> {
        if res.x == 0 || res.y == 0 {
            return Err(ViewportError::ZeroResolution);
        }

        let fov_angle = match params.fov {
            FoV::X(v) | FoV::Y(v) => v,
        };
        // Also rejects NaN since it fails both comparisons
        if !(fov_angle > 0.0 && fov_angle < 180.0) {
            return Err(ViewportError::FoVOutOfRange(fov_angle));
        }

        if params.up.len_sqr() == 0.0 {
            return Err(ViewportError::LookAtUndefined);
        }
        let to_target = params.target - params.position;
        if to_target.len_sqr() == 0.0 {
            return Err(ViewportError::LookAtUndefined);
        }
        if params.up.normalized().cross(to_target.normalized()).len_sqr() == 0.0 {
            return Err(ViewportError::LookAtUndefined);
        }

        Ok(Self {
            camera: Camera::new(params, res),
            res,
        })
    }

    /// Returns the film resolution of this `Viewport`.
    pub fn res(&self) -> Vec2<u16> {
        self.res
    }

    /// Casts a world ray through the film pixel under `window_px`.
    ///
    /// The film is fit inside the window keeping its aspect ratio so the
    /// window pixel may fall on a margin, or outside a smaller window
    /// entirely. Returns `None` for those.
    pub fn cast(&self, window_size: Vec2<f64>, window_px: Vec2<f64>) -> Option<Ray<f32>> {
        let film_w = self.res.x as f64;
        let film_h = self.res.y as f64;
        let film_aspect = film_w / film_h;

        let (window_w, window_h) = (window_size.x, window_size.y);
        if window_w <= 0.0 || window_h <= 0.0 {
            return None;
        }
        let window_aspect = window_w / window_h;

        let film_px = if window_aspect < film_aspect {
            let x = film_w * (window_px.x / window_w);

            let film_scale = window_w / film_w;
            let bottom_margin = (window_h - film_h * film_scale) / 2.0;

            let y = (window_px.y - bottom_margin) / film_scale;

            Vec2::new(x, y)
        } else {
            let y = film_h * (window_px.y / window_h);

            let film_scale = window_h / film_h;
            let left_margin = (window_w - film_w * film_scale) / 2.0;

            let x = (window_px.x - left_margin) / film_scale;

            Vec2::new(x, y)
        };

        if film_px.min_comp() >= 0.0 && film_px.x < film_w && film_px.y < film_h {
            #[allow(clippy::cast_sign_loss)] // We check above
            let film_px = Vec2::new(film_px.x as u16, film_px.y as u16);

            // Rays go through pixel centers
            let p_film = Point2::new(film_px.x as f32, film_px.y as f32) + Vec2::new(0.5, 0.5);

            Some(self.camera.ray(&CameraSample { p_film }))
        } else {
            hari_info!("cast: Window px is outside the film");
            None
        }
    }
}
