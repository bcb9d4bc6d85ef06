use strum::Display;

use crate::{
    math::{Point3, Transform, Vec3},
    picker::Selection,
    settings::Settings,
};

/// World space radius of the selection marker sphere.
pub const MARKER_RADIUS: f32 = 0.1;

/// Decimals shown for each axis value in the label.
pub const LABEL_DECIMALS: usize = 2;

/// Axes of the coordinate label breakdown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Returns the rgb display color of this `Axis`.
    pub fn color(self) -> Vec3<f32> {
        match self {
            Axis::X => Vec3::new(1.0, 0.0, 0.0),
            Axis::Y => Vec3::new(0.0, 1.0, 0.0),
            Axis::Z => Vec3::new(0.0, 0.0, 1.0),
        }
    }
}

/// A sphere drawn at the selected vertex.
pub struct Marker {
    pub position: Point3<f32>,
    pub radius: f32,
    pub color: Vec3<f32>,
}

/// One row of the coordinate label.
pub struct LabelLine {
    pub axis: Axis,
    pub text: String,
    pub color: Vec3<f32>,
}

/// Everything the host should draw for the current selection.
pub struct Overlay {
    pub marker: Marker,
    pub label: Vec<LabelLine>,
}

/// Builds the overlay for the current selection, or `None` when there is none.
///
/// The marker is always present. The label rows are built only when
/// `show_hit_position` is on, and with `show_measurement_in_local` the stored
/// world point is re-expressed through `target` on every call instead of being
/// cached, so the readout follows a moving target without a new pick.
pub fn overlay(
    selection: &Selection,
    settings: Settings,
    target: &Transform<f32>,
) -> Option<Overlay> {
    let vertex = selection.vertex()?;

    let marker = Marker {
        position: vertex,
        radius: MARKER_RADIUS,
        color: Vec3::new(1.0, 0.0, 0.0),
    };

    let label = if settings.show_hit_position {
        let p = if settings.show_measurement_in_local {
            &target.inverted() * vertex
        } else {
            vertex
        };
        vec![
            label_line(Axis::X, p.x),
            label_line(Axis::Y, p.y),
            label_line(Axis::Z, p.z),
        ]
    } else {
        Vec::new()
    };

    Some(Overlay { marker, label })
}

fn label_line(axis: Axis, value: f32) -> LabelLine {
    LabelLine {
        axis,
        text: format!("{}:{:.*}", axis, LABEL_DECIMALS, value),
        color: axis.color(),
    }
}
