use crate::math::{Bounds3, Point3};

/// Reasons index and point data do not form a valid triangle mesh.
#[derive(Debug)]
pub enum MeshError {
    /// The index count is not a multiple of three.
    IndexCount(usize),
    /// An index points past the last vertex.
    IndexOutOfBounds { index: usize, point_count: usize },
}

/// Stores the geometry data of a triangle mesh in object space
#[derive(Debug)]
pub struct Mesh {
    /// Triangle vertex indices stored as triplets
    pub indices: Vec<usize>,
    /// Points in object space
    pub points: Vec<Point3<f32>>,
    bounds: Bounds3<f32>,
}

impl Mesh {
    /// Creates a new `Mesh`, validating that `indices` form triangles into `points`.
    pub fn new(indices: Vec<usize>, points: Vec<Point3<f32>>) -> Result<Self, MeshError> {
        if indices.len() % 3 != 0 {
            return Err(MeshError::IndexCount(indices.len()));
        }
        if let Some(&index) = indices.iter().find(|&&i| i >= points.len()) {
            return Err(MeshError::IndexOutOfBounds {
                index,
                point_count: points.len(),
            });
        }

        let bounds = points
            .iter()
            .fold(Bounds3::default(), |bb, &p| bb.union_p(p));

        Ok(Self {
            indices,
            points,
            bounds,
        })
    }

    /// Returns the number of triangles in this `Mesh`.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the object space bounds of this `Mesh`.
    pub fn bounds(&self) -> Bounds3<f32> {
        self.bounds
    }
}
