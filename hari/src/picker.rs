use std::sync::Arc;

use crate::{
    math::{Bounds3, Point3, Ray, Transform, Vec3},
    mesh::Mesh,
};

/// Intersections with a triangle more edge-on than this are rejected.
/// Doubles as the minimum hit distance so rays don't hit their own origin.
const INTERSECT_EPSILON: f32 = 1e-6;

/// Picked points closer than this squared distance count as the same vertex.
const SAME_VERTEX_DIST_SQR: f32 = 1e-10;

/// A [Mesh] placed in the world.
#[derive(Debug)]
pub struct MeshInstance {
    pub mesh: Arc<Mesh>,
    pub transform: Transform<f32>,
}

impl MeshInstance {
    /// Creates a new `MeshInstance`.
    pub fn new(mesh: Arc<Mesh>, transform: Transform<f32>) -> Self {
        Self { mesh, transform }
    }

    /// Returns the world space bounds of this `MeshInstance`.
    pub fn bounds(&self) -> Bounds3<f32> {
        &self.transform * self.mesh.bounds()
    }
}

/// Finds the mesh vertex nearest to the closest hit of `ray` across `instances`.
///
/// Instances are walked in order and triangles in index order so that exact
/// distance ties resolve to the first candidate seen. Returns the vertex in
/// world space, or `None` if the ray hits nothing.
pub fn pick(ray: Ray<f32>, instances: &[MeshInstance]) -> Option<Point3<f32>> {
    let inv_dir = Vec3::new(1.0 / ray.d.x, 1.0 / ray.d.y, 1.0 / ray.d.z);
    let dir_is_neg = [ray.d.x < 0.0, ray.d.y < 0.0, ray.d.z < 0.0];

    let mut closest_distance = f32::INFINITY;
    let mut best_vertex = None;
    for instance in instances {
        let mesh = instance.mesh.as_ref();
        if mesh.indices.is_empty() {
            continue;
        }
        if !instance.bounds().intersect(ray, inv_dir, dir_is_neg) {
            continue;
        }

        let world_to_object = instance.transform.inverted();
        for tri in (0..mesh.indices.len()).step_by(3) {
            let p0 = mesh.points[mesh.indices[tri]];
            let p1 = mesh.points[mesh.indices[tri + 1]];
            let p2 = mesh.points[mesh.indices[tri + 2]];
            let v0 = &instance.transform * p0;
            let v1 = &instance.transform * p1;
            let v2 = &instance.transform * p2;

            let hit = match intersect_triangle(ray, v0, v1, v2) {
                Some(hit) => hit,
                None => continue,
            };

            let distance = ray.o.dist(hit);
            if distance < closest_distance {
                closest_distance = distance;

                // The nearest vertex is resolved in object space. Ties go to
                // the lowest vertex index.
                let local_hit = &world_to_object * hit;
                let d0 = local_hit.dist(p0);
                let d1 = local_hit.dist(p1);
                let d2 = local_hit.dist(p2);
                best_vertex = Some(if d0 <= d1 && d0 <= d2 {
                    v0
                } else if d1 <= d2 {
                    v1
                } else {
                    v2
                });
            }
        }
    }

    best_vertex
}

/// Returns the world space point where `ray` hits the triangle, or `None`.
///
/// The test is double-sided so back faces are hits too. Triangles the ray
/// meets edge-on, including degenerate ones, are misses.
fn intersect_triangle(
    ray: Ray<f32>,
    v0: Point3<f32>,
    v1: Point3<f32>,
    v2: Point3<f32>,
) -> Option<Point3<f32>> {
    // Möller-Trumbore
    let e1 = v1 - v0;
    let e2 = v2 - v0;

    let h = ray.d.cross(e2);
    let a = e1.dot(h);
    if a.abs() < INTERSECT_EPSILON {
        return None;
    }

    let f = 1.0 / a;
    let s = ray.o - v0;
    let u = f * s.dot(h);
    if u < 0.0 || u > 1.0 {
        return None;
    }

    let q = s.cross(e1);
    let v = f * ray.d.dot(q);
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * e2.dot(q);
    if t <= INTERSECT_EPSILON || t >= ray.t_max {
        return None;
    }

    Some(ray.point(t))
}

/// Sink for selection transitions, e.g. an undo stack.
pub trait History {
    /// Called once for every accepted selection change.
    fn record(&mut self, previous: Option<Point3<f32>>, current: Point3<f32>);
}

/// The currently selected vertex, persistent across picks.
#[derive(Default)]
pub struct Selection {
    vertex: Option<Point3<f32>>,
}

impl Selection {
    /// Creates a new empty `Selection`.
    pub fn new() -> Self {
        Self { vertex: None }
    }

    /// Returns the selected vertex in world space.
    pub fn vertex(&self) -> Option<Point3<f32>> {
        self.vertex
    }

    /// Stores the picked vertex if it differs from the current one, recording
    /// the transition in `history` first.
    ///
    /// A miss keeps the previous selection. Returns `true` if the selection
    /// changed.
    pub fn apply(&mut self, result: Option<Point3<f32>>, history: &mut dyn History) -> bool {
        if let Some(vertex) = result {
            let changed = match self.vertex {
                Some(previous) => previous.dist_sqr(vertex) >= SAME_VERTEX_DIST_SQR,
                None => true,
            };
            if changed {
                history.record(self.vertex, vertex);
                self.vertex = Some(vertex);
                return true;
            }
        }
        false
    }
}
