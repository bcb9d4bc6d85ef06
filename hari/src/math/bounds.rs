use std::ops::Index;

use super::{
    common::{FloatValueType, ValueType},
    point::Point3,
    ray::Ray,
    vector::Vec3,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Bounding_Boxes.html

/// Three-dimensional bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bounds3<T>
where
    T: ValueType,
{
    /// The minimum extent of the bounds.
    pub p_min: Point3<T>,
    /// The maximum extent of the bounds.
    pub p_max: Point3<T>,
}

impl<T> Bounds3<T>
where
    T: ValueType,
{
    /// Creates a new `Bounds3` spanning the two points.
    pub fn new(p0: Point3<T>, p1: Point3<T>) -> Self {
        Self {
            p_min: p0.min(p1),
            p_max: p0.max(p1),
        }
    }

    /// Returns this `Bounds3` extended to contain `p`.
    pub fn union_p(&self, p: Point3<T>) -> Self {
        Self {
            p_min: self.p_min.min(p),
            p_max: self.p_max.max(p),
        }
    }

    /// Returns the union of this `Bounds3` and `other`.
    pub fn union_b(&self, other: Self) -> Self {
        Self {
            p_min: self.p_min.min(other.p_min),
            p_max: self.p_max.max(other.p_max),
        }
    }

    /// Returns the [Vec3] from `p_min` to `p_max`.
    pub fn diagonal(&self) -> Vec3<T> {
        self.p_max - self.p_min
    }
}

impl<T> Default for Bounds3<T>
where
    T: FloatValueType,
{
    /// Creates a new empty `Bounds3` that any union will overwrite.
    fn default() -> Self {
        Self {
            p_min: Point3::new(T::infinity(), T::infinity(), T::infinity()),
            p_max: Point3::new(T::neg_infinity(), T::neg_infinity(), T::neg_infinity()),
        }
    }
}

impl<T> Index<usize> for Bounds3<T>
where
    T: ValueType,
{
    type Output = Point3<T>;

    fn index(&self, extent: usize) -> &Self::Output {
        match extent {
            0 => &self.p_min,
            1 => &self.p_max,
            _ => {
                panic!("Out of bounds Bounds3 access with extent {}", extent);
            }
        }
    }
}

impl<T> Bounds3<T>
where
    T: FloatValueType,
{
    /// Checks if `ray` hits this `Bounds3`.
    /// `inv_dir` and `dir_is_neg` precomputed from `ray` are supplied as an optimization.
    pub fn intersect(&self, ray: Ray<T>, inv_dir: Vec3<T>, dir_is_neg: [bool; 3]) -> bool {
        // X-slabs test
        let mut t0 = (self[dir_is_neg[0] as usize].x - ray.o.x) * inv_dir.x;
        let mut t1 = (self[1 - (dir_is_neg[0] as usize)].x - ray.o.x) * inv_dir.x;

        // Y,Z -slabs test
        for i in 1..3 {
            let ti0 = (self[dir_is_neg[i] as usize][i] - ray.o[i]) * inv_dir[i];
            let ti1 = (self[1 - (dir_is_neg[i] as usize)][i] - ray.o[i]) * inv_dir[i];
            if t0 > ti1 || ti0 > t1 {
                return false;
            }
            t0 = t0.max(ti0);
            t1 = t1.min(ti1);
        }

        t0 < ray.t_max && t1 > T::zero()
    }
}
