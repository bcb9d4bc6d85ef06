use std::ops::Mul;

use super::{
    bounds::Bounds3, common::FloatValueType, matrix::Matrix4x4, point::Point3, ray::Ray,
    vector::Vec3,
};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Transformations.html

/// An affine transformation stored with its inverse.
#[derive(Clone, Debug, PartialEq)]
pub struct Transform<T>
where
    T: FloatValueType,
{
    m: Matrix4x4<T>,
    m_inv: Matrix4x4<T>,
}

impl<T> Transform<T>
where
    T: FloatValueType,
{
    /// Creates a new `Transform` from raw [Matrix4x4] rows.
    pub fn new(m: [[T; 4]; 4]) -> Self {
        let m = Matrix4x4::new(m);
        Self::new_m(m)
    }

    /// Creates a new `Transform` from a [Matrix4x4].
    pub fn new_m(m: Matrix4x4<T>) -> Self {
        let m_inv = m.inverted();
        Self::new_full(m, m_inv)
    }

    /// Creates a new `Transform` from a [Matrix4x4] and its inverse.
    pub fn new_full(m: Matrix4x4<T>, m_inv: Matrix4x4<T>) -> Self {
        debug_assert!(!m.has_nans());
        debug_assert!(!m_inv.has_nans());
        Self { m, m_inv }
    }

    /// Returns a reference to the [Matrix4x4] of this `Transform`.
    pub fn m(&self) -> &Matrix4x4<T> {
        &self.m
    }

    /// Returns a reference to the inverse [Matrix4x4] of this `Transform`.
    pub fn m_inv(&self) -> &Matrix4x4<T> {
        &self.m_inv
    }

    /// Returns the inverse of this `Transform`.
    pub fn inverted(&self) -> Self {
        Self::new_full(self.m_inv, self.m)
    }
}

impl<T> Default for Transform<T>
where
    T: FloatValueType,
{
    /// Creates a new identity `Transform`.
    fn default() -> Self {
        let m = Matrix4x4::identity();
        Self::new_full(m, m)
    }
}

impl<'a, T> Mul<Vec3<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Vec3<T>;

    fn mul(self, other: Vec3<T>) -> Vec3<T> {
        let m = &self.m.m;
        let x = other.x;
        let y = other.y;
        let z = other.z;
        Vec3::new(
            m[0][0] * x + m[0][1] * y + m[0][2] * z,
            m[1][0] * x + m[1][1] * y + m[1][2] * z,
            m[2][0] * x + m[2][1] * y + m[2][2] * z,
        )
    }
}

impl<'a, T> Mul<Point3<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Point3<T>;

    fn mul(self, other: Point3<T>) -> Point3<T> {
        let m = &self.m.m;
        let x = other.x;
        let y = other.y;
        let z = other.z;
        let xp = m[0][0] * x + m[0][1] * y + m[0][2] * z + m[0][3];
        let yp = m[1][0] * x + m[1][1] * y + m[1][2] * z + m[1][3];
        let zp = m[2][0] * x + m[2][1] * y + m[2][2] * z + m[2][3];
        let wp = m[3][0] * x + m[3][1] * y + m[3][2] * z + m[3][3];
        if wp == T::one() {
            Point3::new(xp, yp, zp)
        } else {
            Point3::new(xp, yp, zp) / wp
        }
    }
}

impl<'a, T> Mul<Ray<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Ray<T>;

    fn mul(self, other: Ray<T>) -> Ray<T> {
        Ray::new(self * other.o, self * other.d, other.t_max)
    }
}

impl<'a, T> Mul<Bounds3<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Bounds3<T>;

    fn mul(self, other: Bounds3<T>) -> Bounds3<T> {
        let mi = other.p_min;
        let ma = other.p_max;

        // All eight corners since the transform can rotate the box
        let mut ret = Bounds3::default();
        ret = ret.union_p(self * mi);
        ret = ret.union_p(self * Point3::new(ma.x, mi.y, mi.z));
        ret = ret.union_p(self * Point3::new(mi.x, ma.y, mi.z));
        ret = ret.union_p(self * Point3::new(mi.x, mi.y, ma.z));
        ret = ret.union_p(self * Point3::new(ma.x, ma.y, mi.z));
        ret = ret.union_p(self * Point3::new(ma.x, mi.y, ma.z));
        ret = ret.union_p(self * Point3::new(mi.x, ma.y, ma.z));
        ret = ret.union_p(self * ma);
        ret
    }
}

impl<'a, 'b, T> Mul<&'b Transform<T>> for &'a Transform<T>
where
    T: FloatValueType,
{
    type Output = Transform<T>;

    fn mul(self, other: &Transform<T>) -> Transform<T> {
        Transform::new_full(&self.m * &other.m, &other.m_inv * &self.m_inv)
    }
}
