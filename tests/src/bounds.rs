#[cfg(test)]
mod tests {
    use num::Float;

    use hari::math::{Bounds3, Point3, Ray, Vec3};

    // The intersection args mirror how callers precompute them from the ray
    fn intersects(bb: Bounds3<f32>, ray: Ray<f32>) -> bool {
        let inv_dir = Vec3::new(1.0 / ray.d.x, 1.0 / ray.d.y, 1.0 / ray.d.z);
        let dir_is_neg = [ray.d.x < 0.0, ray.d.y < 0.0, ray.d.z < 0.0];
        bb.intersect(ray, inv_dir, dir_is_neg)
    }

    #[test]
    fn new() {
        // Components of the input points should be swapped per-axis as needed
        let bb = Bounds3::new(Point3::new(1.0, 4.0, 2.0), Point3::new(3.0, 0.0, 5.0));
        assert_eq!(bb.p_min, Point3::new(1.0, 0.0, 2.0));
        assert_eq!(bb.p_max, Point3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn default() {
        let bb = Bounds3::<f32>::default();
        assert_eq!(
            bb.p_min,
            Point3::new(f32::infinity(), f32::infinity(), f32::infinity())
        );
        assert_eq!(
            bb.p_max,
            Point3::new(
                f32::neg_infinity(),
                f32::neg_infinity(),
                f32::neg_infinity()
            )
        );

        // Any union should overwrite the empty bounds
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(bb.union_p(p), Bounds3::new(p, p));
    }

    #[test]
    fn index() {
        let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        assert_eq!(bb[0], bb.p_min);
        assert_eq!(bb[1], bb.p_max);
    }

    #[test]
    fn union_p() {
        let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));

        // Point inside shouldn't change the bounds
        assert_eq!(bb.union_p(Point3::new(0.5, 0.5, 0.5)), bb);

        let ub = bb.union_p(Point3::new(-1.0, 0.5, 2.0));
        assert_eq!(ub.p_min, Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(ub.p_max, Point3::new(1.0, 1.0, 2.0));
    }

    #[test]
    fn union_b() {
        let bb0 = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let bb1 = Bounds3::new(Point3::new(-1.0, 0.5, 0.5), Point3::new(0.5, 0.5, 2.0));

        let ub = bb0.union_b(bb1);
        assert_eq!(ub.p_min, Point3::new(-1.0, 0.0, 0.0));
        assert_eq!(ub.p_max, Point3::new(1.0, 1.0, 2.0));

        assert_eq!(bb0.union_b(bb1), bb1.union_b(bb0));
    }

    #[test]
    fn diagonal() {
        let bb = Bounds3::new(Point3::new(1.0, 2.0, 3.0), Point3::new(3.0, 5.0, 7.0));
        assert_eq!(bb.diagonal(), Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn intersect_hit() {
        let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));

        // Axis-aligned from both sides
        let r = Ray::new(
            Point3::new(0.5, 0.5, -2.0),
            Vec3::new(0.0, 0.0, 1.0),
            f32::infinity(),
        );
        assert!(intersects(bb, r));

        let r = Ray::new(
            Point3::new(0.5, 0.5, 2.0),
            Vec3::new(0.0, 0.0, -1.0),
            f32::infinity(),
        );
        assert!(intersects(bb, r));

        // Diagonal
        let r = Ray::new(
            Point3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
            f32::infinity(),
        );
        assert!(intersects(bb, r));
    }

    #[test]
    fn intersect_from_inside() {
        let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let r = Ray::new(
            Point3::new(0.5, 0.5, 0.5),
            Vec3::new(0.0, 0.0, 1.0),
            f32::infinity(),
        );
        assert!(intersects(bb, r));
    }

    #[test]
    fn intersect_miss() {
        let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));

        // Off to the side
        let r = Ray::new(
            Point3::new(2.5, 0.5, -2.0),
            Vec3::new(0.0, 0.0, 1.0),
            f32::infinity(),
        );
        assert!(!intersects(bb, r));

        // Pointing away
        let r = Ray::new(
            Point3::new(-1.0, -1.0, -1.0),
            Vec3::new(-1.0, -1.0, -1.0),
            f32::infinity(),
        );
        assert!(!intersects(bb, r));
    }

    #[test]
    fn intersect_behind() {
        let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));
        let r = Ray::new(
            Point3::new(0.5, 0.5, 2.0),
            Vec3::new(0.0, 0.0, 1.0),
            f32::infinity(),
        );
        assert!(!intersects(bb, r));
    }

    #[test]
    fn intersect_t_max() {
        let bb = Bounds3::new(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0));

        let r = Ray::new(Point3::new(0.5, 0.5, -5.0), Vec3::new(0.0, 0.0, 1.0), 2.0);
        assert!(!intersects(bb, r));

        let r = Ray::new(Point3::new(0.5, 0.5, -5.0), Vec3::new(0.0, 0.0, 1.0), 10.0);
        assert!(intersects(bb, r));
    }
}
