#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::sync::Arc;

    use hari::math::{
        transforms::{scale, translation},
        Point3, Ray, Transform, Vec3,
    };
    use hari::mesh::Mesh;
    use hari::picker::{pick, History, MeshInstance, Selection};

    fn unit_triangle() -> Arc<Mesh> {
        Arc::new(
            Mesh::new(
                vec![0, 1, 2],
                vec![
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(1.0, 0.0, 0.0),
                    Point3::new(0.0, 1.0, 0.0),
                ],
            )
            .unwrap(),
        )
    }

    // Ray shooting toward positive z, crossing the xy-plane at (x, y)
    fn ray_at(x: f32, y: f32) -> Ray<f32> {
        Ray::new(
            Point3::new(x, y, -5.0),
            Vec3::new(0.0, 0.0, 1.0),
            f32::INFINITY,
        )
    }

    #[test]
    fn hit_returns_nearest_vertex() {
        let instances = vec![MeshInstance::new(unit_triangle(), Transform::default())];

        // Near each corner in turn
        let picked = pick(ray_at(0.1, 0.1), &instances).unwrap();
        assert_eq!(picked, Point3::new(0.0, 0.0, 0.0));

        let picked = pick(ray_at(0.7, 0.1), &instances).unwrap();
        assert_eq!(picked, Point3::new(1.0, 0.0, 0.0));

        let picked = pick(ray_at(0.1, 0.7), &instances).unwrap();
        assert_eq!(picked, Point3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn hit_on_vertex_returns_it() {
        let instances = vec![MeshInstance::new(unit_triangle(), Transform::default())];

        let picked = pick(ray_at(1.0, 0.0), &instances).unwrap();
        assert_eq!(picked, Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn hit_on_edge_is_inside() {
        let instances = vec![MeshInstance::new(unit_triangle(), Transform::default())];

        // On the x = 0 edge, equidistant from the corners it connects
        assert!(pick(ray_at(0.0, 0.5), &instances).is_some());

        // On the hypotenuse
        assert!(pick(ray_at(0.5, 0.5), &instances).is_some());
    }

    #[test]
    fn distance_ties_go_to_lowest_index() {
        let instances = vec![MeshInstance::new(unit_triangle(), Transform::default())];

        // (0, 0.5) is exactly as far from the first corner as from the third
        let picked = pick(ray_at(0.0, 0.5), &instances).unwrap();
        assert_eq!(picked, Point3::new(0.0, 0.0, 0.0));

        // The hypotenuse midpoint is equidistant from all three
        let picked = pick(ray_at(0.5, 0.5), &instances).unwrap();
        assert_eq!(picked, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn back_face_hits() {
        let instances = vec![MeshInstance::new(unit_triangle(), Transform::default())];

        let r = Ray::new(
            Point3::new(0.1, 0.1, 5.0),
            Vec3::new(0.0, 0.0, -1.0),
            f32::INFINITY,
        );
        let picked = pick(r, &instances).unwrap();
        assert_eq!(picked, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn edge_on_ray_misses() {
        let instances = vec![MeshInstance::new(unit_triangle(), Transform::default())];

        // Parallel to the triangle plane, off of it
        let r = Ray::new(
            Point3::new(0.25, 0.25, -5.0),
            Vec3::new(1.0, 0.0, 0.0),
            f32::INFINITY,
        );
        assert!(pick(r, &instances).is_none());

        // Coplanar with the triangle
        let r = Ray::new(
            Point3::new(-5.0, 0.25, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            f32::INFINITY,
        );
        assert!(pick(r, &instances).is_none());
    }

    #[test]
    fn degenerate_triangle_misses() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let mesh = Arc::new(Mesh::new(vec![0, 0, 0], vec![p]).unwrap());
        let instances = vec![MeshInstance::new(mesh, Transform::default())];

        assert!(pick(ray_at(1.0, 1.0), &instances).is_none());
    }

    #[test]
    fn miss_scenarios() {
        let instances = vec![MeshInstance::new(unit_triangle(), Transform::default())];

        // Past the triangle
        assert!(pick(ray_at(2.0, 2.0), &instances).is_none());

        // Triangle behind the ray
        let r = Ray::new(
            Point3::new(0.1, 0.1, -5.0),
            Vec3::new(0.0, 0.0, -1.0),
            f32::INFINITY,
        );
        assert!(pick(r, &instances).is_none());

        // Triangle past t_max
        let r = Ray::new(Point3::new(0.1, 0.1, -5.0), Vec3::new(0.0, 0.0, 1.0), 2.0);
        assert!(pick(r, &instances).is_none());

        // Nothing to hit
        assert!(pick(ray_at(0.1, 0.1), &[]).is_none());

        let empty = Arc::new(Mesh::new(Vec::new(), Vec::new()).unwrap());
        let instances = vec![MeshInstance::new(empty, Transform::default())];
        assert!(pick(ray_at(0.1, 0.1), &instances).is_none());
    }

    #[test]
    fn transformed_instance_returns_world_vertex() {
        let instances = vec![MeshInstance::new(
            unit_triangle(),
            translation(Vec3::new(5.0, 0.0, 0.0)),
        )];

        let picked = pick(ray_at(5.1, 0.1), &instances).unwrap();
        assert_eq!(picked, Point3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn nearest_vertex_resolves_in_object_space() {
        // Skewed triangle under a squashing transform. The hit is nearest to
        // the third vertex in object space but nearest to the second in world
        // space, so this catches the resolve happening in the wrong space.
        let mesh = Arc::new(
            Mesh::new(
                vec![0, 1, 2],
                vec![
                    Point3::new(0.0, 0.0, 0.0),
                    Point3::new(0.8, 1.0, 0.0),
                    Point3::new(1.0, -0.2, 0.0),
                ],
            )
            .unwrap(),
        );
        let instances = vec![MeshInstance::new(mesh, scale(1.0, 0.1, 1.0))];

        let picked = pick(ray_at(0.78, 0.025), &instances).unwrap();
        assert_abs_diff_eq!(&picked, &Point3::new(1.0, -0.02, 0.0), epsilon = 1e-6);
    }

    #[test]
    fn closest_instance_wins() {
        let near = MeshInstance::new(unit_triangle(), translation(Vec3::new(0.0, 0.0, 1.0)));
        let far = MeshInstance::new(unit_triangle(), translation(Vec3::new(0.0, 0.0, 3.0)));

        let picked = pick(ray_at(0.1, 0.1), &[near, far]).unwrap();
        assert_eq!(picked, Point3::new(0.0, 0.0, 1.0));

        // Instance order shouldn't matter
        let near = MeshInstance::new(unit_triangle(), translation(Vec3::new(0.0, 0.0, 1.0)));
        let far = MeshInstance::new(unit_triangle(), translation(Vec3::new(0.0, 0.0, 3.0)));
        let picked = pick(ray_at(0.1, 0.1), &[far, near]).unwrap();
        assert_eq!(picked, Point3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn culled_instance_is_skipped() {
        let off_axis = MeshInstance::new(unit_triangle(), translation(Vec3::new(100.0, 0.0, 0.0)));
        let on_axis = MeshInstance::new(unit_triangle(), Transform::default());

        let picked = pick(ray_at(0.1, 0.1), &[off_axis, on_axis]).unwrap();
        assert_eq!(picked, Point3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn pick_is_idempotent() {
        let instances = vec![MeshInstance::new(unit_triangle(), Transform::default())];

        let first = pick(ray_at(0.2, 0.3), &instances);
        let second = pick(ray_at(0.2, 0.3), &instances);
        assert_eq!(first, second);
    }

    #[derive(Default)]
    struct TestHistory {
        events: Vec<(Option<Point3<f32>>, Point3<f32>)>,
    }

    impl History for TestHistory {
        fn record(&mut self, previous: Option<Point3<f32>>, current: Point3<f32>) {
            self.events.push((previous, current));
        }
    }

    #[test]
    fn selection_starts_empty() {
        assert!(Selection::new().vertex().is_none());
        assert!(Selection::default().vertex().is_none());
    }

    #[test]
    fn selection_records_first_pick() {
        let mut selection = Selection::new();
        let mut history = TestHistory::default();

        let v = Point3::new(1.0, 2.0, 3.0);
        assert!(selection.apply(Some(v), &mut history));
        assert_eq!(selection.vertex(), Some(v));
        assert_eq!(history.events, vec![(None, v)]);
    }

    #[test]
    fn selection_ignores_same_vertex() {
        let mut selection = Selection::new();
        let mut history = TestHistory::default();

        let v = Point3::new(1.0, 2.0, 3.0);
        selection.apply(Some(v), &mut history);

        assert!(!selection.apply(Some(v), &mut history));
        assert_eq!(history.events.len(), 1);

        // A nudge below the same-vertex threshold doesn't count either
        let nudged = Point3::new(1.000005, 2.0, 3.0);
        assert!(!selection.apply(Some(nudged), &mut history));
        assert_eq!(selection.vertex(), Some(v));
        assert_eq!(history.events.len(), 1);
    }

    #[test]
    fn selection_records_moves() {
        let mut selection = Selection::new();
        let mut history = TestHistory::default();

        let v0 = Point3::new(1.0, 2.0, 3.0);
        let v1 = Point3::new(1.0005, 2.0, 3.0);
        selection.apply(Some(v0), &mut history);

        assert!(selection.apply(Some(v1), &mut history));
        assert_eq!(selection.vertex(), Some(v1));
        assert_eq!(history.events, vec![(None, v0), (Some(v0), v1)]);
    }

    #[test]
    fn selection_survives_misses() {
        let mut selection = Selection::new();
        let mut history = TestHistory::default();

        assert!(!selection.apply(None, &mut history));
        assert!(selection.vertex().is_none());

        let v = Point3::new(1.0, 2.0, 3.0);
        selection.apply(Some(v), &mut history);

        assert!(!selection.apply(None, &mut history));
        assert_eq!(selection.vertex(), Some(v));
        assert_eq!(history.events.len(), 1);
    }
}
