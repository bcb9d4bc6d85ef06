#[cfg(test)]
mod tests {
    use hari::math::{Bounds3, Point3};
    use hari::mesh::{Mesh, MeshError};

    #[test]
    fn new() {
        let mesh = Mesh::new(
            vec![0, 1, 2, 0, 2, 3],
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
        )
        .unwrap();
        assert_eq!(mesh.indices, vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.points.len(), 4);
    }

    #[test]
    fn new_rejects_partial_triangles() {
        let result = Mesh::new(
            vec![0, 1],
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
        );
        assert!(matches!(result, Err(MeshError::IndexCount(2))));
    }

    #[test]
    fn new_rejects_out_of_bounds_indices() {
        let result = Mesh::new(
            vec![0, 1, 3],
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
        );
        assert!(matches!(
            result,
            Err(MeshError::IndexOutOfBounds {
                index: 3,
                point_count: 3
            })
        ));
    }

    #[test]
    fn triangle_count() {
        let points = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];

        let mesh = Mesh::new(vec![0, 1, 2], points.clone()).unwrap();
        assert_eq!(mesh.triangle_count(), 1);

        let mesh = Mesh::new(vec![0, 1, 2, 0, 2, 3], points).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn bounds() {
        let mesh = Mesh::new(
            vec![0, 1, 2],
            vec![
                Point3::new(-1.0, 0.0, 2.0),
                Point3::new(1.0, 0.5, 0.0),
                Point3::new(0.0, 2.0, -3.0),
            ],
        )
        .unwrap();

        let bb = mesh.bounds();
        assert_eq!(bb.p_min, Point3::new(-1.0, 0.0, -3.0));
        assert_eq!(bb.p_max, Point3::new(1.0, 2.0, 2.0));
    }

    #[test]
    fn bounds_of_empty_mesh() {
        let mesh = Mesh::new(Vec::new(), Vec::new()).unwrap();
        assert_eq!(mesh.bounds(), Bounds3::default());
    }
}
