use std::io::prelude::*;
use std::sync::Arc;
use std::time::Instant;

use hari::math::{Point3, Ray, Transform, Vec3};
use hari::mesh::Mesh;
use hari::picker::{pick, MeshInstance};
use hari::scene::Scene;

const ITERATIONS: usize = 100000;

fn bench_pick(instances: &[MeshInstance], ray: Ray<f32>) {
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        if pick(ray, instances).is_none() {
            panic!("We only wanted to force the loop to be executed!")
        }
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let us_per_pick = (elapsed_ns as f64) * 1e-3 / (ITERATIONS as f64);
    println!(
        "Pick     took {:4.1} ms total, {:0.4} us per pick",
        elapsed_ms, us_per_pick
    );
}

fn bench_miss(instances: &[MeshInstance], ray: Ray<f32>) {
    let start = Instant::now();
    for _ in 0..ITERATIONS {
        if pick(ray, instances).is_some() {
            panic!("We only wanted to force the loop to be executed!")
        }
    }
    let elapsed_ns = start.elapsed().as_nanos();
    let elapsed_ms = (elapsed_ns as f64) * 1e-6;
    let us_per_pick = (elapsed_ns as f64) * 1e-3 / (ITERATIONS as f64);
    println!(
        "Miss     took {:4.1} ms total, {:0.4} us per pick",
        elapsed_ms, us_per_pick
    );
}

/// Builds an n*n quad grid on the xy-plane spanning (0,0) to (n,n).
fn grid(n: usize) -> MeshInstance {
    let side = n + 1;
    let mut points = Vec::with_capacity(side * side);
    for y in 0..side {
        for x in 0..side {
            points.push(Point3::new(x as f32, y as f32, 0.0));
        }
    }

    let mut indices = Vec::with_capacity(n * n * 6);
    for y in 0..n {
        for x in 0..n {
            let v00 = y * side + x;
            let v10 = v00 + 1;
            let v01 = v00 + side;
            let v11 = v01 + 1;
            indices.extend_from_slice(&[v00, v10, v11, v00, v11, v01]);
        }
    }

    MeshInstance::new(
        Arc::new(Mesh::new(indices, points).unwrap()),
        Transform::default(),
    )
}

fn grid_ray(n: usize, toward: Vec3<f32>) -> Ray<f32> {
    // Off the vertex lattice so the hit lands strictly inside a triangle
    let center = (n as f32) / 2.0 + 0.3;
    Ray::new(Point3::new(center, center, -5.0), toward, f32::INFINITY)
}

fn main() {
    println!("Grid 8");
    let small = vec![grid(8)];
    bench_pick(&small, grid_ray(8, Vec3::new(0.0, 0.0, 1.0)));

    println!("Grid 64");
    let large = vec![grid(64)];
    bench_pick(&large, grid_ray(64, Vec3::new(0.0, 0.0, 1.0)));

    println!("Grid 64 culled");
    bench_miss(&large, grid_ray(64, Vec3::new(0.0, 0.0, -1.0)));

    println!("Cornell");
    let (cornell, _, _) = Scene::cornell();
    let center_ray = Ray::new(
        Point3::new(278.0, 273.0, 800.0),
        Vec3::new(0.0, 0.0, -1.0),
        f32::INFINITY,
    );
    bench_pick(&cornell.instances, center_ray);

    println!("Press enter to quit...");
    // Read a single byte and discard
    let _ = std::io::stdin().read(&mut [0u8]).unwrap();
}
