pub mod bounds;
pub mod common;
pub mod matrix;
pub mod point;
pub mod ray;
pub mod transform;
pub mod transforms;
pub mod vector;

pub use bounds::Bounds3;
pub use common::{FloatValueType, ValueType};
pub use matrix::Matrix4x4;
pub use point::{Point2, Point3};
pub use ray::Ray;
pub use transform::Transform;
pub use vector::{Vec2, Vec3};
