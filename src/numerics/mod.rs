// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod components;
    pub mod error;
    pub mod matrix;
    pub mod plane;
    pub mod point;
    pub mod polyhedron;
    pub mod tolerance;
    pub mod traits;
    pub(crate) mod tuple;
    pub mod vector;
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use super::types::components::{HasW, HasX, HasY, HasZ};
    pub use super::types::error::NumericsError;
    pub use super::types::matrix::{Matrix, Matrix2, Matrix3, Matrix4};
    pub use super::types::plane::{Plane, Side};
    pub use super::types::point::{point2, point3, Point, Point2, Point3};
    pub use super::types::polyhedron::Polyhedron;
    pub use super::types::tolerance::Tolerance;
    pub use super::types::traits::FloatingPoint;
    pub use super::types::vector::{vector2, vector3, vector4, Vector, Vector2, Vector3, Vector4};
}
