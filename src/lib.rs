//! # mathlib
//!
//! Fixed-dimension linear algebra primitives for geometry-heavy code: vectors,
//! affine points, matrices, planes and a vertex container, generic over the
//! element type and dimension.
//!
//! `Vector` (a displacement) and `Point` (a location) are separate types with
//! disjoint operator sets, so `point + point` does not compile.

pub mod numerics;

pub use numerics::prelude;
