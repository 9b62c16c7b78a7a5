// src/numerics/types/plane.rs
// Plane n . p + d = 0 and point classification against it.

use core::fmt;
use serde::{Deserialize, Serialize};

use super::point::Point3;
use super::tolerance::Tolerance;
use super::traits::FloatingPoint;
use super::vector::Vector3;

/// Which side of a plane a point lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// On the side the normal points to
    Front,
    /// On the side opposite the normal
    Back,
    /// Within the classification tolerance of the plane
    On,
}

/// The set of points `p` with `dot(normal, p) + offset = 0`.
///
/// The normal is not required to be unit length; `signed_distance` is only a
/// true Euclidean distance when it is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Plane<T: FloatingPoint = f32> {
    pub normal: Vector3<T>,
    pub offset: T,
}

impl<T: FloatingPoint> Plane<T> {
    pub fn new(normal: Vector3<T>, offset: T) -> Self {
        Self { normal, offset }
    }

    /// Plane through `point` with the given `normal`.
    pub fn from_point_normal(point: Point3<T>, normal: Vector3<T>) -> Self {
        let offset = -normal.dot(&point.to_vector());
        Self { normal, offset }
    }

    /// `dot(normal, p) + offset`, scaled by the normal's length.
    pub fn signed_distance(&self, p: &Point3<T>) -> T {
        self.normal.dot(&p.to_vector()) + self.offset
    }

    /// Classify `p` using `T::DEFAULT_EPSILON`.
    pub fn classify_point(&self, p: &Point3<T>) -> Side {
        self.classify_point_within(p, T::DEFAULT_EPSILON)
    }

    /// Classify `p` using the classification epsilon from `tolerance`.
    pub fn classify_point_with(&self, p: &Point3<T>, tolerance: &Tolerance<T>) -> Side {
        self.classify_point_within(p, tolerance.classification())
    }

    /// `Front` if the signed distance exceeds `epsilon`, `Back` if it is below
    /// `-epsilon`, `On` otherwise.
    ///
    /// # Panics
    /// Panics if `epsilon` is negative or NaN, or if the signed distance is NaN
    /// (a NaN or infinite component in the point or the plane).
    pub fn classify_point_within(&self, p: &Point3<T>, epsilon: T) -> Side {
        assert!(
            epsilon >= T::ZERO,
            "plane classification requires a non-negative epsilon, got {:?}",
            epsilon
        );
        let distance = self.signed_distance(p);
        assert!(
            !distance.is_nan(),
            "signed distance of {:?} to {:?} is NaN",
            p,
            self
        );
        if distance > epsilon {
            Side::Front
        } else if distance < -epsilon {
            Side::Back
        } else {
            Side::On
        }
    }
}

impl<T: FloatingPoint + fmt::Display> fmt::Display for Plane<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plane(n={}, d={:.3})", self.normal, self.offset)
    }
}
