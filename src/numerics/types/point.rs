// src/numerics/types/point.rs
// Point is a location in affine space. It shares storage with Vector but not
// its operator set: Point - Point is a Vector, Point +/- Vector is a Point, and
// Point + Point does not exist.

use core::fmt;
use core::ops::{Add, AddAssign, Index, IndexMut, Neg, Sub, SubAssign};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::tolerance::Tolerance;
use super::traits::FloatingPoint;
use super::tuple::{write_components, NTuple};
use super::vector::Vector;

/// Point is an N-element location in affine space.
///
/// The difference of two points is the vector between them:
///
/// ```
/// use mathlib::prelude::*;
///
/// let d = point3(4.0f32, 6.0, 3.0) - point3(1.0, 2.0, 3.0);
/// assert_eq!(d, vector3(3.0, 4.0, 0.0));
/// assert_eq!(point3(1.0f32, 2.0, 3.0) + d, point3(4.0, 6.0, 3.0));
/// ```
///
/// Adding two points has no meaning and does not compile:
///
/// ```compile_fail
/// use mathlib::prelude::*;
///
/// let _ = point3(1.0f32, 2.0, 3.0) + point3(4.0f32, 5.0, 6.0);
/// ```
#[derive(Copy, Clone, PartialEq)]
pub struct Point<T: FloatingPoint, const N: usize> {
    tuple: NTuple<T, N>,
}

/// 2D point, defaulting to f32 precision.
pub type Point2<T = f32> = Point<T, 2>;
/// 3D point, defaulting to f32 precision.
pub type Point3<T = f32> = Point<T, 3>;

/// Construct a Point2
pub const fn point2<T: FloatingPoint>(x: T, y: T) -> Point2<T> {
    Point::new([x, y])
}

/// Construct a Point3
pub const fn point3<T: FloatingPoint>(x: T, y: T, z: T) -> Point3<T> {
    Point::new([x, y, z])
}

impl<T: FloatingPoint, const N: usize> Point<T, N> {
    /// The origin of the space.
    pub const ORIGIN: Self = Self { tuple: NTuple::ZERO };

    pub const fn new(elements: [T; N]) -> Self {
        Self { tuple: NTuple::from_array(elements) }
    }

    const fn from_tuple(tuple: NTuple<T, N>) -> Self {
        Self { tuple }
    }

    /// The point reached by displacing the origin by `v`.
    pub fn from_vector(v: Vector<T, N>) -> Self {
        Self::from_tuple(*v.tuple())
    }

    /// Displacement from the origin to `self`.
    pub fn to_vector(self) -> Vector<T, N> {
        self - Self::ORIGIN
    }

    pub fn distance_squared(&self, other: &Self) -> T {
        (*self - *other).length_squared()
    }

    pub fn distance(&self, other: &Self) -> T {
        (*self - *other).length()
    }

    /// Same per-component tolerance contract as [`Vector::is_approx_equal_to`].
    ///
    /// # Panics
    /// Panics if `epsilon` is negative or NaN.
    pub fn is_approx_equal_to(&self, rhs: &Self, epsilon: T) -> bool {
        self.tuple.approx_eq(&rhs.tuple, epsilon)
    }

    /// [`Point::is_approx_equal_to`] using `tolerance.approximate()`.
    pub fn is_approx_equal_with(&self, rhs: &Self, tolerance: &Tolerance<T>) -> bool {
        self.tuple.approx_eq(&rhs.tuple, tolerance.approximate())
    }

    /// Move `self` to the origin.
    pub fn to_zero(&mut self) {
        *self = Self::ORIGIN;
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.tuple.elements
    }

    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.tuple.elements
    }

    pub fn as_slice(&self) -> &[T] {
        &self.tuple.elements
    }

    pub fn as_ptr(&self) -> *const T {
        self.tuple.elements.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.tuple.elements.as_mut_ptr()
    }
}

impl<T: FloatingPoint, const N: usize> Default for Point<T, N> {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl<T: FloatingPoint, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.tuple[index]
    }
}

impl<T: FloatingPoint, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.tuple[index]
    }
}

// Reflection through the origin.
impl<T: FloatingPoint, const N: usize> Neg for Point<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_tuple(self.tuple.map(|a| -a))
    }
}

impl<T: FloatingPoint, const N: usize> Add<Vector<T, N>> for Point<T, N> {
    type Output = Self;

    fn add(self, offset: Vector<T, N>) -> Self {
        Self::from_tuple(self.tuple.zip_map(*offset.tuple(), |a, b| a + b))
    }
}

impl<T: FloatingPoint, const N: usize> Sub<Vector<T, N>> for Point<T, N> {
    type Output = Self;

    fn sub(self, offset: Vector<T, N>) -> Self {
        Self::from_tuple(self.tuple.zip_map(*offset.tuple(), |a, b| a - b))
    }
}

/// Displacement from `other` to `self`.
impl<T: FloatingPoint, const N: usize> Sub for Point<T, N> {
    type Output = Vector<T, N>;

    fn sub(self, other: Self) -> Vector<T, N> {
        Vector::from_tuple(self.tuple.zip_map(other.tuple, |a, b| a - b))
    }
}

impl<T: FloatingPoint, const N: usize> AddAssign<Vector<T, N>> for Point<T, N> {
    fn add_assign(&mut self, offset: Vector<T, N>) {
        self.tuple.zip_apply(offset.tuple(), |a, b| *a += b);
    }
}

impl<T: FloatingPoint, const N: usize> SubAssign<Vector<T, N>> for Point<T, N> {
    fn sub_assign(&mut self, offset: Vector<T, N>) {
        self.tuple.zip_apply(offset.tuple(), |a, b| *a -= b);
    }
}

impl<T: FloatingPoint, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(array: [T; N]) -> Self {
        Self::new(array)
    }
}

impl<T: FloatingPoint, const N: usize> From<Point<T, N>> for [T; N] {
    fn from(p: Point<T, N>) -> Self {
        p.tuple.elements
    }
}

impl<T: FloatingPoint> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        point2(x, y)
    }
}

impl<T: FloatingPoint> From<(T, T, T)> for Point3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        point3(x, y, z)
    }
}

impl<T: FloatingPoint, const N: usize> fmt::Debug for Point<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Point").field(&self.tuple).finish()
    }
}

impl<T: FloatingPoint + fmt::Display, const N: usize> fmt::Display for Point<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point")?;
        write_components(f, &self.tuple.elements)
    }
}

impl<T, const N: usize> Serialize for Point<T, N>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.tuple.serialize(serializer)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for Point<T, N>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        NTuple::deserialize(deserializer).map(Self::from_tuple)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::vector::{vector2, vector3, Vector3};

    #[test]
    fn test_point_minus_point_is_vector() {
        let p = point3(1.0f32, 2.0, 3.0);
        let q = point3(4.0f32, 6.0, 3.0);

        let d: Vector3<f32> = q - p;
        assert_eq!(d, vector3(3.0, 4.0, 0.0));
        assert_eq!(p - p, Vector3::ZERO);
        assert_eq!(p.distance(&q), 5.0);
        assert_eq!(p.distance_squared(&q), 25.0);
    }

    #[test]
    fn test_translation_roundtrip() {
        let p = point2(1.5f64, -2.0);
        let v = vector2(0.25f64, 4.0);

        assert_eq!((p + v) - v, p);
        assert_eq!((p + v) - p, v);

        let mut q = p;
        q += v;
        assert_eq!(q, p + v);
        q -= v;
        assert_eq!(q, p);
    }

    #[test]
    fn test_negation_and_to_zero() {
        let mut p = point3(1.0f32, -2.0, 3.0);
        assert_eq!(-p, point3(-1.0, 2.0, -3.0));

        p.to_zero();
        assert_eq!(p, Point3::ORIGIN);
        assert_eq!(Point3::<f32>::default(), Point3::ORIGIN);
    }

    #[test]
    fn test_vector_conversions() {
        let v = vector3(1.0f32, 2.0, 3.0);
        let p = Point3::from_vector(v);
        assert_eq!(p, point3(1.0, 2.0, 3.0));
        assert_eq!(p.to_vector(), v);
    }

    #[test]
    fn test_point_approx_equality() {
        let p = point3(1.0f32, 2.0, 3.0);
        let q = point3(1.0f32, 2.0, 3.25);

        assert!(p.is_approx_equal_to(&p, 0.0));
        assert!(p.is_approx_equal_to(&q, 0.25));
        assert!(!p.is_approx_equal_to(&q, 0.125));
    }

    #[test]
    fn test_point_approx_equality_with_tolerance() {
        let p = point2(1.0f64, 2.0);
        let q = point2(1.0f64, 2.5);

        assert!(!p.is_approx_equal_with(&q, &Tolerance::default()));
        assert!(p.is_approx_equal_with(&q, &Tolerance::new(0.5, 0.0).unwrap()));
        assert!(!p.is_approx_equal_with(&q, &Tolerance::new(0.25, 1.0).unwrap()));
    }

    #[test]
    fn test_tuple_and_array_conversions() {
        let p: Point2<f32> = (1.0, -2.0).into();
        assert_eq!(p, point2(1.0, -2.0));
        let q: Point3<f64> = (1.0, 2.0, 3.0).into();
        assert_eq!(q, point3(1.0, 2.0, 3.0));

        let mut r = point3(0.0f32, 0.0, 0.0);
        r.as_mut_array()[1] = 7.0;
        assert_eq!(r, point3(0.0, 7.0, 0.0));
        assert_eq!(<[f32; 3]>::from(r), [0.0, 7.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let p = point2(1.0f32, 2.0);
        let _ = p[5];
    }

    #[test]
    fn test_display() {
        assert_eq!(point2(0.5f32, 1.0).to_string(), "Point(0.500, 1.000)");
    }

    #[test]
    fn test_point3_bincode_roundtrip() {
        let config = bincode::config::standard();
        let p: Point3<f64> = point3(1.1, 2.2, 3.3);

        let encoded = bincode::serde::encode_to_vec(p, config).unwrap();
        let (decoded, _len): (Point3<f64>, _) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();

        assert_eq!(p, decoded);
    }
}
