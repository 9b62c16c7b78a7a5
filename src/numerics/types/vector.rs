// src/numerics/types/vector.rs
// Generic N-dimensional Vector (a displacement) with default precision f32
// through the Vector2/Vector3/Vector4 aliases.

use core::fmt;
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::NumericsError;
use super::tolerance::Tolerance;
use super::traits::FloatingPoint;
use super::tuple::{write_components, NTuple};

/// Vector is an N-element displacement/direction with no fixed origin.
///
/// Equality (`==`) is exact per component; use [`Vector::is_approx_equal_to`] for a
/// tolerance-based comparison. Dividing by [`Vector::ZERO`] or a zero scalar and
/// normalizing a zero-length vector panic; the `try_`/`checked_` forms return a
/// [`NumericsError`] instead.
#[derive(Copy, Clone, PartialEq)]
pub struct Vector<T: FloatingPoint, const N: usize> {
    tuple: NTuple<T, N>,
}

/// 2D vector, defaulting to f32 precision.
pub type Vector2<T = f32> = Vector<T, 2>;
/// 3D vector, defaulting to f32 precision.
pub type Vector3<T = f32> = Vector<T, 3>;
/// 4D vector, defaulting to f32 precision.
pub type Vector4<T = f32> = Vector<T, 4>;

/// Construct a Vector2
pub const fn vector2<T: FloatingPoint>(x: T, y: T) -> Vector2<T> {
    Vector::new([x, y])
}

/// Construct a Vector3
pub const fn vector3<T: FloatingPoint>(x: T, y: T, z: T) -> Vector3<T> {
    Vector::new([x, y, z])
}

/// Construct a Vector4
pub const fn vector4<T: FloatingPoint>(x: T, y: T, z: T, w: T) -> Vector4<T> {
    Vector::new([x, y, z, w])
}

impl<T: FloatingPoint, const N: usize> Vector<T, N> {
    /// The additive identity.
    pub const ZERO: Self = Self { tuple: NTuple::ZERO };

    /// Construct a new Vector from its components
    pub const fn new(elements: [T; N]) -> Self {
        Self { tuple: NTuple::from_array(elements) }
    }

    pub(crate) const fn from_tuple(tuple: NTuple<T, N>) -> Self {
        Self { tuple }
    }

    pub(crate) fn tuple(&self) -> &NTuple<T, N> {
        &self.tuple
    }

    /// Sum over i of `a[i] * b[i]`.
    pub fn dot_product(a: &Self, b: &Self) -> T {
        a.tuple.dot(&b.tuple)
    }

    /// Dot product of `self` with `other`.
    pub fn dot(&self, other: &Self) -> T {
        Self::dot_product(self, other)
    }

    /// Return the squared length (avoids sqrt)
    pub fn length_squared(&self) -> T {
        Self::dot_product(self, self)
    }

    /// Return the Euclidean length.
    ///
    /// Components are scaled by the largest magnitude before squaring, so the
    /// result neither overflows nor underflows for any finite vector.
    pub fn length(&self) -> T {
        let scale = self.tuple.max_abs();
        if !(scale > T::ZERO) {
            return scale;
        }
        let scaled = self.tuple.map(|e| e / scale);
        scaled.dot(&scaled).sqrt() * scale
    }

    /// Unit vector in the direction of `self`, or `None` if there is no
    /// direction: zero, infinite, or NaN components.
    fn unit_direction(&self) -> Option<NTuple<T, N>> {
        let scale = self.tuple.max_abs();
        if !(scale > T::ZERO) {
            return None;
        }
        let scaled = self.tuple.map(|e| e / scale);
        let length = scaled.dot(&scaled).sqrt();
        if !(length > T::ZERO) {
            return None;
        }
        Some(scaled.map(|e| e / length))
    }

    /// Scale `self` in place to unit length.
    ///
    /// # Panics
    /// Panics if the vector is zero or has non-finite components.
    pub fn normalize(&mut self) {
        match self.unit_direction() {
            Some(unit) => self.tuple = unit,
            None => panic!("cannot normalize a zero-length or non-finite vector: {:?}", self),
        }
    }

    /// Unit-length copy of `self`, leaving `self` untouched.
    ///
    /// # Panics
    /// Panics if the vector is zero or has non-finite components.
    pub fn normalized_copy(&self) -> Self {
        let mut out = *self;
        out.normalize();
        out
    }

    /// Non-panicking [`Vector::normalize`].
    pub fn try_normalize(&mut self) -> Result<(), NumericsError> {
        match self.unit_direction() {
            Some(unit) => {
                self.tuple = unit;
                Ok(())
            }
            None => {
                tracing::debug!(vector = ?self, "refusing to normalize zero-length vector");
                Err(NumericsError::ZeroLength)
            }
        }
    }

    /// Non-panicking [`Vector::normalized_copy`].
    pub fn try_normalized_copy(&self) -> Result<Self, NumericsError> {
        let mut out = *self;
        out.try_normalize()?;
        Ok(out)
    }

    /// Component-wise division that reports a zero divisor instead of panicking.
    pub fn checked_div(self, rhs: Self) -> Result<Self, NumericsError> {
        if rhs == Self::ZERO {
            tracing::debug!(dividend = ?self, "refusing to divide by the zero vector");
            return Err(NumericsError::DivisionByZero { divisor: "vector" });
        }
        Ok(Self::from_tuple(self.tuple.zip_map(rhs.tuple, |a, b| a / b)))
    }

    /// Scalar division that reports a zero divisor instead of panicking.
    pub fn checked_div_scalar(self, rhs: T) -> Result<Self, NumericsError> {
        if rhs == T::ZERO {
            tracing::debug!(dividend = ?self, "refusing to divide by zero scalar");
            return Err(NumericsError::DivisionByZero { divisor: "scalar" });
        }
        Ok(Self::from_tuple(self.tuple.map(|a| a / rhs)))
    }

    /// True iff every component satisfies `|self[i] - rhs[i]| <= epsilon`.
    ///
    /// # Panics
    /// Panics if `epsilon` is negative or NaN.
    pub fn is_approx_equal_to(&self, rhs: &Self, epsilon: T) -> bool {
        self.tuple.approx_eq(&rhs.tuple, epsilon)
    }

    /// [`Vector::is_approx_equal_to`] with the `approximate` epsilon from `tolerance`.
    pub fn is_approx_equal_with(&self, rhs: &Self, tolerance: &Tolerance<T>) -> bool {
        self.is_approx_equal_to(rhs, tolerance.approximate())
    }

    /// Reset every component to zero.
    pub fn to_zero(&mut self) {
        *self = Self::ZERO;
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

    /// Pointer to the N contiguous components, for passing to external numeric APIs.
    pub fn as_ptr(&self) -> *const T {
        self.tuple.elements.as_ptr()
    }

    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.tuple.elements.as_mut_ptr()
    }
}

impl<T: FloatingPoint> Vector<T, 2> {
    pub const XAXIS: Self = Self::new([T::ONE, T::ZERO]);
    pub const YAXIS: Self = Self::new([T::ZERO, T::ONE]);
}

impl<T: FloatingPoint> Vector<T, 3> {
    pub const XAXIS: Self = Self::new([T::ONE, T::ZERO, T::ZERO]);
    pub const YAXIS: Self = Self::new([T::ZERO, T::ONE, T::ZERO]);
    pub const ZAXIS: Self = Self::new([T::ZERO, T::ZERO, T::ONE]);

    /// Right-handed cross product.
    pub fn cross_product(a: &Self, b: &Self) -> Self {
        let [ax, ay, az] = a.tuple.elements;
        let [bx, by, bz] = b.tuple.elements;
        Self::new([
            ay * bz - az * by,
            az * bx - ax * bz,
            ax * by - ay * bx,
        ])
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::cross_product(self, other)
    }
}

impl<T: FloatingPoint> Vector<T, 4> {
    pub const XAXIS: Self = Self::new([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    pub const YAXIS: Self = Self::new([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    pub const ZAXIS: Self = Self::new([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    pub const WAXIS: Self = Self::new([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T: FloatingPoint, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: FloatingPoint, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.tuple[index]
    }
}

impl<T: FloatingPoint, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.tuple[index]
    }
}

impl<T: FloatingPoint, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_tuple(self.tuple.map(|a| -a))
    }
}

impl<T: FloatingPoint, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::from_tuple(self.tuple.zip_map(other.tuple, |a, b| a + b))
    }
}

impl<T: FloatingPoint, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::from_tuple(self.tuple.zip_map(other.tuple, |a, b| a - b))
    }
}

// Component-wise (Hadamard) product.
impl<T: FloatingPoint, const N: usize> Mul for Vector<T, N> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self::from_tuple(self.tuple.zip_map(other.tuple, |a, b| a * b))
    }
}

impl<T: FloatingPoint, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        Self::from_tuple(self.tuple.map(|a| a * scalar))
    }
}

impl<T: FloatingPoint, const N: usize> Div for Vector<T, N> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        assert!(other != Self::ZERO, "division by the zero vector");
        Self::from_tuple(self.tuple.zip_map(other.tuple, |a, b| a / b))
    }
}

impl<T: FloatingPoint, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, scalar: T) -> Self {
        assert!(scalar != T::ZERO, "division of a vector by zero");
        Self::from_tuple(self.tuple.map(|a| a / scalar))
    }
}

impl<T: FloatingPoint, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, other: Self) {
        self.tuple.zip_apply(&other.tuple, |a, b| *a += b);
    }
}

impl<T: FloatingPoint, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, other: Self) {
        self.tuple.zip_apply(&other.tuple, |a, b| *a -= b);
    }
}

impl<T: FloatingPoint, const N: usize> MulAssign for Vector<T, N> {
    fn mul_assign(&mut self, other: Self) {
        self.tuple.zip_apply(&other.tuple, |a, b| *a *= b);
    }
}

impl<T: FloatingPoint, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, scalar: T) {
        self.tuple.apply(|a| *a *= scalar);
    }
}

impl<T: FloatingPoint, const N: usize> DivAssign for Vector<T, N> {
    fn div_assign(&mut self, other: Self) {
        assert!(other != Self::ZERO, "division by the zero vector");
        self.tuple.zip_apply(&other.tuple, |a, b| *a /= b);
    }
}

impl<T: FloatingPoint, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, scalar: T) {
        assert!(scalar != T::ZERO, "division of a vector by zero");
        self.tuple.apply(|a| *a /= scalar);
    }
}

// Conversions between Vector<T, N> and arrays [T; N]

impl<T: FloatingPoint, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(array: [T; N]) -> Self {
        Self::new(array)
    }
}

impl<T: FloatingPoint, const N: usize> From<&[T; N]> for Vector<T, N> {
    fn from(array: &[T; N]) -> Self {
        Self::new(*array)
    }
}

impl<T: FloatingPoint, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.tuple.elements
    }
}

// Conversions between the named vectors and tuples

impl<T: FloatingPoint> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        vector2(x, y)
    }
}

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        vector3(x, y, z)
    }
}

impl<T: FloatingPoint> From<(T, T, T, T)> for Vector4<T> {
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        vector4(x, y, z, w)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        let [x, y, z] = v.tuple.elements;
        (x, y, z)
    }
}

impl<T: FloatingPoint, const N: usize> fmt::Debug for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector").field(&self.tuple).finish()
    }
}

impl<T: FloatingPoint + fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector")?;
        write_components(f, &self.tuple.elements)
    }
}

impl<T, const N: usize> Serialize for Vector<T, N>
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

impl<'de, T, const N: usize> Deserialize<'de> for Vector<T, N>
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
