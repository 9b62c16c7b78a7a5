// src/numerics/types/matrix.rs
// Dense R x C matrix with compile-time dimensions.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut, Mul};

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::tolerance::Tolerance;
use super::traits::FloatingPoint;
use super::tuple::NTuple;
use super::vector::Vector;

/// Row-major R x C matrix, zero by default.
///
/// Multiplication is only defined between `Matrix<T, R, C>` and `Matrix<T, C, K>`,
/// so mismatched shapes are rejected by the compiler:
///
/// ```
/// use mathlib::prelude::*;
///
/// let a = Matrix::<f32, 2, 3>::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
/// let b = Matrix::<f32, 3, 4>::ZERO;
/// let c: Matrix<f32, 2, 4> = a * b;
/// assert_eq!(c, Matrix::ZERO);
/// ```
///
/// ```compile_fail
/// use mathlib::prelude::*;
///
/// let a = Matrix::<f32, 2, 3>::ZERO;
/// let _ = a * a;
/// ```
#[derive(Copy, Clone, PartialEq)]
pub struct Matrix<T: FloatingPoint, const R: usize, const C: usize> {
    data: [[T; C]; R],
}

/// 2x2 matrix, defaulting to f32 precision.
pub type Matrix2<T = f32> = Matrix<T, 2, 2>;
/// 3x3 matrix, defaulting to f32 precision.
pub type Matrix3<T = f32> = Matrix<T, 3, 3>;
/// 4x4 matrix, defaulting to f32 precision.
pub type Matrix4<T = f32> = Matrix<T, 4, 4>;

impl<T: FloatingPoint, const R: usize, const C: usize> Matrix<T, R, C> {
    pub const ZERO: Self = Self { data: [[T::ZERO; C]; R] };

    /// Zero matrix
    pub fn zero() -> Self {
        Self::ZERO
    }

    /// Construct a new matrix from its rows
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Self { data: rows }
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [T; C] {
        assert!(idx < R, "row index {} out of range for {} rows", idx, R);
        self.data[idx]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [T; R] {
        assert!(idx < C, "column index {} out of range for {} columns", idx, C);
        core::array::from_fn(|i| self.data[i][idx])
    }

    pub fn rows(&self) -> &[[T; C]; R] {
        &self.data
    }

    /// True iff every element differs by at most `epsilon`.
    ///
    /// # Panics
    /// Panics if `epsilon` is negative or NaN.
    pub fn is_approx_equal_to(&self, rhs: &Self, epsilon: T) -> bool {
        self.data
            .iter()
            .zip(&rhs.data)
            .all(|(a, b)| NTuple::from_array(*a).approx_eq(&NTuple::from_array(*b), epsilon))
    }

    /// [`Matrix::is_approx_equal_to`] using `tolerance.approximate()`.
    pub fn is_approx_equal_with(&self, rhs: &Self, tolerance: &Tolerance<T>) -> bool {
        self.is_approx_equal_to(rhs, tolerance.approximate())
    }
}

impl<T: FloatingPoint, const N: usize> Matrix<T, N, N> {
    /// Identity matrix
    pub fn identity() -> Self {
        let mut m = Self::ZERO;
        for i in 0..N {
            m.data[i][i] = T::ONE;
        }
        m
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Element access by `(row, column)`.
impl<T: FloatingPoint, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < R && col < C,
            "element ({}, {}) out of range for {}x{} matrix",
            row, col, R, C
        );
        &self.data[row][col]
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < R && col < C,
            "element ({}, {}) out of range for {}x{} matrix",
            row, col, R, C
        );
        &mut self.data[row][col]
    }
}

/// Matrix * Matrix: element (i, j) is row i of `self` dotted with column j of `rhs`.
impl<T: FloatingPoint, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, K>;

    fn mul(self, rhs: Matrix<T, C, K>) -> Matrix<T, R, K> {
        let mut result = Matrix::<T, R, K>::ZERO;
        for i in 0..R {
            for j in 0..K {
                let mut sum = T::ZERO;
                for k in 0..C {
                    sum += self.data[i][k] * rhs.data[k][j];
                }
                result.data[i][j] = sum;
            }
        }
        result
    }
}

/// Matrix * column Vector.
impl<T: FloatingPoint, const R: usize, const C: usize> Mul<Vector<T, C>> for Matrix<T, R, C> {
    type Output = Vector<T, R>;

    fn mul(self, rhs: Vector<T, C>) -> Vector<T, R> {
        Vector::new(core::array::from_fn(|i| {
            Vector::dot_product(&Vector::new(self.data[i]), &rhs)
        }))
    }
}

impl<T: FloatingPoint, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix").field("rows", &self.data).finish()
    }
}

// Serialized as R rows, each a C-tuple.
impl<T, const R: usize, const C: usize> Serialize for Matrix<T, R, C>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut rows = serializer.serialize_tuple(R)?;
        for row in &self.data {
            rows.serialize_element(&NTuple::from_array(*row))?;
        }
        rows.end()
    }
}

impl<'de, T, const R: usize, const C: usize> Deserialize<'de> for Matrix<T, R, C>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RowsVisitor<T, const R: usize, const C: usize>(PhantomData<T>);

        impl<'de, T, const R: usize, const C: usize> Visitor<'de> for RowsVisitor<T, R, C>
        where
            T: FloatingPoint + Deserialize<'de>,
        {
            type Value = Matrix<T, R, C>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} rows of {} elements", R, C)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut m = Matrix::<T, R, C>::ZERO;
                for (i, row) in m.data.iter_mut().enumerate() {
                    let tuple = seq
                        .next_element::<NTuple<T, C>>()?
                        .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
                    *row = tuple.elements;
                }
                Ok(m)
            }
        }

        deserializer.deserialize_tuple(R, RowsVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::vector::vector3;

    fn sample() -> Matrix3<f32> {
        Matrix::from_rows([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
        ])
    }

    #[test]
    fn test_matrix_roundtrip() {
        let config = bincode::config::standard();
        let m = sample();

        let encoded = bincode::serde::encode_to_vec(m, config).unwrap();
        let (decoded, _len): (Matrix3<f32>, _) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();

        assert_eq!(m, decoded);
    }

    #[test]
    fn test_matrix_constructors_and_accessors() {
        let m = sample();

        assert_eq!(m.row(0), [1.0, 2.0, 3.0]);
        assert_eq!(m.column(1), [2.0, 5.0, 8.0]);
        assert_eq!(m[(2, 0)], 7.0);

        let z = Matrix::<f32, 2, 3>::default();
        assert_eq!(z, Matrix::from_rows([[0.0; 3]; 2]));
        assert_eq!(z, Matrix::zero());

        let id = Matrix3::<f32>::identity();
        assert_eq!(
            id,
            Matrix::from_rows([[1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0]])
        );
    }

    #[test]
    fn test_matrix_matrix_mul() {
        let a = sample();
        let b = Matrix::from_rows([
            [9.0f32, 8.0, 7.0],
            [6.0, 5.0, 4.0],
            [3.0, 2.0, 1.0],
        ]);

        let c = a * b;

        assert_eq!(c.row(0), [30.0, 24.0, 18.0]);
        assert_eq!(c.row(1), [84.0, 69.0, 54.0]);
        assert_eq!(c.row(2), [138.0, 114.0, 90.0]);
        assert_eq!(a * Matrix3::identity(), a);
    }

    #[test]
    fn test_rectangular_mul_shapes() {
        let a = Matrix::from_rows([[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let b = Matrix::from_rows([[1.0f64], [0.0], [-1.0]]);

        let c: Matrix<f64, 2, 1> = a * b;
        assert_eq!(c.column(0), [-2.0, -2.0]);

        let zero: Matrix<f64, 2, 4> = a * Matrix::<f64, 3, 4>::ZERO;
        assert_eq!(zero, Matrix::ZERO);
    }

    #[test]
    fn test_matrix_vector_mul() {
        let v = vector3(1.0f32, 1.0f32, 1.0f32);
        let result = sample() * v;

        // Row sums: [6, 15, 24]
        assert_eq!(result, vector3(6.0, 15.0, 24.0));
    }

    #[test]
    fn test_matrix_approx_equality() {
        let mut m = sample();
        m[(1, 1)] += 0.001;
        assert!(m.is_approx_equal_to(&sample(), 0.01));
        assert!(!m.is_approx_equal_to(&sample(), 0.0001));
    }

    #[test]
    fn test_matrix_approx_equality_with_tolerance() {
        let mut m = sample();
        m[(0, 2)] -= 0.5;

        assert!(!m.is_approx_equal_with(&sample(), &Tolerance::default()));
        assert!(m.is_approx_equal_with(&sample(), &Tolerance::new(0.5, 0.0).unwrap()));
        assert!(sample().is_approx_equal_with(&sample(), &Tolerance::new(0.0, 0.0).unwrap()));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_row_out_of_range_panics() {
        sample().row(3);
    }

    #[test]
    #[should_panic(expected = "element (0, 3) out of range for 2x3 matrix")]
    fn test_element_index_out_of_range_panics() {
        let m = Matrix::<f32, 2, 3>::ZERO;
        let _ = m[(0, 3)];
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_element_index_mut_out_of_range_panics() {
        let mut m = sample();
        m[(3, 0)] = 1.0;
    }
}
