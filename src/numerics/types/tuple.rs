// src/numerics/types/tuple.rs
// Fixed-size element storage shared by Vector and Point.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::traits::FloatingPoint;

/// NTuple is the `[T; N]` storage underneath `Vector` and `Point`.
///
/// It carries the component-wise helpers both wrappers are built from, but no
/// operator impls of its own: the operator sets live on the wrappers so that a
/// displacement and a location stay distinct types.
#[derive(Copy, Clone, PartialEq)]
pub(crate) struct NTuple<T: FloatingPoint, const N: usize> {
    pub(crate) elements: [T; N],
}

impl<T: FloatingPoint, const N: usize> NTuple<T, N> {
    pub(crate) const ZERO: Self = Self { elements: [T::ZERO; N] };

    pub(crate) const fn from_array(elements: [T; N]) -> Self {
        Self { elements }
    }

    pub(crate) fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Self { elements: core::array::from_fn(|i| f(self.elements[i])) }
    }

    pub(crate) fn zip_map<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        Self { elements: core::array::from_fn(|i| f(self.elements[i], other.elements[i])) }
    }

    /// Apply `f` to each element of `self` paired with the matching element of `other`.
    pub(crate) fn zip_apply<F>(&mut self, other: &Self, mut f: F)
    where
        F: FnMut(&mut T, T),
    {
        for (lhs, &rhs) in self.elements.iter_mut().zip(&other.elements) {
            f(lhs, rhs);
        }
    }

    pub(crate) fn apply<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        self.elements.iter_mut().for_each(|e| f(e));
    }

    pub(crate) fn dot(&self, other: &Self) -> T {
        self.elements
            .iter()
            .zip(&other.elements)
            .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
    }

    /// Largest component magnitude. NaN components are skipped.
    pub(crate) fn max_abs(&self) -> T {
        self.elements.iter().fold(T::ZERO, |max, &e| {
            let magnitude = e.abs();
            if magnitude > max { magnitude } else { max }
        })
    }

    /// True iff every component differs by at most `epsilon`.
    ///
    /// # Panics
    /// Panics if `epsilon` is negative or NaN.
    pub(crate) fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
        assert!(
            epsilon >= T::ZERO,
            "approximate comparison requires a non-negative epsilon, got {:?}",
            epsilon
        );
        self.elements
            .iter()
            .zip(&other.elements)
            .all(|(&a, &b)| (a - b).abs() <= epsilon)
    }
}

impl<T: FloatingPoint, const N: usize> Index<usize> for NTuple<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(index < N, "component index {} out of range for dimension {}", index, N);
        &self.elements[index]
    }
}

impl<T: FloatingPoint, const N: usize> IndexMut<usize> for NTuple<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(index < N, "component index {} out of range for dimension {}", index, N);
        &mut self.elements[index]
    }
}

impl<T: FloatingPoint, const N: usize> fmt::Debug for NTuple<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

/// Writes `(a, b, c)` with three decimals, the single-line form used by `Display` impls.
pub(crate) fn write_components<T>(f: &mut fmt::Formatter<'_>, elements: &[T]) -> fmt::Result
where
    T: fmt::Display,
{
    write!(f, "(")?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{:.3}", element)?;
    }
    write!(f, ")")
}

// Serialized as a fixed-length tuple so no length prefix is written.
impl<T, const N: usize> Serialize for NTuple<T, N>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(N)?;
        for element in &self.elements {
            tuple.serialize_element(element)?;
        }
        tuple.end()
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for NTuple<T, N>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TupleVisitor<T, const N: usize>(PhantomData<T>);

        impl<'de, T, const N: usize> Visitor<'de> for TupleVisitor<T, N>
        where
            T: FloatingPoint + Deserialize<'de>,
        {
            type Value = NTuple<T, N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a tuple of {} elements", N)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut elements = [T::ZERO; N];
                for (i, slot) in elements.iter_mut().enumerate() {
                    *slot = seq
                        .next_element::<T>()?
                        .ok_or_else(|| <A::Error as de::Error>::invalid_length(i, &self))?;
                }
                Ok(NTuple { elements })
            }
        }

        deserializer.deserialize_tuple(N, TupleVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_map_and_dot() {
        let a = NTuple::from_array([1.0f32, 2.0, 3.0]);
        let b = NTuple::from_array([4.0f32, 5.0, 6.0]);

        let sum = a.zip_map(b, |x, y| x + y);
        assert_eq!(sum.elements, [5.0, 7.0, 9.0]);
        assert_eq!(a.dot(&b), 32.0);
        assert_eq!(NTuple::<f32, 3>::ZERO.dot(&a), 0.0);
    }

    #[test]
    fn test_max_abs() {
        assert_eq!(NTuple::from_array([1.0f32, -7.5, 3.0]).max_abs(), 7.5);
        assert_eq!(NTuple::<f64, 2>::ZERO.max_abs(), 0.0);
        assert_eq!(NTuple::from_array([f32::NAN, -2.0]).max_abs(), 2.0);
    }

    #[test]
    fn test_approx_eq_is_inclusive() {
        let a = NTuple::from_array([1.0f64, 1.0]);
        let b = NTuple::from_array([1.5f64, 0.5]);

        assert!(a.approx_eq(&b, 0.5));
        assert!(!a.approx_eq(&b, 0.49));
        assert!(a.approx_eq(&a, 0.0));
    }

    #[test]
    #[should_panic(expected = "non-negative epsilon")]
    fn test_approx_eq_rejects_negative_epsilon() {
        let a = NTuple::from_array([1.0f32]);
        a.approx_eq(&a, -1.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_range_panics() {
        let a = NTuple::from_array([1.0f32, 2.0]);
        let _ = a[2];
    }

    #[test]
    fn test_bincode_roundtrip_has_no_length_prefix() {
        let config = bincode::config::standard();
        let t = NTuple::from_array([1.0f32, -2.0, 3.5]);

        let encoded = bincode::serde::encode_to_vec(t, config).unwrap();
        assert_eq!(encoded.len(), 3 * core::mem::size_of::<f32>());

        let (decoded, _len): (NTuple<f32, 3>, _) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(t, decoded);
    }
}
