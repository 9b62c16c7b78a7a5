// src/numerics/types/polyhedron.rs

use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use super::vector::Vector3;

/// An ordered, growable list of vertices.
///
/// No faces, winding, or convexity are tracked or checked.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyhedron<T: FloatingPoint = f32> {
    pub vertices: Vec<Vector3<T>>,
}

impl<T: FloatingPoint> Polyhedron<T> {
    pub fn new() -> Self {
        Self { vertices: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { vertices: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, vertex: Vector3<T>) {
        self.vertices.push(vertex);
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vector3<T>] {
        &self.vertices
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Vector3<T>> {
        self.vertices.iter()
    }
}

impl<T: FloatingPoint> FromIterator<Vector3<T>> for Polyhedron<T> {
    fn from_iter<I: IntoIterator<Item = Vector3<T>>>(iter: I) -> Self {
        Self { vertices: iter.into_iter().collect() }
    }
}

impl<T: FloatingPoint> Extend<Vector3<T>> for Polyhedron<T> {
    fn extend<I: IntoIterator<Item = Vector3<T>>>(&mut self, iter: I) {
        self.vertices.extend(iter);
    }
}

impl<'a, T: FloatingPoint> IntoIterator for &'a Polyhedron<T> {
    type Item = &'a Vector3<T>;
    type IntoIter = core::slice::Iter<'a, Vector3<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerics::types::vector::vector3;

    #[test]
    fn test_push_preserves_order() {
        let mut poly = Polyhedron::<f32>::new();
        assert!(poly.is_empty());

        poly.push(Vector3::XAXIS);
        poly.push(Vector3::YAXIS);
        poly.push(Vector3::ZAXIS);

        assert_eq!(poly.len(), 3);
        assert_eq!(poly.vertices(), &[Vector3::XAXIS, Vector3::YAXIS, Vector3::ZAXIS]);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut poly: Polyhedron<f64> = (0..4).map(|i| vector3(i as f64, 0.0, 0.0)).collect();
        poly.extend([vector3(0.0, 1.0, 0.0)]);

        assert_eq!(poly.len(), 5);
        let xs: Vec<f64> = poly.iter().map(|v| v[0]).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 0.0]);

        let mut count = 0;
        for _ in &poly {
            count += 1;
        }
        assert_eq!(count, 5);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let config = bincode::config::standard();
        let poly: Polyhedron = [Vector3::XAXIS, -Vector3::ZAXIS].into_iter().collect();

        let encoded = bincode::serde::encode_to_vec(&poly, config).unwrap();
        let (decoded, _len): (Polyhedron, _) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(poly, decoded);
    }
}
