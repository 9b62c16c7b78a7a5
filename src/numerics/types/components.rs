// src/numerics/types/components.rs
// Named x/y/z/w accessors over positional storage.

use super::point::Point;
use super::traits::FloatingPoint;
use super::vector::Vector;

/// Types with an `x` component (index 0).
pub trait HasX<T> {
    fn x(&self) -> T;
    fn x_mut(&mut self) -> &mut T;
}

/// Types with a `y` component (index 1).
pub trait HasY<T> {
    fn y(&self) -> T;
    fn y_mut(&mut self) -> &mut T;
}

/// Types with a `z` component (index 2).
pub trait HasZ<T> {
    fn z(&self) -> T;
    fn z_mut(&mut self) -> &mut T;
}

/// Types with a `w` component (index 3). Only 4D vectors have one.
pub trait HasW<T> {
    fn w(&self) -> T;
    fn w_mut(&mut self) -> &mut T;
}

macro_rules! impl_component {
    ($trait:ident, $get:ident, $get_mut:ident, $index:literal, $ty:ident, $($n:literal),+) => {
        $(
            impl<T: FloatingPoint> $trait<T> for $ty<T, $n> {
                #[inline]
                fn $get(&self) -> T {
                    self[$index]
                }

                #[inline]
                fn $get_mut(&mut self) -> &mut T {
                    &mut self[$index]
                }
            }
        )+
    };
}

impl_component!(HasX, x, x_mut, 0, Vector, 2, 3, 4);
impl_component!(HasY, y, y_mut, 1, Vector, 2, 3, 4);
impl_component!(HasZ, z, z_mut, 2, Vector, 3, 4);
impl_component!(HasW, w, w_mut, 3, Vector, 4);

impl_component!(HasX, x, x_mut, 0, Point, 2, 3);
impl_component!(HasY, y, y_mut, 1, Point, 2, 3);
impl_component!(HasZ, z, z_mut, 2, Point, 3);
