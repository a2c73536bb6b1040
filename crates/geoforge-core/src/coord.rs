//! Coordinate capability contract and iterator type projections.
//!
//! Kernels in GeoForge consume points through iterators, but constrain and
//! branch on the scalar type underneath. The two aliases here perform that
//! extraction at the type level: [`IterValue`] asks an iterator what it
//! yields, and [`IterScalar`] reaches one level further, through the
//! [`Coord2d`] contract, to the component type. Instantiating either with a
//! type that lacks the required association is a compile error, which is
//! the intended way for a miswired kernel to fail.

use crate::scalar::Scalar;

/// Types that can be interpreted as a 2D coordinate.
///
/// A `Coord2d` bundles exactly two components of one scalar type and
/// declares that type as [`Scalar`](Self::Scalar), so generic code can name
/// it. Implemented for the strongly typed [`Vec2d`](crate::Vec2d) as well
/// as for plain `(T, T)` tuples and `[T; 2]` arrays; prefer the strong type
/// where coordinates flow across API boundaries.
///
/// # Examples
///
/// ```
/// use geoforge_core::{Coord2d, IterScalar, Vec2d};
///
/// fn x_span<I>(mut points: I) -> IterScalar<I>
/// where
///     I: Iterator,
///     I::Item: Coord2d,
/// {
///     let first = points.next().expect("at least one point");
///     let (mut min, mut max) = (first.x(), first.x());
///     for p in points {
///         if p.x() < min {
///             min = p.x();
///         }
///         if p.x() > max {
///             max = p.x();
///         }
///     }
///     max - min
/// }
///
/// let points = vec![Vec2d::new(3.0f64, 0.0), Vec2d::new(-1.0, 2.0)];
/// assert_eq!(x_span(points.into_iter()), 4.0);
/// ```
pub trait Coord2d: Copy {
    /// The type of each component.
    type Scalar: Scalar;

    /// Creates the coordinate from its two components.
    fn from_xy(x: Self::Scalar, y: Self::Scalar) -> Self;

    /// Returns the `x` component.
    fn x(&self) -> Self::Scalar;

    /// Returns the `y` component.
    fn y(&self) -> Self::Scalar;
}

impl<T: Scalar> Coord2d for (T, T) {
    type Scalar = T;

    #[inline]
    fn from_xy(x: T, y: T) -> Self {
        (x, y)
    }

    #[inline]
    fn x(&self) -> T {
        self.0
    }

    #[inline]
    fn y(&self) -> T {
        self.1
    }
}

impl<T: Scalar> Coord2d for [T; 2] {
    type Scalar = T;

    #[inline]
    fn from_xy(x: T, y: T) -> Self {
        [x, y]
    }

    #[inline]
    fn x(&self) -> T {
        self[0]
    }

    #[inline]
    fn y(&self) -> T {
        self[1]
    }
}

/// The element type an iterator yields.
///
/// `IterValue<I>` is `<I as Iterator>::Item`; using it with a
/// non-iterator `I` is rejected at the point of instantiation.
pub type IterValue<I> = <I as Iterator>::Item;

/// The scalar type underlying a coordinate iterator.
///
/// Projects twice: first [`IterValue`] to obtain the element, then the
/// element's [`Coord2d::Scalar`]. Both levels must expose the association
/// or the instantiation is rejected.
pub type IterScalar<I> = <<I as Iterator>::Item as Coord2d>::Scalar;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::DType;
    use crate::scalar::dtype_of;
    use crate::typecheck::all_same_floating_point;
    use crate::vec2d::Vec2d;

    fn scalar_tag<I>(_: &I) -> DType
    where
        I: Iterator,
        I::Item: Coord2d,
    {
        dtype_of::<IterScalar<I>>()
    }

    #[test]
    fn test_tuple_coord() {
        let p = <(i32, i32)>::from_xy(3, 4);
        assert_eq!(p.x(), 3);
        assert_eq!(p.y(), 4);
    }

    #[test]
    fn test_array_coord() {
        let p = <[f32; 2]>::from_xy(0.5, -0.5);
        assert_eq!(p.x(), 0.5);
        assert_eq!(p.y(), -0.5);
    }

    #[test]
    fn test_iter_value_projection() {
        // The element projection yields the point type itself.
        let element: IterValue<std::vec::IntoIter<Vec2d<f64>>> = Vec2d::new(1.0, 2.0);
        assert_eq!(element.x, 1.0);
    }

    #[test]
    fn test_iter_scalar_projection() {
        // The two-level projection reaches the component type.
        let component: IterScalar<std::vec::IntoIter<Vec2d<f64>>> = 2.5;
        assert_eq!(component, 2.5_f64);

        let narrower: IterScalar<std::vec::IntoIter<Vec2d<f32>>> = 1.5;
        assert_eq!(narrower, 1.5_f32);
    }

    #[test]
    fn test_matching_precision_across_iterators() {
        let xs = vec![Vec2d::new(0.0_f64, 1.0)];
        let ys = vec![Vec2d::new(2.0_f64, 3.0)];

        let tags = [
            scalar_tag(&xs.iter().copied()),
            scalar_tag(&ys.iter().copied()),
        ];
        assert!(all_same_floating_point(DType::F64, &tags));
    }

    #[test]
    fn test_mixed_precision_across_iterators() {
        let xs = vec![Vec2d::new(0.0_f64, 1.0)];
        let ys = vec![Vec2d::new(2.0_f32, 3.0)];

        let tags = [
            scalar_tag(&xs.iter().copied()),
            scalar_tag(&ys.iter().copied()),
        ];
        assert!(!all_same_floating_point(DType::F64, &tags));
        assert!(!all_same_floating_point(DType::F32, &tags));
    }

    #[test]
    fn test_integral_coords_are_not_same_floating_point() {
        let grid = vec![(4_u32, 7_u32)];
        let tag = scalar_tag(&grid.iter().copied());
        assert!(!all_same_floating_point(tag, &[tag]));
    }
}
