//! Window geometry: [`Point`], [`Extent`], [`Rect`], [`Margins`], and
//! [`ContentScale`].
//!
//! Continuous (screen-coordinate) and discrete (pixel-coordinate)
//! variants of each shape share one generic definition over a [`Unit`]
//! scalar.

use std::{
    fmt::Debug,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign},
};

/// A marker trait for scalars usable as geometry coordinates.
pub trait Unit: Copy + Debug + Default + PartialEq + PartialOrd {
    const ZERO: Self;
    const ONE: Self;
    const MIN: Self;
    const MAX: Self;
}

impl Unit for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const MIN: Self = f64::MIN;
    const MAX: Self = f64::MAX;
}

impl Unit for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MIN: Self = i32::MIN;
    const MAX: Self = i32::MAX;
}

impl Unit for u32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const MIN: Self = u32::MIN;
    const MAX: Self = u32::MAX;
}

/// A 2D point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T: Unit> {
    pub x: T,
    pub y: T,
}

impl<T: Unit> Point<T> {
    pub const ZERO: Self = Self {
        x: T::ZERO,
        y: T::ZERO,
    };

    #[must_use]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl Point<f64> {
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl<T: Unit + Add<Output = T>> Add for Point<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Unit + Sub<Output = T>> Sub for Point<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Unit + Mul<Output = T>> Mul<T> for Point<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Unit + Div<Output = T>> Div<T> for Point<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Unit + Add<Output = T>> AddAssign for Point<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Unit + Sub<Output = T>> SubAssign for Point<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Unit + Mul<Output = T>> MulAssign<T> for Point<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Unit + Div<Output = T>> DivAssign<T> for Point<T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

impl<T: Unit> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

/// A 2D extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent<T: Unit> {
    pub width: T,
    pub height: T,
}

impl<T: Unit> Extent<T> {
    pub const ZERO: Self = Self {
        width: T::ZERO,
        height: T::ZERO,
    };

    pub const ONE: Self = Self {
        width: T::ONE,
        height: T::ONE,
    };

    #[must_use]
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl<T: Unit + Add<Output = T> + Mul<Output = T>> Extent<T> {
    #[must_use]
    pub fn area(self) -> T {
        self.width * self.height
    }

    #[must_use]
    pub fn perimeter(self) -> T {
        (self.width + self.height) * (T::ONE + T::ONE)
    }
}

impl<T: Unit + Mul<Output = T>> Extent<T> {
    #[must_use]
    pub fn scaled(self, factor: T) -> Self {
        Self::new(self.width * factor, self.height * factor)
    }
}

impl<T: Unit + Mul<Output = T>> Mul<T> for Extent<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.scaled(rhs)
    }
}

impl<T: Unit + Div<Output = T>> Div<T> for Extent<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.width / rhs, self.height / rhs)
    }
}

impl<T: Unit> From<(T, T)> for Extent<T> {
    fn from((width, height): (T, T)) -> Self {
        Self::new(width, height)
    }
}

/// An axis-aligned rectangle: an origin plus an extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect<T: Unit> {
    pub origin: Point<T>,
    pub extent: Extent<T>,
}

impl<T: Unit> Rect<T> {
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        extent: Extent::ZERO,
    };

    #[must_use]
    pub fn new(origin: impl Into<Point<T>>, extent: impl Into<Extent<T>>) -> Self {
        Self {
            origin: origin.into(),
            extent: extent.into(),
        }
    }

    #[must_use]
    pub fn x(self) -> T {
        self.origin.x
    }

    #[must_use]
    pub fn y(self) -> T {
        self.origin.y
    }

    #[must_use]
    pub fn width(self) -> T {
        self.extent.width
    }

    #[must_use]
    pub fn height(self) -> T {
        self.extent.height
    }

    #[must_use]
    pub fn min(self) -> Point<T> {
        self.origin
    }
}

impl<T: Unit + Add<Output = T>> Rect<T> {
    #[must_use]
    pub fn max(self) -> Point<T> {
        Point::new(
            self.origin.x + self.extent.width,
            self.origin.y + self.extent.height,
        )
    }

    /// Whether `point` lies within the rectangle, boundary included.
    #[must_use]
    pub fn contains(self, point: Point<T>) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.x <= max.x && point.y >= self.origin.y && point.y <= max.y
    }

    #[must_use]
    pub fn contains_rect(self, other: Self) -> bool {
        self.contains(other.min()) && self.contains(other.max())
    }

    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        let max = self.max();
        let other_max = other.max();
        self.origin.x <= other_max.x
            && max.x >= other.origin.x
            && self.origin.y <= other_max.y
            && max.y >= other.origin.y
    }
}

impl<T: Unit + Sub<Output = T>> Rect<T> {
    /// A rectangle spanning `origin` to `bound`.
    #[must_use]
    pub fn from_corners(origin: Point<T>, bound: Point<T>) -> Self {
        Self::new(origin, Extent::new(bound.x - origin.x, bound.y - origin.y))
    }
}

impl<T: Unit> From<Extent<T>> for Rect<T> {
    fn from(extent: Extent<T>) -> Self {
        Self {
            origin: Point::ZERO,
            extent,
        }
    }
}

/// Window frame margins in pixel coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Margins {
    pub const ZERO: Self = Self {
        left: 0,
        right: 0,
        top: 0,
        bottom: 0,
    };

    #[must_use]
    pub fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

/// Per-axis scale factors between screen coordinates and pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentScale {
    pub x: f64,
    pub y: f64,
}

impl ContentScale {
    pub const ONE: Self = Self { x: 1.0, y: 1.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

impl Default for ContentScale {
    fn default() -> Self {
        Self::ONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -1.0);

        assert_eq!(a + b, Point::new(4.0, 1.0));
        assert_eq!(a - b, Point::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(b / 2.0, Point::new(1.5, -0.5));

        let mut c = a;
        c += b;
        c *= 2.0;
        assert_eq!(c, (a + b) * 2.0);
    }

    #[test]
    fn discrete_point_arithmetic() {
        let a = Point::new(4, 6);
        assert_eq!(a / 2, Point::new(2, 3));
        assert_eq!(a - Point::new(1, 1), Point::new(3, 5));
    }

    #[test]
    fn distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn extent_area_and_perimeter() {
        let extent = Extent::new(4, 3);
        assert_eq!(extent.area(), 12);
        assert_eq!(extent.perimeter(), 14);
        assert_eq!(extent.scaled(2), Extent::new(8, 6));
        assert_eq!(extent * 2, Extent::new(8, 6));
    }

    #[test]
    fn rect_contains_boundary() {
        let rect = Rect::new(Point::new(0.0, 0.0), Extent::new(10.0, 5.0));

        assert!(rect.contains(Point::new(0.0, 0.0)));
        assert!(rect.contains(Point::new(10.0, 5.0)));
        assert!(rect.contains(Point::new(5.0, 2.5)));
        assert!(!rect.contains(Point::new(10.1, 2.0)));
        assert!(!rect.contains(Point::new(-0.1, 2.0)));
    }

    #[test]
    fn rect_contains_rect() {
        let outer = Rect::new(Point::new(0, 0), Extent::new(10, 10));
        let inner = Rect::new(Point::new(2, 2), Extent::new(4, 4));

        assert!(outer.contains_rect(inner));
        assert!(!inner.contains_rect(outer));
        assert!(outer.contains_rect(outer));
    }

    #[test]
    fn rect_intersection() {
        let a = Rect::new(Point::new(0, 0), Extent::new(4, 4));
        let b = Rect::new(Point::new(4, 4), Extent::new(2, 2));
        let c = Rect::new(Point::new(5, 5), Extent::new(2, 2));

        // Touching edges count as intersecting.
        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
    }

    #[test]
    fn rect_from_corners() {
        let rect = Rect::from_corners(Point::new(1.0, 2.0), Point::new(4.0, 6.0));
        assert_eq!(rect.extent, Extent::new(3.0, 4.0));
        assert_eq!(rect.max(), Point::new(4.0, 6.0));
    }

    #[test]
    fn content_scale_defaults_to_identity() {
        assert_eq!(ContentScale::default(), ContentScale::ONE);
        assert_eq!(ContentScale::ONE.scaled(1.5), ContentScale::new(1.5, 1.5));
    }
}
