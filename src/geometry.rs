//! Geometry primitives for the scene model
//!
//! Points, sizes, and rectangles are plain value types: copying produces an
//! independent value and none of them hold interior mutability.

use serde::{Deserialize, Serialize};

/// A coordinate pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        let horizontal = self.x - other.x;
        let vertical = self.y - other.y;
        (horizontal * horizontal + vertical * vertical).sqrt()
    }
}

/// Extents with width and height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Rectangle composed of an origin and a size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Build from raw coordinates and extents
    pub fn from_coords(x: f64, y: f64, width: f64, height: f64) -> Self {
        let origin = Point::new(x, y);
        let size = Size::new(width, height);
        Self::new(origin, size)
    }

    /// Build a rect of the given size centered on a point
    pub fn from_center(center: Point, size: Size) -> Self {
        let origin = Point::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
        );
        Self::new(origin, size)
    }

    pub fn left(&self) -> f64 {
        self.origin.x
    }

    pub fn right(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> f64 {
        self.origin.y
    }

    pub fn top(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Center point, derived on each access
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    /// Same size, repositioned so that `center` is the new center
    pub fn with_center(&self, center: Point) -> Self {
        Self::from_center(center, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_tracks_size() {
        let rect = Rect::from_coords(0.0, 0.0, 20.0, 15.0);
        let center = rect.center();
        assert_eq!(center.x, 10.0);
        assert_eq!(center.y, 7.5);
    }

    #[test]
    fn test_with_center_moves_origin() {
        let rect = Rect::from_coords(0.0, 0.0, 20.0, 15.0);
        let moved = rect.with_center(Point::new(10.0, 15.0));
        assert_eq!(moved.origin.x, 0.0);
        assert_eq!(moved.origin.y, 7.5);
        assert_eq!(moved.center(), Point::new(10.0, 15.0));
        // Source rect is a value, not an alias
        assert_eq!(rect.origin, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_from_center_delegates() {
        let a = Rect::from_center(Point::new(10.0, 10.0), Size::new(4.0, 6.0));
        let b = Rect::from_coords(8.0, 7.0, 4.0, 6.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_edges() {
        let rect = Rect::from_coords(2.0, 3.0, 10.0, 20.0);
        assert_eq!(rect.left(), 2.0);
        assert_eq!(rect.right(), 12.0);
        assert_eq!(rect.bottom(), 3.0);
        assert_eq!(rect.top(), 23.0);
    }

    #[test]
    fn test_distance() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(origin.distance_to(Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_copy_is_independent() {
        let mut p1 = Point::new(1.0, 2.0);
        let p2 = p1;
        p1.x = 4.0;
        assert_eq!(p2.x, 1.0);
    }
}
