//! Geometric primitives for layout analysis.
//!
//! Recognition engines report word boxes in whole page pixels, so the
//! rectangle here is integer based. Derived quantities that can fall between
//! pixels (centers, averages) are returned as `f32`.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in page-pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of top-left corner
    pub x: i32,
    /// Y coordinate of top-left corner
    pub y: i32,
    /// Width of rectangle
    pub width: i32,
    /// Height of rectangle
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle from position and dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_layout::geometry::Rect;
    ///
    /// let rect = Rect::new(0, 0, 100, 50);
    /// assert_eq!(rect.width, 100);
    /// assert_eq!(rect.height, 50);
    /// ```
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from its top-left and bottom-right corners.
    pub fn from_points(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    /// Get the left edge x-coordinate.
    pub fn left(&self) -> i32 {
        self.x
    }

    /// Get the right edge x-coordinate.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Get the top edge y-coordinate.
    pub fn top(&self) -> i32 {
        self.y
    }

    /// Get the bottom edge y-coordinate.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Horizontal center of the rectangle.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_layout::geometry::Rect;
    ///
    /// let rect = Rect::new(10, 0, 25, 10);
    /// assert_eq!(rect.center_x(), 22.5);
    /// ```
    pub fn center_x(&self) -> f32 {
        self.x as f32 + self.width as f32 / 2.0
    }

    /// Check whether a vertical line at `x` crosses this rectangle, edges included.
    pub fn spans_x(&self, x: i32) -> bool {
        self.left() <= x && x <= self.right()
    }

    /// Compute the union of this rectangle with another.
    ///
    /// Returns the smallest rectangle that contains both rectangles.
    ///
    /// # Examples
    ///
    /// ```
    /// use ocr_layout::geometry::Rect;
    ///
    /// let r1 = Rect::new(0, 0, 50, 50);
    /// let r2 = Rect::new(25, 25, 50, 50);
    /// let union = r1.union(&r2);
    ///
    /// assert_eq!(union.x, 0);
    /// assert_eq!(union.y, 0);
    /// assert_eq!(union.right(), 75);
    /// assert_eq!(union.bottom(), 75);
    /// ```
    pub fn union(&self, other: &Rect) -> Rect {
        let x0 = self.left().min(other.left());
        let y0 = self.top().min(other.top());
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());
        Rect::from_points(x0, y0, x1, y1)
    }

    /// Whether the rectangle encloses a positive area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_points() {
        let r = Rect::from_points(10, 20, 110, 70);
        assert_eq!(r.x, 10);
        assert_eq!(r.y, 20);
        assert_eq!(r.width, 100);
        assert_eq!(r.height, 50);
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.left(), 10);
        assert_eq!(r.right(), 110);
        assert_eq!(r.top(), 20);
        assert_eq!(r.bottom(), 70);
    }

    #[test]
    fn test_rect_spans_x_includes_edges() {
        let r = Rect::new(10, 0, 20, 5);
        assert!(r.spans_x(10));
        assert!(r.spans_x(30));
        assert!(!r.spans_x(9));
        assert!(!r.spans_x(31));
    }

    #[test]
    fn test_rect_union() {
        let r1 = Rect::new(0, 10, 50, 20);
        let r2 = Rect::new(60, 5, 40, 20);
        let union = r1.union(&r2);

        assert_eq!(union.left(), 0);
        assert_eq!(union.top(), 5);
        assert_eq!(union.right(), 100);
        assert_eq!(union.bottom(), 30);
    }

    #[test]
    fn test_rect_is_empty() {
        assert!(Rect::new(0, 0, 0, 10).is_empty());
        assert!(Rect::new(0, 0, 10, -1).is_empty());
        assert!(!Rect::new(0, 0, 1, 1).is_empty());
    }
}
