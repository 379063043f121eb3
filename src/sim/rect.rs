//! Axis-aligned rectangle geometry
//!
//! Everything in the level is an unrotated rectangle in level space, with
//! `position` at the top-left corner and y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(position: Vec2, width: f32, height: f32) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "rect dimensions must be non-negative ({width}x{height})"
        );
        Self {
            position,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.position.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.position.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.position.y + self.height
    }

    /// Horizontal extents overlap (touching edges count)
    #[inline]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left() <= other.right() && self.right() >= other.left()
    }

    /// Vertical extents overlap (touching edges count)
    #[inline]
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.top() <= other.bottom() && self.bottom() >= other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), 14.0, 27.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 24.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 47.0);
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(Vec2::new(0.0, 0.0), 16.0, 16.0);
        let b = Rect::new(Vec2::new(16.0, 16.0), 16.0, 16.0);
        assert!(a.overlaps_horizontally(&b));
        assert!(a.overlaps_vertically(&b));

        let c = Rect::new(Vec2::new(16.5, 0.0), 16.0, 16.0);
        assert!(!a.overlaps_horizontally(&c));
    }
}
