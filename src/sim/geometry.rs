//! Axis-aligned rectangles and 2D vector helpers
//!
//! Screen coordinates: origin at the top-left, +y points down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box used for both drawing and collision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Box of the given size whose center is `center`
    pub fn from_center(center: Vec2, width: f32, height: f32) -> Self {
        Self::new(center.x - width / 2.0, center.y - height / 2.0, width, height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    /// Move the box so its bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.y = y - self.height;
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// True if the boxes overlap on both axes. Shared edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Overlap depth on each axis (negative on an axis means separation)
    pub fn overlap(&self, other: &Rect) -> Vec2 {
        Vec2::new(
            self.right().min(other.right()) - self.left().max(other.left()),
            self.bottom().min(other.bottom()) - self.top().max(other.top()),
        )
    }
}

/// Vector operations the simulation needs beyond glam's arithmetic
pub trait VecExt {
    /// Rotate counter-clockwise about the origin by `degrees`
    fn rotated_deg(self, degrees: f32) -> Self;
    fn negate_x(&mut self);
    fn negate_y(&mut self);
}

impl VecExt for Vec2 {
    #[inline]
    fn rotated_deg(self, degrees: f32) -> Self {
        Vec2::from_angle(degrees.to_radians()).rotate(self)
    }

    #[inline]
    fn negate_x(&mut self) {
        self.x = -self.x;
    }

    #[inline]
    fn negate_y(&mut self) {
        self.y = -self.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_accessors() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center(), Vec2::new(60.0, 45.0));
    }

    #[test]
    fn test_intersects_requires_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Touching edges only
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        // Overlap on one axis only
        assert!(!a.intersects(&Rect::new(5.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_overlap_depths() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(15.0, 5.0, 20.0, 20.0);
        assert_eq!(a.overlap(&b), Vec2::new(5.0, 15.0));
    }

    #[test]
    fn test_set_bottom() {
        let mut r = Rect::new(0.0, 100.0, 20.0, 20.0);
        r.set_bottom(550.0);
        assert_eq!(r.bottom(), 550.0);
        assert_eq!(r.top(), 530.0);
    }

    #[test]
    fn test_rotate_counter_clockwise() {
        let v = Vec2::X.rotated_deg(90.0);
        assert!(v.x.abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);

        let v = Vec2::X.rotated_deg(150.0);
        assert!((v.x + 0.866_025_4).abs() < 1e-5);
        assert!((v.y - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_negate_components() {
        let mut v = Vec2::new(3.0, -4.0);
        v.negate_x();
        assert_eq!(v, Vec2::new(-3.0, -4.0));
        v.negate_y();
        assert_eq!(v, Vec2::new(-3.0, 4.0));
        assert_eq!((v * 2.0).length(), 10.0);
    }
}
