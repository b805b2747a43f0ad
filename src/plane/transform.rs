//! Coordinate transforms between math space and surface space.

use super::geometry::Point;

/// Fixed mapping from math coordinates (y up) to surface pixels (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    center_x: f64,
    center_y: f64,
    scale: f64,
}

impl ViewTransform {
    /// Centre the origin on a `width` x `height` surface.
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        Self {
            center_x: width / 2.0,
            center_y: height / 2.0,
            scale,
        }
    }

    /// Surface x of the origin.
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    /// Surface y of the origin.
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    /// Pixels per math unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a math point into surface space.
    pub fn to_surface(&self, p: Point) -> Point {
        Point::new(
            self.center_x + p.x * self.scale,
            self.center_y - p.y * self.scale,
        )
    }

    /// Map a surface point into math space.
    pub fn to_math(&self, p: Point) -> Point {
        Point::new(
            (p.x - self.center_x) / self.scale,
            (self.center_y - p.y) / self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_sits_at_surface_center() {
        let t = ViewTransform::new(600.0, 400.0, 40.0);
        assert_eq!(t.to_surface(Point::new(0.0, 0.0)), Point::new(300.0, 200.0));
        assert_eq!(t.to_surface(Point::new(1.0, 1.0)), Point::new(340.0, 160.0));
    }

    #[test]
    fn round_trip() {
        let t = ViewTransform::new(600.0, 600.0, 40.0);
        for &(x, y) in &[(0.0, 0.0), (1.25, -3.5), (-14.9, 12.1), (1e6, -1e-6)] {
            let back = t.to_math(t.to_surface(Point::new(x, y)));
            assert!((back.x - x).abs() < 1e-9 * x.abs().max(1.0));
            assert!((back.y - y).abs() < 1e-9 * y.abs().max(1.0));
        }
    }
}
