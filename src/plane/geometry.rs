//! Elementary coordinate geometry for the line y = kx + b.

use std::f64::consts::FRAC_PI_6;

/// A 2-D point, in either math space or surface space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// Create a point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Evaluate y = kx + b.
pub fn line_y(k: f64, b: f64, x: f64) -> f64 {
    k * x + b
}

/// Foot of the perpendicular from `p` onto y = kx + b.
///
/// A horizontal line (k = 0) keeps the pointer's x.
pub fn nearest_point_on_line(k: f64, b: f64, p: Point) -> Point {
    if k == 0.0 {
        return Point::new(p.x, b);
    }
    let x = (p.x + k * p.y - k * b) / (k * k + 1.0);
    Point::new(x, line_y(k, b, x))
}

/// Run of the slope triangle.
pub const SLOPE_RUN: f64 = 2.0;

/// Math x where the slope triangle starts.
pub const SLOPE_START_X: f64 = 2.0;

/// Vertices of the rise-over-run construction, in math space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlopeTriangle {
    /// Point on the line at the start of the run.
    pub start: Point,
    /// Right-angle vertex: end of the run at the start height.
    pub corner: Point,
    /// Point on the line at the end of the run.
    pub end: Point,
}

impl SlopeTriangle {
    /// Build the triangle for a slope, or `None` for a horizontal line.
    pub fn new(k: f64, b: f64) -> Option<Self> {
        if k == 0.0 {
            return None;
        }
        let start = Point::new(SLOPE_START_X, line_y(k, b, SLOPE_START_X));
        let end_x = SLOPE_START_X + SLOPE_RUN;
        let end = Point::new(end_x, line_y(k, b, end_x));
        Some(Self {
            start,
            corner: Point::new(end.x, start.y),
            end,
        })
    }
}

/// Two barb endpoints of an arrow head at `to`, pointing away from `from`.
///
/// Barbs sit at +-30 degrees from the shaft.
pub fn arrow_barbs(from: Point, to: Point, head_length: f64) -> [Point; 2] {
    let angle = (to.y - from.y).atan2(to.x - from.x);
    [angle - FRAC_PI_6, angle + FRAC_PI_6].map(|a| {
        Point::new(
            to.x - head_length * a.cos(),
            to.y - head_length * a.sin(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn nearest_point_is_perpendicular_foot() {
        let slopes = [-7.5, -2.0, -1.0, -0.25, 0.5, 1.0, 3.0, 10.0];
        let intercepts = [-4.0, 0.0, 2.5];
        let probes = [
            Point::new(0.0, 0.0),
            Point::new(3.2, -1.7),
            Point::new(-6.0, 8.0),
            Point::new(1.0, 5.0),
        ];
        for &k in &slopes {
            for &b in &intercepts {
                for &p in &probes {
                    let n = nearest_point_on_line(k, b, p);
                    assert!((n.y - line_y(k, b, n.x)).abs() < EPS, "off line for k={k} b={b}");
                    let dot = (p.x - n.x) * 1.0 + (p.y - n.y) * k;
                    assert!(dot.abs() < 1e-8, "not perpendicular for k={k} b={b} p={p:?}");
                }
            }
        }
    }

    #[test]
    fn horizontal_line_keeps_pointer_x() {
        for &b in &[-3.0, 0.0, 4.5] {
            for &x in &[-9.0, 0.0, 2.75] {
                let n = nearest_point_on_line(0.0, b, Point::new(x, 7.0));
                assert_eq!(n, Point::new(x, b));
            }
        }
    }

    #[test]
    fn point_on_line_projects_to_itself() {
        let n = nearest_point_on_line(2.0, 3.0, Point::new(1.0, 5.0));
        assert!((n.x - 1.0).abs() < EPS);
        assert!((n.y - 5.0).abs() < EPS);
    }

    #[test]
    fn slope_triangle_vertices() {
        assert!(SlopeTriangle::new(0.0, 3.0).is_none());

        let tri = SlopeTriangle::new(-2.0, 1.0).unwrap();
        assert_eq!(tri.start, Point::new(2.0, -3.0));
        assert_eq!(tri.end, Point::new(4.0, -7.0));
        assert_eq!(tri.corner, Point::new(4.0, -3.0));
        assert_eq!(tri.end.y - tri.corner.y, -4.0);
    }

    #[test]
    fn arrow_barbs_trail_the_tip() {
        // Shaft pointing straight down in surface space (y grows downward).
        let [left, right] = arrow_barbs(Point::new(0.0, 0.0), Point::new(0.0, 50.0), 10.0);
        assert!(left.y < 50.0 && right.y < 50.0);
        assert!((left.y - right.y).abs() < EPS);
        assert!((left.x + right.x).abs() < EPS);
        assert!((Point::new(0.0, 50.0).distance(left) - 10.0).abs() < EPS);
    }
}
