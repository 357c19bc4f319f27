use crate::point::Point;

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// Start point.
    pub p1: Point,
    /// End point.
    pub p2: Point,
}

impl Line {
    /// Creates a line from `p1` to `p2`.
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }

    /// Intersection of the infinite lines through both segments.
    ///
    /// Returns `None` when the lines are parallel (including coincident).
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        let (x1, y1, x2, y2) = (self.p1.x, self.p1.y, self.p2.x, self.p2.y);
        let (x3, y3, x4, y4) = (other.p1.x, other.p1.y, other.p2.x, other.p2.y);

        let (x12, x34, y12, y34) = (x1 - x2, x3 - x4, y1 - y2, y3 - y4);
        let den = x12 * y34 - y12 * x34;
        if den == 0.0 {
            return None;
        }

        let xy12 = x1 * y2 - y1 * x2;
        let xy34 = x3 * y4 - y3 * x4;
        Some(Point {
            x: (xy12 * x34 - x12 * xy34) / den,
            y: (xy12 * y34 - y12 * xy34) / den,
        })
    }
}
