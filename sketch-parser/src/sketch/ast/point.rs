//! Logical coordinates

use serde::Serialize;
use std::fmt;

/// A point on the logical Cartesian plane. Coordinates are integers; the
/// renderer owns the logical-to-screen transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A resolved reference: concrete coordinates plus the identifier the lookup
/// went through. The origin is display-only - it is not an ownership
/// relation, and inline circle centers have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PointRef {
    pub at: Point,
    pub origin: Option<String>,
}

impl PointRef {
    pub fn named(at: Point, origin: impl Into<String>) -> Self {
        PointRef {
            at,
            origin: Some(origin.into()),
        }
    }

    pub fn inline(at: Point) -> Self {
        PointRef { at, origin: None }
    }
}

impl fmt::Display for PointRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            Some(origin) => write!(f, "{} {}", origin, self.at),
            None => write!(f, "{}", self.at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Point::new(3, -4).to_string(), "(3, -4)");
        assert_eq!(
            PointRef::named(Point::new(1, 2), "A").to_string(),
            "A (1, 2)"
        );
        assert_eq!(PointRef::inline(Point::new(1, 2)).to_string(), "(1, 2)");
    }
}
