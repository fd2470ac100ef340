use std::fmt;

use num_bigint::BigInt;

use crate::traits::PointSource;

/// A decoded `(x, y)` pair with an exact ordinate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i64,
    pub y: BigInt,
}

impl Point {
    pub fn new(x: i64, y: impl Into<BigInt>) -> Self {
        Self { x, y: y.into() }
    }
}

impl PointSource for Point {
    fn x(&self) -> i64 {
        self.x
    }

    fn y(&self) -> &BigInt {
        &self.y
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_both_coordinates() {
        let point = Point::new(-3, 42);
        assert_eq!(point.to_string(), "(-3, 42)");
    }

    #[test]
    fn point_source_exposes_fields() {
        let point = Point::from((6, 39));
        assert_eq!(PointSource::x(&point), 6);
        assert_eq!(PointSource::y(&point), &BigInt::from(39));
    }
}
