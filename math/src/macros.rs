//! Shared macros for constructing interpolation points.
//!
//! These macros delegate to [`Point::new`](crate::point::Point::new), which
//! keeps test fixtures and examples short.

/// Construct a single [`Point`](crate::point::Point).
///
/// ```
/// use math::prelude::*;
///
/// let p = point!(2, 7);
/// assert_eq!(p, Point::new(2, 7));
/// ```
#[macro_export]
macro_rules! point {
    ($x:expr, $y:expr) => {
        $crate::point::Point::new($x, $y)
    };
}

/// Create a [`Vec`] of [`Point`](crate::point::Point)s from `(x, y)` pairs.
///
/// ```
/// use math::prelude::*;
///
/// let pts = points![(1, 4), (2, 7), (3, 12)];
/// assert_eq!(pts.len(), 3);
/// assert_eq!(pts[2], point!(3, 12));
/// ```
#[macro_export]
macro_rules! points {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        vec![$($crate::point::Point::new($x, $y)),*]
    };
}
