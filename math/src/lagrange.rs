//! Lagrange interpolation specialised to the evaluation point `x = 0`.
//!
//! For points `(x_i, y_i)` the unique polynomial of degree `< n` through them
//! satisfies
//!
//! ```text
//! f(0) = Σ_i y_i · Π_{j≠i} (-x_j) / (x_i - x_j)
//! ```
//!
//! [`interpolate_at_zero`] evaluates this over exact rationals and is the
//! normative path. [`estimate_at_zero`] runs the same formula in `f64` and
//! rounds; it drifts once ordinates approach 2^53 and is kept as a fast
//! cross-check only.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

use crate::error::{InterpolationError, Result};
use crate::traits::{ConstantTerm, PointSource};

/// Reject empty input and repeated abscissae before any division happens.
fn ensure_distinct<S: PointSource>(
    points: &[S],
) -> Result<(), InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::NoPoints);
    }

    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if !seen.insert(point.x()) {
            return Err(InterpolationError::DuplicateX(point.x()));
        }
    }
    Ok(())
}

/// Numerator and denominator of the `i`-th basis term at zero, before
/// scaling by `y_i`.
fn basis_at_zero<S: PointSource>(points: &[S], i: usize) -> (BigInt, BigInt) {
    let xi = BigInt::from(points[i].x());
    points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold((BigInt::one(), BigInt::one()), |(num, den), (_, p)| {
            let xj = BigInt::from(p.x());
            (num * -&xj, den * (&xi - xj))
        })
}

/// Exact `f(0)` of the interpolating polynomial.
///
/// Fails with [`InterpolationError::DuplicateX`] when two points share an
/// abscissa and with [`InterpolationError::NonIntegralResult`] when the points
/// do not lie on an integer-valued polynomial at zero.
pub fn interpolate_at_zero<S: PointSource>(
    points: &[S],
) -> Result<BigInt, InterpolationError> {
    let value = rational_at_zero(points)?;
    if value.is_integer() {
        Ok(value.to_integer())
    } else {
        Err(InterpolationError::NonIntegralResult(value.to_string()))
    }
}

/// Exact `f(0)` as a reduced fraction.
pub fn rational_at_zero<S: PointSource>(
    points: &[S],
) -> Result<BigRational, InterpolationError> {
    ensure_distinct(points)?;

    let sum = (0..points.len())
        .map(|i| {
            let (num, den) = basis_at_zero(points, i);
            BigRational::new(num * points[i].y(), den)
        })
        .fold(BigRational::zero(), |acc, term| acc + term);
    Ok(sum)
}

/// `f64` estimate of `f(0)`, rounded to the nearest integer.
pub fn estimate_at_zero<S: PointSource>(
    points: &[S],
) -> Result<BigInt, InterpolationError> {
    ensure_distinct(points)?;

    let mut c = 0.0f64;
    for (i, pi) in points.iter().enumerate() {
        let mut term = pi
            .y()
            .to_f64()
            .ok_or(InterpolationError::NonFiniteEstimate)?;
        let xi = pi.x() as f64;
        for (j, pj) in points.iter().enumerate() {
            if i != j {
                let xj = pj.x() as f64;
                term *= (0.0 - xj) / (xi - xj);
            }
        }
        c += term;
    }

    if !c.is_finite() {
        return Err(InterpolationError::NonFiniteEstimate);
    }
    BigInt::from_f64(c.round()).ok_or(InterpolationError::NonFiniteEstimate)
}

/// Exact rational interpolation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExactLagrange;

/// Double-precision interpolation with a final rounding step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FloatLagrange;

impl ConstantTerm for ExactLagrange {
    type Error = InterpolationError;

    fn constant_term<S: PointSource>(
        &self,
        points: &[S],
    ) -> Result<BigInt, Self::Error> {
        interpolate_at_zero(points)
    }
}

impl ConstantTerm for FloatLagrange {
    type Error = InterpolationError;

    fn constant_term<S: PointSource>(
        &self,
        points: &[S],
    ) -> Result<BigInt, Self::Error> {
        estimate_at_zero(points)
    }
}
