pub use crate::{point, points};
pub use crate::{
    error::{DecodeError, InterpolationError, MathError},
    lagrange::{
        estimate_at_zero, interpolate_at_zero, ExactLagrange, FloatLagrange,
    },
    point::Point,
    radix::{decode, Radix, MAX_BASE, MIN_BASE},
    traits::{ConstantTerm, PointSource},
};
