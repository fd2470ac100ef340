use num_bigint::BigInt;

/// Abstract source of interpolation points.
///
/// Anything that can expose an integer abscissa and an exact ordinate can be
/// fed to the interpolators in [`crate::lagrange`].
pub trait PointSource {
    /// The x-coordinate of this point.
    fn x(&self) -> i64;

    /// The exact y-coordinate of this point.
    fn y(&self) -> &BigInt;
}

impl<T: PointSource + ?Sized> PointSource for &T {
    fn x(&self) -> i64 {
        (**self).x()
    }

    fn y(&self) -> &BigInt {
        (**self).y()
    }
}

impl PointSource for (i64, BigInt) {
    fn x(&self) -> i64 {
        self.0
    }

    fn y(&self) -> &BigInt {
        &self.1
    }
}

/// A strategy for recovering `f(0)` from a slice of points.
pub trait ConstantTerm {
    type Error;

    fn constant_term<S: PointSource>(
        &self,
        points: &[S],
    ) -> Result<BigInt, Self::Error>;
}
