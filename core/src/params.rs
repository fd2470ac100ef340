use std::fmt;
use std::str::FromStr;

pub use math::radix::{MAX_BASE, MIN_BASE};

/// Smallest admissible minimum point count (`k = degree + 1`).
pub const MIN_K: i64 = 1;

/// Arithmetic used to evaluate the interpolating polynomial at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Method {
    /// Arbitrary-precision rationals. Normative.
    #[default]
    Exact,
    /// `f64` with rounding to the nearest integer.
    Float,
}

/// Every method, in the order they are listed in help output.
pub const SUPPORTED_METHODS: [Method; 2] = [Method::Exact, Method::Float];

impl Method {
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Exact => "exact",
            Method::Float => "float",
        }
    }

    /// The method used to cross-check results produced by `self`.
    #[inline]
    pub const fn counterpart(self) -> Self {
        match self {
            Method::Exact => Method::Float,
            Method::Float => Method::Exact,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = InvalidOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "exact" | "rational" => Ok(Method::Exact),
            "float" | "f64" => Ok(Method::Float),
            _ => Err(InvalidOption::new("method", value)),
        }
    }
}

impl TryFrom<&str> for Method {
    type Error = InvalidOption;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How per-case reports are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = InvalidOption;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(InvalidOption::new("output format", value)),
        }
    }
}

/// Error raised when an unknown option name is requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOption {
    pub kind: &'static str,
    pub value: String,
}

impl InvalidOption {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

impl fmt::Display for InvalidOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported {} {:?}", self.kind, self.value)
    }
}

impl std::error::Error for InvalidOption {}

/// Settings shared by every case in a batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunnerConfig {
    pub method: Method,
    /// Run the counterpart method too and warn when the results disagree.
    pub cross_check: bool,
    /// Spread cases over the rayon thread pool.
    pub parallel: bool,
}

impl RunnerConfig {
    pub const fn new(method: Method) -> Self {
        Self {
            method,
            cross_check: false,
            parallel: true,
        }
    }

    #[must_use]
    pub const fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub const fn with_cross_check(mut self, cross_check: bool) -> Self {
        self.cross_check = cross_check;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::new(Method::default())
    }
}

/// Validate the minimum point count of a test case.
pub fn validate_k(k: i64) -> bool {
    k >= MIN_K
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_exact_and_parallel() {
        let config = RunnerConfig::default();
        assert_eq!(config.method, Method::Exact);
        assert!(!config.cross_check);
        assert!(config.parallel);
    }

    #[test]
    fn builder_setters_override_fields() {
        let config = RunnerConfig::default()
            .with_method(Method::Float)
            .with_cross_check(true)
            .with_parallel(false);
        assert_eq!(
            config,
            RunnerConfig {
                method: Method::Float,
                cross_check: true,
                parallel: false,
            }
        );
    }

    #[test]
    fn methods_round_trip_through_strings() {
        for method in SUPPORTED_METHODS {
            assert_eq!(method.as_str().parse::<Method>(), Ok(method));
            assert_eq!(Method::try_from(method.to_string().as_str()), Ok(method));
        }
    }

    #[test]
    fn method_aliases_are_case_insensitive() {
        assert_eq!("RATIONAL".parse::<Method>(), Ok(Method::Exact));
        assert_eq!("F64".parse::<Method>(), Ok(Method::Float));
    }

    #[test]
    fn unknown_method_is_rejected() {
        let err = "decimal".parse::<Method>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported method \"decimal\"");
    }

    #[test]
    fn counterpart_is_an_involution() {
        for method in SUPPORTED_METHODS {
            assert_ne!(method.counterpart(), method);
            assert_eq!(method.counterpart().counterpart(), method);
        }
    }

    #[test]
    fn output_format_parsing() {
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("Text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("yaml".parse::<OutputFormat>().is_err());
        assert_eq!(OutputFormat::default().to_string(), "text");
    }

    #[test]
    fn validate_k_accepts_positive_counts() {
        assert!(validate_k(1));
        assert!(validate_k(3));
        assert!(validate_k(i64::MAX));
    }

    #[test]
    fn validate_k_rejects_zero_and_negative_counts() {
        assert!(!validate_k(0));
        assert!(!validate_k(-1));
        assert!(!validate_k(i64::MIN));
    }

    #[test]
    fn radix_bounds_are_reexported() {
        assert_eq!(MIN_BASE, 2);
        assert_eq!(MAX_BASE, 36);
    }
}
