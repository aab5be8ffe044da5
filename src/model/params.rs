use crate::error::{Result, SimError};

/// Numeric domain a parameter value must lie in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    /// A probability in `[0, 1]`.
    Probability,
    /// A whole number `>= 1` (grid sides, node counts).
    Size,
    /// A whole number `>= 0`.
    Count,
}

impl Domain {
    /// Validate `value` for this domain. Out-of-domain values are rejected,
    /// never clamped or rounded.
    pub fn coerce(self, name: &str, value: f64) -> Result<f64> {
        let invalid = |reason| SimError::InvalidParameter {
            name: name.to_string(),
            value,
            reason,
        };
        if !value.is_finite() {
            return Err(invalid("must be finite"));
        }
        match self {
            Domain::Probability if !(0.0..=1.0).contains(&value) => {
                Err(invalid("must lie in [0, 1]"))
            }
            Domain::Size | Domain::Count if value.fract() != 0.0 => {
                Err(invalid("must be a whole number"))
            }
            // usize::MAX as f64 rounds up to 2^64, which no usize can hold.
            Domain::Size | Domain::Count if value >= usize::MAX as f64 => {
                Err(invalid("is too large"))
            }
            Domain::Size if value < 1.0 => Err(invalid("must be positive")),
            Domain::Count if value < 0.0 => Err(invalid("must not be negative")),
            _ => Ok(value),
        }
    }
}

/// A named, tunable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub domain: Domain,
}

/// Conversion between a config field and the `f64` used at the setter boundary.
pub trait ParamValue {
    fn to_f64(&self) -> f64;
    fn from_f64(value: f64) -> Self;
}

impl ParamValue for f64 {
    fn to_f64(&self) -> f64 {
        *self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

impl ParamValue for usize {
    fn to_f64(&self) -> f64 {
        *self as f64
    }

    // Callers pass values already checked to be whole and non-negative.
    fn from_f64(value: f64) -> Self {
        value as usize
    }
}

/// Named parameters of a model configuration.
pub trait Parameters {
    fn specs(&self) -> &'static [ParamSpec];

    fn get(&self, name: &str) -> Option<f64>;

    /// Store a value that has already passed [`check`](Parameters::check).
    fn assign(&mut self, name: &str, value: f64);

    /// Look up `name` and validate `value` against its domain.
    fn check(&self, name: &str, value: f64) -> Result<f64> {
        let spec = self
            .specs()
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SimError::UnknownParameter(name.to_string()))?;
        spec.domain.coerce(name, value)
    }

    /// Validate and store in one step.
    fn set(&mut self, name: &str, value: f64) -> Result<f64> {
        let value = self.check(name, value)?;
        self.assign(name, value);
        Ok(value)
    }

    /// Re-check every current value, e.g. for a config built by hand.
    fn validate(&self) -> Result<()> {
        for spec in self.specs() {
            if let Some(value) = self.get(spec.name) {
                spec.domain.coerce(spec.name, value)?;
            }
        }
        Ok(())
    }
}
