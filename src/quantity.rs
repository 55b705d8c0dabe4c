use std::fmt;
use std::ops::{Div, Mul};

use thiserror::Error;

/// Exponents of the base physical dimensions used by this crate
/// (length, mass, time).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub length: i8,
    pub mass: i8,
    pub time: i8,
}

impl Dimension {
    pub const NONE: Dimension = Dimension {
        length: 0,
        mass: 0,
        time: 0,
    };
    pub const LENGTH: Dimension = Dimension {
        length: 1,
        mass: 0,
        time: 0,
    };
    pub const MASS: Dimension = Dimension {
        length: 0,
        mass: 1,
        time: 0,
    };
    pub const TIME: Dimension = Dimension {
        length: 0,
        mass: 0,
        time: 1,
    };
    pub const VOLUME: Dimension = Dimension {
        length: 3,
        mass: 0,
        time: 0,
    };
    pub const VELOCITY: Dimension = Dimension {
        length: 1,
        mass: 0,
        time: -1,
    };
    pub const MASS_RATE: Dimension = Dimension {
        length: 0,
        mass: 1,
        time: -1,
    };

    pub const fn times(self, other: Dimension) -> Dimension {
        Dimension {
            length: self.length + other.length,
            mass: self.mass + other.mass,
            time: self.time + other.time,
        }
    }

    pub const fn per(self, other: Dimension) -> Dimension {
        Dimension {
            length: self.length - other.length,
            mass: self.mass - other.mass,
            time: self.time - other.time,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "dimensionless");
        }
        let mut first = true;
        for (name, exponent) in [
            ("length", self.length),
            ("mass", self.mass),
            ("time", self.time),
        ] {
            if exponent == 0 {
                continue;
            }
            if !first {
                write!(f, " * ")?;
            }
            first = false;
            if exponent == 1 {
                write!(f, "[{name}]")?;
            } else {
                write!(f, "[{name}]^{exponent}")?;
            }
        }
        Ok(())
    }
}

/// A unit of measure: a scale factor into base units (meter, kilogram,
/// second) plus the dimension it measures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    pub symbol: &'static str,
    pub factor: f64,
    pub dimension: Dimension,
}

impl Unit {
    pub const fn per(self, denominator: Unit, symbol: &'static str) -> Unit {
        Unit {
            symbol,
            factor: self.factor / denominator.factor,
            dimension: self.dimension.per(denominator.dimension),
        }
    }
}

pub const METER: Unit = Unit {
    symbol: "m",
    factor: 1.0,
    dimension: Dimension::LENGTH,
};
pub const MILE: Unit = Unit {
    symbol: "mi",
    factor: 1609.344,
    dimension: Dimension::LENGTH,
};
/// US gallon.
pub const GALLON: Unit = Unit {
    symbol: "gal",
    factor: 3.785411784e-3,
    dimension: Dimension::VOLUME,
};
pub const KILOGRAM: Unit = Unit {
    symbol: "kg",
    factor: 1.0,
    dimension: Dimension::MASS,
};
pub const POUND: Unit = Unit {
    symbol: "lb",
    factor: 0.45359237,
    dimension: Dimension::MASS,
};
pub const METRIC_TON: Unit = Unit {
    symbol: "t",
    factor: 1000.0,
    dimension: Dimension::MASS,
};
pub const SECOND: Unit = Unit {
    symbol: "s",
    factor: 1.0,
    dimension: Dimension::TIME,
};
pub const HOUR: Unit = Unit {
    symbol: "h",
    factor: 3600.0,
    dimension: Dimension::TIME,
};
pub const WEEK: Unit = Unit {
    symbol: "week",
    factor: 604_800.0,
    dimension: Dimension::TIME,
};
/// One twelfth of a Julian year.
pub const MONTH: Unit = Unit {
    symbol: "month",
    factor: 2_629_800.0,
    dimension: Dimension::TIME,
};
/// Julian year (365.25 days).
pub const YEAR: Unit = Unit {
    symbol: "yr",
    factor: 31_557_600.0,
    dimension: Dimension::TIME,
};

pub const MILE_PER_HOUR: Unit = MILE.per(HOUR, "mi/h");
pub const KILOGRAM_PER_GALLON: Unit = KILOGRAM.per(GALLON, "kg/gal");
pub const POUND_PER_GALLON: Unit = POUND.per(GALLON, "lb/gal");
pub const KILOGRAM_PER_HOUR: Unit = KILOGRAM.per(HOUR, "kg/h");
pub const METRIC_TON_PER_HOUR: Unit = METRIC_TON.per(HOUR, "t/h");
pub const METRIC_TON_PER_YEAR: Unit = METRIC_TON.per(YEAR, "t/yr");
pub const GALLON_PER_YEAR: Unit = GALLON.per(YEAR, "gal/yr");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        expected: Dimension,
        found: Dimension,
    },
}

/// A scalar tagged with a physical dimension.
///
/// The value is stored in base units (meter, kilogram, second);
/// construction and extraction go through a [`Unit`]. Multiplication and
/// division combine dimensions and cannot fail; conversion, addition and
/// comparison are checked and fail on incompatible dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    base_value: f64,
    dimension: Dimension,
}

impl Quantity {
    pub const fn new(value: f64, unit: Unit) -> Self {
        Self {
            base_value: value * unit.factor,
            dimension: unit.dimension,
        }
    }

    /// A bare number with no physical dimension.
    pub const fn dimensionless(value: f64) -> Self {
        Self {
            base_value: value,
            dimension: Dimension::NONE,
        }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// The numeric value expressed in `unit`.
    pub fn get(&self, unit: Unit) -> Result<f64, QuantityError> {
        if unit.dimension != self.dimension {
            return Err(QuantityError::DimensionMismatch {
                expected: unit.dimension,
                found: self.dimension,
            });
        }
        Ok(self.base_value / unit.factor)
    }

    /// The numeric value of a dimensionless quantity.
    pub fn ratio(&self) -> Result<f64, QuantityError> {
        if !self.dimension.is_none() {
            return Err(QuantityError::DimensionMismatch {
                expected: Dimension::NONE,
                found: self.dimension,
            });
        }
        Ok(self.base_value)
    }

    /// Checks that this quantity measures `expected`, returning it unchanged.
    pub fn expect_dimension(self, expected: Dimension) -> Result<Self, QuantityError> {
        if self.dimension != expected {
            return Err(QuantityError::DimensionMismatch {
                expected,
                found: self.dimension,
            });
        }
        Ok(self)
    }

    pub fn is_zero(&self) -> bool {
        self.base_value == 0.0
    }

    pub fn try_add(self, other: Quantity) -> Result<Quantity, QuantityError> {
        let other = other.expect_dimension(self.dimension)?;
        Ok(Quantity {
            base_value: self.base_value + other.base_value,
            dimension: self.dimension,
        })
    }

    pub fn try_cmp(self, other: Quantity) -> Result<std::cmp::Ordering, QuantityError> {
        let other = other.expect_dimension(self.dimension)?;
        Ok(self.base_value.total_cmp(&other.base_value))
    }
}

impl Mul for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        Quantity {
            base_value: self.base_value * rhs.base_value,
            dimension: self.dimension.times(rhs.dimension),
        }
    }
}

impl Div for Quantity {
    type Output = Quantity;
    fn div(self, rhs: Quantity) -> Quantity {
        Quantity {
            base_value: self.base_value / rhs.base_value,
            dimension: self.dimension.per(rhs.dimension),
        }
    }
}

impl Mul<f64> for Quantity {
    type Output = Quantity;
    fn mul(self, rhs: f64) -> Quantity {
        Quantity {
            base_value: self.base_value * rhs,
            dimension: self.dimension,
        }
    }
}

impl Mul<Quantity> for f64 {
    type Output = Quantity;
    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;
    fn div(self, rhs: f64) -> Quantity {
        Quantity {
            base_value: self.base_value / rhs,
            dimension: self.dimension,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn relative_error(x: f64, y: f64) -> f64 {
        ((x - y) / y).abs()
    }

    #[test]
    fn conversion_round_trips() {
        let fuel = Quantity::new(47_975.0, GALLON);
        assert!(relative_error(fuel.get(GALLON).unwrap(), 47_975.0) < 1e-9);

        let rate = Quantity::new(13.5, METRIC_TON_PER_HOUR);
        let kg = rate.get(KILOGRAM_PER_HOUR).unwrap();
        assert!(relative_error(kg, 13_500.0) < 1e-9);
        let back = Quantity::new(kg, KILOGRAM_PER_HOUR)
            .get(METRIC_TON_PER_HOUR)
            .unwrap();
        assert!(relative_error(back, 13.5) < 1e-9);
    }

    #[test]
    fn mass_units_agree() {
        let lb = Quantity::new(18_250.0, POUND);
        let kg = lb.get(KILOGRAM).unwrap();
        assert!(relative_error(kg, 18_250.0 * 0.45359237) < 1e-9);
    }

    #[test]
    fn conversion_checks_dimension() {
        let range = Quantity::new(8_800.0, MILE);
        assert_eq!(
            range.get(GALLON),
            Err(QuantityError::DimensionMismatch {
                expected: Dimension::VOLUME,
                found: Dimension::LENGTH,
            })
        );
    }

    #[test]
    fn multiplication_and_division_combine_dimensions() {
        let speed = Quantity::new(509.0, MILE_PER_HOUR);
        let duration = Quantity::new(2.0, HOUR);
        assert_eq!((speed * duration).dimension(), Dimension::LENGTH);

        let distance = Quantity::new(100.0, MILE);
        assert_eq!((distance / duration).dimension(), Dimension::VELOCITY);
        assert_eq!((distance / distance).dimension(), Dimension::NONE);
    }

    #[test]
    fn addition_requires_same_dimension() {
        let a = Quantity::new(1.0, MILE);
        let b = Quantity::new(1.0, HOUR);
        assert!(a.try_add(b).is_err());

        let sum = a.try_add(Quantity::new(1609.344, METER)).unwrap();
        assert!(relative_error(sum.get(MILE).unwrap(), 2.0) < 1e-9);
    }

    #[test]
    fn comparison_requires_same_dimension() {
        let a = Quantity::new(1.0, METRIC_TON);
        let b = Quantity::new(1.0, KILOGRAM);
        assert_eq!(a.try_cmp(b).unwrap(), std::cmp::Ordering::Greater);
        assert!(a.try_cmp(Quantity::new(1.0, HOUR)).is_err());
    }

    #[test]
    fn ratio_requires_dimensionless() {
        let distance = Quantity::new(10.0, MILE);
        assert!((distance / distance).ratio().is_ok());
        assert!(distance.ratio().is_err());
    }

    #[test]
    fn dimension_display() {
        assert_eq!(Dimension::NONE.to_string(), "dimensionless");
        assert_eq!(Dimension::VOLUME.to_string(), "[length]^3");
        assert_eq!(Dimension::MASS_RATE.to_string(), "[mass] * [time]^-1");
    }
}
