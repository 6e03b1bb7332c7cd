use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;
use std::str::FromStr;

/// Largest number of fractional digits a salary may carry.
pub const MAX_SCALE: u32 = 9;

/// Fractional digits kept by averaged salaries.
pub const AVERAGE_SCALE: u32 = 2;

/// Exact, non-negative decimal amount stored as `units / 10^scale`.
///
/// Parsed mantissas are bounded by `u64` and the scale by [`MAX_SCALE`], so
/// every salary rescaled to [`MAX_SCALE`] fits comfortably in a `u128` and a
/// roster-sized sum of them cannot overflow in practice.
#[derive(Debug, Clone, Copy, Default)]
pub struct Salary {
    units: u128,
    scale: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SalaryParseError {
    #[error("salary is empty")]
    Empty,
    #[error("salary must not be negative: '{0}'")]
    Negative(String),
    #[error("salary '{0}' is not a decimal number")]
    Malformed(String),
    #[error("salary '{value}' has more than {max} fractional digits")]
    TooPrecise { value: String, max: u32 },
    #[error("salary '{0}' is too large")]
    OutOfRange(String),
}

impl Salary {
    pub const ZERO: Salary = Salary { units: 0, scale: 0 };

    /// Builds a salary from a mantissa and a count of fractional digits.
    pub fn new(units: u64, scale: u32) -> Result<Self, SalaryParseError> {
        if scale > MAX_SCALE {
            return Err(SalaryParseError::TooPrecise {
                value: format!("{units}e-{scale}"),
                max: MAX_SCALE,
            });
        }
        Ok(Self {
            units: u128::from(units),
            scale,
        })
    }

    pub fn from_cents(cents: u64) -> Self {
        Self {
            units: u128::from(cents),
            scale: 2,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.units == 0
    }

    /// Divides by `count`, rounding half-to-even to `digits` fractional digits.
    ///
    /// A zero divisor yields zero at the requested scale.
    pub fn div_rounded(self, count: u128, digits: u32) -> Salary {
        if count == 0 {
            return Salary {
                units: 0,
                scale: digits,
            };
        }

        // units / 10^scale / count, expressed in units of 10^-digits
        let (numerator, denominator) = if digits >= self.scale {
            (
                self.units.saturating_mul(pow10(digits - self.scale)),
                count,
            )
        } else {
            (self.units, count.saturating_mul(pow10(self.scale - digits)))
        };

        Salary {
            units: round_half_even(numerator, denominator),
            scale: digits,
        }
    }

    /// Compares `self / count` with `other / other_count` without rounding.
    ///
    /// The mean of zero amounts is zero.
    pub fn cmp_mean(self, count: u128, other: Salary, other_count: u128) -> Ordering {
        match (count, other_count) {
            (0, 0) => Ordering::Equal,
            (0, _) => Salary::ZERO.cmp(&other),
            (_, 0) => self.cmp(&Salary::ZERO),
            _ => {
                let scale = self.scale.max(other.scale);
                self.rescaled_units(scale)
                    .saturating_mul(other_count)
                    .cmp(&other.rescaled_units(scale).saturating_mul(count))
            }
        }
    }

    fn rescaled_units(&self, scale: u32) -> u128 {
        debug_assert!(scale >= self.scale);
        self.units.saturating_mul(pow10(scale - self.scale))
    }

    fn normalized(&self) -> (u128, u32) {
        let mut units = self.units;
        let mut scale = self.scale;
        while scale > 0 && units % 10 == 0 {
            units /= 10;
            scale -= 1;
        }
        if units == 0 {
            scale = 0;
        }
        (units, scale)
    }
}

fn pow10(exp: u32) -> u128 {
    10u128.saturating_pow(exp)
}

fn round_half_even(numerator: u128, denominator: u128) -> u128 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    let twice = remainder.saturating_mul(2);
    match twice.cmp(&denominator) {
        Ordering::Greater => quotient + 1,
        Ordering::Equal if quotient % 2 == 1 => quotient + 1,
        _ => quotient,
    }
}

/// Exact sum; the result keeps the larger of the two scales.
impl Add for Salary {
    type Output = Salary;

    fn add(self, other: Salary) -> Salary {
        let scale = self.scale.max(other.scale);
        Salary {
            units: self
                .rescaled_units(scale)
                .saturating_add(other.rescaled_units(scale)),
            scale,
        }
    }
}

impl PartialEq for Salary {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Salary {}

impl PartialOrd for Salary {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Salary {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.rescaled_units(scale)
            .cmp(&other.rescaled_units(scale))
    }
}

impl Hash for Salary {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl std::iter::Sum for Salary {
    fn sum<I: Iterator<Item = Salary>>(iter: I) -> Self {
        iter.fold(Salary::ZERO, |total, salary| total + salary)
    }
}

impl<'a> std::iter::Sum<&'a Salary> for Salary {
    fn sum<I: Iterator<Item = &'a Salary>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = if self.scale == 0 {
            self.units.to_string()
        } else {
            let divisor = pow10(self.scale);
            format!(
                "{}.{:0width$}",
                self.units / divisor,
                self.units % divisor,
                width = self.scale as usize
            )
        };
        f.pad(&rendered)
    }
}

impl FromStr for Salary {
    type Err = SalaryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(SalaryParseError::Empty);
        }
        if trimmed.starts_with('-') {
            return Err(SalaryParseError::Negative(trimmed.to_string()));
        }

        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(SalaryParseError::Malformed(trimmed.to_string()));
        }

        let scale = fraction.len() as u32;
        if scale > MAX_SCALE {
            return Err(SalaryParseError::TooPrecise {
                value: trimmed.to_string(),
                max: MAX_SCALE,
            });
        }

        let digits = format!("{whole}{fraction}");
        let units = digits
            .parse::<u64>()
            .map_err(|_| SalaryParseError::OutOfRange(trimmed.to_string()))?;

        Ok(Self {
            units: u128::from(units),
            scale,
        })
    }
}

impl Serialize for Salary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Salary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
