use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::interpreter::value::core::Value;

/// Significant digits used for a scalar result.
pub const NUMBER_PRECISION: usize = 10;
/// Significant digits used for each vector or matrix element.
pub const ELEMENT_PRECISION: usize = 6;

/// The integer base used to display integral results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Base {
    /// Base 2, rendered as `0b...`.
    Binary,
    /// Base 8, rendered with a leading `0`.
    Octal,
    /// Base 10.
    #[default]
    Decimal,
    /// Base 16, rendered as `0x...`.
    Hexadecimal,
}

/// Error returned when parsing or converting an unsupported base.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported base '{0}': expected 2, 8, 10 or 16.")]
pub struct InvalidBase(pub String);

impl Base {
    /// Returns the numeric radix.
    #[must_use]
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }
}

impl TryFrom<u32> for Base {
    type Error = InvalidBase;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            2 => Ok(Self::Binary),
            8 => Ok(Self::Octal),
            10 => Ok(Self::Decimal),
            16 => Ok(Self::Hexadecimal),
            other => Err(InvalidBase(other.to_string())),
        }
    }
}

impl FromStr for Base {
    type Err = InvalidBase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
         .parse::<u32>()
         .map_err(|_| InvalidBase(s.to_string()))
         .and_then(Self::try_from)
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.radix())
    }
}

/// Renders a value for display.
///
/// Numbers use 10 significant digits in decimal. In any other base, an
/// integral number is shown as the bit pattern of its 64-bit truncation:
/// `0x` with uppercase digits padded to an even count, `0` followed by octal
/// digits, or `0b` followed by binary digits. Vector and matrix elements use
/// 6 significant digits and are always decimal.
///
/// # Parameters
/// - `value`: The value to render.
/// - `base`: The display base for integral numbers.
///
/// # Returns
/// The rendered text.
///
/// # Example
/// ```
/// use multicalc::{Base, Value, format_value};
///
/// assert_eq!(format_value(&Value::Number(15.0), Base::Hexadecimal), "0x0F");
/// assert_eq!(format_value(&Value::Number(8.0), Base::Octal), "010");
/// assert_eq!(format_value(&Value::Number(5.0), Base::Binary), "0b101");
/// assert_eq!(format_value(&Value::Number(0.1 + 0.2), Base::Decimal), "0.3");
/// assert_eq!(format_value(&Value::Vector(vec![1.0, 2.5]), Base::Hexadecimal), "[1, 2.5]");
/// ```
#[must_use]
pub fn format_value(value: &Value, base: Base) -> String {
    match value {
        Value::Number(n) => format_number(*n, base),
        Value::Vector(v) => format_elements(v),
        Value::Matrix(m) => format_elements(m.data()),
    }
}

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
fn format_number(n: f64, base: Base) -> String {
    let integral = n.is_finite() && n.fract() == 0.0;
    let in_range = n >= i64::MIN as f64 && n < i64::MAX as f64;
    if base == Base::Decimal || !integral || !in_range {
        return format_general(n, NUMBER_PRECISION);
    }

    let bits = n as i64 as u64;
    match base {
        Base::Hexadecimal => {
            let digits = format!("{bits:X}");
            if digits.len() % 2 == 1 { format!("0x0{digits}") } else { format!("0x{digits}") }
        },
        Base::Octal => format!("0{bits:o}"),
        Base::Binary => format!("0b{bits:b}"),
        Base::Decimal => format_general(n, NUMBER_PRECISION),
    }
}

fn format_elements(elements: &[f64]) -> String {
    let parts: Vec<String> = elements.iter()
                                     .map(|&x| format_general(x, ELEMENT_PRECISION))
                                     .collect();
    format!("[{}]", parts.join(", "))
}

/// Formats a float with `precision` significant digits, choosing between
/// fixed and scientific notation the way C's `%g` conversion does.
///
/// Scientific notation is used when the decimal exponent is below -4 or at
/// least `precision`. Trailing zeros and a trailing decimal point are removed
/// in both forms.
///
/// # Example
/// ```
/// use multicalc::interpreter::value::format::format_general;
///
/// assert_eq!(format_general(3628800.0, 10), "3628800");
/// assert_eq!(format_general(1.0 / 3.0, 6), "0.333333");
/// assert_eq!(format_general(1e20, 10), "1e+20");
/// assert_eq!(format_general(0.00001234, 6), "1.234e-05");
/// ```
#[must_use]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    let limit = i32::try_from(precision).unwrap_or(i32::MAX);
    if exponent < -4 || exponent >= limit {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.unsigned_abs())
    } else {
        let decimals = usize::try_from(limit - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Strips trailing zeros after a decimal point, and the point itself.
fn trim_fraction(text: &str) -> &str {
    if text.contains('.') { text.trim_end_matches('0').trim_end_matches('.') } else { text }
}
