//! Text form of wind values.
//!
//! Values are written the way the upstream converter scripts print them:
//! integers digit for digit (any size, `-0` as `0`), floats as the shortest
//! round-trip decimal, in positional notation for decimal exponents from -4
//! to 15 and in exponent notation otherwise (`1e-05`, `1.2e+16`).

use std::fmt;

use serde_json::Number;

/// Display adapter for a parsed JSON number.
#[derive(Debug, Clone, Copy)]
pub struct NumberText<'a>(pub &'a Number);

impl fmt::Display for NumberText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.0.to_string();

        if is_integer_literal(&raw) {
            return write_integer(f, &raw);
        }

        match raw.parse::<f64>() {
            Ok(value) => write_float(f, value),
            Err(_) => f.write_str(&raw),
        }
    }
}

fn is_integer_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn write_integer(f: &mut fmt::Formatter<'_>, raw: &str) -> fmt::Result {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.bytes().all(|b| b == b'0') {
        f.write_str("0")
    } else {
        f.write_str(raw)
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("nan");
    }
    if value.is_infinite() {
        return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
    }

    if value.is_sign_negative() {
        f.write_str("-")?;
    }

    // Shortest round-trip digits, e.g. "1.2e-5", "1e16", "0e0".
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.write_str(&scientific);
    };
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

    if !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return write!(f, "{mantissa}e{sign}{:02}", exponent.unsigned_abs());
    }

    let digits = mantissa.replace('.', "");
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return write!(f, "0.{zeros}{digits}");
    }

    let point = exponent as usize + 1;
    if digits.len() <= point {
        let zeros = "0".repeat(point - digits.len());
        write!(f, "{digits}{zeros}.0")
    } else {
        write!(f, "{}.{}", &digits[..point], &digits[point..])
    }
}
