//! Fixed-point Machin expansion over arbitrary-precision integers
//!
//! Every quantity is an integer scaled by `10^working_digits`, so the series
//! runs without any floating point. A term that truncates to zero is below
//! the threshold `10^-working_digits` and ends the summation.

use num_bigint::BigInt;
use num_traits::Zero;

use crate::io::configuration::{SERIES_GUARD_DIGITS, SERIES_TERMS_PER_DIGIT, SERIES_TERMS_SLACK};
use crate::io::error::{PatternError, Result, invalid_parameter, require_positive};

/// Fixed-point representation of 1.0 with `digits` decimal places
///
/// # Errors
///
/// Returns `InvalidParameter` if `digits` does not fit in a `u32` exponent
pub fn unity(digits: usize) -> Result<BigInt> {
    let exponent = u32::try_from(digits)
        .map_err(|err| invalid_parameter("precision", &digits, &err))?;
    Ok(BigInt::from(10u32).pow(exponent))
}

/// Evaluate `arctan(1/denominator)` as an alternating power series
///
/// `x - x^3/3 + x^5/5 - ...` with `x = 1/denominator`, in the fixed point
/// defined by `scale`.
///
/// # Errors
///
/// Returns `ConvergenceExhausted` if a non-zero term remains after
/// `max_terms` terms
pub fn arctan_inverse(denominator: u32, scale: &BigInt, max_terms: usize) -> Result<BigInt> {
    let square = BigInt::from(denominator) * denominator;
    let mut power = scale / denominator;
    let mut sum = power.clone();

    for k in 1..=max_terms {
        power /= &square;
        let term = &power / (2 * k + 1);
        if term.is_zero() {
            return Ok(sum);
        }
        if k % 2 == 1 {
            sum -= term;
        } else {
            sum += term;
        }
    }

    Err(PatternError::ConvergenceExhausted {
        series: "arctan",
        terms: max_terms,
    })
}

/// Compute `precision` fractional digits of `16·arctan(1/5) − 4·arctan(1/239)`
///
/// The integer part is discarded; the returned digits are the fractional
/// expansion, most significant first.
///
/// # Errors
///
/// Returns `InvalidParameter` for a zero precision and
/// `ConvergenceExhausted` if either series fails to converge
pub fn machin_digits(precision: usize) -> Result<Vec<u8>> {
    require_positive("precision", precision)?;

    let working = precision + SERIES_GUARD_DIGITS;
    let scale = unity(working)?;
    let max_terms = working * SERIES_TERMS_PER_DIGIT + SERIES_TERMS_SLACK;

    let fifth = arctan_inverse(5, &scale, max_terms)?;
    let two_thirty_ninth = arctan_inverse(239, &scale, max_terms)?;
    let constant = fifth * 16u32 - two_thirty_ninth * 4u32;

    // Drop the guard digits, then the leading integer digit
    let truncated = constant / unity(SERIES_GUARD_DIGITS)?;
    let text = truncated.to_string();
    let digits: Vec<u8> = text
        .bytes()
        .skip(1)
        .take(precision)
        .map(|byte| byte.saturating_sub(b'0'))
        .collect();

    if digits.len() == precision {
        Ok(digits)
    } else {
        Err(invalid_parameter(
            "precision",
            &precision,
            &format!("expansion produced only {} digits", digits.len()),
        ))
    }
}
