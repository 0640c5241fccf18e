//! Unit-suffix and phasor value decoding.

use crate::error::{NodalError, Result};
use crate::scalar::Polar;

/// SI multiplier for a trailing unit character.
fn si_multiplier(suffix: char) -> Option<f64> {
    match suffix {
        'p' => Some(1e-12),
        'n' => Some(1e-9),
        'u' => Some(1e-6),
        'm' => Some(1e-3),
        'k' => Some(1e3),
        'M' => Some(1e6),
        'G' => Some(1e9),
        _ => None,
    }
}

/// Digits with at most one decimal point and at least one digit.
fn is_plain_decimal(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
        && text.chars().all(|c| c.is_ascii_digit() || c == '.')
        && text.matches('.').count() <= 1
}

/// Decode a value with an optional SI suffix, e.g. `10k` -> 10000.
///
/// Without a suffix the text is parsed as a plain number (sign and exponent
/// allowed). With a suffix, the remaining prefix must be digits with at most
/// one decimal point.
pub fn decode_value(text: &str) -> Result<f64> {
    let text = text.trim();
    let last = text
        .chars()
        .last()
        .ok_or_else(|| NodalError::bad_multiplier(text))?;

    if last.is_ascii_digit() || last == '.' {
        return text
            .parse::<f64>()
            .map_err(|_| NodalError::bad_multiplier(text));
    }

    let multiplier = si_multiplier(last).ok_or_else(|| NodalError::bad_multiplier(text))?;
    let body = &text[..text.len() - last.len_utf8()];
    if !is_plain_decimal(body) {
        return Err(NodalError::bad_multiplier(text));
    }

    body.parse::<f64>()
        .map(|v| v * multiplier)
        .map_err(|_| NodalError::bad_multiplier(text))
}

/// Decode a phasor written as `magnitude` or `magnitude,phase`.
///
/// The magnitude may carry a unit suffix. The phase is in degrees.
pub fn decode_phasor(text: &str) -> Result<Polar> {
    let parts: Vec<&str> = text.trim().split(',').collect();

    match parts.as_slice() {
        [mag] => Ok(Polar::from(decode_value(mag)?)),
        [mag, phase] => {
            if mag.trim().is_empty() || phase.trim().is_empty() {
                return Err(NodalError::bad_phasor(text));
            }
            Ok(Polar::from_degrees(decode_value(mag)?, decode_value(phase)?))
        }
        _ => Err(NodalError::bad_phasor(text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_decode_with_suffix() {
        assert_eq!(decode_value("10k").unwrap(), 10_000.0);
        assert_eq!(decode_value("1u").unwrap(), 1e-6);
        assert_relative_eq!(decode_value("4.7n").unwrap(), 4.7e-9, max_relative = 1e-12);
        assert_relative_eq!(decode_value("2.2M").unwrap(), 2.2e6, max_relative = 1e-12);
        assert_eq!(decode_value("3G").unwrap(), 3e9);
        assert_eq!(decode_value("100p").unwrap(), 100.0 * 1e-12);
        assert_eq!(decode_value("1m").unwrap(), 1e-3);
    }

    #[test]
    fn test_decode_plain() {
        assert_eq!(decode_value("5").unwrap(), 5.0);
        assert_eq!(decode_value("0.25").unwrap(), 0.25);
        assert_eq!(decode_value("-3").unwrap(), -3.0);
        assert_eq!(decode_value("1e-9").unwrap(), 1e-9);
    }

    #[test]
    fn test_decode_rejects_bad_suffix_or_body() {
        for bad in ["5x", "", "k", "1.2.3k", "-5k", "1e3k", "abc", "1.2.3"] {
            assert!(
                matches!(decode_value(bad), Err(NodalError::BadMultiplier { .. })),
                "expected BadMultiplier for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_decode_phasor() {
        let p = decode_phasor("2").unwrap();
        assert_eq!(p.magnitude(), 2.0);
        assert_eq!(p.argument(), 0.0);

        let p = decode_phasor("10m,90").unwrap();
        assert_abs_diff_eq!(p.magnitude(), 0.01, epsilon = 1e-15);
        assert_abs_diff_eq!(p.argument(), FRAC_PI_2, epsilon = 1e-12);

        let p = decode_phasor("1,-45").unwrap();
        assert_abs_diff_eq!(p.argument(), -FRAC_PI_2 / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_decode_phasor_errors() {
        assert!(matches!(decode_phasor("1,2,3"), Err(NodalError::BadPhasor { .. })));
        assert!(matches!(decode_phasor(",45"), Err(NodalError::BadPhasor { .. })));
        assert!(matches!(decode_phasor("1,"), Err(NodalError::BadPhasor { .. })));
        assert!(matches!(decode_phasor("1q,45"), Err(NodalError::BadMultiplier { .. })));
    }
}
