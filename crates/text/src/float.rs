use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseFloatError {
    #[error("text does not start with a number")]
    NoDigits,

    #[error("number parses to zero but is not written as a plain zero")]
    AmbiguousZero,
}

/// Literal spellings accepted for a zero result.
const ZERO_LITERALS: &[&str] = &["0", "0.0", "0,0"];

/// Longest prefix of `s` that reads as a decimal float: optional sign,
/// digits with an optional fraction, and an optional exponent.
fn float_prefix(s: &str) -> &str {
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while b.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut i = usize::from(matches!(b.first(), Some(b'+' | b'-')));

    let int_end = digits_from(i);
    let mut digits = int_end - i;
    i = int_end;

    if b.get(i) == Some(&b'.') {
        let frac_end = digits_from(i + 1);
        digits += frac_end - (i + 1);
        i = frac_end;
    }

    if digits == 0 {
        return "";
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_end = digits_from(j);
        // A dangling exponent marker is not part of the number.
        if exp_end > j {
            i = exp_end;
        }
    }

    &s[..i]
}

/// Parse the leading number of `text` as an `f32`.
///
/// Only decimal notation is recognized; `inf`, `nan` and hex floats are
/// not numbers here. Trailing text after the number is ignored. A result of
/// zero is only trusted when the whole input is literally `0`, `0.0` or `0,0`; any other
/// input that yields zero (including input with no number at all) is an
/// error.
pub fn parse_float(text: &str) -> Result<f32, ParseFloatError> {
    let prefix = float_prefix(text.trim_start());

    let value = if prefix.is_empty() {
        0.0
    } else {
        prefix
            .parse::<f32>()
            .map_err(|_| ParseFloatError::NoDigits)?
    };

    if value != 0.0 {
        return Ok(value);
    }

    if ZERO_LITERALS.contains(&text) {
        Ok(0.0)
    } else if prefix.is_empty() {
        Err(ParseFloatError::NoDigits)
    } else {
        Err(ParseFloatError::AmbiguousZero)
    }
}

#[cfg(test)]
#[path = "float_tests.rs"]
mod tests;
