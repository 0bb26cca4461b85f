mod decimal;
mod float;
mod search;
mod utf8;

pub use decimal::{DIGIT_PAIRS, Decimal, DecimalBuffer, Float, float_to_string, to_decimal_string};
pub use float::{ParseFloatError, parse_float};
pub use search::{
    SearchCase, compare_ignore_case, find, find_ignore_case, find_ignore_case_utf16, starts_with,
};
pub use utf8::{
    CodePoints, DecodeError, decode_utf8_to_utf16, decode_utf8_to_utf16_into, utf16_len,
};

/// Log target for diagnostics emitted by this crate.
pub const LOG_TARGET: &str = "strutil::text";
