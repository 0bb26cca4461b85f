use super::*;

#[test]
fn float_prefix_cases() {
    let cases: &[(&str, &str)] = &[
        ("1.5", "1.5"),
        ("-2.25xyz", "-2.25"),
        ("+3", "+3"),
        (".5", ".5"),
        ("5.", "5."),
        ("1e3", "1e3"),
        ("1E-3 rest", "1E-3"),
        ("1e", "1"),
        ("1e+", "1"),
        ("-", ""),
        (".", ""),
        ("abc", ""),
        ("", ""),
    ];

    for (input, expected) in cases {
        assert_eq!(float_prefix(input), *expected, "float_prefix({input:?})");
    }
}

#[test]
fn parses_non_zero_values() {
    let cases: &[(&str, f32)] = &[
        ("1.5", 1.5),
        ("  -0.25", -0.25),
        ("42px", 42.0),
        ("1e2", 100.0),
        (".5", 0.5),
    ];

    for (input, expected) in cases {
        assert_eq!(parse_float(input), Ok(*expected), "parse_float({input:?})");
    }
}

#[test]
fn accepts_literal_zeros_only() {
    for input in ["0", "0.0", "0,0"] {
        assert_eq!(parse_float(input), Ok(0.0), "parse_float({input:?})");
    }

    for input in ["0.00", "-0", "00", " 0", "0e5"] {
        assert_eq!(
            parse_float(input),
            Err(ParseFloatError::AmbiguousZero),
            "parse_float({input:?})"
        );
    }
}

#[test]
fn rejects_text_without_number() {
    for input in ["", "abc", "-", ".", "e5"] {
        assert_eq!(
            parse_float(input),
            Err(ParseFloatError::NoDigits),
            "parse_float({input:?})"
        );
    }
}

#[test]
fn only_decimal_notation_is_recognized() {
    assert_eq!(float_prefix("inf"), "");
    assert_eq!(float_prefix("0x10"), "0");

    assert_eq!(parse_float("inf"), Err(ParseFloatError::NoDigits));
    assert_eq!(parse_float("nan"), Err(ParseFloatError::NoDigits));
    assert_eq!(parse_float("0x10"), Err(ParseFloatError::AmbiguousZero));
    assert_eq!(parse_float("1x10"), Ok(1.0));
}
