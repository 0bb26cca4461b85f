use super::*;
use quickcheck::QuickCheck;

fn utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

#[test]
fn find_ignore_case_cases() {
    let cases: &[(&str, &str, Option<usize>)] = &[
        ("Hello World", "world", Some(6)),
        ("Hello World", "WORLD", Some(6)),
        ("Hello World", "hello", Some(0)),
        ("Hello World", "o w", Some(4)),
        ("Hello World", "worlds", None),
        ("Hello", "", None),
        ("", "", None),
        ("Grüße", "", None),
        ("", "a", None),
        ("abc", "abcd", None),
        ("aaab", "AAB", Some(1)),
        // Non-ASCII haystacks go through the char path; offsets stay in bytes.
        ("Grüße aus Köln", "KÖLN", Some(12)),
        ("ÉCOLE", "école", Some(0)),
        ("straße", "STRASSE", None),
        ("straße", "ß", Some(4)),
    ];

    for (haystack, needle, expected) in cases {
        assert_eq!(
            find_ignore_case(haystack, needle),
            *expected,
            "find_ignore_case({:?}, {:?})",
            haystack,
            needle
        );
    }
}

#[test]
fn find_honors_search_case() {
    assert_eq!(find("Cargo.toml", "cargo", SearchCase::CaseSensitive), None);
    assert_eq!(find("Cargo.toml", "cargo", SearchCase::IgnoreCase), Some(0));
    assert_eq!(find("Cargo.toml", "toml", SearchCase::CaseSensitive), Some(6));
    assert_eq!(SearchCase::default(), SearchCase::CaseSensitive);
}

#[test]
fn empty_needle_never_matches() {
    assert_eq!(find_ignore_case("abc", ""), None);
    assert_eq!(find_ignore_case_utf16(&utf16("abc"), &[]), None);
    assert_eq!(find("abc", "", SearchCase::IgnoreCase), None);
}

#[test]
fn starts_with_honors_search_case() {
    assert!(starts_with("\\\\?\\UNC\\server", "\\\\?\\unc\\", SearchCase::IgnoreCase));
    assert!(!starts_with("\\\\?\\UNC\\server", "\\\\?\\unc\\", SearchCase::CaseSensitive));
    assert!(starts_with("anything", "", SearchCase::IgnoreCase));
    assert!(!starts_with("ab", "abc", SearchCase::IgnoreCase));
}

#[test]
fn compare_ignore_case_orders_folded_text() {
    assert_eq!(compare_ignore_case("abc", "ABC"), Ordering::Equal);
    assert_eq!(compare_ignore_case("abc", "ABD"), Ordering::Less);
    assert_eq!(compare_ignore_case("b", "A"), Ordering::Greater);
    assert_eq!(compare_ignore_case("ab", "ABC"), Ordering::Less);
}

#[test]
fn find_ignore_case_utf16_cases() {
    let cases: &[(&str, &str, Option<usize>)] = &[
        ("Hello World", "WORLD", Some(6)),
        ("Grüße", "GRÜ", Some(0)),
        ("a\u{1F600}b", "B", Some(3)),
        ("a\u{1F600}b", "\u{1F600}", Some(1)),
        ("abc", "", None),
        ("", "", None),
        ("ab", "abc", None),
    ];

    for (haystack, needle, expected) in cases {
        assert_eq!(
            find_ignore_case_utf16(&utf16(haystack), &utf16(needle)),
            *expected,
            "find_ignore_case_utf16({:?}, {:?})",
            haystack,
            needle
        );
    }
}

#[test]
fn ascii_fast_path_agrees_with_lowercase_contains_quickcheck() {
    fn prop(haystack: String, needle: String) -> bool {
        let h: String = haystack.chars().filter(char::is_ascii).collect();
        let n: String = needle.chars().filter(char::is_ascii).take(3).collect();

        let expected = if n.is_empty() {
            None
        } else {
            h.to_ascii_lowercase().find(&n.to_ascii_lowercase())
        };
        find_ignore_case(&h, &n) == expected
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(String, String) -> bool);
}
