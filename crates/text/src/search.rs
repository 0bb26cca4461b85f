use std::cmp::Ordering;

/// Whether a search or comparison honors letter case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchCase {
    #[default]
    CaseSensitive,
    IgnoreCase,
}

/// Simple upper-case mapping of a single character.
///
/// Characters whose upper-case form expands to several characters
/// (e.g. 'ß' → "SS") are left as they are.
#[inline]
fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Upper-case mapping of one UTF-16 code unit.
///
/// Surrogate halves, and BMP characters that would map outside the BMP,
/// are returned unchanged.
#[inline]
fn fold_unit(unit: u16) -> u16 {
    char::from_u32(u32::from(unit))
        .map(fold)
        .and_then(|c| u16::try_from(u32::from(c)).ok())
        .unwrap_or(unit)
}

/// Case-insensitive substring search optimized for ASCII input.
fn find_ignore_case_ascii(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }

    let first = needle[0].to_ascii_uppercase();
    let rest = &needle[1..];

    'outer: for start in 0..=(haystack.len() - needle.len()) {
        if haystack[start].to_ascii_uppercase() != first {
            continue;
        }
        for (i, &nb) in rest.iter().enumerate() {
            if !haystack[start + 1 + i].eq_ignore_ascii_case(&nb) {
                continue 'outer;
            }
        }
        return Some(start);
    }
    None
}

/// True when `text` starts with `prefix`, comparing upper-cased characters.
fn starts_with_folded(text: &str, prefix: &str) -> bool {
    let mut text = text.chars();
    prefix
        .chars()
        .all(|p| text.next().is_some_and(|t| fold(t) == fold(p)))
}

/// Byte offset of the first case-insensitive occurrence of `needle` in
/// `haystack`.
///
/// An empty needle never matches.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let mut needle_chars = needle.chars();
    let initial = needle_chars.next()?;

    if haystack.is_ascii() && needle.is_ascii() {
        return find_ignore_case_ascii(haystack.as_bytes(), needle.as_bytes());
    }

    // Only run the full comparison where the first letter already matches.
    let initial = fold(initial);
    let rest = needle_chars.as_str();

    haystack.char_indices().find_map(|(idx, c)| {
        let after = idx + c.len_utf8();
        (fold(c) == initial && starts_with_folded(&haystack[after..], rest)).then_some(idx)
    })
}

/// Code-unit index of the first case-insensitive occurrence of `needle` in
/// `haystack`, both given as UTF-16.
///
/// An empty needle never matches.
pub fn find_ignore_case_utf16(haystack: &[u16], needle: &[u16]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    let folded: Vec<u16> = needle.iter().copied().map(fold_unit).collect();
    haystack.windows(needle.len()).position(|window| {
        window
            .iter()
            .zip(&folded)
            .all(|(&h, &n)| fold_unit(h) == n)
    })
}

/// Substring search honoring `case`.
#[inline]
pub fn find(haystack: &str, needle: &str, case: SearchCase) -> Option<usize> {
    match case {
        SearchCase::CaseSensitive => haystack.find(needle),
        SearchCase::IgnoreCase => find_ignore_case(haystack, needle),
    }
}

/// Prefix test honoring `case`.
#[inline]
pub fn starts_with(text: &str, prefix: &str, case: SearchCase) -> bool {
    match case {
        SearchCase::CaseSensitive => text.starts_with(prefix),
        SearchCase::IgnoreCase => starts_with_folded(text, prefix),
    }
}

/// Lexicographic comparison of upper-cased characters.
pub fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold).cmp(b.chars().map(fold))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
