use std::borrow::Cow;

use strutil_runtime::{CANONICAL_SEPARATOR, DIRECTORY_SEPARATOR};

/// Rewrite every native separator in `path` to the canonical one.
pub fn normalize_separators(path: &mut String) {
    if let Cow::Owned(rewritten) = normalized_separators(path) {
        *path = rewritten;
    }
}

/// Borrowing variant of [`normalize_separators`]; allocates only when the
/// path contains a native separator.
pub fn normalized_separators(path: &str) -> Cow<'_, str> {
    if path.contains(DIRECTORY_SEPARATOR) {
        Cow::Owned(
            path.chars()
                .map(|c| if c == DIRECTORY_SEPARATOR { CANONICAL_SEPARATOR } else { c })
                .collect(),
        )
    } else {
        Cow::Borrowed(path)
    }
}
