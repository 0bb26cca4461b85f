use strutil_runtime::{DIRECTORY_SEPARATORS, FILE_NAME_TERMINATORS};

/// Everything before the last directory separator, or `""` when there is
/// none.
pub fn directory_name(path: &str) -> &str {
    path.rfind(DIRECTORY_SEPARATORS)
        .map_or("", |idx| &path[..idx])
}

/// Everything after the last directory or volume separator; the whole path
/// when it has neither.
pub fn file_name(path: &str) -> &str {
    // Separators are single-byte ASCII, so `idx + 1` is a char boundary.
    path.rfind(FILE_NAME_TERMINATORS)
        .map_or(path, |idx| &path[idx + 1..])
}

/// [`file_name`] with its last extension removed.
pub fn file_name_without_extension(path: &str) -> &str {
    let name = file_name(path);
    name.rfind('.').map_or(name, |idx| &name[..idx])
}

/// `path` cut at its last `.`.
///
/// The dot is searched across the whole path, directories included, so
/// `dir.d/file` yields `dir`.
pub fn path_without_extension(path: &str) -> &str {
    path.rfind('.').map_or(path, |idx| &path[..idx])
}

#[cfg(test)]
#[path = "components_tests.rs"]
mod tests;
