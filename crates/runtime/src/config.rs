pub const PROGRAM_NAME: &str = "strutil";
pub const PROGRAM_LOG_LEVEL: &str = "STRUTIL_LOG_LEVEL";

/// Native directory separator of the source platform paths.
pub const DIRECTORY_SEPARATOR: char = '\\';
/// Alternate directory separator, also the canonical one after normalization.
pub const ALT_DIRECTORY_SEPARATOR: char = '/';
/// Separates a volume (drive) name from the rest of the path, e.g. `C:`.
pub const VOLUME_SEPARATOR: char = ':';

/// Separator every normalized path uses.
pub const CANONICAL_SEPARATOR: char = ALT_DIRECTORY_SEPARATOR;

/// Characters that end a file name when scanning a path backwards.
pub const FILE_NAME_TERMINATORS: &[char] =
    &[DIRECTORY_SEPARATOR, ALT_DIRECTORY_SEPARATOR, VOLUME_SEPARATOR];

/// Characters that split a directory from its entry.
pub const DIRECTORY_SEPARATORS: &[char] = &[DIRECTORY_SEPARATOR, ALT_DIRECTORY_SEPARATOR];
