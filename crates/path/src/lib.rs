mod components;
mod normalize;
mod separators;

pub use components::{
    directory_name, file_name, file_name_without_extension, path_without_extension,
};
pub use normalize::{normalize_path, remove_relative_parts};
pub use separators::{normalize_separators, normalized_separators};

/// Log target for diagnostics emitted by this crate.
pub const LOG_TARGET: &str = "strutil::path";
