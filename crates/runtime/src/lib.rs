mod config;
pub mod logging;

pub use config::{
    ALT_DIRECTORY_SEPARATOR, CANONICAL_SEPARATOR, DIRECTORY_SEPARATOR, DIRECTORY_SEPARATORS,
    FILE_NAME_TERMINATORS, PROGRAM_LOG_LEVEL, PROGRAM_NAME, VOLUME_SEPARATOR,
};

pub use logging::init;
