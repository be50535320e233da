// src/error.rs  -  Library error type
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a reference table or encoding text.
///
/// Decoding has no variant here: unknown codes are dropped, never reported.
#[derive(Debug, Error)]
pub enum MorseError {
    /// The reference table could not be opened or read.
    #[error("Reading Morse table {path:?}: {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The text to encode contains a character the table has no code for.
    #[error("No Morse code for character {0:?}")]
    UnknownChar(char),
}
