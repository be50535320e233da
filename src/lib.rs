// src/lib.rs  -  morse-table library
//! Bidirectional Morse lookup built from a tab-separated reference table.
//!
//! - [`morse::MorseTable`] parses the table once and is then read-only.
//! - [`morse::encode`] turns text into a space-delimited Morse transcription.
//! - [`morse::decode`] turns a transcription back into text.
//! - [`suite`] runs the built-in example checks against a loaded table.
pub mod error;
pub mod morse;
pub mod suite;

pub use error::MorseError;
pub use morse::{decode, encode, MorseTable};
