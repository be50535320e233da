// src/morse/mod.rs  -  Table, Encoder, Decoder, Spacing
pub mod table;
pub mod encoder;
pub mod decoder;
pub mod spacing;

pub use table::{MorseTable, ReferenceEntry};
pub use encoder::encode;
pub use decoder::decode;
pub use spacing::{LETTER_GAP, SPACE_TOKEN, WORD_GAP};
