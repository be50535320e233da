// src/morse/spacing.rs  -  Separator widths shared by encoder and decoder

/// Between two characters of the same word (3 units)
pub const LETTER_GAP:  &str = "   ";
/// Emitted by the encoder for a literal space (4 units)
pub const SPACE_TOKEN: &str = "    ";
/// Between two words: letter gap + space token (7 units)
pub const WORD_GAP:    &str = "       ";
