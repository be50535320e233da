// src/morse/encoder.rs  -  Text → space-delimited Morse transcription
use crate::error::MorseError;
use crate::morse::{MorseTable, LETTER_GAP, SPACE_TOKEN};

/// Encode text. Each character becomes its code plus a letter gap; a literal
/// space adds the space token so words end up a word gap apart.
///
/// Fails on the first character the table has no code for.
pub fn encode(text: &str, table: &MorseTable) -> Result<String, MorseError> {
    let mut out = String::with_capacity(text.len() * 8);
    for ch in text.chars() {
        if ch == ' ' {
            out.push_str(SPACE_TOKEN);
            continue;
        }
        let code = table.code_for(ch).ok_or(MorseError::UnknownChar(ch))?;
        out.push_str(code);
        out.push_str(LETTER_GAP);
    }
    out.truncate(out.trim_end().len());
    Ok(out)
}
