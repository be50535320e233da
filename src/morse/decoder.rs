// src/morse/decoder.rs  -  Morse transcription → text (lenient)
use crate::morse::{MorseTable, LETTER_GAP, SPACE_TOKEN};

/// Decode a transcription produced with the shared letter/word gaps.
///
/// The input is read as codes separated by runs of spaces. A run after a code
/// is one letter gap plus one space token per word space, so the 7-space word
/// gap gives one space and a wider run gives one more per extra token. A run
/// before the first code holds space tokens only. Unknown codes are dropped,
/// leaving a hole in their word instead of aborting the decode.
pub fn decode(code: &str, table: &MorseTable) -> String {
    let mut text = String::new();
    let mut rest = code;
    let mut after_code = false;

    while !rest.is_empty() {
        let gap = rest.len() - rest.trim_start_matches(' ').len();
        if gap > 0 {
            let run = if after_code { gap.saturating_sub(LETTER_GAP.len()) } else { gap };
            for _ in 0..run / SPACE_TOKEN.len() {
                text.push(' ');
            }
            rest = &rest[gap..];
            continue;
        }

        let end = rest.find(' ').unwrap_or(rest.len());
        let token = &rest[..end];
        match table.char_for(token) {
            Some(c) => text.push_str(c),
            None    => log::debug!("[decoder] unknown token {:?} dropped", token),
        }
        after_code = true;
        rest = &rest[end..];
    }
    text
}
