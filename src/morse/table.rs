// src/morse/table.rs  -  Reference table → char/code lookup maps
use crate::error::MorseError;
use std::collections::HashMap;
use std::path::Path;

/// Label in the first column of an optional header row
const HEADER_LABEL: &str = "Character";

/// One data row of the reference table, code already normalized to ASCII.
/// `character` is usually a single char but may hold a prosign like `SOS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    pub character: String,
    pub code:      String,
}

/// Both lookup directions, built once and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct MorseTable {
    char_to_morse: HashMap<String, String>,
    morse_to_char: HashMap<String, String>,
    entries:       Vec<ReferenceEntry>,
}

impl MorseTable {
    /// Read and parse a UTF-8 reference table from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MorseError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| MorseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::parse(&raw);
        log::info!(
            "[table] loaded {:?}: {} rows, {} chars, {} codes",
            path, table.entries.len(), table.char_count(), table.code_count()
        );
        Ok(table)
    }

    /// Parse table text. Malformed lines are skipped, never reported as errors.
    pub fn parse(src: &str) -> Self {
        let mut table = Self::default();
        for (lineno, line) in src.lines().enumerate() {
            match parse_line(line) {
                Some(entry) => table.insert(entry),
                None => log::debug!("[table] line {} skipped: {:?}", lineno + 1, line),
            }
        }
        table.add_case_aliases();
        table
    }

    fn insert(&mut self, entry: ReferenceEntry) {
        self.char_to_morse.insert(entry.character.clone(), entry.code.clone());
        if let Some(prev) = self.morse_to_char.insert(entry.code.clone(), entry.character.clone()) {
            if prev != entry.character {
                log::warn!("[table] code {:?}: {:?} replaced by {:?}", entry.code, prev, entry.character);
            }
        }
        self.entries.push(entry);
    }

    /// Lowercase rows also answer for their uppercase form when encoding.
    /// Row order decides: an alias replaces an explicit uppercase row above
    /// its lowercase row, and loses to one below it.
    fn add_case_aliases(&mut self) {
        let mut written_at: HashMap<&str, usize> = HashMap::new();
        for (row, entry) in self.entries.iter().enumerate() {
            written_at.insert(&entry.character, row);
        }
        for (row, entry) in self.entries.iter().enumerate() {
            if !is_lowercase(&entry.character) { continue; }
            let upper = entry.character.to_uppercase();
            if written_at.get(upper.as_str()).map_or(true, |&explicit| explicit < row) {
                self.char_to_morse.insert(upper, entry.code.clone());
            }
        }
    }

    pub fn code_for(&self, c: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.code_for_str(c.encode_utf8(&mut buf))
    }

    /// Lookup by table key, for multi-char rows such as prosigns
    pub fn code_for_str(&self, key: &str) -> Option<&str> {
        self.char_to_morse.get(key).map(String::as_str)
    }

    pub fn char_for(&self, code: &str) -> Option<&str> {
        self.morse_to_char.get(code).map(String::as_str)
    }

    /// Size of the character → code map, uppercase aliases included
    pub fn char_count(&self) -> usize { self.char_to_morse.len() }
    /// Size of the code → character map
    pub fn code_count(&self) -> usize { self.morse_to_char.len() }
    /// Accepted rows in file order
    pub fn entries(&self) -> &[ReferenceEntry] { &self.entries }
}

/// At least one lowercase letter and no uppercase one
fn is_lowercase(s: &str) -> bool {
    s.chars().any(char::is_lowercase) && !s.chars().any(char::is_uppercase)
}

fn parse_line(line: &str) -> Option<ReferenceEntry> {
    let mut fields = line.trim_end().split('\t');
    let (ch, code) = match (fields.next(), fields.next(), fields.next()) {
        (Some(ch), Some(code), None) if !ch.is_empty() => (ch, code),
        _ => return None,
    };
    if ch == HEADER_LABEL { return None; }
    Some(ReferenceEntry { character: ch.to_string(), code: normalize_code(code) })
}

/// Typographic glyphs → ASCII: `·` `•` `∙` become `.`, `−` `–` become `-`
pub fn normalize_code(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '·' | '•' | '∙' => '.',
            '−' | '–'       => '-',
            other           => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL: &str = "Character\tCode\na\t·−\nb\t−···\nS\t...\n";

    #[test]
    fn header_row_is_skipped() {
        let t = MorseTable::parse(SMALL);
        assert_eq!(t.entries().len(), 3);
        assert_eq!(t.code_for('C'), None);
        assert_eq!(t.char_for("Code"), None);
    }

    #[test]
    fn unicode_glyphs_are_normalized() {
        let t = MorseTable::parse(SMALL);
        assert_eq!(t.code_for('a'), Some(".-"));
        assert_eq!(t.code_for('b'), Some("-..."));
        assert_eq!(normalize_code("·•∙−–.-"), "...--.-");
    }

    #[test]
    fn lowercase_rows_get_uppercase_alias() {
        let t = MorseTable::parse(SMALL);
        assert_eq!(t.code_for('A'), Some(".-"));
        assert_eq!(t.code_for('B'), Some("-..."));
        // 'S' is already uppercase: no lowercase alias is made
        assert_eq!(t.code_for('s'), None);
        assert_eq!(t.char_count(), 5);
        assert_eq!(t.code_count(), 3);
        // Decoding keeps the canonical (table) case
        assert_eq!(t.char_for(".-"), Some("a"));
    }

    #[test]
    fn uppercase_row_after_lowercase_wins() {
        let t = MorseTable::parse("a\t.-\nA\t-.-.-\n");
        assert_eq!(t.code_for('A'), Some("-.-.-"));
        assert_eq!(t.code_for('a'), Some(".-"));
    }

    #[test]
    fn alias_from_later_lowercase_row_wins() {
        let t = MorseTable::parse("A\t-.-.-\na\t.-\n");
        assert_eq!(t.code_for('A'), Some(".-"));
        assert_eq!(t.code_for('a'), Some(".-"));
        assert_eq!(t.char_count(), 2);
        assert_eq!(t.code_count(), 2);
    }

    #[test]
    fn alias_order_with_repeated_rows() {
        let t = MorseTable::parse("a\t.-\nA\t-.-.-\na\t.--\n");
        assert_eq!(t.code_for('A'), Some(".--"));
        assert_eq!(t.code_for('a'), Some(".--"));
    }

    #[test]
    fn multi_char_rows_are_kept() {
        let t = MorseTable::parse("s\t...\nSOS\t...---...\nch\t----\n");
        assert_eq!(t.entries().len(), 3);
        assert_eq!(t.code_count(), 3);
        assert_eq!(t.char_for("...---..."), Some("SOS"));
        assert_eq!(t.code_for_str("SOS"), Some("...---..."));
        // lowercase multi-char rows get their alias too
        assert_eq!(t.code_for_str("CH"), Some("----"));
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let src = "\n\
                   no tab here\n\
                   x\t-..-\textra\n\
                   \t.-\n\
                   e\t.\n";
        let t = MorseTable::parse(src);
        assert_eq!(t.entries(), &[ReferenceEntry { character: "e".into(), code: ".".into() }]);
        assert_eq!(t.code_count(), 1);
    }

    #[test]
    fn trailing_whitespace_and_crlf_are_trimmed() {
        let t = MorseTable::parse("k\t-.-  \r\nm\t--\r\n");
        assert_eq!(t.code_for('k'), Some("-.-"));
        assert_eq!(t.code_for('m'), Some("--"));
    }

    #[test]
    fn duplicate_code_last_row_wins() {
        let t = MorseTable::parse("x\t-.-\ny\t-.-\n");
        assert_eq!(t.char_for("-.-"), Some("y"));
        assert_eq!(t.code_count(), 1);
        assert_eq!(t.code_for('x'), Some("-.-"));
    }

    #[test]
    fn duplicate_char_last_row_wins() {
        let t = MorseTable::parse("q\t--.-\nq\t--.--\n");
        assert_eq!(t.code_for('q'), Some("--.--"));
        assert_eq!(t.code_for('Q'), Some("--.--"));
    }

    #[test]
    fn from_path_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "{SMALL}").unwrap();
        let t = MorseTable::from_path(f.path()).unwrap();
        assert_eq!(t.code_count(), 3);
    }

    #[test]
    fn from_path_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        match MorseTable::from_path(&missing) {
            Err(MorseError::Io { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
