// src/suite.rs  -  Built-in example checks (table size, encode, decode)
use crate::morse::{decode, encode, MorseTable};

/// Encode cases: (plain text, expected Morse)
pub const ENCODE_CASES: &[(&str, &str)] = &[
    ("SOS", "...   ---   ..."),
    ("CS-150-A", "-.-.   ...   -....-   .----   .....   -----   -....-   .-"),
    (
        "'Hello, World'",
        ".----.   ....   .   .-..   .-..   ---   --..--       .--   ---   .-.   .-..   -..   .----.",
    ),
    ("Thank you.", "-   ....   .-   -.   -.-       -.--   ---   ..-   .-.-.-"),
];

/// Decode cases: (Morse, expected plain text in the table's canonical case)
pub const DECODE_CASES: &[(&str, &str)] = &[
    ("...   ---   ...", "sos"),
    ("-.-.   ...   -....-   .----   .....   -----   -....-   .-", "cs-150-a"),
    (
        ".----.   ....   .   .-..   .-..   ---   --..--       .--   ---   .-.   .-..   -..   .----.",
        "'hello, world'",
    ),
    ("-   ....   .-   -.   -.-       -.--   ---   ..-   .-.-.-", "thank you."),
];

/// Expected map sizes for the loaded table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expectations {
    pub chars: usize,
    pub codes: usize,
}

impl Default for Expectations {
    /// Sizes of the bundled `morse.txt`: 54 rows, 26 of them lowercase letters
    fn default() -> Self { Self { chars: 80, codes: 54 } }
}

#[derive(Debug, Default)]
pub struct SuiteReport {
    /// Human-readable lines for passing checks
    pub passed:   Vec<String>,
    /// One diagnostic per failed check
    pub failures: Vec<String>,
}

impl SuiteReport {
    pub fn is_ok(&self) -> bool { self.failures.is_empty() }
}

/// Run every check. A mismatch is recorded and the run carries on.
pub fn run(table: &MorseTable, expect: &Expectations) -> SuiteReport {
    let mut report = SuiteReport::default();

    check_size(&mut report, "characters", expect.chars, table.char_count());
    check_size(&mut report, "codes", expect.codes, table.code_count());

    for &(phrase, expected) in ENCODE_CASES {
        match encode(phrase, table) {
            Ok(result) if result == expected => {
                report.passed.push(format!("'{phrase}' encoded using Morse code is '{result}'"));
            }
            Ok(result) => report.failures.push(format!(
                "{phrase} is not encoded correctly.\nExpected: {expected}\nReturned: {result}"
            )),
            Err(e) => report.failures.push(format!("{phrase} could not be encoded: {e}")),
        }
    }

    for &(code, expected) in DECODE_CASES {
        let result = decode(code, table);
        if result == expected {
            report.passed.push(format!("Morse code '{code}' encodes '{result}'"));
        } else {
            report.failures.push(format!(
                "{code} is not decoded correctly.\nExpected: {expected}\nReturned: {result}"
            ));
        }
    }

    log::info!("[suite] {} passed, {} failed", report.passed.len(), report.failures.len());
    report
}

fn check_size(report: &mut SuiteReport, what: &str, expected: usize, got: usize) {
    if expected == got {
        report.passed.push(format!("{got} {what} mapped"));
    } else {
        report.failures.push(format!(
            "There are {expected} {what} in the file, but {got} mappings in your dictionary"
        ));
    }
}
