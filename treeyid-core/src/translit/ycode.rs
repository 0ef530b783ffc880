//! ASCII phonetic code for Yiddish script
//!
//! Every Hebrew letter and point maps to one ASCII character so script forms
//! can be searched and diffed with plain tools. Precomposed presentation forms
//! are decomposed first; anything without a code passes through unchanged.

use unicode_normalization::UnicodeNormalization;

fn code(c: char) -> char {
    match c {
        '\u{05D0}' => 'A',
        '\u{05D1}' => 'b',
        '\u{05D2}' => 'g',
        '\u{05D3}' => 'd',
        '\u{05D4}' => 'h',
        '\u{05D5}' => 'u',
        '\u{05D6}' => 'z',
        '\u{05D7}' => 'x',
        '\u{05D8}' => 't',
        '\u{05D9}' => 'y',
        '\u{05DA}' => 'K',
        '\u{05DB}' => 'k',
        '\u{05DC}' => 'l',
        '\u{05DD}' => 'M',
        '\u{05DE}' => 'm',
        '\u{05DF}' => 'N',
        '\u{05E0}' => 'n',
        '\u{05E1}' => 's',
        '\u{05E2}' => 'e',
        '\u{05E3}' => 'F',
        '\u{05E4}' => 'p',
        '\u{05E5}' => 'C',
        '\u{05E6}' => 'c',
        '\u{05E7}' => 'q',
        '\u{05E8}' => 'r',
        '\u{05E9}' => 'S',
        '\u{05EA}' => 'T',
        '\u{05F0}' => 'V',
        '\u{05F1}' => 'O',
        '\u{05F2}' => 'Y',
        // points
        '\u{05B7}' => 'a',
        '\u{05B8}' => 'o',
        '\u{05B4}' => 'i',
        '\u{05BC}' => '.',
        '\u{05BF}' => '-',
        '\u{05C1}' => '>',
        '\u{05C2}' => '<',
        '\u{05BE}' => '_',
        other => other,
    }
}

/// Phonetic code of a script form
pub fn ycode(script: &str) -> String {
    script.nfd().map(code).collect()
}
