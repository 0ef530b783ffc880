//! YIVO romanization to Yiddish script
//!
//! Letters are read greedily, longest multigraph first. Each word is spelled
//! on its own so word-initial alef and final letter forms can be placed. An
//! apostrophe is part of the word for final forms (`כ'האָב`) but starts a new
//! word for the initial alef (`ס'איז`).

use super::{Detransliterate, Mode};
use crate::error::Result;
use crate::tables::{rows, LEXICON_FILE};
use std::collections::HashMap;

/// Romanized units, longest first within each starting letter
const UNITS: &[(&str, Unit)] = &[
    ("dzh", Unit::Consonant("\u{05D3}\u{05D6}\u{05E9}")),
    ("tsh", Unit::Consonant("\u{05D8}\u{05E9}")),
    ("zh", Unit::Consonant("\u{05D6}\u{05E9}")),
    ("sh", Unit::Consonant("\u{05E9}")),
    ("kh", Unit::Final("\u{05DB}", "\u{05DA}")),
    ("ts", Unit::Final("\u{05E6}", "\u{05E5}")),
    ("ay", Unit::Diphthong("\u{05F2}\u{05B7}")),
    ("ey", Unit::Diphthong("\u{05F2}")),
    ("oy", Unit::Diphthong("\u{05F1}")),
    ("a", Unit::Vowel('a')),
    ("e", Unit::Vowel('e')),
    ("i", Unit::Vowel('i')),
    ("o", Unit::Vowel('o')),
    ("u", Unit::Vowel('u')),
    ("b", Unit::Consonant("\u{05D1}")),
    ("d", Unit::Consonant("\u{05D3}")),
    ("f", Unit::Final("\u{05E4}\u{05BF}", "\u{05E3}")),
    ("g", Unit::Consonant("\u{05D2}")),
    ("h", Unit::Consonant("\u{05D4}")),
    ("k", Unit::Consonant("\u{05E7}")),
    ("l", Unit::Consonant("\u{05DC}")),
    ("m", Unit::Final("\u{05DE}", "\u{05DD}")),
    ("n", Unit::Final("\u{05E0}", "\u{05DF}")),
    ("p", Unit::Consonant("\u{05E4}\u{05BC}")),
    ("r", Unit::Consonant("\u{05E8}")),
    ("s", Unit::Consonant("\u{05E1}")),
    ("t", Unit::Consonant("\u{05D8}")),
    ("v", Unit::Consonant("\u{05F0}")),
    ("y", Unit::Consonant("\u{05D9}")),
    ("z", Unit::Consonant("\u{05D6}")),
];

const ALEF: char = '\u{05D0}';
const PATAH: char = '\u{05B7}';
const KAMATS: char = '\u{05B8}';
const AYIN: char = '\u{05E2}';
const YOD: char = '\u{05D9}';
const HIRIQ: char = '\u{05B4}';
const VOV: char = '\u{05D5}';
const DAGESH: char = '\u{05BC}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unit {
    Vowel(char),
    Diphthong(&'static str),
    Consonant(&'static str),
    /// Medial and final spellings
    Final(&'static str, &'static str),
}

/// Romanized units of one word, with the source text of each
fn units(word: &str) -> Vec<(&'static str, Unit)> {
    let mut out = Vec::with_capacity(word.len());
    let mut rest = word;
    while !rest.is_empty() {
        match UNITS.iter().find(|(rom, _)| rest.starts_with(rom)) {
            Some(&(rom, unit)) => {
                out.push((rom, unit));
                rest = &rest[rom.len()..];
            }
            // words only hold letters listed in UNITS
            None => break,
        }
    }
    out
}

/// Letters the detransliterator knows how to spell
fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() && !matches!(c, 'c' | 'j' | 'q' | 'w' | 'x')
}

/// The base romanization-to-script procedure
#[derive(Debug, Clone, Default)]
pub struct Yivo {
    lexicon: HashMap<String, String>,
}

impl Yivo {
    /// Procedure with the embedded loshn-koydesh lexicon
    pub fn embedded() -> Result<Self> {
        Self::with_lexicon(include_str!("../../data/loshn-koydesh.tsv"))
    }

    /// Procedure with a lexicon of romanized word, script spelling rows
    pub fn with_lexicon(content: &str) -> Result<Self> {
        let lexicon = rows(LEXICON_FILE, content, &[2])?
            .into_iter()
            .map(|row| (row[0].to_string(), row[1].to_string()))
            .collect();
        Ok(Self { lexicon })
    }

    fn spell(word: &str, word_final: bool, out: &mut String) {
        let units = units(word);
        for (index, &(_, unit)) in units.iter().enumerate() {
            let prev = index.checked_sub(1).map(|i| units[i]);
            let next = units.get(index + 1).copied();
            let initial = index == 0;

            match unit {
                Unit::Vowel('a') => {
                    out.push(ALEF);
                    out.push(PATAH);
                }
                Unit::Vowel('o') => {
                    out.push(ALEF);
                    out.push(KAMATS);
                }
                Unit::Vowel('e') => out.push(AYIN),
                Unit::Vowel('i') => {
                    if initial {
                        out.push(ALEF);
                        out.push(YOD);
                    } else {
                        out.push(YOD);
                        if prev.is_some_and(|(r, u)| r == "y" || is_vocalic(u)) {
                            out.push(HIRIQ);
                        }
                    }
                }
                Unit::Vowel(_) => {
                    if initial {
                        out.push(ALEF);
                        out.push(VOV);
                    } else {
                        out.push(VOV);
                        let beside_vov = |unit: Option<(&str, Unit)>| {
                            unit.is_some_and(|(r, _)| r == "v" || r == "u")
                        };
                        if beside_vov(prev) || beside_vov(next) {
                            out.push(DAGESH);
                        }
                    }
                }
                Unit::Diphthong(script) => {
                    if initial {
                        out.push(ALEF);
                    }
                    out.push_str(script);
                }
                Unit::Consonant(script) => out.push_str(script),
                Unit::Final(medial, last) => {
                    if word_final && next.is_none() {
                        out.push_str(last);
                    } else {
                        out.push_str(medial);
                    }
                }
            }
        }
    }
}

fn is_vocalic(unit: Unit) -> bool {
    matches!(unit, Unit::Vowel(_) | Unit::Diphthong(_))
}

impl Detransliterate for Yivo {
    fn detransliterate(&self, rom: &str, mode: Mode) -> String {
        let mut out = String::with_capacity(rom.len() * 3);
        let mut rest = rom;
        while let Some(first) = rest.chars().next() {
            if !is_word_char(first) {
                out.push(first);
                rest = &rest[first.len_utf8()..];
                continue;
            }
            let end = rest.find(|c: char| !is_word_char(c)).unwrap_or(rest.len());
            let (word, tail) = rest.split_at(end);
            rest = tail;

            if mode == Mode::LoshnKoydesh {
                if let Some(spelling) = self.lexicon.get(word) {
                    out.push_str(spelling);
                    continue;
                }
            }
            let word_final = !tail.starts_with('\'');
            Self::spell(word, word_final, &mut out);
        }
        out
    }
}
