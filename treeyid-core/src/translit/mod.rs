//! Romanized tokens to Yiddish script
//!
//! [`Transliterator::convert`] applies the lookup tables around a base
//! procedure:
//!
//! 1. `~` is removed from the token
//! 2. an override for (token, tag) is returned as written
//! 3. hyphens are dropped for tokens in the remove-hyphen table
//! 4. a token with exactly one hyphen is converted part by part, each part
//!    with its own tag when the tag has two `~`-joined parts
//! 5. anything else goes to the base procedure, without the loshn-koydesh
//!    lexicon for tokens in the no-lk table
//!
//! Results are NFC-normalized.

mod ycode;
mod yivo;

pub use ycode::ycode;
pub use yivo::Yivo;

use crate::error::Result;
use crate::leaf::TAG_SEPARATOR;
use crate::tables::LookupTables;
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

/// Spelling strategy for the base procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Words of Hebrew and Aramaic origin keep their traditional spelling
    LoshnKoydesh,
    /// Every word is spelled as pronounced
    Phonetic,
}

/// Base romanization-to-script procedure
pub trait Detransliterate: Send + Sync {
    fn detransliterate(&self, rom: &str, mode: Mode) -> String;
}

/// Table-driven converter from (romanized token, tag) to script
pub struct Transliterator {
    tables: Arc<LookupTables>,
    base: Box<dyn Detransliterate>,
}

impl Transliterator {
    pub fn new(tables: Arc<LookupTables>, base: Box<dyn Detransliterate>) -> Self {
        Self { tables, base }
    }

    /// Embedded tables with the YIVO procedure
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(
            Arc::new(LookupTables::embedded()?),
            Box::new(Yivo::embedded()?),
        ))
    }

    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    /// Script form of a romanized token with the given tag
    pub fn convert(&self, rom: &str, pos: &str) -> String {
        self.convert_token(rom, pos).nfc().collect()
    }

    fn convert_token(&self, rom: &str, pos: &str) -> String {
        let rom = rom.replace(TAG_SEPARATOR, "");
        if let Some(script) = self.tables.override_for(&rom, pos) {
            return script.to_string();
        }

        let rom = if self.tables.removes_hyphen(&rom, pos) {
            rom.replace('-', "")
        } else {
            rom
        };

        if rom.matches('-').count() == 1 && !self.tables.keeps_hyphen(&rom, pos) {
            if let Some((first, second)) = rom.split_once('-') {
                let tags: Vec<&str> = pos.split(TAG_SEPARATOR).collect();
                let (first_pos, second_pos) = match tags.as_slice() {
                    [a, b] => (*a, *b),
                    _ => (pos, pos),
                };
                return format!(
                    "{}-{}",
                    self.convert_token(first, first_pos),
                    self.convert_token(second, second_pos)
                );
            }
        }

        let mode = if self.tables.skips_loshn_koydesh(&rom, pos) {
            Mode::Phonetic
        } else {
            Mode::LoshnKoydesh
        };
        self.base.detransliterate(&rom, mode)
    }
}

impl std::fmt::Debug for Transliterator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transliterator")
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use unicode_normalization::is_nfc;

    fn translit() -> Transliterator {
        Transliterator::embedded().unwrap()
    }

    #[test]
    fn test_override_wins() {
        let t = translit();
        assert_eq!(t.convert("kol", "N"), "קול");
        assert_eq!(t.convert("kol", "Q"), "כּל");
        assert_eq!(t.convert("yontef", "N"), "יום־טובֿ");
    }

    #[test]
    fn test_tilde_removed_before_lookup() {
        assert_eq!(translit().convert("k~ol", "N"), "קול");
    }

    #[test]
    fn test_remove_hyphen() {
        assert_eq!(translit().convert("a-zoy", "ADV"), "אַזױ");
    }

    #[test]
    fn test_keep_hyphen_converts_whole() {
        assert_eq!(translit().convert("sholem-aleykhem", "N"), "שלום-עליכם");
    }

    #[test]
    fn test_single_hyphen_uses_tag_per_part() {
        let t = translit();
        assert_eq!(t.convert("tsu-kind", "P~N"), "צו-קינד");
        // the first part takes the N override, the second the LK spelling
        assert_eq!(t.convert("kol-kol", "N~Q"), "קול-כּל");
        // three tag parts: both halves use the whole tag
        assert_eq!(t.convert("kol-kol", "N~Q~D"), "כּל-כּל");
    }

    #[test]
    fn test_several_hyphens_not_decomposed() {
        let t = translit();
        // decomposing would apply the N override to the first part
        assert_eq!(t.convert("kol-kol-kol", "N"), "כּל-כּל-כּל");
        assert_eq!(t.convert("a--b", "N"), "אַ--ב");
    }

    #[test]
    fn test_no_lk_table() {
        let t = translit();
        assert_eq!(t.convert("shemen", "VB"), "שעמען");
        assert_eq!(t.convert("shemen", "N"), "שמן");
    }

    #[test]
    fn test_merged_tokens() {
        let t = translit();
        assert_eq!(t.convert("oyfn", "P~D"), "אױפֿן");
        assert_eq!(t.convert("hostu", "HVF~PRO"), "האָסטו");
    }

    #[test]
    fn test_output_is_nfc() {
        struct Decomposed;
        impl Detransliterate for Decomposed {
            fn detransliterate(&self, _rom: &str, _mode: Mode) -> String {
                // e + combining acute
                "e\u{0301}".to_string()
            }
        }
        let t = Transliterator::new(Arc::new(LookupTables::default()), Box::new(Decomposed));
        assert_eq!(t.convert("x", "N"), "\u{00E9}");
    }

    proptest! {
        #[test]
        fn prop_convert_is_total(
            rom in "[a-z'@~-]{0,12}",
            pos in prop::sample::select(vec!["N", "VB", "P~D", "PRO~MDF", "X"]),
        ) {
            let t = translit();
            let script = t.convert(&rom, pos);
            prop_assert!(is_nfc(&script));
            prop_assert_eq!(script, t.convert(&rom, pos));
        }
    }
}
