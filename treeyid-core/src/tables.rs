//! Lookup tables keyed by (romanized token, tag)
//!
//! Four tab-separated tables steer transliteration of individual tokens:
//!
//! - `rompos-overrides.tsv`: token, tag, script form returned verbatim
//! - `rompos-remove-hyphen.tsv`: token, tag whose hyphens are dropped
//! - `rompos-keep-hyphen.tsv`: token, tag converted whole despite a hyphen
//! - `rompos-no-lk.tsv`: token, tag converted without the loshn-koydesh lexicon
//!
//! Lines starting with `;` are comments. The built-in tables are embedded in
//! the binary; a directory holding files of the same names replaces them.

use crate::error::{CoreError, Result};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

pub const OVERRIDES_FILE: &str = "rompos-overrides.tsv";
pub const REMOVE_HYPHEN_FILE: &str = "rompos-remove-hyphen.tsv";
pub const KEEP_HYPHEN_FILE: &str = "rompos-keep-hyphen.tsv";
pub const NO_LK_FILE: &str = "rompos-no-lk.tsv";
pub const LEXICON_FILE: &str = "loshn-koydesh.tsv";
pub const SIMPLE_SPLITS_FILE: &str = "simple-splits.tsv";

/// Read one table file from a directory of substitute tables
pub fn read_table(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    fs::read_to_string(&path).map_err(|source| CoreError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Split a table into its data rows, checking each has an allowed column count
pub(crate) fn rows<'a>(
    table: &'static str,
    content: &'a str,
    columns: &[usize],
) -> Result<Vec<Vec<&'a str>>> {
    let mut out = Vec::new();
    for (index, line) in content.lines().enumerate() {
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if !columns.contains(&fields.len()) {
            let expected = match columns {
                [2] => "2",
                [3] => "3",
                [2, 3] => "2 or 3",
                _ => "3 or 4",
            };
            return Err(CoreError::TableFormat {
                table,
                line: index + 1,
                expected,
                found: fields.len(),
            });
        }
        out.push(fields);
    }
    Ok(out)
}

/// Membership set of (token, tag) pairs
#[derive(Debug, Clone, Default)]
struct RomPosSet {
    by_rom: HashMap<String, HashSet<String>>,
}

impl RomPosSet {
    fn parse(table: &'static str, content: &str) -> Result<Self> {
        let mut set = Self::default();
        for row in rows(table, content, &[2])? {
            set.by_rom
                .entry(row[0].to_string())
                .or_default()
                .insert(row[1].to_string());
        }
        Ok(set)
    }

    fn contains(&self, rom: &str, pos: &str) -> bool {
        self.by_rom.get(rom).is_some_and(|tags| tags.contains(pos))
    }

    fn len(&self) -> usize {
        self.by_rom.values().map(HashSet::len).sum()
    }
}

/// Read-only override tables shared by every conversion
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    overrides: HashMap<String, HashMap<String, String>>,
    remove_hyphen: RomPosSet,
    keep_hyphen: RomPosSet,
    no_lk: RomPosSet,
}

impl LookupTables {
    /// Tables shipped with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_sources(
            include_str!("../data/rompos-overrides.tsv"),
            include_str!("../data/rompos-remove-hyphen.tsv"),
            include_str!("../data/rompos-keep-hyphen.tsv"),
            include_str!("../data/rompos-no-lk.tsv"),
        )
    }

    /// Load substitute tables from a directory
    pub fn from_dir(dir: &Path) -> Result<Self> {
        Self::from_sources(
            &read_table(dir, OVERRIDES_FILE)?,
            &read_table(dir, REMOVE_HYPHEN_FILE)?,
            &read_table(dir, KEEP_HYPHEN_FILE)?,
            &read_table(dir, NO_LK_FILE)?,
        )
    }

    /// Build tables from the text of the four files
    pub fn from_sources(
        overrides: &str,
        remove_hyphen: &str,
        keep_hyphen: &str,
        no_lk: &str,
    ) -> Result<Self> {
        let mut table: HashMap<String, HashMap<String, String>> = HashMap::new();
        for row in rows(OVERRIDES_FILE, overrides, &[3])? {
            table
                .entry(row[0].to_string())
                .or_default()
                .insert(row[1].to_string(), row[2].to_string());
        }

        let tables = Self {
            overrides: table,
            remove_hyphen: RomPosSet::parse(REMOVE_HYPHEN_FILE, remove_hyphen)?,
            keep_hyphen: RomPosSet::parse(KEEP_HYPHEN_FILE, keep_hyphen)?,
            no_lk: RomPosSet::parse(NO_LK_FILE, no_lk)?,
        };
        log::debug!(
            "lookup tables: {} overrides, {} remove-hyphen, {} keep-hyphen, {} no-lk",
            tables.overrides.values().map(HashMap::len).sum::<usize>(),
            tables.remove_hyphen.len(),
            tables.keep_hyphen.len(),
            tables.no_lk.len()
        );
        Ok(tables)
    }

    /// Script form fixed for this exact token and tag
    pub fn override_for(&self, rom: &str, pos: &str) -> Option<&str> {
        self.overrides
            .get(rom)
            .and_then(|tags| tags.get(pos))
            .map(String::as_str)
    }

    pub fn removes_hyphen(&self, rom: &str, pos: &str) -> bool {
        self.remove_hyphen.contains(rom, pos)
    }

    pub fn keeps_hyphen(&self, rom: &str, pos: &str) -> bool {
        self.keep_hyphen.contains(rom, pos)
    }

    pub fn skips_loshn_koydesh(&self, rom: &str, pos: &str) -> bool {
        self.no_lk.contains(rom, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_embedded_tables_load() {
        let tables = LookupTables::embedded().unwrap();
        assert_eq!(tables.override_for("kol", "N"), Some("קול"));
        assert_eq!(tables.override_for("kol", "Q"), None);
        assert!(tables.keeps_hyphen("sholem-aleykhem", "N"));
        assert!(tables.removes_hyphen("a-zoy", "ADV"));
        assert!(tables.skips_loshn_koydesh("shemen", "VB"));
        assert!(!tables.skips_loshn_koydesh("shemen", "N"));
    }

    #[test]
    fn test_comments_and_blank_lines_ignored() {
        let tables = LookupTables::from_sources(
            "; comment\n\nabc\tN\txyz\n",
            "; only a comment\n",
            "",
            "def\tVB\n",
        )
        .unwrap();
        assert_eq!(tables.override_for("abc", "N"), Some("xyz"));
        assert!(tables.skips_loshn_koydesh("def", "VB"));
        assert!(!tables.keeps_hyphen("def", "VB"));
    }

    #[test]
    fn test_wrong_column_count_is_reported() {
        let result = LookupTables::from_sources("abc\tN\n", "", "", "");
        match result {
            Err(CoreError::TableFormat {
                table, line, found, ..
            }) => {
                assert_eq!(table, OVERRIDES_FILE);
                assert_eq!(line, 1);
                assert_eq!(found, 2);
            }
            other => panic!("expected TableFormat, got {other:?}"),
        }

        let result = LookupTables::from_sources("", "; c\nabc\tN\tx\n", "", "");
        assert!(matches!(
            result,
            Err(CoreError::TableFormat { line: 2, .. })
        ));
    }

    #[test]
    fn test_from_dir() {
        let dir = TempDir::new().unwrap();
        for (name, content) in [
            (OVERRIDES_FILE, "vort\tN\tװאָרט\n"),
            (REMOVE_HYPHEN_FILE, ""),
            (KEEP_HYPHEN_FILE, "a-b\tN\n"),
            (NO_LK_FILE, ""),
        ] {
            let mut file = fs::File::create(dir.path().join(name)).unwrap();
            file.write_all(content.as_bytes()).unwrap();
        }

        let tables = LookupTables::from_dir(dir.path()).unwrap();
        assert_eq!(tables.override_for("vort", "N"), Some("װאָרט"));
        assert!(tables.keeps_hyphen("a-b", "N"));
        assert_eq!(tables.override_for("kol", "N"), None);
    }

    #[test]
    fn test_from_dir_missing_file() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            LookupTables::from_dir(dir.path()),
            Err(CoreError::Io { .. })
        ));
    }
}
