//! Rewrites of flat trees before preparation
//!
//! Replacement lists fix individual romanizations and tags. The regex
//! rewrites split names at colons and hyphens, split underscore-joined
//! numbers, and put `@` marks on contractions so they merge back into the
//! written token later.

use crate::error::Result;
use crate::tables::rows;
use regex::Regex;
use std::sync::LazyLock;

const CHANGES_TABLE: &str = "corpus changes";

const FULL_VERB_3RD: &str =
    "i'|hot|vet|muz|badarf|ken|iz|i'|makht|lernt|derhert|heyst|tsitert|volt";
const FULL_VERB_1ST: &str =
    "bin|hob|vel|vil|ken|zol|veys|hob|bin|bet|drey|trog|meyn|kleyb|freg|nem|volt";
const PRONOUNS_BEFORE_MDF: &str = "ikh|er|ir|mir|du";
const MDF_SUFFIX: &str = "'l|'t|'n|'st";
const PRONOUNS_AFTER_MDF: &str = "er|ir|men";
const CONTRACTED: &str = "BEF|HVF|MDF|VBF|VLF";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("corpus rewrite pattern is valid")
}

static RE_COLON: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\(NPR (?P<name>[A-Z\-a-z]+):\)"));

/// Hyphenated names, longest first; the last part keeps a possessive tag
static RE_NAMES: LazyLock<[(Regex, &'static str); 2]> = LazyLock::new(|| {
    [
        (
            compile(r"\((?P<pos>NPR\$?) (?P<n1>[A-Za-z]+)-(?P<n2>[A-Za-z]+)-(?P<n3>[A-Za-z]+)\)"),
            "(NPR ${n1}) (NPR ${n2}) (${pos} ${n3})",
        ),
        (
            compile(r"\((?P<pos>NPR\$?) (?P<n1>[A-Za-z]+)-(?P<n2>[A-Za-z]+)\)"),
            "(NPR ${n1}) (${pos} ${n2})",
        ),
    ]
});

/// Underscore-joined numbers, those already under a NUMP first
static RE_NUMBERS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    let mut rules = Vec::new();
    for wrapped in [true, false] {
        for parts in (2..=4).rev() {
            let words: Vec<String> = (1..=parts).map(|i| format!("(?P<p{i}>[a-z]+)")).collect();
            let num = format!(r"\(NUM {}\)", words.join("_"));
            let pattern = if wrapped {
                format!(r"\(NUMP {num}\)")
            } else {
                num
            };
            let leaves: Vec<String> = (1..=parts).map(|i| format!("(NUM ${{p{i}}})")).collect();
            rules.push((compile(&pattern), format!("(NUMP {})", leaves.join(" "))));
        }
    }
    rules
});

static RE_CONTRACTIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    let sbj = r"\(NP-SBJ(?P<tags>[1-9A-Z\-]*)";
    vec![
        // partial pronoun, full verb
        (
            compile(&format!(
                r"{sbj} \(ES 's\)\) \((?P<pos2>{CONTRACTED}) (?P<word2>{FULL_VERB_3RD})\)"
            )),
            "(NP-SBJ${tags} (ES s'@)) (${pos2} @${word2})",
        ),
        (
            compile(&format!(
                r"{sbj} \(PRO ('s|s')\)\) \((?P<pos2>{CONTRACTED}) (?P<word2>{FULL_VERB_3RD})\)"
            )),
            "(NP-SBJ${tags} (PRO s'@)) (${pos2} @${word2})",
        ),
        (
            compile(&format!(
                r"\(ES 's\) \((?P<pos2>{CONTRACTED}) (?P<word2>{FULL_VERB_3RD})\)"
            )),
            "(ES s'@) (${pos2} @${word2})",
        ),
        (
            compile(&format!(
                r"{sbj} \(PRO ('kh|kh')\)\) \((?P<pos2>{CONTRACTED}) (?P<word2>{FULL_VERB_1ST})\)"
            )),
            "(NP-SBJ${tags} (PRO kh'@)) (${pos2} @${word2})",
        ),
        // partial pronoun, partial verb
        (
            compile(&format!(r"{sbj} \(PRO m'\)\) \((?P<pos2>MDF) (?P<word2>'et)\)")),
            "(NP-SBJ${tags} (PRO m'@)) (${pos2} @${word2})",
        ),
        // full pronoun, partial verb
        (
            compile(&format!(
                r"{sbj} \(PRO (?P<word1>{PRONOUNS_BEFORE_MDF})\)\) \((?P<pos2>MDF) (?P<word2>{MDF_SUFFIX})\)"
            )),
            "(NP-SBJ${tags} (PRO ${word1}@)) (${pos2} @${word2})",
        ),
        (
            compile(r"\(WADVP-1 \(WADV vu\)\) \(IP-SUB \(ADVP-LOC \*T\*-1\) \(MDF 'l\)"),
            "(WADVP-1 (WADV vu@)) (IP-SUB (ADVP-LOC *T*-1) (MDF @'l)",
        ),
        // partial verb, full word
        (
            compile(&format!(
                r"\((?P<pos1>MDF|HVF) ('t|t')\) {sbj} \(PRO (?P<word2>{PRONOUNS_AFTER_MDF})\)\)"
            )),
            "(${pos1} t'@) (NP-SBJ${tags} (PRO @${word2}))",
        ),
        (
            compile(r"\(NP-SBJ \(Q keyner\)\) \(MDF 't\) \(NEG nit\)"),
            "(NP-SBJ (Q keyner)) (MDF t'@) (NEG @nit)",
        ),
        (
            compile(r"\(NP-SBJ \*pro\*\) \(MDF 't\) \(ADJP-PRD \(ADJ glaykher\)\)"),
            "(NP-SBJ *pro*) (MDF t'@) (ADJP-PRD (ADJ @glaykher))",
        ),
        (
            compile(r"\(NP-SBJ-1 \*exp\*\) \(MDF 't\) \(VB zayn\)"),
            "(NP-SBJ-1 *exp*) (MDF t'@) (VB @zayn)",
        ),
        // partial determiner, full noun
        (compile(r"\(D 's\) \(N kleydl\)"), "(D s'@) (N @kleydl)"),
        (compile(r"\(D s'\) \(N taytsh\)"), "(D s'@) (N @taytsh)"),
        // written with an apostrophe but not contracted
        (
            compile(
                r"\(WNP-1 \(WPRO vos\)\) \(IP-SUB \(NP-ADV \*T\*-1\) \(MDF 0\) \(NP-SBJ \(PRO 'tu\)\)",
            ),
            "(WNP-1 (WPRO vos@)) (IP-SUB (NP-ADV *T*-1) (MDF 0) (NP-SBJ (PRO @'tu))",
        ),
        // verb ending in st before du or tu that was not marked as split
        (
            compile(
                r"\((?P<pos1>BEF|HVF|MDF|RDF|VBF) (?P<word1>(?:[a-z]+|')st)\) \(NP-SBJ \(PRO (?P<word2>du|tu)\)\)",
            ),
            "(${pos1} ${word1}@) (NP-SBJ (PRO @${word2}))",
        ),
    ]
});

/// Literal replacements plus the fixed regex rewrites
#[derive(Debug, Clone, Default)]
pub struct CorpusMods {
    replacements: Vec<(String, String)>,
}

impl CorpusMods {
    /// Only the regex rewrites
    pub fn new() -> Self {
        Self::default()
    }

    /// Add replacements from a tab-separated list.
    ///
    /// Two columns replace text as written; three columns (tag, old, new)
    /// replace the terminal `(tag old)` with `(tag new)`.
    pub fn add_replacements(&mut self, content: &str) -> Result<()> {
        for row in rows(CHANGES_TABLE, content, &[2, 3])? {
            let pair = match row.as_slice() {
                [from, to] => (from.to_string(), to.to_string()),
                [tag, old, new] => (format!("({tag} {old})"), format!("({tag} {new})")),
                _ => continue,
            };
            self.replacements.push(pair);
        }
        Ok(())
    }

    pub fn replacement_count(&self) -> usize {
        self.replacements.len()
    }

    /// Rewrite one flat tree
    pub fn apply(&self, tree: &str) -> String {
        let mut tree = tree.to_string();
        for (from, to) in &self.replacements {
            if tree.contains(from.as_str()) {
                tree = tree.replace(from.as_str(), to);
            }
        }

        tree = RE_COLON.replace_all(&tree, "(NPR ${name}) (PUNC :)").into_owned();
        for (pattern, replacement) in RE_NAMES.iter() {
            tree = pattern.replace_all(&tree, *replacement).into_owned();
        }
        for (pattern, replacement) in RE_NUMBERS.iter() {
            tree = pattern.replace_all(&tree, replacement.as_str()).into_owned();
        }
        for (pattern, replacement) in RE_CONTRACTIONS.iter() {
            tree = pattern.replace_all(&tree, *replacement).into_owned();
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn apply(tree: &str) -> String {
        CorpusMods::new().apply(tree)
    }

    #[test]
    fn test_name_colon() {
        assert_eq!(
            apply("(NP-VOC (NPR rokhl:)) (VBF zogt)"),
            "(NP-VOC (NPR rokhl) (PUNC :)) (VBF zogt)"
        );
    }

    #[test]
    fn test_hyphenated_names() {
        assert_eq!(apply("(NP (NPR$ ben-tsien))"), "(NP (NPR ben) (NPR$ tsien))");
        assert_eq!(
            apply("(NP (NPR yankev-meyer-leyb))"),
            "(NP (NPR yankev) (NPR meyer) (NPR leyb))"
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            apply("(NP (NUMP (NUM tsvey_un_tsvantsik)) (N yor))"),
            "(NP (NUMP (NUM tsvey) (NUM un) (NUM tsvantsik)) (N yor))"
        );
        assert_eq!(
            apply("(NP (NUM fir_un_draysik) (N yor))"),
            "(NP (NUMP (NUM fir) (NUM un) (NUM draysik)) (N yor))"
        );
        assert_eq!(apply("(NP (NUM finf_hundert))"), "(NP (NUMP (NUM finf) (NUM hundert)))");
    }

    #[test]
    fn test_pronoun_contractions() {
        assert_eq!(
            apply("(IP-MAT (NP-SBJ (ES 's)) (VBF iz) (ADJP (ADJ gut)))"),
            "(IP-MAT (NP-SBJ (ES s'@)) (VBF @iz) (ADJP (ADJ gut)))"
        );
        assert_eq!(
            apply("(IP-MAT (NP-SBJ-1 (PRO 'kh)) (HVF hob))"),
            "(IP-MAT (NP-SBJ-1 (PRO kh'@)) (HVF @hob))"
        );
        assert_eq!(
            apply("(IP-MAT (NP-SBJ (PRO ikh)) (MDF 'l) (VB geyn))"),
            "(IP-MAT (NP-SBJ (PRO ikh@)) (MDF @'l) (VB geyn))"
        );
        assert_eq!(
            apply("(IP-MAT (NP-SBJ (PRO m')) (MDF 'et))"),
            "(IP-MAT (NP-SBJ (PRO m'@)) (MDF @'et))"
        );
    }

    #[test]
    fn test_verb_contractions() {
        assert_eq!(
            apply("(CP-QUE (MDF 't) (NP-SBJ (PRO er)) (VB geyn))"),
            "(CP-QUE (MDF t'@) (NP-SBJ (PRO @er)) (VB geyn))"
        );
        assert_eq!(
            apply("(IP-MAT (HVF host) (NP-SBJ (PRO du)))"),
            "(IP-MAT (HVF host@) (NP-SBJ (PRO @du)))"
        );
        assert_eq!(
            apply("(IP-MAT (VBF geyt) (NP-SBJ (PRO du)))"),
            "(IP-MAT (VBF geyt) (NP-SBJ (PRO du)))"
        );
    }

    #[test]
    fn test_fixed_contexts() {
        assert_eq!(apply("(NP (D 's) (N kleydl))"), "(NP (D s'@) (N @kleydl))");
        assert_eq!(
            apply("(NP-SBJ (Q keyner)) (MDF 't) (NEG nit)"),
            "(NP-SBJ (Q keyner)) (MDF t'@) (NEG @nit)"
        );
    }

    #[test]
    fn test_relative_vu_keeps_trace_phrase() {
        assert_eq!(
            apply("(CP-REL (WADVP-1 (WADV vu)) (IP-SUB (ADVP-LOC *T*-1) (MDF 'l) (VB voynen)))"),
            "(CP-REL (WADVP-1 (WADV vu@)) (IP-SUB (ADVP-LOC *T*-1) (MDF @'l) (VB voynen)))"
        );
        let bare = "(CP-REL (WADVP-1 (WADV vu)) (IP-SUB (ADV-LOC *T*-1) (MDF 'l) (VB voynen)))";
        assert_eq!(apply(bare), bare);
    }

    #[test]
    fn test_replacements() {
        let mut mods = CorpusMods::new();
        mods.add_replacements("; fixes\n(N hoyz)\t(N hoyz)\nADV\tazoy\ta-zoy\n(NUM tsvey_un)\t(NUM tsvey) (CONJ un)\n")
            .unwrap();
        assert_eq!(mods.replacement_count(), 3);
        assert_eq!(
            mods.apply("(IP-MAT (ADV azoy) (N hoyz))"),
            "(IP-MAT (ADV a-zoy) (N hoyz))"
        );
        assert_eq!(
            mods.apply("(NP (NUM tsvey_un))"),
            "(NP (NUM tsvey) (CONJ un))"
        );
    }

    #[test]
    fn test_replacement_format_error() {
        let mut mods = CorpusMods::new();
        assert!(matches!(
            mods.add_replacements("only-one-column\n"),
            Err(CoreError::TableFormat {
                expected: "2 or 3",
                ..
            })
        ));
    }
}
