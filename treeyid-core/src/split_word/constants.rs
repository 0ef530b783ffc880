//! Script fragments used by the split patterns
//!
//! Written as escapes so points and ligatures survive editors that normalize
//! Hebrew text. Alternation lists are tried in the order given.

/// נאָכ
pub const NOKH: &str = "\u{05E0}\u{05D0}\u{05B8}\u{05DB}";
pub const TET: &str = "\u{05D8}";
pub const VAV: &str = "\u{05D5}";
/// דו
pub const DU: &str = "\u{05D3}\u{05D5}";
/// צו
pub const TSU: &str = "\u{05E6}\u{05D5}";
/// צוּ
pub const TSU_DAGESH: &str = "\u{05E6}\u{05D5}\u{05BC}";
pub const ALEF: &str = "\u{05D0}";
/// זשע
pub const ZHE: &str = "\u{05D6}\u{05E9}\u{05E2}";
/// פֿאַר
pub const FAR: &str = "\u{05E4}\u{05BF}\u{05D0}\u{05B7}\u{05E8}";
/// ניט
pub const NIT: &str = "\u{05E0}\u{05D9}\u{05D8}";
/// נישט
pub const NISHT: &str = "\u{05E0}\u{05D9}\u{05E9}\u{05D8}";
pub const KAF: &str = "\u{05DB}";
pub const SAMEKH: &str = "\u{05E1}";
pub const MEM: &str = "\u{05DE}";
pub const APOSTROPHE: &str = "'";
/// װוּ
pub const VU: &str = "\u{05F0}\u{05D5}\u{05BC}";
/// דר
pub const DR: &str = "\u{05D3}\u{05E8}";
/// װאָס
pub const VOS: &str = "\u{05F0}\u{05D0}\u{05B8}\u{05E1}";
/// טו
pub const TU: &str = "\u{05D8}\u{05D5}";

pub const D_PREFIXES: &[&str] = &[DR, SAMEKH];

/// ikh ir er mir du
pub const PRO_PREFIXES: &[&str] = &[
    "\u{05D0}\u{05D9}\u{05DB}",
    "\u{05D0}\u{05D9}\u{05E8}",
    "\u{05E2}\u{05E8}",
    "\u{05DE}\u{05D9}\u{05E8}",
    DU,
];

pub const P_PREFIXES: &[&str] = &[TSU, NOKH, FAR];

pub const NIT_NISHT: &[&str] = &[NIT, NISHT];

/// Endings of a determiner fused to a preposition: n em m a
pub const D_SUFFIXES: &[&str] = &[
    "\u{05DF}",
    "\u{05E2}\u{05DD}",
    "\u{05DD}",
    "\u{05D0}\u{05B7}",
];

/// Verbal particles: op on um ayn bay oyf oys tsu tsu iber nokh durkh unter
pub const RP_PREFIXES: &[&str] = &[
    "\u{05D0}\u{05B8}\u{05E4}\u{05BC}",
    "\u{05D0}\u{05B8}\u{05E0}",
    "\u{05D0}\u{05D5}\u{05DE}",
    "\u{05D0}\u{05F2}\u{05B7}\u{05E0}",
    "\u{05D1}\u{05F2}\u{05B7}",
    "\u{05D0}\u{05F1}\u{05E4}\u{05BF}",
    "\u{05D0}\u{05F1}\u{05E1}",
    TSU,
    TSU_DAGESH,
    "\u{05D0}\u{05D9}\u{05D1}\u{05E2}\u{05E8}",
    NOKH,
    "\u{05D3}\u{05D5}\u{05E8}\u{05DB}",
    "\u{05D0}\u{05D5}\u{05E0}\u{05D8}\u{05E2}\u{05E8}",
];

/// Adverbial prefixes: arop arum avek aroys arayn aroyf vider ariber anider
/// farbay arunter tsurekht tsuzamen farnander funander faranander
pub const ADV_PREFIXES: &[&str] = &[
    "\u{05D0}\u{05B7}\u{05E8}\u{05D0}\u{05B8}\u{05E4}\u{05BC}",
    "\u{05D0}\u{05B7}\u{05E8}\u{05D5}\u{05DE}",
    "\u{05D0}\u{05B7}\u{05F0}\u{05E2}\u{05E7}",
    "\u{05D0}\u{05B7}\u{05E8}\u{05F1}\u{05E1}",
    "\u{05D0}\u{05B7}\u{05E8}\u{05F2}\u{05B7}\u{05E0}",
    "\u{05D0}\u{05B7}\u{05E8}\u{05F1}\u{05E4}\u{05BF}",
    "\u{05F0}\u{05D9}\u{05D3}\u{05E2}\u{05E8}",
    "\u{05D0}\u{05B7}\u{05E8}\u{05D9}\u{05D1}\u{05E2}\u{05E8}",
    "\u{05D0}\u{05B7}\u{05E0}\u{05D9}\u{05D3}\u{05E2}\u{05E8}",
    "\u{05E4}\u{05BF}\u{05D0}\u{05B7}\u{05E8}\u{05D1}\u{05F2}\u{05B7}",
    "\u{05D0}\u{05B7}\u{05E8}\u{05D5}\u{05E0}\u{05D8}\u{05E2}\u{05E8}",
    "\u{05E6}\u{05D5}\u{05E8}\u{05E2}\u{05DB}\u{05D8}",
    "\u{05E6}\u{05D5}\u{05D6}\u{05D0}\u{05B7}\u{05DE}\u{05E2}\u{05E0}",
    "\u{05E4}\u{05BF}\u{05D0}\u{05B7}\u{05E8}\u{05E0}\u{05D0}\u{05B7}\u{05E0}\u{05D3}\u{05E2}\u{05E8}",
    "\u{05E4}\u{05BF}\u{05D5}\u{05E0}\u{05D0}\u{05B7}\u{05E0}\u{05D3}\u{05E2}\u{05E8}",
    "\u{05E4}\u{05BF}\u{05D0}\u{05B7}\u{05E8}\u{05D0}\u{05B7}\u{05E0}\u{05D0}\u{05B7}\u{05E0}\u{05D3}\u{05E2}\u{05E8}",
];

/// mit tsurik
pub const RP_ADV_PREFIXES: &[&str] = &[
    "\u{05DE}\u{05D9}\u{05D8}",
    "\u{05E6}\u{05D5}\u{05E8}\u{05D9}\u{05E7}",
];

/// vey
pub const RP_N_PREFIXES: &[&str] = &["\u{05F0}\u{05F2}"];

/// Regex alternation of the given fragments, in order
pub fn alternation(groups: &[&[&str]]) -> String {
    groups
        .iter()
        .flat_map(|group| group.iter().copied())
        .collect::<Vec<_>>()
        .join("|")
}
