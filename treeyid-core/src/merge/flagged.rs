//! Rules for corpora whose split marks were read into flags
//!
//! Every window must run start-marked, (middle-marked,) end-marked, so the
//! patterns here only constrain tags and text.

use super::{LeafPattern as L, MergeRule};

const FINITE: &[&str] = &["VBF", "RDF", "MDF", "HVF", "BEF"];
const CONTRACTED_VERB: &[&str] = &["BEF", "HVF", "MDF", "VBF"];
const CONTRACTED_VERB_VLF: &[&str] = &["BEF", "HVF", "MDF", "VBF", "VLF"];

fn stu(verb: &str, _du: &str) -> String {
    format!("{verb}u")
}

pub(super) fn rules() -> Vec<MergeRule> {
    let mut rules = misc();
    rules.extend(verb_du());
    rules.extend(det_noun());
    rules.extend(contractions());
    rules
}

fn misc() -> Vec<MergeRule> {
    vec![
        MergeRule::pair("P + D(n,m,em)", L::tags(&["P"]), L::tags(&["D"]).words(&["n", "m", "em"])),
        MergeRule::pair("P + D(a)", L::tags(&["P"]), L::tags(&["D"]).words(&["a"])),
        MergeRule::pair("P + PRO", L::tags(&["P"]), L::tags(&["PRO"])),
        MergeRule::pair("P + N", L::tags(&["P"]), L::tags(&["N"])),
        MergeRule::pair("P + NPR", L::tags(&["P"]), L::tags(&["NPR"])),
        MergeRule::pair(
            "P(far,tsu) + WPRO(vos)",
            L::tags(&["P"]).words(&["far", "tsu"]),
            L::tags(&["WPRO"]).words(&["vos"]),
        ),
        MergeRule::pair("P + DR+P", L::tags(&["P"]), L::tags(&["DR+P"])),
        MergeRule::triple("P + D + N", L::tags(&["P"]), L::tags(&["D"]), L::tags(&["N"])),
        MergeRule::pair("Q + D", L::tags(&["Q"]), L::tags(&["D"])),
        MergeRule::pair("RP-N + VBN", L::tags(&["RP-N"]), L::tags(&["VBN"])),
        MergeRule::pair(
            "RP|ADV + VB|VBN|VAN|VAG",
            L::tags(&["RP", "ADV"]),
            L::tags(&["VB", "VBN", "VAN", "VAG"]),
        ),
        MergeRule::triple(
            "ADV|RP + TO + VB",
            L::tags(&["ADV", "RP"]),
            L::tags(&["TO"]),
            L::tags(&["VB"]),
        ),
        MergeRule::pair("NEG + VAG", L::tags(&["NEG"]), L::tags(&["VAG"])),
        MergeRule::pair("RP-ADV + VB|VBN", L::tags(&["RP-ADV"]), L::tags(&["VB", "VBN"])),
        MergeRule::pair(
            "VBI(lo) + PRO(mikh,mir)",
            L::tags(&["VBI"]).words(&["lo"]),
            L::tags(&["PRO"]).words(&["mikh", "mir"]),
        ),
        MergeRule::pair(
            "WADV(vi) + Q(fl)",
            L::tags(&["WADV"]).words(&["vi"]),
            L::tags(&["Q"]).words(&["fl"]),
        ),
        MergeRule::pair(
            "NEG(nisht,nit) + ADV(o)",
            L::tags(&["NEG"]).words(&["nisht", "nit"]),
            L::tags(&["ADV"]).words(&["o"]),
        ),
        MergeRule::pair(
            "C(a) + NEG(nit)",
            L::tags(&["C"]).words(&["a"]),
            L::tags(&["NEG"]).words(&["nit"]),
        ),
        MergeRule::pair("ADV + FP(zhe)", L::tags(&["ADV"]), L::tags(&["FP"]).words(&["zhe"])),
        MergeRule::pair("WADV + FP(zhe)", L::tags(&["WADV"]), L::tags(&["FP"]).words(&["zhe"])),
        MergeRule::pair("WPRO + FP(zhe)", L::tags(&["WPRO"]), L::tags(&["FP"]).words(&["zhe"])),
        MergeRule::pair("FP + D", L::tags(&["FP"]), L::tags(&["D"])),
        MergeRule::pair("FP + ADV", L::tags(&["FP"]), L::tags(&["ADV"])),
        MergeRule::pair("TO + VB", L::tags(&["TO"]), L::tags(&["VB"])),
    ]
}

/// hos@ @tu keeps its text; host@ @du becomes hostu
fn verb_du() -> Vec<MergeRule> {
    vec![
        MergeRule::pair(
            "finite(s) + PRO(tu)",
            L::tags(FINITE).ending("s"),
            L::tags(&["PRO"]).words(&["tu"]),
        ),
        MergeRule::pair(
            "finite(st) + PRO(du)",
            L::tags(FINITE).ending("st"),
            L::tags(&["PRO"]).words(&["du"]),
        )
        .combine(stu),
        MergeRule::pair(
            "MDF(zt) + PRO(du)",
            L::tags(&["MDF"]).ending("zt"),
            L::tags(&["PRO"]).words(&["du"]),
        )
        .combine(stu),
    ]
}

fn det_noun() -> Vec<MergeRule> {
    vec![
        MergeRule::pair("D(dr') + N", L::tags(&["D"]).words(&["dr'"]), L::tags(&["N"])),
        MergeRule::pair("D(s') + N", L::tags(&["D"]).words(&["s'"]), L::tags(&["N"])),
    ]
}

fn contractions() -> Vec<MergeRule> {
    vec![
        // partial pronoun, full verb
        MergeRule::pair(
            "ES(s') + verb",
            L::tags(&["ES"]).words(&["s'"]),
            L::tags(CONTRACTED_VERB),
        ),
        MergeRule::pair(
            "PRO(s') + verb",
            L::tags(&["PRO"]).words(&["s'"]),
            L::tags(CONTRACTED_VERB_VLF),
        ),
        MergeRule::pair(
            "PRO(kh') + verb",
            L::tags(&["PRO"]).words(&["kh'"]),
            L::tags(CONTRACTED_VERB_VLF),
        ),
        // partial pronoun, partial verb
        MergeRule::pair(
            "PRO(m') + MDF('et)",
            L::tags(&["PRO"]).words(&["m'"]),
            L::tags(&["MDF"]).words(&["'et"]),
        )
        .combine(|_, _| "m'et".to_string()),
        // full word, partial verb
        MergeRule::pair(
            "PRO(ikh) + MDF('l)",
            L::tags(&["PRO"]).words(&["ikh"]),
            L::tags(&["MDF"]).words(&["'l"]),
        ),
        MergeRule::pair(
            "PRO(er,ir) + MDF('t)",
            L::tags(&["PRO"]).words(&["er", "ir"]),
            L::tags(&["MDF"]).words(&["'t"]),
        ),
        MergeRule::pair(
            "PRO(mir) + MDF('n)",
            L::tags(&["PRO"]).words(&["mir"]),
            L::tags(&["MDF"]).words(&["'n"]),
        ),
        MergeRule::pair(
            "PRO(du) + MDF('st)",
            L::tags(&["PRO"]).words(&["du"]),
            L::tags(&["MDF"]).words(&["'st"]),
        ),
        MergeRule::pair(
            "WADV(vu) + MDF('l)",
            L::tags(&["WADV"]).words(&["vu"]),
            L::tags(&["MDF"]).words(&["'l"]),
        ),
        // partial verb, full word
        MergeRule::pair(
            "MDF|HVF(t') + PRO(er,ir,men)",
            L::tags(&["MDF", "HVF"]).words(&["t'"]),
            L::tags(&["PRO"]).words(&["er", "ir", "men"]),
        ),
        MergeRule::pair("MDF(t') + ADJ", L::tags(&["MDF"]).words(&["t'"]), L::tags(&["ADJ"])),
        MergeRule::pair("MDF(t') + VB", L::tags(&["MDF"]).words(&["t'"]), L::tags(&["VB"])),
        MergeRule::pair("MDF(t') + NEG", L::tags(&["MDF"]).words(&["t'"]), L::tags(&["NEG"])),
        // apostrophe without contraction
        MergeRule::pair(
            "WPRO(vos) + PRO('tu)",
            L::tags(&["WPRO"]).words(&["vos"]),
            L::tags(&["PRO"]).words(&["'tu"]),
        ),
    ]
}
