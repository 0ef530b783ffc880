//! Rules for corpora that keep split marks in the leaf text
//!
//! Each rule states the marks it needs. Apostrophe contractions are often
//! written as two unmarked tokens (`(PRO er) (MDF 't)`), so those rules match
//! on exact text instead.

use super::{LeafPattern as L, MergeRule};
use crate::leaf::SplitMark::{End, Middle, Start};

const FINITE: &[&str] = &["VBF", "RDF", "MDF", "HVF", "BEF"];
const VERB_AFTER_S: &[&str] = &["BEF", "HVF", "MDF", "RDF", "VBF", "VLF"];
const VERB_AFTER_KH: &[&str] = &["BEF", "HVF", "MDF", "VBF", "VLF"];

pub(super) fn rules() -> Vec<MergeRule> {
    let mut rules = marked_split();
    rules.extend(pronoun_and_verb());
    rules.extend(verb_and_pronoun());
    rules.extend(apostrophe_other());
    rules.extend(no_mark());
    rules
}

fn marked_split() -> Vec<MergeRule> {
    vec![
        MergeRule::triple(
            "ADV|RP + TO + VB",
            L::tags(&["ADV", "RP"]).at(Start),
            L::tags(&["TO"]).at(Middle),
            L::tags(&["VB"]).at(End),
        ),
        MergeRule::triple(
            "P + PRO + VB",
            L::tags(&["P"]).at(Start),
            L::tags(&["PRO"]).at(Middle),
            L::tags(&["VB"]).at(End),
        ),
        MergeRule::triple(
            "P + D + N",
            L::tags(&["P"]).at(Start),
            L::tags(&["D"]).at(Middle),
            L::tags(&["N"]).at(End),
        ),
        MergeRule::pair(
            "ES(s') + VBF(i')",
            L::tags(&["ES"]).words(&["s'"]).at(Start),
            L::tags(&["VBF"]).words(&["i'"]).at(End),
        )
        .combine(|_, _| "s'i'".to_string()),
        MergeRule::pair(
            "P + D(n,m,em)",
            L::tags(&["P"]).at(Start),
            L::tags(&["D"]).words(&["n", "m", "em"]).at(End),
        ),
        MergeRule::pair(
            "P + D(a)",
            L::tags(&["P"]).at(Start),
            L::tags(&["D"]).words(&["a"]).at(End),
        ),
        MergeRule::pair("P + PRO", L::tags(&["P"]).at(Start), L::tags(&["PRO"]).at(End)),
        MergeRule::pair("P + N", L::tags(&["P"]).at(Start), L::tags(&["N"]).at(End)),
        MergeRule::pair("P + NPR", L::tags(&["P"]).at(Start), L::tags(&["NPR"]).at(End)),
        MergeRule::pair(
            "P(far,tsu) + WPRO(vos)",
            L::tags(&["P"]).words(&["far", "tsu"]).at(Start),
            L::tags(&["WPRO"]).words(&["vos"]).at(End),
        ),
        MergeRule::pair(
            "P-DBL + DR+P",
            L::tags(&["P"]).extra("-DBL").at(Start),
            L::tags(&["DR+P"]).at(End),
        ),
        MergeRule::pair("D + N", L::tags(&["D"]).at(Start), L::tags(&["N"]).at(End)),
        MergeRule::pair("Q + D", L::tags(&["Q"]).at(Start), L::tags(&["D"]).at(End)),
        MergeRule::pair(
            "finite + PRO(du,tu)",
            L::tags(FINITE).at(Start),
            L::tags(&["PRO"]).words(&["du", "tu"]).at(End),
        ),
        MergeRule::pair(
            "RP|ADV|RP-N + VB|VBN|VAN|VAG",
            L::tags(&["RP", "ADV", "RP-N"]).at(Start),
            L::tags(&["VB", "VBN", "VAN", "VAG"]).at(End),
        ),
        MergeRule::pair("NEG + VAG", L::tags(&["NEG"]).at(Start), L::tags(&["VAG"]).at(End)),
        MergeRule::pair(
            "RP-ADV + VB|VBN",
            L::tags(&["RP-ADV"]).at(Start),
            L::tags(&["VB", "VBN"]).at(End),
        ),
        MergeRule::pair(
            "VBI(lo) + PRO(mikh,mir)",
            L::tags(&["VBI"]).words(&["lo"]).at(Start),
            L::tags(&["PRO"]).words(&["mikh", "mir"]).at(End),
        ),
        MergeRule::pair(
            "WADV(vi) + Q(fl)",
            L::tags(&["WADV"]).words(&["vi"]).at(Start),
            L::tags(&["Q"]).words(&["fl"]).at(End),
        ),
        MergeRule::pair(
            "NEG(nisht,nit) + ADV(o)",
            L::tags(&["NEG"]).words(&["nisht", "nit"]).at(Start),
            L::tags(&["ADV"]).words(&["o"]).at(End),
        ),
        MergeRule::pair(
            "C(a) + NEG(nit)",
            L::tags(&["C"]).words(&["a"]).at(Start),
            L::tags(&["NEG"]).words(&["nit"]).at(End),
        ),
        MergeRule::pair(
            "ADV + FP(zhe)",
            L::tags(&["ADV"]).at(Start),
            L::tags(&["FP"]).words(&["zhe"]).at(End),
        ),
        MergeRule::pair(
            "WADV + FP(zhe)",
            L::tags(&["WADV"]).at(Start),
            L::tags(&["FP"]).words(&["zhe"]).at(End),
        ),
        MergeRule::pair(
            "WPRO + FP(zhe)",
            L::tags(&["WPRO"]).at(Start),
            L::tags(&["FP"]).words(&["zhe"]).at(End),
        ),
        MergeRule::pair(
            "VBI + FP(zhe)",
            L::tags(&["VBI"]).at(Start),
            L::tags(&["FP"]).words(&["zhe"]).at(End),
        ),
        MergeRule::pair("FP + D", L::tags(&["FP"]).at(Start), L::tags(&["D"]).at(End)),
        MergeRule::pair("FP + ADV", L::tags(&["FP"]).at(Start), L::tags(&["ADV"]).at(End)),
        MergeRule::pair("TO + VB", L::tags(&["TO"]).at(Start), L::tags(&["VB"]).at(End)),
    ]
}

fn pronoun_and_verb() -> Vec<MergeRule> {
    vec![
        MergeRule::pair(
            "ES|PRO('s) + verb",
            L::tags(&["ES", "PRO"]).exact(&["'s"]),
            L::tags(VERB_AFTER_S).no_apostrophe(),
        )
        .combine(|_, verb| format!("s'{verb}")),
        MergeRule::pair(
            "N('s) + verb",
            L::tags(&["N"]).exact(&["'s"]),
            L::tags(VERB_AFTER_S).no_apostrophe(),
        )
        .combine(|_, verb| format!("s'{verb}")),
        MergeRule::pair(
            "ES|PRO('s) + i'",
            L::tags(&["ES", "PRO"]).exact(&["'s"]),
            L::tags(&["BEF", "VBF"]).exact(&["i'"]),
        )
        .combine(|_, _| "s'i'".to_string()),
        MergeRule::pair(
            "N('s) + i'",
            L::tags(&["N"]).exact(&["'s"]),
            L::tags(&["BEF", "VBF"]).exact(&["i'"]),
        )
        .combine(|_, _| "s'i'".to_string()),
        MergeRule::pair(
            "PRO('kh,kh') + verb",
            L::tags(&["PRO"]).exact(&["'kh", "kh'"]),
            L::tags(VERB_AFTER_KH).no_apostrophe(),
        )
        .combine(|_, verb| format!("kh'{verb}")),
        MergeRule::pair(
            "PRO(m') + MDF('et)",
            L::tags(&["PRO"]).exact(&["m'"]),
            L::tags(&["MDF"]).exact(&["'et"]),
        )
        .combine(|_, _| "m'et".to_string()),
        MergeRule::pair(
            "PRO(ikh) + MDF('l)",
            L::tags(&["PRO"]).exact(&["ikh"]),
            L::tags(&["MDF"]).exact(&["'l"]),
        )
        .combine(|_, _| "ikh'l".to_string()),
        MergeRule::pair(
            "PRO(er,ir) + MDF('t)",
            L::tags(&["PRO"]).exact(&["er", "ir"]),
            L::tags(&["MDF"]).exact(&["'t"]),
        )
        .combine(|pronoun, _| format!("{pronoun}'t")),
        MergeRule::pair(
            "PRO(mir) + MDF('n)",
            L::tags(&["PRO"]).exact(&["mir"]),
            L::tags(&["MDF"]).exact(&["'n"]),
        )
        .combine(|pronoun, _| format!("{pronoun}'n")),
        MergeRule::pair(
            "PRO(du) + MDF('st)",
            L::tags(&["PRO"]).exact(&["du"]),
            L::tags(&["MDF"]).exact(&["'st"]),
        )
        .combine(|pronoun, _| format!("{pronoun}'st")),
    ]
}

fn verb_and_pronoun() -> Vec<MergeRule> {
    vec![
        MergeRule::pair(
            "MDF('st) + PRO(du)",
            L::tags(&["MDF"]).exact(&["'st"]),
            L::tags(&["PRO"]).exact(&["du"]),
        )
        .combine(|_, _| "'stu".to_string()),
        MergeRule::pair(
            "HVF|MDF('t) + PRO(er,ir,men)",
            L::tags(&["HVF", "MDF"]).exact(&["'t"]),
            L::tags(&["PRO"]).exact(&["er", "ir", "men"]),
        )
        .combine(|_, pronoun| format!("t'{pronoun}")),
    ]
}

fn apostrophe_other() -> Vec<MergeRule> {
    vec![
        MergeRule::pair(
            "MDF('t) + ADJ",
            L::tags(&["MDF"]).exact(&["'t"]),
            L::tags(&["ADJ"]).no_apostrophe(),
        )
        .combine(|_, word| format!("t'{word}")),
        MergeRule::pair(
            "MDF('t) + VB",
            L::tags(&["MDF"]).exact(&["'t"]),
            L::tags(&["VB"]).no_apostrophe(),
        )
        .combine(|_, word| format!("t'{word}")),
        MergeRule::pair(
            "MDF('t) + NEG(nit)",
            L::tags(&["MDF"]).exact(&["'t"]),
            L::tags(&["NEG"]).exact(&["nit"]),
        )
        .combine(|_, word| format!("t'{word}")),
        MergeRule::pair(
            "WADV + MDF('l)",
            L::tags(&["WADV"]).no_apostrophe(),
            L::tags(&["MDF"]).exact(&["'l"]),
        )
        .combine(|adverb, _| format!("{adverb}'l")),
        MergeRule::pair(
            "D('s) + N",
            L::tags(&["D"]).exact(&["'s"]),
            L::tags(&["N"]).no_apostrophe(),
        )
        .combine(|_, noun| format!("s'{noun}")),
        MergeRule::pair(
            "WPRO(vos) + PRO('tu)",
            L::tags(&["WPRO"]).exact(&["vos"]),
            L::tags(&["PRO"]).exact(&["'tu"]),
        )
        .combine(|pronoun, _| format!("{pronoun}'tu")),
    ]
}

/// Contractions the annotators left unmarked
fn no_mark() -> Vec<MergeRule> {
    vec![MergeRule::pair(
        "finite(st) + PRO(du)",
        L::tags(FINITE).ending("st").word_final(),
        L::tags(&["PRO"]).exact(&["du"]),
    )
    .combine(|verb, _| format!("{verb}u"))]
}

#[cfg(test)]
mod tests {
    use super::super::tests::leaves;
    use super::super::MergeCatalogue;

    fn merged(terminals: &[(&str, &str)]) -> Vec<(String, String)> {
        MergeCatalogue::inline()
            .merge(leaves(terminals))
            .into_iter()
            .map(|leaf| (leaf.pos, leaf.rom))
            .collect()
    }

    fn one(pos: &str, rom: &str) -> Vec<(String, String)> {
        vec![(pos.to_string(), rom.to_string())]
    }

    #[test]
    fn test_marked_pairs_join_with_tilde() {
        assert_eq!(merged(&[("P", "oyf@"), ("D", "@n")]), one("P~D", "oyf~n"));
        assert_eq!(merged(&[("TO", "tsu@"), ("VB", "@geyn")]), one("TO~VB", "tsu~geyn"));
        assert_eq!(
            merged(&[("P", "far@"), ("D", "@a@"), ("N", "@yorn")]),
            one("P~D~N", "far~a~yorn")
        );
    }

    #[test]
    fn test_tag_suffix_blocks_merge() {
        assert_eq!(
            merged(&[("P-1", "oyf@"), ("D", "@n")]),
            vec![
                ("P".to_string(), "oyf".to_string()),
                ("D".to_string(), "n".to_string())
            ]
        );
        assert_eq!(merged(&[("PRO-2", "'s"), ("VBF", "iz")]).len(), 2);
    }

    #[test]
    fn test_dbl_extra_required() {
        assert_eq!(
            merged(&[("P-DBL", "tsu@"), ("DR+P", "@dertsu")]),
            one("P~DR+P", "tsu~dertsu")
        );
        assert_eq!(merged(&[("P", "tsu@"), ("DR+P", "@dertsu")]).len(), 2);
    }

    #[test]
    fn test_unmarked_contractions() {
        assert_eq!(merged(&[("PRO", "'s"), ("VBF", "iz")]), one("PRO~VBF", "s'iz"));
        assert_eq!(merged(&[("ES", "'s"), ("VBF", "i'")]), one("ES~VBF", "s'i'"));
        assert_eq!(merged(&[("PRO", "'kh"), ("HVF", "hob")]), one("PRO~HVF", "kh'hob"));
        assert_eq!(merged(&[("PRO", "ikh"), ("MDF", "'l")]), one("PRO~MDF", "ikh'l"));
        assert_eq!(merged(&[("PRO", "mir"), ("MDF", "'n")]), one("PRO~MDF", "mir'n"));
        assert_eq!(merged(&[("MDF", "'st"), ("PRO", "du")]), one("MDF~PRO", "'stu"));
        assert_eq!(merged(&[("HVF", "'t"), ("PRO", "men")]), one("HVF~PRO", "t'men"));
        assert_eq!(merged(&[("MDF", "'t"), ("NEG", "nit")]), one("MDF~NEG", "t'nit"));
        assert_eq!(merged(&[("WADV", "vu"), ("MDF", "'l")]), one("WADV~MDF", "vu'l"));
        assert_eq!(merged(&[("D", "'s"), ("N", "kind")]), one("D~N", "s'kind"));
        assert_eq!(merged(&[("WPRO", "vos"), ("PRO", "'tu")]), one("WPRO~PRO", "vos'tu"));
    }

    #[test]
    fn test_marked_start_and_i() {
        assert_eq!(merged(&[("ES", "s'@"), ("VBF", "@i'")]), one("ES~VBF", "s'i'"));
    }

    #[test]
    fn test_no_mark_du() {
        assert_eq!(merged(&[("VBF", "veyst"), ("PRO", "du")]), one("VBF~PRO", "veystu"));
        assert_eq!(merged(&[("VBF", "@veyst"), ("PRO", "du")]), one("VBF~PRO", "veystu"));
        // text must end in "st", not in a marker
        assert_eq!(merged(&[("VBF", "veyst@"), ("PRO", "du")]).len(), 2);
    }

    #[test]
    fn test_apostrophe_blocks_verb_contraction() {
        assert_eq!(merged(&[("PRO", "'s"), ("VBF", "i'")]), one("PRO~VBF", "s'i'"));
        assert_eq!(merged(&[("PRO", "'s"), ("MDF", "'t")]).len(), 2);
    }
}
