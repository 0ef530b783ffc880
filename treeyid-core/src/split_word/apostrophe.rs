//! Contractions written with an apostrophe
//!
//! The apostrophe stays with the part it was written on: `ס' איז` for a
//! shortened pronoun, `איכ 'ל` for a shortened verb.

use super::constants::*;
use super::SplitRules;
use crate::error::Result;

const KEEP_LEFT: &str = "${word1}' ${word2}";
const KEEP_RIGHT: &str = "${word1} '${word2}";

fn apostrophe_after(prefix: &str) -> String {
    format!("^(?P<word1>{prefix}){APOSTROPHE}(?P<word2>.*)$")
}

pub(super) fn register(rules: &mut SplitRules) -> Result<()> {
    // s' + verb or i'
    for pos in ["ES~MDF", "ES~VBF", "ES~HVF", "ES~BEF"] {
        rules.add(pos, &apostrophe_after(SAMEKH), KEEP_LEFT)?;
    }

    // s' or kh' + verb
    for pos in ["PRO~MDF", "PRO~VBF", "PRO~HVF", "PRO~BEF", "PRO~VLF"] {
        rules.add(pos, &apostrophe_after(SAMEKH), KEEP_LEFT)?;
        rules.add(pos, &apostrophe_after(KAF), KEEP_LEFT)?;
    }

    // m'et
    rules.add("PRO~MDF", &apostrophe_after(MEM), KEEP_LEFT)?;

    // ikh'l er't mir'n du'st
    rules.add(
        "PRO~MDF",
        &apostrophe_after(&alternation(&[PRO_PREFIXES])),
        KEEP_RIGHT,
    )?;
    rules.add("WADV~MDF", &apostrophe_after(VU), KEEP_RIGHT)?;

    // t' + pronoun, adjective, verb or negation
    for pos in ["MDF~PRO", "HVF~PRO", "MDF~ADJ", "MDF~VB", "MDF~NEG"] {
        rules.add(pos, &apostrophe_after(TET), KEEP_LEFT)?;
    }

    rules.add("D~N", &apostrophe_after(&alternation(&[D_PREFIXES])), KEEP_LEFT)?;

    rules.add(
        "WPRO~PRO",
        &format!("^(?P<word1>{VOS}){APOSTROPHE}(?P<word2>{TU})$"),
        KEEP_RIGHT,
    )?;

    Ok(())
}
