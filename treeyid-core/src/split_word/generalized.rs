//! Productive patterns: particle verbs, fused determiners, du after verbs

use super::constants::*;
use super::SplitRules;
use crate::error::Result;

const PAIR: &str = "${word1} ${word2}";
const HYPHEN_PAIR: &str = "${word1}- ${word2}";

pub(super) fn register(rules: &mut SplitRules) -> Result<()> {
    let particle = alternation(&[RP_PREFIXES, ADV_PREFIXES, RP_ADV_PREFIXES]);
    let p_prefix = alternation(&[P_PREFIXES]);

    for pos in [
        "RP~VBN",
        "RP~VB",
        "RP~VAN",
        "RP~VAG",
        "ADV~VBN",
        "ADV~VB",
        "ADV~VAN",
        "ADV~VAG",
        "RP-ADV~VB",
        "RP-ADV~VBN",
    ] {
        rules.add(pos, &format!("^(?P<word1>{particle})(?P<word2>.*)$"), PAIR)?;
    }

    // dagesh form first, the plain one would match its prefix
    for pos in ["RP~TO~VB", "ADV~TO~VB"] {
        for tsu in [TSU_DAGESH, TSU] {
            rules.add(
                pos,
                &format!("^(?P<word1>{particle})(?P<word2>{tsu})(?P<word3>.*)$"),
                &format!("${{word1}} {TSU} ${{word3}}"),
            )?;
        }
    }
    for tsu in [TSU_DAGESH, TSU] {
        rules.add(
            "TO~VB",
            &format!("^(?P<word1>{tsu})(?P<word2>.*)$"),
            &format!("{TSU} ${{word2}}"),
        )?;
    }

    rules.add(
        "P~D",
        &format!("^(?P<word1>.*)(?P<word2>{})$", alternation(&[D_SUFFIXES])),
        PAIR,
    )?;

    // st@ @du and s@ @tu both merge to -stu
    for pos in ["VBF~PRO", "MDF~PRO", "HVF~PRO", "BEF~PRO"] {
        rules.add(
            pos,
            &format!("^(?P<word1>.*{TET})(?P<word2>{VAV})$"),
            &format!("${{word1}} {DU}"),
        )?;
    }

    for pos in ["P~PRO", "P~N", "P~NPR", "P~DR+P"] {
        rules.add(pos, &format!("^(?P<word1>{p_prefix})(?P<word2>.*)$"), PAIR)?;
        rules.add(
            pos,
            &format!("^(?P<word1>{p_prefix})[-](?P<word2>.*)$"),
            HYPHEN_PAIR,
        )?;
    }

    rules.add(
        "P~D~N",
        &format!("^(?P<word1>.*{p_prefix})(?P<word2>{ALEF})(?P<word3>.*)$"),
        "${word1} ${word2} ${word3}",
    )?;

    for pos in ["ADV~FP", "WADV~FP", "WPRO~FP"] {
        rules.add(pos, &format!("^(?P<word1>.*)(?P<word2>{ZHE})$"), PAIR)?;
        rules.add(
            pos,
            &format!("^(?P<word1>.*)[-](?P<word2>{ZHE})$"),
            HYPHEN_PAIR,
        )?;
    }

    rules.add(
        "RP-N~VBN",
        &format!("^(?P<word1>{})(?P<word2>.*)$", alternation(&[RP_N_PREFIXES])),
        PAIR,
    )?;

    rules.add(
        "NEG~VAG",
        &format!("^(?P<word1>{})[-](?P<word2>.*)$", alternation(&[NIT_NISHT])),
        HYPHEN_PAIR,
    )?;

    rules.add("P~WPRO", &format!("^(?P<word1>{FAR})(?P<word2>{VOS})$"), PAIR)?;
    for tsu in [TSU_DAGESH, TSU] {
        rules.add(
            "P~WPRO",
            &format!("^(?P<word1>{tsu})(?P<word2>{VOS})$"),
            &format!("{TSU} ${{word2}}"),
        )?;
    }

    Ok(())
}
