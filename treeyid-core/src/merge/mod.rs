//! Re-joining leaves that the treebank split out of one written word
//!
//! A [`MergeCatalogue`] is an ordered list of [`MergeRule`]s. Each rule makes
//! one left-to-right pass over the leaves; a window of two or three adjacent
//! leaves matching the rule's patterns becomes a composite leaf holding the
//! originals as children, and the scan continues after the window.
//! Composites carry no split marks and a `~`-joined tag, so no later rule
//! matches them.
//!
//! Two catalogues exist for the two ways the corpus marks splits:
//!
//! - [`MergeCatalogue::flagged`]: every rule requires a start-marked leaf
//!   followed by an end-marked one (with a middle-marked leaf between for
//!   three-way splits). Parts are concatenated directly.
//! - [`MergeCatalogue::inline`]: each rule states the marks it needs, some
//!   rules match unmarked leaves. A tag suffix such as `-1` only matches a
//!   rule that names it. Parts are joined with `~` and glosses are combined.

mod flagged;
mod inline;

use crate::leaf::{Leaf, SplitMark, TAG_SEPARATOR};
use serde::{Deserialize, Serialize};

/// Builds the romanized text of a two-leaf composite from the parts' text
pub type Combiner = fn(&str, &str) -> String;

/// Conditions on a single leaf
#[derive(Debug, Clone, Copy)]
pub struct LeafPattern {
    tags: &'static [&'static str],
    extra: Option<&'static str>,
    words: &'static [&'static str],
    suffix: Option<&'static str>,
    mark: Option<SplitMark>,
    word_final: bool,
    no_apostrophe: bool,
}

impl LeafPattern {
    /// Leaf whose tag is one of `tags`
    pub fn tags(tags: &'static [&'static str]) -> Self {
        Self {
            tags,
            extra: None,
            words: &[],
            suffix: None,
            mark: None,
            word_final: false,
            no_apostrophe: false,
        }
    }

    /// Text must be one of `words`
    pub fn words(mut self, words: &'static [&'static str]) -> Self {
        self.words = words;
        self
    }

    /// Text must be one of `words` and the leaf must be unmarked
    pub fn exact(self, words: &'static [&'static str]) -> Self {
        self.words(words).at(SplitMark::Unmarked)
    }

    pub fn ending(mut self, suffix: &'static str) -> Self {
        self.suffix = Some(suffix);
        self
    }

    /// Tag suffix such as `-DBL` must be present
    pub fn extra(mut self, extra: &'static str) -> Self {
        self.extra = Some(extra);
        self
    }

    pub fn at(mut self, mark: SplitMark) -> Self {
        self.mark = Some(mark);
        self
    }

    /// No split marker after the text
    pub fn word_final(mut self) -> Self {
        self.word_final = true;
        self
    }

    pub fn no_apostrophe(mut self) -> Self {
        self.no_apostrophe = true;
        self
    }

    pub fn matches(&self, leaf: &Leaf) -> bool {
        self.tags.contains(&leaf.pos.as_str())
            && self
                .extra
                .map_or(true, |extra| leaf.pos_extra.as_deref() == Some(extra))
            && (self.words.is_empty() || self.words.contains(&leaf.rom.as_str()))
            && self.suffix.map_or(true, |suffix| leaf.rom.ends_with(suffix))
            && self.mark.map_or(true, |mark| leaf.split_mark() == mark)
            && !(self.word_final && leaf.split_after)
            && !(self.no_apostrophe && leaf.rom.contains('\''))
    }

    /// Like [`matches`](Self::matches), but a tag suffix the pattern does not
    /// name rejects the leaf
    pub fn matches_full_tag(&self, leaf: &Leaf) -> bool {
        self.matches(leaf) && (self.extra.is_some() || leaf.pos_extra.is_none())
    }
}

/// Adjacent leaves a rule looks at
#[derive(Debug, Clone, Copy)]
pub enum Window {
    Pair([LeafPattern; 2], Option<Combiner>),
    Triple([LeafPattern; 3]),
}

impl Window {
    fn patterns(&self) -> &[LeafPattern] {
        match self {
            Window::Pair(patterns, _) => patterns,
            Window::Triple(patterns) => patterns,
        }
    }

    pub fn width(&self) -> usize {
        self.patterns().len()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MergeRule {
    pub name: &'static str,
    pub window: Window,
}

impl MergeRule {
    pub fn pair(name: &'static str, first: LeafPattern, second: LeafPattern) -> Self {
        Self {
            name,
            window: Window::Pair([first, second], None),
        }
    }

    pub fn triple(
        name: &'static str,
        first: LeafPattern,
        second: LeafPattern,
        third: LeafPattern,
    ) -> Self {
        Self {
            name,
            window: Window::Triple([first, second, third]),
        }
    }

    /// Replace the default text join of a pair rule
    pub fn combine(mut self, combiner: Combiner) -> Self {
        if let Window::Pair(patterns, _) = self.window {
            self.window = Window::Pair(patterns, Some(combiner));
        }
        self
    }
}

/// Which marking convention a corpus uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogueKind {
    /// Split marks read into flags, boundaries enforced for every rule
    #[default]
    Flags,
    /// Marks kept in the text, each rule checks its own
    Inline,
}

/// Whether the split-boundary condition is checked by the catalogue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Boundary {
    Enforced,
    PerRule,
}

/// Ordered merge rules and how composites are assembled
#[derive(Debug, Clone)]
pub struct MergeCatalogue {
    kind: CatalogueKind,
    boundary: Boundary,
    full_tags: bool,
    joiner: &'static str,
    join_glosses: bool,
    rules: Vec<MergeRule>,
}

impl MergeCatalogue {
    pub fn flagged() -> Self {
        Self {
            kind: CatalogueKind::Flags,
            boundary: Boundary::Enforced,
            full_tags: false,
            joiner: "",
            join_glosses: false,
            rules: flagged::rules(),
        }
    }

    pub fn inline() -> Self {
        Self {
            kind: CatalogueKind::Inline,
            boundary: Boundary::PerRule,
            full_tags: true,
            joiner: "~",
            join_glosses: true,
            rules: inline::rules(),
        }
    }

    pub fn for_kind(kind: CatalogueKind) -> Self {
        match kind {
            CatalogueKind::Flags => Self::flagged(),
            CatalogueKind::Inline => Self::inline(),
        }
    }

    pub fn kind(&self) -> CatalogueKind {
        self.kind
    }

    pub fn rules(&self) -> &[MergeRule] {
        &self.rules
    }

    /// Apply every rule in order
    pub fn merge(&self, leaves: Vec<Leaf>) -> Vec<Leaf> {
        self.rules
            .iter()
            .fold(leaves, |leaves, rule| self.apply(rule, leaves))
    }

    fn apply(&self, rule: &MergeRule, leaves: Vec<Leaf>) -> Vec<Leaf> {
        let width = rule.window.width();

        let mut starts = Vec::new();
        let mut index = 0;
        while index + width <= leaves.len() {
            if self.window_matches(rule, &leaves[index..index + width]) {
                starts.push(index);
                index += width;
            } else {
                index += 1;
            }
        }
        if starts.is_empty() {
            return leaves;
        }

        let mut out = Vec::with_capacity(leaves.len() - starts.len() * (width - 1));
        let mut starts = starts.into_iter().peekable();
        let mut iter = leaves.into_iter().enumerate();
        while let Some((index, leaf)) = iter.next() {
            if starts.next_if_eq(&index).is_some() {
                let mut group = Vec::with_capacity(width);
                group.push(leaf);
                group.extend(iter.by_ref().take(width - 1).map(|(_, leaf)| leaf));
                out.push(self.combine(rule, group));
            } else {
                out.push(leaf);
            }
        }
        out
    }

    fn window_matches(&self, rule: &MergeRule, window: &[Leaf]) -> bool {
        if self.boundary == Boundary::Enforced && !is_split_run(window) {
            return false;
        }
        rule.window
            .patterns()
            .iter()
            .zip(window)
            .all(|(pattern, leaf)| {
                if self.full_tags {
                    pattern.matches_full_tag(leaf)
                } else {
                    pattern.matches(leaf)
                }
            })
    }

    fn combine(&self, rule: &MergeRule, children: Vec<Leaf>) -> Leaf {
        let rom = match (&rule.window, children.as_slice()) {
            (Window::Pair(_, Some(combiner)), [first, second]) => {
                combiner(&first.rom, &second.rom)
            }
            _ => join(children.iter().map(|c| c.rom.as_str()), self.joiner),
        };
        let pos = join(
            children.iter().map(|c| c.pos.as_str()),
            &TAG_SEPARATOR.to_string(),
        );
        let gloss = if self.join_glosses {
            let glosses: Vec<&str> = children.iter().filter_map(|c| c.gloss.as_deref()).collect();
            (!glosses.is_empty()).then(|| glosses.join(&TAG_SEPARATOR.to_string()))
        } else {
            None
        };

        log::trace!("{}: {} {} at {}", rule.name, pos, rom, children[0].position);
        Leaf::composite(pos, rom, gloss, children)
    }
}

impl Default for MergeCatalogue {
    fn default() -> Self {
        Self::flagged()
    }
}

/// Start then end, or start, middle, end
fn is_split_run(window: &[Leaf]) -> bool {
    match window {
        [first, last] => first.is_split_start() && last.is_split_end(),
        [first, middle, last] => {
            first.is_split_start() && middle.is_split_middle() && last.is_split_end()
        }
        _ => false,
    }
}

fn join<'a>(parts: impl Iterator<Item = &'a str>, separator: &str) -> String {
    parts.collect::<Vec<_>>().join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Leaves from `(tag, word)` pairs, numbered in order
    pub(crate) fn leaves(terminals: &[(&str, &str)]) -> Vec<Leaf> {
        terminals
            .iter()
            .enumerate()
            .map(|(position, (tag, word))| {
                let mut leaf = Leaf::from_terminal(tag, word).unwrap();
                leaf.position = position;
                leaf
            })
            .collect()
    }

    fn summary(leaves: &[Leaf]) -> Vec<(String, String)> {
        leaves
            .iter()
            .map(|l| (l.pos.clone(), l.rom.clone()))
            .collect()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn test_pattern_conditions() {
        let leaf = &leaves(&[("VBF-1", "host@")])[0];
        assert!(LeafPattern::tags(&["VBF", "MDF"]).matches(leaf));
        assert!(!LeafPattern::tags(&["MDF"]).matches(leaf));
        assert!(LeafPattern::tags(&["VBF"]).ending("st").matches(leaf));
        assert!(!LeafPattern::tags(&["VBF"]).ending("zt").matches(leaf));
        assert!(LeafPattern::tags(&["VBF"]).words(&["host"]).matches(leaf));
        assert!(!LeafPattern::tags(&["VBF"]).exact(&["host"]).matches(leaf));
        assert!(LeafPattern::tags(&["VBF"]).at(SplitMark::Start).matches(leaf));
        assert!(LeafPattern::tags(&["VBF"]).extra("-1").matches(leaf));
        assert!(!LeafPattern::tags(&["VBF"]).extra("-DBL").matches(leaf));

        assert!(!LeafPattern::tags(&["VBF"]).word_final().matches(leaf));
        assert!(!LeafPattern::tags(&["VBF"]).matches_full_tag(leaf));
        assert!(LeafPattern::tags(&["VBF"]).extra("-1").matches_full_tag(leaf));

        let leaf = &leaves(&[("PRO", "kh'")])[0];
        assert!(!LeafPattern::tags(&["PRO"]).no_apostrophe().matches(leaf));
        assert!(LeafPattern::tags(&["PRO"]).matches_full_tag(leaf));
    }

    #[test]
    fn test_pair_merge() {
        let merged = MergeCatalogue::flagged().merge(leaves(&[("P", "tsu-@"), ("N", "@kind")]));
        assert_eq!(merged.len(), 1);
        let composite = &merged[0];
        assert_eq!(composite.pos, "P~N");
        assert_eq!(composite.rom, "tsu-kind");
        assert_eq!(composite.children.len(), 2);
        assert_eq!(composite.position, 0);
        assert_eq!(composite.end_position(), 1);
        assert!(composite.gloss.is_none());
    }

    #[test]
    fn test_unmarked_leaves_untouched_by_flagged() {
        let input = leaves(&[("P", "tsu"), ("N", "kind")]);
        let merged = MergeCatalogue::flagged().merge(input.clone());
        assert_eq!(merged, input);
    }

    #[test]
    fn test_scan_resumes_after_window() {
        let input = leaves(&[
            ("TO", "tsu@"),
            ("VB", "@geyn"),
            ("N", "hoyz"),
            ("TO", "tsu@"),
            ("VB", "@forn"),
        ]);
        let merged = MergeCatalogue::flagged().merge(input);
        assert_eq!(
            summary(&merged),
            pairs(&[("TO~VB", "tsugeyn"), ("N", "hoyz"), ("TO~VB", "tsuforn")])
        );
        assert_eq!(merged[2].position, 3);
    }

    #[test]
    fn test_combiner() {
        let merged = MergeCatalogue::flagged().merge(leaves(&[("HVF", "host@"), ("PRO", "@du")]));
        assert_eq!(summary(&merged), pairs(&[("HVF~PRO", "hostu")]));
    }

    #[test]
    fn test_inline_joins_text_and_glosses() {
        let merged = MergeCatalogue::inline().merge(leaves(&[
            ("P", "tsu-@^to"),
            ("N", "@kind^child"),
            ("PRO", "er^he"),
            ("MDF", "'t"),
        ]));
        assert_eq!(
            summary(&merged),
            pairs(&[("P~N", "tsu-~kind"), ("PRO~MDF", "er't")])
        );
        assert_eq!(merged[0].gloss.as_deref(), Some("to~child"));
        assert_eq!(merged[1].gloss.as_deref(), Some("he"));
    }

    #[test]
    fn test_catalogue_kinds() {
        assert_eq!(MergeCatalogue::for_kind(CatalogueKind::Inline).kind(), CatalogueKind::Inline);
        assert_eq!(MergeCatalogue::default().kind(), CatalogueKind::Flags);
        assert_eq!(MergeCatalogue::flagged().rules().len(), 43);
        assert_eq!(MergeCatalogue::inline().rules().len(), 47);
    }

    fn terminal() -> impl Strategy<Value = (&'static str, String)> {
        let tag = prop::sample::select(vec![
            "P", "D", "N", "PRO", "TO", "VB", "VBF", "MDF", "ADV", "RP", "WPRO", "FP", "ES",
        ]);
        let word = prop::sample::select(vec![
            "tsu", "n", "a", "kind", "du", "host", "s'", "'s", "vos", "zhe", "'t", "er", "geyn",
        ]);
        let mark = prop::sample::select(vec!["", "@"]);
        (tag, word, mark.clone(), mark)
            .prop_map(|(tag, word, before, after)| (tag, format!("{before}{word}{after}")))
    }

    fn flatten(leaves: &[Leaf]) -> Vec<usize> {
        leaves
            .iter()
            .flat_map(|leaf| {
                if leaf.is_composite() {
                    leaf.children.iter().map(|c| c.position).collect()
                } else {
                    vec![leaf.position]
                }
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_merge_is_idempotent(terminals in prop::collection::vec(terminal(), 0..12)) {
            let refs: Vec<(&str, &str)> = terminals.iter().map(|(t, w)| (*t, w.as_str())).collect();
            for catalogue in [MergeCatalogue::flagged(), MergeCatalogue::inline()] {
                let once = catalogue.merge(leaves(&refs));
                let twice = catalogue.merge(once.clone());
                prop_assert_eq!(&once, &twice);
            }
        }

        #[test]
        fn prop_merge_preserves_leaf_order(terminals in prop::collection::vec(terminal(), 0..12)) {
            let refs: Vec<(&str, &str)> = terminals.iter().map(|(t, w)| (*t, w.as_str())).collect();
            for catalogue in [MergeCatalogue::flagged(), MergeCatalogue::inline()] {
                let merged = catalogue.merge(leaves(&refs));
                prop_assert_eq!(flatten(&merged), (0..refs.len()).collect::<Vec<_>>());
                for leaf in merged.iter().filter(|l| l.is_composite()) {
                    prop_assert_eq!(leaf.tag_arity(), leaf.children.len());
                }
            }
        }
    }
}
