//! Raw `.psd` files to one prepared tree per line
//!
//! Pretty-printed trees are flattened, optionally rewritten by
//! [`CorpusMods`], and then prepared: the id is split off, metadata is
//! removed or emptied, and empty elements are wrapped as `-NONE-` so that
//! only real tokens remain as terminals. Trees that cannot be used are
//! dropped with a warning; trees without an id are kept as metadata-only.

mod corpus_mods;

pub use corpus_mods::CorpusMods;

use crate::error::{CoreError, Result};
use crate::record::NO_TREE_ID;
use crate::tree::PsdTree;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static RE_LEAVES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^ ]+?) ([^ ]+?)\)").expect("leaf pattern is valid"));
static RE_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" \(ID ([^)]+)\)$").expect("id pattern is valid"));
static RE_ZERO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^ ]+?) (0)\)").expect("zero pattern is valid"));
static RE_TRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^ ]+?) (\*[^)]*)\)").expect("trace pattern is valid"));
static RE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(CODE (?P<code>[^ ]+?)\)").expect("code pattern is valid"));
static RE_CODE_LEAF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\((?P<pos>[^ ]+?) \(CODE \{[^ }]+?\}\)\)").expect("code leaf pattern is valid")
});
static RE_BAD_LEAF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^ ]+? ?\)").expect("bad leaf pattern is valid"));
static RE_SPACES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").expect("space pattern is valid"));

const META_LABELS: [&str; 3] = ["CODE", "METADATA", "REF"];

/// What happens to `CODE`, `METADATA` and `REF` material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MetaHandling {
    /// Remove the subtrees
    #[default]
    Delete,
    /// Keep `CODE` nodes with their content as an empty element
    KeepEmpty,
}

/// Options for preparing trees
#[derive(Debug, Clone, Copy, Default)]
pub struct PrepOptions {
    /// Turn paren codes into `OPAREN`/`CPAREN` tokens
    pub keep_parens: bool,
    pub meta: MetaHandling,
    /// Drop trees whose root is `META`
    pub drop_meta_roots: bool,
}

/// Outcome of preparing one tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvStatus {
    Ok,
    NoTreeId,
    RootCode,
    RootMeta,
    RootRef,
    HasBreak,
    TreeEmpty,
    BadLeaf,
}

impl fmt::Display for ConvStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConvStatus::Ok => "OK",
            ConvStatus::NoTreeId => "NO_TREE_ID",
            ConvStatus::RootCode => "ROOT_CODE",
            ConvStatus::RootMeta => "ROOT_META",
            ConvStatus::RootRef => "ROOT_REF",
            ConvStatus::HasBreak => "HAS_BREAK",
            ConvStatus::TreeEmpty => "TREE_EMPTY",
            ConvStatus::BadLeaf => "BAD_LEAF",
        };
        f.write_str(name)
    }
}

/// A prepared tree and how it fared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedTree {
    pub status: ConvStatus,
    pub tree_id: Option<String>,
    pub tree: String,
}

impl PreparedTree {
    fn new(status: ConvStatus, tree_id: Option<&str>, tree: String) -> Self {
        Self {
            status,
            tree_id: tree_id.map(str::to_string),
            tree,
        }
    }

    /// Whether the tree goes into the prepared file
    pub fn is_kept(&self) -> bool {
        matches!(self.status, ConvStatus::Ok | ConvStatus::NoTreeId)
    }

    /// `tree_id<TAB>tree`, with `notreeid` for metadata-only trees
    pub fn line(&self) -> String {
        format!(
            "{}\t{}",
            self.tree_id.as_deref().unwrap_or(NO_TREE_ID),
            self.tree
        )
    }
}

/// Collect the bracketed blocks of a `.psd` file, one flat string each.
///
/// A block starts on a line beginning with `(` and runs until the next such
/// line. Whitespace is collapsed to single spaces.
pub fn read_psd(content: &str) -> Result<Vec<String>> {
    let mut blocks = Vec::new();
    let mut lines: Vec<&str> = Vec::new();
    for line in content.lines() {
        if line.starts_with('(') && !lines.is_empty() {
            blocks.push(flatten(&lines)?);
            lines.clear();
        }
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }
    if !lines.is_empty() {
        blocks.push(flatten(&lines)?);
    }
    Ok(blocks)
}

fn flatten(lines: &[&str]) -> Result<String> {
    let joined = lines.iter().map(|line| line.trim()).collect::<Vec<_>>().join(" ");
    let flat = RE_SPACES.replace_all(&joined, " ").trim().to_string();
    if flat.matches('(').count() != flat.matches(')').count() {
        return Err(CoreError::Unbalanced(flat));
    }
    Ok(flat)
}

/// Byte index just past the bracketed group opening at or after `start`
fn end_of_tree(tree: &str, start: usize) -> Option<usize> {
    let bytes = tree.as_bytes();
    let mut index = start;
    while bytes.get(index) == Some(&b' ') {
        index += 1;
    }
    if bytes.get(index) != Some(&b'(') {
        return None;
    }
    let mut depth = 0usize;
    for (offset, byte) in bytes[index..].iter().enumerate() {
        match byte {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(index + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Remove every subtree labeled `label`, tidying the spaces left behind
fn delete_meta(tree: &str, label: &str) -> Result<String> {
    let needle = format!("({label}");
    let mut tree = tree.to_string();
    while let Some(start) = tree.find(&needle) {
        let end = end_of_tree(&tree, start).ok_or_else(|| CoreError::Unbalanced(tree.clone()))?;
        log::debug!("removed {}", &tree[start..end]);
        tree.replace_range(start..end, "");
        let tidied = RE_SPACES.replace_all(&tree, " ").replace(" )", ")");
        tree = tidied;
    }
    Ok(tree.trim().to_string())
}

/// Prepare one flat tree block
pub fn prepare_tree(block: &str, options: &PrepOptions) -> Result<PreparedTree> {
    let block = block.replace("-SPE", "");
    let inner = block
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| CoreError::Unwrapped(block.clone()))?
        .trim();

    let Some(caps) = RE_ID.captures(inner) else {
        return Ok(PreparedTree::new(ConvStatus::NoTreeId, None, inner.to_string()));
    };
    let tree_id = caps.get(1).map_or("", |m| m.as_str());
    let mut tree = inner[..caps.get(0).map_or(inner.len(), |m| m.start())].to_string();
    let id = Some(tree_id);

    if tree.starts_with("(CODE ") {
        return Ok(PreparedTree::new(ConvStatus::RootCode, id, tree));
    }
    if options.drop_meta_roots && tree.starts_with("(META ") {
        return Ok(PreparedTree::new(ConvStatus::RootMeta, id, tree));
    }
    if tree.starts_with("(REF ") {
        return Ok(PreparedTree::new(ConvStatus::RootRef, id, tree));
    }
    if tree.contains("(BREAK ") {
        return Ok(PreparedTree::new(ConvStatus::HasBreak, id, tree));
    }

    if options.keep_parens {
        tree = tree
            .replace("(CODE <paren>)", "(OPAREN -LRB-)")
            .replace("(CODE <$$paren>)", "(CPAREN -RRB-)");
    }

    // (X (CODE {..})) would become (X ) once the code is gone
    tree = RE_CODE_LEAF.replace_all(&tree, "(${pos} 0)").into_owned();

    if options.meta == MetaHandling::Delete {
        for label in META_LABELS {
            if tree.contains(&format!("({label}")) {
                tree = delete_meta(&tree, label)?;
            }
        }
    }

    let leaves: Vec<(String, String)> = RE_LEAVES
        .captures_iter(&tree)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect();
    if !leaves
        .iter()
        .any(|(_, word)| word != "0" && !word.starts_with('*'))
    {
        return Ok(PreparedTree::new(ConvStatus::TreeEmpty, id, tree));
    }
    if RE_BAD_LEAF.is_match(&tree) {
        return Ok(PreparedTree::new(ConvStatus::BadLeaf, id, tree));
    }

    match end_of_tree(&tree, 0) {
        Some(end) if end == tree.len() => {}
        Some(_) => return Err(CoreError::MultipleTrees(tree)),
        None => return Err(CoreError::Unbalanced(tree)),
    }

    tree = RE_ZERO.replace_all(&tree, "(${1} (-NONE- ${2}))").into_owned();
    tree = RE_TRACE.replace_all(&tree, "(${1} (-NONE- ${2}))").into_owned();
    tree = tree.replace("-OB1", "-ACC").replace("-OB2", "-DTV");
    if options.meta == MetaHandling::KeepEmpty {
        tree = RE_CODE.replace_all(&tree, "(CODE (-NONE- ${code}))").into_owned();
    }

    check_round_trip(&tree, leaves.len())?;
    Ok(PreparedTree::new(ConvStatus::Ok, id, tree))
}

/// The prepared text should parse, serialize unchanged, and keep its terminals
fn check_round_trip(tree: &str, leaf_count: usize) -> Result<()> {
    let parsed = PsdTree::parse(tree)?;
    let serialized = parsed.serialize();
    if serialized != tree {
        log::warn!("prepared tree does not round-trip\ntree:   {tree}\nparsed: {serialized}");
    }
    let found = RE_LEAVES.find_iter(tree).count();
    if found != leaf_count {
        log::warn!("{leaf_count} leaves before wrapping empty elements, {found} after: {tree}");
    }
    Ok(())
}

/// Prepare every tree of a `.psd` file, applying corpus modifications first
/// when given. Dropped trees are returned too, with their status.
pub fn prepare_file(
    content: &str,
    options: &PrepOptions,
    mods: Option<&CorpusMods>,
) -> Result<Vec<PreparedTree>> {
    let mut prepared = Vec::new();
    for block in read_psd(content)? {
        let block = match mods {
            Some(mods) => mods.apply(&block),
            None => block,
        };
        let tree = prepare_tree(&block, options)?;
        if !tree.is_kept() {
            log::warn!(
                "dropped tree {} ({}): {}",
                tree.tree_id.as_deref().unwrap_or(NO_TREE_ID),
                tree.status,
                tree.tree
            );
        }
        prepared.push(tree);
    }
    Ok(prepared)
}
