//! Per-tree output records
//!
//! A [`TreeRecord`] holds the processed tree text and one [`LeafInfo`] per
//! leaf. Composites are listed as a source token (`s`) followed by their
//! children as tree tokens (`t`); a leaf that was never merged is both (`st`).

use crate::leaf::Leaf;
use serde::{Deserialize, Serialize};

/// Identifier recorded for metadata-only trees
pub const NO_TREE_ID: &str = "notreeid";

/// Role of a leaf-info entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeafType {
    /// A written word formed by merging tree tokens
    #[serde(rename = "s")]
    Source,
    /// A tree token that is part of a merged word
    #[serde(rename = "t")]
    Tree,
    /// A tree token that is a written word on its own
    #[serde(rename = "st")]
    SourceAndTree,
}

impl LeafType {
    /// Whether the entry corresponds to a terminal of the tree
    pub fn is_tree_token(self) -> bool {
        matches!(self, LeafType::Tree | LeafType::SourceAndTree)
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One entry of a tree's leaf listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafInfo {
    pub start: usize,
    /// Last covered position, inclusive; composites only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
    pub rom: String,
    pub pos: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_extra: Option<String>,
    pub yid: String,
    pub ycode: String,
    pub ltype: LeafType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub split_before: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub split_after: bool,
}

impl LeafInfo {
    fn from_leaf(leaf: &Leaf, ltype: LeafType) -> Self {
        let end = (ltype == LeafType::Source).then(|| leaf.end_position());
        Self {
            start: leaf.position,
            end,
            rom: leaf.rom.clone(),
            pos: leaf.pos.clone(),
            pos_extra: leaf.pos_extra.clone(),
            yid: leaf.yid.clone(),
            ycode: leaf.ycode.clone(),
            ltype,
            gloss: leaf.gloss.clone(),
            split_before: leaf.split_before,
            split_after: leaf.split_after,
        }
    }

    /// Flatten merged leaves into the listing order
    pub fn listing(leaves: &[Leaf]) -> Vec<LeafInfo> {
        let mut out = Vec::with_capacity(leaves.len());
        for leaf in leaves {
            if leaf.is_composite() {
                out.push(Self::from_leaf(leaf, LeafType::Source));
                out.extend(
                    leaf.children
                        .iter()
                        .map(|child| Self::from_leaf(child, LeafType::Tree)),
                );
            } else {
                out.push(Self::from_leaf(leaf, LeafType::SourceAndTree));
            }
        }
        out
    }
}

/// A processed tree with its leaf listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeRecord {
    pub tree_id: String,
    pub tree: String,
    pub leaves: Vec<LeafInfo>,
}

impl TreeRecord {
    /// Record for a tree that carries no identifier and is not processed
    pub fn metadata_only(tree: &str) -> Self {
        Self {
            tree_id: NO_TREE_ID.to_string(),
            tree: tree.to_string(),
            leaves: Vec::new(),
        }
    }

    pub fn is_metadata_only(&self) -> bool {
        self.tree_id == NO_TREE_ID
    }

    /// Entries that map one-to-one onto the tree's non-empty terminals
    pub fn tree_tokens(&self) -> impl Iterator<Item = &LeafInfo> {
        self.leaves.iter().filter(|info| info.ltype.is_tree_token())
    }
}
