//! Writing processed leaf text back onto the tree's terminals

use crate::error::{CoreError, Result};
use crate::leaf::encode_placeholder;
use crate::record::LeafInfo;
use crate::tree::PsdTree;
use serde::{Deserialize, Serialize};

/// Which form of each leaf goes into the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSource {
    /// Romanized text; the tree keeps its original tags
    #[default]
    Romanized,
    /// Script text; tags are taken from the listing
    Script,
}

/// Put the tree-token entries of `listing` onto the terminals of `tree`.
///
/// Glosses are removed from the tree since the listing carries them. The
/// number of tree-token entries must equal the number of non-empty terminals.
pub fn reintegrate(tree: &mut PsdTree, listing: &[LeafInfo], source: TextSource) -> Result<()> {
    let infos: Vec<&LeafInfo> = listing
        .iter()
        .filter(|info| info.ltype.is_tree_token())
        .collect();

    let tree_leaves = tree.nonempty_leaves().len();
    if tree_leaves != infos.len() {
        return Err(CoreError::LeafCountMismatch {
            tree_leaves,
            supplied: infos.len(),
            tree: tree.serialize(),
        });
    }

    for (leaf, info) in tree.nonempty_leaves_mut().into_iter().zip(infos) {
        let text = match source {
            TextSource::Romanized => &info.rom,
            TextSource::Script => {
                leaf.pos = info.pos.clone();
                &info.yid
            }
        };
        leaf.text = encode_placeholder(text).to_string();
        leaf.gloss = None;
    }
    Ok(())
}
