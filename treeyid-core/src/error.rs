//! Error types for tree preparation and leaf processing
//!
//! Structural problems abort the tree they occur in and carry the offending
//! tree text so the corpus can be inspected by hand. A rule that simply does
//! not match is never an error.

use thiserror::Error;

/// Errors raised while loading tables, preparing trees or processing leaves
#[derive(Debug, Error)]
pub enum CoreError {
    /// Bracket nesting does not describe a single well-formed tree
    #[error("malformed tree at byte {position}: {reason}\n{tree}")]
    MalformedTree {
        position: usize,
        reason: String,
        tree: String,
    },

    /// Serializing a freshly parsed tree gave different text
    #[error("tree did not round-trip\ninput:  {input}\noutput: {output}")]
    RoundTrip { input: String, output: String },

    /// A terminal has no text once split markers and gloss are removed
    #[error("empty leaf text for tag {tag} in tree: {tree}")]
    EmptyLeaf { tag: String, tree: String },

    /// Reintegration was handed a different number of leaves than the tree has
    #[error("tree has {tree_leaves} leaves but {supplied} were supplied\n{tree}")]
    LeafCountMismatch {
        tree_leaves: usize,
        supplied: usize,
        tree: String,
    },

    /// A merged tag does not agree with the number of merged leaves
    #[error("tag {pos} has {parts} parts but {rom} has {children} children")]
    TagArity {
        pos: String,
        rom: String,
        parts: usize,
        children: usize,
    },

    /// A mandatory script split found no rule
    #[error("no split rule for {pos} matched {script}")]
    SplitNotFound { pos: String, script: String },

    /// A mandatory script split produced the wrong number of parts
    #[error("split of {script} ({pos}) gave [{parts}] for children [{children}]")]
    SplitArity {
        pos: String,
        script: String,
        parts: String,
        children: String,
    },

    /// A lookup table line has the wrong number of columns
    #[error("table {table}, line {line}: expected {expected} columns, found {found}")]
    TableFormat {
        table: &'static str,
        line: usize,
        expected: &'static str,
        found: usize,
    },

    /// A split rule could not be compiled
    #[error("invalid split pattern for {pos}: {source}")]
    Pattern {
        pos: String,
        #[source]
        source: regex::Error,
    },

    /// A prepared line is not `tree_id<TAB>tree`
    #[error("line {line}: expected tree id and tree separated by a tab: {content}")]
    MalformedLine { line: usize, content: String },

    /// A raw tree block opens and closes a different number of brackets
    #[error("unbalanced tree block: {0}")]
    Unbalanced(String),

    /// A raw tree block is not wrapped in parentheses
    #[error("tree is not wrapped in parentheses: {0}")]
    Unwrapped(String),

    /// Material left over after the first complete tree
    #[error("more than one tree: {0}")]
    MultipleTrees(String),

    /// Reading a table directory failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Any of the above, raised while processing the named tree
    #[error("tree {tree_id}: {source}")]
    InTree {
        tree_id: String,
        #[source]
        source: Box<CoreError>,
    },
}

impl CoreError {
    /// Attach the identifier of the tree being processed
    pub fn in_tree(self, tree_id: &str) -> Self {
        CoreError::InTree {
            tree_id: tree_id.to_string(),
            source: Box::new(self),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
