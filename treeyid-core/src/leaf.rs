//! Terminal tree nodes and their split classification
//!
//! A treebank terminal looks like `(TAG text)`. The text may carry a gloss
//! after `^` and an `@` at either end marking that the token was split off a
//! larger source word. Markers and gloss are read into fields when the leaf is
//! built and written back by [`Leaf::tree_text`].

use regex::Regex;
use std::sync::LazyLock;

/// Joins tags (and inline-merged text) of merged leaves
pub const TAG_SEPARATOR: char = '~';

/// Marks a side of a leaf where a source word was split
pub const SPLIT_MARKER: char = '@';

const GLOSS_SEPARATOR: char = '^';

/// Trailing index and function suffixes kept apart from the tag
static POS_EXTRA: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tag>.+?)(?P<extra>(?:-(?:1|2|DBL|RSP|LFD))+)$")
        .expect("pos extra pattern is valid")
});

/// Position of a leaf within a split source word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitMark {
    /// A complete token
    Unmarked,
    /// Marked after only
    Start,
    /// Marked on both sides
    Middle,
    /// Marked before only
    End,
}

/// A terminal node, or a composite built by merging adjacent terminals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leaf {
    /// Part-of-speech tag; `~`-joined for composites
    pub pos: String,
    /// Index or function suffix such as `-DBL` or `-1`
    pub pos_extra: Option<String>,
    /// Surface text as written in the tree, without markers or gloss
    pub text: String,
    /// Romanized form with tree placeholders decoded
    pub rom: String,
    pub gloss: Option<String>,
    pub split_before: bool,
    pub split_after: bool,
    /// Index among the tree's non-empty terminals
    pub position: usize,
    /// Constituent leaves when this leaf was produced by a merge
    pub children: Vec<Leaf>,
    /// Script form
    pub yid: String,
    /// Phonetic code of the script form
    pub ycode: String,
}

impl Leaf {
    /// Build a leaf from a terminal's tag and text.
    ///
    /// Returns `None` when nothing is left of the text after the markers and
    /// gloss are taken off.
    pub fn from_terminal(tag: &str, word: &str) -> Option<Leaf> {
        let (pos, pos_extra) = match POS_EXTRA.captures(tag) {
            Some(caps) => (caps["tag"].to_string(), Some(caps["extra"].to_string())),
            None => (tag.to_string(), None),
        };

        let (mut text, gloss) = match word.split_once(GLOSS_SEPARATOR) {
            Some((text, gloss)) => (text, Some(gloss.to_string())),
            None => (word, None),
        };

        let split_before = text.starts_with(SPLIT_MARKER);
        let split_after = text.ends_with(SPLIT_MARKER);
        if split_before {
            text = &text[SPLIT_MARKER.len_utf8()..];
        }
        if split_after {
            text = text.strip_suffix(SPLIT_MARKER).unwrap_or(text);
        }
        if text.is_empty() {
            return None;
        }

        Some(Leaf {
            pos,
            pos_extra,
            text: text.to_string(),
            rom: decode_placeholder(text).to_string(),
            gloss,
            split_before,
            split_after,
            position: 0,
            children: Vec::new(),
            yid: String::new(),
            ycode: String::new(),
        })
    }

    /// Build a composite from the leaves it replaces.
    ///
    /// Composites carry no split markers and start where their first child does.
    pub fn composite(pos: String, rom: String, gloss: Option<String>, children: Vec<Leaf>) -> Leaf {
        let position = children.first().map_or(0, |child| child.position);
        Leaf {
            pos,
            pos_extra: None,
            text: rom.clone(),
            rom,
            gloss,
            split_before: false,
            split_after: false,
            position,
            children,
            yid: String::new(),
            ycode: String::new(),
        }
    }

    pub fn is_composite(&self) -> bool {
        !self.children.is_empty()
    }

    /// Position of the last original terminal this leaf covers
    pub fn end_position(&self) -> usize {
        self.children.last().map_or(self.position, |child| child.position)
    }

    /// Number of `~`-separated parts in the tag
    pub fn tag_arity(&self) -> usize {
        self.pos.split(TAG_SEPARATOR).count()
    }

    pub fn split_mark(&self) -> SplitMark {
        match (self.split_before, self.split_after) {
            (false, false) => SplitMark::Unmarked,
            (false, true) => SplitMark::Start,
            (true, true) => SplitMark::Middle,
            (true, false) => SplitMark::End,
        }
    }

    pub fn is_split_start(&self) -> bool {
        self.split_mark() == SplitMark::Start
    }

    pub fn is_split_middle(&self) -> bool {
        self.split_mark() == SplitMark::Middle
    }

    pub fn is_split_end(&self) -> bool {
        self.split_mark() == SplitMark::End
    }

    /// Render as a tree terminal, restoring suffix, markers and gloss
    pub fn tree_text(&self) -> String {
        let mut out = String::with_capacity(self.pos.len() + self.text.len() + 4);
        out.push('(');
        out.push_str(&self.pos);
        if let Some(extra) = &self.pos_extra {
            out.push_str(extra);
        }
        out.push(' ');
        if self.split_before {
            out.push(SPLIT_MARKER);
        }
        out.push_str(&self.text);
        if self.split_after {
            out.push(SPLIT_MARKER);
        }
        if let Some(gloss) = &self.gloss {
            out.push(GLOSS_SEPARATOR);
            out.push_str(gloss);
        }
        out.push(')');
        out
    }
}

/// Tree placeholders for characters the bracket format cannot hold
fn decode_placeholder(text: &str) -> &str {
    match text {
        "-LRB-" => "(",
        "-RRB-" => ")",
        "%EXCL%" => "!",
        other => other,
    }
}

/// Inverse of the placeholder decoding, used when text goes back into a tree
pub fn encode_placeholder(text: &str) -> &str {
    match text {
        "(" => "-LRB-",
        ")" => "-RRB-",
        "!" => "%EXCL%",
        other => other,
    }
}
