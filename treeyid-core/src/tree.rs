//! Flat bracketed trees
//!
//! Only what the leaf pipeline needs: parse a one-line tree, hand out its
//! non-empty terminals in order, and serialize it back. Internal structure is
//! never rewritten here.

use crate::error::{CoreError, Result};
use crate::leaf::Leaf;

/// Tag of empty elements such as traces and null subjects
pub const EMPTY_TAG: &str = "-NONE-";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Internal { label: String, children: Vec<Node> },
    Terminal(Leaf),
    Empty { tag: String, text: String },
}

/// A parsed tree whose terminals are [`Leaf`] values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PsdTree {
    root: Node,
}

impl PsdTree {
    /// Parse with the default terminal factory
    pub fn parse(flat: &str) -> Result<PsdTree> {
        Self::parse_with(flat, Leaf::from_terminal)
    }

    /// Parse, building each non-empty terminal with `factory(tag, text)`.
    ///
    /// Terminals are numbered in order as they are built. A factory returning
    /// `None` means the terminal has no usable text.
    pub fn parse_with<F>(flat: &str, factory: F) -> Result<PsdTree>
    where
        F: Fn(&str, &str) -> Option<Leaf>,
    {
        let mut parser = Parser {
            src: flat,
            pos: 0,
            next_position: 0,
            factory,
        };
        let root = parser.node()?;
        parser.skip_spaces();
        if parser.pos != flat.len() {
            return Err(parser.error("trailing material after tree"));
        }
        Ok(PsdTree { root })
    }

    /// Parse and check that serializing gives back the input
    pub fn parse_exact(flat: &str) -> Result<PsdTree> {
        let tree = Self::parse(flat)?;
        let output = tree.serialize();
        if output != flat {
            return Err(CoreError::RoundTrip {
                input: flat.to_string(),
                output,
            });
        }
        Ok(tree)
    }

    pub fn serialize(&self) -> String {
        let mut out = String::new();
        write_node(&self.root, &mut out);
        out
    }

    pub fn nonempty_leaves(&self) -> Vec<&Leaf> {
        let mut leaves = Vec::new();
        collect(&self.root, &mut leaves);
        leaves
    }

    pub fn nonempty_leaves_mut(&mut self) -> Vec<&mut Leaf> {
        let mut leaves = Vec::new();
        collect_mut(&mut self.root, &mut leaves);
        leaves
    }
}

struct Parser<'a, F> {
    src: &'a str,
    pos: usize,
    next_position: usize,
    factory: F,
}

impl<'a, F> Parser<'a, F>
where
    F: Fn(&str, &str) -> Option<Leaf>,
{
    fn node(&mut self) -> Result<Node> {
        self.expect(b'(')?;
        let label_start = self.pos;
        let label = self.token();
        self.skip_spaces();

        match self.peek() {
            Some(b'(') => {
                let mut children = Vec::new();
                while self.peek() == Some(b'(') {
                    children.push(self.node()?);
                    self.skip_spaces();
                }
                self.expect(b')')?;
                Ok(Node::Internal {
                    label: label.to_string(),
                    children,
                })
            }
            Some(b')') | None => Err(self.error("node without text or children")),
            Some(_) => {
                if label.is_empty() {
                    self.pos = label_start;
                    return Err(self.error("terminal without a tag"));
                }
                let text = self.token();
                self.skip_spaces();
                self.expect(b')')?;
                if label == EMPTY_TAG {
                    return Ok(Node::Empty {
                        tag: label.to_string(),
                        text: text.to_string(),
                    });
                }
                let mut leaf = (self.factory)(label, text).ok_or_else(|| CoreError::EmptyLeaf {
                    tag: label.to_string(),
                    tree: self.src.to_string(),
                })?;
                leaf.position = self.next_position;
                self.next_position += 1;
                Ok(Node::Terminal(leaf))
            }
        }
    }

    fn token(&mut self) -> &'a str {
        let src: &'a str = self.src;
        let start = self.pos;
        while let Some(byte) = self.peek() {
            if matches!(byte, b' ' | b'(' | b')') {
                break;
            }
            self.pos += 1;
        }
        &src[start..self.pos]
    }

    fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(&format!("expected '{}'", byte as char)))
        }
    }

    fn error(&self, reason: &str) -> CoreError {
        CoreError::MalformedTree {
            position: self.pos,
            reason: reason.to_string(),
            tree: self.src.to_string(),
        }
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Internal { label, children } => {
            out.push('(');
            out.push_str(label);
            for child in children {
                out.push(' ');
                write_node(child, out);
            }
            out.push(')');
        }
        Node::Terminal(leaf) => out.push_str(&leaf.tree_text()),
        Node::Empty { tag, text } => {
            out.push('(');
            out.push_str(tag);
            out.push(' ');
            out.push_str(text);
            out.push(')');
        }
    }
}

fn collect<'a>(node: &'a Node, leaves: &mut Vec<&'a Leaf>) {
    match node {
        Node::Internal { children, .. } => children.iter().for_each(|c| collect(c, leaves)),
        Node::Terminal(leaf) => leaves.push(leaf),
        Node::Empty { .. } => {}
    }
}

fn collect_mut<'a>(node: &'a mut Node, leaves: &mut Vec<&'a mut Leaf>) {
    match node {
        Node::Internal { children, .. } => {
            children.iter_mut().for_each(|c| collect_mut(c, leaves))
        }
        Node::Terminal(leaf) => leaves.push(leaf),
        Node::Empty { .. } => {}
    }
}
