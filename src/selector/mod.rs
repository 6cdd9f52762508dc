//! CSS selector subset used by the page behaviors
//!
//! Supports type (`h2`), universal (`*`), id (`#make`), class (`.nav-link`)
//! and attribute selectors (`[data-theme]`, `[type="date"]`, `[href^="#"]`),
//! descendant and child combinators, and comma-separated lists.

pub mod lexer;
pub mod parser;

use thiserror::Error;

pub use parser::parse;

/// Selector parse failure
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectorError {
    #[error("unexpected character '{slice}' at position {position}")]
    Lex { position: usize, slice: String },

    #[error("unexpected {found} at position {position}")]
    Unexpected { position: usize, found: String },

    #[error("empty selector")]
    Empty,
}

/// Read access to an element tree, enough to evaluate selectors
pub trait SelectorTree {
    type Node: Copy;

    fn tag(&self, node: Self::Node) -> &str;
    fn id(&self, node: Self::Node) -> Option<&str>;
    fn has_class(&self, node: Self::Node, class: &str) -> bool;
    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;
}

/// Comparison applied to an attribute value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttrOp {
    Equals,
    Prefix,
    Suffix,
    Substring,
    Word,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttributeCondition {
    pub name: String,
    pub test: Option<(AttrOp, String)>,
}

impl AttributeCondition {
    fn matches(&self, value: Option<&str>) -> bool {
        let Some(value) = value else {
            return false;
        };
        match &self.test {
            None => true,
            Some((AttrOp::Equals, expected)) => value == expected,
            // An empty operand never matches for the substring family
            Some((_, expected)) if expected.is_empty() => false,
            Some((AttrOp::Prefix, expected)) => value.starts_with(expected.as_str()),
            Some((AttrOp::Suffix, expected)) => value.ends_with(expected.as_str()),
            Some((AttrOp::Substring, expected)) => value.contains(expected.as_str()),
            Some((AttrOp::Word, expected)) => value.split_whitespace().any(|w| w == expected),
        }
    }
}

/// One compound selector, e.g. `input.field[type="date"]`
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: Vec<AttributeCondition>,
}

impl Compound {
    fn matches<T: SelectorTree>(&self, tree: &T, node: T::Node) -> bool {
        if let Some(tag) = &self.tag {
            if !tree.tag(node).eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if tree.id(node) != Some(id.as_str()) {
                return false;
            }
        }
        self.classes.iter().all(|c| tree.has_class(node, c))
            && self
                .attributes
                .iter()
                .all(|a| a.matches(tree.attribute(node, &a.name)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Combinator {
    Descendant,
    Child,
}

/// Compounds joined by combinators, matched right to left
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexSelector {
    pub compounds: Vec<Compound>,
    /// `combinators[i]` joins `compounds[i]` and `compounds[i + 1]`
    pub combinators: Vec<Combinator>,
}

impl ComplexSelector {
    fn matches<T: SelectorTree>(&self, tree: &T, node: T::Node) -> bool {
        match self.compounds.len() {
            0 => false,
            n => self.matches_at(tree, node, n - 1),
        }
    }

    fn matches_at<T: SelectorTree>(&self, tree: &T, node: T::Node, index: usize) -> bool {
        if !self.compounds[index].matches(tree, node) {
            return false;
        }
        if index == 0 {
            return true;
        }

        match self.combinators[index - 1] {
            Combinator::Child => tree
                .parent(node)
                .is_some_and(|p| self.matches_at(tree, p, index - 1)),
            Combinator::Descendant => {
                let mut current = tree.parent(node);
                while let Some(ancestor) = current {
                    if self.matches_at(tree, ancestor, index - 1) {
                        return true;
                    }
                    current = tree.parent(ancestor);
                }
                false
            }
        }
    }
}

/// A parsed selector list
#[derive(Clone, Debug, PartialEq)]
pub struct Selector {
    alternatives: Vec<ComplexSelector>,
}

impl Selector {
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        parse(source)
    }

    pub fn alternatives(&self) -> &[ComplexSelector] {
        &self.alternatives
    }

    /// Check whether `node` matches any alternative
    pub fn matches<T: SelectorTree>(&self, tree: &T, node: T::Node) -> bool {
        self.alternatives.iter().any(|s| s.matches(tree, node))
    }
}
