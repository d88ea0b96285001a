//! Tree nodes and structural operations

use std::path::Path;

use smol_str::SmolStr;

use super::input::NodeSource;

/// Child indices leading from a [`Root`] down to one node.
pub type NodePath = Vec<usize>;

/// The root of a parsed stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Root {
    pub nodes: Vec<Node>,
    pub source: Option<NodeSource>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    AtRule(AtRule),
    Rule(Rule),
    Decl(Declaration),
    Comment(Comment),
}

/// `@name params;` or `@name params { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    pub name: SmolStr,
    pub params: String,
    /// `Some` whenever a block followed the rule, even an empty one.
    pub nodes: Option<Vec<Node>>,
    pub source: Option<NodeSource>,
}

/// `selector { ... }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub nodes: Vec<Node>,
    pub source: Option<NodeSource>,
}

/// `prop: value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub prop: String,
    pub value: String,
    pub source: Option<NodeSource>,
}

/// `/* text */`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub source: Option<NodeSource>,
}

impl AtRule {
    pub fn new(name: impl Into<SmolStr>, params: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            nodes: None,
            source: None,
        }
    }

    pub fn has_block(&self) -> bool {
        self.nodes.is_some()
    }
}

impl Node {
    pub fn source(&self) -> Option<&NodeSource> {
        match self {
            Node::AtRule(n) => n.source.as_ref(),
            Node::Rule(n) => n.source.as_ref(),
            Node::Decl(n) => n.source.as_ref(),
            Node::Comment(n) => n.source.as_ref(),
        }
    }

    pub fn as_at_rule(&self) -> Option<&AtRule> {
        match self {
            Node::AtRule(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::AtRule(n) => n.nodes.as_deref(),
            Node::Rule(n) => Some(&n.nodes),
            Node::Decl(_) | Node::Comment(_) => None,
        }
    }

    fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::AtRule(n) => n.nodes.as_mut(),
            Node::Rule(n) => Some(&mut n.nodes),
            Node::Decl(_) | Node::Comment(_) => None,
        }
    }
}

impl Root {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            source: None,
        }
    }

    /// The file this tree was parsed from, if known.
    pub fn source_file(&self) -> Option<&Path> {
        self.source.as_ref().and_then(NodeSource::file)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Visit every node in document order (pre-order, depth first).
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&NodePath, &'a Node)) {
        fn go<'a>(
            nodes: &'a [Node],
            path: &mut NodePath,
            visit: &mut impl FnMut(&NodePath, &'a Node),
        ) {
            for (index, node) in nodes.iter().enumerate() {
                path.push(index);
                visit(path, node);
                if let Some(children) = node.children() {
                    go(children, path, visit);
                }
                path.pop();
            }
        }

        go(&self.nodes, &mut Vec::new(), &mut visit);
    }

    /// Every at-rule named `name` (ASCII case-insensitive), at any depth, in
    /// document order.
    pub fn walk_at_rules(&self, name: &str) -> Vec<(NodePath, &AtRule)> {
        let mut found = Vec::new();
        self.walk(|path, node| {
            if let Some(rule) = node.as_at_rule() {
                if rule.name.eq_ignore_ascii_case(name) {
                    found.push((path.clone(), rule));
                }
            }
        });
        found
    }

    pub fn node_at(&self, path: &[usize]) -> Option<&Node> {
        let (&first, rest) = path.split_first()?;
        let mut node = self.nodes.get(first)?;
        for &index in rest {
            node = node.children()?.get(index)?;
        }
        Some(node)
    }

    /// Replace the node at `path` with `replacement`, spliced in order.
    ///
    /// Returns the removed node, or `None` (leaving the tree untouched) if
    /// `path` does not address a node.
    pub fn replace_with(&mut self, path: &[usize], replacement: Vec<Node>) -> Option<Node> {
        let (&last, parents) = path.split_last()?;
        let mut siblings = &mut self.nodes;
        for &index in parents {
            siblings = siblings.get_mut(index)?.children_mut()?;
        }
        if last >= siblings.len() {
            return None;
        }
        siblings.splice(last..=last, replacement).next()
    }
}
