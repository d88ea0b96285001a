//! Normalized serialization
//!
//! Rules and blocks print on one line (`.a { color: red; }`), top-level
//! nodes are separated by newlines. Selectors, params and values are emitted
//! exactly as parsed (trimmed).

use std::fmt::{self, Display, Write};

use super::tree::{AtRule, Node, Root};

impl Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::AtRule(rule) => write!(f, "{rule}"),
            Node::Rule(rule) => {
                write!(f, "{} ", rule.selector)?;
                write_block(f, &rule.nodes)
            }
            Node::Decl(decl) => write!(f, "{}: {};", decl.prop, decl.value),
            Node::Comment(comment) => write!(f, "/* {} */", comment.text),
        }
    }
}

impl Display for AtRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if !self.params.is_empty() {
            write!(f, " {}", self.params)?;
        }
        match &self.nodes {
            Some(nodes) => {
                f.write_char(' ')?;
                write_block(f, nodes)
            }
            None => f.write_char(';'),
        }
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, nodes: &[Node]) -> fmt::Result {
    if nodes.is_empty() {
        return f.write_str("{}");
    }
    f.write_str("{ ")?;
    for node in nodes {
        write!(f, "{node} ")?;
    }
    f.write_char('}')
}
