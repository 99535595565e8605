//! Graphviz DOT rendering of a decision tree.

use super::{DecisionTree, GraphRenderer, NodeShape};

/// Renders a [`DecisionTree`] as Graphviz DOT text.
///
/// The output is plain text; actually drawing it is the consumer's
/// concern (`dot -Tsvg`, an online viewer, or nothing at all).
#[derive(Debug, Clone, Copy, Default)]
pub struct DotRenderer;

impl DotRenderer {
    /// Create a new renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl GraphRenderer for DotRenderer {
    fn render(&self, tree: &DecisionTree) -> String {
        let mut out = String::from("digraph decision_tree {\n");
        out.push_str("    rankdir=LR;\n");

        for node in tree.nodes() {
            out.push_str(&format!(
                "    {} [label=\"{}\", shape={}];\n",
                node.id,
                escape(&node.label),
                shape_name(node.shape),
            ));
        }
        for edge in tree.edges() {
            match &edge.label {
                Some(label) => out.push_str(&format!(
                    "    {} -> {} [label=\"{}\"];\n",
                    edge.from,
                    edge.to,
                    escape(label),
                )),
                None => out.push_str(&format!("    {} -> {};\n", edge.from, edge.to)),
            }
        }

        out.push_str("}\n");
        out
    }
}

fn shape_name(shape: NodeShape) -> &'static str {
    match shape {
        NodeShape::Diamond => "diamond",
        NodeShape::Box => "box",
        NodeShape::Ellipse => "ellipse",
    }
}

/// Escape a label for embedding in a double-quoted DOT string.
fn escape(label: &str) -> String {
    label
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
