//! Decision-tree description for handoff to a graph renderer.
//!
//! The tree is a plain graph structure: named nodes, directed edges, text
//! labels. It carries no behavior of its own and the core never touches a
//! rendering backend; anything that can draw a labeled directed graph can
//! implement [`GraphRenderer`].

pub mod dot;
pub mod label;

pub use dot::DotRenderer;

use crate::domain::{DecisionOption, EmvResult};
use crate::error::ConstructionError;

/// Shape hint for a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// The root decision point.
    Diamond,
    /// An option under comparison.
    Box,
    /// A scenario leaf.
    Ellipse,
}

/// A named, labeled node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
}

/// A directed edge between two node ids, optionally labeled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEdge {
    pub from: String,
    pub to: String,
    pub label: Option<String>,
}

/// A two-level decision tree: one decision node, two option nodes, four
/// scenario leaves.
///
/// Built fresh per computation and discarded after rendering; it has no
/// lifecycle beyond a single render call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
    edges: Vec<TreeEdge>,
}

impl DecisionTree {
    /// Assemble the tree from both options and their EMV results.
    ///
    /// The root-to-option edges carry the EMV (and, for the costed
    /// option, the study cost); each leaf carries its scenario's
    /// probability as a percentage and its (net) revenue.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] when any label cannot be assembled.
    /// Callers treat the absence of a tree as non-fatal: the evaluation
    /// output stands, only the drawing is withheld.
    pub fn build(
        without_study: &DecisionOption,
        with_study: &DecisionOption,
        result_without: &EmvResult,
        result_with: &EmvResult,
    ) -> Result<Self, ConstructionError> {
        let mut nodes = Vec::with_capacity(7);
        let mut edges = Vec::with_capacity(6);

        nodes.push(TreeNode {
            id: "decision".into(),
            label: "Decision".into(),
            shape: NodeShape::Diamond,
        });

        for (option, result) in [(without_study, result_without), (with_study, result_with)] {
            let option_id = option.id().as_str();

            nodes.push(TreeNode {
                id: option_id.into(),
                label: option.id().label().into(),
                shape: NodeShape::Box,
            });

            let emv_text = format!("EMV: {}", label::currency(result.emv()));
            let edge_label = match option.cost() {
                Some(cost) => format!("Cost: {}\n{}", label::currency(cost), emv_text),
                None => emv_text,
            };
            edges.push(TreeEdge {
                from: "decision".into(),
                to: option_id.into(),
                label: Some(edge_label),
            });

            let amount_word = if option.cost().is_some() { "Net" } else { "Revenue" };
            for (index, scenario) in option.scenarios().iter().enumerate() {
                let leaf_id = format!("{option_id}_s{}", index + 1);
                nodes.push(TreeNode {
                    id: leaf_id.clone(),
                    label: format!(
                        "Scenario {}\nProb: {}\n{amount_word}: {}",
                        index + 1,
                        label::percent(scenario.probability())?,
                        label::currency(result.net_revenues()[index]),
                    ),
                    shape: NodeShape::Ellipse,
                });
                edges.push(TreeEdge {
                    from: option_id.into(),
                    to: leaf_id,
                    label: None,
                });
            }
        }

        Ok(Self { nodes, edges })
    }

    /// All nodes, root first.
    #[must_use]
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// All edges, in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[TreeEdge] {
        &self.edges
    }
}

/// A backend capable of drawing a labeled directed graph.
///
/// The shipped implementation emits Graphviz DOT ([`DotRenderer`]); test
/// doubles can assert tree structure without any drawing backend.
pub trait GraphRenderer {
    /// Render the tree description to the backend's output format.
    fn render(&self, tree: &DecisionTree) -> String;
}
