//! Hierarchy — the two rooted trees drawn on either side of a transaction.
//!
//! Each tree is a petgraph `DiGraph` with edges pointing from parent to
//! child. Children keep insertion order; nothing is re-sorted.

use std::collections::VecDeque;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::model::{CellInfo, TransactionData};

// ─── Node ────────────────────────────────────────────────────────────────────

/// Element type of a hierarchy: a transaction root or a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Synthetic root. An empty hash marks the inert outputs-side root.
    Transaction { tx_hash: String },
    Cell(CellInfo),
}

impl Node {
    pub fn transaction(tx_hash: impl Into<String>) -> Self {
        Self::Transaction {
            tx_hash: tx_hash.into(),
        }
    }

    /// `"tx"` or `"cell"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transaction { .. } => "tx",
            Self::Cell(_) => "cell",
        }
    }

    pub fn as_cell(&self) -> Option<&CellInfo> {
        match self {
            Self::Cell(cell) => Some(cell),
            Self::Transaction { .. } => None,
        }
    }

    pub fn is_cell(&self) -> bool {
        matches!(self, Self::Cell(_))
    }
}

// ─── Side ────────────────────────────────────────────────────────────────────

/// Which half of the diagram a tree is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Consumed cells, growing left of the transaction.
    Inputs,
    /// Produced cells, growing right of the transaction.
    Outputs,
}

// ─── Hierarchy ───────────────────────────────────────────────────────────────

/// A rooted tree of [`Node`]s.
#[derive(Debug, Clone)]
pub struct Hierarchy {
    pub digraph: DiGraph<Node, ()>,
    pub root: NodeIndex,
}

impl Hierarchy {
    pub fn new(root: Node) -> Self {
        let mut digraph = DiGraph::new();
        let root = digraph.add_node(root);
        Self { digraph, root }
    }

    /// Attach `node` as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeIndex, node: Node) -> NodeIndex {
        let idx = self.digraph.add_node(node);
        self.digraph.add_edge(parent, idx, ());
        idx
    }

    pub fn node(&self, idx: NodeIndex) -> &Node {
        &self.digraph[idx]
    }

    pub fn node_count(&self) -> usize {
        self.digraph.node_count()
    }

    /// Children of `idx` in insertion order.
    ///
    /// petgraph walks adjacency lists newest-first, so order by edge index.
    pub fn children(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut edges: Vec<_> = self.digraph.edges(idx).collect();
        edges.sort_by_key(|e| e.id());
        edges.into_iter().map(|e| e.target()).collect()
    }

    pub fn is_leaf(&self, idx: NodeIndex) -> bool {
        self.digraph.edges(idx).next().is_none()
    }

    /// Every node with its depth, breadth-first from the root.
    pub fn breadth_first(&self) -> Vec<(NodeIndex, usize)> {
        let mut order = Vec::with_capacity(self.node_count());
        let mut queue = VecDeque::from([(self.root, 0)]);
        while let Some((idx, depth)) = queue.pop_front() {
            order.push((idx, depth));
            for child in self.children(idx) {
                queue.push_back((child, depth + 1));
            }
        }
        order
    }

    /// Parent → child pairs, breadth-first by child.
    pub fn links(&self) -> Vec<(NodeIndex, NodeIndex)> {
        self.breadth_first()
            .into_iter()
            .flat_map(|(idx, _)| {
                self.children(idx)
                    .into_iter()
                    .map(move |child| (idx, child))
            })
            .collect()
    }

    /// Greatest depth of any node; 0 for a lone root.
    pub fn height(&self) -> usize {
        self.breadth_first()
            .into_iter()
            .map(|(_, depth)| depth)
            .max()
            .unwrap_or(0)
    }

    /// Cells directly under `idx`.
    pub fn child_cells(&self, idx: NodeIndex) -> impl Iterator<Item = &CellInfo> + '_ {
        self.children(idx)
            .into_iter()
            .filter_map(move |child| self.digraph[child].as_cell())
    }
}

// ─── Tree builder ────────────────────────────────────────────────────────────

/// The inputs tree and the outputs tree of one transaction.
#[derive(Debug, Clone)]
pub struct TransactionTrees {
    pub inputs: Hierarchy,
    pub outputs: Hierarchy,
}

impl TransactionTrees {
    pub fn get(&self, side: Side) -> &Hierarchy {
        match side {
            Side::Inputs => &self.inputs,
            Side::Outputs => &self.outputs,
        }
    }
}

fn cell_tree(tx_hash: &str, cells: &[CellInfo]) -> Hierarchy {
    let mut tree = Hierarchy::new(Node::transaction(tx_hash));
    let root = tree.root;
    for cell in cells {
        tree.add_child(root, Node::Cell(cell.clone()));
    }
    tree
}

/// Build both trees.
///
/// The inputs root carries the transaction hash; the outputs root has an
/// empty hash so its label is suppressed. With `mirror_inputs` the outputs
/// tree holds the inputs again instead of the outputs.
pub fn build_trees(data: &TransactionData, mirror_inputs: bool) -> TransactionTrees {
    let output_cells = if mirror_inputs {
        &data.inputs
    } else {
        &data.outputs
    };
    TransactionTrees {
        inputs: cell_tree(&data.tx_hash, &data.inputs),
        outputs: cell_tree("", output_cells),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout_hierarchy.rs"]
mod tests;
