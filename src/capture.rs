//! A module for capturing a mediant tree into a directed graph for visualization.

use itertools::Itertools;
use tracing::debug;

use crate::{
    edge::Edge,
    graph::DiGraph,
    matrix::{Fraction, Matrix},
    style::{Color, NodeStyle, Position},
    tree::MediantTree,
};

/// A single captured tree node: its matrix, the fraction(s) it encodes and its display payload.
#[derive(Clone, Debug)]
pub struct TreeNode {
    id: usize,
    depth: usize,
    matrix: Matrix,
    fractions: Vec<Fraction>,
    style: NodeStyle,
}

impl TreeNode {
    /// Returns the node's id; ids are assigned breadth-first, the root is `0`.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the node's depth in the tree.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the node's matrix.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Returns the fraction(s) encoded by the matrix, one per adjacent row pair: a single
    /// fraction for order 2, two for order 3.
    pub fn fractions(&self) -> &[Fraction] {
        &self.fractions
    }

    /// Returns the node's display payload.
    pub fn style(&self) -> &NodeStyle {
        &self.style
    }
}

/// A mediant tree captured as a directed graph plus per-node display payloads.
///
/// The graph contains one `parent -> child` edge per spawn; node ids are breadth-first, so a
/// frontier occupies a contiguous id range. Since the graph stores edges only, a zero-level
/// capture has a node record but no graph vertices.
#[derive(Clone, Debug)]
pub struct TreeCapture {
    order: usize,
    graph: DiGraph<usize>,
    nodes: Vec<TreeNode>,
}

impl TreeCapture {
    /// Captures `num_levels` expansions of the given tree.
    pub fn new(tree: &MediantTree, num_levels: usize) -> Self {
        let order = tree.order();
        let mut graph = DiGraph::new();
        let mut nodes = Vec::new();

        let mut frontier: Vec<(usize, Matrix)> = vec![(0, tree.root())];
        push_level(&mut nodes, &frontier, 0);

        let mut next_id = 1;
        for depth in 1..=num_levels {
            let mut next = Vec::with_capacity(frontier.len() * order);

            for (parent_id, parent) in &frontier {
                // Children spawn column by column: left before middle before right.
                for column in 0..order {
                    graph.insert(Edge::new(*parent_id, next_id));
                    next.push((next_id, parent.child(column)));
                    next_id += 1;
                }
            }

            push_level(&mut nodes, &next, depth);
            frontier = next;
        }

        debug!(
            order,
            num_levels,
            nodes = nodes.len(),
            edges = graph.edge_count(),
            "captured mediant tree"
        );

        Self {
            order,
            graph,
            nodes,
        }
    }

    /// Returns the order of the captured tree.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the captured directed graph.
    pub fn graph(&self) -> &DiGraph<usize> {
        &self.graph
    }

    /// Returns a mutable reference to the captured graph, e.g. for computing its matrix
    /// representations.
    pub fn graph_mut(&mut self) -> &mut DiGraph<usize> {
        &mut self.graph
    }

    /// Returns the captured nodes in breadth-first order.
    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    /// Returns the node with the given id.
    pub fn node(&self, id: usize) -> Option<&TreeNode> {
        // Ids are assigned densely in breadth-first order.
        self.nodes.get(id)
    }

    /// Returns the number of captured nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl MediantTree {
    /// Captures `num_levels` expansions of this tree into a directed graph with display
    /// payloads.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::tree::MediantTree;
    ///
    /// let capture = MediantTree::new(2).capture(2);
    ///
    /// assert_eq!(capture.node_count(), 7);
    /// assert_eq!(capture.graph().edge_count(), 6);
    /// ```
    pub fn capture(&self, num_levels: usize) -> TreeCapture {
        TreeCapture::new(self, num_levels)
    }
}

//
// Helpers
//

/// Builds the node records for one captured level.
fn push_level(nodes: &mut Vec<TreeNode>, level: &[(usize, Matrix)], depth: usize) {
    let len = level.len();

    for (position, (id, matrix)) in level.iter().enumerate() {
        let fractions = adjacent_fractions(matrix);
        let style = node_style(matrix, &fractions, depth, position, len);

        nodes.push(TreeNode {
            id: *id,
            depth,
            matrix: matrix.clone(),
            fractions,
            style,
        });
    }
}

/// Returns the fractions encoded by each adjacent row pair of the matrix.
fn adjacent_fractions(matrix: &Matrix) -> Vec<Fraction> {
    (0..matrix.order().saturating_sub(1))
        .map(|row| matrix.fraction(row, row + 1))
        .collect()
}

/// Builds the display payload for a node: fraction label, matrix hover text and a simple
/// per-level position (nodes spread over `[-1, 1]`, depth increasing downwards).
fn node_style(
    matrix: &Matrix,
    fractions: &[Fraction],
    depth: usize,
    position: usize,
    level_len: usize,
) -> NodeStyle {
    let label = fractions
        .iter()
        .map(|f| format!("{}/{}", f.numer(), f.denom()))
        .join(", ");

    let hover_text = format!("depth {depth}\n{matrix}");

    let x = (position as f64 + 0.5) / level_len as f64 * 2.0 - 1.0;
    // Subtraction rather than negation so the root's y is +0.0, which renders as "0".
    let y = 0.0 - depth as f64;

    let color = if depth == 0 {
        Color::Gold
    } else {
        Color::LightBlue
    };

    NodeStyle::new()
        .with_label(label)
        .with_hover_text(hover_text)
        .with_position(Position::new(x, y))
        .with_color(color)
}
