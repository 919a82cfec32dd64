//! Mediant is a small toolkit for constructing Stern-Brocot mediant trees via matrix
//! recurrences and capturing them as directed graphs for visualization.
//!
//! # Basic usage
//!
//! The library is centered around the [`Matrix`](matrix::Matrix) recurrence: the identity matrix
//! is the root of the tree and each child operation folds a row's sum into one column, producing
//! a new value. Summing adjacent rows reconstructs the fraction a node stands for. The
//! [`MediantTree`](tree::MediantTree) structure expands the tree breadth-first, and a capture
//! turns it into a [`DiGraph`](graph::DiGraph) with typed display attributes that a renderer can
//! consume, e.g. via the [`DotWriter`](dot::DotWriter).
//!
//! ```rust
//! use mediant::tree::MediantTree;
//!
//! // The binary tree enumerates every positive fraction exactly once.
//! let tree = MediantTree::new(2);
//!
//! // The four fractions two levels down, left to right.
//! let labels: Vec<String> = tree
//!     .frontier(2)
//!     .iter()
//!     .map(|matrix| {
//!         let fraction = matrix.fraction(0, 1);
//!         format!("{}/{}", fraction.numer(), fraction.denom())
//!     })
//!     .collect();
//!
//! assert_eq!(labels, vec!["1/3", "2/3", "3/2", "3/1"]);
//!
//! // Capture the tree for rendering.
//! let capture = tree.capture(2);
//! assert_eq!(capture.graph().edge_count(), capture.node_count() - 1);
//! ```

pub mod capture;
pub mod dot;
pub mod edge;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod style;
pub mod tree;
