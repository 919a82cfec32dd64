//! A module for working with directed graphs.

use std::{
    collections::{BTreeMap, HashMap, HashSet},
    fmt::Debug,
    hash::Hash,
};

use nalgebra::DMatrix;

use crate::edge::Edge;

/// A directed graph, made up of edges.
///
/// This is the structure a mediant-tree capture emits into: one directed edge per parent-child
/// spawn. It stores edges only; isolated vertices aren't representable.
#[derive(Clone, Debug)]
pub struct DiGraph<T> {
    /// The edges in the graph.
    edges: HashSet<Edge<T>>,
    /// A mapping of vertices to their indices to be used when constructing the various matrices
    /// representing the graph.
    ///
    /// The use of a `BTreeMap` means we need the `Ord` bound on `T`. The sorted collection allows
    /// us to maintain some form of order between computations, which can be useful for debugging.
    index: Option<BTreeMap<T, usize>>,
    /// Cache the adjacency matrix when possible.
    adjacency_matrix: Option<DMatrix<f64>>,
    /// Cache the out-degree matrix when possible.
    out_degree_matrix: Option<DMatrix<f64>>,
    /// Cache the in-degree matrix when possible.
    in_degree_matrix: Option<DMatrix<f64>>,
}

impl<T> Default for DiGraph<T>
where
    Edge<T>: Eq + Hash,
    T: Copy + Eq + Hash + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DiGraph<T>
where
    Edge<T>: Eq + Hash,
    T: Copy + Eq + Hash + Ord + Debug,
{
    /// Creates an empty graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::graph::DiGraph;
    ///
    /// let graph: DiGraph<&str> = DiGraph::new();
    /// ```
    pub fn new() -> Self {
        Self {
            edges: Default::default(),
            index: None,
            adjacency_matrix: None,
            out_degree_matrix: None,
            in_degree_matrix: None,
        }
    }

    /// Returns the set of edges in the graph.
    pub fn edges(&self) -> &HashSet<Edge<T>> {
        &self.edges
    }

    /// Inserts an edge into the graph.
    pub fn insert(&mut self, edge: Edge<T>) -> bool {
        let is_inserted = self.edges.insert(edge);

        // Delete the cached objects if the edge was successfully inserted because we can't
        // reliably update them from the new connection alone.
        if is_inserted && self.index.is_some() {
            self.clear_cache()
        }

        is_inserted
    }

    /// Removes an edge from the set and returns whether it was present in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::edge::Edge;
    /// use mediant::graph::DiGraph;
    ///
    /// let mut graph = DiGraph::new();
    /// graph.insert(Edge::new("a", "b"));
    ///
    /// assert_eq!(graph.remove(&Edge::new("a", "b")), true);
    /// assert_eq!(graph.remove(&Edge::new("a", "c")), false);
    /// ```
    pub fn remove(&mut self, edge: &Edge<T>) -> bool {
        let is_removed = self.edges.remove(edge);

        // Delete the cached objects if the edge was successfully removed because we can't reliably
        // update them from the new connection alone.
        if is_removed && self.index.is_some() {
            self.clear_cache()
        }

        is_removed
    }

    /// Checks if the graph contains an edge.
    ///
    /// Orientation matters: containing `a -> b` says nothing about `b -> a`.
    pub fn contains(&self, edge: &Edge<T>) -> bool {
        self.edges.contains(edge)
    }

    /// Returns the vertex count of the graph.
    ///
    /// This call constructs the collection of vertices from the collection of edges. This is
    /// because the vertex set can't accurately be updated on the basis of the addition or the
    /// removal of an edge alone.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::edge::Edge;
    /// use mediant::graph::DiGraph;
    ///
    /// let mut graph = DiGraph::new();
    /// graph.insert(Edge::new("a", "b"));
    ///
    /// assert_eq!(graph.vertex_count(), 2);
    /// ```
    pub fn vertex_count(&self) -> usize {
        self.vertices_from_edges().len()
    }

    /// Returns the edge count of the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Computes the density of the graph, the ratio of edges with respect to the maximum possible
    /// edges.
    ///
    /// Since edges are directed, the maximum is `n * (n - 1)` for `n` vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::edge::Edge;
    /// use mediant::graph::DiGraph;
    ///
    /// let mut graph = DiGraph::new();
    ///
    /// graph.insert(Edge::new("a", "b"));
    /// assert_eq!(graph.density(), 0.5);
    ///
    /// graph.insert(Edge::new("b", "a"));
    /// assert_eq!(graph.density(), 1.0);
    /// ```
    pub fn density(&self) -> f64 {
        let vc = self.vertex_count() as f64;
        let ec = self.edge_count() as f64;

        // Calculate the total number of possible directed edges given a vertex count.
        let pec = vc * (vc - 1.0);
        // Actual edges divided by the possible edges gives the density.
        ec / pec
    }

    /// Constructs the adjacency matrix for this graph.
    ///
    /// Entry `(i, j)` is `1.0` when the graph contains the edge `i -> j`; the matrix is generally
    /// asymmetric.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use mediant::edge::Edge;
    /// use mediant::graph::DiGraph;
    ///
    /// let mut graph = DiGraph::new();
    /// graph.insert(Edge::new("a", "b"));
    /// assert_eq!(
    ///     graph.adjacency_matrix(),
    ///     dmatrix![0.0, 1.0;
    ///              0.0, 0.0]
    /// );
    /// ```
    pub fn adjacency_matrix(&mut self) -> DMatrix<f64> {
        // Check the cache.
        if let Some(matrix) = self.adjacency_matrix.clone() {
            return matrix;
        }

        if self.index.is_none() {
            self.generate_index();
        }

        // Safety: the previous call guarantees the index has been generated and stored.
        let n = self.index.as_ref().unwrap().len();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        // Compute the adjacency matrix. Only the source-to-target entry is written for each edge,
        // so opposite orientations show up as distinct entries.
        for edge in &self.edges {
            // Safety: get the indices for each edge in the graph, these must be present as the
            // index was generated from this set of edges.
            let i = self.index.as_ref().unwrap().get(edge.source()).unwrap();
            let j = self.index.as_ref().unwrap().get(edge.target()).unwrap();

            matrix[(*i, *j)] = 1.0;
        }

        // Cache the matrix.
        self.adjacency_matrix = Some(matrix.clone());

        matrix
    }

    /// Constructs the out-degree matrix for this graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use mediant::edge::Edge;
    /// use mediant::graph::DiGraph;
    ///
    /// let mut graph = DiGraph::new();
    /// graph.insert(Edge::new("a", "b"));
    /// assert_eq!(
    ///     graph.out_degree_matrix(),
    ///     dmatrix![1.0, 0.0;
    ///              0.0, 0.0]
    /// );
    /// ```
    pub fn out_degree_matrix(&mut self) -> DMatrix<f64> {
        // Check the cache.
        if let Some(matrix) = self.out_degree_matrix.clone() {
            return matrix;
        }

        let adjacency_matrix = self.adjacency_matrix();

        // Safety: the previous call guarantees the index has been generated and stored.
        let n = self.index.as_ref().unwrap().len();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        for (i, row) in adjacency_matrix.row_iter().enumerate() {
            // Set the diagonal to be the sum of outgoing edges in that row. The index isn't
            // necessary here since the rows are visited in order and the adjacency matrix is
            // ordered after the index.
            matrix[(i, i)] = row.sum()
        }

        // Cache the matrix.
        self.out_degree_matrix = Some(matrix.clone());

        matrix
    }

    /// Constructs the in-degree matrix for this graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use nalgebra::dmatrix;
    /// use mediant::edge::Edge;
    /// use mediant::graph::DiGraph;
    ///
    /// let mut graph = DiGraph::new();
    /// graph.insert(Edge::new("a", "b"));
    /// assert_eq!(
    ///     graph.in_degree_matrix(),
    ///     dmatrix![0.0, 0.0;
    ///              0.0, 1.0]
    /// );
    /// ```
    pub fn in_degree_matrix(&mut self) -> DMatrix<f64> {
        // Check the cache.
        if let Some(matrix) = self.in_degree_matrix.clone() {
            return matrix;
        }

        let adjacency_matrix = self.adjacency_matrix();

        // Safety: the previous call guarantees the index has been generated and stored.
        let n = self.index.as_ref().unwrap().len();
        let mut matrix = DMatrix::<f64>::zeros(n, n);

        for (j, column) in adjacency_matrix.column_iter().enumerate() {
            // Set the diagonal to be the sum of incoming edges in that column.
            matrix[(j, j)] = column.sum()
        }

        // Cache the matrix.
        self.in_degree_matrix = Some(matrix.clone());

        matrix
    }

    /// Returns a mapping of vertices to their out-degree (number of outgoing edges).
    pub fn out_degrees(&mut self) -> HashMap<T, u32> {
        let out_degree_matrix = self.out_degree_matrix();

        // Safety: the previous call guarantees the index has been generated and stored.
        self.index
            .as_ref()
            .unwrap()
            .keys()
            .zip(out_degree_matrix.diagonal().iter())
            .map(|(vertex, degree)| (*vertex, *degree as u32))
            .collect()
    }

    /// Returns a mapping of vertices to their in-degree (number of incoming edges).
    pub fn in_degrees(&mut self) -> HashMap<T, u32> {
        let in_degree_matrix = self.in_degree_matrix();

        // Safety: the previous call guarantees the index has been generated and stored.
        self.index
            .as_ref()
            .unwrap()
            .keys()
            .zip(in_degree_matrix.diagonal().iter())
            .map(|(vertex, degree)| (*vertex, *degree as u32))
            .collect()
    }

    //
    // Private
    //

    /// Clears the computed state.
    ///
    /// This should be called every time the set of edges is mutated since the cached state won't
    /// correspond to the new graph.
    fn clear_cache(&mut self) {
        self.index = None;
        self.adjacency_matrix = None;
        self.out_degree_matrix = None;
        self.in_degree_matrix = None;
    }

    /// Returns the set of unique vertices contained within the set of edges.
    fn vertices_from_edges(&self) -> HashSet<T> {
        let mut vertices: HashSet<T> = HashSet::new();
        for edge in self.edges.iter() {
            // Using a hashset guarantees uniqueness.
            vertices.insert(*edge.source());
            vertices.insert(*edge.target());
        }

        vertices
    }

    /// Constructs and stores an index of vertices for this set of edges.
    ///
    /// The index will be sorted by `T`'s implementation of `Ord`.
    fn generate_index(&mut self) {
        // It should be impossible to call this function if the cache is not empty.
        debug_assert!(self.index.is_none());

        let mut vertices: Vec<T> = self.vertices_from_edges().into_iter().collect();
        vertices.sort();

        let index: BTreeMap<T, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, &vertex)| (vertex, i))
            .collect();

        self.index = Some(index);
    }
}
