//! A module for working with directed edges.

/// A pair of vertices representing a directed graph edge, pointing from `source` to `target`.
///
/// Unlike an undirected edge, orientation matters: `Edge::new(a, b)` and `Edge::new(b, a)` are
/// distinct values with distinct hashes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge<T> {
    source: T,
    target: T,
}

impl<T> Edge<T> {
    /// Creates a new edge from a source and a target vertex.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_ne!(edge, Edge::new("b", "a"));
    /// ```
    pub fn new(source: T, target: T) -> Self {
        Self { source, target }
    }

    /// Returns the vertex the edge points from.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.source(), &"a");
    /// ```
    pub fn source(&self) -> &T {
        &self.source
    }

    /// Returns the vertex the edge points to.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.target(), &"b");
    /// ```
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Returns whether the edge contains the given vertex at either endpoint.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    ///
    /// assert_eq!(edge.contains(&"a"), true);
    /// assert_eq!(edge.contains(&"b"), true);
    /// assert_eq!(edge.contains(&"c"), false);
    /// ```
    pub fn contains(&self, vertex: &T) -> bool
    where
        T: PartialEq,
    {
        self.source() == vertex || self.target() == vertex
    }

    /// Returns the edge with its orientation flipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::edge::Edge;
    ///
    /// let edge = Edge::new("a", "b");
    /// assert_eq!(edge.reverse(), Edge::new("b", "a"));
    /// ```
    pub fn reverse(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}
