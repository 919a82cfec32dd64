//! A module for expanding mediant trees level by level.

use tracing::debug;

use crate::matrix::Matrix;

/// A Stern-Brocot-style mediant tree, rooted at the identity matrix of a given order.
///
/// Order 2 yields the classic binary Stern-Brocot tree, order 3 its ternary analogue. Larger
/// orders expand one child per column, left to right; the structure of those trees is
/// exploratory.
///
/// The tree is never materialized: expansion only ever holds the frontier, the set of matrices
/// at the current depth.
///
/// # Examples
///
/// ```
/// use mediant::tree::MediantTree;
///
/// let tree = MediantTree::new(2);
///
/// // Each expansion doubles the frontier.
/// assert_eq!(tree.frontier(3).len(), 8);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MediantTree {
    /// The matrix order, also the number of children per node.
    order: usize,
}

impl MediantTree {
    /// Creates a tree of the given order.
    pub fn new(order: usize) -> Self {
        Self { order }
    }

    /// Returns the order of the tree.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the root matrix, the identity.
    pub fn root(&self) -> Matrix {
        Matrix::identity(self.order)
    }

    /// Returns an iterator over the frontiers from depth `0` (the root alone) through depth
    /// `num_levels` inclusive.
    ///
    /// Within a frontier, children appear in insertion order: each parent spawns its children
    /// column by column (left before middle before right), parents in frontier order.
    ///
    /// # Examples
    ///
    /// ```
    /// use mediant::tree::MediantTree;
    ///
    /// let tree = MediantTree::new(3);
    /// let sizes: Vec<usize> = tree.levels(2).map(|frontier| frontier.len()).collect();
    ///
    /// assert_eq!(sizes, vec![1, 3, 9]);
    /// ```
    pub fn levels(&self, num_levels: usize) -> Levels {
        Levels {
            order: self.order,
            frontier: Some(vec![self.root()]),
            depth: 0,
            remaining: num_levels,
        }
    }

    /// Returns the frontier after `num_levels` expansions; it contains exactly
    /// `order ^ num_levels` matrices.
    pub fn frontier(&self, num_levels: usize) -> Vec<Matrix> {
        // The iterator always yields at least the root frontier.
        self.levels(num_levels).last().unwrap_or_default()
    }
}

/// An iterator over the frontiers of a mediant tree, one `Vec<Matrix>` per depth.
///
/// Returned by [`MediantTree::levels`].
#[derive(Clone, Debug)]
pub struct Levels {
    order: usize,
    frontier: Option<Vec<Matrix>>,
    depth: usize,
    remaining: usize,
}

impl Iterator for Levels {
    type Item = Vec<Matrix>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.frontier.take()?;

        if self.remaining > 0 {
            self.remaining -= 1;
            self.depth += 1;

            let order = self.order;
            let next: Vec<Matrix> = current
                .iter()
                .flat_map(|parent| (0..order).map(move |column| parent.child(column)))
                .collect();

            debug!(depth = self.depth, frontier = next.len(), "expanded mediant tree level");

            self.frontier = Some(next);
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = if self.frontier.is_some() {
            self.remaining + 1
        } else {
            0
        };

        (len, Some(len))
    }
}

impl ExactSizeIterator for Levels {}

#[cfg(test)]
mod tests {
    use num_rational::Ratio;

    use super::*;
    use crate::matrix::Fraction;

    #[test]
    fn root_is_identity() {
        assert_eq!(MediantTree::new(2).root(), Matrix::identity(2));
        assert_eq!(MediantTree::new(3).root(), Matrix::identity(3));
    }

    #[test]
    fn frontier_sizes_are_powers_of_the_order() {
        for order in [2usize, 3] {
            let tree = MediantTree::new(order);

            for num_levels in 0..5 {
                let frontier = tree.frontier(num_levels);
                assert_eq!(frontier.len(), order.pow(num_levels as u32));
            }
        }
    }

    #[test]
    fn levels_yields_every_depth() {
        let tree = MediantTree::new(2);
        let sizes: Vec<usize> = tree.levels(4).map(|frontier| frontier.len()).collect();

        assert_eq!(sizes, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn levels_is_exact_size() {
        let tree = MediantTree::new(2);

        assert_eq!(tree.levels(3).len(), 4);
        assert_eq!(tree.levels(0).len(), 1);
    }

    #[test]
    fn binary_frontier_enumerates_stern_brocot_fractions() {
        let tree = MediantTree::new(2);

        let fractions: Vec<Fraction> = tree
            .frontier(2)
            .iter()
            .map(|matrix| matrix.fraction(0, 1))
            .collect();

        // Depth 2 of the Stern-Brocot tree, left to right.
        let expected: Vec<Fraction> = [(1u32, 3u32), (2, 3), (3, 2), (3, 1)]
            .map(|(n, d)| Ratio::new_raw(n.into(), d.into()))
            .to_vec();

        assert_eq!(fractions, expected);
    }

    #[test]
    fn expansion_is_deterministic() {
        let tree = MediantTree::new(3);

        assert_eq!(tree.frontier(3), tree.frontier(3));
    }

    #[test]
    fn first_expansion_spawns_children_left_to_right() {
        let tree = MediantTree::new(2);
        let frontier = tree.frontier(1);

        assert_eq!(frontier[0], tree.root().left_child());
        assert_eq!(frontier[1], tree.root().right_child());
    }

    #[test]
    fn ternary_root_children_include_the_middle() {
        let tree = MediantTree::new(3);
        let frontier = tree.frontier(1);

        assert_eq!(frontier[0], tree.root().left_child());
        assert_eq!(frontier[1], tree.root().middle_child());
        assert_eq!(frontier[2], tree.root().right_child());
    }

    #[test]
    fn deep_frontier_fractions_stay_in_lowest_terms() {
        // Neighbouring numerators and denominators in the Stern-Brocot tree are coprime, so the
        // raw row-sum pair always equals its reduced form.
        let tree = MediantTree::new(2);

        for matrix in tree.frontier(6) {
            let fraction = matrix.fraction(0, 1);
            let reduced = Ratio::new(fraction.numer().clone(), fraction.denom().clone());

            assert_eq!(fraction.numer(), reduced.numer());
            assert_eq!(fraction.denom(), reduced.denom());
        }
    }
}
