//! Structural audit of a [`RedBlackTree`].

use super::RedBlackTree;
use super::rbtree::Node;
use crate::error::InvariantViolation;

/// What a subtree reports to its parent during the audit.
struct Summary<'a, T> {
    black_height: usize,
    count: usize,
    min: Option<&'a T>,
    max: Option<&'a T>,
}

impl<T: Ord> RedBlackTree<T> {
    /// Checks every red-black invariant and returns the tree's black-height.
    ///
    /// The black-height is the number of black nodes on any path from the
    /// root down to an empty leaf (0 for an empty tree). The checks are:
    ///
    /// - the root of a non-empty tree is black
    /// - no red node has a red child
    /// - both children of every node have the same black-height
    /// - elements are strictly ascending in order
    /// - the cached length matches the number of nodes
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found. Trees built through the
    /// public API only fail if the element type's `Ord` is not a strict total
    /// order.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = (1..=7).collect();
    /// // Seven ascending inserts settle into a perfect, all-black tree
    /// assert_eq!(tree.validate(), Ok(3));
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let result = self.audit();
        if let Err(violation) = &result {
            tracing::debug!(%violation, length = self.len(), "red-black tree invariant violated");
        }
        result
    }

    fn audit(&self) -> Result<usize, InvariantViolation> {
        let root = self.root_node();
        if root.is_some_and(Node::is_red) {
            return Err(InvariantViolation::RedRoot);
        }

        let summary = audit_node(root)?;
        if summary.count != self.len() {
            return Err(InvariantViolation::LengthMismatch {
                cached: self.len(),
                counted: summary.count,
            });
        }
        Ok(summary.black_height)
    }
}

fn audit_node<T: Ord>(node: Option<&Node<T>>) -> Result<Summary<'_, T>, InvariantViolation> {
    let Some(node) = node else {
        return Ok(Summary {
            black_height: 0,
            count: 0,
            min: None,
            max: None,
        });
    };

    let left_node = node.left.as_deref();
    let right_node = node.right.as_deref();
    if node.is_red() && (left_node.is_some_and(Node::is_red) || right_node.is_some_and(Node::is_red))
    {
        return Err(InvariantViolation::RedRedViolation);
    }

    let left = audit_node(left_node)?;
    let right = audit_node(right_node)?;

    if left.black_height != right.black_height {
        return Err(InvariantViolation::BlackHeightMismatch {
            left: left.black_height,
            right: right.black_height,
        });
    }
    if left.max.is_some_and(|max| *max >= node.element)
        || right.min.is_some_and(|min| *min <= node.element)
    {
        return Err(InvariantViolation::OrderViolation);
    }

    Ok(Summary {
        black_height: left.black_height + usize::from(!node.is_red()),
        count: left.count + right.count + 1,
        min: left.min.or(Some(&node.element)),
        max: right.max.or(Some(&node.element)),
    })
}
