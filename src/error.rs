//! Error types for red-black tree invariant audits.
//!
//! None of the tree operations can fail; the only fallible entry point is
//! [`RedBlackTree::validate`](crate::persistent::RedBlackTree::validate),
//! which reports the first structural invariant it finds broken.

/// A red-black tree invariant that does not hold.
///
/// Trees built through the public API never produce one of these unless the
/// element type's `Ord` implementation is not a strict total order.
///
/// # Examples
///
/// ```rust
/// use persistent_rbtree::error::InvariantViolation;
///
/// let error = InvariantViolation::BlackHeightMismatch { left: 2, right: 1 };
/// assert_eq!(
///     format!("{error}"),
///     "black-height mismatch: left subtree has 2 black nodes, right subtree has 1"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root of a non-empty tree is red.
    RedRoot,
    /// A red node has a red child.
    RedRedViolation,
    /// Two sibling subtrees carry different numbers of black nodes.
    BlackHeightMismatch {
        /// Black-height of the left subtree.
        left: usize,
        /// Black-height of the right subtree.
        right: usize,
    },
    /// The in-order sequence is not strictly ascending.
    OrderViolation,
    /// The cached element count disagrees with the number of nodes.
    LengthMismatch {
        /// The count stored on the tree value.
        cached: usize,
        /// The count obtained by walking every node.
        counted: usize,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RedRoot => write!(formatter, "root of a non-empty tree is red"),
            Self::RedRedViolation => write!(formatter, "red node has a red child"),
            Self::BlackHeightMismatch { left, right } => write!(
                formatter,
                "black-height mismatch: left subtree has {left} black nodes, right subtree has {right}"
            ),
            Self::OrderViolation => {
                write!(formatter, "elements are not in strictly ascending order")
            }
            Self::LengthMismatch { cached, counted } => write!(
                formatter,
                "length mismatch: cached {cached}, counted {counted}"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}
