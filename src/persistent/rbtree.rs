//! Persistent (immutable) ordered set based on a Red-Black Tree.
//!
//! This module provides [`RedBlackTree`], an immutable sorted collection of
//! unique elements that uses structural sharing for efficient operations.
//!
//! # Overview
//!
//! `RedBlackTree` follows Okasaki's purely functional red-black tree:
//! insertion descends from the root to an empty leaf, rebuilds every node on
//! that path, and rebalances each rebuilt node on the way back up.
//!
//! - O(log N) insert
//! - O(log N) contains
//! - O(log N) min/max
//! - O(1) len and `is_empty`
//! - O(N) in-order traversal
//!
//! All operations return new trees without modifying the original.
//! Each insertion allocates O(log N) fresh nodes (the rebuilt path) and shares
//! every other subtree with the version it was derived from. That allocation
//! is what makes the old version stay valid, so it is not something to be
//! optimized away.
//!
//! # Examples
//!
//! ```rust
//! use persistent_rbtree::persistent::RedBlackTree;
//!
//! let first = RedBlackTree::build_from([1, 2, 3]);
//! let second = first.insert(4);
//!
//! assert_eq!(first.elements(), vec![1, 2, 3]);
//! assert_eq!(second.elements(), vec![1, 2, 3, 4]);
//! ```
//!
//! # Internal Structure
//!
//! The Red-Black Tree maintains the following invariants:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. All leaves (empty subtrees) are black
//! 4. Red nodes have only black children
//! 5. Every path from root to leaf has the same number of black nodes
//!
//! These invariants ensure the tree height is O(log N).

use super::ReferenceCounter;
use super::iter::{RedBlackTreeIntoIterator, RedBlackTreeIterator};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a Red-Black Tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum Color {
    Red,
    Black,
}

// =============================================================================
// Node Definition
// =============================================================================

/// A possibly empty subtree. `None` is the empty leaf, which counts as black.
pub(super) type Link<T> = Option<ReferenceCounter<Node<T>>>;

/// Internal node structure for the Red-Black Tree.
///
/// Nodes are never mutated once they are behind a [`ReferenceCounter`].
#[derive(Clone)]
pub(super) struct Node<T> {
    pub(super) color: Color,
    pub(super) left: Link<T>,
    pub(super) element: T,
    pub(super) right: Link<T>,
}

impl<T> Node<T> {
    pub(super) const fn new(color: Color, left: Link<T>, element: T, right: Link<T>) -> Self {
        Self {
            color,
            left,
            element,
            right,
        }
    }

    /// Creates a new red node with no children.
    const fn red_leaf(element: T) -> Self {
        Self::new(Color::Red, None, element, None)
    }

    /// Checks if this node is red.
    pub(super) const fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }
}

/// Returns the node behind `link` if it exists and is red.
fn red_node<T>(link: &Link<T>) -> Option<&ReferenceCounter<Node<T>>> {
    link.as_ref().filter(|node| node.is_red())
}

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// A persistent (immutable) ordered set based on a Red-Black Tree.
///
/// `RedBlackTree` is an immutable data structure that uses structural
/// sharing to efficiently support functional programming patterns.
///
/// Elements must implement `Ord`; operations that build new versions also
/// need `Clone`, because an element stored in a shared node is copied into
/// each rebuilt ancestor. Inserting an element that is already present
/// returns the original tree.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `new`        | O(1)       |
/// | `insert`     | O(log N)   |
/// | `contains`   | O(log N)   |
/// | `min`/`max`  | O(log N)   |
/// | `elements`   | O(N)       |
/// | `build_from` | O(N log N) |
/// | `len`        | O(1)       |
/// | `is_empty`   | O(1)       |
///
/// # Examples
///
/// ```rust
/// use persistent_rbtree::persistent::RedBlackTree;
///
/// let tree = RedBlackTree::singleton(42);
/// assert!(tree.contains(&42));
///
/// // Ordered iteration, duplicates collapse
/// let tree = RedBlackTree::build_from([8, 1, 4, 8, 1, 4]);
/// let elements: Vec<&i32> = tree.iter().collect();
/// assert_eq!(elements, vec![&1, &4, &8]);
/// ```
pub struct RedBlackTree<T> {
    /// Root node of the tree
    root: Link<T>,
    /// Number of elements
    length: usize,
}

impl<T> RedBlackTree<T> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Creates a new empty tree. Alias for [`new`](Self::new).
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::new()
    }

    /// Returns the number of elements in the tree.
    ///
    /// The count is maintained by [`insert`](Self::insert), so this does not
    /// walk the tree.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::build_from([3, 1, 2, 1]);
    /// assert_eq!(tree.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns `true` if both trees share the same root node.
    ///
    /// Two empty trees are considered to share their root. A tree returned by
    /// inserting an element that was already present shares its root with the
    /// tree the insertion was called on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::build_from([1, 2, 3]);
    /// assert!(tree.insert(2).ptr_eq(&tree));
    /// assert!(!tree.insert(4).ptr_eq(&tree));
    /// ```
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (None, None) => true,
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Returns the smallest element, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::build_from([5, 3, 8]);
    /// assert_eq!(tree.min(), Some(&3));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.element)
    }

    /// Returns the largest element, or `None` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::build_from([5, 3, 8]);
    /// assert_eq!(tree.max(), Some(&8));
    /// ```
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.element)
    }

    /// Returns a lazy iterator over the elements in ascending order.
    ///
    /// Every call starts a fresh traversal; iterating never modifies the tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::build_from([3, 1, 2]);
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.len(), 2);
    ///
    /// // A second traversal is independent of the first
    /// assert_eq!(tree.iter().count(), 3);
    /// ```
    #[must_use]
    pub fn iter(&self) -> RedBlackTreeIterator<'_, T> {
        RedBlackTreeIterator::new(self.root.as_deref(), self.length)
    }

    /// Returns the root node, if any.
    pub(super) fn root_node(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Assembles a tree from raw parts without checking any invariant.
    #[cfg(test)]
    pub(super) const fn from_parts(root: Link<T>, length: usize) -> Self {
        Self { root, length }
    }
}

impl<T: Ord> RedBlackTree<T> {
    /// Returns `true` if the tree contains an element equal to `target`.
    ///
    /// The target may be any borrowed form of the element type, but the
    /// ordering on the borrowed form must match the ordering on the element
    /// type.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::build_from([5, 3, 8, 1]);
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&9));
    ///
    /// // Can use &str to look up String elements
    /// let words = RedBlackTree::singleton("hello".to_string());
    /// assert!(words.contains("hello"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, target: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(target).is_some()
    }

    /// Returns a reference to the stored element equal to `target`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::build_from(["b".to_string(), "a".to_string()]);
    /// assert_eq!(tree.get("a"), Some(&"a".to_string()));
    /// assert_eq!(tree.get("c"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, target: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::get_from_node(self.root.as_deref(), target)
    }

    /// Recursive helper for get.
    fn get_from_node<'a, Q>(node: Option<&'a Node<T>>, target: &Q) -> Option<&'a T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node.and_then(|node_ref| match target.cmp(node_ref.element.borrow()) {
            Ordering::Less => Self::get_from_node(node_ref.left.as_deref(), target),
            Ordering::Greater => Self::get_from_node(node_ref.right.as_deref(), target),
            Ordering::Equal => Some(&node_ref.element),
        })
    }
}

impl<T: Clone + Ord> RedBlackTree<T> {
    /// Creates a tree containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::singleton(42);
    /// assert_eq!(tree.len(), 1);
    /// assert!(tree.contains(&42));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().insert(element)
    }

    /// Builds a tree by inserting each element in order, starting from empty.
    ///
    /// Later elements equal to an earlier one are ignored, so the first
    /// occurrence is the one stored. The shape of the result depends on the
    /// input order, not just on the set of elements.
    ///
    /// # Complexity
    ///
    /// O(N log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree = RedBlackTree::build_from(vec![8, 1, 4]);
    /// assert_eq!(tree.elements(), vec![1, 4, 8]);
    /// ```
    #[must_use]
    pub fn build_from<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut consumed: usize = 0;
        let tree = elements
            .into_iter()
            .inspect(|_| consumed += 1)
            .fold(Self::new(), |tree, element| tree.insert(element));
        tracing::trace!(
            consumed,
            length = tree.length,
            collapsed = consumed - tree.length,
            "built red-black tree"
        );
        tree
    }

    /// Returns the elements in ascending order.
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
    /// let tree = RedBlackTree::build_from([3, 1, 2]);
    /// assert_eq!(tree.elements(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn elements(&self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.length);
        Self::collect_elements_in_order(self.root.as_deref(), &mut elements);
        elements
    }

    /// Collects all elements in sorted order (in-order traversal).
    fn collect_elements_in_order(node: Option<&Node<T>>, elements: &mut Vec<T>) {
        if let Some(node_ref) = node {
            Self::collect_elements_in_order(node_ref.left.as_deref(), elements);
            elements.push(node_ref.element.clone());
            Self::collect_elements_in_order(node_ref.right.as_deref(), elements);
        }
    }

    /// Inserts an element into the tree.
    ///
    /// Returns a new tree containing the element. If an equal element is
    /// already present, the original tree is returned and the stored element
    /// is kept.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let tree1 = RedBlackTree::singleton(1);
    /// let tree2 = tree1.insert(2);
    ///
    /// assert_eq!(tree1.len(), 1); // Original unchanged
    /// assert_eq!(tree2.len(), 2); // New version
    /// ```
    #[must_use]
    pub fn insert(&self, element: T) -> Self {
        match Self::insert_into_node(self.root.as_ref(), element) {
            Some(new_root) => Self {
                root: Some(Self::blacken(new_root)),
                length: self.length + 1,
            },
            None => self.clone(),
        }
    }

    /// Recursive helper for insert.
    ///
    /// Returns the rebuilt subtree, or `None` when the element is already
    /// present and nothing on the path needs to change.
    fn insert_into_node(
        node: Option<&ReferenceCounter<Node<T>>>,
        element: T,
    ) -> Option<ReferenceCounter<Node<T>>> {
        let Some(node_ref) = node else {
            return Some(ReferenceCounter::new(Node::red_leaf(element)));
        };

        match element.cmp(&node_ref.element) {
            Ordering::Less => {
                Self::insert_into_node(node_ref.left.as_ref(), element).map(|new_left| {
                    ReferenceCounter::new(Self::balance(Node::new(
                        node_ref.color,
                        Some(new_left),
                        node_ref.element.clone(),
                        node_ref.right.clone(),
                    )))
                })
            }
            Ordering::Greater => {
                Self::insert_into_node(node_ref.right.as_ref(), element).map(|new_right| {
                    ReferenceCounter::new(Self::balance(Node::new(
                        node_ref.color,
                        node_ref.left.clone(),
                        node_ref.element.clone(),
                        Some(new_right),
                    )))
                })
            }
            Ordering::Equal => None,
        }
    }

    /// Makes the root black. This is the only place a root is recolored.
    fn blacken(root: ReferenceCounter<Node<T>>) -> ReferenceCounter<Node<T>> {
        if root.is_red() {
            let mut node = ReferenceCounter::unwrap_or_clone(root);
            node.color = Color::Black;
            ReferenceCounter::new(node)
        } else {
            root
        }
    }

    /// Repairs a red-red violation directly below a freshly rebuilt node.
    ///
    /// A black node whose red child has a red child is rewritten into a red
    /// node with two black children. All four shapes produce the same result:
    ///
    /// ```text
    ///        Bz          Bz        Bx          Bx
    ///       /  \        /  \      /  \        /  \               Ry
    ///      Ry   d      Rx   d    a    Rz     a    Ry           /    \
    ///     /  \        /  \           /  \        /  \   ==>   Bx      Bz
    ///    Rx   c      a    Ry        Ry   d      b    Rz      / \     / \
    ///   /  \             /  \      /  \             /  \    a   b   c   d
    ///  a    b           b    c    b    c           c    d
    /// ```
    ///
    /// Any other node is returned unchanged. The check looks at two levels
    /// below `node` and never recurses; violations further up are handled when
    /// insertion rebalances the next ancestor.
    fn balance(node: Node<T>) -> Node<T> {
        let Node {
            color,
            left,
            element,
            right,
        } = node;

        if color == Color::Black {
            if let Some(child) = red_node(&left) {
                // Left-Left
                if let Some(grandchild) = red_node(&child.left) {
                    return Self::split_red(
                        (
                            grandchild.left.clone(),
                            grandchild.element.clone(),
                            grandchild.right.clone(),
                        ),
                        child.element.clone(),
                        (child.right.clone(), element, right),
                    );
                }
                // Left-Right
                if let Some(grandchild) = red_node(&child.right) {
                    return Self::split_red(
                        (
                            child.left.clone(),
                            child.element.clone(),
                            grandchild.left.clone(),
                        ),
                        grandchild.element.clone(),
                        (grandchild.right.clone(), element, right),
                    );
                }
            }

            if let Some(child) = red_node(&right) {
                // Right-Left
                if let Some(grandchild) = red_node(&child.left) {
                    return Self::split_red(
                        (left, element, grandchild.left.clone()),
                        grandchild.element.clone(),
                        (
                            grandchild.right.clone(),
                            child.element.clone(),
                            child.right.clone(),
                        ),
                    );
                }
                // Right-Right
                if let Some(grandchild) = red_node(&child.right) {
                    return Self::split_red(
                        (left, element, child.left.clone()),
                        child.element.clone(),
                        (
                            grandchild.left.clone(),
                            grandchild.element.clone(),
                            grandchild.right.clone(),
                        ),
                    );
                }
            }
        }

        Node::new(color, left, element, right)
    }

    /// Builds `(Red, (Black, a, x, b), y, (Black, c, z, d))`.
    fn split_red(
        (a, x, b): (Link<T>, T, Link<T>),
        y: T,
        (c, z, d): (Link<T>, T, Link<T>),
    ) -> Node<T> {
        Node::new(
            Color::Red,
            Some(ReferenceCounter::new(Node::new(Color::Black, a, x, b))),
            y,
            Some(ReferenceCounter::new(Node::new(Color::Black, c, z, d))),
        )
    }

    /// Inserts every element of `other` into this tree.
    ///
    /// Elements present in both trees keep the copy stored in `self`.
    ///
    /// # Complexity
    ///
    /// O(M log(N + M)) where N is the size of self and M is the size of other
    ///
    /// # Examples
    ///
    /// ```rust
    /// use persistent_rbtree::persistent::RedBlackTree;
    ///
    /// let left = RedBlackTree::build_from([1, 3, 5]);
    /// let right = RedBlackTree::build_from([2, 3, 4]);
    /// assert_eq!(left.merge(&right).elements(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        other
            .iter()
            .fold(self.clone(), |tree, element| tree.insert(element.clone()))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Clone for RedBlackTree<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            length: self.length,
        }
    }
}

impl<T> Default for RedBlackTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from(iter)
    }
}

impl<T: Clone + Ord, const N: usize> From<[T; N]> for RedBlackTree<T> {
    fn from(elements: [T; N]) -> Self {
        Self::build_from(elements)
    }
}

impl<T: Clone> IntoIterator for RedBlackTree<T> {
    type Item = T;
    type IntoIter = RedBlackTreeIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        RedBlackTreeIntoIterator::new(self.root, self.length)
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = RedBlackTreeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Two trees are equal when they hold the same elements, whatever their shape.
impl<T: PartialEq> PartialEq for RedBlackTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RedBlackTree<T> {}

/// Hashes the length, then each element in ascending order, so trees built
/// from the same elements in a different order hash the same.
impl<T: Hash> Hash for RedBlackTree<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for RedBlackTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
