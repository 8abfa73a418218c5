//! In-order iterators for [`RedBlackTree`](super::RedBlackTree).
//!
//! Both iterators walk the tree with an explicit stack of pending ancestors
//! and a cursor on the subtree still to be descended, so traversal depth is
//! bounded by the heap rather than the call stack. Creating an iterator does
//! no work; each call to `next` descends at most one left spine.

use super::ReferenceCounter;
use super::rbtree::{Link, Node};
use std::iter::FusedIterator;

/// Upper bound on the height of a red-black tree holding `length` elements.
const fn height_bound(length: usize) -> usize {
    2 * (usize::BITS - length.leading_zeros()) as usize
}

// =============================================================================
// Borrowing Iterator
// =============================================================================

/// An iterator over the elements of a [`RedBlackTree`](super::RedBlackTree)
/// in ascending order.
///
/// Created by [`RedBlackTree::iter`](super::RedBlackTree::iter).
pub struct RedBlackTreeIterator<'a, T> {
    stack: Vec<&'a Node<T>>,
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> RedBlackTreeIterator<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>, length: usize) -> Self {
        Self {
            stack: Vec::with_capacity(height_bound(length)),
            current: root,
            remaining: length,
        }
    }
}

impl<'a, T> Iterator for RedBlackTreeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.as_deref();
        }

        let node = self.stack.pop()?;
        self.current = node.right.as_deref();
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for RedBlackTreeIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for RedBlackTreeIterator<'_, T> {}

impl<T> Clone for RedBlackTreeIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            current: self.current,
            remaining: self.remaining,
        }
    }
}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over the elements of a
/// [`RedBlackTree`](super::RedBlackTree) in ascending order.
///
/// Nodes may still be shared with other versions, so elements are cloned out
/// of them rather than moved.
pub struct RedBlackTreeIntoIterator<T> {
    stack: Vec<ReferenceCounter<Node<T>>>,
    current: Link<T>,
    remaining: usize,
}

impl<T> RedBlackTreeIntoIterator<T> {
    pub(super) fn new(root: Link<T>, length: usize) -> Self {
        Self {
            stack: Vec::with_capacity(height_bound(length)),
            current: root,
            remaining: length,
        }
    }
}

impl<T: Clone> Iterator for RedBlackTreeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current.take() {
            self.current.clone_from(&node.left);
            self.stack.push(node);
        }

        let node = self.stack.pop()?;
        self.current.clone_from(&node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.element.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: Clone> ExactSizeIterator for RedBlackTreeIntoIterator<T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T: Clone> FusedIterator for RedBlackTreeIntoIterator<T> {}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::super::RedBlackTree;
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 2)]
    #[case(3, 4)]
    #[case(4, 6)]
    #[case(1000, 20)]
    fn test_height_bound(#[case] length: usize, #[case] expected: usize) {
        assert_eq!(height_bound(length), expected);
    }

    #[rstest]
    fn test_iter_empty() {
        let tree: RedBlackTree<i32> = RedBlackTree::new();
        let mut iterator = tree.iter();
        assert_eq!(iterator.len(), 0);
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.next(), None);
    }

    #[rstest]
    fn test_iter_is_lazy_and_exact_size() {
        let tree = RedBlackTree::build_from([5, 2, 8, 1, 9, 3]);
        let mut iterator = tree.iter();
        assert_eq!(iterator.size_hint(), (6, Some(6)));
        assert_eq!(iterator.next(), Some(&1));
        assert_eq!(iterator.next(), Some(&2));
        assert_eq!(iterator.len(), 4);
        assert_eq!(iterator.collect::<Vec<_>>(), vec![&3, &5, &8, &9]);
    }

    #[rstest]
    fn test_iter_clone_resumes_independently() {
        let tree = RedBlackTree::build_from(1..=5);
        let mut iterator = tree.iter();
        iterator.next();
        let resumed = iterator.clone();
        assert_eq!(iterator.copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
        assert_eq!(resumed.copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[rstest]
    fn test_iter_stack_stays_within_height_bound() {
        let tree: RedBlackTree<u32> = (0..4096).collect();
        let mut iterator = tree.iter();
        let mut deepest = 0;
        while iterator.next().is_some() {
            deepest = deepest.max(iterator.stack.len());
        }
        assert!(deepest <= height_bound(4096));
    }

    #[rstest]
    fn test_into_iter_keeps_shared_version_intact() {
        let tree = RedBlackTree::build_from(["b".to_string(), "a".to_string()]);
        let shared = tree.clone();
        let owned: Vec<String> = tree.into_iter().collect();
        assert_eq!(owned, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(shared.len(), 2);
        assert!(shared.contains("a"));
    }

    #[rstest]
    fn test_into_iter_exact_size() {
        let mut iterator = RedBlackTree::build_from([3, 1, 2]).into_iter();
        assert_eq!(iterator.len(), 3);
        assert_eq!(iterator.next(), Some(1));
        assert_eq!(iterator.len(), 2);
        assert_eq!(iterator.next(), Some(2));
        assert_eq!(iterator.next(), Some(3));
        assert_eq!(iterator.next(), None);
        assert_eq!(iterator.len(), 0);
    }
}
