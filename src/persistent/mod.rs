//! Persistent (immutable) data structures.
//!
//! - [`RedBlackTree`]: Persistent ordered set (Okasaki red-black tree)
//!
//! # Structural Sharing
//!
//! Inserting into a [`RedBlackTree`] copies only the nodes on the path from
//! the root to the insertion point. Every other subtree is shared between the
//! old and the new version through a reference-counted handle, so keeping old
//! versions around costs O(log N) extra nodes per version.
//!
//! # Examples
//!
//! ```rust
//! use persistent_rbtree::persistent::RedBlackTree;
//!
//! let tree: RedBlackTree<i32> = [5, 3, 8, 1].into_iter().collect();
//! assert!(tree.contains(&3));
//! assert!(!tree.contains(&9));
//!
//! // Structural sharing: the original tree is preserved
//! let updated = tree.insert(9);
//! assert!(!tree.contains(&9));   // Original unchanged
//! assert!(updated.contains(&9)); // New version
//!
//! // Iteration is always in ascending order
//! let elements: Vec<&i32> = updated.iter().collect();
//! assert_eq!(elements, vec![&1, &3, &5, &8, &9]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod iter;
mod rbtree;
mod validate;

pub use iter::RedBlackTreeIntoIterator;
pub use iter::RedBlackTreeIterator;
pub use rbtree::RedBlackTree;

// =============================================================================
// Thread-Safety Contract
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(RedBlackTree<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(RedBlackTree<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(RedBlackTree<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
