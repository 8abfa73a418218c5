//! # persistent-rbtree
//!
//! A persistent (immutable) red-black tree for Rust.
//!
//! ## Overview
//!
//! [`RedBlackTree`](persistent::RedBlackTree) keeps its elements in sorted
//! order with logarithmic insertion and membership tests. Every insertion
//! returns a new tree; the tree it was called on stays valid and unchanged,
//! and both versions share every subtree the insertion did not touch.
//!
//! - **Persistent**: old versions survive every update
//! - **Balanced**: Okasaki-style red-black insertion keeps height O(log N)
//! - **Lazy traversal**: in-order iteration uses an explicit stack, never deep recursion
//! - **Auditable**: [`RedBlackTree::validate`](persistent::RedBlackTree::validate)
//!   checks every red-black invariant and reports the first violation
//!
//! ## Feature Flags
//!
//! - `arc`: share nodes through `std::sync::Arc` instead of `std::rc::Rc`,
//!   making trees `Send + Sync`
//!
//! ## Example
//!
//! ```rust
//! use persistent_rbtree::prelude::*;
//!
//! let tree = RedBlackTree::build_from([8, 1, 4, 8, 1, 4]);
//! assert_eq!(tree.elements(), vec![1, 4, 8]);
//!
//! let extended = tree.insert(2);
//! assert_eq!(tree.len(), 3);     // Original unchanged
//! assert_eq!(extended.len(), 4); // New version
//! assert!(extended.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use persistent_rbtree::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::InvariantViolation;
    pub use crate::persistent::*;
}

pub mod error;
pub mod persistent;
