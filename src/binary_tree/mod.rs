//! Trees which allow at most two children for their nodes.
//!
//! The [Wikipedia article] on binary trees covers their use cases and specifics in more detail.
//!
//! The left and the right child slots of a node are independent: a node can have a right child without having a left one. Nodes are not ordered by value and the tree is never rebalanced; its shape is exactly what the insertions made it.
//!
//! Insertion is *value-anchored*. [`add_left`] and [`add_right`] search the tree in preorder for the first node holding the anchor value and fill the requested child slot of that node. An occupied slot is not an error: the value of the child already there is overwritten in place, and the size of the tree does not change. The only way an insertion can fail is if the anchor value is not in the tree, in which case nothing is modified.
//!
//! # Example
//! ```rust
//! use birch::binary_tree::BinaryTree;
//!
//! // The turbofish there is needed to state that we are using the default storage method instead
//! // of asking the compiler to infer it, which would be impossible.
//! let mut tree = BinaryTree::<_>::new();
//!
//! // Insertions are chainable, and the ones that can fail return a Result.
//! tree.add_root("Hello")
//!     .add_left(&"Hello", "World").unwrap()
//!     .add_right(&"Hello", "Rust").unwrap();
//! assert_eq!(tree.len(), 3);
//!
//! // Adding a child under a value which is not in the tree fails and leaves the tree alone:
//! assert!(tree.add_left(&"Goodbye", "Moon").is_err());
//! assert_eq!(tree.len(), 3);
//!
//! // Let's look at the structure of the tree.
//! let root = tree.root().unwrap();
//! assert_eq!(*root.value(), "Hello");
//! let left_child = root.left_child().unwrap();
//! assert_eq!(*left_child.value(), "World");
//! assert_eq!(left_child.is_left_child(), Some(true));
//!
//! // Iterating over the tree uses inorder by default.
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), ["World", "Hello", "Rust"]);
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_tree " "
//! [`add_left`]: struct.BinaryTree.html#method.add_left " "
//! [`add_right`]: struct.BinaryTree.html#method.add_right " "

mod base;
mod impl_traversable;
mod node;
mod node_ref;
mod node_ref_mut;
mod render;

#[cfg(test)]
mod tests;

pub use node::Node;
pub use node_ref::NodeRef;
pub use node_ref_mut::NodeRefMut;
pub use base::BinaryTree;

/// A binary tree which uses a *sparse* `Vec` as backing storage.
///
/// Sparse storage does not implement `Clone`, so trees of this type cannot be copied.
#[allow(unused_qualifications)]
pub type SparseVecBinaryTree<T> = BinaryTree<T, usize, granite::SparseVec<Node<T, usize>>>;
/// A binary tree which uses a `Vec` as backing storage.
///
/// The default `BinaryTree` type already uses this, since nodes are never removed from a binary tree. This is only provided for explicitness and consistency.
#[allow(unused_qualifications)]
pub type VecBinaryTree<T> = BinaryTree<T, usize, alloc::vec::Vec<Node<T, usize>>>;
