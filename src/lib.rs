//! An arena-allocated binary tree with value-anchored insertion and depth-first cursors.
//!
//! ------------------------
//!
//! # Overview
//! Birch implements a single kind of tree, a plain (unbalanced, unordered) binary tree, using the ["arena-allocated trees"][arena tree blog post] technique: nodes are stored in a backing storage provided by [Granite] and link to their children by storage keys rather than pointers. Ownership of the nodes is therefore strictly tree-shaped, copying a tree is a plain clone of its storage, and dropping a tree of any depth never recurses.
//!
//! Nodes are addressed *by value*: [`add_left`] and [`add_right`] locate an existing node holding a given *anchor value* and attach (or overwrite) the respective child of that node. If the anchor appears more than once, the first match in *preorder* is used.
//!
//! The tree can be walked in three depth-first orders (preorder, inorder and postorder) with lazily evaluated cursors that double as iterators. Cursors compare equal when they point to the same node, regardless of the order they walk in, and every order has a paired *end* cursor which any exhausted cursor compares equal to. Since cursors borrow the tree, the tree cannot be modified while any of them is alive.
//!
//! # Example
//! ```rust
//! use birch::BinaryTree;
//!
//! let mut tree = BinaryTree::<_>::new();
//! tree.add_root(0)
//!     .add_left(&0, 1).unwrap()
//!     .add_right(&0, 2).unwrap();
//!
//! assert_eq!(tree.begin_preorder().copied().collect::<Vec<_>>(), [0, 1, 2]);
//! assert_eq!(tree.begin_inorder().copied().collect::<Vec<_>>(), [1, 0, 2]);
//! assert_eq!(tree.begin_postorder().copied().collect::<Vec<_>>(), [1, 2, 0]);
//! ```
//!
//! # Feature flags
//! - `std` (**enabled by default**) — enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types.
//! - `unwind_safety` (**enabled by default**) — aborts the process instead of unwinding when an internal invariant of a tree is found to be broken in a debug build.
//! - `smallvec`, `slab`, `slotmap` — enable the respective storage implementations in Granite, so that those can be used as the backing storage of a tree.
//! - `union_optimizations` — forwarded to Granite; **requires a nightly compiler**.
//!
//! # Logging
//! Structural changes are reported through the [`log`] facade at the `trace` level, failed anchor searches at the `debug` level. Values are never logged, only storage keys and tree sizes.
//!
//! [`add_left`]: binary_tree/struct.BinaryTree.html#method.add_left " "
//! [`add_right`]: binary_tree/struct.BinaryTree.html#method.add_right " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`log`]: https://docs.rs/log " "
//! [Granite]: https://docs.rs/granite " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::items_after_statements,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)] // FIXME reenable when it gets fixed
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

extern crate alloc;

pub mod binary_tree;
pub use binary_tree::BinaryTree;

pub mod traversal;
pub use traversal::{Traversable, Position, Preorder, Inorder, Postorder};

/// A prelude for using Birch, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::binary_tree::{
        BinaryTree,
        NodeRef as BinaryTreeNodeRef,
        NodeRefMut as BinaryTreeNodeRefMut,
    };
    #[doc(no_inline)]
    pub use crate::traversal::{
        Position as TraversalPosition,
        Preorder as PreorderCursor,
        Inorder as InorderCursor,
        Postorder as PostorderCursor,
    };
    #[doc(no_inline)]
    pub use crate::{AnchorNotFoundError, OutOfRangeError};
}

pub(crate) mod util;

use core::fmt::{self, Formatter, Display, Debug};

/// The error type returned by [`add_left`] and [`add_right`] when no node holds the anchor value.
///
/// The tree is left untouched by a failed insertion.
///
/// [`add_left`]: binary_tree/struct.BinaryTree.html#method.add_left " "
/// [`add_right`]: binary_tree/struct.BinaryTree.html#method.add_right " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AnchorNotFoundError<T> {
    /// The value which was supposed to be inserted, which was deemed useless when the operation failed and is returned to the caller to avoid dropping it.
    pub new_value: T,
}
impl<T> AnchorNotFoundError<T> {
    /// Extracts the value which was supposed to be inserted.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_new_value(self) -> T {
        self.new_value
    }
}
impl<T> Display for AnchorNotFoundError<T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the anchor value does not exist in the tree")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<T: Debug> std::error::Error for AnchorNotFoundError<T> {}

/// The error type returned when reading the value under a traversal cursor which has already reached the end of its order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OutOfRangeError;
impl Display for OutOfRangeError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("the cursor is past the last node of its traversal order")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for OutOfRangeError {}
