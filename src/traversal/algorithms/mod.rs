//! The depth-first traversal orders.
//!
//! This includes:
//! - Preorder: node, left subtree, right subtree
//! - Inorder: left subtree, node, right subtree
//! - Postorder: left subtree, right subtree, node
//!
//! All three are driven by an explicit stack instead of recursion, so walking a degenerate tree does not exhaust the call stack.

mod preorder;
mod inorder;
mod postorder;
pub use preorder::Preorder;
pub use inorder::Inorder;
pub use postorder::Postorder;
