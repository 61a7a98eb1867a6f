//! Everything related to walking binary-shaped structures in depth-first order.
//!
//! The module is home to the following items:
//! - [`Traversable`]: the *trait for types which describe binary-shaped structures* addressed by cursors
//! - [`Position`]: the *trait shared by all traversal cursors*, giving access to the node under the cursor and moving it forward
//! - The cursors themselves, one per depth-first order: [`Preorder`], [`Inorder`] and [`Postorder`] (see the [`algorithms`] module for more)
//!
//! Every cursor is also an [`Iterator`] over references to the values of the traversable: calling `next` yields the value under the cursor and then advances it. Cursors are lazy: they only keep an explicit stack of pending nodes, never a precomputed list of the whole order.
//!
//! Cursors of any order can be compared with each other. Two cursors are equal if they point to the same node of the same traversable, or if both have reached the end of their order.
//!
//! [`algorithms`]: algorithms/index.html " "
//! [`Traversable`]: trait.Traversable.html " "
//! [`Position`]: trait.Position.html " "
//! [`Preorder`]: struct.Preorder.html " "
//! [`Inorder`]: struct.Inorder.html " "
//! [`Postorder`]: struct.Postorder.html " "
//! [`Iterator`]: https://doc.rust-lang.org/std/iter/trait.Iterator.html " "

pub mod algorithms;
pub use algorithms::{Preorder, Inorder, Postorder};


use core::{fmt::Debug, ptr};
use crate::OutOfRangeError;

/// Binary-shaped data structures which can be walked by the cursors in this module.
///
/// Every node has at most two child slots, the left and the right one, which are filled independently of each other.
pub trait Traversable: Sized {
    /// The data payload of a node.
    type Value;
    /// The type for the cursor which will be used for keeping track of the traversed nodes.
    ///
    /// Must be very cheaply clonable, but not required to be `Copy`. Two cursors which compare equal must point to the same node.
    type Cursor: Clone + Debug + Eq;

    /// Returns the cursor pointing to the root node, or `None` if the structure is empty.
    fn cursor_to_root(&self) -> Option<Self::Cursor>;
    /// Returns a reference to the value of the node at the specified cursor.
    fn value_of(&self, cursor: &Self::Cursor) -> &'_ Self::Value;
    /// Returns a cursor to the parent of the node at the specified cursor, or `None` if that node is the root node.
    fn parent_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the left child of the node at the specified cursor, or `None` if the slot is empty.
    fn left_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
    /// Returns a cursor to the right child of the node at the specified cursor, or `None` if the slot is empty.
    fn right_child_of(&self, cursor: &Self::Cursor) -> Option<Self::Cursor>;
}

/// The interface shared by the traversal cursors of all orders.
///
/// A cursor is either positioned at a node or at the *end* of its order. Reading the value at the end is an error, advancing past the end keeps the cursor at the end.
pub trait Position<'a> {
    /// The structure which is being traversed.
    type Target: Traversable + 'a;

    /// Returns the traversable the cursor walks over.
    fn traversable(&self) -> &'a Self::Target;
    /// Returns the cursor of the node the traversal is currently at, or `None` if it has reached the end.
    fn position(&self) -> Option<&<Self::Target as Traversable>::Cursor>;
    /// Moves on to the next node in the order, or to the end if there are no more nodes. Does nothing if the end has already been reached.
    fn advance(&mut self);

    /// Returns `true` if the traversal has reached the end, `false` otherwise.
    #[inline]
    fn is_end(&self) -> bool {
        self.position().is_none()
    }
    /// Returns a reference to the value of the current node, or `None` if the traversal has reached the end.
    #[inline]
    fn get(&self) -> Option<&'a <Self::Target as Traversable>::Value> {
        let traversable = self.traversable();
        self.position().map(|cursor| traversable.value_of(cursor))
    }
    /// Returns a reference to the value of the current node.
    ///
    /// # Errors
    /// Will fail if the traversal has reached the end.
    #[inline]
    fn try_get(&self) -> Result<&'a <Self::Target as Traversable>::Value, OutOfRangeError> {
        self.get().ok_or(OutOfRangeError)
    }
}

/// Returns `true` if both cursors are at the end, or if both point to the same node of the same traversable.
///
/// This is what the `PartialEq` implementations between the cursor types use. Values are never compared, only node identity.
pub fn same_position<'a, 'b, A, B>(a: &A, b: &B) -> bool
where
    A: Position<'a>,
    B: Position<'b, Target = A::Target>,
    A::Target: 'b,
{
    match (a.position(), b.position()) {
        (None, None) => true,
        (Some(lhs), Some(rhs)) => ptr::eq(a.traversable(), b.traversable()) && lhs == rhs,
        _ => false,
    }
}

macro_rules! impl_position_eq {
    ($($lhs:ident => $($rhs:ident),+;)+) => {$($(
        impl<'a, 'b, T: Traversable> PartialEq<$rhs<'b, T>> for $lhs<'a, T> {
            #[inline]
            fn eq(&self, other: &$rhs<'b, T>) -> bool {
                same_position(self, other)
            }
        }
    )+
        impl<T: Traversable> Eq for $lhs<'_, T> {}
    )+};
}
impl_position_eq! {
    Preorder => Preorder, Inorder, Postorder;
    Inorder => Preorder, Inorder, Postorder;
    Postorder => Preorder, Inorder, Postorder;
}
