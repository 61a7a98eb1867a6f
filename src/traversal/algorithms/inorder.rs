use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug},
};
use crate::{
    traversal::{Traversable, Position},
    util::Stack,
};

/// A cursor which walks a traversable in *inorder*: the left subtree of every node is visited before the node, the right subtree after it.
///
/// This is the default order of [`BinaryTree`].
///
/// [`BinaryTree`]: ../binary_tree/struct.BinaryTree.html " "
pub struct Inorder<'a, T: Traversable> {
    traversable: &'a T,
    current: Option<T::Cursor>,
    // Ancestors which were descended through to the left and were not yielded yet.
    pending: Stack<T::Cursor>,
}
impl<'a, T: Traversable> Inorder<'a, T> {
    /// Creates a cursor positioned at the first node in inorder, i.e. the leftmost node, or at the end if the traversable is empty.
    pub fn new(traversable: &'a T) -> Self {
        let mut cursor = Self::end(traversable);
        cursor.descend_left(traversable.cursor_to_root());
        cursor.advance();
        cursor
    }
    /// Creates a cursor which has already reached the end.
    #[inline]
    pub fn end(traversable: &'a T) -> Self {
        Self {
            traversable,
            current: None,
            pending: Stack::new(),
        }
    }

    fn descend_left(&mut self, mut next: Option<T::Cursor>) {
        while let Some(cursor) = next {
            next = self.traversable.left_child_of(&cursor);
            self.pending.push(cursor);
        }
    }
}
impl<'a, T: Traversable> Position<'a> for Inorder<'a, T> {
    type Target = T;

    #[inline(always)]
    fn traversable(&self) -> &'a T {
        self.traversable
    }
    #[inline(always)]
    fn position(&self) -> Option<&T::Cursor> {
        self.current.as_ref()
    }
    fn advance(&mut self) {
        self.current = self.pending.pop();
        let traversable = self.traversable;
        let right_child = self
            .current
            .as_ref()
            .and_then(|current| traversable.right_child_of(current));
        self.descend_left(right_child);
    }
}
impl<'a, T: Traversable> Iterator for Inorder<'a, T> {
    type Item = &'a T::Value;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.get()?;
        self.advance();
        Some(value)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower = self.pending.len() + usize::from(self.current.is_some());
        (lower, None)
    }
}
impl<T: Traversable> FusedIterator for Inorder<'_, T> {}
impl<T: Traversable> Clone for Inorder<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            traversable: self.traversable,
            current: self.current.clone(),
            pending: self.pending.clone(),
        }
    }
}
impl<T: Traversable> Debug for Inorder<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inorder")
            .field("current", &self.current)
            .field("pending", &self.pending)
            .finish()
    }
}
