use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug},
};
use crate::{
    traversal::{Traversable, Position},
    util::Stack,
};

/// A cursor which walks a traversable in *preorder*: every node is visited before its left subtree, which is visited before its right subtree.
///
/// # Example
/// ```rust
/// use birch::{BinaryTree, traversal::Position};
///
/// let mut tree = BinaryTree::<_>::new();
/// tree.add_root('a')
///     .add_left(&'a', 'b').unwrap()
///     .add_right(&'a', 'c').unwrap()
///     .add_left(&'b', 'd').unwrap();
///
/// let mut cursor = tree.begin_preorder();
/// assert_eq!(cursor.get(), Some(&'a'));
/// cursor.advance();
/// assert_eq!(cursor.get(), Some(&'b'));
/// assert_eq!(cursor.collect::<String>(), "bdc");
/// ```
pub struct Preorder<'a, T: Traversable> {
    traversable: &'a T,
    current: Option<T::Cursor>,
    // Right children are pushed before left ones so that the left subtree pops first.
    pending: Stack<T::Cursor>,
}
impl<'a, T: Traversable> Preorder<'a, T> {
    /// Creates a cursor positioned at the first node in preorder, i.e. the root, or at the end if the traversable is empty.
    pub fn new(traversable: &'a T) -> Self {
        let mut cursor = Self::end(traversable);
        cursor.current = traversable.cursor_to_root();
        cursor.schedule_children();
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

    fn schedule_children(&mut self) {
        let traversable = self.traversable;
        if let Some(current) = &self.current {
            if let Some(right_child) = traversable.right_child_of(current) {
                self.pending.push(right_child);
            }
            if let Some(left_child) = traversable.left_child_of(current) {
                self.pending.push(left_child);
            }
        }
    }
}
impl<'a, T: Traversable> Position<'a> for Preorder<'a, T> {
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
        self.schedule_children();
    }
}
impl<'a, T: Traversable> Iterator for Preorder<'a, T> {
    type Item = &'a T::Value;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.get()?;
        self.advance();
        Some(value)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // The current node plus at least every scheduled subtree root
        let lower = self.pending.len() + usize::from(self.current.is_some());
        (lower, None)
    }
}
impl<T: Traversable> FusedIterator for Preorder<'_, T> {}
// Implemented manually because deriving would require the traversable itself to be Clone.
impl<T: Traversable> Clone for Preorder<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            traversable: self.traversable,
            current: self.current.clone(),
            pending: self.pending.clone(),
        }
    }
}
impl<T: Traversable> Debug for Preorder<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preorder")
            .field("current", &self.current)
            .field("pending", &self.pending)
            .finish()
    }
}
