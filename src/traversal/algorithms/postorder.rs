use core::{
    iter::FusedIterator,
    fmt::{self, Formatter, Debug},
};
use crate::{
    traversal::{Traversable, Position},
    util::Stack,
};

/// A cursor which walks a traversable in *postorder*: a node is only visited after both of its subtrees.
///
/// The cursor keeps the path from the root to the current node on its stack, along with the node it visited last. The latter tells apart the three ways of arriving at the node on top of the stack: coming down from its parent, coming back up from its left child or coming back up from its right child.
///
/// # Example
/// ```rust
/// use birch::BinaryTree;
///
/// let mut tree = BinaryTree::<_>::new();
/// tree.add_root(0)
///     .add_left(&0, 1).unwrap()
///     .add_right(&0, 2).unwrap()
///     .add_right(&1, 3).unwrap();
///
/// let order = tree.begin_postorder().copied().collect::<Vec<_>>();
/// assert_eq!(order, [3, 1, 2, 0]);
/// ```
pub struct Postorder<'a, T: Traversable> {
    traversable: &'a T,
    current: Option<T::Cursor>,
    pending: Stack<T::Cursor>,
    last_visited: Option<T::Cursor>,
}
impl<'a, T: Traversable> Postorder<'a, T> {
    /// Creates a cursor positioned at the first node in postorder, i.e. the leftmost leaf, or at the end if the traversable is empty.
    pub fn new(traversable: &'a T) -> Self {
        let mut cursor = Self::end(traversable);
        if let Some(root) = traversable.cursor_to_root() {
            cursor.pending.push(root);
            cursor.advance();
        }
        cursor
    }
    /// Creates a cursor which has already reached the end.
    #[inline]
    pub fn end(traversable: &'a T) -> Self {
        Self {
            traversable,
            current: None,
            pending: Stack::new(),
            last_visited: None,
        }
    }

    fn settle_on(&mut self, cursor: T::Cursor) {
        self.pending.pop();
        self.last_visited = Some(cursor.clone());
        self.current = Some(cursor);
    }
}
impl<'a, T: Traversable> Position<'a> for Postorder<'a, T> {
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
        let traversable = self.traversable;
        while let Some(top) = self.pending.last().cloned() {
            let left_child = traversable.left_child_of(&top);
            let right_child = traversable.right_child_of(&top);
            let came_from_parent = match &self.last_visited {
                None => true,
                Some(last) => {
                    traversable.left_child_of(last).as_ref() == Some(&top)
                        || traversable.right_child_of(last).as_ref() == Some(&top)
                }
            };
            if came_from_parent {
                if let Some(left_child) = left_child {
                    self.pending.push(left_child);
                } else if let Some(right_child) = right_child {
                    self.pending.push(right_child);
                } else {
                    return self.settle_on(top);
                }
            } else if left_child.is_some() && left_child == self.last_visited {
                if let Some(right_child) = right_child {
                    self.pending.push(right_child);
                } else {
                    return self.settle_on(top);
                }
            } else {
                debug_assert!(
                    right_child.is_some() && right_child == self.last_visited,
                    "postorder cursor lost track of the last visited node",
                );
                return self.settle_on(top);
            }
            self.last_visited = Some(top);
        }
        self.current = None;
    }
}
impl<'a, T: Traversable> Iterator for Postorder<'a, T> {
    type Item = &'a T::Value;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.get()?;
        self.advance();
        Some(value)
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // The current node plus every ancestor on the path to it
        let lower = self.pending.len() + usize::from(self.current.is_some());
        (lower, None)
    }
}
impl<T: Traversable> FusedIterator for Postorder<'_, T> {}
impl<T: Traversable> Clone for Postorder<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            traversable: self.traversable,
            current: self.current.clone(),
            pending: self.pending.clone(),
            last_visited: self.last_visited.clone(),
        }
    }
}
impl<T: Traversable> Debug for Postorder<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Postorder")
            .field("current", &self.current)
            .field("pending", &self.pending)
            .field("last_visited", &self.last_visited)
            .finish()
    }
}
