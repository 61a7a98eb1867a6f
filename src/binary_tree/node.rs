use core::{num::NonZeroIsize, fmt::Debug};
use granite::{ListStorage, MoveFix};
use crate::util::unreachable_debugchecked;

/// A node of a binary tree.
///
/// Created by the binary tree internally and only publicly exposed so that binary tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, Hash)]
pub struct Node<T, K>
where K: Clone + Debug + Eq,
{
    pub(super) value: T,
    pub(super) left_child: Option<K>,
    pub(super) right_child: Option<K>,
    pub(super) parent: Option<K>,
}
impl<T, K> Node<T, K>
where K: Clone + Debug + Eq,
{
    /// Creates a root node, which has no parent and no children.
    #[inline(always)]
    pub(super) fn root(value: T) -> Self {
        Self {
            value,
            left_child: None,
            right_child: None,
            parent: None,
        }
    }
    /// Creates a childless node under the specified parent.
    #[inline(always)]
    pub(super) fn leaf(value: T, parent: K) -> Self {
        Self {
            value,
            left_child: None,
            right_child: None,
            parent: Some(parent),
        }
    }
    #[inline]
    pub(super) fn child(&self, side: Side) -> Option<&K> {
        match side {
            Side::Left => self.left_child.as_ref(),
            Side::Right => self.right_child.as_ref(),
        }
    }
    #[inline]
    pub(super) fn child_slot_mut(&mut self, side: Side) -> &mut Option<K> {
        match side {
            Side::Left => &mut self.left_child,
            Side::Right => &mut self.right_child,
        }
    }
    #[inline(always)]
    pub(super) fn is_leaf(&self) -> bool {
        self.left_child.is_none() && self.right_child.is_none()
    }
}
impl<T> MoveFix for Node<T, usize> {
    unsafe fn fix_shift<S>(storage: &mut S, shifted_from: usize, shifted_by: NonZeroIsize)
    where S: ListStorage<Element = Self>,
    {
        let fix_starting_from = if shifted_by.get() > 0 {
            shifted_from + 1 // If an insertion happened, ignore the new element
        } else {
            shifted_from
        };
        if fix_starting_from >= storage.len() {
            return;
        };
        for i in fix_starting_from..storage.len() {
            let old_index = (i as isize - shifted_by.get()) as usize; // undo shift to figure out old index
            Self::fix_move(storage, old_index, i);
        }
    }

    unsafe fn fix_move<S>(storage: &mut S, previous_index: usize, current_index: usize)
    where S: ListStorage<Element = Self>,
    {
        // SAFETY: index validity is guaranteed for `current_index`.
        let (parent, left_child, right_child) = {
            let node = storage.get_unchecked(current_index);
            (node.parent, node.left_child, node.right_child)
        };
        if let Some(parent_index) = parent {
            let parent = storage.get_unchecked_mut(parent_index);
            if parent.left_child == Some(previous_index) {
                parent.left_child = Some(current_index);
            } else if parent.right_child == Some(previous_index) {
                parent.right_child = Some(current_index);
            } else {
                unreachable_debugchecked("parent's children don't match the old index");
            }
        }
        for &child_index in [left_child, right_child].iter().flatten() {
            storage.get_unchecked_mut(child_index).parent = Some(current_index);
        }
    }
}

/// One of the two child slots of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(super) enum Side {
    Left,
    Right,
}
impl Side {
    pub(super) const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}
