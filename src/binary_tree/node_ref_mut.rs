use core::{fmt::Debug, mem};
use alloc::vec::Vec;
use granite::Storage;
use log::trace;
use super::{BinaryTree, Node, NodeRef, node::Side};

/// A *mutable* reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree and modify it as a whole.
#[derive(Debug)]
pub struct NodeRefMut<'a, T, K, S = Vec<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) tree: &'a mut BinaryTree<T, K, S>,
    pub(super) key: K,
}
impl<'a, T, K, S> NodeRefMut<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage, or `None` if it does not exist.
    pub fn new_raw(tree: &'a mut BinaryTree<T, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(unsafe {
                // SAFETY: we just did key checking
                Self::new_raw_unchecked(tree, key)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRefMut` pointing to the specified key in the storage without doing key checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified key is not present in the storage.
    pub unsafe fn new_raw_unchecked(tree: &'a mut BinaryTree<T, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns a reference to the raw storage key for the node.
    pub fn raw_key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_raw_key(self) -> K {
        self.key
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    pub fn parent(&self) -> Option<NodeRef<'_, T, K, S>> {
        NodeRef::from(self).parent()
    }
    /// Returns a *mutable* reference to the parent node of the pointee, or `None` if it's the root node.
    pub fn parent_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.node().parent.as_ref().cloned();
        key.map(move |x| unsafe {
            // SAFETY: nodes can never have nonexistent parents
            NodeRefMut::new_raw_unchecked(self.tree, x)
        })
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[allow(clippy::missing_const_for_fn)] // const_option is not stable
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
    /// Returns a reference to the data stored in the node.
    pub fn value(&self) -> &'_ T {
        &self.node().value
    }
    /// Returns a *mutable* reference to the data stored in the node.
    ///
    /// Changing the value changes which insertions use this node as their anchor.
    pub fn value_mut(&mut self) -> &'_ mut T {
        &mut self.node_mut().value
    }
    /// Returns a reference to the left child, or `None` if the left slot of the node is empty.
    pub fn left_child(&self) -> Option<NodeRef<'_, T, K, S>> {
        NodeRef::from(self).left_child()
    }
    /// Returns a *mutable* reference to the left child, or `None` if the left slot of the node is empty.
    pub fn left_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        self.child_mut(Side::Left)
    }
    /// Returns a reference to the right child, or `None` if the right slot of the node is empty.
    pub fn right_child(&self) -> Option<NodeRef<'_, T, K, S>> {
        NodeRef::from(self).right_child()
    }
    /// Returns a *mutable* reference to the right child, or `None` if the right slot of the node is empty.
    pub fn right_child_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        self.child_mut(Side::Right)
    }

    /// Puts the specified value into the left child slot.
    ///
    /// If the slot is empty, a new node is created there and the size of the tree grows by one, and `None` is returned. Otherwise, the value of the existing left child is overwritten in place, and the previous value is returned.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root(0);
    ///
    /// let mut root = tree.root_mut().expect("the root was just added");
    /// assert_eq!(root.set_left_child(1), None);
    /// assert_eq!(root.set_left_child(2), Some(1));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn set_left_child(&mut self, value: T) -> Option<T> {
        self.set_child(Side::Left, value)
    }
    /// Puts the specified value into the right child slot.
    ///
    /// Follows the same rules as [`set_left_child`].
    ///
    /// [`set_left_child`]: #method.set_left_child " "
    pub fn set_right_child(&mut self, value: T) -> Option<T> {
        self.set_child(Side::Right, value)
    }
    pub(super) fn set_child(&mut self, side: Side, value: T) -> Option<T> {
        if let Some(child_key) = self.node().child(side).cloned() {
            let child = unsafe {
                // SAFETY: child keys are guaranteed to be valid
                self.tree.storage.get_unchecked_mut(&child_key)
            };
            let previous = mem::replace(&mut child.value, value);
            trace!(
                "overwrote the {} child of key {:?} at key {:?} in place",
                side.name(),
                &self.key,
                &child_key,
            );
            Some(previous)
        } else {
            let child_key = self.tree.storage.add(Node::leaf(value, self.key.clone()));
            *self.node_mut().child_slot_mut(side) = Some(child_key.clone());
            self.tree.size += 1;
            trace!(
                "created the {} child of key {:?} at key {:?} (size = {})",
                side.name(),
                &self.key,
                &child_key,
                self.tree.size,
            );
            None
        }
    }

    fn child_mut(&mut self, side: Side) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.node().child(side).cloned();
        key.map(move |x| unsafe {
            // SAFETY: child keys are guaranteed to be valid; a key check to make sure that
            // properly holds is below.
            debug_assert!(
                self.tree.storage.contains_key(&x),
                "\
debug key check failed: tried to reference key {:?} which is not present in the storage",
                &x,
            );
            NodeRefMut::new_raw_unchecked(self.tree, x)
        })
    }
    fn node(&self) -> &'_ Node<T, K> {
        unsafe {
            // SAFETY: all existing NodeRefMuts are guaranteed to not be dangling
            self.tree.storage.get_unchecked(&self.key)
        }
    }
    fn node_mut(&mut self) -> &'_ mut Node<T, K> {
        unsafe {
            // SAFETY: as above
            self.tree.storage.get_unchecked_mut(&self.key)
        }
    }
}
