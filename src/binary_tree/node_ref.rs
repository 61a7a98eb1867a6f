use core::{fmt::Debug, ptr};
use arrayvec::ArrayVec;
use alloc::vec::Vec;
use granite::Storage;
use super::{BinaryTree, Node, NodeRefMut};

/// A reference to a node in a binary tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the key of the node in the storage, it can be used to traverse the tree.
///
/// Two `NodeRef`s are equal if they point to the same node of the same tree; the values of the nodes are not compared.
#[derive(Debug)]
pub struct NodeRef<'a, T, K, S = Vec<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    tree: &'a BinaryTree<T, K, S>,
    key: K,
}
impl<'a, T, K, S> NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates a new `NodeRef` pointing to the specified key in the storage, or `None` if it's out of bounds.
    #[inline]
    pub fn new_raw(tree: &'a BinaryTree<T, K, S>, key: K) -> Option<Self> {
        if tree.storage.contains_key(&key) {
            Some(unsafe {
                // SAFETY: we just did a key check
                Self::new_raw_unchecked(tree, key)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRef` pointing to the specified key in the storage without doing bounds checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified key is not present in the storage.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(tree: &'a BinaryTree<T, K, S>, key: K) -> Self {
        Self { tree, key }
    }
    /// Returns a reference the raw storage key for the node.
    #[inline(always)]
    pub fn raw_key(&self) -> &K {
        &self.key
    }
    /// Consumes the reference and returns the underlying raw storage key for the node.
    #[inline(always)]
    #[allow(clippy::missing_const_for_fn)]
    pub fn into_raw_key(self) -> K {
        self.key
    }
    /// Returns a reference to the parent node of the pointee, or `None` if it's the root node.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        self.node().parent.as_ref().map(|x| unsafe {
            // SAFETY: nodes can never have out-of-bounds parents
            Self::new_raw_unchecked(self.tree, x.clone())
        })
    }
    /// Returns `true` if the node is the root node, `false` otherwise.
    #[inline(always)]
    // const_option is not stable, and so are trait bounds on const fn parameters other than Sized
    #[allow(clippy::missing_const_for_fn)]
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }
    /// Returns `true` if the node is the left child of its parent, `false` if it's the right one and `None` if it's the root node.
    pub fn is_left_child(&self) -> Option<bool> {
        let parent = self.parent()?;
        Some(parent.node().left_child.as_ref() == Some(&self.key))
    }
    /// Returns a reference to the data stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns a reference to the left child, or `None` if the left slot of the node is empty.
    pub fn left_child(&self) -> Option<Self> {
        self.child_at(self.node().left_child.as_ref())
    }
    /// Returns a reference to the right child, or `None` if the right slot of the node is empty.
    pub fn right_child(&self) -> Option<Self> {
        self.child_at(self.node().right_child.as_ref())
    }
    /// Returns references to the children which are present, the left one first.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root(1).add_right(&1, 3).unwrap();
    ///
    /// let root = tree.root().expect("the root was just added");
    /// let children = root.children();
    /// assert_eq!(children.len(), 1);
    /// assert_eq!(*children[0].value(), 3);
    /// assert_eq!(children[0].is_left_child(), Some(false));
    /// ```
    pub fn children(&self) -> ArrayVec<[Self; 2]> {
        let mut children = ArrayVec::new();
        if let Some(left_child) = self.left_child() {
            children.push(left_child);
        }
        if let Some(right_child) = self.right_child() {
            children.push(right_child);
        }
        children
    }

    fn child_at(&self, key: Option<&K>) -> Option<Self> {
        key.map(|x| unsafe {
            // SAFETY: child keys are guaranteed to be valid; a key check to make sure that
            // properly holds is below.
            debug_assert!(
                self.tree.storage.contains_key(x),
                "\
debug key check failed: tried to reference key {:?} which is not present in the storage",
                x,
            );
            Self::new_raw_unchecked(self.tree, x.clone())
        })
    }
    #[inline(always)]
    fn node(&self) -> &'a Node<T, K> {
        unsafe {
            // SAFETY: all existing NodeRefs are guaranteed to not be dangling
            self.tree.storage.get_unchecked(&self.key)
        }
    }
}
impl<T, K, S> Copy for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Copy + Debug + Eq,
{}
impl<T, K, S> Clone for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            key: self.key.clone(),
        }
    }
}
impl<T, K, S> PartialEq for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.key == other.key
    }
}
impl<T, K, S> Eq for NodeRef<'_, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{}
impl<'a, T, K, S> From<&'a NodeRefMut<'_, T, K, S>> for NodeRef<'a, T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    #[inline(always)]
    fn from(op: &'a NodeRefMut<'_, T, K, S>) -> Self {
        unsafe {
            // SAFETY: the mutable reference points to an existing node
            Self::new_raw_unchecked(&*op.tree, op.key.clone())
        }
    }
}
