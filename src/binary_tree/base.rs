use core::fmt::Debug;
use alloc::vec::Vec;
use granite::Storage;
use log::{debug, trace};
use crate::{
    traversal::{Traversable, Position, Preorder, Inorder, Postorder},
    AnchorNotFoundError,
};
use super::{Node, NodeRef, NodeRefMut, node::Side};

/// A binary tree.
///
/// See the [module-level documentation] for more.
///
/// [module-level documentation]: index.html " "
#[derive(Clone, Debug)]
pub struct BinaryTree<T, K = usize, S = Vec<Node<T, K>>>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    pub(super) storage: S,
    pub(super) root: Option<K>,
    pub(super) size: usize,
}
impl<T, K, S> BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty binary tree.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// // The turbofish there is needed to state that we are using the default storage method
    /// // instead of asking the compiler to infer it, which would be impossible.
    /// let tree = BinaryTree::<u32>::new();
    ///
    /// assert!(tree.is_empty());
    /// assert!(tree.root().is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            storage: S::new(),
            root: None,
            size: 0,
        }
    }
    /// Creates an empty binary tree with the specified capacity for the storage.
    ///
    /// # Panics
    /// The storage may panic if it has fixed capacity and the specified value does not match it.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
            size: 0,
        }
    }

    /// Returns the number of nodes in the tree.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.size
    }
    /// Returns `true` if the tree has no nodes, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns a reference to the root node of the tree, or `None` if the tree is empty.
    pub fn root(&self) -> Option<NodeRef<'_, T, K, S>> {
        self.root.clone().map(move |key| unsafe {
            // SAFETY: the root key always points to an existing node
            NodeRef::new_raw_unchecked(self, key)
        })
    }
    /// Returns a *mutable* reference to the root node of the tree, or `None` if the tree is empty.
    pub fn root_mut(&mut self) -> Option<NodeRefMut<'_, T, K, S>> {
        let key = self.root.clone()?;
        Some(unsafe {
            // SAFETY: as above
            NodeRefMut::new_raw_unchecked(self, key)
        })
    }

    /// Sets the value of the root node, creating the root if the tree is empty.
    ///
    /// If there already is a root node, its value is overwritten in place: the size of the tree and its shape stay the same.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root(5).add_root(9);
    ///
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.root().map(|root| *root.value()), Some(9));
    /// ```
    pub fn add_root(&mut self, value: T) -> &mut Self {
        if let Some(root_key) = &self.root {
            let root = unsafe {
                // SAFETY: the root key always points to an existing node
                self.storage.get_unchecked_mut(root_key)
            };
            root.value = value;
            trace!("overwrote the root at key {:?} in place", root_key);
        } else {
            let root_key = self.storage.add(Node::root(value));
            trace!("created the root at key {:?}", root_key);
            self.root = Some(root_key);
            self.size = 1;
        }
        self
    }
    /// Sets the left child of the first node holding `existing_value`.
    ///
    /// Nodes are searched in preorder; if several nodes hold the anchor value, the one visited first is used. If the node already has a left child, the value of that child is overwritten in place instead of creating a new node.
    ///
    /// # Errors
    /// Will fail if no node holds `existing_value`. The tree is left unmodified in such a case, and the value which was supposed to be inserted is returned to the caller.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root("root")
    ///     .add_left(&"root", "left").unwrap()
    ///     .add_left(&"root", "new left").unwrap(); // Overwrites, the size stays the same
    /// assert_eq!(tree.len(), 2);
    ///
    /// let error = tree.add_left(&"nowhere", "lost").err().expect("there is no such anchor");
    /// assert_eq!(error.into_new_value(), "lost");
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn add_left(
        &mut self,
        existing_value: &T,
        new_value: T,
    ) -> Result<&mut Self, AnchorNotFoundError<T>>
    where
        T: PartialEq,
    {
        self.add_child(existing_value, new_value, Side::Left)
    }
    /// Sets the right child of the first node holding `existing_value`.
    ///
    /// Follows the same rules as [`add_left`], but for the right child slot.
    ///
    /// # Errors
    /// Will fail if no node holds `existing_value`, leaving the tree unmodified.
    ///
    /// [`add_left`]: #method.add_left " "
    pub fn add_right(
        &mut self,
        existing_value: &T,
        new_value: T,
    ) -> Result<&mut Self, AnchorNotFoundError<T>>
    where
        T: PartialEq,
    {
        self.add_child(existing_value, new_value, Side::Right)
    }
    fn add_child(
        &mut self,
        existing_value: &T,
        new_value: T,
        side: Side,
    ) -> Result<&mut Self, AnchorNotFoundError<T>>
    where
        T: PartialEq,
    {
        let anchor = match self.find_key(existing_value) {
            Some(key) => key,
            None => {
                debug!(
                    "anchor value not found among {} nodes, {} child not inserted",
                    self.size,
                    side.name(),
                );
                return Err(AnchorNotFoundError { new_value });
            }
        };
        let mut anchor = unsafe {
            // SAFETY: the key was produced by a traversal of this very tree
            NodeRefMut::new_raw_unchecked(self, anchor)
        };
        anchor.set_child(side, new_value);
        Ok(self)
    }

    /// Returns a reference to the first node in preorder which holds the specified value, or `None` if there is no such node.
    ///
    /// This is the search used to locate anchors by [`add_left`] and [`add_right`].
    ///
    /// [`add_left`]: #method.add_left " "
    /// [`add_right`]: #method.add_right " "
    pub fn find(&self, value: &T) -> Option<NodeRef<'_, T, K, S>>
    where
        T: PartialEq,
    {
        let key = self.find_key(value)?;
        Some(unsafe {
            // SAFETY: as in add_child
            NodeRef::new_raw_unchecked(self, key)
        })
    }
    /// Returns a *mutable* reference to the first node in preorder which holds the specified value, or `None` if there is no such node.
    pub fn find_mut(&mut self, value: &T) -> Option<NodeRefMut<'_, T, K, S>>
    where
        T: PartialEq,
    {
        let key = self.find_key(value)?;
        Some(unsafe {
            // SAFETY: as above
            NodeRefMut::new_raw_unchecked(self, key)
        })
    }
    /// Returns `true` if any node holds the specified value, `false` otherwise.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.find_key(value).is_some()
    }
    fn find_key(&self, value: &T) -> Option<K>
    where
        T: PartialEq,
    {
        let mut cursor = Preorder::new(self);
        loop {
            let key = cursor.position()?.clone();
            if self.value_of(&key) == value {
                return Some(key);
            }
            cursor.advance();
        }
    }

    /// Returns a cursor at the first node of the tree in preorder.
    #[inline]
    pub fn begin_preorder(&self) -> Preorder<'_, Self> {
        Preorder::new(self)
    }
    /// Returns the cursor which any exhausted preorder cursor of the tree compares equal to.
    #[inline]
    pub fn end_preorder(&self) -> Preorder<'_, Self> {
        Preorder::end(self)
    }
    /// Returns a cursor at the first node of the tree in inorder.
    #[inline]
    pub fn begin_inorder(&self) -> Inorder<'_, Self> {
        Inorder::new(self)
    }
    /// Returns the cursor which any exhausted inorder cursor of the tree compares equal to.
    #[inline]
    pub fn end_inorder(&self) -> Inorder<'_, Self> {
        Inorder::end(self)
    }
    /// Returns a cursor at the first node of the tree in postorder.
    #[inline]
    pub fn begin_postorder(&self) -> Postorder<'_, Self> {
        Postorder::new(self)
    }
    /// Returns the cursor which any exhausted postorder cursor of the tree compares equal to.
    #[inline]
    pub fn end_postorder(&self) -> Postorder<'_, Self> {
        Postorder::end(self)
    }
    /// Returns a cursor at the first node of the tree in the default order, which is inorder.
    #[inline(always)]
    pub fn begin(&self) -> Inorder<'_, Self> {
        self.begin_inorder()
    }
    /// Returns the end cursor of the default order, which is inorder.
    #[inline(always)]
    pub fn end(&self) -> Inorder<'_, Self> {
        self.end_inorder()
    }
    /// Returns an iterator over the values of the tree in the default order, which is inorder.
    #[inline(always)]
    pub fn iter(&self) -> Inorder<'_, Self> {
        self.begin_inorder()
    }
    /// Clones the values of the tree into a `Vec`, in the default order.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root(0)
    ///     .add_left(&0, 1).unwrap()
    ///     .add_right(&0, 2).unwrap();
    /// assert_eq!(tree.to_vec(), [1, 0, 2]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.size);
        values.extend(self.iter().cloned());
        values
    }
}
impl<T, K, S> Default for BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Creates an empty tree, which is also what `core::mem::take` leaves behind when moving a tree out.
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
impl<'a, T, K, S> IntoIterator for &'a BinaryTree<T, K, S>
where
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    type Item = &'a T;
    type IntoIter = Inorder<'a, BinaryTree<T, K, S>>;
    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.begin_inorder()
    }
}
