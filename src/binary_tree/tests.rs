use super::*;
use crate::{traversal::Position, AnchorNotFoundError};
use alloc::{string::String, vec::Vec};
use core::mem;
use proptest::prelude::*;

fn three_nodes() -> BinaryTree<u32> {
    let mut tree = BinaryTree::new();
    tree.add_root(0)
        .add_left(&0, 1)
        .expect("root exists")
        .add_right(&0, 2)
        .expect("root exists");
    tree
}

/// Builds a complete binary tree where the children of `i` are `2i + 1` and `2i + 2`.
fn complete(num_nodes: u32) -> BinaryTree<u32> {
    let mut tree = BinaryTree::new();
    tree.add_root(0);
    for i in 0..num_nodes {
        if 2 * i + 1 < num_nodes {
            tree.add_left(&i, 2 * i + 1).expect("parent was inserted earlier");
        }
        if 2 * i + 2 < num_nodes {
            tree.add_right(&i, 2 * i + 2).expect("parent was inserted earlier");
        }
    }
    tree
}

fn preorder_of_complete(i: u32, num_nodes: u32, out: &mut Vec<u32>) {
    if i >= num_nodes {
        return;
    }
    out.push(i);
    preorder_of_complete(2 * i + 1, num_nodes, out);
    preorder_of_complete(2 * i + 2, num_nodes, out);
}
fn inorder_of_complete(i: u32, num_nodes: u32, out: &mut Vec<u32>) {
    if i >= num_nodes {
        return;
    }
    inorder_of_complete(2 * i + 1, num_nodes, out);
    out.push(i);
    inorder_of_complete(2 * i + 2, num_nodes, out);
}
fn postorder_of_complete(i: u32, num_nodes: u32, out: &mut Vec<u32>) {
    if i >= num_nodes {
        return;
    }
    postorder_of_complete(2 * i + 1, num_nodes, out);
    postorder_of_complete(2 * i + 2, num_nodes, out);
    out.push(i);
}

fn preorder(tree: &BinaryTree<u32>) -> Vec<u32> {
    tree.begin_preorder().copied().collect()
}
fn inorder(tree: &BinaryTree<u32>) -> Vec<u32> {
    tree.begin_inorder().copied().collect()
}
fn postorder(tree: &BinaryTree<u32>) -> Vec<u32> {
    tree.begin_postorder().copied().collect()
}

#[test]
fn basic() {
    let tree = three_nodes();
    assert_eq!(tree.len(), 3);

    let root = tree.root().expect("root exists");
    assert!(root.is_root());
    assert_eq!(*root.value(), 0);
    let left_child_val = root.left_child().as_ref().map(NodeRef::value);
    let right_child_val = root.right_child().as_ref().map(NodeRef::value);
    assert_eq!(left_child_val, Some(&1));
    assert_eq!(right_child_val, Some(&2));
}

#[test]
fn empty_tree() {
    let tree = BinaryTree::<u32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.root().is_none());
    assert!(tree.to_vec().is_empty());
    assert_eq!(tree.begin_preorder().count(), 0);
    assert_eq!(tree.begin_inorder().count(), 0);
    assert_eq!(tree.begin_postorder().count(), 0);
    assert!(!tree.contains(&0));
}

#[test]
fn three_node_orders() {
    let tree = three_nodes();
    assert_eq!(preorder(&tree), [0, 1, 2]);
    assert_eq!(inorder(&tree), [1, 0, 2]);
    assert_eq!(postorder(&tree), [1, 2, 0]);
    assert_eq!(tree.to_vec(), [1, 0, 2]);
    assert_eq!(tree.begin().copied().collect::<Vec<_>>(), [1, 0, 2]);
}

#[test]
fn add_root_overwrites() {
    let mut tree = BinaryTree::<u32>::new();
    tree.add_root(5);
    tree.add_root(9);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.to_vec(), [9]);

    // Overwriting the root keeps its children.
    let mut tree = three_nodes();
    tree.add_root(7);
    assert_eq!(tree.len(), 3);
    assert_eq!(preorder(&tree), [7, 1, 2]);

    let mut sparse_tree = SparseVecBinaryTree::<u32>::new();
    sparse_tree.add_root(5).add_left(&5, 6).expect("root exists");
    sparse_tree.add_root(9);
    assert_eq!(sparse_tree.len(), 2);
    assert_eq!(sparse_tree.begin_preorder().copied().collect::<Vec<_>>(), [9, 6]);
}

#[test]
fn child_slots_are_upserted() {
    let mut tree = three_nodes();
    tree.add_left(&0, 10).expect("root exists");
    assert_eq!(tree.len(), 3);
    assert_eq!(preorder(&tree), [0, 10, 2]);

    tree.add_right(&0, 20).expect("root exists");
    tree.add_right(&0, 21).expect("root exists");
    assert_eq!(tree.len(), 3);
    assert_eq!(preorder(&tree), [0, 10, 21]);

    // The overwritten node keeps its place, so its old value no longer anchors anything.
    assert!(tree.add_left(&1, 3).is_err());
    tree.add_left(&10, 3).expect("the left child holds 10 now");
    assert_eq!(tree.len(), 4);
    assert_eq!(inorder(&tree), [3, 10, 0, 21]);
}

#[test]
fn missing_anchor_leaves_tree_unchanged() {
    let mut tree = three_nodes();
    let error = tree.add_left(&42, 3).err().expect("42 is not in the tree");
    assert_eq!(error, AnchorNotFoundError { new_value: 3 });
    assert_eq!(error.into_new_value(), 3);
    let error = tree.add_right(&42, 4).err().expect("42 is not in the tree");
    assert_eq!(error.new_value, 4);

    assert_eq!(tree.len(), 3);
    assert_eq!(preorder(&tree), [0, 1, 2]);
    assert_eq!(postorder(&tree), [1, 2, 0]);

    let mut empty = BinaryTree::<u32>::new();
    assert!(empty.add_left(&0, 1).is_err());
    assert!(empty.add_right(&0, 1).is_err());
    assert!(empty.is_empty());
}

#[test]
fn anchor_error_message() {
    let error = AnchorNotFoundError { new_value: 'x' };
    assert_eq!(
        alloc::format!("{}", error),
        "the anchor value does not exist in the tree",
    );
}

#[test]
fn duplicate_anchor_resolves_in_preorder() {
    // 0 has a left child 1 and a right child 5, and 1 has another 5 as its left child.
    // Preorder visits the 5 under 1 first.
    let mut tree = BinaryTree::<u32>::new();
    tree.add_root(0)
        .add_left(&0, 1)
        .and_then(|tree| tree.add_right(&0, 5))
        .and_then(|tree| tree.add_left(&1, 5))
        .expect("all anchors exist");
    assert_eq!(preorder(&tree), [0, 1, 5, 5]);

    let first = tree.find(&5).expect("5 is in the tree");
    assert_eq!(first.parent().map(|parent| *parent.value()), Some(1));
    assert_eq!(first.is_left_child(), Some(true));

    tree.add_right(&5, 9).expect("5 is in the tree");
    assert_eq!(preorder(&tree), [0, 1, 5, 9, 5]);
    let right_five = tree
        .root()
        .and_then(|root| root.right_child())
        .expect("root has a right child");
    assert!(right_five.is_leaf());
}

#[test]
fn complete_tree_matches_recursive_definition() {
    for &num_nodes in &[1, 2, 3, 7, 10, 31, 100] {
        let tree = complete(num_nodes);
        assert_eq!(tree.len(), num_nodes as usize);

        let mut expected = Vec::new();
        preorder_of_complete(0, num_nodes, &mut expected);
        assert_eq!(preorder(&tree), expected);

        expected.clear();
        inorder_of_complete(0, num_nodes, &mut expected);
        assert_eq!(inorder(&tree), expected);
        assert_eq!(tree.to_vec(), expected);

        expected.clear();
        postorder_of_complete(0, num_nodes, &mut expected);
        assert_eq!(postorder(&tree), expected);
    }
}

#[test]
fn lopsided_trees() {
    // Only right children: a linked list going right.
    let mut tree = BinaryTree::<u32>::new();
    tree.add_root(0);
    for i in 1..5 {
        tree.add_right(&(i - 1), i).expect("parent was inserted earlier");
    }
    assert_eq!(preorder(&tree), [0, 1, 2, 3, 4]);
    assert_eq!(inorder(&tree), [0, 1, 2, 3, 4]);
    assert_eq!(postorder(&tree), [4, 3, 2, 1, 0]);

    // Only left children.
    let mut tree = BinaryTree::<u32>::new();
    tree.add_root(0);
    for i in 1..5 {
        tree.add_left(&(i - 1), i).expect("parent was inserted earlier");
    }
    assert_eq!(preorder(&tree), [0, 1, 2, 3, 4]);
    assert_eq!(inorder(&tree), [4, 3, 2, 1, 0]);
    assert_eq!(postorder(&tree), [4, 3, 2, 1, 0]);

    // Zigzag: 0 -left-> 1 -right-> 2 -left-> 3
    let mut tree = BinaryTree::<u32>::new();
    tree.add_root(0)
        .add_left(&0, 1)
        .and_then(|tree| tree.add_right(&1, 2))
        .and_then(|tree| tree.add_left(&2, 3))
        .expect("all anchors exist");
    assert_eq!(preorder(&tree), [0, 1, 2, 3]);
    assert_eq!(inorder(&tree), [1, 3, 2, 0]);
    assert_eq!(postorder(&tree), [3, 2, 1, 0]);
}

#[test]
fn deep_tree_does_not_recurse() {
    const DEPTH: u32 = 50_000;
    let mut tree = VecBinaryTree::<u32>::new();
    tree.add_root(0);
    let mut key = tree.root().expect("root exists").into_raw_key();
    for i in 1..DEPTH {
        let mut node = NodeRefMut::new_raw(&mut tree, key).expect("key was just produced");
        node.set_left_child(i);
        key = node
            .left_child()
            .expect("left child was just set")
            .into_raw_key();
    }
    assert_eq!(tree.len(), DEPTH as usize);
    assert_eq!(tree.begin_preorder().count(), DEPTH as usize);
    assert_eq!(tree.begin_inorder().next(), Some(&(DEPTH - 1)));
    assert_eq!(tree.begin_postorder().next(), Some(&(DEPTH - 1)));
    assert_eq!(tree.begin_postorder().last(), Some(&0));
    drop(tree);
}

#[test]
fn default_tree_is_copyable() {
    fn assert_clone<T: Clone>() {}
    assert_clone::<BinaryTree<u32>>();
    assert_clone::<BinaryTree<String>>();
    assert_clone::<VecBinaryTree<u32>>();

    let tree: BinaryTree<String> = {
        let mut tree = BinaryTree::new();
        tree.add_root(String::from("root"))
            .add_left(&String::from("root"), String::from("left"))
            .expect("root exists");
        tree
    };
    let mut copy = tree.clone();
    copy.find_mut(&String::from("left"))
        .expect("the copy has the left child")
        .value_mut()
        .push_str(" (copy)");
    assert_eq!(tree.to_vec(), ["left", "root"]);
    assert_eq!(copy.to_vec(), ["left (copy)", "root"]);
}

#[test]
fn copy_is_deep() {
    let original = complete(15);
    let mut copy = original.clone();
    assert_eq!(preorder(&copy), preorder(&original));
    assert_eq!(inorder(&copy), inorder(&original));
    assert_eq!(postorder(&copy), postorder(&original));

    copy.add_root(100);
    copy.add_left(&7, 200).expect("7 is a leaf of the copy");
    copy.add_left(&1, 300).expect("1 is in the copy");
    assert_eq!(copy.len(), 16);

    assert_eq!(original.len(), 15);
    let mut expected = Vec::new();
    preorder_of_complete(0, 15, &mut expected);
    assert_eq!(preorder(&original), expected);
    assert!(!original.contains(&200));
    assert!(!original.contains(&300));

    // And the other way around.
    let mut original = original;
    original.add_right(&14, 400).expect("14 is a leaf of the original");
    assert!(!copy.contains(&400));
}

#[test]
fn move_leaves_source_empty() {
    let mut source = three_nodes();
    let moved = mem::take(&mut source);
    assert!(source.is_empty());
    assert!(source.root().is_none());
    assert_eq!(source.begin_inorder().count(), 0);
    assert_eq!(moved.len(), 3);
    assert_eq!(preorder(&moved), [0, 1, 2]);

    // The emptied source is a fully functional tree.
    source.add_root(1).add_left(&1, 2).expect("root exists");
    assert_eq!(source.len(), 2);
    assert_eq!(moved.len(), 3);
}

#[test]
fn size_counts_every_reachable_node_once() {
    let tree = complete(63);
    assert_eq!(tree.begin_inorder().count(), tree.len());
    assert_eq!(tree.begin_preorder().count(), tree.len());
    assert_eq!(tree.begin_postorder().count(), tree.len());

    let mut seen = inorder(&tree);
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), tree.len());
}

#[test]
fn node_navigation() {
    let tree = complete(7);
    let root = tree.root().expect("root exists");
    assert_eq!(root.is_left_child(), None);
    assert_eq!(root.parent(), None);

    let children = root.children();
    assert_eq!(children.len(), 2);
    assert_eq!(*children[0].value(), 1);
    assert_eq!(*children[1].value(), 2);
    assert_eq!(children[0].is_left_child(), Some(true));
    assert_eq!(children[1].is_left_child(), Some(false));
    assert_eq!(children[1].parent(), Some(root));

    let leaf = tree.find(&6).expect("6 is in the tree");
    assert!(leaf.is_leaf());
    assert!(leaf.children().is_empty());
    assert_eq!(leaf.parent().map(|parent| *parent.value()), Some(2));
    assert_eq!(
        leaf.parent().and_then(|parent| parent.parent()),
        Some(root),
    );
}

#[test]
fn node_refs_compare_by_identity() {
    let mut tree = BinaryTree::<u32>::new();
    tree.add_root(1)
        .add_left(&1, 1)
        .expect("root exists");
    let root = tree.root().expect("root exists");
    let left_child = root.left_child().expect("left child exists");
    assert_eq!(root.value(), left_child.value());
    assert_ne!(root, left_child);

    let copy = tree.clone();
    assert_ne!(copy.root(), tree.root());
}

#[test]
fn mutable_references() {
    let mut tree = complete(3);
    {
        let mut node = tree.find_mut(&1).expect("1 is in the tree");
        *node.value_mut() = 11;
        assert_eq!(node.set_right_child(3), None);
        assert_eq!(node.set_right_child(4), Some(3));
        let mut parent = node.parent_mut().expect("1 is not the root");
        assert_eq!(*parent.value(), 0);
        *parent
            .right_child_mut()
            .expect("root has a right child")
            .value_mut() = 22;
    }
    assert_eq!(tree.len(), 4);
    assert_eq!(preorder(&tree), [0, 11, 4, 22]);
    assert!(tree.find(&1).is_none());

    let mut root = tree.root_mut().expect("root exists");
    assert!(root.is_root());
    let left_child = root.left_child_mut().expect("root has a left child");
    assert_eq!(*left_child.value(), 11);
    assert!(!left_child.is_leaf());
}

#[test]
fn iterating_by_reference() {
    let tree = complete(7);
    let mut sum = 0;
    for value in &tree {
        sum += value;
    }
    assert_eq!(sum, 21);
    assert_eq!(tree.iter().count(), 7);
}

#[test]
fn alternative_storages() {
    let mut vec_tree = VecBinaryTree::<u32>::with_capacity(3);
    let mut sparse_tree = SparseVecBinaryTree::<u32>::with_capacity(3);
    vec_tree.add_root(0).add_left(&0, 1).expect("root exists");
    sparse_tree.add_root(0).add_left(&0, 1).expect("root exists");
    assert_eq!(
        vec_tree.begin_postorder().copied().collect::<Vec<_>>(),
        sparse_tree.begin_postorder().copied().collect::<Vec<_>>(),
    );
}

#[test]
fn render_three_nodes() {
    let tree = three_nodes();
    assert_eq!(
        tree.render_lines(),
        ["BinaryTree: (size = 3)", "╗", "╙──0╖", "    ╠──2", "    ╙──1"],
    );
    assert_eq!(
        alloc::format!("{}", tree),
        "BinaryTree: (size = 3)\n╗\n╙──0╖\n    ╠──2\n    ╙──1\n",
    );
}

#[test]
fn render_aligns_to_widest_value() {
    let mut tree = BinaryTree::<u32>::new();
    tree.add_root(10).add_left(&10, 7).expect("root exists");
    assert_eq!(
        tree.render_lines(),
        ["BinaryTree: (size = 2)", " ╗", " ╙──10╖", "      ╙── 7"],
    );
}

#[test]
fn render_distinguishes_sides() {
    let mut left_only = BinaryTree::<u32>::new();
    left_only.add_root(0).add_left(&0, 1).expect("root exists");
    let mut right_only = BinaryTree::<u32>::new();
    right_only.add_root(0).add_right(&0, 1).expect("root exists");
    assert_ne!(left_only.render_lines(), right_only.render_lines());
    assert_eq!(right_only.render_lines()[3], "    ╠──1");

    // Every node gets exactly one line.
    let tree = complete(20);
    assert_eq!(tree.render_lines().len(), 20 + 2);
    assert_eq!(tree.render_lines(), tree.clone().render_lines());
}

#[test]
fn render_empty() {
    let tree = BinaryTree::<String>::new();
    assert_eq!(tree.render_lines(), ["BinaryTree: (size = 0)"]);
}

/// An independent model of a binary tree with index links, traversed recursively.
#[derive(Debug, Default)]
struct Model {
    nodes: Vec<ModelNode>,
}
#[derive(Debug)]
struct ModelNode {
    value: u32,
    left: Option<usize>,
    right: Option<usize>,
}
impl Model {
    fn with_root(value: u32) -> Self {
        Self {
            nodes: alloc::vec![ModelNode { value, left: None, right: None }],
        }
    }
    fn set_child(&mut self, parent: usize, left: bool, value: u32) {
        let slot = if left {
            self.nodes[parent].left
        } else {
            self.nodes[parent].right
        };
        match slot {
            Some(child) => self.nodes[child].value = value,
            None => {
                self.nodes.push(ModelNode { value, left: None, right: None });
                let child = Some(self.nodes.len() - 1);
                if left {
                    self.nodes[parent].left = child;
                } else {
                    self.nodes[parent].right = child;
                }
            }
        }
    }
    fn preorder(&self, at: Option<usize>, out: &mut Vec<u32>) {
        if let Some(at) = at {
            out.push(self.nodes[at].value);
            self.preorder(self.nodes[at].left, out);
            self.preorder(self.nodes[at].right, out);
        }
    }
    fn inorder(&self, at: Option<usize>, out: &mut Vec<u32>) {
        if let Some(at) = at {
            self.inorder(self.nodes[at].left, out);
            out.push(self.nodes[at].value);
            self.inorder(self.nodes[at].right, out);
        }
    }
    fn postorder(&self, at: Option<usize>, out: &mut Vec<u32>) {
        if let Some(at) = at {
            self.postorder(self.nodes[at].left, out);
            self.postorder(self.nodes[at].right, out);
            out.push(self.nodes[at].value);
        }
    }
}

/// Applies the insertions to both a tree and a model. Every inserted value is fresh, so the values stay distinct even when a slot gets overwritten.
fn build(insertions: &[(bool, prop::sample::Index)]) -> (BinaryTree<u32>, Model) {
    let mut tree = BinaryTree::new();
    tree.add_root(0);
    let mut model = Model::with_root(0);
    for (new_value, (left, anchor)) in (1..).zip(insertions) {
        let parent = anchor.index(model.nodes.len());
        let anchor_value = model.nodes[parent].value;
        let result = if *left {
            tree.add_left(&anchor_value, new_value)
        } else {
            tree.add_right(&anchor_value, new_value)
        };
        result.expect("the anchor was picked from the values in the tree");
        model.set_child(parent, *left, new_value);
    }
    (tree, model)
}

proptest! {
    #[test]
    fn traversals_match_recursive_model(
        insertions in prop::collection::vec((any::<bool>(), any::<prop::sample::Index>()), 0..64),
    ) {
        let (tree, model) = build(&insertions);
        prop_assert_eq!(tree.len(), model.nodes.len());

        let mut expected = Vec::new();
        model.preorder(Some(0), &mut expected);
        prop_assert_eq!(preorder(&tree), expected.clone());

        expected.clear();
        model.inorder(Some(0), &mut expected);
        prop_assert_eq!(inorder(&tree), expected.clone());
        prop_assert_eq!(tree.to_vec(), expected.clone());

        expected.clear();
        model.postorder(Some(0), &mut expected);
        prop_assert_eq!(postorder(&tree), expected);
    }

    #[test]
    fn missing_anchor_never_modifies(
        insertions in prop::collection::vec((any::<bool>(), any::<prop::sample::Index>()), 0..32),
        left in any::<bool>(),
    ) {
        let (mut tree, _) = build(&insertions);
        let before = tree.clone();
        let missing = u32::MAX;
        let result = if left {
            tree.add_left(&missing, 7)
        } else {
            tree.add_right(&missing, 7)
        };
        prop_assert!(result.is_err());
        prop_assert_eq!(tree.len(), before.len());
        prop_assert_eq!(preorder(&tree), preorder(&before));
        prop_assert_eq!(postorder(&tree), postorder(&before));
    }

    #[test]
    fn copies_are_independent(
        insertions in prop::collection::vec((any::<bool>(), any::<prop::sample::Index>()), 0..32),
    ) {
        let (original, _) = build(&insertions);
        let snapshot = (preorder(&original), inorder(&original), postorder(&original));
        let mut copy = original.clone();
        prop_assert_eq!(preorder(&copy), snapshot.0.clone());

        let fresh = u32::MAX;
        copy.add_root(fresh);
        copy.add_left(&fresh, fresh - 1).expect("the root holds the fresh value");
        prop_assert_eq!(
            (preorder(&original), inorder(&original), postorder(&original)),
            snapshot,
        );
        prop_assert!(!original.contains(&fresh));
    }
}

#[test]
fn cursor_position_helpers() {
    let tree = three_nodes();
    let mut cursor = tree.begin_postorder();
    assert_eq!(cursor.get(), Some(&1));
    cursor.advance();
    assert_eq!(cursor.try_get(), Ok(&2));
}
