use core::fmt::{self, Formatter, Debug, Display};
use alloc::{
    string::{String, ToString},
    vec::Vec,
    format,
};
use granite::Storage;
use crate::util::Stack;
use super::{BinaryTree, Node};

const ROOT_CORNER: char = '╗';
const BRANCH_MARK: char = '╖';
const OPEN_CONNECTOR: &str = "╠──";
const CLOSING_CONNECTOR: &str = "╙──";
const OPEN_INDENT: &str = "║   ";
const CLOSING_INDENT: &str = "    ";

impl<T, K, S> BinaryTree<T, K, S>
where
    T: Display,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    /// Renders the shape of the tree as a list of text lines.
    ///
    /// The first line states the size of the tree. It's followed by one line per node, right children listed before left ones, values right-aligned to the width of the longest rendered value. A node with children ends its line with `╖`. Left children and the root are attached with `╙──`, right children with `╠──`, so a lone child can still be told apart by its side.
    ///
    /// The [`Display`] implementation of the tree writes exactly these lines.
    ///
    /// # Example
    /// ```rust
    /// # use birch::BinaryTree;
    /// let mut tree = BinaryTree::<_>::new();
    /// tree.add_root(0)
    ///     .add_left(&0, 1).unwrap()
    ///     .add_right(&0, 2).unwrap();
    ///
    /// assert_eq!(tree.render_lines(), [
    ///     "BinaryTree: (size = 3)",
    ///     "╗",
    ///     "╙──0╖",
    ///     "    ╠──2",
    ///     "    ╙──1",
    /// ]);
    /// ```
    ///
    /// [`Display`]: https://doc.rust-lang.org/std/fmt/trait.Display.html " "
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.size + 2);
        lines.push(format!("BinaryTree: (size = {})", self.size));
        let root = match self.root() {
            Some(root) => root,
            None => return lines,
        };
        let width = self
            .iter()
            .map(|value| value.to_string().chars().count())
            .max()
            .unwrap_or(0);
        let padding = " ".repeat(width.saturating_sub(1));
        lines.push(format!("{}{}", padding, ROOT_CORNER));

        let mut pending = Stack::new();
        pending.push((String::new(), root, true));
        while let Some((prefix, node, closing)) = pending.pop() {
            let connector = if closing { CLOSING_CONNECTOR } else { OPEN_CONNECTOR };
            let mut line = format!(
                "{}{}{}{:>width$}",
                prefix,
                padding,
                connector,
                node.value(),
                width = width,
            );
            if !node.is_leaf() {
                line.push(BRANCH_MARK);
            }
            lines.push(line);

            let indent = if closing { CLOSING_INDENT } else { OPEN_INDENT };
            let child_prefix = format!("{}{}{}", prefix, padding, indent);
            // The right child is rendered first, so it goes on top of the stack.
            if let Some(left_child) = node.left_child() {
                pending.push((child_prefix.clone(), left_child, true));
            }
            if let Some(right_child) = node.right_child() {
                pending.push((child_prefix, right_child, false));
            }
        }
        lines
    }
}
impl<T, K, S> Display for BinaryTree<T, K, S>
where
    T: Display,
    S: Storage<Element = Node<T, K>, Key = K>,
    K: Clone + Debug + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in self.render_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
