use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub val: T,
    pub left: Option<Box<Node<T>>>,
    pub right: Option<Box<Node<T>>>,
}

/// How a flat array is turned into a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// `values[i]` has its children at `2i + 1` and `2i + 2`, `None` marks a hole
    #[default]
    Heap,
    /// balanced search tree over the non-null values
    Bst,
}

impl Mode {
    /// Anything other than `"bst"` falls back to the heap layout.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("bst") => Mode::Bst,
            _ => Mode::Heap,
        }
    }
}

pub fn build<T: Ord + Clone>(values: &[Option<T>], mode: Mode) -> Option<Box<Node<T>>> {
    match mode {
        Mode::Heap => build_tree(values),
        Mode::Bst => {
            let mut sorted: Vec<T> = values.iter().flatten().cloned().collect();
            sorted.sort_unstable();
            build_bst(&sorted)
        }
    }
}

pub fn build_tree<T: Clone>(values: &[Option<T>]) -> Option<Box<Node<T>>> {
    build_tree_at(values, 0)
}

fn build_tree_at<T: Clone>(values: &[Option<T>], index: usize) -> Option<Box<Node<T>>> {
    let val = values.get(index)?.clone()?;
    Some(Box::new(Node {
        val,
        left: build_tree_at(values, 2 * index + 1),
        right: build_tree_at(values, 2 * index + 2),
    }))
}

/// `sorted` must already be in ascending order.
pub fn build_bst<T: Clone>(sorted: &[T]) -> Option<Box<Node<T>>> {
    if sorted.is_empty() {
        return None;
    }
    let mid = sorted.len() / 2;
    Some(Box::new(Node {
        val: sorted[mid].clone(),
        left: build_bst(&sorted[..mid]),
        right: build_bst(&sorted[mid + 1..]),
    }))
}

pub fn inorder<T: Clone>(node: Option<&Node<T>>) -> Vec<T> {
    let mut out = Vec::new();
    inorder_into(node, &mut out);
    out
}

fn inorder_into<T: Clone>(node: Option<&Node<T>>, out: &mut Vec<T>) {
    if let Some(node) = node {
        inorder_into(node.left.as_deref(), out);
        out.push(node.val.clone());
        inorder_into(node.right.as_deref(), out);
    }
}

/// Sideways drawing of the tree: right subtree above its parent, left below.
pub fn ascii_tree<T: Display>(node: Option<&Node<T>>) -> String {
    let mut out = String::new();
    draw(node, "", true, &mut out);
    out
}

fn draw<T: Display>(node: Option<&Node<T>>, prefix: &str, is_left: bool, out: &mut String) {
    let Some(node) = node else {
        return;
    };

    let (above, below) = if is_left {
        ("|   ", "    ")
    } else {
        ("    ", "|   ")
    };
    let branch = if is_left { "└── " } else { "┌── " };

    draw(node.right.as_deref(), &format!("{prefix}{above}"), false, out);
    out.push_str(prefix);
    out.push_str(branch);
    out.push_str(&node.val.to_string());
    out.push('\n');
    draw(node.left.as_deref(), &format!("{prefix}{below}"), true, out);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn heap_tree_test() {
        let root = build_tree(&[Some(1), Some(2), Some(3), None, Some(5)]).unwrap();
        assert_eq!(root.val, 1);
        let left = root.left.as_deref().unwrap();
        assert_eq!(left.val, 2);
        assert!(left.left.is_none());
        assert_eq!(left.right.as_ref().unwrap().val, 5);
        assert_eq!(root.right.as_ref().unwrap().val, 3);

        assert_eq!(inorder(Some(&root)), vec![2, 5, 1, 3]);
    }

    #[test]
    fn heap_tree_holes_test() {
        assert!(build_tree::<i64>(&[]).is_none());
        assert!(build_tree(&[None, Some(1)]).is_none());

        // children of a hole are never reached
        let root = build_tree(&[Some(1), None, Some(3), Some(4), Some(5)]).unwrap();
        assert_eq!(inorder(Some(&root)), vec![1, 3]);
    }

    #[test]
    fn bst_test() {
        let values = [Some(5), Some(3), Some(7), Some(2), Some(4), Some(6), Some(8)];
        let root = build(&values, Mode::Bst).unwrap();
        assert_eq!(root.val, 5);
        assert_eq!(root.left.as_ref().unwrap().val, 3);
        assert_eq!(root.right.as_ref().unwrap().val, 7);
        assert_eq!(inorder(Some(&root)), vec![2, 3, 4, 5, 6, 7, 8]);

        let root = build(&[Some(4), None, Some(1), Some(3), Some(2)], Mode::Bst).unwrap();
        assert_eq!(root.val, 3);
        assert_eq!(inorder(Some(&root)), vec![1, 2, 3, 4]);

        assert!(build::<i64>(&[None, None], Mode::Bst).is_none());
    }

    #[test]
    fn mode_test() {
        assert_eq!(Mode::from_name(Some("bst")), Mode::Bst);
        assert_eq!(Mode::from_name(Some("heap")), Mode::Heap);
        assert_eq!(Mode::from_name(None), Mode::Heap);
    }

    #[test]
    fn ascii_tree_test() {
        assert_eq!(ascii_tree::<i64>(None), "");

        let root = build_tree(&[Some(1)]).unwrap();
        assert_eq!(ascii_tree(Some(&root)), "└── 1\n");

        let root = build_tree(&[Some(2), Some(1), Some(3)]).unwrap();
        assert_eq!(ascii_tree(Some(&root)), "|   ┌── 3\n└── 2\n    └── 1\n");
    }

    #[test]
    fn ascii_tree_nested_test() {
        let values = [Some(5), Some(3), Some(7), Some(2), Some(4), Some(6), Some(8)];
        let root = build(&values, Mode::Bst).unwrap();
        let expected = [
            "|       ┌── 8",
            "|   ┌── 7",
            "|   |   └── 6",
            "└── 5",
            "    |   ┌── 4",
            "    └── 3",
            "        └── 2",
        ];
        let drawn = ascii_tree(Some(&root));
        assert_eq!(drawn.lines().collect::<Vec<_>>(), expected);
        assert!(drawn.ends_with('\n'));
    }

    #[test]
    fn ascii_tree_wide_values_test() {
        let values = [Some(i64::MIN), None, Some(-1)];
        let root = build_tree(&values).unwrap();
        assert_eq!(
            ascii_tree(Some(&root)),
            "|   ┌── -1\n└── -9223372036854775808\n"
        );

        let labels = [Some("b"), Some("a"), Some("c")];
        let root = build(&labels, Mode::Bst).unwrap();
        assert_eq!(inorder(Some(&root)), vec!["a", "b", "c"]);
        assert_eq!(ascii_tree(Some(&root)), "|   ┌── c\n└── b\n    └── a\n");
    }
}
