//! Binary tree filled in level order (complete-tree shape, not a BST).
//!
//! Variables:
//!   root : Option<Box<TreeNode<T>>>
//!
//! Equations:
//!   insert(x):  BFS from root, first node with empty left gets x,
//!               else first with empty right                        O(N)
//!   preorder  = value, left, right
//!   inorder   = left, value, right
//!   postorder = left, right, value
//!   height(None) = 0,  height(n) = 1 + max(height(l), height(r))
//!   size(None)   = 0,  size(n)   = 1 + size(l) + size(r)

use std::collections::VecDeque;

pub type TreeLink<T> = Option<Box<TreeNode<T>>>;

#[derive(Debug)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: TreeLink<T>,
    pub right: TreeLink<T>,
}

impl<T> TreeNode<T> {
    pub fn new(value: T) -> Self {
        Self { value, left: None, right: None }
    }
}

#[derive(Debug)]
pub struct BinaryTree<T> {
    root: TreeLink<T>,
}

impl<T> BinaryTree<T> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn insert(&mut self, value: T) {
        if self.root.is_none() {
            self.root = Some(Box::new(TreeNode::new(value)));
            return;
        }
        let mut queue: VecDeque<&mut TreeNode<T>> = self.root.as_deref_mut().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            if node.left.is_none() {
                node.left = Some(Box::new(TreeNode::new(value)));
                return;
            }
            if node.right.is_none() {
                node.right = Some(Box::new(TreeNode::new(value)));
                return;
            }
            let children = (node.left.as_deref_mut(), node.right.as_deref_mut());
            if let (Some(left), Some(right)) = children {
                queue.push_back(left);
                queue.push_back(right);
            }
        }
    }

    pub fn preorder(&self) -> Vec<&T> {
        fn visit<'a, T>(node: &'a TreeLink<T>, out: &mut Vec<&'a T>) {
            if let Some(n) = node {
                out.push(&n.value);
                visit(&n.left, out);
                visit(&n.right, out);
            }
        }
        let mut out = Vec::new();
        visit(&self.root, &mut out);
        out
    }

    pub fn inorder(&self) -> Vec<&T> {
        fn visit<'a, T>(node: &'a TreeLink<T>, out: &mut Vec<&'a T>) {
            if let Some(n) = node {
                visit(&n.left, out);
                out.push(&n.value);
                visit(&n.right, out);
            }
        }
        let mut out = Vec::new();
        visit(&self.root, &mut out);
        out
    }

    pub fn postorder(&self) -> Vec<&T> {
        fn visit<'a, T>(node: &'a TreeLink<T>, out: &mut Vec<&'a T>) {
            if let Some(n) = node {
                visit(&n.left, out);
                visit(&n.right, out);
                out.push(&n.value);
            }
        }
        let mut out = Vec::new();
        visit(&self.root, &mut out);
        out
    }

    /// Values grouped per depth, shallowest first.
    pub fn level_order(&self) -> Vec<Vec<&T>> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<&TreeNode<T>> = self.root.as_deref().into_iter().collect();
        while !queue.is_empty() {
            let mut level = Vec::with_capacity(queue.len());
            for _ in 0..queue.len() {
                let Some(node) = queue.pop_front() else { break };
                level.push(&node.value);
                queue.extend(node.left.as_deref());
                queue.extend(node.right.as_deref());
            }
            levels.push(level);
        }
        levels
    }

    pub fn height(&self) -> usize {
        fn height<T>(node: &TreeLink<T>) -> usize {
            match node {
                None => 0,
                Some(n) => 1 + height(&n.left).max(height(&n.right)),
            }
        }
        height(&self.root)
    }

    pub fn size(&self) -> usize {
        fn size<T>(node: &TreeLink<T>) -> usize {
            match node {
                None => 0,
                Some(n) => 1 + size(&n.left) + size(&n.right),
            }
        }
        size(&self.root)
    }
}

impl<T: PartialEq> BinaryTree<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.preorder().into_iter().any(|v| v == value)
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}
