//! AVL 树模块
//!
//! 整数高度平衡二叉搜索树。新建叶子高度为 0，空子树同样按 0 计，
//! 节点高度在经过它的插入/删除路径上重新计算为 `1 + max(左, 右)`，
//! 因此被重新计算过的叶子高度为 1。平衡因子 = 左子树高度 - 右子树高度。
//! 每次 `insert` / `remove` 只保留最后一次旋转的描述，供可视化诊断使用。

use std::fmt;

use crate::core::{encode_list, NO_ROTATION_MESSAGE};

type Link = Option<Box<AvlNode>>;

#[derive(Debug)]
struct AvlNode {
    data: i32,
    height: i32,
    left: Link,
    right: Link,
}

impl AvlNode {
    fn leaf(data: i32) -> Box<Self> {
        Box::new(Self {
            data,
            height: 0,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

fn height(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance_of(link: &Link) -> i32 {
    link.as_ref().map_or(0, |node| node.balance())
}

/// A single rotation, named after its direction and the node rotated down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left(i32),
    Right(i32),
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotation::Left(pivot) => write!(f, "Left rotation on node {}", pivot),
            Rotation::Right(pivot) => write!(f, "Right rotation on node {}", pivot),
        }
    }
}

/// One in-order entry of the serialized tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvlEntry {
    pub value: i32,
    pub height: i32,
    pub balance: i32,
}

impl fmt::Display for AvlEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.value, self.height, self.balance)
    }
}

#[derive(Debug, Default)]
pub struct AvlTree {
    root: Link,
    last_rotation: Option<Rotation>,
}

impl AvlTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value`. An existing value adds no node, but the heights on the
    /// search path are still recomputed.
    pub fn insert(&mut self, value: i32) {
        self.last_rotation = None;
        let root = self.root.take();
        self.root = Some(Self::insert_node(root, value, &mut self.last_rotation));
    }

    /// Removes `value` if present. The search path is recomputed and
    /// rebalanced even when `value` is absent.
    pub fn remove(&mut self, value: i32) {
        self.last_rotation = None;
        let root = self.root.take();
        self.root = Self::remove_node(root, value, &mut self.last_rotation);
    }

    /// In-order `value:height:balance` triples, e.g. `[10:0:0,20:1:0,30:0:0]`.
    pub fn get_tree(&self) -> String {
        encode_list(self.entries())
    }

    pub fn entries(&self) -> Vec<AvlEntry> {
        let mut entries = Vec::new();
        Self::collect_in_order(&self.root, &mut entries);
        entries
    }

    pub fn get_last_rotation(&self) -> String {
        match self.last_rotation {
            Some(rotation) => rotation.to_string(),
            None => NO_ROTATION_MESSAGE.to_string(),
        }
    }

    pub fn last_rotation(&self) -> Option<Rotation> {
        self.last_rotation
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.last_rotation = None;
    }

    pub fn contains(&self, value: i32) -> bool {
        let mut current = &self.root;
        while let Some(node) = current {
            if value < node.data {
                current = &node.left;
            } else if value > node.data {
                current = &node.right;
            } else {
                return true;
            }
        }
        false
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Stored height of the root, `0` for an empty tree.
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    fn insert_node(link: Link, value: i32, rotation: &mut Option<Rotation>) -> Box<AvlNode> {
        let mut node = match link {
            Some(node) => node,
            None => return AvlNode::leaf(value),
        };

        if value < node.data {
            node.left = Some(Self::insert_node(node.left.take(), value, rotation));
        } else if value > node.data {
            node.right = Some(Self::insert_node(node.right.take(), value, rotation));
        } else {
            return node;
        }

        node.update_height();
        let balance = node.balance();

        if balance > 1 {
            match node.left.as_ref().map(|left| left.data) {
                // LL
                Some(pivot) if value < pivot => return Self::rotate_right(node, rotation),
                // LR
                Some(pivot) if value > pivot => {
                    node.left = node.left.take().map(|left| Self::rotate_left(left, rotation));
                    return Self::rotate_right(node, rotation);
                }
                _ => {}
            }
        }

        if balance < -1 {
            match node.right.as_ref().map(|right| right.data) {
                // RR
                Some(pivot) if value > pivot => return Self::rotate_left(node, rotation),
                // RL
                Some(pivot) if value < pivot => {
                    node.right = node.right.take().map(|right| Self::rotate_right(right, rotation));
                    return Self::rotate_left(node, rotation);
                }
                _ => {}
            }
        }

        node
    }

    fn remove_node(link: Link, value: i32, rotation: &mut Option<Rotation>) -> Link {
        let mut node = link?;

        if value < node.data {
            node.left = Self::remove_node(node.left.take(), value, rotation);
        } else if value > node.data {
            node.right = Self::remove_node(node.right.take(), value, rotation);
        } else {
            match (node.left.take(), node.right.take()) {
                (None, None) => return None,
                (Some(child), None) | (None, Some(child)) => node = child,
                (Some(left), Some(right)) => {
                    let successor = Self::min_value(&right);
                    node.data = successor;
                    node.left = Some(left);
                    node.right = Self::remove_node(Some(right), successor, rotation);
                }
            }
        }

        node.update_height();
        Some(Self::rebalance_after_remove(node, rotation))
    }

    // the removed value is gone, so cases are chosen from child balance alone
    fn rebalance_after_remove(mut node: Box<AvlNode>, rotation: &mut Option<Rotation>) -> Box<AvlNode> {
        let balance = node.balance();

        if balance > 1 {
            if balance_of(&node.left) < 0 {
                node.left = node.left.take().map(|left| Self::rotate_left(left, rotation));
            }
            return Self::rotate_right(node, rotation);
        }

        if balance < -1 {
            if balance_of(&node.right) > 0 {
                node.right = node.right.take().map(|right| Self::rotate_right(right, rotation));
            }
            return Self::rotate_left(node, rotation);
        }

        node
    }

    fn rotate_right(mut y: Box<AvlNode>, rotation: &mut Option<Rotation>) -> Box<AvlNode> {
        let Some(mut x) = y.left.take() else {
            return y;
        };
        *rotation = Some(Rotation::Right(y.data));
        log::debug!("avl: right rotation on node {}", y.data);

        y.left = x.right.take();
        y.update_height();
        x.right = Some(y);
        x.update_height();
        x
    }

    fn rotate_left(mut x: Box<AvlNode>, rotation: &mut Option<Rotation>) -> Box<AvlNode> {
        let Some(mut y) = x.right.take() else {
            return x;
        };
        *rotation = Some(Rotation::Left(x.data));
        log::debug!("avl: left rotation on node {}", x.data);

        x.right = y.left.take();
        x.update_height();
        y.left = Some(x);
        y.update_height();
        y
    }

    fn min_value(node: &AvlNode) -> i32 {
        let mut current = node;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current.data
    }

    fn collect_in_order(link: &Link, entries: &mut Vec<AvlEntry>) {
        if let Some(node) = link {
            Self::collect_in_order(&node.left, entries);
            entries.push(AvlEntry {
                value: node.data,
                height: node.height,
                balance: node.balance(),
            });
            Self::collect_in_order(&node.right, entries);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: &[i32]) -> AvlTree {
        let mut tree = AvlTree::new();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    #[test]
    fn test_empty_tree() {
        let tree = AvlTree::new();
        assert_eq!(tree.get_tree(), "[]");
        assert_eq!(tree.get_last_rotation(), "No rotations performed");
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn test_leaf_has_height_zero() {
        let tree = tree_of(&[42]);
        assert_eq!(tree.get_tree(), "[42:0:0]");
    }

    #[test]
    fn test_missing_child_counts_as_zero() {
        let tree = tree_of(&[10, 20]);
        assert_eq!(tree.get_tree(), "[10:1:0,20:0:0]");

        // a three-node chain is not yet out of balance
        let tree = tree_of(&[10, 20, 30]);
        assert_eq!(tree.get_tree(), "[10:2:-1,20:1:0,30:0:0]");
        assert_eq!(tree.get_last_rotation(), "No rotations performed");
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_rr_case_rotates_left() {
        let tree = tree_of(&[10, 20, 30, 40]);
        assert_eq!(tree.get_tree(), "[10:1:0,20:2:0,30:1:0,40:0:0]");
        assert_eq!(tree.get_last_rotation(), "Left rotation on node 10");
    }

    #[test]
    fn test_ll_case_rotates_right() {
        let tree = tree_of(&[30, 20, 10]);
        assert_eq!(tree.get_tree(), "[10:0:0,20:1:0,30:2:1]");
        assert_eq!(tree.get_last_rotation(), "No rotations performed");

        let tree = tree_of(&[30, 20, 10, 5]);
        assert_eq!(tree.get_tree(), "[5:0:0,10:1:0,20:2:0,30:1:0]");
        assert_eq!(tree.last_rotation(), Some(Rotation::Right(30)));
    }

    #[test]
    fn test_lr_case_reports_final_rotation() {
        let tree = tree_of(&[30, 10, 20, 25]);
        assert_eq!(tree.get_tree(), "[10:1:0,20:2:0,25:0:0,30:1:0]");
        assert_eq!(tree.last_rotation(), Some(Rotation::Right(30)));
    }

    #[test]
    fn test_rl_case_reports_final_rotation() {
        let tree = tree_of(&[10, 30, 20, 15]);
        assert_eq!(tree.get_tree(), "[10:1:0,15:0:0,20:2:0,30:1:0]");
        assert_eq!(tree.last_rotation(), Some(Rotation::Left(10)));
    }

    #[test]
    fn test_rotation_log_resets_per_call() {
        let mut tree = tree_of(&[10, 20, 30, 40]);
        assert_eq!(tree.get_last_rotation(), "Left rotation on node 10");
        tree.insert(5);
        assert_eq!(tree.get_last_rotation(), "No rotations performed");
    }

    #[test]
    fn test_seven_ascending_inserts() {
        let tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(
            tree.get_tree(),
            "[1:1:0,2:2:0,3:1:0,4:3:0,5:2:-1,6:1:0,7:0:0]"
        );
        assert_eq!(tree.get_last_rotation(), "Left rotation on node 2");
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut tree = tree_of(&[10, 5]);
        let before = tree.get_tree();
        tree.insert(10);
        assert_eq!(tree.get_tree(), before);
        assert_eq!(tree.get_last_rotation(), "No rotations performed");
    }

    #[test]
    fn test_remove_without_rotation() {
        let mut tree = tree_of(&[10, 20, 30, 40]);
        tree.remove(10);
        assert_eq!(tree.get_tree(), "[20:2:-1,30:1:0,40:0:0]");
        assert_eq!(tree.get_last_rotation(), "No rotations performed");
    }

    #[test]
    fn test_remove_triggers_right_rotation() {
        let mut tree = tree_of(&[90, 20, 80, 50, 40]);
        assert_eq!(tree.get_tree(), "[20:2:-1,40:0:0,50:1:0,80:3:1,90:1:0]");
        tree.remove(80);
        assert_eq!(tree.get_tree(), "[20:1:0,40:0:0,50:2:0,90:1:0]");
        assert_eq!(tree.get_last_rotation(), "Right rotation on node 90");
    }

    #[test]
    fn test_remove_triggers_left_rotation() {
        let mut tree = tree_of(&[10, 30, 60, 40, 50]);
        tree.remove(10);
        assert_eq!(tree.get_tree(), "[30:1:0,40:2:0,50:0:0,60:1:0]");
        assert_eq!(tree.get_last_rotation(), "Left rotation on node 30");
    }

    #[test]
    fn test_remove_node_with_two_children_uses_successor() {
        let mut tree = tree_of(&[20, 10, 30]);
        tree.remove(20);
        assert_eq!(tree.get_tree(), "[10:0:0,30:1:0]");
        assert_eq!(tree.get_last_rotation(), "No rotations performed");
    }

    #[test]
    fn test_remove_absent_value_recomputes_path() {
        let mut tree = tree_of(&[2, 1, 3]);
        tree.remove(99);
        assert_eq!(tree.get_tree(), "[1:0:0,2:2:-1,3:1:0]");
    }

    #[test]
    fn test_remove_absent_value_can_rebalance() {
        let mut tree = tree_of(&[10, 40, 90]);
        tree.remove(50);
        assert_eq!(tree.get_tree(), "[10:1:0,40:2:0,90:1:0]");
        assert_eq!(tree.get_last_rotation(), "Left rotation on node 10");

        // left child leans right: left-right case
        let mut tree = tree_of(&[90, 30, 80]);
        tree.remove(40);
        assert_eq!(tree.get_tree(), "[30:1:0,80:2:0,90:1:0]");
        assert_eq!(tree.get_last_rotation(), "Right rotation on node 90");
    }

    #[test]
    fn test_negative_values() {
        let tree = tree_of(&[-5, -10, 0]);
        assert_eq!(tree.get_tree(), "[-10:0:0,-5:1:0,0:0:0]");
        assert!(tree.contains(-10));
        assert!(!tree.contains(7));
    }

    #[test]
    fn test_clear() {
        let mut tree = tree_of(&[1, 2, 3]);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.get_tree(), "[]");
        assert_eq!(tree.get_last_rotation(), "No rotations performed");
    }
}
