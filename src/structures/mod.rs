//! 独立数据结构模块
//!
//! 可切换模式的二叉堆、AVL 树与链式哈希表

pub mod avl_tree;
pub mod binary_heap;
pub mod hash_table;

pub use avl_tree::{AvlEntry, AvlTree, Rotation};
pub use binary_heap::{BinaryHeap, HeapMode};
pub use hash_table::{HashEntry, HashTable};
