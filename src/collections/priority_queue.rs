//! 最小优先队列模块
//!
//! 供 Dijkstra 与 Prim 使用的定长二叉最小堆。同一顶点可以同时存在多个条目，
//! 过期条目在弹出时由调用方跳过（惰性删除），不支持 decrease-key。

use crate::core::{INFINITE_DISTANCE, NO_VERTEX};

/// 优先队列条目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PqEntry {
    pub vertex: i32,
    pub key: i32,
}

impl PqEntry {
    /// 空队列弹出时返回的条目
    pub const EMPTY: PqEntry = PqEntry {
        vertex: NO_VERTEX,
        key: INFINITE_DISTANCE,
    };
}

/// Fixed-capacity binary min-heap keyed on `PqEntry::key`.
///
/// Comparisons are strict, so entries with equal keys keep their relative
/// heap positions; traversal results depend on this tie-breaking.
#[derive(Debug, Clone)]
pub struct MinHeap {
    heap: Vec<PqEntry>,
    capacity: usize,
}

impl MinHeap {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// 插入条目，队列已满时静默丢弃
    pub fn push(&mut self, vertex: i32, key: i32) {
        if self.heap.len() >= self.capacity {
            log::trace!("priority queue full ({}), dropping vertex {}", self.capacity, vertex);
            return;
        }
        self.heap.push(PqEntry { vertex, key });
        self.sift_up(self.heap.len() - 1);
    }

    /// 弹出最小条目，空队列返回 `PqEntry::EMPTY`
    pub fn pop(&mut self) -> PqEntry {
        if self.heap.is_empty() {
            return PqEntry::EMPTY;
        }
        let top = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        top
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].key < self.heap[parent].key {
                self.heap.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.heap[left].key < self.heap[smallest].key {
                smallest = left;
            }
            if right < len && self.heap[right].key < self.heap[smallest].key {
                smallest = right;
            }

            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}
