//! 二叉堆模块
//!
//! 基于数组的整数堆，可在最小堆与最大堆之间切换。
//!
//! | 操作 | 复杂度 |
//! |------|--------|
//! | `insert` | O(log n) |
//! | `extract_top` | O(log n) |
//! | `convert_to_*` | O(n) |
//!
//! 容量固定：堆满时插入被静默忽略，空堆取顶返回 [`EMPTY_HEAP_SENTINEL`]。

use crate::core::{encode_list, DEFAULT_HEAP_CAPACITY, EMPTY_HEAP_SENTINEL};

/// Ordering direction of a [`BinaryHeap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapMode {
    Min,
    Max,
}

impl HeapMode {
    /// `true` when `a` must sit strictly above `b`.
    fn outranks(self, a: i32, b: i32) -> bool {
        match self {
            HeapMode::Min => a < b,
            HeapMode::Max => a > b,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BinaryHeap {
    data: Vec<i32>,
    capacity: usize,
    mode: HeapMode,
}

impl BinaryHeap {
    pub fn new(mode: HeapMode) -> Self {
        Self::with_capacity(mode, DEFAULT_HEAP_CAPACITY)
    }

    pub fn with_capacity(mode: HeapMode, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            capacity,
            mode,
        }
    }

    pub fn insert(&mut self, value: i32) {
        if self.data.len() == self.capacity {
            log::debug!("heap full ({}), ignoring insert of {}", self.capacity, value);
            return;
        }
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the root, or `-999999` when the heap is empty.
    pub fn extract_top(&mut self) -> i32 {
        if self.data.is_empty() {
            return EMPTY_HEAP_SENTINEL;
        }
        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        root
    }

    pub fn peek(&self) -> Option<i32> {
        self.data.first().copied()
    }

    pub fn convert_to_min_heap(&mut self) {
        self.mode = HeapMode::Min;
        self.build_heap();
    }

    pub fn convert_to_max_heap(&mut self) {
        self.mode = HeapMode::Max;
        self.build_heap();
    }

    pub fn is_min_heap(&self) -> bool {
        self.mode == HeapMode::Min
    }

    pub fn mode(&self) -> HeapMode {
        self.mode
    }

    /// Contents in level order, root first.
    pub fn get_array(&self) -> String {
        encode_list(&self.data)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Resets occupancy; the backing buffer is kept.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.mode.outranks(self.data[index], self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut target = index;

            if left < len && self.mode.outranks(self.data[left], self.data[target]) {
                target = left;
            }
            if right < len && self.mode.outranks(self.data[right], self.data[target]) {
                target = right;
            }

            if target == index {
                break;
            }
            self.data.swap(index, target);
            index = target;
        }
    }

    fn build_heap(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }
}

impl Default for BinaryHeap {
    fn default() -> Self {
        Self::new(HeapMode::Min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(heap: &mut BinaryHeap) -> Vec<i32> {
        let mut out = Vec::new();
        while !heap.is_empty() {
            out.push(heap.extract_top());
        }
        out
    }

    #[test]
    fn test_min_heap_level_order() {
        let mut heap = BinaryHeap::new(HeapMode::Min);
        for value in [5, 3, 8, 1] {
            heap.insert(value);
        }
        assert_eq!(heap.get_array(), "[1,3,8,5]");
        assert_eq!(heap.peek(), Some(1));
    }

    #[test]
    fn test_max_heap_level_order() {
        let mut heap = BinaryHeap::new(HeapMode::Max);
        for value in [5, 3, 8, 1] {
            heap.insert(value);
        }
        assert_eq!(heap.get_array(), "[8,3,5,1]");
    }

    #[test]
    fn test_extract_top() {
        let mut heap = BinaryHeap::default();
        for value in [4, -2, 9, 0] {
            heap.insert(value);
        }
        assert_eq!(heap.extract_top(), -2);
        assert_eq!(heap.get_array(), "[0,4,9]");
        assert_eq!(drain(&mut heap), vec![0, 4, 9]);
    }

    #[test]
    fn test_extract_empty_returns_sentinel() {
        let mut heap = BinaryHeap::default();
        assert_eq!(heap.extract_top(), -999_999);
        assert_eq!(heap.get_array(), "[]");
    }

    #[test]
    fn test_insert_beyond_capacity_is_ignored() {
        let mut heap = BinaryHeap::default();
        for value in 0..120 {
            heap.insert(value);
        }
        assert_eq!(heap.len(), 100);
        assert_eq!(heap.capacity(), 100);
        assert_eq!(heap.peek(), Some(0));
    }

    #[test]
    fn test_convert_between_modes() {
        let mut heap = BinaryHeap::new(HeapMode::Min);
        for value in [1, 2, 3, 4, 5] {
            heap.insert(value);
        }
        assert_eq!(heap.get_array(), "[1,2,3,4,5]");

        heap.convert_to_max_heap();
        assert!(!heap.is_min_heap());
        assert_eq!(heap.get_array(), "[5,4,3,1,2]");
        assert_eq!(drain(&mut heap), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_convert_to_min_then_sorted_extraction() {
        let mut heap = BinaryHeap::new(HeapMode::Max);
        for value in [7, 2, 9, 4, 4, -1] {
            heap.insert(value);
        }
        heap.convert_to_min_heap();
        assert!(heap.is_min_heap());
        assert_eq!(drain(&mut heap), vec![-1, 2, 4, 4, 7, 9]);
    }

    #[test]
    fn test_clear_keeps_buffer() {
        let mut heap = BinaryHeap::default();
        heap.insert(3);
        heap.insert(1);
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.get_array(), "[]");
        assert!(heap.data.capacity() >= 100);
    }
}
