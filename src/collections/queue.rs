//! 队列模块
//!
//! 单链表 FIFO 整数队列。节点存放在 arena 中并以槽位下标相连，
//! 尾部追加为 O(1)；`dequeue` 释放的槽位会被后续 `enqueue` 复用。

use crate::core::EMPTY_CONTAINER_SENTINEL;

#[derive(Debug, Clone)]
struct QueueNode {
    data: i32,
    next: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Queue {
    nodes: Vec<QueueNode>,
    free: Vec<usize>,
    front: Option<usize>,
    rear: Option<usize>,
    size: usize,
}

impl Queue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, data: i32) {
        let node = QueueNode { data, next: None };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        match self.rear {
            Some(rear) => self.nodes[rear].next = Some(slot),
            None => self.front = Some(slot),
        }
        self.rear = Some(slot);
        self.size += 1;
    }

    /// Removes the front element. No-op on an empty queue.
    pub fn dequeue(&mut self) {
        if let Some(front) = self.front {
            self.front = self.nodes[front].next;
            if self.front.is_none() {
                self.rear = None;
            }
            self.free.push(front);
            self.size -= 1;
        }
    }

    /// Front element, or `-1` when empty.
    pub fn front(&self) -> i32 {
        self.peek().unwrap_or(EMPTY_CONTAINER_SENTINEL)
    }

    pub fn peek(&self) -> Option<i32> {
        self.front.map(|slot| self.nodes[slot].data)
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn len(&self) -> usize {
        self.size
    }
}
