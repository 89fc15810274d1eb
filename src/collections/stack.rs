//! 栈模块
//!
//! 单链表 LIFO 整数栈

use crate::core::EMPTY_CONTAINER_SENTINEL;

#[derive(Debug)]
struct StackNode {
    data: i32,
    next: Option<Box<StackNode>>,
}

#[derive(Debug, Default)]
pub struct Stack {
    top: Option<Box<StackNode>>,
    size: usize,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, data: i32) {
        let node = Box::new(StackNode {
            data,
            next: self.top.take(),
        });
        self.top = Some(node);
        self.size += 1;
    }

    /// Removes the top element. No-op on an empty stack.
    pub fn pop(&mut self) {
        if let Some(node) = self.top.take() {
            self.top = node.next;
            self.size -= 1;
        }
    }

    /// Top element, or `-1` when empty.
    pub fn top(&self) -> i32 {
        self.peek().unwrap_or(EMPTY_CONTAINER_SENTINEL)
    }

    pub fn peek(&self) -> Option<i32> {
        self.top.as_ref().map(|node| node.data)
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn len(&self) -> usize {
        self.size
    }
}

impl Drop for Stack {
    // unlink iteratively, a recursive Box drop can overflow on long chains
    fn drop(&mut self) {
        let mut current = self.top.take();
        while let Some(mut node) = current {
            current = node.next.take();
        }
    }
}
