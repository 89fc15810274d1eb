//! 图算法依赖的基础容器
//!
//! 单链表队列/栈以及支持重复顶点条目（惰性删除）的最小优先队列

pub mod priority_queue;
pub mod queue;
pub mod stack;

pub use priority_queue::{MinHeap, PqEntry};
pub use queue::Queue;
pub use stack::Stack;
