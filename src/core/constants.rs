//! 常量模块
//!
//! 各数据结构共享的哨兵值与固定容量，序列化输出依赖这些取值

/// Value returned by `BinaryHeap::extract_top` on an empty heap.
pub const EMPTY_HEAP_SENTINEL: i32 = -999_999;

/// Value returned by `Queue::front` / `Stack::top` when the container is empty.
pub const EMPTY_CONTAINER_SENTINEL: i32 = -1;

/// Tentative distance / key for vertices not reached yet.
pub const INFINITE_DISTANCE: i32 = 999_999;

/// Vertex reported by the priority queue when popped empty.
pub const NO_VERTEX: i32 = -1;

/// Default fixed capacity of a `BinaryHeap`.
pub const DEFAULT_HEAP_CAPACITY: usize = 100;

/// Number of chains in a `HashTable`.
pub const HASH_BUCKET_COUNT: usize = 10;

/// Value returned by `HashTable::search` on a miss.
pub const HASH_MISS: i32 = -1;

/// Weight used when an edge is added without an explicit weight.
pub const DEFAULT_EDGE_WEIGHT: i32 = 1;

/// Rotation log entry after an AVL call that did not restructure the tree.
pub const NO_ROTATION_MESSAGE: &str = "No rotations performed";
