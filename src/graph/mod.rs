//! 图模块
//!
//! 邻接矩阵表示的带权图（有向或无向），遍历与最短路径算法位于
//! `services::algorithm`

pub mod adjacency;

pub use adjacency::Graph;
