//! 算法模块
//!
//! 基于邻接矩阵图的遍历、最短路径与最小生成树算法实现

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod prim;

// 重新导出常用算法结构体
pub use bfs::Bfs;
pub use dfs::Dfs;
pub use dijkstra::Dijkstra;
pub use prim::{MstEdge, Prim};
