//! Dijkstra算法模块
//!
//! 带权图单源最短路径，优先队列采用惰性删除

use crate::collections::MinHeap;
use crate::core::INFINITE_DISTANCE;
use crate::graph::Graph;

/// Dijkstra算法结构体
pub struct Dijkstra;

impl Dijkstra {
    /// 计算从起点到所有顶点的最短距离
    ///
    /// 不可达顶点保持 `999999`。每次松弛都压入新条目而不是更新旧条目，
    /// 已确定的顶点在出队时跳过。
    pub fn shortest_distances(graph: &Graph, start: usize) -> Vec<i32> {
        let n = graph.vertex_count();
        if start >= n {
            return Vec::new();
        }

        let mut distances = vec![INFINITE_DISTANCE; n];
        let mut visited = vec![false; n];
        let mut to_visit = MinHeap::with_capacity(n * n);

        distances[start] = 0;
        to_visit.push(start as i32, 0);

        while !to_visit.is_empty() {
            let node = to_visit.pop().vertex as usize;
            if visited[node] {
                continue;
            }
            visited[node] = true;

            for (neighbor, weight) in graph.neighbors(node) {
                if visited[neighbor] {
                    continue;
                }
                let new_distance = distances[node].saturating_add(weight);
                if new_distance < distances[neighbor] {
                    distances[neighbor] = new_distance;
                    to_visit.push(neighbor as i32, new_distance);
                }
            }
        }

        distances
    }
}
