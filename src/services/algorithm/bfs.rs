//! BFS算法模块
//!
//! 基于链式队列的广度优先遍历，邻居按下标升序入队

use crate::collections::Queue;
use crate::graph::Graph;

/// BFS算法结构体
pub struct Bfs;

impl Bfs {
    /// 从起点做广度优先遍历，返回访问顺序
    ///
    /// 顶点入队时即标记为已访问，因此每个可达顶点恰好出现一次。
    pub fn traverse(graph: &Graph, start: usize) -> Vec<usize> {
        let n = graph.vertex_count();
        if start >= n {
            return Vec::new();
        }

        let mut visited = vec![false; n];
        let mut queue = Queue::new();
        let mut order = Vec::new();

        visited[start] = true;
        queue.enqueue(start as i32);

        while let Some(current) = queue.peek() {
            queue.dequeue();
            let current = current as usize;
            order.push(current);

            for (neighbor, _) in graph.neighbors(current) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.enqueue(neighbor as i32);
                }
            }
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> Graph {
        let mut graph = Graph::new(5, false);
        graph.add_unweighted_edge(0, 1);
        graph.add_unweighted_edge(0, 2);
        graph.add_unweighted_edge(1, 3);
        graph.add_unweighted_edge(2, 3);
        graph
    }

    #[test]
    fn test_traverse_level_order() {
        let graph = diamond();
        assert_eq!(Bfs::traverse(&graph, 0), vec![0, 1, 2, 3]);
        assert_eq!(Bfs::traverse(&graph, 3), vec![3, 1, 2, 0]);
    }

    #[test]
    fn test_traverse_skips_unreachable() {
        let graph = diamond();
        let nodes = Bfs::traverse(&graph, 0);
        assert!(!nodes.contains(&4));
        assert_eq!(Bfs::traverse(&graph, 4), vec![4]);
    }

    #[test]
    fn test_traverse_directed() {
        let mut graph = Graph::new(3, true);
        graph.add_unweighted_edge(0, 1);
        graph.add_unweighted_edge(2, 0);
        assert_eq!(Bfs::traverse(&graph, 0), vec![0, 1]);
        assert_eq!(Bfs::traverse(&graph, 2), vec![2, 0, 1]);
    }

    #[test]
    fn test_traverse_out_of_range() {
        let graph = diamond();
        assert!(Bfs::traverse(&graph, 9).is_empty());
        assert_eq!(graph.bfs(-1), "[]");
        assert_eq!(graph.bfs(0), "[0,1,2,3]");
    }
}
