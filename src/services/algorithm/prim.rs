//! Prim算法模块
//!
//! 无向带权图的最小生成树，从顶点 0 开始生长

use std::fmt;

use crate::collections::MinHeap;
use crate::core::INFINITE_DISTANCE;
use crate::graph::Graph;

/// 生成树中的一条边，按 `parent-child:weight` 输出
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MstEdge {
    pub parent: usize,
    pub child: usize,
    pub weight: i32,
}

impl fmt::Display for MstEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}:{}", self.parent, self.child, self.weight)
    }
}

/// Prim算法结构体
pub struct Prim;

impl Prim {
    /// 计算最小生成树（或从顶点 0 可达部分的生成树）
    ///
    /// 边按顶点出队（确定）的顺序输出，根顶点没有父边。有向图返回空结果。
    pub fn minimum_spanning_tree(graph: &Graph) -> Vec<MstEdge> {
        let n = graph.vertex_count();
        if graph.is_directed() || n == 0 {
            return Vec::new();
        }

        let mut key = vec![INFINITE_DISTANCE; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        let mut in_mst = vec![false; n];
        let mut to_visit = MinHeap::with_capacity(n * n);
        let mut edges = Vec::new();

        key[0] = 0;
        to_visit.push(0, 0);

        while !to_visit.is_empty() {
            let node = to_visit.pop().vertex as usize;
            if in_mst[node] {
                continue;
            }
            in_mst[node] = true;

            if let Some(p) = parent[node] {
                edges.push(MstEdge {
                    parent: p,
                    child: node,
                    weight: graph.weight_at(p, node),
                });
            }

            for (neighbor, weight) in graph.neighbors(node) {
                if !in_mst[neighbor] && weight < key[neighbor] {
                    key[neighbor] = weight;
                    parent[neighbor] = Some(node);
                    to_visit.push(neighbor as i32, weight);
                }
            }
        }

        edges
    }

    /// 生成树总权重
    pub fn total_weight(edges: &[MstEdge]) -> i64 {
        edges.iter().map(|edge| i64::from(edge.weight)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_spanning_tree() {
        let mut graph = Graph::new(4, false);
        graph.add_edge(0, 1, 1);
        graph.add_edge(1, 2, 2);
        graph.add_edge(0, 2, 5);
        graph.add_edge(2, 3, 1);

        let edges = Prim::minimum_spanning_tree(&graph);
        assert_eq!(graph.prim_mst(), "[0-1:1,1-2:2,2-3:1]");
        assert_eq!(Prim::total_weight(&edges), 4);
    }

    #[test]
    fn test_directed_graph_has_no_tree() {
        let mut graph = Graph::new(3, true);
        graph.add_edge(0, 1, 1);
        assert!(Prim::minimum_spanning_tree(&graph).is_empty());
        assert_eq!(graph.prim_mst(), "[]");
    }

    #[test]
    fn test_disconnected_graph_spans_component_of_zero() {
        let mut graph = Graph::new(4, false);
        graph.add_edge(0, 1, 3);
        graph.add_edge(2, 3, 1);
        assert_eq!(graph.prim_mst(), "[0-1:3]");
    }

    #[test]
    fn test_prefers_lighter_edge_found_later() {
        let mut graph = Graph::new(3, false);
        graph.add_edge(0, 2, 9);
        graph.add_edge(0, 1, 2);
        graph.add_edge(1, 2, 3);
        assert_eq!(graph.prim_mst(), "[0-1:2,1-2:3]");
    }

    #[test]
    fn test_edge_display() {
        let edge = MstEdge {
            parent: 3,
            child: 1,
            weight: -2,
        };
        assert_eq!(edge.to_string(), "3-1:-2");
    }
}
