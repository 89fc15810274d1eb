//! 邻接矩阵图模块
//!
//! 顶点数固定，矩阵存放在一块 `n * n` 的连续缓冲区中，`(i, j)` 为边
//! `i -> j` 的权重，`0` 表示无边，因此无法存储权重为 0 的边。无向图保持矩阵对称。
//!
//! 顶点参数使用 `i32`，调用方传入的负数或越界下标会被静默忽略。

use crate::core::{encode_list, encode_rows, DEFAULT_EDGE_WEIGHT};
use crate::services::algorithm::{Bfs, Dfs, Dijkstra, Prim};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    n: usize,
    matrix: Vec<i32>,
    directed: bool,
}

impl Graph {
    pub fn new(vertices: usize, directed: bool) -> Self {
        Self {
            n: vertices,
            matrix: vec![0; vertices * vertices],
            directed,
        }
    }

    /// Maps a caller-supplied vertex to a matrix index.
    pub fn vertex(&self, v: i32) -> Option<usize> {
        usize::try_from(v).ok().filter(|&index| index < self.n)
    }

    pub fn vertex_count(&self) -> usize {
        self.n
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Weight of `u -> v`, `0` when absent or out of range.
    pub fn weight(&self, u: i32, v: i32) -> i32 {
        match (self.vertex(u), self.vertex(v)) {
            (Some(u), Some(v)) => self.weight_at(u, v),
            _ => 0,
        }
    }

    pub fn has_edge(&self, u: i32, v: i32) -> bool {
        self.weight(u, v) != 0
    }

    pub(crate) fn weight_at(&self, u: usize, v: usize) -> i32 {
        self.matrix[u * self.n + v]
    }

    /// Outgoing edges of `u` in ascending neighbor order. Empty when `u` is
    /// out of range.
    pub fn neighbors(&self, u: usize) -> impl DoubleEndedIterator<Item = (usize, i32)> + '_ {
        let row: &[i32] = if u < self.n {
            &self.matrix[u * self.n..(u + 1) * self.n]
        } else {
            &[]
        };
        row.iter()
            .enumerate()
            .filter(|&(_, &weight)| weight != 0)
            .map(|(v, &weight)| (v, weight))
    }

    /// Every non-zero matrix entry as `(from, to, weight)`, row by row.
    pub fn edges(&self) -> Vec<(usize, usize, i32)> {
        (0..self.n)
            .flat_map(|u| self.neighbors(u).map(move |(v, w)| (u, v, w)))
            .collect()
    }

    pub fn add_edge(&mut self, u: i32, v: i32, weight: i32) {
        match (self.vertex(u), self.vertex(v)) {
            (Some(u), Some(v)) => self.set_edge(u, v, weight),
            _ => log::debug!("add_edge({}, {}) out of range for {} vertices", u, v, self.n),
        }
    }

    /// Adds `u -> v` with the default weight of 1.
    pub fn add_unweighted_edge(&mut self, u: i32, v: i32) {
        self.add_edge(u, v, DEFAULT_EDGE_WEIGHT);
    }

    pub fn remove_edge(&mut self, u: i32, v: i32) {
        match (self.vertex(u), self.vertex(v)) {
            (Some(u), Some(v)) => {
                self.matrix[u * self.n + v] = 0;
                if !self.directed {
                    self.matrix[v * self.n + u] = 0;
                }
            }
            _ => log::debug!("remove_edge({}, {}) out of range for {} vertices", u, v, self.n),
        }
    }

    fn set_edge(&mut self, u: usize, v: usize, weight: i32) {
        self.matrix[u * self.n + v] = weight;
        if !self.directed && u != v {
            self.matrix[v * self.n + u] = weight;
        }
    }

    /// Switches directedness. Turning it off mirrors every edge, preferring
    /// the `(i, j)` weight over `(j, i)` when both are set.
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
        if directed {
            return;
        }
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                let forward = self.matrix[i * self.n + j];
                let backward = self.matrix[j * self.n + i];
                if forward != 0 || backward != 0 {
                    let weight = if forward != 0 { forward } else { backward };
                    self.matrix[i * self.n + j] = weight;
                    self.matrix[j * self.n + i] = weight;
                }
            }
        }
    }

    /// Builds a graph without `vertex`, shifting higher indices down by one.
    ///
    /// `self` is left untouched. An out-of-range `vertex` yields an identical
    /// copy.
    pub fn remove_vertex(&self, vertex: i32) -> Graph {
        let Some(removed) = self.vertex(vertex) else {
            log::debug!("remove_vertex({}) out of range for {} vertices", vertex, self.n);
            return self.clone();
        };

        let mut graph = Graph::new(self.n - 1, self.directed);
        let keep = |index: usize| index != removed;
        for (new_i, i) in (0..self.n).filter(|&i| keep(i)).enumerate() {
            for (new_j, j) in (0..self.n).filter(|&j| keep(j)).enumerate() {
                let weight = self.weight_at(i, j);
                if weight != 0 {
                    graph.set_edge(new_i, new_j, weight);
                }
            }
        }
        graph
    }

    /// Builds a graph with one extra, isolated vertex at index `n`.
    pub fn add_vertex(&self) -> Graph {
        let mut graph = Graph::new(self.n + 1, self.directed);
        for (u, v, weight) in self.edges() {
            graph.set_edge(u, v, weight);
        }
        graph
    }

    /// Zeroes every weight; the vertex count is kept.
    pub fn clear(&mut self) {
        self.matrix.fill(0);
    }

    /// Matrix rows, e.g. `[[0,1],[1,0]]`.
    pub fn get_matrix(&self) -> String {
        if self.n == 0 {
            return "[]".to_string();
        }
        encode_rows(self.matrix.chunks(self.n))
    }

    /// Breadth-first visitation order from `start`.
    pub fn bfs(&self, start: i32) -> String {
        match self.vertex(start) {
            Some(start) => encode_list(Bfs::traverse(self, start)),
            None => "[]".to_string(),
        }
    }

    /// Depth-first (pre-order) visitation order from `start`.
    pub fn dfs(&self, start: i32) -> String {
        match self.vertex(start) {
            Some(start) => encode_list(Dfs::traverse(self, start)),
            None => "[]".to_string(),
        }
    }

    /// Distance to every vertex from `start`, `999999` when unreachable.
    pub fn dijkstra(&self, start: i32) -> String {
        match self.vertex(start) {
            Some(start) => encode_list(Dijkstra::shortest_distances(self, start)),
            None => "[]".to_string(),
        }
    }

    /// Minimum spanning tree edges from vertex 0 in the order they were added.
    /// Directed graphs have no result.
    pub fn prim_mst(&self) -> String {
        encode_list(Prim::minimum_spanning_tree(self))
    }
}
