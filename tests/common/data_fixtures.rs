//! 测试数据生成模块
//!
//! 提供各种测试图和随机数据的生成函数

use algoviz::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// 四个顶点的带权无向图: 0-1:1, 0-2:4, 1-2:2, 2-3:1
pub fn weighted_diamond() -> Graph {
    let mut graph = Graph::new(4, false);
    graph.add_edge(0, 1, 1);
    graph.add_edge(0, 2, 4);
    graph.add_edge(1, 2, 2);
    graph.add_edge(2, 3, 1);
    graph
}

/// 0 -> 1 -> ... -> n-1 的有向链
pub fn directed_chain(n: usize) -> Graph {
    let mut graph = Graph::new(n, true);
    for u in 1..n as i32 {
        graph.add_unweighted_edge(u - 1, u);
    }
    graph
}

/// 完全无向图，边 (u, v) 的权重为 u + v + 1
pub fn complete_graph(n: usize) -> Graph {
    let mut graph = Graph::new(n, false);
    for u in 0..n as i32 {
        for v in (u + 1)..n as i32 {
            graph.add_edge(u, v, u + v + 1);
        }
    }
    graph
}

/// 固定种子的随机数生成器，保证测试可复现
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// 生成 `count` 个位于 `[low, high)` 的随机整数
pub fn random_values(rng: &mut StdRng, count: usize, low: i32, high: i32) -> Vec<i32> {
    (0..count).map(|_| rng.gen_range(low..high)).collect()
}
