//! DFS算法模块
//!
//! 基于显式链式栈的深度优先遍历（非递归）

use crate::collections::Stack;
use crate::graph::Graph;

/// DFS算法结构体
pub struct Dfs;

impl Dfs {
    /// 从起点做深度优先遍历，返回访问顺序
    ///
    /// 邻居按下标降序入栈，出栈时即按升序展开，与递归前序遍历的顺序一致。
    /// 顶点在出栈时才标记为已访问，同一顶点可能多次入栈，但只输出一次。
    pub fn traverse(graph: &Graph, start: usize) -> Vec<usize> {
        let n = graph.vertex_count();
        if start >= n {
            return Vec::new();
        }

        let mut visited = vec![false; n];
        let mut stack = Stack::new();
        let mut order = Vec::new();

        stack.push(start as i32);

        while let Some(current) = stack.peek() {
            stack.pop();
            let current = current as usize;
            if visited[current] {
                continue;
            }

            visited[current] = true;
            order.push(current);

            for (neighbor, _) in graph.neighbors(current).rev() {
                if !visited[neighbor] {
                    stack.push(neighbor as i32);
                }
            }
        }

        order
    }
}
