//! 会话模块
//!
//! 一个会话持有二叉堆、AVL 树、哈希表以及可选的图，逐条执行文本命令并返回
//! 对应结构的规范编码。越界端点、顶点数量上限等调用方规则在这里检查，
//! 数据结构本身保持静默忽略的语义。

use crate::config::LimitsConfig;
use crate::core::{EngineError, EngineResult};
use crate::graph::Graph;
use crate::services::command::{AvlCommand, Command, GraphCommand, HashCommand, HeapCommand};
use crate::structures::{AvlTree, BinaryHeap, HashTable, HeapMode};

#[derive(Debug)]
pub struct Session {
    heap: BinaryHeap,
    avl: AvlTree,
    hash: HashTable,
    graph: Option<Graph>,
    limits: LimitsConfig,
}

impl Session {
    pub fn new(limits: LimitsConfig) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(HeapMode::Min, limits.heap_capacity),
            avl: AvlTree::new(),
            hash: HashTable::new(),
            graph: None,
            limits,
        }
    }

    pub fn heap(&self) -> &BinaryHeap {
        &self.heap
    }

    pub fn avl(&self) -> &AvlTree {
        &self.avl
    }

    pub fn hash_table(&self) -> &HashTable {
        &self.hash
    }

    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    /// Parses and executes one line. Blank lines and `#` comments yield `None`.
    pub fn execute_line(&mut self, line: &str) -> EngineResult<Option<String>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        let command: Command = trimmed.parse()?;
        self.execute(command).map(Some)
    }

    /// Runs every line of `script`, collecting one result per command.
    pub fn run_script(&mut self, script: &str) -> Vec<EngineResult<String>> {
        script
            .lines()
            .filter_map(|line| self.execute_line(line).transpose())
            .collect()
    }

    pub fn execute(&mut self, command: Command) -> EngineResult<String> {
        log::debug!("session command: {:?}", command);
        match command {
            Command::Heap(command) => Ok(self.execute_heap(command)),
            Command::Avl(command) => Ok(self.execute_avl(command)),
            Command::Graph(command) => self.execute_graph(command),
            Command::Hash(command) => Ok(self.execute_hash(command)),
        }
    }

    fn execute_heap(&mut self, command: HeapCommand) -> String {
        let heap = &mut self.heap;
        match command {
            HeapCommand::Insert(value) => heap.insert(value),
            HeapCommand::Extract => return heap.extract_top().to_string(),
            HeapCommand::ToMin => heap.convert_to_min_heap(),
            HeapCommand::ToMax => heap.convert_to_max_heap(),
            HeapCommand::Clear => heap.clear(),
            HeapCommand::Show => {}
            HeapCommand::Mode => {
                let mode = if heap.is_min_heap() { "min" } else { "max" };
                return mode.to_string();
            }
        }
        heap.get_array()
    }

    fn execute_avl(&mut self, command: AvlCommand) -> String {
        let avl = &mut self.avl;
        match command {
            AvlCommand::Insert(value) => avl.insert(value),
            AvlCommand::Remove(value) => avl.remove(value),
            AvlCommand::Clear => avl.clear(),
            AvlCommand::Show => {}
            AvlCommand::Rotation => return avl.get_last_rotation(),
        }
        avl.get_tree()
    }

    fn execute_hash(&mut self, command: HashCommand) -> String {
        let hash = &mut self.hash;
        match command {
            HashCommand::Insert { key, value } => hash.insert(key, value),
            HashCommand::Search(key) => return hash.search(key).to_string(),
            HashCommand::Clear => hash.clear(),
            HashCommand::Show => {}
        }
        hash.get_table()
    }

    fn execute_graph(&mut self, command: GraphCommand) -> EngineResult<String> {
        let limit = self.limits.max_graph_vertices;

        let output = match command {
            GraphCommand::Init { vertices, directed } => {
                if vertices > limit {
                    return Err(EngineError::VertexLimit {
                        limit,
                        requested: vertices,
                    });
                }
                let graph = Graph::new(vertices, directed);
                let matrix = graph.get_matrix();
                self.graph = Some(graph);
                log::info!(
                    "graph initialized with {} vertices ({})",
                    vertices,
                    if directed { "directed" } else { "undirected" }
                );
                matrix
            }
            GraphCommand::Drop => {
                self.graph = None;
                "[]".to_string()
            }
            GraphCommand::AddEdge { from, to, weight } => {
                let graph = self.graph_mut()?;
                check_vertex(graph, from)?;
                check_vertex(graph, to)?;
                graph.add_edge(from, to, weight);
                graph.get_matrix()
            }
            GraphCommand::RemoveEdge { from, to } => {
                let graph = self.graph_mut()?;
                check_vertex(graph, from)?;
                check_vertex(graph, to)?;
                graph.remove_edge(from, to);
                graph.get_matrix()
            }
            GraphCommand::SetDirected(directed) => {
                let graph = self.graph_mut()?;
                graph.set_directed(directed);
                graph.get_matrix()
            }
            GraphCommand::AddVertex => {
                let graph = self.graph_mut()?;
                let requested = graph.vertex_count() + 1;
                if requested > limit {
                    return Err(EngineError::VertexLimit { limit, requested });
                }
                *graph = graph.add_vertex();
                graph.get_matrix()
            }
            GraphCommand::RemoveVertex(vertex) => {
                let graph = self.graph_mut()?;
                check_vertex(graph, vertex)?;
                if graph.vertex_count() <= 1 {
                    return Err(EngineError::LastVertex);
                }
                *graph = graph.remove_vertex(vertex);
                graph.get_matrix()
            }
            GraphCommand::Bfs(start) => self.graph_ref()?.bfs(start),
            GraphCommand::Dfs(start) => self.graph_ref()?.dfs(start),
            GraphCommand::Dijkstra(start) => self.graph_ref()?.dijkstra(start),
            GraphCommand::Prim => self.graph_ref()?.prim_mst(),
            GraphCommand::Show => self.graph_ref()?.get_matrix(),
            GraphCommand::Clear => {
                let graph = self.graph_mut()?;
                graph.clear();
                graph.get_matrix()
            }
        };

        Ok(output)
    }

    fn graph_ref(&self) -> EngineResult<&Graph> {
        self.graph.as_ref().ok_or(EngineError::GraphNotInitialized)
    }

    fn graph_mut(&mut self) -> EngineResult<&mut Graph> {
        self.graph.as_mut().ok_or(EngineError::GraphNotInitialized)
    }
}

/// 调用方规则：边和顶点操作的端点必须在图内
fn check_vertex(graph: &Graph, vertex: i32) -> EngineResult<()> {
    match graph.vertex(vertex) {
        Some(_) => Ok(()),
        None => Err(EngineError::VertexOutOfRange {
            vertex,
            count: graph.vertex_count(),
        }),
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(LimitsConfig::default())
    }
}
