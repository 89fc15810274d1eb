//! Algoviz - an in-memory algorithms engine
//!
//! This crate provides a mode-switchable binary heap, an AVL tree with rotation
//! tracking, an adjacency-matrix graph with BFS/DFS/Dijkstra/Prim, and a
//! fixed-bucket chaining hash table. Every structure serializes its state to a
//! canonical bracketed text form consumed by visualizers.

pub mod collections;
pub mod config;
pub mod core;
pub mod graph;
pub mod services;
pub mod structures;
pub mod utils;

pub use crate::core::{EngineError, EngineResult};
pub use crate::graph::Graph;
pub use crate::services::Session;
pub use crate::structures::{AvlTree, BinaryHeap, HashTable, HeapMode};
