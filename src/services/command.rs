//! 命令解析模块
//!
//! 将一行文本解析为会话命令，例如 `graph add-edge 0 1 5`、`heap insert 3`。

use std::str::FromStr;

use crate::core::{EngineError, EngineResult, DEFAULT_EDGE_WEIGHT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeapCommand {
    Insert(i32),
    Extract,
    ToMin,
    ToMax,
    Clear,
    Show,
    Mode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvlCommand {
    Insert(i32),
    Remove(i32),
    Clear,
    Show,
    Rotation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphCommand {
    Init { vertices: usize, directed: bool },
    AddEdge { from: i32, to: i32, weight: i32 },
    RemoveEdge { from: i32, to: i32 },
    SetDirected(bool),
    AddVertex,
    RemoveVertex(i32),
    Bfs(i32),
    Dfs(i32),
    Dijkstra(i32),
    Prim,
    Show,
    Clear,
    Drop,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashCommand {
    Insert { key: i32, value: i32 },
    Search(i32),
    Clear,
    Show,
}

/// 会话命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Heap(HeapCommand),
    Avl(AvlCommand),
    Graph(GraphCommand),
    Hash(HashCommand),
}

/// Token cursor over one command line, remembering the line for error text.
struct Tokens<'a> {
    line: &'a str,
    parts: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            line,
            parts: line.split_whitespace(),
        }
    }

    fn next_word(&mut self, what: &str) -> EngineResult<&'a str> {
        self.parts
            .next()
            .ok_or_else(|| EngineError::parse(self.line, format!("missing {}", what)))
    }

    fn number<T: FromStr>(&mut self, what: &str) -> EngineResult<T> {
        let token = self.next_word(what)?;
        token
            .parse()
            .map_err(|_| EngineError::parse(self.line, format!("invalid {} '{}'", what, token)))
    }

    fn optional_number<T: FromStr>(&mut self, what: &str, default: T) -> EngineResult<T> {
        match self.parts.next() {
            Some(token) => token.parse().map_err(|_| {
                EngineError::parse(self.line, format!("invalid {} '{}'", what, token))
            }),
            None => Ok(default),
        }
    }

    fn finish<T>(mut self, command: T) -> EngineResult<T> {
        match self.parts.next() {
            Some(extra) => Err(EngineError::parse(
                self.line,
                format!("unexpected argument '{}'", extra),
            )),
            None => Ok(command),
        }
    }

    fn unknown(&self) -> EngineError {
        EngineError::UnknownCommand(self.line.trim().to_string())
    }
}

fn parse_directedness(tokens: &Tokens<'_>, word: Option<&str>) -> EngineResult<bool> {
    match word {
        None | Some("undirected") | Some("false") => Ok(false),
        Some("directed") | Some("true") => Ok(true),
        Some(other) => Err(EngineError::parse(
            tokens.line,
            format!("expected directed/undirected, got '{}'", other),
        )),
    }
}

impl FromStr for Command {
    type Err = EngineError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = Tokens::new(line);
        let target = tokens.next_word("structure")?;
        let action = tokens.next_word("action")?;

        match target {
            "heap" => {
                let command = match action {
                    "insert" => HeapCommand::Insert(tokens.number("value")?),
                    "extract" => HeapCommand::Extract,
                    "min" => HeapCommand::ToMin,
                    "max" => HeapCommand::ToMax,
                    "clear" => HeapCommand::Clear,
                    "show" => HeapCommand::Show,
                    "mode" => HeapCommand::Mode,
                    _ => return Err(tokens.unknown()),
                };
                tokens.finish(Command::Heap(command))
            }
            "avl" => {
                let command = match action {
                    "insert" => AvlCommand::Insert(tokens.number("value")?),
                    "remove" => AvlCommand::Remove(tokens.number("value")?),
                    "clear" => AvlCommand::Clear,
                    "show" => AvlCommand::Show,
                    "rotation" => AvlCommand::Rotation,
                    _ => return Err(tokens.unknown()),
                };
                tokens.finish(Command::Avl(command))
            }
            "graph" => {
                let command = match action {
                    "init" => {
                        let vertices: usize = tokens.number("vertex count")?;
                        if vertices == 0 {
                            return Err(EngineError::parse(
                                line,
                                "graph must have at least 1 vertex",
                            ));
                        }
                        let word = tokens.parts.next();
                        let directed = parse_directedness(&tokens, word)?;
                        GraphCommand::Init { vertices, directed }
                    }
                    "add-edge" => GraphCommand::AddEdge {
                        from: tokens.number("source vertex")?,
                        to: tokens.number("target vertex")?,
                        weight: tokens.optional_number("weight", DEFAULT_EDGE_WEIGHT)?,
                    },
                    "remove-edge" => GraphCommand::RemoveEdge {
                        from: tokens.number("source vertex")?,
                        to: tokens.number("target vertex")?,
                    },
                    "directed" => {
                        let word = Some(tokens.next_word("true/false")?);
                        GraphCommand::SetDirected(parse_directedness(&tokens, word)?)
                    }
                    "add-vertex" => GraphCommand::AddVertex,
                    "remove-vertex" => GraphCommand::RemoveVertex(tokens.number("vertex")?),
                    "bfs" => GraphCommand::Bfs(tokens.number("start vertex")?),
                    "dfs" => GraphCommand::Dfs(tokens.number("start vertex")?),
                    "dijkstra" => GraphCommand::Dijkstra(tokens.number("start vertex")?),
                    "prim" => GraphCommand::Prim,
                    "show" => GraphCommand::Show,
                    "clear" => GraphCommand::Clear,
                    "drop" => GraphCommand::Drop,
                    _ => return Err(tokens.unknown()),
                };
                tokens.finish(Command::Graph(command))
            }
            "hash" => {
                let command = match action {
                    "insert" => HashCommand::Insert {
                        key: tokens.number("key")?,
                        value: tokens.number("value")?,
                    },
                    "search" => HashCommand::Search(tokens.number("key")?),
                    "clear" => HashCommand::Clear,
                    "show" => HashCommand::Show,
                    _ => return Err(tokens.unknown()),
                };
                tokens.finish(Command::Hash(command))
            }
            _ => Err(tokens.unknown()),
        }
    }
}
