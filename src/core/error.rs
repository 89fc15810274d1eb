//! 统一错误处理
//!
//! 数据结构本身从不失败（越界静默忽略、空读取返回哨兵值），
//! 错误类型只用于配置加载、日志初始化以及会话命令解析。

use thiserror::Error;

/// Errors raised outside the total data-structure core.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("cannot parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("graph not initialized")]
    GraphNotInitialized,

    #[error("graph is limited to {limit} vertices, requested {requested}")]
    VertexLimit { limit: usize, requested: usize },

    #[error("vertex {vertex} out of range, graph has {count} vertices")]
    VertexOutOfRange { vertex: i32, count: usize },

    #[error("graph must keep at least one vertex")]
    LastVertex,
}

impl EngineError {
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        EngineError::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

impl From<flexi_logger::FlexiLoggerError> for EngineError {
    fn from(err: flexi_logger::FlexiLoggerError) -> Self {
        EngineError::Logging(err.to_string())
    }
}

/// 统一的结果类型
pub type EngineResult<T> = Result<T, EngineError>;
