//! 服务层模块
//!
//! 图算法、命令解析与会话执行

pub mod algorithm;
pub mod command;
pub mod session;

// 重新导出常用服务
pub use algorithm::*;
pub use command::{AvlCommand, Command, GraphCommand, HashCommand, HeapCommand};
pub use session::Session;
