//! 核心模块
//!
//! 错误类型、共享常量与规范文本编码

pub mod constants;
pub mod encoding;
pub mod error;

pub use constants::*;
pub use encoding::{encode_list, encode_rows};
pub use error::{EngineError, EngineResult};
