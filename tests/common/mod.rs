//! 集成测试共享工具模块
//!
//! 提供测试基础设施和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use algoviz::config::LimitsConfig;
use algoviz::Session;

/// 创建使用默认限制的会话
pub fn default_session() -> Session {
    Session::new(LimitsConfig::default())
}

/// 依次执行多条命令，返回最后一条命令的输出
pub fn run_all(session: &mut Session, lines: &[&str]) -> String {
    let mut last = String::new();
    for line in lines {
        if let Some(output) = session
            .execute_line(line)
            .expect("Command should succeed in test")
        {
            last = output;
        }
    }
    last
}
