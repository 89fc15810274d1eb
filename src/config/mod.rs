use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{EngineError, EngineResult, DEFAULT_HEAP_CAPACITY};

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "algoviz".to_string(),
            max_file_size: 10 * 1024 * 1024, // 10MB
            max_files: 5,
        }
    }
}

/// 会话层使用的容量限制
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LimitsConfig {
    /// 会话中二叉堆的固定容量
    pub heap_capacity: usize,
    /// 会话中图允许的最大顶点数
    pub max_graph_vertices: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            heap_capacity: DEFAULT_HEAP_CAPACITY,
            max_graph_vertices: 15,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub limits: LimitsConfig,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> EngineResult<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> EngineResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.limits.heap_capacity == 0 {
            return Err(EngineError::InvalidConfig(
                "limits.heap_capacity must be at least 1".to_string(),
            ));
        }
        if self.limits.max_graph_vertices == 0 {
            return Err(EngineError::InvalidConfig(
                "limits.max_graph_vertices must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
