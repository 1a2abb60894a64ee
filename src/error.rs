//! 消息元素错误类型定义
//!
//! 只有文件系统边界和调用方提供的流本身会产生错误；
//! 媒体探测失败、卡片内容异常、骰子越界都在构造函数内部降级处理。

use std::path::PathBuf;

use thiserror::Error;

/// 消息元素错误类型
#[derive(Debug, Error)]
pub enum MessageError {
    /// 无法打开本地文件
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 读取调用方提供的流失败
    #[error("Stream I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(String),
}

/// 消息元素结果类型
pub type Result<T> = std::result::Result<T, MessageError>;

impl From<anyhow::Error> for MessageError {
    fn from(err: anyhow::Error) -> Self {
        MessageError::Config(format!("{err:#}"))
    }
}
