//! Flare IM 消息元素库
//!
//! 定义构成一条聊天消息的元素集合（文本、@、表情、回复、语音、图片、文件、短视频、
//! 卡片、合并转发），以及把内存数据、可定位流、本地文件转换为携带摘要与媒体信息的
//! 完整元素的构造函数。

pub mod config;
pub mod error;
pub mod message;
pub mod tracing;
pub mod utils;

pub use config::{LoggingConfig, MediaConfig, MessageConfig, load_config, loaded_config};
pub use flare_media::{DefaultMediaProbe, MediaProbe, MediaProbeRef, ReadSeek};
pub use error::*;
pub use message::*;
pub use utils::*;
