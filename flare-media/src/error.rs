//! 媒体探测错误类型定义

use thiserror::Error;

/// 媒体探测错误
///
/// 探测失败在元素构造阶段不会向调用方传播，而是由调用方选择降级值。
#[derive(Debug, Error)]
pub enum ProbeError {
    /// 读取或定位流失败
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// 无法识别的音频格式
    #[error("Unsupported audio format")]
    UnsupportedAudio,

    /// 音频头部之后没有完整的帧
    #[error("Truncated audio stream: no complete frame")]
    Truncated,

    /// 无法识别的图片格式
    #[error("Unknown image format")]
    UnknownFormat,

    /// 图片解码错误
    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),
}

/// 媒体探测结果类型
pub type ProbeResult<T> = Result<T, ProbeError>;
