//! Flare 媒体探测库
//!
//! 为消息元素构造提供三类协作者：
//! - 摘要计算：一次读取完整内容，得到长度、MD5 与 SHA1
//! - 音频探测：识别 AMR / SILK 语音并估算播放时长
//! - 图片探测：识别图片格式并读取宽高
//!
//! 所有探测函数在返回前都会把流重新定位到起始位置，
//! 以便发送流程再次完整读取。

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::models::{AudioInfo, AudioType, ImageSize, MediaDigest};
pub use domain::probe::{DefaultMediaProbe, MediaProbe, MediaProbeRef, ReadSeek};
pub use error::{ProbeError, ProbeResult};
pub use infrastructure::audio_decoder::decode_audio;
pub use infrastructure::digest::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, digest_bytes, digest_stream, digest_stream_with_chunk};
pub use infrastructure::image_resolver::resolve_image;
