use std::io::{Read, Seek};
use std::sync::Arc;

use crate::domain::models::{AudioInfo, ImageSize};
use crate::error::ProbeResult;
use crate::infrastructure::audio_decoder::decode_audio;
use crate::infrastructure::image_resolver::resolve_image;

/// 可读且可定位的字节流
pub trait ReadSeek: Read + Seek + Send {}

impl<T: Read + Seek + Send> ReadSeek for T {}

/// 媒体探测接口
///
/// 元素构造只通过该接口访问音频与图片探测，测试中可替换为固定结果的实现。
pub trait MediaProbe: Send + Sync {
    /// 探测语音时长
    fn probe_audio(&self, reader: &mut dyn ReadSeek) -> ProbeResult<AudioInfo>;

    /// 探测图片宽高
    fn probe_image(&self, reader: &mut dyn ReadSeek) -> ProbeResult<ImageSize>;
}

pub type MediaProbeRef = Arc<dyn MediaProbe>;

/// 默认探测实现
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMediaProbe;

impl MediaProbe for DefaultMediaProbe {
    fn probe_audio(&self, reader: &mut dyn ReadSeek) -> ProbeResult<AudioInfo> {
        decode_audio(reader)
    }

    fn probe_image(&self, reader: &mut dyn ReadSeek) -> ProbeResult<ImageSize> {
        resolve_image(reader)
    }
}
