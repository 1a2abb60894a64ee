//! 媒体元素构造
//!
//! 每种媒体元素提供三个入口：内存数据、调用方的可定位流、本地文件路径。
//! 三者语义一致：
//! 1. 对完整内容计算一次摘要（长度、MD5、SHA1），流随后回到起始位置；
//! 2. 语音探测时长，失败时以内容长度作为时长；
//! 3. 短视频同时构造封面，封面探测尺寸失败时使用 1920x1080；
//! 4. 不发生任何网络或磁盘写入。
//!
//! 探测失败只降级不报错；只有打开文件失败和调用方流本身的 I/O 错误会返回给调用方。
//!
//! 流入口接管调用方的流。[`MediaStream`] 本身可读可定位，克隆后传入即可
//! 让调用方与元素共享同一底层流。

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use flare_media::{
    DefaultMediaProbe, MediaDigest, MediaProbeRef, ProbeError, ReadSeek, digest_bytes,
    digest_stream_with_chunk,
};
use once_cell::sync::Lazy;
use tracing::{debug, instrument, warn};

use super::media::{
    DEFAULT_THUMB_HEIGHT, DEFAULT_THUMB_WIDTH, FileElement, ImageElement, ShortVideoElement,
    VideoThumb, VoiceElement,
};
use super::stream::MediaStream;
use crate::config::{MediaConfig, loaded_config};
use crate::error::Result;
use crate::utils::file_base_name;

/// 进程级默认构造器，首次使用时按已加载的配置创建
static DEFAULT_FACTORY: Lazy<ElementFactory> = Lazy::new(|| {
    let config = loaded_config()
        .map(|cfg| cfg.media.clone())
        .unwrap_or_default();
    ElementFactory::from_config(&config)
});

/// 默认构造器
pub fn default_factory() -> &'static ElementFactory {
    &DEFAULT_FACTORY
}

/// 媒体元素构造器
#[derive(Clone)]
pub struct ElementFactory {
    probe: MediaProbeRef,
    config: MediaConfig,
}

impl Default for ElementFactory {
    fn default() -> Self {
        Self::from_config(&MediaConfig::default())
    }
}

impl ElementFactory {
    pub fn new(probe: MediaProbeRef, config: MediaConfig) -> Self {
        Self { probe, config }
    }

    /// 使用默认探测实现
    pub fn from_config(config: &MediaConfig) -> Self {
        Self::new(Arc::new(DefaultMediaProbe), config.clone())
    }

    pub fn config(&self) -> &MediaConfig {
        &self.config
    }

    // ---------------------------------------------------------------
    // 语音
    // ---------------------------------------------------------------

    pub fn new_record(&self, data: impl Into<Bytes>, summary: Option<&str>) -> VoiceElement {
        let data = data.into();
        let digest = digest_bytes(&data);
        let duration = self.voice_duration(&mut Cursor::new(data.clone()), &digest);
        voice_element(MediaStream::from_bytes(data), &digest, duration, summary)
    }

    /// 流会移交给元素；需要继续持有句柄时，传入 [`MediaStream`] 的克隆即可。
    pub fn new_stream_record<R: ReadSeek + 'static>(
        &self,
        reader: R,
        summary: Option<&str>,
    ) -> Result<VoiceElement> {
        self.record_from(MediaStream::from_reader(reader), summary)
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn new_file_record(
        &self,
        path: impl AsRef<Path>,
        summary: Option<&str>,
    ) -> Result<VoiceElement> {
        self.record_from(MediaStream::open(path)?, summary)
    }

    fn record_from(&self, stream: MediaStream, summary: Option<&str>) -> Result<VoiceElement> {
        let (digest, duration) = stream.with_reader(|reader| -> Result<_> {
            let digest = self.digest(reader)?;
            let duration = self.voice_duration(reader, &digest);
            Ok((digest, duration))
        })?;
        debug!(size = digest.length, duration, "voice element built");
        Ok(voice_element(stream, &digest, duration, summary))
    }

    fn voice_duration(&self, reader: &mut dyn ReadSeek, digest: &MediaDigest) -> u32 {
        let fallback = digest.size_u32();
        if !self.config.audio_probe {
            return fallback;
        }
        match self.probe.probe_audio(reader) {
            Ok(info) => info.time as u32,
            Err(err) => {
                self.report_degraded("audio", &err);
                fallback
            }
        }
    }

    // ---------------------------------------------------------------
    // 图片
    // ---------------------------------------------------------------

    pub fn new_image(&self, data: impl Into<Bytes>, summary: Option<&str>) -> ImageElement {
        let data = data.into();
        let digest = digest_bytes(&data);
        image_element(MediaStream::from_bytes(data), &digest, summary)
    }

    /// 流会移交给元素；需要继续持有句柄时，传入 [`MediaStream`] 的克隆即可。
    pub fn new_stream_image<R: ReadSeek + 'static>(
        &self,
        reader: R,
        summary: Option<&str>,
    ) -> Result<ImageElement> {
        self.image_from(MediaStream::from_reader(reader), summary)
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn new_file_image(
        &self,
        path: impl AsRef<Path>,
        summary: Option<&str>,
    ) -> Result<ImageElement> {
        self.image_from(MediaStream::open(path)?, summary)
    }

    fn image_from(&self, stream: MediaStream, summary: Option<&str>) -> Result<ImageElement> {
        let digest = stream.with_reader(|reader| self.digest(reader))?;
        Ok(image_element(stream, &digest, summary))
    }

    // ---------------------------------------------------------------
    // 短视频
    // ---------------------------------------------------------------

    pub fn new_video(
        &self,
        data: impl Into<Bytes>,
        thumb: impl Into<Bytes>,
        summary: Option<&str>,
    ) -> ShortVideoElement {
        let data = data.into();
        let digest = digest_bytes(&data);
        let thumb = self.new_video_thumb(thumb);
        video_element(MediaStream::from_bytes(data), &digest, thumb, summary)
    }

    /// 流会移交给元素；需要继续持有句柄时，传入 [`MediaStream`] 的克隆即可。
    pub fn new_stream_video<R, T>(
        &self,
        reader: R,
        thumb: T,
        summary: Option<&str>,
    ) -> Result<ShortVideoElement>
    where
        R: ReadSeek + 'static,
        T: ReadSeek + 'static,
    {
        self.video_from(
            MediaStream::from_reader(reader),
            MediaStream::from_reader(thumb),
            summary,
        )
    }

    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn new_file_video(
        &self,
        path: impl AsRef<Path>,
        thumb: impl Into<Bytes>,
        summary: Option<&str>,
    ) -> Result<ShortVideoElement> {
        let stream = MediaStream::open(path)?;
        self.video_from(stream, MediaStream::from_bytes(thumb), summary)
    }

    fn video_from(
        &self,
        stream: MediaStream,
        thumb: MediaStream,
        summary: Option<&str>,
    ) -> Result<ShortVideoElement> {
        let digest = stream.with_reader(|reader| self.digest(reader))?;
        let thumb = self.thumb_from(thumb)?;
        debug!(size = digest.length, thumb_size = thumb.size, "video element built");
        Ok(video_element(stream, &digest, thumb, summary))
    }

    /// 由内存数据构造视频封面
    pub fn new_video_thumb(&self, data: impl Into<Bytes>) -> VideoThumb {
        let data = data.into();
        let digest = digest_bytes(&data);
        let (width, height) = self.thumb_size(&mut Cursor::new(data.clone()));
        thumb_element(MediaStream::from_bytes(data), &digest, width, height)
    }

    /// 由调用方的流构造视频封面
    ///
    /// 流会移交给元素；需要继续持有句柄时，传入 [`MediaStream`] 的克隆即可。
    pub fn new_stream_video_thumb<R: ReadSeek + 'static>(&self, reader: R) -> Result<VideoThumb> {
        self.thumb_from(MediaStream::from_reader(reader))
    }

    fn thumb_from(&self, stream: MediaStream) -> Result<VideoThumb> {
        let (digest, (width, height)) = stream.with_reader(|reader| -> Result<_> {
            let digest = self.digest(reader)?;
            Ok((digest, self.thumb_size(reader)))
        })?;
        Ok(thumb_element(stream, &digest, width, height))
    }

    fn thumb_size(&self, reader: &mut dyn ReadSeek) -> (u32, u32) {
        let fallback = (DEFAULT_THUMB_WIDTH, DEFAULT_THUMB_HEIGHT);
        if !self.config.image_probe {
            return fallback;
        }
        match self.probe.probe_image(reader) {
            Ok(size) => (size.width, size.height),
            Err(err) => {
                self.report_degraded("image", &err);
                fallback
            }
        }
    }

    // ---------------------------------------------------------------
    // 文件
    // ---------------------------------------------------------------

    pub fn new_file(&self, data: impl Into<Bytes>, file_name: &str) -> FileElement {
        let data = data.into();
        let digest = digest_bytes(&data);
        file_element(MediaStream::from_bytes(data), &digest, file_name)
    }

    /// 流会移交给元素；需要继续持有句柄时，传入 [`MediaStream`] 的克隆即可。
    pub fn new_stream_file<R: ReadSeek + 'static>(
        &self,
        reader: R,
        file_name: &str,
    ) -> Result<FileElement> {
        self.file_from(MediaStream::from_reader(reader), file_name)
    }

    /// 由本地文件构造文件元素，未指定 `name` 时使用路径中的文件名
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn new_local_file(&self, path: impl AsRef<Path>, name: Option<&str>) -> Result<FileElement> {
        let path = path.as_ref();
        let stream = MediaStream::open(path)?;
        let file_name = match name {
            Some(name) => name.to_string(),
            None => file_base_name(path),
        };
        self.file_from(stream, &file_name)
    }

    fn file_from(&self, stream: MediaStream, file_name: &str) -> Result<FileElement> {
        let digest = stream.with_reader(|reader| self.digest(reader))?;
        Ok(file_element(stream, &digest, file_name))
    }

    // ---------------------------------------------------------------

    fn digest(&self, reader: &mut dyn ReadSeek) -> Result<MediaDigest> {
        Ok(digest_stream_with_chunk(reader, self.config.digest_chunk_size)?)
    }

    fn report_degraded(&self, probe: &'static str, err: &ProbeError) {
        if self.config.report_degraded {
            warn!(probe, error = %err, "media probe failed, using fallback value");
        }
    }
}

fn summary_of(summary: Option<&str>) -> String {
    summary.map(str::to_string).unwrap_or_default()
}

fn voice_element(
    stream: MediaStream,
    digest: &MediaDigest,
    duration: u32,
    summary: Option<&str>,
) -> VoiceElement {
    VoiceElement {
        size: digest.size_u32(),
        summary: summary_of(summary),
        stream: Some(stream),
        md5: digest.md5.to_vec(),
        sha1: digest.sha1.to_vec(),
        duration,
        ..VoiceElement::default()
    }
}

fn image_element(stream: MediaStream, digest: &MediaDigest, summary: Option<&str>) -> ImageElement {
    ImageElement {
        size: digest.size_u32(),
        summary: summary_of(summary),
        stream: Some(stream),
        md5: digest.md5.to_vec(),
        sha1: digest.sha1.to_vec(),
        ..ImageElement::default()
    }
}

fn video_element(
    stream: MediaStream,
    digest: &MediaDigest,
    thumb: VideoThumb,
    summary: Option<&str>,
) -> ShortVideoElement {
    ShortVideoElement {
        size: digest.size_u32(),
        thumb,
        summary: summary_of(summary),
        md5: digest.md5.to_vec(),
        sha1: digest.sha1.to_vec(),
        stream: Some(stream),
        ..ShortVideoElement::default()
    }
}

fn thumb_element(stream: MediaStream, digest: &MediaDigest, width: u32, height: u32) -> VideoThumb {
    VideoThumb {
        stream: Some(stream),
        size: digest.size_u32(),
        md5: digest.md5.to_vec(),
        sha1: digest.sha1.to_vec(),
        width,
        height,
    }
}

fn file_element(stream: MediaStream, digest: &MediaDigest, file_name: &str) -> FileElement {
    FileElement {
        file_name: file_name.to_string(),
        file_size: digest.length,
        file_stream: Some(stream),
        file_md5: digest.md5.to_vec(),
        file_sha1: digest.sha1.to_vec(),
        ..FileElement::default()
    }
}

// ---------------------------------------------------------------
// 使用默认构造器的便捷函数
// ---------------------------------------------------------------

pub fn new_record(data: impl Into<Bytes>, summary: Option<&str>) -> VoiceElement {
    default_factory().new_record(data, summary)
}

pub fn new_stream_record<R: ReadSeek + 'static>(
    reader: R,
    summary: Option<&str>,
) -> Result<VoiceElement> {
    default_factory().new_stream_record(reader, summary)
}

pub fn new_file_record(path: impl AsRef<Path>, summary: Option<&str>) -> Result<VoiceElement> {
    default_factory().new_file_record(path, summary)
}

pub fn new_image(data: impl Into<Bytes>, summary: Option<&str>) -> ImageElement {
    default_factory().new_image(data, summary)
}

pub fn new_stream_image<R: ReadSeek + 'static>(
    reader: R,
    summary: Option<&str>,
) -> Result<ImageElement> {
    default_factory().new_stream_image(reader, summary)
}

pub fn new_file_image(path: impl AsRef<Path>, summary: Option<&str>) -> Result<ImageElement> {
    default_factory().new_file_image(path, summary)
}

pub fn new_video(
    data: impl Into<Bytes>,
    thumb: impl Into<Bytes>,
    summary: Option<&str>,
) -> ShortVideoElement {
    default_factory().new_video(data, thumb, summary)
}

pub fn new_stream_video<R, T>(reader: R, thumb: T, summary: Option<&str>) -> Result<ShortVideoElement>
where
    R: ReadSeek + 'static,
    T: ReadSeek + 'static,
{
    default_factory().new_stream_video(reader, thumb, summary)
}

pub fn new_file_video(
    path: impl AsRef<Path>,
    thumb: impl Into<Bytes>,
    summary: Option<&str>,
) -> Result<ShortVideoElement> {
    default_factory().new_file_video(path, thumb, summary)
}

pub fn new_video_thumb(data: impl Into<Bytes>) -> VideoThumb {
    default_factory().new_video_thumb(data)
}

pub fn new_stream_video_thumb<R: ReadSeek + 'static>(reader: R) -> Result<VideoThumb> {
    default_factory().new_stream_video_thumb(reader)
}

pub fn new_file(data: impl Into<Bytes>, file_name: &str) -> FileElement {
    default_factory().new_file(data, file_name)
}

pub fn new_stream_file<R: ReadSeek + 'static>(reader: R, file_name: &str) -> Result<FileElement> {
    default_factory().new_stream_file(reader, file_name)
}

pub fn new_local_file(path: impl AsRef<Path>, name: Option<&str>) -> Result<FileElement> {
    default_factory().new_local_file(path, name)
}

#[cfg(test)]
#[path = "factory_tests.rs"]
mod factory_tests;
