use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use flare_media::{AudioInfo, AudioType, ImageSize, MediaProbe, ProbeError, ProbeResult};
use image::{ImageFormat, RgbImage};
use sha1::{Digest, Sha1};

use super::*;
use crate::error::MessageError;

/// 探测总是失败
struct FailingProbe;

impl MediaProbe for FailingProbe {
    fn probe_audio(&self, _reader: &mut dyn ReadSeek) -> ProbeResult<AudioInfo> {
        Err(ProbeError::UnsupportedAudio)
    }

    fn probe_image(&self, _reader: &mut dyn ReadSeek) -> ProbeResult<ImageSize> {
        Err(ProbeError::UnknownFormat)
    }
}

/// 返回固定结果并记录调用次数
#[derive(Default)]
struct FixedProbe {
    calls: AtomicUsize,
}

impl MediaProbe for FixedProbe {
    fn probe_audio(&self, _reader: &mut dyn ReadSeek) -> ProbeResult<AudioInfo> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(AudioInfo {
            audio_type: AudioType::SilkV3,
            time: 42.7,
        })
    }

    fn probe_image(&self, _reader: &mut dyn ReadSeek) -> ProbeResult<ImageSize> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ImageSize {
            format: ImageFormat::Png,
            width: 640,
            height: 480,
        })
    }
}

/// 任何读取都失败的流
struct BrokenReader;

impl Read for BrokenReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("device gone"))
    }
}

impl Seek for BrokenReader {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Ok(0)
    }
}

fn factory_with(probe: MediaProbeRef) -> ElementFactory {
    ElementFactory::new(probe, MediaConfig::default())
}

fn silk_clip(frames: usize) -> Vec<u8> {
    let mut data = b"#!SILK_V3".to_vec();
    for _ in 0..frames {
        data.extend_from_slice(&3i16.to_le_bytes());
        data.extend_from_slice(&[7, 8, 9]);
    }
    data
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    RgbImage::new(width, height)
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}

#[test]
fn test_empty_record_digest() {
    let voice = factory_with(Arc::new(FailingProbe)).new_record(Vec::<u8>::new(), None);

    assert_eq!(voice.size, 0);
    assert_eq!(voice.duration, 0);
    assert_eq!(voice.md5, md5::compute(b"").0.to_vec());
    assert_eq!(voice.sha1, Sha1::digest(b"").to_vec());
    assert_eq!(voice.md5_hex(), "d41d8cd98f00b204e9800998ecf8427e");
    assert!(voice.summary.is_empty());
}

#[test]
fn test_record_duration_from_default_probe() {
    let voice = ElementFactory::default().new_record(silk_clip(260), Some("[语音]"));
    assert_eq!(voice.duration, 5);
    assert_eq!(voice.summary, "[语音]");
    assert_eq!(voice.size as usize, silk_clip(260).len());
}

#[test]
fn test_record_falls_back_to_length() {
    let data = vec![0x5Au8; 1000];
    let voice = factory_with(Arc::new(FailingProbe)).new_record(data, None);
    assert_eq!(voice.duration, 1000);
    assert_eq!(voice.size, 1000);
}

#[test]
fn test_disabled_audio_probe_is_not_called() {
    let probe = Arc::new(FixedProbe::default());
    let config = MediaConfig {
        audio_probe: false,
        ..MediaConfig::default()
    };
    let factory = ElementFactory::new(probe.clone(), config);

    let voice = factory.new_record(vec![1u8; 64], None);
    assert_eq!(voice.duration, 64);
    assert_eq!(probe.calls.load(Ordering::SeqCst), 0);

    let probed = factory_with(probe.clone()).new_record(vec![1u8; 64], None);
    assert_eq!(probed.duration, 42);
    assert_eq!(probe.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_stream_record_is_rewound() {
    let data = silk_clip(100);
    let voice = ElementFactory::default()
        .new_stream_record(Cursor::new(data.clone()), None)
        .unwrap();
    assert_eq!(voice.duration, 2);

    let mut stream = voice.stream.clone().unwrap();
    let mut content = Vec::new();
    stream.read_to_end(&mut content).unwrap();
    assert_eq!(content, data);
    assert!(!stream.is_owned_file());
}

#[test]
fn test_stream_read_error_propagates() {
    let factory = ElementFactory::default();

    let err = factory.new_stream_image(BrokenReader, None).unwrap_err();
    assert!(matches!(err, MessageError::Io(_)));

    let err = factory.new_stream_file(BrokenReader, "broken.bin").unwrap_err();
    assert!(matches!(err, MessageError::Io(_)));
}

#[test]
fn test_image_leaves_dimensions_unset() {
    let data = png_bytes(32, 16);
    let image = ElementFactory::default().new_image(data.clone(), Some("[图片]"));

    assert_eq!(image.size as usize, data.len());
    assert_eq!(image.md5, md5::compute(&data).0.to_vec());
    assert_eq!(image.width, None);
    assert_eq!(image.height, None);
    assert_eq!(image.summary, "[图片]");
    assert!(image.compat_face.is_none());
}

#[test]
fn test_video_thumb_dimensions() {
    let thumb = ElementFactory::default().new_video_thumb(png_bytes(320, 240));
    assert_eq!((thumb.width, thumb.height), (320, 240));

    let fixed = factory_with(Arc::new(FixedProbe::default())).new_video_thumb(vec![0u8; 4]);
    assert_eq!((fixed.width, fixed.height), (640, 480));
    assert_eq!(fixed.size, 4);
}

#[test]
fn test_video_thumb_fallback_dimensions() {
    let thumb = factory_with(Arc::new(FailingProbe)).new_video_thumb(b"not an image".to_vec());
    assert_eq!(thumb.width, DEFAULT_THUMB_WIDTH);
    assert_eq!(thumb.height, DEFAULT_THUMB_HEIGHT);

    let config = MediaConfig {
        image_probe: false,
        ..MediaConfig::default()
    };
    let disabled = ElementFactory::new(Arc::new(FixedProbe::default()), config)
        .new_video_thumb(png_bytes(8, 8));
    assert_eq!((disabled.width, disabled.height), (1920, 1080));
}

#[test]
fn test_video_carries_thumb() {
    let video_data = vec![0x11u8; 2048];
    let video = ElementFactory::default().new_video(video_data.clone(), png_bytes(64, 48), None);

    assert_eq!(video.size, 2048);
    assert_eq!(video.sha1, Sha1::digest(&video_data).to_vec());
    assert!(video.summary.is_empty());
    assert!(video.compat.is_none());

    let thumb = video.thumb;
    assert_eq!((thumb.width, thumb.height), (64, 48));
    assert!(thumb.stream.is_some());
}

#[test]
fn test_stream_video_digests_both_streams() {
    let thumb_data = png_bytes(10, 20);
    let video = ElementFactory::default()
        .new_stream_video(
            Cursor::new(vec![3u8; 300]),
            Cursor::new(thumb_data.clone()),
            Some("[视频]"),
        )
        .unwrap();

    assert_eq!(video.size, 300);
    let thumb = video.thumb;
    assert_eq!(thumb.size as usize, thumb_data.len());
    assert_eq!(thumb.md5, md5::compute(&thumb_data).0.to_vec());
    assert_eq!((thumb.width, thumb.height), (10, 20));
}

#[test]
fn test_file_from_buffer() {
    let file = ElementFactory::default().new_file(b"hello file".to_vec(), "notes.txt");
    assert_eq!(file.file_name, "notes.txt");
    assert_eq!(file.file_size, 10);
    assert_eq!(file.file_md5, md5::compute(b"hello file").0.to_vec());
    assert!(!file.is_uploaded());
    assert!(file.file_stream.is_some());
}

#[test]
fn test_missing_path_returns_open_error() {
    let factory = ElementFactory::default();
    let missing = "/definitely/not/here/voice.amr";

    match factory.new_file_record(missing, None) {
        Err(MessageError::Open { path, .. }) => assert_eq!(path.to_str(), Some(missing)),
        other => panic!("expected open error, got {other:?}"),
    }
    assert!(matches!(
        factory.new_local_file(missing, None),
        Err(MessageError::Open { .. })
    ));
    assert!(matches!(
        factory.new_file_video(missing, Vec::<u8>::new(), None),
        Err(MessageError::Open { .. })
    ));
}

#[test]
fn test_free_functions_use_default_factory() {
    let voice = new_record(silk_clip(50), None);
    assert_eq!(voice.duration, 1);

    let file = new_file(Vec::<u8>::new(), "empty.bin");
    assert_eq!(file.file_size, 0);
    assert_eq!(file.sha1_hex(), "da39a3ee5e6b4b0d3255bfef95601890afd80709");
}

#[test]
fn test_empty_streams_are_valid() {
    let factory = factory_with(Arc::new(FailingProbe));
    let empty_md5 = md5::compute(b"").0.to_vec();
    let empty_sha1 = Sha1::digest(b"").to_vec();

    let voice = factory
        .new_stream_record(Cursor::new(Vec::<u8>::new()), None)
        .unwrap();
    assert_eq!((voice.size, voice.duration), (0, 0));
    assert_eq!(voice.md5, empty_md5);
    assert_eq!(voice.sha1, empty_sha1);

    let file = factory
        .new_stream_file(Cursor::new(Vec::<u8>::new()), "empty.bin")
        .unwrap();
    assert_eq!(file.file_size, 0);
    assert_eq!(file.file_md5, empty_md5);
    assert_eq!(file.file_sha1, empty_sha1);

    let image = factory
        .new_stream_image(Cursor::new(Vec::<u8>::new()), None)
        .unwrap();
    assert_eq!(image.size, 0);
    assert_eq!(image.md5, empty_md5);
    assert_eq!(image.sha1, empty_sha1);
}

#[test]
fn test_unvalidated_chunk_size_is_bounded() {
    let config = MediaConfig {
        digest_chunk_size: usize::MAX,
        ..MediaConfig::default()
    };
    let factory = ElementFactory::new(Arc::new(FailingProbe), config);

    let data = b"bounded read buffer".to_vec();
    let file = factory
        .new_stream_file(Cursor::new(data.clone()), "data.bin")
        .unwrap();
    assert_eq!(file.file_size as usize, data.len());
    assert_eq!(file.file_md5, md5::compute(&data).0.to_vec());
}

#[test]
fn test_caller_keeps_stream_through_clone() {
    let data = vec![9u8; 40];
    let handle = MediaStream::from_reader(Cursor::new(data.clone()));

    let file = ElementFactory::default()
        .new_stream_file(handle.clone(), "shared.bin")
        .unwrap();
    assert_eq!(file.file_size, 40);
    assert_eq!(handle.read_all().unwrap(), data);
}
