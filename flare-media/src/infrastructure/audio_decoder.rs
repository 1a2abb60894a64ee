//! 语音时长探测
//!
//! 支持 AMR-NB 与 SILK v3（含腾讯 0x02 前缀变体），两者每帧均为 20ms。

use std::io::{Read, Seek, SeekFrom};

use crate::domain::models::{AudioInfo, AudioType};
use crate::error::{ProbeError, ProbeResult};

const AMR_HEADER: &[u8] = b"#!AMR\n";
const SILK_HEADER: &[u8] = b"#!SILK_V3";
const TEN_SILK_PREFIX: u8 = 0x02;

const FRAME_SECONDS: f32 = 0.02;

/// AMR-NB 各帧类型的帧长（含 1 字节帧头）
const AMR_FRAME_SIZES: [usize; 16] = [13, 14, 16, 18, 20, 21, 27, 32, 6, 1, 1, 1, 1, 1, 1, 1];

/// 探测语音类型与时长
///
/// 从起始位置读取完整内容，完成后（无论成功与否）重新定位到起始位置。
pub fn decode_audio<R: Read + Seek + ?Sized>(reader: &mut R) -> ProbeResult<AudioInfo> {
    reader.seek(SeekFrom::Start(0))?;
    let mut data = Vec::new();
    let read = reader.read_to_end(&mut data);
    reader.seek(SeekFrom::Start(0))?;
    read?;

    decode_slice(&data)
}

fn decode_slice(data: &[u8]) -> ProbeResult<AudioInfo> {
    if let Some(body) = data.strip_prefix(AMR_HEADER) {
        return Ok(audio_info(AudioType::Amr, count_amr_frames(body)?));
    }
    if let Some(body) = data.strip_prefix(SILK_HEADER) {
        return Ok(audio_info(AudioType::SilkV3, count_silk_frames(body)?));
    }
    if let Some(body) = data
        .strip_prefix(&[TEN_SILK_PREFIX])
        .and_then(|rest| rest.strip_prefix(SILK_HEADER))
    {
        return Ok(audio_info(AudioType::TenSilkV3, count_silk_frames(body)?));
    }
    Err(ProbeError::UnsupportedAudio)
}

fn audio_info(audio_type: AudioType, frames: u32) -> AudioInfo {
    AudioInfo {
        audio_type,
        time: frames as f32 * FRAME_SECONDS,
    }
}

/// 统计完整的 AMR 帧数，末尾不完整的帧忽略
fn count_amr_frames(body: &[u8]) -> ProbeResult<u32> {
    let mut offset = 0usize;
    let mut frames = 0u32;

    while offset < body.len() {
        let frame_type = ((body[offset] >> 3) & 0x0F) as usize;
        let size = AMR_FRAME_SIZES[frame_type];
        if offset + size > body.len() {
            break;
        }
        offset += size;
        frames += 1;
    }

    if frames == 0 {
        return Err(ProbeError::Truncated);
    }
    Ok(frames)
}

/// 统计 SILK 帧数
///
/// 每帧以小端 i16 长度开头，负长度（0xFFFF）为结束标记。
fn count_silk_frames(body: &[u8]) -> ProbeResult<u32> {
    let mut offset = 0usize;
    let mut frames = 0u32;

    while offset + 2 <= body.len() {
        let len = i16::from_le_bytes([body[offset], body[offset + 1]]);
        if len < 0 {
            break;
        }
        let end = offset + 2 + len as usize;
        if end > body.len() {
            break;
        }
        offset = end;
        frames += 1;
    }

    if frames == 0 {
        return Err(ProbeError::Truncated);
    }
    Ok(frames)
}
