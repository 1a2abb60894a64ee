use std::fmt;

pub use image::ImageFormat;

/// 内容摘要：长度、MD5 与 SHA1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MediaDigest {
    pub md5: [u8; 16],
    pub sha1: [u8; 20],
    pub length: u64,
}

impl MediaDigest {
    /// MD5 的十六进制表示
    pub fn md5_hex(&self) -> String {
        hex::encode(self.md5)
    }

    /// SHA1 的十六进制表示
    pub fn sha1_hex(&self) -> String {
        hex::encode(self.sha1)
    }

    /// 长度截断为协议使用的 32 位大小，超出时取上限
    pub fn size_u32(&self) -> u32 {
        u32::try_from(self.length).unwrap_or(u32::MAX)
    }
}

/// 语音编码类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioType {
    Amr,
    /// 带 0x02 前缀的腾讯 SILK
    TenSilkV3,
    SilkV3,
}

impl AudioType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioType::Amr => "amr",
            AudioType::TenSilkV3 => "ten_silk_v3",
            AudioType::SilkV3 => "silk_v3",
        }
    }
}

impl fmt::Display for AudioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 音频探测结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AudioInfo {
    pub audio_type: AudioType,
    /// 播放时长（秒）
    pub time: f32,
}

/// 图片探测结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
}
