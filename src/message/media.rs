//! 媒体元素：语音、图片、文件、短视频
//!
//! 字段分为接收侧（远端标识、URL）与发送侧（流、本地摘要、兼容负载）两部分。
//! 构造函数只填充发送侧字段，远端标识由发送流程在上传后回填。

use bytes::Bytes;

use super::stream::MediaStream;

/// 视频封面探测失败时的默认宽度
pub const DEFAULT_THUMB_WIDTH: u32 = 1920;
/// 视频封面探测失败时的默认高度
pub const DEFAULT_THUMB_HEIGHT: u32 = 1080;

/// 远端文件索引节点
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexNode {
    pub file_uuid: String,
    pub store_id: u32,
    pub upload_time: u32,
    pub ttl: u32,
    pub sub_type: u32,
}

/// 语音元素
#[derive(Debug, Clone, Default)]
pub struct VoiceElement {
    pub name: String,
    pub uuid: String,
    pub size: u32,
    pub url: String,
    pub md5: Vec<u8>,
    pub sha1: Vec<u8>,
    pub node: Option<IndexNode>,

    // --- sending ---
    /// 上传后回填的 MsgInfo（protobuf 编码）
    pub msg_info: Option<Bytes>,
    pub compat: Vec<u8>,
    /// 时长（秒），探测失败时为内容长度
    pub duration: u32,
    pub stream: Option<MediaStream>,
    pub summary: String,
}

/// 图片元素
#[derive(Debug, Clone, Default)]
pub struct ImageElement {
    pub image_id: String,
    /// 仅新协议图片
    pub file_uuid: String,
    pub size: u32,
    /// 宽高为接收侧属性，发送侧构造时为 None
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub url: String,
    pub sub_type: i32,

    /// 图片特效 ID，已废弃
    pub effect_id: i32,
    pub flash: bool,

    // send & receive
    pub summary: String,
    /// 仅旧协议图片
    pub md5: Vec<u8>,
    pub is_group: bool,

    pub sha1: Vec<u8>,
    pub msg_info: Option<Bytes>,
    pub stream: Option<MediaStream>,
    /// 群聊图片兼容负载
    pub compat_face: Option<Bytes>,
    /// 私聊图片兼容负载
    pub compat_image: Option<Bytes>,
}

/// 文件元素
#[derive(Debug, Clone, Default)]
pub struct FileElement {
    pub file_size: u64,
    pub file_name: String,
    pub file_md5: Vec<u8>,
    pub file_url: String,
    /// 群文件 ID
    pub file_id: String,
    /// 私聊文件 UUID
    pub file_uuid: String,
    pub file_hash: String,

    // send
    pub file_stream: Option<MediaStream>,
    pub file_sha1: Vec<u8>,
}

/// 短视频元素
#[derive(Debug, Clone, Default)]
pub struct ShortVideoElement {
    pub name: String,
    pub uuid: Vec<u8>,
    pub size: u32,
    pub url: String,
    pub duration: u32,

    // send
    /// 封面，每个短视频恰好一个
    pub thumb: VideoThumb,
    pub summary: String,
    pub md5: Vec<u8>,
    pub sha1: Vec<u8>,
    pub stream: Option<MediaStream>,
    pub msg_info: Option<Bytes>,
    pub compat: Option<Bytes>,
}

/// 视频封面
#[derive(Debug, Clone)]
pub struct VideoThumb {
    pub stream: Option<MediaStream>,
    pub size: u32,
    pub md5: Vec<u8>,
    pub sha1: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl Default for VideoThumb {
    fn default() -> Self {
        Self {
            stream: None,
            size: 0,
            md5: Vec::new(),
            sha1: Vec::new(),
            width: DEFAULT_THUMB_WIDTH,
            height: DEFAULT_THUMB_HEIGHT,
        }
    }
}

macro_rules! digest_accessors {
    ($ty:ty, $md5:ident, $sha1:ident) => {
        impl $ty {
            /// MD5 的十六进制表示
            pub fn md5_hex(&self) -> String {
                hex::encode(&self.$md5)
            }

            /// SHA1 的十六进制表示
            pub fn sha1_hex(&self) -> String {
                hex::encode(&self.$sha1)
            }
        }
    };
}

digest_accessors!(VoiceElement, md5, sha1);
digest_accessors!(ImageElement, md5, sha1);
digest_accessors!(FileElement, file_md5, file_sha1);
digest_accessors!(ShortVideoElement, md5, sha1);
digest_accessors!(VideoThumb, md5, sha1);

impl FileElement {
    /// 是否已分配远端标识（群文件 ID 或私聊 UUID）
    pub fn is_uploaded(&self) -> bool {
        !self.file_id.is_empty() || !self.file_uuid.is_empty()
    }
}
