//! 消息元素模块
//!
//! - `element`: 封闭的元素枚举与类型标识
//! - `elements`: 文本、@、表情、卡片
//! - `media`: 语音、图片、文件、短视频
//! - `factory`: 媒体元素构造（摘要与探测）
//! - `reply` / `forward`: 回复与合并转发
//! - `sending`: 待发送消息
//! - `stream`: 发送侧媒体流
//! - `thumb`: 内置默认缩略图

pub mod element;
pub mod elements;
pub mod factory;
pub mod forward;
pub mod media;
pub mod reply;
pub mod sending;
pub mod stream;
pub mod thumb;

pub use element::{ElementType, MessageElement, ParseElementTypeError, TypedElement};
pub use elements::*;
pub use factory::*;
pub use forward::{
    ForwardMessage, ForwardNode, new_forward, new_forward_with_nodes, new_forward_with_res_id,
};
pub use media::*;
pub use reply::{
    GroupMessage, PrivateMessage, ReplyElement, Sender, new_group_reply, new_private_reply,
};
pub use sending::SendingMessage;
pub use stream::{MediaStream, StreamOrigin};
pub use thumb::{default_thumb, warm_up_default_thumb};
