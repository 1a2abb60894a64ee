//! 消息元素类型
//!
//! 元素集合是封闭的：十种变体由协议固定，下游（序列化、发送流程）对
//! [`MessageElement`] 做穷尽匹配即可覆盖全部元素。

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::elements::{AtElement, FaceElement, LightAppElement, TextElement};
use super::forward::ForwardMessage;
use super::media::{FileElement, ImageElement, ShortVideoElement, VoiceElement};
use super::reply::ReplyElement;

/// 元素类型标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    Text,
    At,
    Face,
    Reply,
    Voice,
    Image,
    File,
    Video,
    LightApp,
    Forward,
}

impl ElementType {
    /// 全部元素类型
    pub const ALL: [ElementType; 10] = [
        ElementType::Text,
        ElementType::At,
        ElementType::Face,
        ElementType::Reply,
        ElementType::Voice,
        ElementType::Image,
        ElementType::File,
        ElementType::Video,
        ElementType::LightApp,
        ElementType::Forward,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Text => "text",
            ElementType::At => "at",
            ElementType::Face => "face",
            ElementType::Reply => "reply",
            ElementType::Voice => "voice",
            ElementType::Image => "image",
            ElementType::File => "file",
            ElementType::Video => "video",
            ElementType::LightApp => "light_app",
            ElementType::Forward => "forward",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 无法识别的元素类型名
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element type: {0}")]
pub struct ParseElementTypeError(pub String);

impl FromStr for ElementType {
    type Err = ParseElementTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .into_iter()
            .find(|t| t.as_str() == value)
            .ok_or_else(|| ParseElementTypeError(value.to_string()))
    }
}

/// 具有固定类型标识的元素
pub trait TypedElement {
    const ELEMENT_TYPE: ElementType;

    fn element_type(&self) -> ElementType {
        Self::ELEMENT_TYPE
    }
}

/// 消息元素
#[derive(Debug, Clone)]
pub enum MessageElement {
    Text(TextElement),
    At(AtElement),
    Face(FaceElement),
    Reply(ReplyElement),
    Voice(VoiceElement),
    Image(ImageElement),
    File(FileElement),
    Video(ShortVideoElement),
    LightApp(LightAppElement),
    Forward(ForwardMessage),
}

impl MessageElement {
    /// 元素类型标识，由变体唯一决定
    pub fn element_type(&self) -> ElementType {
        match self {
            MessageElement::Text(e) => e.element_type(),
            MessageElement::At(e) => e.element_type(),
            MessageElement::Face(e) => e.element_type(),
            MessageElement::Reply(e) => e.element_type(),
            MessageElement::Voice(e) => e.element_type(),
            MessageElement::Image(e) => e.element_type(),
            MessageElement::File(e) => e.element_type(),
            MessageElement::Video(e) => e.element_type(),
            MessageElement::LightApp(e) => e.element_type(),
            MessageElement::Forward(e) => e.element_type(),
        }
    }
}

macro_rules! typed_element {
    ($($ty:ident => $variant:ident),* $(,)?) => {
        $(
            impl TypedElement for $ty {
                const ELEMENT_TYPE: ElementType = ElementType::$variant;
            }

            impl From<$ty> for MessageElement {
                fn from(element: $ty) -> Self {
                    MessageElement::$variant(element)
                }
            }
        )*
    };
}

typed_element! {
    TextElement => Text,
    AtElement => At,
    FaceElement => Face,
    ReplyElement => Reply,
    VoiceElement => Voice,
    ImageElement => Image,
    FileElement => File,
    ShortVideoElement => Video,
    LightAppElement => LightApp,
    ForwardMessage => Forward,
}
