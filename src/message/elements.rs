//! 非媒体元素：文本、@、表情、卡片

use std::borrow::Cow;
use std::fmt;

use crate::utils::rand_in_range;

/// @全体成员 的目标标识
pub const AT_ALL_TARGET: u32 = 0;
/// @全体成员 的显示文本
pub const AT_ALL_DISPLAY: &str = "@全体成员";

/// 骰子表情 ID
pub const DICE_FACE_ID: u16 = 358;
/// 猜拳表情 ID
pub const FINGER_GUESSING_FACE_ID: u16 = 359;

/// 文本元素
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextElement {
    pub content: String,
}

/// @ 子类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AtType {
    /// @群成员
    #[default]
    GroupMember,
    /// 协议中的其他取值
    Other(i32),
}

impl AtType {
    pub fn as_i32(&self) -> i32 {
        match self {
            AtType::GroupMember => 0,
            AtType::Other(value) => *value,
        }
    }
}

impl From<i32> for AtType {
    fn from(value: i32) -> Self {
        match value {
            0 => AtType::GroupMember,
            other => AtType::Other(other),
        }
    }
}

/// @ 元素
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtElement {
    /// 目标 QQ 号，0 表示全体成员
    pub target_uin: u32,
    /// 目标 uid，由接收或发送流程解析
    pub target_uid: String,
    pub display: String,
    pub sub_type: AtType,
}

impl AtElement {
    pub fn is_at_all(&self) -> bool {
        self.target_uin == AT_ALL_TARGET
    }
}

/// 表情元素
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceElement {
    pub face_id: u16,
    /// 猜拳和骰子的值
    pub result_id: u16,
    large_face: bool,
}

impl FaceElement {
    /// 是否为大表情（骰子、猜拳）
    pub fn is_large_face(&self) -> bool {
        self.large_face
    }

    /// 是否为骰子
    pub fn is_dice(&self) -> bool {
        self.face_id == DICE_FACE_ID
    }

    /// 是否为猜拳
    pub fn is_finger_guessing(&self) -> bool {
        self.face_id == FINGER_GUESSING_FACE_ID
    }
}

/// 猜拳结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FingerGuessing {
    /// 布
    Paper = 1,
    /// 剪刀
    Scissors = 2,
    /// 石头
    Rock = 3,
}

impl FingerGuessing {
    pub fn result_id(self) -> u16 {
        self as u16
    }

    pub fn label(self) -> &'static str {
        match self {
            FingerGuessing::Rock => "石头",
            FingerGuessing::Scissors => "剪刀",
            FingerGuessing::Paper => "布",
        }
    }

    /// 描述接收到的猜拳结果，无法识别的取值直接输出数字
    pub fn describe(result_id: u16) -> Cow<'static, str> {
        match FingerGuessing::try_from(result_id) {
            Ok(value) => Cow::Borrowed(value.label()),
            Err(raw) => Cow::Owned(raw.to_string()),
        }
    }
}

impl TryFrom<u16> for FingerGuessing {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(FingerGuessing::Paper),
            2 => Ok(FingerGuessing::Scissors),
            3 => Ok(FingerGuessing::Rock),
            other => Err(other),
        }
    }
}

impl fmt::Display for FingerGuessing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 卡片消息元素
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightAppElement {
    pub app_name: String,
    pub content: String,
}

pub fn new_text(content: impl Into<String>) -> TextElement {
    TextElement {
        content: content.into(),
    }
}

/// 创建 @ 元素
///
/// 显示文本优先使用 `display`；未指定时，目标为 0 使用 "@全体成员"，否则为 "@" + 目标号码。
///
/// # 示例
/// ```
/// use flare_im_message::new_at;
///
/// assert_eq!(new_at(10086, None).display, "@10086");
/// assert_eq!(new_at(0, None).display, "@全体成员");
/// assert_eq!(new_at(10086, Some("@客服")).display, "@客服");
/// ```
pub fn new_at(target: u32, display: Option<&str>) -> AtElement {
    let display = match display {
        Some(display) => display.to_string(),
        None if target == AT_ALL_TARGET => AT_ALL_DISPLAY.to_string(),
        None => format!("@{target}"),
    };
    AtElement {
        target_uin: target,
        display,
        ..AtElement::default()
    }
}

pub fn new_face(id: u16) -> FaceElement {
    FaceElement {
        face_id: id,
        ..FaceElement::default()
    }
}

/// 创建骰子表情
///
/// `value` 超过 6 时改为从系统随机源取 1~3 的值，不返回错误。
pub fn new_dice(value: u16) -> FaceElement {
    let result_id = if value > 6 {
        let fallback = rand_in_range(1, 3) as u16;
        tracing::debug!(value, fallback, "dice value out of range, using random result");
        fallback
    } else {
        value
    };
    FaceElement {
        face_id: DICE_FACE_ID,
        result_id,
        large_face: true,
    }
}

pub fn new_finger_guessing(value: FingerGuessing) -> FaceElement {
    FaceElement {
        face_id: FINGER_GUESSING_FACE_ID,
        result_id: value.result_id(),
        large_face: true,
    }
}

/// 创建卡片消息，应用名取自内容顶层的 "app" 字段
///
/// 内容不是 JSON 对象或缺少字符串类型的 "app" 字段时，应用名为空字符串。
pub fn new_light_app(content: impl Into<String>) -> LightAppElement {
    let content = content.into();
    let app_name = serde_json::from_str::<serde_json::Value>(&content)
        .ok()
        .and_then(|value| value.get("app")?.as_str().map(str::to_string))
        .unwrap_or_default();
    LightAppElement { app_name, content }
}
