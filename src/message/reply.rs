//! 回复元素与被回复的消息

use super::element::MessageElement;

/// 消息发送者
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sender {
    pub uin: u32,
    pub uid: String,
    pub nickname: String,
    /// 群名片
    pub card_name: String,
    pub is_friend: bool,
}

/// 收到的群消息
#[derive(Debug, Clone, Default)]
pub struct GroupMessage {
    pub id: i32,
    pub internal_id: i32,
    pub group_uin: u32,
    pub group_name: String,
    pub sender: Sender,
    pub time: i32,
    pub elements: Vec<MessageElement>,
}

/// 收到的私聊消息
#[derive(Debug, Clone, Default)]
pub struct PrivateMessage {
    pub id: i32,
    pub internal_id: i32,
    pub self_id: u32,
    pub target: u32,
    pub sender: Sender,
    pub time: i32,
    pub elements: Vec<MessageElement>,
}

/// 回复元素
///
/// `elements` 是被回复消息在构造回复时的元素快照，之后原消息的变化不会影响它。
/// 快照中的媒体元素保留摘要与远端标识，但不携带媒体流：被引用的内容不会再次上传，
/// 与原消息共享流会让双方互相改变读取位置。
#[derive(Debug, Clone, Default)]
pub struct ReplyElement {
    pub reply_seq: u32,
    pub sender_uin: u32,
    pub sender_uid: String,
    /// 回复群消息时的群号，私聊回复为 None
    pub group_uin: Option<u32>,
    pub time: u32,
    pub elements: Vec<MessageElement>,
}

impl ReplyElement {
    pub fn is_group_reply(&self) -> bool {
        self.group_uin.is_some()
    }
}

pub fn new_group_reply(m: &GroupMessage) -> ReplyElement {
    ReplyElement {
        reply_seq: m.id as u32,
        sender_uin: m.sender.uin,
        sender_uid: m.sender.uid.clone(),
        group_uin: Some(m.group_uin),
        time: m.time as u32,
        elements: snapshot(&m.elements),
    }
}

pub fn new_private_reply(m: &PrivateMessage) -> ReplyElement {
    ReplyElement {
        reply_seq: m.id as u32,
        sender_uin: m.sender.uin,
        sender_uid: m.sender.uid.clone(),
        group_uin: None,
        time: m.time as u32,
        elements: snapshot(&m.elements),
    }
}

/// 复制元素序列，并去掉其中（含嵌套回复与转发）的媒体流
fn snapshot(elements: &[MessageElement]) -> Vec<MessageElement> {
    let mut copy = elements.to_vec();
    copy.iter_mut().for_each(detach_streams);
    copy
}

fn detach_streams(element: &mut MessageElement) {
    match element {
        MessageElement::Voice(voice) => voice.stream = None,
        MessageElement::Image(image) => image.stream = None,
        MessageElement::File(file) => file.file_stream = None,
        MessageElement::Video(video) => {
            video.stream = None;
            video.thumb.stream = None;
        }
        MessageElement::Reply(reply) => reply.elements.iter_mut().for_each(detach_streams),
        MessageElement::Forward(forward) => forward
            .nodes
            .iter_mut()
            .flat_map(|node| node.message.iter_mut())
            .for_each(detach_streams),
        MessageElement::Text(_)
        | MessageElement::At(_)
        | MessageElement::Face(_)
        | MessageElement::LightApp(_) => {}
    }
}
