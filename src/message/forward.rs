//! 合并转发

use chrono::Utc;

use super::element::MessageElement;

/// 合并转发中的一条消息
#[derive(Debug, Clone, Default)]
pub struct ForwardNode {
    pub group_id: u32,
    pub sender_id: u32,
    pub sender_name: String,
    pub time: u32,
    pub message: Vec<MessageElement>,
}

impl ForwardNode {
    /// 以当前时间创建转发节点
    pub fn new(sender_id: u32, sender_name: impl Into<String>, message: Vec<MessageElement>) -> Self {
        Self {
            group_id: 0,
            sender_id,
            sender_name: sender_name.into(),
            time: Utc::now().timestamp().max(0) as u32,
            message,
        }
    }

    /// 指定来源群号
    pub fn with_group(mut self, group_id: u32) -> Self {
        self.group_id = group_id;
        self
    }
}

/// 合并转发元素
///
/// `res_id` 指向服务器保存的转发内容，`nodes` 用于构造新的转发内容；
/// 两者都为空是合法值，由发送流程决定是否拒绝。
#[derive(Debug, Clone, Default)]
pub struct ForwardMessage {
    pub is_group: bool,
    pub self_id: u32,
    pub res_id: String,
    pub nodes: Vec<ForwardNode>,
}

impl ForwardMessage {
    pub fn is_empty(&self) -> bool {
        self.res_id.is_empty() && self.nodes.is_empty()
    }
}

pub fn new_forward(res_id: impl Into<String>, nodes: Vec<ForwardNode>) -> ForwardMessage {
    ForwardMessage {
        res_id: res_id.into(),
        nodes,
        ..ForwardMessage::default()
    }
}

pub fn new_forward_with_res_id(res_id: impl Into<String>) -> ForwardMessage {
    ForwardMessage {
        res_id: res_id.into(),
        ..ForwardMessage::default()
    }
}

pub fn new_forward_with_nodes(nodes: Vec<ForwardNode>) -> ForwardMessage {
    ForwardMessage {
        nodes,
        ..ForwardMessage::default()
    }
}
