//! 待发送消息

use super::element::{ElementType, MessageElement};

/// 待发送的消息，元素按追加顺序发送
#[derive(Debug, Clone, Default)]
pub struct SendingMessage {
    pub elements: Vec<MessageElement>,
}

impl SendingMessage {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加元素，支持链式调用
    pub fn append(&mut self, element: impl Into<MessageElement>) -> &mut Self {
        self.elements.push(element.into());
        self
    }

    /// 指定类型的元素个数
    pub fn count(&self, element_type: ElementType) -> usize {
        self.elements
            .iter()
            .filter(|e| e.element_type() == element_type)
            .count()
    }

    /// 第一个指定类型的元素
    pub fn first_of(&self, element_type: ElementType) -> Option<&MessageElement> {
        self.elements
            .iter()
            .find(|e| e.element_type() == element_type)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

impl From<Vec<MessageElement>> for SendingMessage {
    fn from(elements: Vec<MessageElement>) -> Self {
        Self { elements }
    }
}
