//! Rolling message log shown in the message panel.
//!
//! Messages are kept most-recent-first and evicted purely by capacity.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Maximum number of messages retained.
pub const MESSAGE_CAPACITY: usize = 50;
/// Number of messages the message panel renders.
pub const RENDERED_MESSAGES: usize = 10;

/// Severity of a message. Only affects icon and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Info,
    Warning,
    Success,
    Error,
}

impl MessageKind {
    /// Glyph used in front of the message text.
    pub fn icon(self) -> &'static str {
        match self {
            MessageKind::Info => "ℹ",
            MessageKind::Warning => "⚠",
            MessageKind::Success => "✔",
            MessageKind::Error => "✖",
        }
    }
}

/// An immutable log record.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    kind: MessageKind,
    text: String,
    timestamp: DateTime<Local>,
}

impl Message {
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Wall-clock time as shown in the message panel (`HH:MM:SS`).
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// State of the message panel.
///
/// Responsibilities:
/// - Prepending new messages (most recent first)
/// - Enforcing the retention capacity
/// - Exposing the rendered window of recent messages
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: VecDeque<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self {
            messages: VecDeque::with_capacity(MESSAGE_CAPACITY + 1),
        }
    }

    /// Appends a message stamped with the current local time.
    pub fn append(&mut self, kind: MessageKind, text: impl Into<String>) {
        self.append_at(kind, text, Local::now());
    }

    /// Appends a message with an explicit timestamp.
    pub fn append_at(&mut self, kind: MessageKind, text: impl Into<String>, timestamp: DateTime<Local>) {
        let text = text.into();
        log::debug!("message [{:?}] {}", kind, text);
        self.messages.push_front(Message { kind, text, timestamp });
        self.messages.truncate(MESSAGE_CAPACITY);
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.append(MessageKind::Info, text);
    }

    pub fn warning(&mut self, text: impl Into<String>) {
        self.append(MessageKind::Warning, text);
    }

    pub fn success(&mut self, text: impl Into<String>) {
        self.append(MessageKind::Success, text);
    }

    /// Removes every message.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message, if any.
    pub fn latest(&self) -> Option<&Message> {
        self.messages.front()
    }

    /// All retained messages, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    /// The messages the panel renders, most recent first.
    pub fn rendered(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter().take(RENDERED_MESSAGES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_is_most_recent_first() {
        let mut log = MessageLog::new();
        log.info("first");
        log.warning("second");

        let texts: Vec<_> = log.iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["second", "first"]);
        assert_eq!(log.latest().map(|m| m.kind()), Some(MessageKind::Warning));
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let mut log = MessageLog::new();
        for i in 0..55 {
            log.info(format!("message {}", i));
        }

        assert_eq!(log.len(), MESSAGE_CAPACITY);
        assert!(log.iter().all(|m| m.text() != "message 0"));
        assert!(log.iter().all(|m| m.text() != "message 4"));
        assert!(log.iter().any(|m| m.text() == "message 5"));
    }

    #[test]
    fn test_rendered_window() {
        let mut log = MessageLog::new();
        for i in 0..55 {
            log.info(format!("message {}", i));
        }

        let rendered: Vec<_> = log.rendered().map(|m| m.text().to_string()).collect();
        let expected: Vec<_> = (45..55).rev().map(|i| format!("message {}", i)).collect();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_clear() {
        let mut log = MessageLog::new();
        log.success("saved");
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.rendered().count(), 0);
    }

    #[test]
    fn test_time_label_format() {
        use chrono::TimeZone;
        let mut log = MessageLog::new();
        let stamp = Local.with_ymd_and_hms(2024, 5, 1, 9, 5, 7).single();
        if let Some(stamp) = stamp {
            log.append_at(MessageKind::Info, "x", stamp);
            assert_eq!(log.latest().map(|m| m.time_label()), Some("09:05:07".to_string()));
        }
    }
}
