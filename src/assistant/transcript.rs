//! Chat transcript for the assistant panel
//!
//! A transcript is append-only. At most one reply is outstanding at a time:
//! `begin_turn` refuses new questions while `is_typing` is set.

use super::persona;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => persona::USER_LABEL,
            Role::Assistant => persona::ASSISTANT_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
    is_typing: bool,
    last_stamp: i64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: vec![Message {
                id: "welcome".to_string(),
                role: Role::Assistant,
                content: persona::WELCOME.to_string(),
                timestamp: Utc::now(),
            }],
            is_typing: false,
            last_stamp: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_typing(&self) -> bool {
        self.is_typing
    }

    /// Record the investigator's question.
    ///
    /// Returns the trimmed question to send, or `None` if it is blank or a
    /// reply is still pending.
    pub fn begin_turn(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() || self.is_typing {
            return None;
        }
        self.push(Role::User, text.to_string());
        self.is_typing = true;
        Some(text.to_string())
    }

    pub fn finish_turn(&mut self, reply: String) {
        self.push(Role::Assistant, reply);
        self.is_typing = false;
    }

    /// Close the pending turn with the persona's apology
    pub fn fail_turn(&mut self) {
        self.finish_turn(persona::TASK_FAILED.to_string());
    }

    /// Reply without a question, for shortcut prompts that can't be sent
    pub fn say(&mut self, content: &str) {
        self.push(Role::Assistant, content.to_string());
    }

    fn push(&mut self, role: Role, content: String) {
        let now = Utc::now();
        // ids are msg-<millis>; two messages in the same millisecond get consecutive stamps
        let stamp = now.timestamp_millis().max(self.last_stamp + 1);
        self.last_stamp = stamp;
        self.messages.push(Message {
            id: format!("msg-{}", stamp),
            role,
            content,
            timestamp: now,
        });
    }
}
