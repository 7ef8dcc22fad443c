//! Stylist chat (`/stylist/chat`)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const CHAT_PATH: &str = "/stylist/chat";

pub const GREETING: &str = "🕶️ Hello, I’m your VastraVaani AI Stylist — here to help you refine your look in timeless monochrome style.";
pub const FAILURE_REPLY: &str = "⚠️ Sorry, something went wrong. Try again soon.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Stylist,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub speaker: Speaker,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn stylist(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            speaker: Speaker::Stylist,
            text: text.into(),
        }
    }
}

/// One history entry. The backend replays history as alternating
/// user/assistant turns, so each message fills exactly one side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryTurn {
    pub user: String,
    pub assistant: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<HistoryTurn>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Map prior messages to the history wire format
pub fn history_from(messages: &[ChatMessage]) -> Vec<HistoryTurn> {
    messages
        .iter()
        .map(|m| match m.speaker {
            Speaker::User => HistoryTurn {
                user: m.text.clone(),
                assistant: String::new(),
            },
            Speaker::Stylist => HistoryTurn {
                user: String::new(),
                assistant: m.text.clone(),
            },
        })
        .collect()
}

impl ChatRequest {
    /// Build a request for `message` given everything said before it
    pub fn new(message: &str, previous: &[ChatMessage]) -> Self {
        Self {
            message: message.to_string(),
            history: history_from(previous),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_maps_each_side() {
        let msgs = vec![
            ChatMessage::stylist(GREETING),
            ChatMessage::user("What goes with olive chinos?"),
        ];
        let history = history_from(&msgs);

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].user, "");
        assert_eq!(history[0].assistant, GREETING);
        assert_eq!(history[1].user, "What goes with olive chinos?");
        assert_eq!(history[1].assistant, "");
    }

    #[test]
    fn test_request_excludes_current_message_from_history() {
        let previous = vec![ChatMessage::stylist(GREETING)];
        let req = ChatRequest::new("Hi", &previous);
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["message"], "Hi");
        assert_eq!(json["history"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::user("x");
        let b = ChatMessage::user("x");
        assert_ne!(a.id, b.id);
    }
}
