//! Chat-reply collaborator boundary
//!
//! The collaborator is a keyword-matched canned-response service; only its
//! request/response shape is known here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::config::{OperatingWindow, WifiCredentials};
use super::department::Department;

/// Payload sent to the collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatQuestion {
    pub question: String,
    pub hotel: ChatHotelContext,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatHotelContext {
    pub hotel_name: String,
    pub location_query: String,
    pub wifi: WifiCredentials,
    pub department_hours: BTreeMap<Department, OperatingWindow>,
}

/// Collaborator answer; every field but `ok` is optional
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub department: Option<String>,
    /// Ready-made staff message in the operator language
    #[serde(default, rename = "opsMessageBG")]
    pub ops_message_bg: Option<String>,
    #[serde(default)]
    pub ui_reply: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub reply: Option<String>,
}

impl ChatReply {
    /// Guest-facing text: `uiReply`, then `answer`, then `reply`
    pub fn guest_text(&self) -> Option<&str> {
        [&self.ui_reply, &self.answer, &self.reply]
            .into_iter()
            .flatten()
            .map(|s| s.trim())
            .find(|s| !s.is_empty())
    }

    /// Department the collaborator wants staff to handle this in
    pub fn routed_department(&self) -> Option<Department> {
        self.department.as_deref().and_then(|d| d.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_text_precedence() {
        let reply: ChatReply =
            serde_json::from_str(r#"{"ok":true,"answer":"A","reply":"R"}"#).unwrap();
        assert_eq!(reply.guest_text(), Some("A"));

        let reply: ChatReply =
            serde_json::from_str(r#"{"ok":true,"uiReply":" ","reply":"R"}"#).unwrap();
        assert_eq!(reply.guest_text(), Some("R"));
    }

    #[test]
    fn test_ops_message_field_name() {
        let reply: ChatReply = serde_json::from_str(
            r#"{"ok":true,"department":"housekeeping","opsMessageBG":"Хавлии"}"#,
        )
        .unwrap();
        assert_eq!(reply.ops_message_bg.as_deref(), Some("Хавлии"));
        assert_eq!(reply.routed_department(), Some(Department::Housekeeping));
    }
}
