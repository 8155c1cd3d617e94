//! Interaction wire envelopes.
//!
//! Inbound events and outbound responses cross the transport boundary as
//! JSON with integer-tagged types. Signature verification and transport
//! happen outside the core; by the time an `Interaction` reaches the state
//! machine it is authenticated and syntactically valid JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::component::Component;

/// Flag bit marking a response as visible only to the invoking user.
pub const EPHEMERAL: u64 = 1 << 6;

/// Kind of an inbound interaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum InteractionType {
    /// Liveness probe; answered with a pong, no further processing
    Ping = 1,
    /// Initial slash command
    Command = 2,
    /// Button press or menu selection
    Component = 3,
}

impl From<InteractionType> for u8 {
    fn from(kind: InteractionType) -> u8 {
        kind as u8
    }
}

impl TryFrom<u8> for InteractionType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(InteractionType::Ping),
            2 => Ok(InteractionType::Command),
            3 => Ok(InteractionType::Component),
            other => Err(format!("unknown interaction type {other}")),
        }
    }
}

/// An inbound interaction event.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: InteractionType,

    #[serde(default)]
    pub data: Option<InteractionData>,

    #[serde(default)]
    pub member: Option<Member>,
}

impl Interaction {
    /// String value of a named command option, if present.
    pub fn option_str(&self, name: &str) -> Option<&str> {
        self.data
            .as_ref()?
            .options
            .iter()
            .find(|o| o.name == name)?
            .value
            .as_ref()?
            .as_str()
    }

    /// Id of the invoking user, if the envelope carries one.
    pub fn user_id(&self) -> Option<&str> {
        Some(self.member.as_ref()?.user.as_ref()?.id.as_str())
    }
}

/// Event payload: command name + options, or component custom id + values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractionData {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub options: Vec<CommandOption>,

    #[serde(default)]
    pub custom_id: Option<String>,

    /// Chosen values of a selection menu
    #[serde(default)]
    pub values: Vec<String>,
}

/// A named option supplied with a command.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: u8,

    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
}

/// Kind of an outbound response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ResponseType {
    /// Answer to a ping
    Pong = 1,
    /// New message; first response to a command
    ChannelMessage = 4,
    /// In-place edit of the message that carried the component
    UpdateMessage = 7,
}

impl From<ResponseType> for u8 {
    fn from(kind: ResponseType) -> u8 {
        kind as u8
    }
}

impl TryFrom<u8> for ResponseType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ResponseType::Pong),
            4 => Ok(ResponseType::ChannelMessage),
            7 => Ok(ResponseType::UpdateMessage),
            other => Err(format!("unknown response type {other}")),
        }
    }
}

/// An outbound response envelope. Every handled event produces exactly one,
/// including every failure path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: ResponseType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            kind: ResponseType::Pong,
            data: None,
        }
    }

    pub fn message(data: ResponseData) -> Self {
        Self {
            kind: ResponseType::ChannelMessage,
            data: Some(data),
        }
    }

    pub fn update(data: ResponseData) -> Self {
        Self {
            kind: ResponseType::UpdateMessage,
            data: Some(data),
        }
    }
}

/// Response payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<u64>,
}

impl ResponseData {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn ephemeral(mut self) -> Self {
        self.flags = Some(self.flags.unwrap_or(0) | EPHEMERAL);
        self
    }
}

/// A rendered embed. Field placement only; markup semantics are the
/// transport's concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Embed {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,

    #[serde(default)]
    pub inline: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_interaction() {
        let interaction: Interaction = serde_json::from_str(
            r#"{
                "type": 2,
                "data": {
                    "name": "package",
                    "options": [{"name": "query", "type": 3, "value": "LSP"}]
                },
                "member": {"user": {"id": "1234"}}
            }"#,
        )
        .unwrap();

        assert_eq!(interaction.kind, InteractionType::Command);
        assert_eq!(interaction.option_str("query"), Some("LSP"));
        assert_eq!(interaction.user_id(), Some("1234"));
    }

    #[test]
    fn test_parse_component_interaction() {
        let interaction: Interaction = serde_json::from_str(
            r#"{"type": 3, "data": {"custom_id": "next_package_abc_0", "values": []}}"#,
        )
        .unwrap();
        assert_eq!(interaction.kind, InteractionType::Component);
        assert_eq!(
            interaction.data.unwrap().custom_id.as_deref(),
            Some("next_package_abc_0")
        );
    }

    #[test]
    fn test_unknown_interaction_type_rejected() {
        let result: Result<Interaction, _> = serde_json::from_str(r#"{"type": 9}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_pong_serializes_without_data() {
        let json = serde_json::to_value(InteractionResponse::pong()).unwrap();
        assert_eq!(json, serde_json::json!({"type": 1}));
    }

    #[test]
    fn test_message_response_shape() {
        let response =
            InteractionResponse::message(ResponseData::text("no results").ephemeral());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["type"], 4);
        assert_eq!(json["data"]["content"], "no results");
        assert_eq!(json["data"]["flags"], 64);
        assert!(json["data"].get("embeds").is_none());
    }

    #[test]
    fn test_ephemeral_flag_bit() {
        assert_eq!(EPHEMERAL, 64);
        let data = ResponseData::text("x").ephemeral().ephemeral();
        assert_eq!(data.flags, Some(64));
    }
}
