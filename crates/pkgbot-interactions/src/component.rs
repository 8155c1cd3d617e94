//! Message component models.
//!
//! Buttons and selection menus are the only interactive surface the state
//! machine renders. Component kinds are encoded as integer `type` fields on
//! the wire: 1 = action row, 2 = button, 3 = selection menu.

use serde::{Deserialize, Serialize};

const KIND_ACTION_ROW: u8 = 1;
const KIND_BUTTON: u8 = 2;
const KIND_SELECT_MENU: u8 = 3;

/// A message component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Component {
    ActionRow(ActionRow),
    Button(Button),
    SelectMenu(SelectMenu),
}

/// A row of up to five child components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRow {
    #[serde(rename = "type")]
    pub kind: u8,

    pub components: Vec<Component>,
}

impl ActionRow {
    pub fn new(components: Vec<Component>) -> Component {
        Component::ActionRow(ActionRow {
            kind: KIND_ACTION_ROW,
            components,
        })
    }
}

/// Visual style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ButtonStyle {
    Primary = 1,
    Secondary = 2,
}

impl From<ButtonStyle> for u8 {
    fn from(style: ButtonStyle) -> u8 {
        style as u8
    }
}

impl TryFrom<u8> for ButtonStyle {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ButtonStyle::Primary),
            2 => Ok(ButtonStyle::Secondary),
            other => Err(format!("unknown button style {other}")),
        }
    }
}

/// A clickable button carrying an opaque custom id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    #[serde(rename = "type")]
    pub kind: u8,

    pub style: ButtonStyle,
    pub label: String,
    pub custom_id: String,

    #[serde(default)]
    pub disabled: bool,
}

impl Button {
    pub fn secondary(
        label: impl Into<String>,
        custom_id: impl Into<String>,
        disabled: bool,
    ) -> Component {
        Component::Button(Button {
            kind: KIND_BUTTON,
            style: ButtonStyle::Secondary,
            label: label.into(),
            custom_id: custom_id.into(),
            disabled,
        })
    }

    pub fn primary(
        label: impl Into<String>,
        custom_id: impl Into<String>,
        disabled: bool,
    ) -> Component {
        Component::Button(Button {
            kind: KIND_BUTTON,
            style: ButtonStyle::Primary,
            label: label.into(),
            custom_id: custom_id.into(),
            disabled,
        })
    }
}

/// A selection menu with up to 25 options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectMenu {
    #[serde(rename = "type")]
    pub kind: u8,

    pub custom_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    pub options: Vec<SelectOption>,
}

impl SelectMenu {
    pub fn new(
        custom_id: impl Into<String>,
        placeholder: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Component {
        Component::SelectMenu(SelectMenu {
            kind: KIND_SELECT_MENU,
            custom_id: custom_id.into(),
            placeholder: Some(placeholder.into()),
            options,
        })
    }
}

/// One selectable option; `value` is an opaque encoded handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
