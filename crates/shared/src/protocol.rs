use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Background, ColorValue},
    error::ParseIntentError,
};

/// Requests the rendering layer sends to the color-state controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Intent {
    Select(ColorValue),
    SelectHistory(usize),
    SelectPreset(usize),
    UpdateDraft(ColorValue),
    ApplyDraft,
    Reset,
    ClearHistory,
    Copy,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Select(_) => "select",
            Self::SelectHistory(_) => "select_history",
            Self::SelectPreset(_) => "select_preset",
            Self::UpdateDraft(_) => "update_draft",
            Self::ApplyDraft => "apply_draft",
            Self::Reset => "reset",
            Self::ClearHistory => "clear_history",
            Self::Copy => "copy",
        }
    }
}

/// Parses either a JSON intent (`{"type":"select","payload":"red"}`) or the
/// compact text form (`select red`, `draft #123456`, `history 0`, `apply`).
impl FromStr for Intent {
    type Err = ParseIntentError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ParseIntentError::Empty);
        }
        if input.starts_with('{') {
            return serde_json::from_str(input)
                .map_err(|err| ParseIntentError::Json(err.to_string()));
        }

        let (verb, rest) = match input.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (input, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "select" | "set" => Ok(Self::Select(rest.into())),
            "draft" => Ok(Self::UpdateDraft(rest.into())),
            "apply" => Ok(Self::ApplyDraft),
            "reset" => Ok(Self::Reset),
            "clear" => Ok(Self::ClearHistory),
            "copy" => Ok(Self::Copy),
            "history" => parse_index("history", rest).map(Self::SelectHistory),
            "preset" => parse_index("preset", rest).map(Self::SelectPreset),
            _ => Err(ParseIntentError::UnknownVerb(verb.to_string())),
        }
    }
}

fn parse_index(verb: &'static str, raw: &str) -> Result<usize, ParseIntentError> {
    if raw.is_empty() {
        return Err(ParseIntentError::MissingArgument { verb });
    }
    raw.parse().map_err(|_| ParseIntentError::InvalidIndex {
        verb,
        value: raw.to_string(),
    })
}

/// Read-only view of controller state handed to the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSnapshot {
    pub revision: u64,
    pub active_color: ColorValue,
    pub custom_draft: ColorValue,
    pub history: Vec<ColorValue>,
    pub animating: bool,
    pub copied: bool,
    pub is_default_background: bool,
    pub background_label: String,
}

impl ColorSnapshot {
    pub fn background(&self) -> Background {
        Background::for_active(&self.active_color)
    }
}
