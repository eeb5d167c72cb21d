use serde::{Deserialize, Serialize};

/// Named style values supplied by the theme provider.
///
/// Deserializes from a camelCase mapping; keys that are absent keep the light palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeTokens {
    pub background: String,
    pub surface: String,
    pub text_primary: String,
    pub primary: String,
    pub primary_hover: String,
    pub primary_dark: String,
    pub border_radius: String,
    pub scrollbar_track: String,
    pub scrollbar_thumb: String,
    pub scrollbar_thumb_hover: String,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            background: "#f5f7fa".into(),
            surface: "#ffffff".into(),
            text_primary: "#2d3748".into(),
            primary: "#4a6cf7".into(),
            primary_hover: "#3a5ce5".into(),
            primary_dark: "#2f4ac0".into(),
            border_radius: "8px".into(),
            scrollbar_track: "#edf2f7".into(),
            scrollbar_thumb: "#cbd5e0".into(),
            scrollbar_thumb_hover: "#a0aec0".into(),
        }
    }
}

impl ThemeTokens {
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }
}
