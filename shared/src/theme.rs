//! Theme tokens and the style variables they drive

use serde::{Deserialize, Serialize};

pub const BODY_TEXT_VAR: &str = "--bodyText";
pub const LINK_VAR: &str = "--link";
pub const LINK_HOVERED_VAR: &str = "--linkHovered";

/// Theme record supplied by the host on change
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default)]
    pub semantic_colors: Option<SemanticColors>,
}

/// Named color tokens the widget consumes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticColors {
    #[serde(default)]
    pub body_text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub link_hovered: Option<String>,
}

/// A style variable assignment; `value: None` unsets the variable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleUpdate {
    pub property: &'static str,
    pub value: Option<String>,
}

/// Style variable updates for a theme change.
///
/// Returns `None` when there is nothing to apply. Otherwise all three
/// variables are returned, with missing tokens as explicit unsets.
pub fn style_updates(theme: Option<&Theme>) -> Option<[StyleUpdate; 3]> {
    let colors = theme?.semantic_colors.as_ref()?;

    let token = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
    Some([
        StyleUpdate {
            property: BODY_TEXT_VAR,
            value: token(&colors.body_text),
        },
        StyleUpdate {
            property: LINK_VAR,
            value: token(&colors.link),
        },
        StyleUpdate {
            property: LINK_HOVERED_VAR,
            value: token(&colors.link_hovered),
        },
    ])
}
