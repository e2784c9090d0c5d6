//! Style configuration
//!
//! Styles are written as `"name": "<fg> [on <bg>] [modifiers]"`, for example
//! `"highlight": "black on yellow"` or `"title": "bold white"`.

use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de, Deserialize, Deserializer};

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<String, Style>);

impl Styles {
    /// Configured style for `name`, or the default style
    pub fn style(&self, name: &str) -> Style {
        self.get(name).copied().unwrap_or_default()
    }

    /// Configured style for `name`, or `fallback`
    pub fn style_or(&self, name: &str, fallback: Style) -> Style {
        self.get(name).copied().unwrap_or(fallback)
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, String>::deserialize(deserializer)?;
        let styles = parsed_map
            .into_iter()
            .map(|(name, spec)| parse_style(&spec).map(|s| (name, s)).map_err(de::Error::custom))
            .collect::<Result<_, _>>()?;
        Ok(Styles(styles))
    }
}

pub fn parse_style(spec: &str) -> Result<Style, String> {
    let lower = spec.to_ascii_lowercase();
    let (fg_part, bg_part) = match lower.split_once(" on ") {
        Some((fg, bg)) => (fg.to_string(), Some(bg.to_string())),
        None if lower.starts_with("on ") => (String::new(), Some(lower[3..].to_string())),
        None => (lower.clone(), None),
    };

    let mut style = Style::default();
    for word in fg_part.split_whitespace() {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else {
            style = style.fg(parse_color(word)?);
        }
    }
    if let Some(bg) = bg_part {
        for word in bg.split_whitespace() {
            if let Some(modifier) = parse_modifier(word) {
                style = style.add_modifier(modifier);
            } else {
                style = style.bg(parse_color(word)?);
            }
        }
    }
    Ok(style)
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "reverse" | "reversed" => Some(Modifier::REVERSED),
        "blink" => Some(Modifier::SLOW_BLINK),
        _ => None,
    }
}

fn parse_color(word: &str) -> Result<Color, String> {
    word.parse::<Color>()
        .map_err(|_| format!("Unknown color `{word}`"))
}
