//! Key binding configuration
//!
//! Bindings are written as `"<key>": "Action"` pairs, e.g. `"<Ctrl-c>": "Quit"`.
//! A binding may list several keys in sequence (`"<g><g>"`), but the
//! translator only resolves single-key sequences.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de, Deserialize, Deserializer, Serialize};
use strum::Display;

use crate::domain::decision::ReviewAction;

/// Actions a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Action {
    Include,
    ExcludeNotBoard,
    ExcludeNotEthics,
    ExcludeOther,
    Discuss,
    Export,
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    Quit,
    Suspend,
}

impl Action {
    /// The decision action behind this key action, if any
    pub fn review_action(self) -> Option<ReviewAction> {
        match self {
            Action::Include => Some(ReviewAction::Include),
            Action::ExcludeNotBoard => Some(ReviewAction::ExcludeNotBoard),
            Action::ExcludeNotEthics => Some(ReviewAction::ExcludeNotEthics),
            Action::ExcludeOther => Some(ReviewAction::ExcludeOther),
            Action::Discuss => Some(ReviewAction::Discuss),
            Action::Export
            | Action::ScrollUp
            | Action::ScrollDown
            | Action::ScrollToTop
            | Action::Quit
            | Action::Suspend => None,
        }
    }
}

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<Vec<KeyEvent>, Action>);

impl KeyBindings {
    /// First single-key binding for `action`, rendered for display
    pub fn key_for(&self, action: Action) -> Option<String> {
        let mut keys: Vec<String> = self
            .iter()
            .filter(|(seq, a)| **a == action && seq.len() == 1)
            .map(|(seq, _)| key_event_to_string(&seq[0]))
            .collect();
        keys.sort_by_key(|k| (k.len(), k.clone()));
        keys.into_iter().next()
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;
        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|seq| (seq, action))
                    .map_err(de::Error::custom)
            })
            .collect::<Result<_, _>>()?;
        Ok(KeyBindings(keybindings))
    }
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let raw_lower = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&raw_lower);
    // keep the case of single characters written without modifiers, e.g. "<G>"
    let remaining = if modifiers.is_empty() && raw.chars().count() == 1 {
        raw
    } else {
        remaining
    };
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "f1" => KeyCode::F(1),
        "f2" => KeyCode::F(2),
        "f3" => KeyCode::F(3),
        "f4" => KeyCode::F(4),
        "f5" => KeyCode::F(5),
        "f6" => KeyCode::F(6),
        "f7" => KeyCode::F(7),
        "f8" => KeyCode::F(8),
        "f9" => KeyCode::F(9),
        "f10" => KeyCode::F(10),
        "f11" => KeyCode::F(11),
        "f12" => KeyCode::F(12),
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        "tab" => KeyCode::Tab,
        c if c.chars().count() == 1 => {
            let mut ch = c.chars().next().ok_or_else(|| format!("Unable to parse `{raw}`"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                ch = ch.to_ascii_uppercase();
            }
            KeyCode::Char(ch)
        }
        _ => return Err(format!("Unable to parse `{raw}`")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

pub fn key_event_to_string(key_event: &KeyEvent) -> String {
    let char;
    let key_code = match key_event.code {
        KeyCode::Backspace => "backspace",
        KeyCode::Enter => "enter",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Home => "home",
        KeyCode::End => "end",
        KeyCode::PageUp => "pageup",
        KeyCode::PageDown => "pagedown",
        KeyCode::Tab => "tab",
        KeyCode::BackTab => "backtab",
        KeyCode::Delete => "delete",
        KeyCode::Insert => "insert",
        KeyCode::F(c) => {
            char = format!("f({c})");
            &char
        }
        KeyCode::Char(' ') => "space",
        KeyCode::Char(c) => {
            char = c.to_string();
            &char
        }
        KeyCode::Esc => "esc",
        _ => "",
    };

    let mut modifiers = Vec::with_capacity(3);

    if key_event.modifiers.intersects(KeyModifiers::CONTROL) {
        modifiers.push("ctrl");
    }

    if key_event.modifiers.intersects(KeyModifiers::SHIFT) {
        modifiers.push("shift");
    }

    if key_event.modifiers.intersects(KeyModifiers::ALT) {
        modifiers.push("alt");
    }

    let mut key = modifiers.join("-");

    if !key.is_empty() {
        key.push('-');
    }
    key.push_str(key_code);

    key
}

pub fn parse_key_sequence(raw: &str) -> Result<Vec<KeyEvent>, String> {
    if raw.chars().filter(|c| *c == '>').count() != raw.chars().filter(|c| *c == '<').count() {
        return Err(format!("Unable to parse `{raw}`"));
    }
    let raw = if !raw.contains("><") {
        let raw = raw.strip_prefix('<').unwrap_or(raw);
        raw.strip_suffix('>').unwrap_or(raw)
    } else {
        raw
    };
    let sequences = raw
        .split("><")
        .map(|seq| {
            if let Some(s) = seq.strip_prefix('<') {
                s
            } else if let Some(s) = seq.strip_suffix('>') {
                s
            } else {
                seq
            }
        })
        .collect::<Vec<_>>();

    sequences.into_iter().map(parse_key_event).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_simple_keys() {
        assert_eq!(
            parse_key_event("a").unwrap(),
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty())
        );
        assert_eq!(
            parse_key_event("enter").unwrap(),
            KeyEvent::new(KeyCode::Enter, KeyModifiers::empty())
        );
        assert_eq!(
            parse_key_event("Down").unwrap(),
            KeyEvent::new(KeyCode::Down, KeyModifiers::empty())
        );
    }

    #[test]
    fn test_with_modifiers() {
        assert_eq!(
            parse_key_event("ctrl-c").unwrap(),
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
        );
        assert_eq!(
            parse_key_event("Ctrl-z").unwrap(),
            KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL)
        );
        assert_eq!(
            parse_key_event("ctrl-alt-a").unwrap(),
            KeyEvent::new(
                KeyCode::Char('a'),
                KeyModifiers::CONTROL | KeyModifiers::ALT
            )
        );
    }

    #[test]
    fn test_invalid_keys() {
        assert!(parse_key_event("invalid-key").is_err());
        assert!(parse_key_sequence("<i").is_err());
    }

    #[test]
    fn test_key_sequences() {
        assert_eq!(
            parse_key_sequence("<i>").unwrap(),
            vec![KeyEvent::new(KeyCode::Char('i'), KeyModifiers::empty())]
        );
        assert_eq!(
            parse_key_sequence("<g><g>").unwrap().len(),
            2
        );
    }

    #[test]
    fn test_key_event_to_string() {
        assert_eq!(
            key_event_to_string(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            "ctrl-c"
        );
        assert_eq!(
            key_event_to_string(&KeyEvent::new(KeyCode::Char('i'), KeyModifiers::empty())),
            "i"
        );
    }

    #[test]
    fn test_deserialize_and_lookup() {
        let bindings: KeyBindings =
            json5::from_str(r#"{ "<i>": "Include", "<Ctrl-c>": "Quit", "<q>": "Quit" }"#).unwrap();
        assert_eq!(
            bindings.get(&vec![KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE)]),
            Some(&Action::Include)
        );
        assert_eq!(bindings.key_for(Action::Quit), Some("q".to_string()));
        assert_eq!(bindings.key_for(Action::Export), None);
    }

    #[test]
    fn test_deserialize_rejects_bad_key() {
        let result: Result<KeyBindings, _> = json5::from_str(r#"{ "<nope>": "Include" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_review_action_mapping() {
        assert_eq!(Action::ExcludeOther.review_action(), Some(ReviewAction::ExcludeOther));
        assert_eq!(Action::Export.review_action(), None);
    }
}
