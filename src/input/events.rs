//! Generic input event types delivered by the shell.

use serde::{Deserialize, Serialize};

/// Generic key representation.
///
/// Shells map their native key codes to these values; printable keys arrive
/// as [`Key::Char`], space included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Printable character
    Char(char),
    /// Return/Enter key
    Return,
    /// Escape key
    Escape,
    /// Tab key
    Tab,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt or AltGr modifier
    Alt,
    /// Caps Lock
    CapsLock,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Keys that never reach a text block: modifiers plus backspace/delete,
    /// which are swallowed rather than editing text.
    pub fn is_control(&self) -> bool {
        matches!(
            self,
            Key::Shift | Key::Ctrl | Key::Alt | Key::CapsLock | Key::Backspace | Key::Delete
        )
    }

    /// Parses a key name as used in config and script files.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "return" | "enter" => Key::Return,
            "escape" | "esc" => Key::Escape,
            "tab" => Key::Tab,
            "backspace" => Key::Backspace,
            "delete" => Key::Delete,
            "shift" => Key::Shift,
            "ctrl" | "control" => Key::Ctrl,
            "alt" | "altgr" => Key::Alt,
            "capslock" | "caps-lock" => Key::CapsLock,
            "space" => Key::Char(' '),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Unknown,
                }
            }
        }
    }
}

/// Key that closes the open text block without starting a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CommitKey {
    Return,
    Escape,
    Tab,
}

impl CommitKey {
    pub fn key(self) -> Key {
        match self {
            CommitKey::Return => Key::Return,
            CommitKey::Escape => Key::Escape,
            CommitKey::Tab => Key::Tab,
        }
    }
}

/// Pointer and key events in photo-relative pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Button pressed; `clicks` is 2 for the second press of a double-click
    PointerDown { x: i32, y: i32, clicks: u32 },
    /// Pointer moved with the button held
    PointerDrag { x: i32, y: i32 },
    /// Button released
    PointerUp { x: i32, y: i32 },
    /// Key pressed
    Key(Key),
}
