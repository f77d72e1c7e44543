//! Scripted input for the headless shell.
//!
//! A script is a TOML file of `[[events]]` tables replayed in order against a
//! [`FrameComposer`]:
//!
//! ```toml
//! [[events]]
//! type = "double-click"
//! x = 5
//! y = 5
//!
//! [[events]]
//! type = "press"
//! x = 10
//! y = 10
//!
//! [[events]]
//! type = "type"
//! text = "hello"
//! ```

use crate::composer::{FrameComposer, Viewport};
use crate::config::ColorSpec;
use crate::draw::FontDescriptor;
use crate::error::AnnotationError;
use crate::input::{ClickCounter, InputEvent, Key};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;
use std::path::Path;
use std::time::{Duration, Instant};

/// Gap inserted before presses without an explicit timestamp; longer than any
/// accepted double-click threshold.
const ISOLATED_PRESS_GAP_MS: u64 = 10_000;

#[derive(Debug, Deserialize, PartialEq)]
pub struct Script {
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ScriptEvent {
    /// Pointer press. With `clicks` the count is taken as given; otherwise
    /// it is derived from `at_ms` by the configured click counter.
    Press {
        x: i32,
        y: i32,
        clicks: Option<u32>,
        at_ms: Option<u64>,
    },
    /// Both presses of a double-click at one position.
    DoubleClick { x: i32, y: i32 },
    Drag { x: i32, y: i32 },
    Release { x: i32, y: i32 },
    /// One key press per character; `\n` presses Return.
    Type { text: String },
    /// Named key such as "return", "shift" or "a".
    Key { key: String },
    /// Presses the composer's commit key.
    Commit,
    Color { color: ColorSpec },
    /// Replaces only the given parts of the current font.
    Font {
        family: Option<String>,
        size: Option<f64>,
        weight: Option<String>,
        style: Option<String>,
    },
    Thickness { width: f64 },
    Resize { width: i32 },
}

impl Script {
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        let script = Self::parse(&source)
            .with_context(|| format!("Failed to parse script {}", path.display()))?;
        info!("Loaded {} events from {}", script.events.len(), path.display());
        Ok(script)
    }

    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Feeds every event to `composer`.
    pub fn replay(
        &self,
        composer: &mut FrameComposer,
        counter: &mut ClickCounter,
    ) -> Result<(), AnnotationError> {
        let epoch = Instant::now();
        let mut clock_ms = 0;

        for event in &self.events {
            debug!("Replaying {:?}", event);
            match event {
                ScriptEvent::Press { x, y, clicks, at_ms } => {
                    let clicks = match clicks {
                        Some(clicks) => *clicks,
                        None => {
                            clock_ms = at_ms.unwrap_or(clock_ms + ISOLATED_PRESS_GAP_MS);
                            counter.register(epoch + Duration::from_millis(clock_ms), *x, *y)
                        }
                    };
                    composer.on_pointer_down(*x, *y, clicks)?;
                }
                ScriptEvent::DoubleClick { x, y } => {
                    composer.on_pointer_down(*x, *y, 1)?;
                    composer.on_pointer_down(*x, *y, 2)?;
                }
                ScriptEvent::Drag { x, y } => composer.handle(InputEvent::PointerDrag { x: *x, y: *y })?,
                ScriptEvent::Release { x, y } => composer.handle(InputEvent::PointerUp { x: *x, y: *y })?,
                ScriptEvent::Type { text } => {
                    for c in text.chars() {
                        let key = if c == '\n' { Key::Return } else { Key::Char(c) };
                        composer.on_key_press(key)?;
                    }
                }
                ScriptEvent::Key { key } => composer.on_key_press(Key::from_name(key))?,
                ScriptEvent::Commit => composer.on_key_press(composer.commit_key())?,
                ScriptEvent::Color { color } => composer.set_draw_color(color.to_color()),
                ScriptEvent::Font {
                    family,
                    size,
                    weight,
                    style,
                } => {
                    let current = &composer.store().attributes().font;
                    let font = FontDescriptor {
                        family: family.clone().unwrap_or_else(|| current.family.clone()),
                        size: size.unwrap_or(current.size),
                        weight: weight.clone().unwrap_or_else(|| current.weight.clone()),
                        style: style.clone().unwrap_or_else(|| current.style.clone()),
                    };
                    composer.set_draw_font(font);
                }
                ScriptEvent::Thickness { width } => composer.set_stroke_thickness(*width),
                ScriptEvent::Resize { width } => composer.set_viewport(Viewport {
                    width: *width,
                    ..composer.viewport()
                }),
            }
        }
        Ok(())
    }
}
