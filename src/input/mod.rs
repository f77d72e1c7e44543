//! Input types handed to the frame composer.
//!
//! Shells translate their native pointer and keyboard events into
//! [`InputEvent`]s. Shells that cannot report click counts use
//! [`ClickCounter`] with the configured double-click threshold.

pub mod click;
pub mod events;

pub use click::ClickCounter;
pub use events::{CommitKey, InputEvent, Key};
