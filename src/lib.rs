//! Annotation core for a photo viewer.
//!
//! Each open photo can be flipped over to reveal a blank canvas where the user
//! draws freehand strokes and types text blocks. The crate holds the annotation
//! state ([`annotation`]), wraps text against the photo's border ([`layout`]),
//! paints either side with Cairo/Pango ([`draw`]) and drives the flip state
//! machine from generic input events ([`composer`]). The [`album`] and
//! [`script`] modules form the headless shell used by the `photomark` binary.

pub mod album;
pub mod annotation;
pub mod composer;
pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod layout;
pub mod script;
pub mod util;

pub use config::Config;
