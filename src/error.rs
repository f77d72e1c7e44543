//! Error types shared by the annotation core and the photo shell.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the annotation store when an operation arrives out of sequence.
///
/// These are programming errors: the frame composer's state machine is expected
/// to never trigger them, so callers usually log and drop them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnnotationError {
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
}

/// Errors raised while opening a photo.
#[derive(Debug, Error)]
pub enum PhotoError {
    #[error("The image could not be read: {path}: {reason}")]
    UnreadableResource { path: PathBuf, reason: String },
}
