//! Mediafile - validated media file descriptors for media players
//!
//! This library crate exposes the descriptor, its lenient input coercion,
//! and configuration loading for the `mediafile` binary and integration tests.

pub mod config;
pub mod loose;
pub mod media_file;

pub use media_file::{MediaFile, MediaFileInput, UNKNOWN_DURATION};
pub use mediafile_common::mime::{self, MimeClass};
pub use mediafile_common::{Error, Result, StereoscopicLayout, ValidationError};
