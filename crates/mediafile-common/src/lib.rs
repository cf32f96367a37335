//! Mediafile-Common: Shared types, MIME tables, and errors.
//!
//! This crate provides the vocabulary used by the `mediafile` descriptor:
//!
//! - **Core Types**: The [`StereoscopicLayout`] enumeration
//! - **MIME Classification**: PDF and HLS detection by MIME type
//! - **Error Handling**: [`ValidationError`], the common [`Error`], and a result alias
//!
//! # Examples
//!
//! ```
//! use mediafile_common::{Error, Result, StereoscopicLayout, ValidationError};
//! use mediafile_common::mime::is_hls_mime;
//!
//! // Unknown layouts collapse to NONE
//! assert_eq!(StereoscopicLayout::normalize(Some("??")), StereoscopicLayout::None);
//!
//! // Classify by MIME type
//! assert!(is_hls_mime("application/x-mpegURL"));
//!
//! // Use common error types
//! fn example() -> Result<()> {
//!     Err(Error::from(ValidationError::UrlRequired))
//! }
//! ```

pub mod error;
pub mod mime;
pub mod types;

pub use error::{Error, Result, ValidationError};
pub use mime::MimeClass;
pub use types::*;
