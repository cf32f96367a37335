//! MIME type classification for media file descriptors.
//!
//! Players branch on two kinds of content that cannot be handed to a plain
//! `<video>` element: PDF documents and HLS playlists. Both are detected from
//! the MIME type alone, by case-insensitive exact match against the tables
//! below. Parameters (`; charset=...`) are not stripped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// MIME types that identify a PDF document.
const PDF_MIME_TYPES: &[&str] = &["application/pdf", "application/x-pdf"];

/// MIME types that identify an HLS playlist.
const HLS_MIME_TYPES: &[&str] = &[
    "application/mpegurl",
    "application/x-mpegurl",
    "application/vnd.apple.mpegurl",
];

/// Coarse classification of a MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MimeClass {
    /// A PDF document.
    Pdf,
    /// An HLS playlist.
    Hls,
    /// Anything else; left to the player.
    Other,
}

impl fmt::Display for MimeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Hls => write!(f, "hls"),
            Self::Other => write!(f, "other"),
        }
    }
}

fn matches_any(mime_type: &str, table: &[&str]) -> bool {
    let lower = mime_type.to_lowercase();
    table.contains(&lower.as_str())
}

/// Check if a MIME type names a PDF document.
///
/// # Examples
///
/// ```
/// use mediafile_common::mime::is_pdf_mime;
///
/// assert!(is_pdf_mime("application/pdf"));
/// assert!(is_pdf_mime("APPLICATION/X-PDF"));
/// assert!(!is_pdf_mime("video/mp4"));
/// ```
pub fn is_pdf_mime(mime_type: &str) -> bool {
    matches_any(mime_type, PDF_MIME_TYPES)
}

/// Check if a MIME type names an HLS playlist.
///
/// # Examples
///
/// ```
/// use mediafile_common::mime::is_hls_mime;
///
/// assert!(is_hls_mime("application/vnd.apple.mpegurl"));
/// assert!(is_hls_mime("Application/X-MpegURL"));
/// assert!(!is_hls_mime("application/pdf"));
/// ```
pub fn is_hls_mime(mime_type: &str) -> bool {
    matches_any(mime_type, HLS_MIME_TYPES)
}

/// Classify a MIME type as PDF, HLS, or other.
#[must_use]
pub fn classify(mime_type: &str) -> MimeClass {
    if is_pdf_mime(mime_type) {
        MimeClass::Pdf
    } else if is_hls_mime(mime_type) {
        MimeClass::Hls
    } else {
        MimeClass::Other
    }
}

/// Get the list of PDF MIME types.
#[must_use]
pub fn pdf_mime_types() -> &'static [&'static str] {
    PDF_MIME_TYPES
}

/// Get the list of HLS MIME types.
#[must_use]
pub fn hls_mime_types() -> &'static [&'static str] {
    HLS_MIME_TYPES
}
