//! The media file descriptor handed to media players.
//!
//! A [`MediaFile`] tells a player how to display the file at a given URL.
//! It is built from a [`MediaFileInput`], either constructed in code or
//! deserialized from a loosely-typed JSON record. Only `mimeType` and `url`
//! are required; every other field is coerced or defaulted, never rejected.

use mediafile_common::mime::{self, MimeClass};
use mediafile_common::{StereoscopicLayout, ValidationError};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::loose;

/// Duration reported when the playback length is unknown.
pub const UNKNOWN_DURATION: f64 = -1.0;

/// Raw, optional fields used to build a [`MediaFile`].
///
/// Deserializing is lenient: wrong-typed values are coerced where possible
/// and dropped otherwise, so deserializing a JSON object never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaFileInput {
    /// MIME type of the file. Required.
    #[serde(default, deserialize_with = "loose::de_string")]
    pub mime_type: Option<String>,

    /// URL of the file to display. Required.
    #[serde(default, deserialize_with = "loose::de_string")]
    pub url: Option<String>,

    /// Total playback length, in seconds.
    #[serde(default, deserialize_with = "loose::de_number")]
    pub duration: Option<f64>,

    /// URL of an image to show before playback starts.
    #[serde(default, deserialize_with = "loose::de_string")]
    pub poster: Option<String>,

    /// Whether the content is formatted for a 360/panoramic viewer.
    #[serde(default, rename = "is360", deserialize_with = "loose::de_flag")]
    pub is_360: Option<bool>,

    /// Raw stereoscopic layout name, checked against [`StereoscopicLayout`].
    #[serde(default, deserialize_with = "loose::de_string")]
    pub stereoscopic_layout: Option<String>,

    /// Intended display height, in pixels.
    #[serde(default, deserialize_with = "loose::de_dimension")]
    pub height: Option<i64>,

    /// Intended display width, in pixels.
    #[serde(default, deserialize_with = "loose::de_dimension")]
    pub width: Option<i64>,

    /// Frames per second of video content.
    #[serde(default, deserialize_with = "loose::de_number")]
    pub fps: Option<f64>,

    /// Number of audio channels.
    #[serde(default, deserialize_with = "loose::de_count")]
    pub channels: Option<u32>,

    /// Title of the file.
    #[serde(default, deserialize_with = "loose::de_string")]
    pub title: Option<String>,

    /// URL of a waveform image for audio content.
    #[serde(default, deserialize_with = "loose::de_string")]
    pub waveform: Option<String>,
}

impl MediaFileInput {
    /// Start an input with the two required fields.
    pub fn new(mime_type: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            mime_type: Some(mime_type.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = Some(seconds);
        self
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    pub fn with_360(mut self, is_360: bool) -> Self {
        self.is_360 = Some(is_360);
        self
    }

    /// Set the stereoscopic layout by value or by raw name.
    pub fn with_stereoscopic_layout(mut self, layout: impl Into<String>) -> Self {
        self.stereoscopic_layout = Some(layout.into());
        self
    }

    pub fn with_dimensions(mut self, width: i64, height: i64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = Some(fps);
        self
    }

    pub fn with_channels(mut self, channels: u32) -> Self {
        self.channels = Some(channels);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_waveform(mut self, waveform: impl Into<String>) -> Self {
        self.waveform = Some(waveform.into());
        self
    }
}

/// A validated description of one playable asset.
///
/// `mime_type` and `url` are non-empty and `stereoscopic_layout` is always a
/// recognized layout. [`is_pdf`](Self::is_pdf) and [`is_hls`](Self::is_hls)
/// are computed from the current `mime_type` on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    /// MIME type of the file, e.g. `video/mp4` or `audio/m4a`.
    pub mime_type: String,

    /// URL of the file.
    pub url: String,

    /// Whether the file should be shown in a 360/panoramic viewer.
    pub is_360: bool,

    /// Stereoscopic packing of 360 content. Ignored when `is_360` is false.
    pub stereoscopic_layout: StereoscopicLayout,

    /// URL of a poster image.
    pub poster: Option<String>,

    /// Intended display height in pixels; players never scale past it.
    pub height: i64,

    /// Intended display width in pixels; players never scale past it.
    pub width: i64,

    pub fps: f64,

    /// Total playback length in seconds, or [`UNKNOWN_DURATION`].
    pub duration: f64,

    pub channels: u32,

    pub title: String,

    /// URL of the waveform image for this file.
    pub waveform: String,
}

fn required(value: Option<String>, err: ValidationError) -> Result<String, ValidationError> {
    value.filter(|s| !s.is_empty()).ok_or(err)
}

fn nonzero(value: &f64) -> bool {
    *value != 0.0 && !value.is_nan()
}

impl MediaFile {
    /// Build a media file from an optional input record.
    ///
    /// Fails with [`ValidationError::MissingInput`] when there is no record.
    pub fn create(input: Option<MediaFileInput>) -> Result<Self, ValidationError> {
        input
            .ok_or(ValidationError::MissingInput)
            .and_then(Self::new)
    }

    /// Validate the required fields and apply defaults to the rest.
    ///
    /// `mimeType` is checked before `url`. A zero `duration` is treated the
    /// same as a missing one and becomes [`UNKNOWN_DURATION`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mediafile::{MediaFile, MediaFileInput, StereoscopicLayout};
    ///
    /// let file = MediaFile::new(MediaFileInput::new("video/mp4", "https://x/a.mp4")).unwrap();
    /// assert_eq!(file.width, 0);
    /// assert_eq!(file.duration, -1.0);
    /// assert_eq!(file.stereoscopic_layout, StereoscopicLayout::None);
    /// assert!(!file.is_hls());
    /// ```
    pub fn new(input: MediaFileInput) -> Result<Self, ValidationError> {
        let mime_type = required(input.mime_type, ValidationError::MimeTypeRequired)?;
        let url = required(input.url, ValidationError::UrlRequired)?;

        let stereoscopic_layout =
            StereoscopicLayout::normalize(input.stereoscopic_layout.as_deref());
        if let Some(raw) = input.stereoscopic_layout.as_deref() {
            if stereoscopic_layout.as_str() != raw {
                tracing::debug!(layout = raw, "unrecognized stereoscopic layout, using NONE");
            }
        }

        let file = Self {
            is_360: input.is_360.unwrap_or(false),
            stereoscopic_layout,
            poster: input.poster,
            height: input.height.unwrap_or(0),
            width: input.width.unwrap_or(0),
            fps: input.fps.filter(nonzero).unwrap_or(0.0),
            duration: input.duration.filter(nonzero).unwrap_or(UNKNOWN_DURATION),
            channels: input.channels.unwrap_or(0),
            title: input.title.unwrap_or_default(),
            waveform: input.waveform.unwrap_or_default(),
            mime_type,
            url,
        };

        tracing::trace!(mime_type = %file.mime_type, url = %file.url, "media file created");
        Ok(file)
    }

    /// Build a media file from a loosely-typed JSON record.
    ///
    /// `null` and any non-object value count as a missing record.
    pub fn from_json(value: &Value) -> mediafile_common::Result<Self> {
        if !value.is_object() {
            return Err(ValidationError::MissingInput.into());
        }
        let input = MediaFileInput::deserialize(value)?;
        Ok(Self::new(input)?)
    }

    /// Parse JSON text and build a media file from it.
    pub fn from_json_str(s: &str) -> mediafile_common::Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json(&value)
    }

    /// Whether this is a PDF document, judged by its MIME type.
    #[must_use]
    pub fn is_pdf(&self) -> bool {
        mime::is_pdf_mime(&self.mime_type)
    }

    /// Whether this is an HLS playlist, judged by its MIME type.
    #[must_use]
    pub fn is_hls(&self) -> bool {
        mime::is_hls_mime(&self.mime_type)
    }

    #[must_use]
    pub fn mime_class(&self) -> MimeClass {
        mime::classify(&self.mime_type)
    }

    /// Whether the playback length is known.
    #[must_use]
    pub fn has_known_duration(&self) -> bool {
        self.duration != UNKNOWN_DURATION
    }
}

impl TryFrom<MediaFileInput> for MediaFile {
    type Error = ValidationError;

    fn try_from(input: MediaFileInput) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}

// Derived flags are written alongside the stored fields.
impl Serialize for MediaFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.poster.is_some() { 15 } else { 14 };
        let mut state = serializer.serialize_struct("MediaFile", len)?;
        state.serialize_field("mimeType", &self.mime_type)?;
        state.serialize_field("url", &self.url)?;
        state.serialize_field("is360", &self.is_360)?;
        state.serialize_field("stereoscopicLayout", &self.stereoscopic_layout)?;
        if let Some(poster) = &self.poster {
            state.serialize_field("poster", poster)?;
        } else {
            state.skip_field("poster")?;
        }
        state.serialize_field("height", &self.height)?;
        state.serialize_field("width", &self.width)?;
        state.serialize_field("fps", &self.fps)?;
        state.serialize_field("duration", &self.duration)?;
        state.serialize_field("channels", &self.channels)?;
        state.serialize_field("title", &self.title)?;
        state.serialize_field("waveform", &self.waveform)?;
        state.serialize_field("isPDF", &self.is_pdf())?;
        state.serialize_field("isHLS", &self.is_hls())?;
        state.end()
    }
}
