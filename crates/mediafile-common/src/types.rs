//! Core type definitions shared by media file descriptors.
//!
//! Enums here are serialized in SCREAMING_SNAKE_CASE so that the wire names
//! match the constants media players already use (`"NONE"`, `"TOP_BOTTOM"`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the left and right eye frames of 360 content are packed.
///
/// Ignored by players when the file is not flagged as 360.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StereoscopicLayout {
    /// Monoscopic content, or not applicable.
    #[default]
    None,
    /// Left eye on top, right eye on the bottom.
    TopBottom,
    /// Left eye on the left, right eye on the right.
    LeftRight,
}

impl StereoscopicLayout {
    /// Every recognized layout, `None` first.
    pub const ALL: [Self; 3] = [Self::None, Self::TopBottom, Self::LeftRight];

    /// Wire name of the layout.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::TopBottom => "TOP_BOTTOM",
            Self::LeftRight => "LEFT_RIGHT",
        }
    }

    /// Map a raw layout value onto the recognized set.
    ///
    /// Anything that is not exactly one of the wire names, including an
    /// absent value, becomes [`StereoscopicLayout::None`].
    ///
    /// # Examples
    ///
    /// ```
    /// use mediafile_common::StereoscopicLayout;
    ///
    /// assert_eq!(StereoscopicLayout::normalize(Some("TOP_BOTTOM")), StereoscopicLayout::TopBottom);
    /// assert_eq!(StereoscopicLayout::normalize(Some("top_bottom")), StereoscopicLayout::None);
    /// assert_eq!(StereoscopicLayout::normalize(None), StereoscopicLayout::None);
    /// ```
    #[must_use]
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for StereoscopicLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<StereoscopicLayout> for String {
    fn from(layout: StereoscopicLayout) -> Self {
        layout.as_str().to_string()
    }
}

impl std::str::FromStr for StereoscopicLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Self::None),
            "TOP_BOTTOM" => Ok(Self::TopBottom),
            "LEFT_RIGHT" => Ok(Self::LeftRight),
            _ => Err(format!("Invalid stereoscopic layout: {}", s)),
        }
    }
}
