use std::path::PathBuf;

use serde::Deserialize;

/// One carousel entry. Slides have no identity beyond their position.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub photo: PathBuf,
}

impl Slide {
    pub fn new(title: impl Into<String>, description: impl Into<String>, photo: impl Into<PathBuf>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            photo: photo.into(),
        }
    }
}
