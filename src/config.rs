use std::fs;
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::time::Duration;

use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::constants::{DEFAULT_DURATION, IMAGE_EXTENSIONS};
use crate::slide::Slide;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a slider needs at least one slide")]
    NoSlides,
    #[error("slide duration must be a positive number of seconds, got {0}")]
    InvalidDuration(f64),
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("failed to parse manifest {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
    #[error("no image files found in directory: {}", .0.display())]
    NoPhotos(PathBuf),
}

/// Immutable slider configuration: a non-empty slide list and the time each
/// slide stays up while autoplaying.
#[derive(Debug, Clone, PartialEq)]
pub struct SliderConfig {
    slides: Vec<Slide>,
    duration: f64,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default = "default_duration")]
    duration: f64,
    #[serde(default)]
    slides: Vec<Slide>,
}

fn default_duration() -> f64 {
    DEFAULT_DURATION
}

impl SliderConfig {
    pub fn new(slides: Vec<Slide>, duration: f64) -> Result<Self, ConfigError> {
        if slides.is_empty() {
            return Err(ConfigError::NoSlides);
        }
        // Also rejects values too large to express as a `Duration`
        if duration <= 0.0 || Duration::try_from_secs_f64(duration).is_err() {
            return Err(ConfigError::InvalidDuration(duration));
        }
        Ok(Self { slides, duration })
    }

    /// Reads a TOML manifest. Relative photo paths are resolved against the
    /// manifest's own directory.
    pub fn from_manifest(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let manifest: Manifest = toml::from_str(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let slides = manifest
            .slides
            .into_iter()
            .map(|mut slide| {
                if slide.photo.is_relative() {
                    slide.photo = base.join(&slide.photo);
                }
                slide
            })
            .collect();

        Self::new(slides, manifest.duration)
    }

    /// Builds one slide per image in `dir`, sorted by file name. The title is
    /// the file stem and the description comes from the EXIF
    /// `ImageDescription` tag when the photo carries one.
    pub fn from_directory(dir: &Path, duration: f64) -> Result<Self, ConfigError> {
        let slides = load_sorted_image_paths(dir)?
            .into_iter()
            .map(|path| {
                let title = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let description = read_exif_description(&path).unwrap_or_default();
                Slide { title, description, photo: path }
            })
            .collect();

        Self::new(slides, duration)
    }

    /// Directories are scanned for photos, anything else is read as a manifest.
    pub fn load(source: &Path, duration: Option<f64>) -> Result<Self, ConfigError> {
        let config = if source.is_dir() {
            Self::from_directory(source, duration.unwrap_or(DEFAULT_DURATION))?
        } else {
            Self::from_manifest(source)?
        };

        match duration {
            Some(duration) => config.with_duration(duration),
            None => Ok(config),
        }
    }

    pub fn with_duration(self, duration: f64) -> Result<Self, ConfigError> {
        Self::new(self.slides, duration)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slide(&self, index: usize) -> &Slide {
        &self.slides[index]
    }

    /// Seconds each slide is displayed while autoplaying.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn period(&self) -> Duration {
        Duration::from_secs_f64(self.duration)
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>, ConfigError> {
    let io_error = |source| ConfigError::Io { path: dir.to_path_buf(), source };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && is_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(ConfigError::NoPhotos(dir.to_path_buf()));
    }
    debug!("found {} photos in {}", paths.len(), dir.display());
    Ok(paths)
}

fn read_exif_description(path: &Path) -> Option<String> {
    let file = fs::File::open(path).ok()?;
    let exif = match Reader::new().read_from_container(&mut BufReader::new(file)) {
        Ok(exif) => exif,
        Err(exif::Error::NotFound(_)) => return None,
        Err(e) => {
            warn!("could not read EXIF data for {}: {}", path.display(), e);
            return None;
        }
    };

    let field = exif.get_field(Tag::ImageDescription, In::PRIMARY)?;
    match &field.value {
        Value::Ascii(values) => values
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
            .filter(|text| !text.is_empty()),
        _ => None,
    }
}

/// EXIF orientation (1, 3, 6 or 8 matter to us); 1 when absent or unreadable.
pub fn read_exif_orientation(file_bytes: &[u8]) -> u32 {
    Reader::new()
        .read_from_container(&mut Cursor::new(file_bytes))
        .ok()
        .and_then(|exif| exif.get_field(Tag::Orientation, In::PRIMARY).and_then(|f| f.value.get_uint(0)))
        .unwrap_or(1)
}
