use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use carousel::SliderConfig;
use carousel::config::read_exif_orientation;
use log::{debug, warn};
use raylib::prelude::*;

// --- Load Image, Apply EXIF Rotation, Create Texture ---
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read {}", image_path.display()))?;

    // EXIF is only read reliably from JPEG containers
    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_exif_orientation(&file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| anyhow!("failed to decode {}: {}", image_path.display(), e))?;

    // 1 = upright, 3 = 180, 6 = 90 CW, 8 = 90 CCW; flips are ignored
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }
    debug!("loaded {} (orientation {})", image_path.display(), orientation);

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {}: {}", image_path.display(), e))
}

/// One texture per slide; a photo that fails to load is logged and left as
/// `None` so the slide still shows its title over a placeholder.
pub fn load_slide_textures(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    config: &SliderConfig,
) -> Vec<Option<Texture2D>> {
    config
        .slides()
        .iter()
        .map(|slide| match load_texture_with_exif_rotation(rl, thread, &slide.photo) {
            Ok(texture) => Some(texture),
            Err(e) => {
                warn!("slide '{}': {:#}", slide.title, e);
                None
            }
        })
        .collect()
}
