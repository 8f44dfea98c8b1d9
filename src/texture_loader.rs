use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;

use crate::constants::{ICON_HEIGHT, ICON_WIDTH, PLACEHOLDER_BG};

/// A GPU texture plus a flag telling the renderer whether it is the
/// "no image" fallback rather than a real picture.
pub struct LoadedTexture {
    pub texture: Texture2D,
    pub missing: bool,
}

// --- Load Image into CPU memory, applying EXIF rotation ---
pub fn load_image_oriented(image_path: &Path) -> Result<Image> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("failed to read image file {:?}", image_path))?;

    let extension = image_path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    // Attempt to read EXIF data (only works reliably for JPEG)
    let mut orientation = 1; // Default: no rotation
    if extension == "jpg" || extension == "jpeg" {
        match Reader::new().read_from_container(&mut Cursor::new(&file_bytes)) {
            Ok(exif) => {
                if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                    if let Value::Short(values) = &field.value {
                        if let Some(&value) = values.first() {
                            orientation = value;
                        }
                    }
                }
            }
            Err(e) => {
                // Non-critical: proceed without rotation
                warn!("could not read EXIF data for {:?}: {}", image_path, e);
            }
        }
    }

    // Provide extension hint for loading from memory
    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| anyhow!("failed to decode image {:?}: {}", image_path, e))?;

    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW.
    // Orientations involving flips are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
            debug!("applied 180 deg rotation to {:?}", image_path);
        }
        6 => {
            image.rotate_cw();
            debug!("applied 90 deg CW rotation to {:?}", image_path);
        }
        8 => {
            image.rotate_ccw();
            debug!("applied 90 deg CCW rotation to {:?}", image_path);
        }
        _ => {}
    }

    Ok(image)
}

/// Solid light-gray stand-in for a picture that could not be loaded.
/// Always exactly the requested dimensions.
pub fn placeholder_image(width: i32, height: i32) -> Image {
    Image::gen_image_color(width, height, PLACEHOLDER_BG)
}

/// Load a destination thumbnail scaled to the standard 160x100 size,
/// substituting the placeholder when the file is missing or unreadable.
pub fn load_thumbnail(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<LoadedTexture> {
    let (mut image, missing) = match load_image_oriented(image_path) {
        Ok(image) => (image, false),
        Err(e) => {
            warn!("{:#}; substituting placeholder", e);
            (placeholder_image(ICON_WIDTH, ICON_HEIGHT), true)
        }
    };
    image.resize(ICON_WIDTH, ICON_HEIGHT);

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {:?}: {}", image_path, e))?;
    Ok(LoadedTexture { texture, missing })
}

/// Load a full-size slide image, substituting a placeholder of the given
/// dimensions when the file is missing or unreadable.
pub fn load_slide_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
    fallback_width: i32,
    fallback_height: i32,
) -> Result<LoadedTexture> {
    let (image, missing) = match load_image_oriented(image_path) {
        Ok(image) => (image, false),
        Err(e) => {
            warn!("{:#}; substituting placeholder", e);
            (placeholder_image(fallback_width, fallback_height), true)
        }
    };

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to create texture for {:?}: {}", image_path, e))?;
    Ok(LoadedTexture { texture, missing })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn placeholder_has_requested_dimensions() {
        let image = placeholder_image(ICON_WIDTH, ICON_HEIGHT);
        assert_eq!(image.width(), ICON_WIDTH);
        assert_eq!(image.height(), ICON_HEIGHT);
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_image_oriented(Path::new("resources/does-not-exist.jpg"));
        assert!(result.is_err());
    }

    #[test]
    fn unreadable_image_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.jpg");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(b"this is not a jpeg").unwrap();
        drop(file);

        assert!(load_image_oriented(&path).is_err());
    }
}
