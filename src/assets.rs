use egui::ColorImage;
use image::imageops::FilterType;
use std::path::Path;

pub const BANNER_FILE: &str = "gym_banner.jpg";
pub const SIDE_FILE: &str = "gym_side.jpg";
pub const BANNER_SIZE: [u32; 2] = [1060, 120];
pub const SIDE_SIZE: [u32; 2] = [260, 260];

/// Decode the image at `path` and resize it to exactly `size` pixels.
pub fn load_resized(path: &Path, size: [u32; 2]) -> Result<ColorImage, image::ImageError> {
    let img = image::open(path)?
        .resize_exact(size[0], size[1], FilterType::Triangle)
        .to_rgba8();
    Ok(ColorImage::from_rgba_unmultiplied(
        [img.width() as usize, img.height() as usize],
        img.as_raw(),
    ))
}

/// An optional decorative image, or the text shown in its place.
pub enum Asset {
    Loaded(ColorImage),
    Placeholder(&'static str),
}

impl Asset {
    /// Load `file` from `dir`, substituting `placeholder` when it is missing
    /// or cannot be decoded.
    pub fn load_or(dir: &Path, file: &str, size: [u32; 2], placeholder: &'static str) -> Self {
        let path = dir.join(file);
        match load_resized(&path, size) {
            Ok(img) => Asset::Loaded(img),
            Err(e) => {
                log::warn!("Could not load {}: {e}", path.display());
                Asset::Placeholder(placeholder)
            }
        }
    }
}
