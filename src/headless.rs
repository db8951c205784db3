use std::path::PathBuf;

use anyhow::Result;
use carousel::{Carousel, Gallery, MemorySurface};
use tracing::{info, warn};

use crate::cli::Args;
use crate::texture_loader::load_image_with_exif_rotation;

/// Runs both controllers without a window for `seconds` of simulated time,
/// logging every slide and gallery change.
pub fn run(args: &Args, paths: &[PathBuf], seconds: f32) -> Result<()> {
    let column_width = args.gallery_column_width();
    let mut heights = Vec::new();
    for path in paths {
        match load_image_with_exif_rotation(path) {
            Ok(image) if image.width() > 0 => {
                heights.push(image.height() as f32 * column_width / image.width() as f32);
            }
            Ok(_) => warn!(path = %path.display(), "skipping zero-width image"),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping image"),
        }
    }

    let mut carousel = Carousel::new(MemorySurface::with_slides(heights.len()), args.slide_interval())?;
    let mut gallery = Gallery::new(
        MemorySurface::with_images(heights),
        args.gallery_interval(),
        args.height_refresh(),
    )?;

    let dt = args.frame_time();
    let frames = (seconds * args.fps as f32).round() as u64;
    info!(slides = carousel.len(), frames, "headless run started");

    let mut last_slide = carousel.current_index();
    let mut last_image = gallery.active_index();
    for frame in 0..frames {
        carousel.tick(dt);
        gallery.tick(dt);

        let at = frame as f32 * dt;
        if carousel.current_index() != last_slide {
            last_slide = carousel.current_index();
            info!(at, slide = last_slide, "carousel advanced");
        }
        if gallery.active_index() != last_image {
            last_image = gallery.active_index();
            info!(
                at,
                image = last_image,
                height = gallery.surface().container_height,
                "gallery advanced"
            );
        }
    }

    info!(
        slide = carousel.current_index(),
        image = gallery.active_index(),
        "headless run finished"
    );
    Ok(())
}
