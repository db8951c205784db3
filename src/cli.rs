use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::*;

/// Slide carousel and image gallery viewer.
#[derive(Parser, Debug, Clone)]
#[command(name = "carousel", version, about)]
pub struct Args {
    /// Directory holding the images to cycle through
    pub image_dir: PathBuf,

    /// Time each carousel slide stays up, in milliseconds
    #[arg(long, default_value_t = SLIDE_INTERVAL_MS)]
    pub slide_interval_ms: u64,

    /// Time each gallery image stays up, in milliseconds
    #[arg(long, default_value_t = GALLERY_INTERVAL_MS)]
    pub gallery_interval_ms: u64,

    /// Gallery height refresh period in milliseconds (0 = every frame)
    #[arg(long, default_value_t = HEIGHT_REFRESH_MS)]
    pub height_refresh_ms: u64,

    /// Shuffle the images instead of sorting them by name
    #[arg(long)]
    pub shuffle: bool,

    /// Run without a window for this many simulated seconds
    #[arg(long, value_name = "SECONDS")]
    pub headless: Option<f32>,

    /// Frames per second
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,
}

impl Args {
    pub fn slide_interval(&self) -> Duration {
        Duration::from_millis(self.slide_interval_ms)
    }

    pub fn gallery_interval(&self) -> Duration {
        Duration::from_millis(self.gallery_interval_ms)
    }

    pub fn height_refresh(&self) -> Duration {
        Duration::from_millis(self.height_refresh_ms)
    }

    pub fn frame_time(&self) -> f32 {
        1.0 / self.fps as f32
    }

    /// Width of the gallery column in the initial window layout.
    pub fn gallery_column_width(&self) -> f32 {
        column_width(WINDOW_WIDTH as f32)
    }
}

/// Each panel takes half the window minus its margins.
pub fn column_width(window_width: f32) -> f32 {
    (window_width * 0.5 - PANEL_MARGIN * 1.5).max(1.0)
}
