//! Display capabilities the controllers drive.
//!
//! Controllers only ever toggle markers and read image heights through these
//! traits, so the index and wrap logic runs the same against the raylib
//! viewer and against [`MemorySurface`]. Positions are 0-based.

pub trait SlideSurface {
    fn slide_count(&self) -> usize;
    fn dot_count(&self) -> usize;
    fn set_slide_visible(&mut self, index: usize, visible: bool);
    fn set_dot_active(&mut self, index: usize, active: bool);
}

pub trait GallerySurface {
    fn image_count(&self) -> usize;
    fn set_image_active(&mut self, index: usize, active: bool);
    /// Rendered height of the image in pixels.
    fn image_height(&self, index: usize) -> f32;
    fn set_container_height(&mut self, height: f32);
}

/// In-memory surface that records every marker.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    pub slides: Vec<bool>,
    pub dots: Vec<bool>,
    pub images: Vec<bool>,
    pub image_heights: Vec<f32>,
    pub container_height: f32,
}

impl MemorySurface {
    pub fn with_slides(count: usize) -> Self {
        Self {
            slides: vec![false; count],
            dots: vec![false; count],
            ..Default::default()
        }
    }

    pub fn with_images(heights: Vec<f32>) -> Self {
        Self {
            images: vec![false; heights.len()],
            image_heights: heights,
            ..Default::default()
        }
    }

    pub fn visible_slides(&self) -> Vec<usize> {
        marked(&self.slides)
    }

    pub fn active_dots(&self) -> Vec<usize> {
        marked(&self.dots)
    }

    pub fn active_images(&self) -> Vec<usize> {
        marked(&self.images)
    }
}

fn marked(flags: &[bool]) -> Vec<usize> {
    flags
        .iter()
        .enumerate()
        .filter_map(|(i, on)| on.then_some(i))
        .collect()
}

impl SlideSurface for MemorySurface {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn dot_count(&self) -> usize {
        self.dots.len()
    }

    fn set_slide_visible(&mut self, index: usize, visible: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            *slide = visible;
        }
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.dots.get_mut(index) {
            *dot = active;
        }
    }
}

impl GallerySurface for MemorySurface {
    fn image_count(&self) -> usize {
        self.images.len()
    }

    fn set_image_active(&mut self, index: usize, active: bool) {
        if let Some(image) = self.images.get_mut(index) {
            *image = active;
        }
    }

    fn image_height(&self, index: usize) -> f32 {
        self.image_heights.get(index).copied().unwrap_or(0.0)
    }

    fn set_container_height(&mut self, height: f32) {
        self.container_height = height;
    }
}
