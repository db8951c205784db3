use std::rc::Rc;

use carousel::{GallerySurface, SlideSurface};
use raylib::prelude::*;

use crate::constants::*;

/// A texture drawn scaled to fit inside a target area.
pub struct Slide {
    image: Rc<Texture2D>,
    pub visible: bool,
}

impl Slide {
    pub fn new(image: Rc<Texture2D>) -> Self {
        Self { image, visible: false }
    }

    /// Height of the image when drawn `width` pixels wide.
    pub fn height_at_width(&self, width: f32) -> f32 {
        let tex_width = self.image.width() as f32;
        if tex_width <= 0.0 {
            return 0.0;
        }
        self.image.height() as f32 * width / tex_width
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        if !self.visible {
            return;
        }
        let texture: &Texture2D = &self.image;
        let tex_width = texture.width() as f32;
        let tex_height = texture.height() as f32;

        let scale = (area.width / tex_width).min(area.height / tex_height);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        d.draw_texture_pro(
            texture,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            Rectangle::new(
                area.x + (area.width - scaled_width) * 0.5,
                area.y + (area.height - scaled_height) * 0.5,
                scaled_width,
                scaled_height,
            ),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}

/// Carousel slides with one indicator dot per slide.
pub struct SlideDeck {
    slides: Vec<Slide>,
    dots: Vec<bool>,
}

impl SlideDeck {
    pub fn new(images: &[Rc<Texture2D>]) -> Self {
        Self {
            slides: images.iter().cloned().map(Slide::new).collect(),
            dots: vec![false; images.len()],
        }
    }

    fn dot_centers(&self, area: Rectangle) -> impl Iterator<Item = Vector2> {
        let row_width = DOT_SPACING * self.dots.len().saturating_sub(1) as f32;
        let first_x = area.x + (area.width - row_width) * 0.5;
        let y = area.y + area.height - DOT_ROW_HEIGHT * 0.5;
        (0..self.dots.len()).map(move |i| Vector2::new(first_x + DOT_SPACING * i as f32, y))
    }

    /// 1-based position of the dot under `point`, if any.
    pub fn dot_at(&self, point: Vector2, area: Rectangle) -> Option<i64> {
        self.dot_centers(area)
            .position(|c| {
                let (dx, dy) = (point.x - c.x, point.y - c.y);
                dx * dx + dy * dy <= DOT_RADIUS * DOT_RADIUS * 4.0
            })
            .and_then(|i| i64::try_from(i + 1).ok())
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, area: Rectangle) {
        let slide_area = Rectangle::new(area.x, area.y, area.width, area.height - DOT_ROW_HEIGHT);
        for slide in &self.slides {
            slide.draw(d, slide_area);
        }
        for (center, active) in self.dot_centers(area).zip(&self.dots) {
            let color = if *active { Color::WHITE } else { Color::DARKGRAY };
            d.draw_circle(center.x as i32, center.y as i32, DOT_RADIUS, color);
        }
    }
}

impl SlideSurface for SlideDeck {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn dot_count(&self) -> usize {
        self.dots.len()
    }

    fn set_slide_visible(&mut self, index: usize, visible: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.visible = visible;
        }
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.dots.get_mut(index) {
            *dot = active;
        }
    }
}

/// Gallery column whose container height is set by the gallery controller.
pub struct GalleryStrip {
    images: Vec<Slide>,
    width: f32,
    container_height: f32,
}

impl GalleryStrip {
    pub fn new(images: &[Rc<Texture2D>], width: f32) -> Self {
        Self {
            images: images.iter().cloned().map(Slide::new).collect(),
            width,
            container_height: 0.0,
        }
    }

    /// Follows window resizes; heights reported to the controller change with it.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, x: f32, y: f32) {
        let container = Rectangle::new(x, y, self.width, self.container_height);
        for image in &self.images {
            image.draw(d, container);
        }
        d.draw_rectangle_lines(
            container.x as i32,
            container.y as i32,
            container.width as i32,
            container.height as i32,
            Color::GRAY,
        );
    }
}

impl GallerySurface for GalleryStrip {
    fn image_count(&self) -> usize {
        self.images.len()
    }

    fn set_image_active(&mut self, index: usize, active: bool) {
        if let Some(image) = self.images.get_mut(index) {
            image.visible = active;
        }
    }

    fn image_height(&self, index: usize) -> f32 {
        self.images
            .get(index)
            .map_or(0.0, |image| image.height_at_width(self.width))
    }

    fn set_container_height(&mut self, height: f32) {
        self.container_height = height;
    }
}
