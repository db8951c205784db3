use std::time::Duration;

use tracing::debug;

use crate::error::{CarouselError, Result};
use crate::surface::GallerySurface;
use crate::timer::IntervalTimer;

/// Auto-advancing image gallery.
///
/// Unlike [`crate::Carousel`], the image index is 0-based and wraps with
/// plain modulo. A second, fast timer keeps the container height equal to the
/// active image's rendered height.
#[derive(Debug)]
pub struct Gallery<G: GallerySurface> {
    surface: G,
    active: usize,
    advance_timer: IntervalTimer,
    height_timer: IntervalTimer,
}

impl<G: GallerySurface> Gallery<G> {
    /// Marks image 0 active and primes the container height before any timer
    /// can fire.
    pub fn new(surface: G, advance_interval: Duration, height_interval: Duration) -> Result<Self> {
        if surface.image_count() == 0 {
            return Err(CarouselError::NoImages);
        }

        let mut gallery = Self {
            surface,
            active: 0,
            advance_timer: IntervalTimer::new(advance_interval),
            height_timer: IntervalTimer::new(height_interval),
        };
        gallery.show(0);
        gallery.refresh_height();
        Ok(gallery)
    }

    /// Moves the active marker to the next image, wrapping to 0 after the last.
    pub fn step(&mut self) {
        let next = (self.active + 1) % self.len();
        self.show(next);
        debug!(image = next, "gallery advanced");
    }

    pub fn refresh_height(&mut self) {
        let height = self.surface.image_height(self.active);
        self.surface.set_container_height(height);
    }

    pub fn tick(&mut self, dt: f32) {
        for _ in 0..self.advance_timer.tick(dt) {
            self.step();
        }
        if self.height_timer.tick(dt) > 0 {
            self.refresh_height();
        }
    }

    pub fn stop(&mut self) {
        self.advance_timer.stop();
        self.height_timer.stop();
    }

    pub fn resume(&mut self) {
        self.advance_timer.resume();
        self.height_timer.resume();
    }

    pub fn is_running(&self) -> bool {
        self.advance_timer.is_running()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.surface.image_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn surface(&self) -> &G {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut G {
        &mut self.surface
    }

    fn show(&mut self, index: usize) {
        for i in 0..self.len() {
            self.surface.set_image_active(i, false);
        }
        self.surface.set_image_active(index, true);
        self.active = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    const ADVANCE: Duration = Duration::from_millis(4000);

    fn gallery(heights: Vec<f32>) -> Gallery<MemorySurface> {
        Gallery::new(MemorySurface::with_images(heights), ADVANCE, Duration::ZERO).unwrap()
    }

    #[test]
    fn primes_first_image_and_height() {
        let g = gallery(vec![120.0, 340.0, 200.0]);
        assert_eq!(g.active_index(), 0);
        assert_eq!(g.surface().active_images(), vec![0]);
        assert_eq!(g.surface().container_height, 120.0);
    }

    #[test]
    fn steps_with_modulo_wrap() {
        let mut g = gallery(vec![1.0, 2.0, 3.0]);
        let mut seen = vec![g.active_index()];
        for _ in 0..4 {
            g.step();
            seen.push(g.active_index());
        }
        assert_eq!(seen, vec![0, 1, 2, 0, 1]);
    }

    #[test]
    fn height_follows_active_image_on_next_tick() {
        let mut g = gallery(vec![100.0, 250.0]);
        g.tick(4.0);
        assert_eq!(g.active_index(), 1);
        assert_eq!(g.surface().container_height, 250.0);
        g.tick(4.0);
        assert_eq!(g.surface().container_height, 100.0);
    }

    #[test]
    fn height_is_refreshed_even_when_image_changes_size() {
        let mut g = gallery(vec![100.0, 250.0]);
        g.surface.image_heights[0] = 180.0;
        g.tick(0.016);
        assert_eq!(g.active_index(), 0);
        assert_eq!(g.surface().container_height, 180.0);
    }

    #[test]
    fn stop_freezes_both_timers() {
        let mut g = gallery(vec![100.0, 250.0]);
        g.stop();
        g.surface.image_heights[0] = 50.0;
        g.tick(10.0);
        assert_eq!(g.active_index(), 0);
        assert_eq!(g.surface().container_height, 100.0);

        g.resume();
        g.tick(0.016);
        assert_eq!(g.surface().container_height, 50.0);
    }

    #[test]
    fn rejects_empty_gallery() {
        let err = Gallery::new(MemorySurface::default(), ADVANCE, Duration::ZERO).unwrap_err();
        assert_eq!(err, CarouselError::NoImages);
    }
}
