use std::time::Duration;

use tracing::debug;

use crate::error::{CarouselError, Result};
use crate::surface::SlideSurface;
use crate::timer::IntervalTimer;

/// Maps a requested 1-based index back into `[1, len]`.
///
/// Overflow resets to the first slide and underflow to the last one; this is
/// not modulo arithmetic (`len + 2` gives 1, not 2).
pub fn wrap_index(n: i64, len: usize) -> usize {
    let last = i64::try_from(len).unwrap_or(i64::MAX);
    if n > last {
        1
    } else if n < 1 {
        len
    } else {
        // 1 <= n <= len here
        usize::try_from(n).unwrap_or(1)
    }
}

/// Slide carousel: one visible slide, one active dot, a repeating advance timer.
#[derive(Debug)]
pub struct Carousel<S: SlideSurface> {
    surface: S,
    slide_index: usize,
    timer: IntervalTimer,
}

impl<S: SlideSurface> Carousel<S> {
    /// Validates the surface and renders slide 1.
    pub fn new(surface: S, interval: Duration) -> Result<Self> {
        let slides = surface.slide_count();
        let dots = surface.dot_count();
        if slides == 0 {
            return Err(CarouselError::NoSlides);
        }
        if slides != dots {
            return Err(CarouselError::DotCountMismatch { slides, dots });
        }

        let mut carousel = Self {
            surface,
            slide_index: 1,
            timer: IntervalTimer::new(interval),
        };
        carousel.render_slide(1);
        Ok(carousel)
    }

    /// Shows slide `n` after applying [`wrap_index`] and stores it as current.
    pub fn render_slide(&mut self, n: i64) {
        let len = self.len();
        self.slide_index = wrap_index(n, len);

        for i in 0..len {
            self.surface.set_slide_visible(i, false);
        }
        for i in 0..len {
            self.surface.set_dot_active(i, false);
        }
        let position = self.slide_index - 1;
        self.surface.set_slide_visible(position, true);
        self.surface.set_dot_active(position, true);

        debug!(requested = n, slide = self.slide_index, "rendered slide");
    }

    /// Steps relative to the current slide. The wrap rule applies to the sum.
    pub fn advance(&mut self, delta: i64) {
        let current = i64::try_from(self.slide_index).unwrap_or(i64::MAX);
        self.render_slide(current.saturating_add(delta));
    }

    pub fn jump_to(&mut self, n: i64) {
        self.render_slide(n);
    }

    /// Feeds frame time to the advance timer, stepping forward once per
    /// elapsed interval.
    pub fn tick(&mut self, dt: f32) {
        for _ in 0..self.timer.tick(dt) {
            self.advance(1);
        }
    }

    pub fn stop(&mut self) {
        self.timer.stop();
    }

    pub fn resume(&mut self) {
        self.timer.resume();
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Current slide, 1-based.
    pub fn current_index(&self) -> usize {
        self.slide_index
    }

    pub fn len(&self) -> usize {
        self.surface.slide_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    const INTERVAL: Duration = Duration::from_millis(4000);

    fn carousel(slides: usize) -> Carousel<MemorySurface> {
        Carousel::new(MemorySurface::with_slides(slides), INTERVAL).unwrap()
    }

    #[test]
    fn starts_on_first_slide() {
        let c = carousel(3);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.surface().visible_slides(), vec![0]);
        assert_eq!(c.surface().active_dots(), vec![0]);
    }

    #[test]
    fn wrap_rule_is_not_modulo() {
        assert_eq!(wrap_index(5, 4), 1);
        assert_eq!(wrap_index(6, 4), 1);
        assert_eq!(wrap_index(0, 4), 4);
        assert_eq!(wrap_index(-3, 4), 4);
        assert_eq!(wrap_index(3, 4), 3);
        assert_eq!(wrap_index(i64::MAX, 4), 1);
        assert_eq!(wrap_index(i64::MIN, 4), 4);
    }

    #[test]
    fn advance_past_last_wraps_to_first() {
        let mut c = carousel(4);
        c.jump_to(4);
        c.advance(1);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn advance_before_first_wraps_to_last() {
        let mut c = carousel(4);
        c.advance(-1);
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.surface().visible_slides(), vec![3]);
        assert_eq!(c.surface().active_dots(), vec![3]);
    }

    #[test]
    fn large_jump_resets_instead_of_wrapping() {
        let mut c = carousel(4);
        c.jump_to(2);
        c.advance(5); // 7 > 4
        assert_eq!(c.current_index(), 1);
        c.advance(-3); // -2 < 1
        assert_eq!(c.current_index(), 4);
    }

    #[test]
    fn jump_to_marks_only_that_slide_and_dot() {
        let mut c = carousel(5);
        c.jump_to(3);
        assert_eq!(c.current_index(), 3);
        assert_eq!(c.surface().visible_slides(), vec![2]);
        assert_eq!(c.surface().active_dots(), vec![2]);
    }

    #[test]
    fn advance_saturates_instead_of_overflowing() {
        let mut c = carousel(2);
        c.advance(i64::MAX);
        assert_eq!(c.current_index(), 1);
        c.advance(i64::MIN);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn timer_advances_one_slide_per_interval() {
        let mut c = carousel(3);
        c.tick(3.0);
        assert_eq!(c.current_index(), 1);
        c.tick(1.0);
        assert_eq!(c.current_index(), 2);
        c.tick(8.0);
        assert_eq!(c.current_index(), 1);
    }

    #[test]
    fn stopped_timer_leaves_manual_navigation_working() {
        let mut c = carousel(3);
        c.stop();
        assert!(!c.is_running());
        c.tick(100.0);
        assert_eq!(c.current_index(), 1);
        c.advance(1);
        assert_eq!(c.current_index(), 2);

        c.resume();
        c.tick(4.0);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn single_slide_always_stays_on_one() {
        let mut c = carousel(1);
        c.advance(1);
        assert_eq!(c.current_index(), 1);
        c.advance(-1);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.surface().visible_slides(), vec![0]);
    }

    #[test]
    fn rejects_empty_collection() {
        let err = Carousel::new(MemorySurface::with_slides(0), INTERVAL).unwrap_err();
        assert_eq!(err, CarouselError::NoSlides);
    }

    #[test]
    fn rejects_mismatched_dots() {
        let mut surface = MemorySurface::with_slides(3);
        surface.dots.pop();
        let err = Carousel::new(surface, INTERVAL).unwrap_err();
        assert_eq!(err, CarouselError::DotCountMismatch { slides: 3, dots: 2 });
    }
}
