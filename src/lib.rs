//! Slide carousel and auto-advancing image gallery.
//!
//! Both controllers own their index state and drive a display through the
//! capability traits in [`surface`], advancing on frame-driven repeating
//! timers.

pub mod carousel;
pub mod error;
pub mod gallery;
pub mod state;
pub mod surface;
pub mod timer;

pub use carousel::{wrap_index, Carousel};
pub use error::{CarouselError, Result};
pub use gallery::Gallery;
pub use state::TimerState;
pub use surface::{GallerySurface, MemorySurface, SlideSurface};
pub use timer::IntervalTimer;
