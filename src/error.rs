//! Start-up configuration errors for the carousel and gallery controllers.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    NoSlides,

    #[error("slide/dot count mismatch: {slides} slides, {dots} dots")]
    DotCountMismatch { slides: usize, dots: usize },

    #[error("gallery needs at least one image")]
    NoImages,
}

pub type Result<T> = std::result::Result<T, CarouselError>;
