use std::rc::Rc;

use anyhow::{bail, Result};
use carousel::{Carousel, Gallery};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod constants;
mod headless;
mod slide;
mod texture_loader;

use crate::cli::{column_width, Args};
use crate::constants::*;
use crate::slide::{GalleryStrip, SlideDeck};
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

const JUMP_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut image_paths = load_sorted_image_paths(&args.image_dir)?;
    if args.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!(dir = %args.image_dir.display(), images = image_paths.len(), "found images");

    if let Some(seconds) = args.headless {
        return headless::run(&args, &image_paths, seconds);
    }

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Library Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load textures, shared by the carousel and the gallery ---
    let mut textures = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => textures.push(Rc::new(texture)),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping image"),
        }
    }
    if textures.is_empty() {
        bail!("no image in {} could be loaded", args.image_dir.display());
    }

    let mut carousel = Carousel::new(SlideDeck::new(&textures), args.slide_interval())?;
    let mut gallery = Gallery::new(
        GalleryStrip::new(&textures, args.gallery_column_width()),
        args.gallery_interval(),
        args.height_refresh(),
    )?;
    info!(slides = carousel.len(), "carousel ready");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();
        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;
        let column = column_width(screen_width);
        let carousel_area = Rectangle::new(
            PANEL_MARGIN,
            PANEL_MARGIN,
            column,
            screen_height - PANEL_MARGIN * 2.0,
        );

        // --- Input ---
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            carousel.advance(1);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            carousel.advance(-1);
        }
        for (position, key) in (1..).zip(JUMP_KEYS) {
            if rl.is_key_pressed(key) {
                carousel.jump_to(position);
            }
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            if let Some(position) = carousel.surface().dot_at(mouse, carousel_area) {
                carousel.jump_to(position);
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
            if carousel.is_running() {
                carousel.stop();
                gallery.stop();
                info!("timers stopped");
            } else {
                carousel.resume();
                gallery.resume();
                info!("timers resumed");
            }
        }

        // --- Timers ---
        gallery.surface_mut().set_width(column);
        carousel.tick(dt);
        gallery.tick(dt);

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        carousel.surface().draw(&mut d, carousel_area);
        gallery.surface().draw(&mut d, screen_width * 0.5 + PANEL_MARGIN * 0.5, PANEL_MARGIN);
    }

    Ok(())
}
