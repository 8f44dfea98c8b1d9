use std::path::Path;

use anyhow::Result;
use log::info;
use raylib::prelude::*;

use crate::constants::*;
use crate::slideshow::deck::SLIDES;
use crate::slideshow::state::SlideCursor;
use crate::texture_loader::{LoadedTexture, load_slide_texture};
use crate::ui;

pub fn run(resources: &Path) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(SLIDE_WINDOW_WIDTH, SLIDE_WINDOW_HEIGHT)
        .title("Top Detox & Wellness Destinations")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Slides ---
    let mut slides: Vec<LoadedTexture> = Vec::with_capacity(SLIDES.len());
    for entry in SLIDES.iter() {
        let path = resources.join(entry.image_file);
        slides.push(load_slide_texture(
            &mut rl,
            &thread,
            &path,
            SLIDE_WINDOW_WIDTH,
            SLIDE_AREA_HEIGHT,
        )?);
    }
    info!("loaded {} slides from {:?}", slides.len(), resources);

    let mut cursor = SlideCursor::new(SLIDES.len());

    // Button bar geometry: both buttons centered in the bottom strip
    let buttons_y = (SLIDE_WINDOW_HEIGHT - BUTTON_PANE_HEIGHT) as f32
        + (BUTTON_PANE_HEIGHT as f32 - BUTTON_HEIGHT) / 2.0;
    let prev_bounds = Rectangle::new(
        SLIDE_WINDOW_WIDTH as f32 / 2.0 - BUTTON_WIDTH - BUTTON_GAP / 2.0,
        buttons_y,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    );
    let next_bounds = Rectangle::new(
        SLIDE_WINDOW_WIDTH as f32 / 2.0 + BUTTON_GAP / 2.0,
        buttons_y,
        BUTTON_WIDTH,
        BUTTON_HEIGHT,
    );

    // --- Main Loop ---
    while !rl.window_should_close() {
        // Arrow keys mirror the buttons
        let mut go_previous = rl.is_key_pressed(KeyboardKey::KEY_LEFT);
        let mut go_next = rl.is_key_pressed(KeyboardKey::KEY_RIGHT);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);

        draw_slide(&mut d, &slides[cursor.current()]);
        draw_caption(&mut d, SLIDES[cursor.current()].caption);

        // Button pane background, then the buttons themselves
        d.draw_rectangle(
            0,
            SLIDE_WINDOW_HEIGHT - BUTTON_PANE_HEIGHT,
            SLIDE_WINDOW_WIDTH,
            BUTTON_PANE_HEIGHT,
            Color::new(238, 238, 238, 255),
        );
        go_previous |= ui::button(&mut d, prev_bounds, "Previous");
        go_next |= ui::button(&mut d, next_bounds, "Next");
        drop(d);

        if go_previous {
            cursor.retreat();
        }
        if go_next {
            cursor.advance();
        }
    }

    Ok(())
}

// Draw the current slide scaled to fit the image area, preserving aspect ratio
fn draw_slide(d: &mut RaylibDrawHandle, slide: &LoadedTexture) {
    let area_width = SLIDE_WINDOW_WIDTH as f32;
    let area_height = SLIDE_AREA_HEIGHT as f32;

    let tex_width = slide.texture.width() as f32;
    let tex_height = slide.texture.height() as f32;

    let scale = (area_width / tex_width).min(area_height / tex_height);
    let scaled_width = tex_width * scale;
    let scaled_height = tex_height * scale;

    let draw_pos = Vector2::new(
        (area_width - scaled_width) * 0.5,
        (area_height - scaled_height) * 0.5,
    );

    d.draw_texture_pro(
        &slide.texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        Rectangle::new(draw_pos.x, draw_pos.y, scaled_width, scaled_height),
        Vector2::new(0.0, 0.0),
        0.0,
        Color::WHITE,
    );

    if slide.missing {
        let label = "No Image";
        let label_width = d.measure_text(label, BUTTON_FONT_SIZE);
        d.draw_text(
            label,
            (area_width as i32 - label_width) / 2,
            (SLIDE_AREA_HEIGHT - BUTTON_FONT_SIZE) / 2,
            BUTTON_FONT_SIZE,
            PLACEHOLDER_FG,
        );
    }
}

// White wrapped text on the DodgerBlue caption pane
fn draw_caption(d: &mut RaylibDrawHandle, caption: &str) {
    let pane_y = SLIDE_AREA_HEIGHT;
    d.draw_rectangle(
        0,
        pane_y,
        SLIDE_WINDOW_WIDTH,
        CAPTION_PANE_HEIGHT,
        CAPTION_PANE_BG,
    );

    let wrap_width = SLIDE_WINDOW_WIDTH - 2 * 20;
    let lines = ui::wrap_text(caption, wrap_width, |s| d.measure_text(s, CAPTION_FONT_SIZE));

    let text_height = lines.len() as i32 * LINE_HEIGHT;
    let mut y = pane_y + (CAPTION_PANE_HEIGHT - text_height) / 2;
    for line in &lines {
        d.draw_text(line, 20, y, CAPTION_FONT_SIZE, Color::WHITE);
        y += LINE_HEIGHT;
    }
}
