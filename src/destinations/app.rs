use std::path::Path;

use anyhow::Result;
use log::info;
use raylib::prelude::*;

use crate::constants::*;
use crate::destinations::entry::TOP_FIVE;
use crate::destinations::list::{ListLayout, clamp_scroll, row_colors};
use crate::texture_loader::{LoadedTexture, load_thumbnail};

pub fn run(resources: &Path) -> Result<()> {
    let (mut rl, thread) = raylib::init()
        .size(LIST_WINDOW_WIDTH, LIST_WINDOW_HEIGHT)
        .title("Top 5 Destination List")
        .vsync()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Thumbnails ---
    let mut thumbnails: Vec<LoadedTexture> = Vec::with_capacity(TOP_FIVE.len());
    for entry in TOP_FIVE.iter() {
        let path = resources.join(entry.image_file);
        thumbnails.push(load_thumbnail(&mut rl, &thread, &path)?);
    }
    info!("loaded {} thumbnails from {:?}", thumbnails.len(), resources);

    // Captions wrap against the default font, so the window must exist first
    let captions: Vec<&str> = TOP_FIVE.iter().map(|e| e.caption).collect();
    let layout = ListLayout::build(&captions, |s| rl.measure_text(s, CAPTION_FONT_SIZE));

    let view_height = (LIST_WINDOW_HEIGHT - HEADER_HEIGHT) as f32;
    let mut scroll = 0.0f32;
    let mut selected: Option<usize> = None;

    // --- Main Loop ---
    while !rl.window_should_close() {
        scroll = clamp_scroll(
            scroll - rl.get_mouse_wheel_move() * SCROLL_STEP,
            layout.content_height,
            view_height,
        );

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let mouse = rl.get_mouse_position();
            if mouse.y >= HEADER_HEIGHT as f32 {
                selected = layout.row_at(mouse.y - HEADER_HEIGHT as f32 + scroll);
            }
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::WHITE);

        for (i, row) in layout.rows.iter().enumerate() {
            let top = HEADER_HEIGHT as f32 + row.y - scroll;
            if top + row.height < HEADER_HEIGHT as f32 || top > LIST_WINDOW_HEIGHT as f32 {
                continue;
            }

            let (background, foreground) = row_colors(i, selected == Some(i));
            d.draw_rectangle(0, top as i32, LIST_WINDOW_WIDTH, row.height as i32, background);

            // Thumbnail, vertically centered in the row
            let icon_x = CELL_PADDING;
            let icon_y = top as i32 + (row.height as i32 - ICON_HEIGHT) / 2;
            let thumbnail = &thumbnails[i];
            d.draw_texture(&thumbnail.texture, icon_x, icon_y, Color::WHITE);
            if thumbnail.missing {
                d.draw_text(
                    "No Image",
                    icon_x + 10,
                    icon_y + (ICON_HEIGHT - CAPTION_FONT_SIZE) / 2,
                    CAPTION_FONT_SIZE,
                    PLACEHOLDER_FG,
                );
            }

            // Caption block, vertically centered next to the thumbnail
            let text_x = CELL_PADDING + ICON_WIDTH + ICON_TEXT_GAP;
            let text_height = row.lines.len() as i32 * LINE_HEIGHT;
            let mut text_y = top as i32 + (row.height as i32 - text_height) / 2;
            for line in &row.lines {
                d.draw_text(line, text_x, text_y, CAPTION_FONT_SIZE, foreground);
                text_y += LINE_HEIGHT;
            }
        }

        // Header drawn last so rows scroll underneath it
        d.draw_rectangle(0, 0, LIST_WINDOW_WIDTH, HEADER_HEIGHT, Color::WHITE);
        let header = "Top 5 Destinations";
        let header_width = d.measure_text(header, HEADER_FONT_SIZE);
        d.draw_text(
            header,
            (LIST_WINDOW_WIDTH - header_width) / 2,
            (HEADER_HEIGHT - HEADER_FONT_SIZE) / 2,
            HEADER_FONT_SIZE,
            Color::BLACK,
        );

        draw_scrollbar(&mut d, scroll, layout.content_height, view_height);
    }

    Ok(())
}

fn draw_scrollbar(d: &mut RaylibDrawHandle, scroll: f32, content_height: f32, view_height: f32) {
    if content_height <= view_height {
        return;
    }

    let track_x = LIST_WINDOW_WIDTH - SCROLLBAR_WIDTH;
    d.draw_rectangle(
        track_x,
        HEADER_HEIGHT,
        SCROLLBAR_WIDTH,
        view_height as i32,
        Color::new(230, 230, 230, 255),
    );

    let handle_height = (view_height / content_height * view_height).max(20.0);
    let handle_y = HEADER_HEIGHT as f32
        + scroll / (content_height - view_height) * (view_height - handle_height);
    d.draw_rectangle(
        track_x,
        handle_y as i32,
        SCROLLBAR_WIDTH,
        handle_height as i32,
        Color::GRAY,
    );
}
