use raylib::prelude::*;

use crate::constants::BUTTON_FONT_SIZE;

// --- Immediate-mode push button ---
// Draws the button and reports whether it was clicked this frame.
pub fn button(d: &mut RaylibDrawHandle, bounds: Rectangle, label: &str) -> bool {
    let mouse = d.get_mouse_position();
    let hovered = bounds.check_collision_point_rec(mouse);
    let clicked = hovered && d.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT);

    let background = if hovered {
        Color::new(225, 225, 225, 255)
    } else {
        Color::new(240, 240, 240, 255)
    };
    d.draw_rectangle_rec(bounds, background);
    d.draw_rectangle_lines_ex(bounds, 1.0, Color::GRAY);

    let text_width = d.measure_text(label, BUTTON_FONT_SIZE);
    d.draw_text(
        label,
        (bounds.x + (bounds.width - text_width as f32) / 2.0) as i32,
        (bounds.y + (bounds.height - BUTTON_FONT_SIZE as f32) / 2.0) as i32,
        BUTTON_FONT_SIZE,
        Color::BLACK,
    );

    clicked
}

/// Greedy word wrap against a pixel budget. `measure` reports the rendered
/// width of a candidate line, so the logic stays independent of any font.
/// A single word wider than the budget gets a line of its own.
pub fn wrap_text(text: &str, max_width: i32, measure: impl Fn(&str) -> i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if measure(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
