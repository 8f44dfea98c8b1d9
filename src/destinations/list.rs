use raylib::prelude::Color;

use crate::constants::*;
use crate::ui::wrap_text;

/// One laid-out list row: wrapped caption lines plus its vertical extent
/// in content space (i.e. before the scroll offset is applied).
pub struct Row {
    pub lines: Vec<String>,
    pub y: f32,
    pub height: f32,
}

pub struct ListLayout {
    pub rows: Vec<Row>,
    pub content_height: f32,
}

impl ListLayout {
    /// Wrap every caption at the standard pixel budget and stack the rows.
    /// Row height is the taller of the thumbnail and the wrapped text,
    /// plus the cell padding on both sides.
    pub fn build(captions: &[&str], measure: impl Fn(&str) -> i32) -> Self {
        let mut rows = Vec::with_capacity(captions.len());
        let mut y = 0.0;
        for caption in captions {
            let lines = wrap_text(caption, TEXT_WRAP_WIDTH, &measure);
            let text_height = lines.len() as i32 * LINE_HEIGHT;
            let height = (ICON_HEIGHT.max(text_height) + 2 * CELL_PADDING) as f32;
            rows.push(Row { lines, y, height });
            y += height;
        }
        Self {
            rows,
            content_height: y,
        }
    }

    /// Map a content-space y coordinate to the row under it.
    pub fn row_at(&self, y: f32) -> Option<usize> {
        if y < 0.0 {
            return None;
        }
        self.rows
            .iter()
            .position(|row| y >= row.y && y < row.y + row.height)
    }
}

/// (background, foreground) for a row: alternating colors by parity,
/// overridden by the highlight pair when the row is selected.
pub fn row_colors(index: usize, selected: bool) -> (Color, Color) {
    if selected {
        (SELECTION_BG, SELECTION_FG)
    } else if index % 2 == 0 {
        (EVEN_ROW_BG, ROW_FG)
    } else {
        (ODD_ROW_BG, ROW_FG)
    }
}

/// Keep the scroll offset inside `[0, content - view]`; zero when the
/// content fits the view.
pub fn clamp_scroll(offset: f32, content_height: f32, view_height: f32) -> f32 {
    let max = (content_height - view_height).max(0.0);
    offset.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(s: &str) -> i32 {
        s.chars().count() as i32 * 10
    }

    #[test]
    fn rows_stack_without_gaps() {
        let layout = ListLayout::build(&["a", "b", "c", "d", "e"], measure);
        assert_eq!(layout.rows.len(), 5);

        let mut expected_y = 0.0;
        for row in &layout.rows {
            assert_eq!(row.y, expected_y);
            expected_y += row.height;
        }
        assert_eq!(layout.content_height, expected_y);
    }

    #[test]
    fn short_caption_rows_are_thumbnail_height() {
        let layout = ListLayout::build(&["short"], measure);
        assert_eq!(layout.rows[0].height, (ICON_HEIGHT + 2 * CELL_PADDING) as f32);
    }

    #[test]
    fn row_at_respects_boundaries() {
        let layout = ListLayout::build(&["a", "b"], measure);
        let first_height = layout.rows[0].height;

        assert_eq!(layout.row_at(0.0), Some(0));
        assert_eq!(layout.row_at(first_height - 0.5), Some(0));
        assert_eq!(layout.row_at(first_height), Some(1));
        assert_eq!(layout.row_at(-1.0), None);
        assert_eq!(layout.row_at(layout.content_height), None);
    }

    #[test]
    fn backgrounds_alternate_by_parity() {
        assert_eq!(row_colors(0, false).0, EVEN_ROW_BG);
        assert_eq!(row_colors(1, false).0, ODD_ROW_BG);
        assert_eq!(row_colors(2, false).0, EVEN_ROW_BG);
    }

    #[test]
    fn selection_overrides_parity() {
        for index in 0..3 {
            assert_eq!(row_colors(index, true), (SELECTION_BG, SELECTION_FG));
        }
    }

    #[test]
    fn scroll_is_clamped_to_content() {
        assert_eq!(clamp_scroll(-10.0, 500.0, 200.0), 0.0);
        assert_eq!(clamp_scroll(1000.0, 500.0, 200.0), 300.0);
        assert_eq!(clamp_scroll(150.0, 500.0, 200.0), 150.0);
    }

    #[test]
    fn scroll_is_zero_when_content_fits() {
        assert_eq!(clamp_scroll(50.0, 100.0, 200.0), 0.0);
    }
}
