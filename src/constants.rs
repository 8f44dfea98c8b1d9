use raylib::prelude::Color;

pub const FPS: u32 = 60;                      // Frames per second for both windows

// --- Slideshow window ---
pub const SLIDE_WINDOW_WIDTH: i32 = 800;      // Slideshow window width
pub const SLIDE_WINDOW_HEIGHT: i32 = 600;     // Slideshow window height
pub const CAPTION_PANE_HEIGHT: i32 = 90;      // Caption strip above the buttons
pub const BUTTON_PANE_HEIGHT: i32 = 50;       // Strip holding Previous/Next
pub const SLIDE_AREA_HEIGHT: i32 =
    SLIDE_WINDOW_HEIGHT - CAPTION_PANE_HEIGHT - BUTTON_PANE_HEIGHT;

pub const BUTTON_WIDTH: f32 = 110.0;
pub const BUTTON_HEIGHT: f32 = 32.0;
pub const BUTTON_GAP: f32 = 20.0;             // Horizontal gap between the two buttons

// --- Destination list window ---
pub const LIST_WINDOW_WIDTH: i32 = 900;       // List window width
pub const LIST_WINDOW_HEIGHT: i32 = 750;      // List window height
pub const HEADER_HEIGHT: i32 = 50;            // Header strip at the top
pub const ICON_WIDTH: i32 = 160;              // Standard thumbnail width
pub const ICON_HEIGHT: i32 = 100;             // Standard thumbnail height
pub const TEXT_WRAP_WIDTH: i32 = 500;         // Pixel budget for caption wrapping
pub const CELL_PADDING: i32 = 10;             // Padding inside each list row
pub const ICON_TEXT_GAP: i32 = 12;            // Gap between thumbnail and caption
pub const SCROLL_STEP: f32 = 30.0;            // Pixels per mouse wheel notch
pub const SCROLLBAR_WIDTH: i32 = 8;

// --- Text ---
pub const HEADER_FONT_SIZE: i32 = 22;
pub const CAPTION_FONT_SIZE: i32 = 14;
pub const BUTTON_FONT_SIZE: i32 = 16;
pub const LINE_HEIGHT: i32 = CAPTION_FONT_SIZE + 4;

// --- Colors ---
pub const CAPTION_PANE_BG: Color = Color::new(30, 144, 255, 255);  // DodgerBlue
pub const EVEN_ROW_BG: Color = Color::new(245, 245, 245, 255);     // Light gray
pub const ODD_ROW_BG: Color = Color::new(255, 255, 255, 255);      // White
pub const SELECTION_BG: Color = Color::new(0, 120, 215, 255);
pub const SELECTION_FG: Color = Color::new(255, 255, 255, 255);
pub const ROW_FG: Color = Color::new(20, 20, 20, 255);
pub const PLACEHOLDER_BG: Color = Color::new(200, 200, 200, 255);
pub const PLACEHOLDER_FG: Color = Color::new(80, 80, 80, 255);
