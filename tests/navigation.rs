//! End-to-end checks over the public API: circular navigation across the
//! built-in slide deck and the fixed destination list.

use top_destinations::destinations::entry::TOP_FIVE;
use top_destinations::destinations::list::ListLayout;
use top_destinations::slideshow::deck::SLIDES;
use top_destinations::slideshow::state::SlideCursor;

#[test]
fn a_full_lap_forward_returns_to_the_first_slide() {
    let mut cursor = SlideCursor::new(SLIDES.len());
    let mut seen = Vec::new();
    for _ in 0..SLIDES.len() {
        seen.push(cursor.current());
        cursor.advance();
    }
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
    assert_eq!(cursor.current(), 0);
}

#[test]
fn a_full_lap_backward_visits_slides_in_reverse() {
    let mut cursor = SlideCursor::new(SLIDES.len());
    let mut seen = Vec::new();
    for _ in 0..SLIDES.len() {
        cursor.retreat();
        seen.push(cursor.current());
    }
    assert_eq!(seen, vec![4, 3, 2, 1, 0]);
}

#[test]
fn every_slide_has_an_image_and_a_caption() {
    for slide in SLIDES.iter() {
        assert!(!slide.image_file.is_empty());
        assert!(!slide.caption.is_empty());
    }
}

#[test]
fn the_list_lays_out_exactly_five_rows_in_input_order() {
    let captions: Vec<&str> = TOP_FIVE.iter().map(|e| e.caption).collect();
    let layout = ListLayout::build(&captions, |s| s.chars().count() as i32 * 8);

    assert_eq!(layout.rows.len(), 5);
    for (row, caption) in layout.rows.iter().zip(&captions) {
        assert_eq!(&row.lines.join(" "), caption);
    }
}
