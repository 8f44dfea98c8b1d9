/// One slide: a bundled image file plus the caption shown beneath it.
/// Immutable once constructed.
pub struct SlideEntry {
    pub image_file: &'static str,
    pub caption: &'static str,
}

/// The fixed deck, in presentation order.
pub const SLIDES: [SlideEntry; 5] = [
    SlideEntry {
        image_file: "slide1.jpg",
        caption: "#1 Wellness Spa Retreat: Hot-stone therapy, guided detox programs, \
                  and nourishing cuisine for total rejuvenation.",
    },
    SlideEntry {
        image_file: "slide2.jpg",
        caption: "#2 Yoga & Meditation Escape: Daily yoga, mindfulness workshops, \
                  and nature walks for mental clarity.",
    },
    SlideEntry {
        image_file: "slide3.jpg",
        caption: "#3 Hot Springs & Thermal Baths: Mineral soaks and thermal \
                  treatments to restore body and mind.",
    },
    SlideEntry {
        image_file: "slide4.jpg",
        caption: "#4 Holistic Wellness Resort: Personalized wellness plans, \
                  nutrition counseling, and therapeutic treatments.",
    },
    SlideEntry {
        image_file: "slide5.jpg",
        caption: "#5 Off-grid Nature Retreat: Digital detox cabins, forest bathing, \
                  and guided breathing sessions for deep restoration.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_has_exactly_five_slides() {
        assert_eq!(SLIDES.len(), 5);
    }

    #[test]
    fn slides_are_in_presentation_order() {
        for (i, slide) in SLIDES.iter().enumerate() {
            assert_eq!(slide.image_file, format!("slide{}.jpg", i + 1));
            assert!(slide.caption.starts_with(&format!("#{}", i + 1)));
        }
    }
}
