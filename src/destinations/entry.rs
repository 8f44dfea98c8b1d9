/// One destination row: a bundled thumbnail plus its description.
/// Immutable once constructed; the list is never reordered or filtered.
pub struct DestinationEntry {
    pub image_file: &'static str,
    pub caption: &'static str,
}

/// The five destinations, in ranking order.
pub const TOP_FIVE: [DestinationEntry; 5] = [
    DestinationEntry {
        image_file: "keylargo.jpg",
        caption: "1. Key Largo: The first and largest of the Florida Keys, known for \
                  its stunning coral reefs and vibrant marine life.",
    },
    DestinationEntry {
        image_file: "bahamas.jpg",
        caption: "2. Bahamas: A tropical paradise with crystal-clear waters, white \
                  sandy beaches, and a rich culture to explore.",
    },
    DestinationEntry {
        image_file: "jamaica.jpg",
        caption: "3. Jamaica: An island nation renowned for its reggae music, lush \
                  rainforests, and breathtaking waterfalls.",
    },
    DestinationEntry {
        image_file: "aruba.jpg",
        caption: "4. Aruba: A sunny Caribbean island famous for its beautiful \
                  beaches, friendly locals, and vibrant nightlife.",
    },
    DestinationEntry {
        image_file: "Bermuda.jpg",
        caption: "5. Bermuda: A stunning Atlantic island known for its pink sand \
                  beaches, crystal-clear waters, and charming colonial architecture.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_has_exactly_five_entries() {
        assert_eq!(TOP_FIVE.len(), 5);
    }

    #[test]
    fn entries_are_in_ranking_order() {
        for (i, entry) in TOP_FIVE.iter().enumerate() {
            assert!(entry.caption.starts_with(&format!("{}.", i + 1)));
        }
    }
}
