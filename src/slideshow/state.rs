/// Position within a fixed-length slide deck. Navigation is circular:
/// advancing past the last slide wraps to the first and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideCursor {
    len: usize,
    current: usize,
}

impl SlideCursor {
    pub fn new(len: usize) -> Self {
        debug_assert!(len > 0, "a slide deck cannot be empty");
        Self { len, current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn advance(&mut self) {
        self.current = (self.current + 1) % self.len;
    }

    pub fn retreat(&mut self) {
        self.current = (self.current + self.len - 1) % self.len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(SlideCursor::new(5).current(), 0);
    }

    #[test]
    fn n_steps_forward_lands_on_n_mod_len() {
        for n in 0..23 {
            let mut cursor = SlideCursor::new(5);
            for _ in 0..n {
                cursor.advance();
            }
            assert_eq!(cursor.current(), n % 5);
        }
    }

    #[test]
    fn retreat_wraps_to_the_last_slide() {
        let mut cursor = SlideCursor::new(5);
        cursor.retreat();
        assert_eq!(cursor.current(), 4);
    }

    #[test]
    fn advance_then_retreat_is_identity() {
        for start in 0..5 {
            let mut cursor = SlideCursor::new(5);
            for _ in 0..start {
                cursor.advance();
            }
            cursor.advance();
            cursor.retreat();
            assert_eq!(cursor.current(), start);
        }
    }

    #[test]
    fn single_slide_deck_never_moves() {
        let mut cursor = SlideCursor::new(1);
        cursor.advance();
        cursor.retreat();
        assert_eq!(cursor.current(), 0);
    }
}
