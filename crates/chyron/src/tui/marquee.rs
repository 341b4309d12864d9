use unicode_segmentation::UnicodeSegmentation;

use chyron_core::ItemId;

/// Blank columns between the tail and head of a looping headline.
const GAP: usize = 8;

/// Scrolling window over headline text wider than the banner.
///
/// The offset advances one grapheme per UI tick while a news entry is
/// visible and restarts whenever the entry under the cursor changes.
pub(super) struct MarqueeState {
    item: Option<ItemId>,
    offset: usize,
}

impl MarqueeState {
    pub(super) const fn new() -> Self {
        Self {
            item: None,
            offset: 0,
        }
    }

    /// Advance one column for the given entry, restarting on a new entry.
    pub(super) fn step(&mut self, item: ItemId) {
        if self.item == Some(item) {
            self.offset = self.offset.wrapping_add(1);
        } else {
            self.item = Some(item);
            self.offset = 0;
        }
    }

    pub(super) fn reset(&mut self) {
        self.item = None;
        self.offset = 0;
    }

    /// Window `text` to `width` graphemes at the current offset.
    ///
    /// Text that fits is returned as-is; longer text loops with a gap so
    /// the head chases the tail.
    pub(super) fn window(&self, text: &str, width: usize) -> String {
        if width == 0 {
            return String::new();
        }
        let graphemes: Vec<&str> = text.graphemes(true).collect();
        if graphemes.len() <= width {
            return text.to_owned();
        }

        let track = graphemes.len() + GAP;
        let start = self.offset % track;
        let mut out = String::with_capacity(width);
        for step in 0..width {
            let pos = (start + step) % track;
            if let Some(grapheme) = graphemes.get(pos) {
                out.push_str(grapheme);
            } else {
                out.push(' ');
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_returned_unshifted() {
        let mut marquee = MarqueeState::new();
        let id = ItemId::new();
        marquee.step(id);
        marquee.step(id);
        assert_eq!(marquee.window("short", 20), "short");
    }

    #[test]
    fn long_text_scrolls_one_grapheme_per_step() {
        let mut marquee = MarqueeState::new();
        let id = ItemId::new();
        marquee.step(id);
        assert_eq!(marquee.window("abcdef", 3), "abc");
        marquee.step(id);
        assert_eq!(marquee.window("abcdef", 3), "bcd");
    }

    #[test]
    fn scrolling_loops_through_the_gap() {
        let mut marquee = MarqueeState::new();
        let id = ItemId::new();
        marquee.step(id);
        // Walk exactly one full track: text length + gap.
        for _ in 0.."abcdef".len() + GAP {
            marquee.step(id);
        }
        assert_eq!(marquee.window("abcdef", 3), "abc");
    }

    #[test]
    fn new_item_restarts_the_window() {
        let mut marquee = MarqueeState::new();
        let first = ItemId::new();
        marquee.step(first);
        marquee.step(first);
        marquee.step(first);
        assert_eq!(marquee.window("abcdef", 3), "cde");

        marquee.step(ItemId::new());
        assert_eq!(marquee.window("abcdef", 3), "abc");
    }

    #[test]
    fn zero_width_yields_nothing() {
        let marquee = MarqueeState::new();
        assert_eq!(marquee.window("abcdef", 0), "");
    }
}
