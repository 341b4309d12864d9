use std::borrow::Cow;

use ratatui::layout::Rect;
use unicode_segmentation::UnicodeSegmentation;

pub(super) fn truncate_with_ellipsis(input: &str, max_graphemes: usize) -> Cow<'_, str> {
    const ELLIPSIS: &str = "...";
    const ELLIPSIS_GRAPHEMES: usize = 3;

    if max_graphemes == 0 {
        return Cow::Owned(String::new());
    }

    let grapheme_count = UnicodeSegmentation::graphemes(input, true).count();
    if grapheme_count <= max_graphemes {
        return Cow::Borrowed(input);
    }

    if max_graphemes <= ELLIPSIS_GRAPHEMES {
        let truncated: String = UnicodeSegmentation::graphemes(input, true)
            .take(max_graphemes)
            .collect();
        return Cow::Owned(truncated);
    }

    let keep = max_graphemes - ELLIPSIS_GRAPHEMES;
    let mut truncated: String = UnicodeSegmentation::graphemes(input, true).take(keep).collect();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}

/// Centered popup rectangle: `width_percent` of the area, clamped to
/// `min_width`, with a fixed height.
pub(super) fn centered_popup(area: Rect, width_percent: u16, min_width: u16, height: u16) -> Rect {
    let width = ((area.width * width_percent) / 100)
        .max(min_width)
        .min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.width.saturating_sub(width) / 2,
        y: area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_returns_borrowed_when_short() {
        let text = "Short headline";
        assert!(matches!(
            truncate_with_ellipsis(text, 20),
            Cow::Borrowed(result) if result == text
        ));
    }

    #[test]
    fn truncate_handles_multibyte_text() {
        let text = "あいうえおかきくけこ";
        assert_eq!(truncate_with_ellipsis(text, 5), "あい...");
    }

    #[test]
    fn truncate_keeps_grapheme_clusters_intact() {
        let text = "a\u{0301}bcdef";
        assert_eq!(truncate_with_ellipsis(text, 4), "a\u{0301}...");
    }

    #[test]
    fn popup_is_centered_and_clamped() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 40,
        };
        let popup = centered_popup(area, 40, 30, 5);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.height, 5);
        assert_eq!(popup.x, 30);

        let tiny = Rect {
            x: 0,
            y: 0,
            width: 20,
            height: 3,
        };
        let clamped = centered_popup(tiny, 40, 30, 5);
        assert_eq!(clamped.width, 20);
        assert_eq!(clamped.height, 3);
    }
}

