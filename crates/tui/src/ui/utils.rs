//! Small text helpers for laying out fixed-width grid cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pads `text` with spaces, or truncates it with `…`, so it occupies exactly
/// `width` terminal cells.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width <= width {
        return format!("{text}{}", " ".repeat(width - text_width));
    }
    if width == 0 {
        return String::new();
    }

    let mut fitted = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width - 1 {
            break;
        }
        fitted.push(ch);
        used += ch_width;
    }
    fitted.push('…');
    used += 1;
    fitted.push_str(&" ".repeat(width.saturating_sub(used)));
    fitted
}

/// Splits `total` cells into `columns` cell widths separated by `gap`,
/// giving the remainder to the leftmost cells.
pub fn column_widths(total: u16, columns: u16, gap: u16) -> Vec<usize> {
    let columns = columns.max(1);
    let usable = total.saturating_sub(gap * (columns - 1));
    let base = usable / columns;
    let remainder = usable % columns;
    (0..columns)
        .map(|index| usize::from(base + u16::from(index < remainder)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_padded() {
        assert_eq!(fit_to_width("abc", 6), "abc   ");
        assert_eq!(fit_to_width("abc", 3), "abc");
    }

    #[test]
    fn long_text_is_truncated_with_an_ellipsis() {
        assert_eq!(fit_to_width("Morning commute", 8), "Morning…");
        assert_eq!(fit_to_width("abc", 0), "");
    }

    #[test]
    fn wide_characters_are_measured_in_cells() {
        let fitted = fit_to_width("漢字漢字", 5);
        assert_eq!(fitted.width(), 5);
        assert!(fitted.ends_with('…'));
    }

    #[test]
    fn column_widths_cover_the_available_space() {
        assert_eq!(column_widths(21, 2, 1), vec![10, 10]);
        assert_eq!(column_widths(22, 2, 1), vec![11, 10]);
        assert_eq!(column_widths(10, 1, 2), vec![10]);
    }
}
