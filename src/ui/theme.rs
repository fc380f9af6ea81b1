use crate::snapshot::Marks;
use ratatui::style::{Color, Modifier, Style};

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub compare: Color,  // Yellow
    pub visited: Color,  // Cyan
    pub pointer: Color,  // Pink
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    compare: Color::Rgb(249, 226, 175),
    visited: Color::Rgb(148, 226, 213),
    pointer: Color::Rgb(245, 194, 231),
};

impl Theme {
    /// Cell style for an element, picked by the highest priority mark set
    pub fn mark_style(&self, marks: Marks) -> Style {
        let filled = |bg: Color| Style::default().bg(bg).fg(Color::Black);

        let style = if marks.contains(Marks::DELETING) {
            filled(self.error)
        } else if marks.contains(Marks::SWAPPING) {
            filled(self.secondary)
        } else if marks.contains(Marks::COMPARING) {
            filled(self.compare)
        } else if marks.intersects(Marks::NEW | Marks::FOUND) {
            filled(self.success)
        } else if marks.intersects(Marks::SEARCHING | Marks::PEEKING | Marks::HIGHLIGHTED) {
            filled(self.primary)
        } else if marks.contains(Marks::POINTER) {
            filled(self.pointer)
        } else if marks.contains(Marks::SORTED) {
            Style::default().fg(self.success)
        } else if marks.contains(Marks::VISITED) {
            Style::default().fg(self.visited)
        } else if marks.contains(Marks::ACTIVE) {
            Style::default().fg(self.comment)
        } else {
            Style::default().fg(self.fg)
        };

        if marks.intersects(Marks::FOUND | Marks::NEW) {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Style of pointer labels (`top`, `front`, `head`...) under the cells
    pub fn label_style(&self) -> Style {
        Style::default().fg(self.secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deleting_wins_over_highlight() {
        let style = DEFAULT_THEME.mark_style(Marks::DELETING | Marks::HIGHLIGHTED);
        assert_eq!(style.bg, Some(DEFAULT_THEME.error));
    }

    #[test]
    fn test_plain_element_has_no_background() {
        let style = DEFAULT_THEME.mark_style(Marks::TOP);
        assert_eq!(style.bg, None);
        assert_eq!(style.fg, Some(DEFAULT_THEME.fg));
    }
}
