//! Field Widget
//!
//! A single-line labeled value. A focused field shows a trailing cursor and
//! keeps the tail of the value visible once it grows past the row.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme;

/// Label column width, in cells
pub const LABEL_WIDTH: u16 = 16;

/// A labeled single-line input or read-only value
pub struct Field<'a> {
    label: &'a str,
    value: &'a str,
    focused: bool,
    value_style: Style,
}

impl<'a> Field<'a> {
    pub fn new(label: &'a str, value: &'a str) -> Self {
        Self {
            label,
            value,
            focused: false,
            value_style: Style::default().fg(theme::INPUT_WHITE),
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn value_style(mut self, style: Style) -> Self {
        self.value_style = style;
        self
    }
}

impl Widget for Field<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 || area.width <= LABEL_WIDTH {
            return;
        }

        let label_budget = LABEL_WIDTH as usize - 1;
        buf.set_string(
            area.x,
            area.y,
            head_fitting(self.label, label_budget),
            Style::default().fg(theme::DIM_GRAY),
        );

        let value_x = area.x + LABEL_WIDTH;
        let budget =
            ((area.width - LABEL_WIDTH) as usize).saturating_sub(usize::from(self.focused));
        let shown = tail_fitting(self.value, budget);
        buf.set_string(value_x, area.y, shown, self.value_style);

        if self.focused {
            let cursor_x = value_x + shown.width() as u16;
            buf.set_string(
                cursor_x,
                area.y,
                "_",
                Style::default().fg(theme::ACCENT_AMBER),
            );
        }
    }
}

/// Longest prefix of `s` that fits in `budget` display columns
fn head_fitting(s: &str, budget: usize) -> &str {
    let mut width = 0;
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        end = idx + c.len_utf8();
    }
    &s[..end]
}

/// Longest suffix of `s` that fits in `budget` display columns
fn tail_fitting(s: &str, budget: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        width += w;
        start = idx;
    }
    &s[start..]
}
