//! Widget drawing the visible slice of the record layout.

use crate::view_state::{RecordLayout, Row};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Widget;

/// The records visible at a scroll offset.
#[derive(Debug, Clone, Copy)]
pub struct RecordList<'a> {
    layout: &'a RecordLayout,
    scroll_top: usize,
}

impl<'a> RecordList<'a> {
    /// Show `layout` starting at row `scroll_top`.
    pub fn new(layout: &'a RecordLayout, scroll_top: usize) -> Self {
        Self { layout, scroll_top }
    }
}

fn header_style(kind: u8) -> Style {
    let color = if kind == 0 { Color::Cyan } else { Color::Yellow };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

impl Widget for RecordList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = usize::from(area.width);
        let rows = self
            .layout
            .visible_rows(self.scroll_top, usize::from(area.height));

        for (y, row) in (area.y..).zip(rows) {
            match row {
                Row::Header { text, kind } => {
                    buf.set_stringn(area.x, y, text, width, header_style(kind));
                }
                Row::Body(text) => {
                    buf.set_stringn(area.x, y, text, width, Style::default());
                }
                Row::Separator => {}
            }
        }
    }
}
