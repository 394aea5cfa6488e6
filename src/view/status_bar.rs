//! One-line status: offset, record count, animation state and key hints.

use crate::model::ScrollSnapshot;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

const HINTS: &str = "↑↓/jk scroll · r reload · q quit";

/// Status line widget.
#[derive(Debug, Clone, Copy)]
pub struct StatusBar {
    snapshot: ScrollSnapshot,
    animating: bool,
    records: usize,
}

impl StatusBar {
    /// Describe the viewport state.
    pub fn new(snapshot: ScrollSnapshot, animating: bool, records: usize) -> Self {
        Self {
            snapshot,
            animating,
            records,
        }
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![Span::raw(format!(
            " {:.0}/{:.0} · {} records",
            self.snapshot.scroll_top,
            self.snapshot.max_scroll_top(),
            self.records
        ))];
        if self.animating {
            spans.push(Span::styled(
                " · animating",
                Style::default().add_modifier(Modifier::ITALIC),
            ));
        }
        spans.push(Span::raw("  "));
        spans.push(Span::styled(HINTS, Style::default().add_modifier(Modifier::DIM)));

        Paragraph::new(Line::from(spans))
            .style(Style::default().add_modifier(Modifier::REVERSED))
            .render(area, buf);
    }
}
