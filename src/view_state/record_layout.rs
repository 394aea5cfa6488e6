//! Row layout of placard records at a given terminal width.
//!
//! Each record renders as one header row, its content wrapped to the width,
//! and one blank separator row. One row is one scroll unit, so the layout
//! total is the viewport's `scroll_height`.

use crate::model::PlacardRecord;
use crate::view_state::height_index::HeightIndex;
use unicode_width::UnicodeWidthChar;

/// A record's rows, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRows {
    /// Header text: id, sender, type and date.
    pub header: String,
    /// Announcement type, used for styling.
    pub kind: u8,
    /// Content wrapped to the layout width.
    pub body: Vec<String>,
}

impl RecordRows {
    fn height(&self) -> usize {
        self.body.len() + 2
    }
}

/// One visible terminal row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    /// First row of a record.
    Header {
        /// Header text.
        text: &'a str,
        /// Announcement type.
        kind: u8,
    },
    /// A wrapped content row.
    Body(&'a str),
    /// Blank row after a record.
    Separator,
}

/// Rows of every record plus a height index over them.
#[derive(Debug, Clone, Default)]
pub struct RecordLayout {
    width: u16,
    records: Vec<RecordRows>,
    index: HeightIndex,
}

/// Greedy wrap by display width; every row holds at least one character.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(ch);
        used += w;
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

fn header_for(record: &PlacardRecord) -> String {
    let date = record
        .sent_at()
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!("#{} {} [{}] {}", record.id, record.sender, record.kind, date)
}

impl RecordLayout {
    /// Lay out `records` for a terminal `width` columns wide.
    pub fn new(records: &[PlacardRecord], width: u16) -> Self {
        let records: Vec<RecordRows> = records
            .iter()
            .map(|record| RecordRows {
                header: header_for(record),
                kind: record.kind,
                body: wrap_text(&record.content, width),
            })
            .collect();
        let index = HeightIndex::from_heights(records.iter().map(RecordRows::height));
        Self {
            width,
            records,
            index,
        }
    }

    /// Width the layout was computed for.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True with no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Total rows.
    pub fn total(&self) -> usize {
        self.index.total()
    }

    /// Record and row-within-record at absolute row `offset`.
    pub fn record_at(&self, offset: usize) -> Option<(usize, usize)> {
        let index = self.index.lower_bound(offset)?;
        Some((index, offset - self.index.start_of(index)))
    }

    /// Up to `height` rows starting at absolute row `scroll_top`.
    pub fn visible_rows(&self, scroll_top: usize, height: usize) -> Vec<Row<'_>> {
        let mut rows = Vec::with_capacity(height);
        let Some((first, mut skip)) = self.record_at(scroll_top) else {
            return rows;
        };

        for record in &self.records[first..] {
            let record_rows = std::iter::once(Row::Header {
                text: &record.header,
                kind: record.kind,
            })
            .chain(record.body.iter().map(|line| Row::Body(line)))
            .chain(std::iter::once(Row::Separator));

            for row in record_rows.skip(skip) {
                if rows.len() == height {
                    return rows;
                }
                rows.push(row);
            }
            skip = 0;
        }
        rows
    }
}
