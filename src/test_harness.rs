//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend, ManualClock>` so tests can press keys, scroll
//! the wheel, drag, resize and advance time frame by frame.

use crate::config::ResolvedConfig;
use crate::frame::ManualClock;
use crate::model::PlacardRecord;
use crate::source::InputSource;
use crate::surface::{RecordingSurface, SharedSurface};
use crate::view::{TuiApp, TuiError};
use chrono::DateTime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::cell::RefCell;
use std::rc::Rc;

/// Frame interval used when advancing time.
pub const FRAME_MS: f64 = 16.0;

/// Clock origin for every harness.
pub const START_MS: f64 = 10_000.0;

/// Convert a ratatui buffer to a string, one line per row.
///
/// Trailing spaces and empty trailing lines are removed.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        lines.push(line.trim_end().to_string());
    }
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend, ManualClock>,
    clock: ManualClock,
    surface: Rc<RefCell<RecordingSurface>>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Generated records (fixed dates) in an 80x24 terminal.
    pub fn generated(pages: u32, seed: u64) -> Result<Self, TuiError> {
        Self::generated_with(pages, seed, 80, 24, ResolvedConfig::default())
    }

    /// Generated records with custom terminal size and config.
    pub fn generated_with(
        pages: u32,
        seed: u64,
        width: u16,
        height: u16,
        config: ResolvedConfig,
    ) -> Result<Self, TuiError> {
        let source = InputSource::Generated { pages, seed };
        let now = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap_or_default();
        let records = source.load(now)?;
        Self::with_records(records, source, width, height, config)
    }

    /// Explicit records.
    pub fn with_records(
        records: Vec<PlacardRecord>,
        source: InputSource,
        width: u16,
        height: u16,
        config: ResolvedConfig,
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let clock = ManualClock::new(START_MS);
        let surface = RecordingSurface::shared();
        let shared: SharedSurface = surface.clone();
        let mut app = TuiApp::new_for_test(terminal, clock.clone(), shared, records, source, &config)?;
        app.render_test()?;

        Ok(Self {
            app,
            clock,
            surface,
            running: true,
        })
    }

    /// The app under test.
    pub fn app(&self) -> &TuiApp<TestBackend, ManualClock> {
        &self.app
    }

    /// The listener registry the viewport attaches to.
    pub fn surface(&self) -> &Rc<RefCell<RecordingSurface>> {
        &self.surface
    }

    /// Current viewport offset.
    pub fn scroll_top(&self) -> f64 {
        self.app.viewport().scroll_top()
    }

    /// Press a key. Quit keys stop the harness.
    pub fn send_key(&mut self, code: KeyCode) {
        self.send_key_with(code, KeyModifiers::NONE);
    }

    /// Press a key with modifiers.
    pub fn send_key_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if self.app.handle_key_test(KeyEvent::new(code, modifiers)) {
            self.running = false;
        }
    }

    fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// One wheel notch down at a cell.
    pub fn wheel_down_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::ScrollDown, column, row);
    }

    /// One wheel notch up at a cell.
    pub fn wheel_up_at(&mut self, column: u16, row: u16) {
        self.mouse(MouseEventKind::ScrollUp, column, row);
    }

    /// Press, drag and release the left button along a column.
    pub fn drag(&mut self, column: u16, from_row: u16, to_row: u16) {
        self.mouse(MouseEventKind::Down(MouseButton::Left), column, from_row);
        self.mouse(MouseEventKind::Drag(MouseButton::Left), column, to_row);
        self.mouse(MouseEventKind::Up(MouseButton::Left), column, to_row);
    }

    /// Resize the terminal and notify the app.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.app.handle_resize_test(width, height);
    }

    /// Advance the clock by `ms` and run one frame.
    pub fn advance(&mut self, ms: f64) -> Result<bool, TuiError> {
        self.clock.advance(ms);
        self.app.frame_test()
    }

    /// Run frames until no frame work is pending (bounded).
    pub fn settle(&mut self) -> Result<(), TuiError> {
        for _ in 0..200 {
            if !self.app.viewport().has_pending_frames() {
                break;
            }
            self.advance(FRAME_MS)?;
        }
        Ok(())
    }

    /// Render and return the screen contents.
    pub fn render(&mut self) -> Result<String, TuiError> {
        self.app.render_test()?;
        Ok(buffer_to_string(self.app.terminal().backend().buffer()))
    }

    /// False once a quit key was pressed.
    pub fn is_running(&self) -> bool {
        self.running
    }
}
