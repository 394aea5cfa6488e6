//! TUI rendering and terminal management (impure shell)

mod record_list;
mod status_bar;
pub mod terminal_surface;

pub use record_list::RecordList;
pub use status_bar::StatusBar;
pub use terminal_surface::TerminalSurface;

use crate::config::{KeyBindings, ResolvedConfig};
use crate::frame::{Clock, SystemClock};
use crate::model::{KeyAction, PlacardRecord};
use crate::source::InputSource;
use crate::state::Viewport;
use crate::surface::SharedSurface;
use crate::view_state::RecordLayout;
use chrono::Utc;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, trace, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),
}

/// Split the frame into the viewport area and the status line.
///
/// A fixed `viewport_height` caps the viewport; the rest stays blank. The
/// terminal caps it in turn, so the returned content area is what the
/// viewport can actually show.
pub fn split_area(area: Rect, viewport_height: Option<u16>) -> (Rect, Rect) {
    let [mut content, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    if let Some(height) = viewport_height {
        content.height = content.height.min(height);
    }
    (content, status)
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend, and over the
/// clock so tests can drive animation frames by hand.
pub struct TuiApp<B, C = SystemClock>
where
    B: Backend,
    C: Clock,
{
    terminal: Terminal<B>,
    viewport: Viewport<C>,
    records: Vec<PlacardRecord>,
    layout: RecordLayout,
    source: InputSource,
    key_bindings: KeyBindings,
    wheel_delta: f64,
    frame_interval: Duration,
    viewport_height: Option<u16>,
    /// Last rendered viewport area (for mouse hit testing)
    content_area: Rect,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen. Mouse capture is
    /// switched on by the viewport's page registration when it mounts.
    pub fn new(source: InputSource, config: &ResolvedConfig) -> Result<Self, TuiError> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        // Load records before the first frame
        let records = source.load(Utc::now())?;
        info!(records = records.len(), ?source, "records loaded");

        let surface: SharedSurface = TerminalSurface::shared(io::stdout());
        Self::assemble(terminal, SystemClock::new(), surface, records, source, config)
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Each iteration waits at most one frame
    /// interval for input, then runs due frame work and redraws if anything
    /// changed.
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Initial render
        self.draw()?;

        loop {
            let mut dirty = false;
            // Wait at most one frame for input
            if event::poll(self.frame_interval)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        self.handle_resize(width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            // Run due animation/measurement work, redraw only on change
            if self.viewport.tick() || dirty {
                self.draw()?;
            }
        }
    }
}

impl<B, C> TuiApp<B, C>
where
    B: Backend,
    C: Clock,
{
    fn assemble(
        terminal: Terminal<B>,
        clock: C,
        surface: SharedSurface,
        records: Vec<PlacardRecord>,
        source: InputSource,
        config: &ResolvedConfig,
    ) -> Result<Self, TuiError> {
        // Same split the first draw will use
        let size = terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width.max(1), size.height);
        let (content_area, _) = split_area(frame_area, config.viewport_height);
        let layout = RecordLayout::new(&records, content_area.width);

        let mut viewport = Viewport::new(layout.total() as f64, clock)
            .config(config.scroll)
            .surface(surface);
        // a fixed height never exceeds what the terminal can draw
        if config.viewport_height.is_some() {
            viewport = viewport.height(f64::from(content_area.height.max(1)));
        }
        viewport.mount();
        // auto height: measure the first frame before the first draw
        viewport.observe_resize(f64::from(content_area.height));
        viewport.tick();

        Ok(Self {
            terminal,
            viewport,
            records,
            layout,
            source,
            key_bindings: KeyBindings::default(),
            wheel_delta: config.wheel_delta,
            frame_interval: Duration::from_millis(config.frame_interval_ms),
            viewport_height: config.viewport_height,
            content_area,
        })
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Some terminals report releases too; act on press/repeat only
        if key.kind == KeyEventKind::Release {
            return false;
        }

        // Map key to action via bindings
        match self.key_bindings.get(key) {
            Some(KeyAction::Quit) => return true,
            Some(KeyAction::ScrollUp) => {
                self.viewport.handle_key(KeyCode::Up);
            }
            Some(KeyAction::ScrollDown) => {
                self.viewport.handle_key(KeyCode::Down);
            }
            Some(KeyAction::Reload) => self.reload(),
            None => trace!(?key, "unbound key"),
        }
        false
    }

    /// Route wheel and left-button drag events to the viewport.
    ///
    /// Wheel events only count inside the viewport; a drag that started
    /// inside keeps tracking wherever the pointer goes.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let inside = self
            .content_area
            .contains(Position::new(mouse.column, mouse.row));
        let (x, y) = (f64::from(mouse.column), f64::from(mouse.row));

        match mouse.kind {
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp if inside => {
                let delta = if mouse.kind == MouseEventKind::ScrollDown {
                    self.wheel_delta
                } else {
                    -self.wheel_delta
                };
                let response = self.viewport.handle_wheel(delta);
                trace!(
                    delta,
                    ?response,
                    intercepted = self.viewport.intercepts_page_scroll(inside),
                    "wheel"
                );
            }
            MouseEventKind::Down(MouseButton::Left) if inside => {
                self.viewport.touch_start(x, y);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.viewport.touch_move(x, y);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.viewport.touch_end();
            }
            _ => {}
        }
    }

    /// Relayout for the new width and report the new viewport height.
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!(width, height, "terminal resized");
        let frame_area = Rect::new(0, 0, width.max(1), height);
        let (content_area, _) = split_area(frame_area, self.viewport_height);
        self.content_area = content_area;

        if content_area.width != self.layout.width() {
            self.relayout();
        }
        if self.viewport_height.is_some() {
            // re-cap the fixed height to the new terminal size
            self.viewport
                .set_height(Some(f64::from(content_area.height.max(1))));
        } else {
            self.viewport.observe_resize(f64::from(content_area.height));
        }
    }

    /// Reload records: generated sources move to the next seed.
    ///
    /// A failing reload keeps the current records.
    fn reload(&mut self) {
        let next = self.source.reloaded();
        match next.load(Utc::now()) {
            Ok(records) => {
                info!(records = records.len(), source = ?next, "records reloaded");
                self.source = next;
                self.records = records;
                self.relayout();
            }
            Err(err) => warn!(error = %err, "reload failed; keeping current records"),
        }
    }

    fn relayout(&mut self) {
        self.layout = RecordLayout::new(&self.records, self.content_area.width);
        self.viewport.set_scroll_height(self.layout.total() as f64);
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        // Offsets are fractional mid-animation; rows are whole
        let scroll_top = self.viewport.scroll_top().max(0.0).floor() as usize;
        let snapshot = self.viewport.snapshot();
        let animating = self.viewport.is_animating();
        let viewport_height = self.viewport_height;
        let layout = &self.layout;
        let mut content_area = self.content_area;

        self.terminal.draw(|frame| {
            let (content, status) = split_area(frame.area(), viewport_height);
            content_area = content;
            frame.render_widget(RecordList::new(layout, scroll_top), content);
            frame.render_widget(StatusBar::new(snapshot, animating, layout.len()), status);
        })?;

        // Remember the drawn area for mouse hit testing
        self.content_area = content_area;
        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
#[allow(dead_code)]
impl<B, C> TuiApp<B, C>
where
    B: Backend,
    C: Clock,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        clock: C,
        surface: SharedSurface,
        records: Vec<PlacardRecord>,
        source: InputSource,
        config: &ResolvedConfig,
    ) -> Result<Self, TuiError> {
        Self::assemble(terminal, clock, surface, records, source, config)
    }

    pub(crate) fn viewport(&self) -> &Viewport<C> {
        &self.viewport
    }

    pub(crate) fn layout(&self) -> &RecordLayout {
        &self.layout
    }

    pub(crate) fn source(&self) -> &InputSource {
        &self.source
    }

    pub(crate) fn content_area(&self) -> Rect {
        self.content_area
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    pub(crate) fn handle_resize_test(&mut self, width: u16, height: u16) {
        self.handle_resize(width, height)
    }

    /// Run one paint tick at the app clock, then draw.
    pub(crate) fn frame_test(&mut self) -> Result<bool, TuiError> {
        let changed = self.viewport.tick();
        self.draw()?;
        Ok(changed)
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit. Logging must be initialized by the caller.
pub fn run_with_source(source: InputSource, config: &ResolvedConfig) -> Result<(), TuiError> {
    // the app (and its viewport's mouse capture) is dropped before restoring
    let result = match TuiApp::new(source, config) {
        Ok(mut app) => app.run(),
        Err(err) => Err(err),
    };

    restore_terminal()?;
    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    // Reverse of TuiApp::new: raw mode off, leave alternate screen
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn split_area_reserves_status_line() {
        let (content, status) = split_area(Rect::new(0, 0, 80, 24), None);
        assert_eq!(content, Rect::new(0, 0, 80, 23));
        assert_eq!(status, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn split_area_caps_fixed_height() {
        let (content, status) = split_area(Rect::new(0, 0, 80, 24), Some(10));
        assert_eq!(content.height, 10);
        assert_eq!(status.y, 23);

        let (content, _) = split_area(Rect::new(0, 0, 80, 5), Some(10));
        assert_eq!(content.height, 4);
    }
}
