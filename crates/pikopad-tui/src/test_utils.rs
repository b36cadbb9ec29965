//! Test utilities for TUI rendering verification
//!
//! Widgets and full frames are rendered into ratatui's `TestBackend` and
//! inspected cell by cell.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Wrapper around a `TestBackend` terminal
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// 80x24 terminal
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// 40x12 terminal
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draw a full frame, e.g. with `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        (0..self.buffer().area.height).any(|y| self.line_content(y).contains(text))
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        self.line_content(line).contains(text)
    }

    /// Column where `text` starts on `line`
    pub fn find_in_line(&self, line: u16, text: &str) -> Option<u16> {
        let buffer = self.buffer();
        if line >= buffer.area.height {
            return None;
        }
        (0..buffer.area.width).find(|&x| {
            let rest: String = (x..buffer.area.width)
                .map(|cx| buffer[(cx, line)].symbol())
                .collect();
            rest.starts_with(text)
        })
    }

    /// Text of a single line
    pub fn line_content(&self, line: u16) -> String {
        let buffer = self.buffer();
        if line >= buffer.area.height {
            return String::new();
        }
        (0..buffer.area.width)
            .map(|x| buffer[(x, line)].symbol())
            .collect()
    }

    /// Terminal cursor position after the last draw
    pub fn cursor(&mut self) -> (u16, u16) {
        let position = self
            .terminal
            .get_cursor_position()
            .expect("Failed to get cursor position");
        (position.x, position.y)
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}
