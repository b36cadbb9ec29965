//! Text input panes: the source editor and the program input

use pikopad_app::SourceBuffer;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::theme::{palette, styles};

const SOURCE_TITLE: &str = " Source ";
const SOURCE_PLACEHOLDER: &str = "Type a program, then press F5 to run it";

const INPUT_TITLE: &str = " Input (F4) ";
const INPUT_PLACEHOLDER: &str = "Lines read by (i ...); press F4 to edit";

/// Line-numbered view of a text buffer that keeps the cursor line visible
pub struct EditorPane<'a> {
    buffer: &'a SourceBuffer,
    focused: bool,
    title: &'static str,
    placeholder: &'static str,
}

impl<'a> EditorPane<'a> {
    /// Pane for the program source
    pub fn new(buffer: &'a SourceBuffer) -> Self {
        Self {
            buffer,
            focused: false,
            title: SOURCE_TITLE,
            placeholder: SOURCE_PLACEHOLDER,
        }
    }

    /// Pane for the program input
    pub fn program_input(buffer: &'a SourceBuffer) -> Self {
        Self {
            title: INPUT_TITLE,
            placeholder: INPUT_PLACEHOLDER,
            ..Self::new(buffer)
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn block(&self) -> ratatui::widgets::Block<'static> {
        styles::glass_block(self.focused).title(self.title)
    }

    /// Width of the line-number gutter including its trailing space
    fn gutter_width(&self) -> u16 {
        let lines = self.buffer.text().split('\n').count();
        lines.to_string().len().max(2) as u16 + 1
    }

    /// First visible line for a viewport of `height` rows
    fn scroll_offset(&self, height: u16) -> usize {
        let (line, _) = self.buffer.cursor_position();
        line.saturating_sub(height.saturating_sub(1) as usize)
    }

    /// Terminal position of the cursor when rendered into `area`.
    ///
    /// `None` when the cursor falls outside the visible text area.
    pub fn cursor(&self, area: Rect) -> Option<(u16, u16)> {
        let inner = self.block().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }

        let (line, column) = self.buffer.cursor_position();
        let row = line - self.scroll_offset(inner.height);

        let text = self.buffer.text().split('\n').nth(line).unwrap_or("");
        let width: usize = text
            .chars()
            .take(column)
            .map(|c| c.width().unwrap_or(0))
            .sum();

        let x = inner.x as usize + self.gutter_width() as usize + width;
        if x >= inner.right() as usize {
            return None;
        }
        Some((x as u16, inner.y + row as u16))
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.buffer.text().is_empty() {
            let gutter = " ".repeat(self.gutter_width() as usize);
            Paragraph::new(Line::from(vec![
                Span::raw(gutter),
                Span::styled(self.placeholder, styles::text_muted()),
            ]))
            .render(inner, buf);
            return;
        }

        let number_width = self.gutter_width() as usize - 1;
        let gutter_style = Style::default().fg(palette::GUTTER);
        let lines: Vec<Line> = self
            .buffer
            .text()
            .split('\n')
            .enumerate()
            .skip(self.scroll_offset(inner.height))
            .take(inner.height as usize)
            .map(|(i, text)| {
                Line::from(vec![
                    Span::styled(format!("{:>width$} ", i + 1, width = number_width), gutter_style),
                    Span::styled(text, styles::text_primary()),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
