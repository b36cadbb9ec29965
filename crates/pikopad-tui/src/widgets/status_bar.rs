//! Status bar widget

use pikopad_app::AppState;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// VM status on the left, view and cursor position on the right
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (icon, icon_style) =
            styles::vm_status_indicator(&self.state.vm_status, self.state.tick_count);

        let mut left = vec![
            Span::raw(" "),
            Span::styled(icon, icon_style),
            Span::raw(" "),
            Span::styled(self.state.vm_status.label(), styles::text_secondary()),
        ];
        if let pikopad_core::VmStatus::Failed { reason } = &self.state.vm_status {
            left.push(Span::styled(format!(": {}", reason), styles::status_red()));
        }
        Paragraph::new(Line::from(left)).render(area, buf);

        let (line, column) = self.state.focused_buffer().cursor_position();
        let right = Line::from(vec![
            Span::styled(self.state.views.active().label(), styles::accent()),
            Span::styled(
                format!("  Ln {}, Col {} ", line + 1, column + 1),
                styles::text_muted(),
            ),
        ]);
        Paragraph::new(right)
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}
