//! Output pane

use pikopad_app::ExecutionOutcome;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// Shows the text of the last run, or a status message
pub struct OutputPane<'a> {
    output: &'a str,
    outcome: Option<&'a ExecutionOutcome>,
    failed: bool,
}

impl<'a> OutputPane<'a> {
    pub fn new(output: &'a str) -> Self {
        Self {
            output,
            outcome: None,
            failed: false,
        }
    }

    /// Style according to the last run's outcome
    pub fn outcome(mut self, outcome: Option<&'a ExecutionOutcome>) -> Self {
        self.outcome = outcome;
        self
    }

    /// Render the text as an error regardless of outcome
    pub fn failed(mut self, failed: bool) -> Self {
        self.failed = failed;
        self
    }
}

impl Widget for OutputPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Output ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let style = match self.outcome {
            _ if self.failed => styles::status_red(),
            Some(ExecutionOutcome::Failed(_)) => styles::status_red(),
            Some(ExecutionOutcome::NoOutput) => styles::text_muted(),
            _ => styles::text_primary(),
        };

        // Keep the tail of long output in view
        let line_count = self.output.lines().count();
        let scroll = line_count.saturating_sub(inner.height as usize);

        Paragraph::new(self.output)
            .style(style)
            .wrap(Wrap { trim: false })
            .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
            .render(inner, buf);
    }
}
