//! Example catalog list

use pikopad_app::ExampleListState;
use pikopad_core::VmStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use crate::theme::styles;

/// Selectable list of example names
pub struct ExamplesList<'a> {
    examples: &'a ExampleListState,
    vm_status: &'a VmStatus,
}

impl<'a> ExamplesList<'a> {
    pub fn new(examples: &'a ExampleListState, vm_status: &'a VmStatus) -> Self {
        Self {
            examples,
            vm_status,
        }
    }
}

impl Widget for ExamplesList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(true).title(" Examples ").title_bottom(
            Line::styled(" ↑↓ select · Enter load · Esc back ", styles::text_muted()),
        );
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.examples.names.is_empty() {
            let message = if self.vm_status.is_loading() {
                "Loading examples…"
            } else {
                "No examples available"
            };
            Paragraph::new(message)
                .style(styles::text_muted())
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .examples
            .names
            .iter()
            .map(|name| ListItem::new(name.as_str()))
            .collect();

        let list = List::new(items)
            .style(styles::text_primary())
            .highlight_style(styles::selected_highlight())
            .highlight_symbol("▶ ");

        let mut state = ListState::default().with_selected(Some(self.examples.selected));
        StatefulWidget::render(list, inner, buf, &mut state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn list(names: &[&str], selected: usize) -> ExampleListState {
        ExampleListState {
            names: names.iter().map(|n| n.to_string()).collect(),
            selected,
        }
    }

    #[test]
    fn test_renders_names_with_selection_marker() {
        let examples = list(&["fib", "hello", "loops"], 1);
        let mut term = TestTerminal::new();
        term.render_widget(
            ExamplesList::new(&examples, &VmStatus::Ready),
            Rect::new(0, 0, 40, 8),
        );

        assert!(term.buffer_contains("fib"));
        assert!(term.line_contains(2, "▶ hello"));
        assert!(!term.line_contains(1, "▶"));
    }

    #[test]
    fn test_empty_catalog_messages() {
        let examples = ExampleListState::default();

        let mut term = TestTerminal::new();
        term.render_widget(
            ExamplesList::new(&examples, &VmStatus::Loading),
            Rect::new(0, 0, 40, 6),
        );
        assert!(term.buffer_contains("Loading examples"));

        let mut term = TestTerminal::new();
        term.render_widget(
            ExamplesList::new(&examples, &VmStatus::Ready),
            Rect::new(0, 0, 40, 6),
        );
        assert!(term.buffer_contains("No examples available"));
    }
}
