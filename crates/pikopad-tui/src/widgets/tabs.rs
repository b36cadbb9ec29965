//! View selector tabs

use pikopad_app::ViewStateMachine;
use pikopad_core::ViewId;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Tabs, Widget},
};

use crate::theme::styles;

/// One selector per view, highlighted from the view state machine
pub struct ViewTabs<'a> {
    views: &'a ViewStateMachine,
}

impl<'a> ViewTabs<'a> {
    pub fn new(views: &'a ViewStateMachine) -> Self {
        Self { views }
    }
}

impl Widget for ViewTabs<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let titles = ViewId::ALL
            .iter()
            .map(|view| format!("F{} {}", view.index() + 1, view.label()));

        Tabs::new(titles)
            .select(self.views.active().index())
            .style(styles::text_secondary())
            .highlight_style(styles::selected_highlight())
            .divider("│")
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_all_selectors_rendered() {
        let mut term = TestTerminal::new();
        let views = ViewStateMachine::default();
        term.render_widget(ViewTabs::new(&views), Rect::new(0, 0, 80, 1));

        assert!(term.line_contains(0, "F1 Code"));
        assert!(term.line_contains(0, "F2 Examples"));
        assert!(term.line_contains(0, "F3 Help"));
    }

    #[test]
    fn test_only_active_selector_highlighted() {
        let mut term = TestTerminal::new();
        let views = ViewStateMachine::new(ViewId::Examples);
        term.render_widget(ViewTabs::new(&views), Rect::new(0, 0, 80, 1));

        let examples_x = term.find_in_line(0, "F2").unwrap();
        let code_x = term.find_in_line(0, "F1").unwrap();

        assert_eq!(term.buffer()[(examples_x, 0)].bg, palette::SELECTED_BG);
        assert_ne!(term.buffer()[(code_x, 0)].bg, palette::SELECTED_BG);
    }
}
