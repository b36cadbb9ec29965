//! Key binding reference

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::styles;

/// `(keys, description)` rows shown in the help view
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("F5 / Ctrl+R", "Run the program"),
    ("F1", "Code view"),
    ("F2", "Examples view"),
    ("F3", "Help view"),
    ("Ctrl+Q / Ctrl+C", "Quit"),
    ("Esc", "Back to code view"),
    ("↑ ↓ / j k", "Select example"),
    ("Enter", "Load selected example"),
    ("F4", "Switch between source and program input"),
    ("Tab", "Indent by four spaces"),
];

pub struct HelpView;

impl Widget for HelpView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Help ");
        let inner = block.inner(area);
        block.render(area, buf);

        let key_width = KEY_BINDINGS
            .iter()
            .map(|(keys, _)| keys.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = vec![
            Line::styled(
                "Write Piko programs in the code view and run them.",
                styles::text_secondary(),
            ),
            Line::default(),
        ];
        lines.extend(KEY_BINDINGS.iter().map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("  {:<width$}  ", keys, width = key_width), styles::keybinding()),
                Span::styled(*description, styles::text_primary()),
            ])
        }));

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_lists_every_binding() {
        let mut term = TestTerminal::new();
        term.render_widget(HelpView, term.area());

        for (keys, description) in KEY_BINDINGS {
            assert!(term.buffer_contains(keys), "missing {}", keys);
            assert!(term.buffer_contains(description), "missing {}", description);
        }
    }
}
