//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

/// Main header showing the app title and the most used key bindings
pub struct MainHeader<'a> {
    subtitle: Option<&'a str>,
}

impl<'a> MainHeader<'a> {
    pub fn new(subtitle: Option<&'a str>) -> Self {
        Self { subtitle }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut title = vec![Span::styled("Pikopad", styles::accent_bold())];
        if let Some(subtitle) = self.subtitle {
            title.push(Span::styled(" · ", styles::text_muted()));
            title.push(Span::styled(subtitle, styles::text_secondary()));
        }
        Paragraph::new(Line::from(title)).render(inner, buf);

        let hints = Line::from(vec![
            Span::styled("[F5]", styles::keybinding()),
            Span::styled(" Run  ", styles::text_secondary()),
            Span::styled("[F1-F3]", styles::keybinding()),
            Span::styled(" Views  ", styles::text_secondary()),
            Span::styled("[Ctrl+Q]", styles::keybinding()),
            Span::styled(" Quit", styles::text_secondary()),
        ]);
        let hints_width = hints.width() as u16;
        let title_width = Line::from(title_text(self.subtitle)).width() as u16;

        // Hints only when they fit beside the title
        if inner.width > hints_width + title_width + 1 {
            let hints_area = Rect {
                x: inner.x + inner.width - hints_width,
                y: inner.y,
                width: hints_width,
                height: 1,
            };
            Paragraph::new(hints).render(hints_area, buf);
        }
    }
}

fn title_text(subtitle: Option<&str>) -> String {
    match subtitle {
        Some(subtitle) => format!("Pikopad · {}", subtitle),
        None => "Pikopad".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_header_renders_title_and_hints() {
        let mut term = TestTerminal::new();
        term.render_widget(MainHeader::new(Some("demo")), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("Pikopad"));
        assert!(term.buffer_contains("demo"));
        assert!(term.buffer_contains("[F5]"));
    }

    #[test]
    fn test_header_drops_hints_when_narrow() {
        let mut term = TestTerminal::compact();
        term.render_widget(MainHeader::new(Some("demo")), Rect::new(0, 0, 40, 3));

        assert!(term.buffer_contains("Pikopad"));
        assert!(!term.buffer_contains("[Ctrl+Q]"));
    }
}
