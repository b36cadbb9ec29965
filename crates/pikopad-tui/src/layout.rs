//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the code view stacks editor above output
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 90;

/// Height of the program input pane below the editor (bordered)
const INPUT_HEIGHT: u16 = 5;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar with key hints
    pub header: Rect,
    /// View selectors
    pub tabs: Rect,
    /// Active view content
    pub body: Rect,
    /// VM status and cursor position
    pub status: Rect,
}

/// Areas inside the code view
#[derive(Debug, Clone, Copy)]
pub struct CodeAreas {
    pub editor: Rect,
    pub input: Rect,
    pub output: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (bordered)
        Constraint::Length(1), // Tabs
        Constraint::Min(3),    // Body
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        tabs: chunks[1],
        body: chunks[2],
        status: chunks[3],
    }
}

/// Split the code view into editor, program input and output panes
pub fn split_code_view(body: Rect) -> CodeAreas {
    let chunks = if body.width >= SIDE_BY_SIDE_MIN_WIDTH {
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(body)
    } else {
        Layout::vertical([Constraint::Percentage(60), Constraint::Percentage(40)]).split(body)
    };

    let editing = Layout::vertical([Constraint::Min(3), Constraint::Length(INPUT_HEIGHT)])
        .split(chunks[0]);

    CodeAreas {
        editor: editing[0],
        input: editing[1],
        output: chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let layout = create(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.tabs.height, 1);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.body.height, 19); // 24 - 3 - 1 - 1
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_code_view_side_by_side_on_wide_terminal() {
        let areas = split_code_view(Rect::new(0, 0, 120, 20));
        assert_eq!(areas.editor.y, areas.output.y);
        assert_eq!(areas.editor.width, 72);
        assert_eq!(areas.output.width, 48);
        assert_eq!(areas.editor.height, 15);
        assert_eq!(areas.input.height, 5);
        assert_eq!(areas.input.y, 15);
    }

    #[test]
    fn test_code_view_stacked_on_narrow_terminal() {
        let areas = split_code_view(Rect::new(0, 0, 80, 20));
        assert_eq!(areas.editor.x, areas.output.x);
        assert_eq!(areas.editor.height, 7);
        assert_eq!(areas.input.height, 5);
        assert_eq!(areas.output.y, 12);
        assert_eq!(areas.output.height, 8);
    }
}
