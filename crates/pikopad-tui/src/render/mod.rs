//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use pikopad_app::{AppState, EditorFocus};
use pikopad_core::ViewId;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};

/// Shown next to the title in the header
const SUBTITLE: &str = "Piko playground";

/// Render the complete UI (View function in TEA)
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(widgets::MainHeader::new(Some(SUBTITLE)), areas.header);
    frame.render_widget(widgets::ViewTabs::new(&state.views), areas.tabs);

    match state.views.active() {
        ViewId::Code => render_code_view(frame, areas.body, state),
        ViewId::Examples => frame.render_widget(
            widgets::ExamplesList::new(&state.examples, &state.vm_status),
            areas.body,
        ),
        ViewId::Help => frame.render_widget(widgets::HelpView, areas.body),
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.status);
}

fn render_code_view(frame: &mut Frame, body: ratatui::layout::Rect, state: &AppState) {
    let code = layout::split_code_view(body);

    let editing_input = state.focus == EditorFocus::Input;
    let editor = widgets::EditorPane::new(&state.editor).focused(!editing_input);
    let input = widgets::EditorPane::program_input(&state.program_input).focused(editing_input);
    let cursor = if editing_input {
        input.cursor(code.input)
    } else {
        editor.cursor(code.editor)
    };
    frame.render_widget(editor, code.editor);
    frame.render_widget(input, code.input);

    frame.render_widget(
        widgets::OutputPane::new(&state.output)
            .outcome(state.last_outcome.as_ref())
            .failed(matches!(
                state.vm_status,
                pikopad_core::VmStatus::Failed { .. }
            ) && state.last_outcome.is_none()),
        code.output,
    );

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}
