//! Semantic style builders

use pikopad_core::VmStatus;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection ---
pub fn selected_highlight() -> Style {
    Style::default()
        .fg(palette::SELECTED_FG)
        .bg(palette::SELECTED_BG)
        .add_modifier(Modifier::BOLD)
}

// --- Blocks ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Spinner frames shown while the VM loads
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Icon and style for the VM status indicator
pub fn vm_status_indicator(status: &VmStatus, tick: u64) -> (&'static str, Style) {
    match status {
        VmStatus::Loading => {
            let frame = SPINNER[(tick as usize / 2) % SPINNER.len()];
            (frame, Style::default().fg(palette::STATUS_YELLOW))
        }
        VmStatus::Ready => ("●", Style::default().fg(palette::STATUS_GREEN)),
        VmStatus::Failed { .. } => ("✗", status_red()),
    }
}
