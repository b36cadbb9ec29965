//! Widget components for the TUI

mod editor;
mod examples_list;
mod header;
mod help;
mod output;
mod status_bar;
mod tabs;

pub use editor::EditorPane;
pub use examples_list::ExamplesList;
pub use header::MainHeader;
pub use help::{HelpView, KEY_BINDINGS};
pub use output::OutputPane;
pub use status_bar::StatusBar;
pub use tabs::ViewTabs;
