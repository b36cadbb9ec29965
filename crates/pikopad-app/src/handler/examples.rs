//! Load example programs into the editor

use pikopad_core::prelude::*;
use pikopad_core::ViewId;

use crate::state::{AppState, EditorFocus};

/// Replace the source text with the named example and return to the code view.
///
/// Unknown names and a missing module leave the state untouched. Returns
/// whether an example was loaded.
pub fn load_example(state: &mut AppState, name: &str) -> bool {
    let Some(module) = state.module.as_ref() else {
        debug!("Example '{}' requested before VM module loaded", name);
        return false;
    };

    match module.get_example(name) {
        Some(source) => {
            state.editor.set_text(source);
            state.focus = EditorFocus::Source;
            state.views.activate(ViewId::Code);
            debug!("Loaded example '{}'", name);
            true
        }
        None => {
            debug!("No example named '{}'", name);
            false
        }
    }
}
