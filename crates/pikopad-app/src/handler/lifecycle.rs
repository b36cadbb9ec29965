//! Start and VM initialization outcome

use pikopad_core::prelude::*;
use pikopad_core::{VmStatus, MSG_LOAD_FAILED};
use pikopad_vm::ModuleHandle;

use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

/// Begin VM initialization. Only the first `Start` has an effect.
pub fn handle_start(state: &mut AppState) -> UpdateResult {
    if state.started {
        warn!("Ignoring repeated start");
        return UpdateResult::none();
    }

    state.started = true;
    state.vm_status = VmStatus::Loading;
    info!("Starting VM initialization");
    UpdateResult::action(UpdateAction::InitializeVm)
}

/// Store the module and construct the VM instance
pub fn handle_module_loaded(state: &mut AppState, module: ModuleHandle) {
    if !state.vm_status.is_loading() {
        warn!("Ignoring VM module after initialization finished");
        return;
    }

    state.examples.set_names(module.example_names());
    let instance = module.instantiate();
    // The catalog stays usable even when instantiation fails
    state.module = Some(module);

    match instance {
        Ok(vm) => {
            state.vm = Some(vm);
            state.vm_status = VmStatus::Ready;
            info!(
                "VM ready ({} examples available)",
                state.examples.names.len()
            );
        }
        Err(e) => fail(state, e.to_string()),
    }
}

pub fn handle_load_failed(state: &mut AppState, reason: String) {
    if !state.vm_status.is_loading() {
        warn!("Ignoring VM load failure after initialization finished");
        return;
    }
    fail(state, reason);
}

/// Terminal for the session: no retry is scheduled
fn fail(state: &mut AppState, reason: String) {
    error!("VM initialization failed: {}", reason);
    state.output = MSG_LOAD_FAILED.to_string();
    state.vm_status = VmStatus::Failed { reason };
}
