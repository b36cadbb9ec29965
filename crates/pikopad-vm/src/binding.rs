//! VM module contract
//!
//! The VM is an external collaborator. The controller only ever sees it
//! through these traits:
//!
//! - [`VmLoader`] asynchronously produces a module handle (the only
//!   suspension point in the system)
//! - [`VmModule`] is the loaded module: it owns the example catalog and
//!   constructs instances
//! - [`VmInstance`] executes source text synchronously, reads program input
//!   supplied up front and exposes the textual output of the last run

use std::sync::Arc;

use pikopad_core::prelude::*;

/// Shared handle to a loaded VM module
pub type ModuleHandle = Arc<dyn VmModule>;

/// Loads the VM module.
///
/// Implementations may fail; the controller treats any failure as terminal
/// for the session.
#[trait_variant::make(VmLoader: Send)]
pub trait LocalVmLoader {
    /// Load and link the module
    async fn load(&self) -> Result<ModuleHandle>;
}

/// A loaded VM module
pub trait VmModule: Send + Sync + std::fmt::Debug {
    /// Construct a VM instance
    fn instantiate(&self) -> Result<VmHandle>;

    /// Look up an example program by name. `None` when the name is unknown.
    fn get_example(&self, name: &str) -> Option<String>;

    /// Names of all examples in the catalog, in display order
    fn example_names(&self) -> Vec<String>;
}

/// A live VM instance
pub trait VmInstance: Send {
    /// Execute a program. Output is retrieved separately via [`get_output`].
    ///
    /// [`get_output`]: VmInstance::get_output
    fn execute(&mut self, source: &str) -> std::result::Result<(), ExecutionError>;

    /// Program input consumed by reads in later executions. Each execution
    /// reads it from the start; once it is exhausted reads see end of input.
    fn set_input(&mut self, _input: &str) {}

    /// Take the output of the last execution. `None` when there is none.
    fn get_output(&mut self) -> Option<String>;
}

/// Failure raised by the VM while executing a program.
///
/// The description is opaque to the controller; it is only ever rendered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{description}")]
pub struct ExecutionError {
    description: String,
}

impl ExecutionError {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Owning handle to an initialized VM instance
pub struct VmHandle {
    instance: Box<dyn VmInstance>,
}

impl VmHandle {
    pub fn new(instance: impl VmInstance + 'static) -> Self {
        Self {
            instance: Box::new(instance),
        }
    }

    pub fn execute(&mut self, source: &str) -> std::result::Result<(), ExecutionError> {
        self.instance.execute(source)
    }

    pub fn set_input(&mut self, input: &str) {
        self.instance.set_input(input);
    }

    pub fn get_output(&mut self) -> Option<String> {
        self.instance.get_output()
    }
}

impl std::fmt::Debug for VmHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VmHandle").finish_non_exhaustive()
    }
}
