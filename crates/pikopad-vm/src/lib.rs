//! # pikopad-vm - VM Module Binding
//!
//! Defines the contract between the controller and the externally supplied
//! VM module, plus an implementation that drives the Piko interpreter as a
//! child process.
//!
//! Depends on [`pikopad_core`] for error handling.
//!
//! ## Public API
//!
//! ### Contract (`binding`)
//! - [`VmLoader`] - Asynchronously load the module (`Send` variant of [`LocalVmLoader`])
//! - [`VmModule`] - Loaded module: instance constructor and example catalog
//! - [`VmInstance`] - Synchronous `execute` / `get_output`
//! - [`VmHandle`] - Owning handle to an initialized instance
//! - [`ExecutionError`] - Opaque execution failure
//!
//! ### Examples (`catalog`)
//! - [`ExampleCatalog`] - Named example programs, loadable from a directory
//!
//! ### Interpreter Process (`process`)
//! - [`ProcessVmLoader`] - Resolve the interpreter and load examples
//! - [`ProcessModule`], [`ProcessVm`] - Run each program as `<command> <file>`

pub mod binding;
pub mod catalog;
pub mod process;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use binding::{
    ExecutionError, LocalVmLoader, ModuleHandle, VmHandle, VmInstance, VmLoader, VmModule,
};
pub use catalog::{ExampleCatalog, EXAMPLE_EXTENSION};
pub use process::{ProcessModule, ProcessVm, ProcessVmLoader, DEFAULT_COMMAND};
