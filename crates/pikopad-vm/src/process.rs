//! Interpreter-process VM
//!
//! Drives the Piko interpreter binary (`piko <file>`). Loading resolves the
//! executable and merges the built-in examples with the configured example
//! directory. Each execution stages the source in a temporary file, feeds the
//! program input to the interpreter's stdin and runs it to completion.

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::Arc;

use pikopad_core::prelude::*;
use pikopad_core::ERROR_PREFIX;

use crate::binding::{ExecutionError, ModuleHandle, VmHandle, VmInstance, VmLoader, VmModule};
use crate::catalog::{ExampleCatalog, EXAMPLE_EXTENSION};

/// Interpreter command used when none is configured
pub const DEFAULT_COMMAND: &str = "piko";

/// Loads a [`ProcessModule`] for an interpreter command
#[derive(Debug, Clone)]
pub struct ProcessVmLoader {
    command: String,
    args: Vec<String>,
    examples_dir: Option<PathBuf>,
}

impl ProcessVmLoader {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            examples_dir: None,
        }
    }

    /// Extra arguments placed before the source file path
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    pub fn with_examples_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.examples_dir = Some(dir.into());
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }
}

impl Default for ProcessVmLoader {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND)
    }
}

impl VmLoader for ProcessVmLoader {
    async fn load(&self) -> Result<ModuleHandle> {
        let program = resolve_program(&self.command)?;
        info!("Using interpreter: {}", program.display());

        let mut catalog = ExampleCatalog::builtin();
        if let Some(dir) = &self.examples_dir {
            match ExampleCatalog::load_dir(dir).await {
                Ok(extra) => catalog.extend(extra),
                // The default directory is optional
                Err(e) if e.is_recoverable() => debug!("Built-in examples only: {}", e),
                Err(e) => warn!("Failed to read examples from {}: {}", dir.display(), e),
            }
        }

        Ok(Arc::new(ProcessModule::new(
            program,
            self.args.clone(),
            catalog,
        )))
    }
}

/// Resolve a command name or path to an executable
fn resolve_program(command: &str) -> Result<PathBuf> {
    which::which(command).map_err(|e| {
        debug!("which({}) failed: {}", command, e);
        Error::vm_not_found(command)
    })
}

/// A resolved interpreter plus its example catalog
#[derive(Debug)]
pub struct ProcessModule {
    program: PathBuf,
    args: Vec<String>,
    catalog: ExampleCatalog,
}

impl ProcessModule {
    pub fn new(program: PathBuf, args: Vec<String>, catalog: ExampleCatalog) -> Self {
        Self {
            program,
            args,
            catalog,
        }
    }
}

impl VmModule for ProcessModule {
    fn instantiate(&self) -> Result<VmHandle> {
        if !self.program.is_file() {
            return Err(Error::vm_instantiate(format!(
                "interpreter disappeared: {}",
                self.program.display()
            )));
        }
        Ok(VmHandle::new(ProcessVm::new(
            self.program.clone(),
            self.args.clone(),
        )))
    }

    fn get_example(&self, name: &str) -> Option<String> {
        self.catalog.get(name).map(str::to_string)
    }

    fn example_names(&self) -> Vec<String> {
        self.catalog.names().map(str::to_string).collect()
    }
}

/// One interpreter-backed VM instance
#[derive(Debug)]
pub struct ProcessVm {
    program: PathBuf,
    args: Vec<String>,
    input: String,
    pending_output: String,
}

impl ProcessVm {
    pub fn new(program: PathBuf, args: Vec<String>) -> Self {
        Self {
            program,
            args,
            input: String::new(),
            pending_output: String::new(),
        }
    }
}

impl VmInstance for ProcessVm {
    fn execute(&mut self, source: &str) -> std::result::Result<(), ExecutionError> {
        self.pending_output.clear();

        let script = stage_source(source)
            .map_err(|e| ExecutionError::new(format!("failed to stage source: {}", e)))?;

        debug!(
            "Running {} {:?} {}",
            self.program.display(),
            self.args,
            script.path().display()
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(script.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ExecutionError::new(format!("failed to run interpreter: {}", e)))?;

        // Written from a separate thread so a chatty program cannot block on a full stdout pipe
        if let Some(mut stdin) = child.stdin.take() {
            let input = self.input.clone();
            std::thread::spawn(move || {
                if let Err(e) = stdin.write_all(input.as_bytes()) {
                    // Programs may exit without reading all of their input
                    if e.kind() != ErrorKind::BrokenPipe {
                        debug!("Failed to write program input: {}", e);
                    }
                }
            });
        }

        let output = child
            .wait_with_output()
            .map_err(|e| ExecutionError::new(format!("failed to run interpreter: {}", e)))?;

        if output.status.success() {
            self.pending_output = String::from_utf8_lossy(&output.stdout).into_owned();
            Ok(())
        } else {
            Err(failure_from_stderr(&output.stderr, output.status.code()))
        }
    }

    fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    fn get_output(&mut self) -> Option<String> {
        if self.pending_output.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.pending_output))
        }
    }
}

/// Write the source to a temporary `.pyx` file that lives as long as the guard
fn stage_source(source: &str) -> std::io::Result<tempfile::NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("pikopad-")
        .suffix(&format!(".{}", EXAMPLE_EXTENSION))
        .tempfile()?;
    file.write_all(source.as_bytes())?;
    file.flush()?;
    Ok(file)
}

/// Build the execution error for a failed interpreter run.
///
/// The interpreter reports failures as `Error: <description>`; the prefix is
/// dropped because the controller adds its own.
fn failure_from_stderr(stderr: &[u8], code: Option<i32>) -> ExecutionError {
    let text = String::from_utf8_lossy(stderr);
    let text = text.trim();
    let text = text.strip_prefix(ERROR_PREFIX).unwrap_or(text).trim();

    if !text.is_empty() {
        return ExecutionError::new(text);
    }

    match code {
        Some(code) => ExecutionError::new(format!("interpreter exited with status {}", code)),
        None => ExecutionError::new("interpreter terminated by signal"),
    }
}
