//! Scripted VM doubles for controller tests
//!
//! [`ScriptedModule`] serves a fixed example catalog and hands out a
//! [`ScriptedVm`] that replays queued [`ScriptedRun`]s. Every source passed to
//! `execute` is recorded in a shared [`ExecutionLog`].

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pikopad_core::prelude::*;

use crate::binding::{ExecutionError, ModuleHandle, VmHandle, VmInstance, VmLoader, VmModule};
use crate::catalog::ExampleCatalog;

/// Outcome of one scripted execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedRun {
    /// Succeed and produce this output
    Output(String),
    /// Succeed without output
    Silent,
    /// Fail with this description
    Fail(String),
}

/// Shared record of executed sources and the program input each run saw
#[derive(Debug, Clone, Default)]
pub struct ExecutionLog(Arc<Mutex<Vec<(String, String)>>>);

impl ExecutionLog {
    fn push(&self, source: &str, input: &str) {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((source.to_string(), input.to_string()));
    }

    fn runs(&self) -> Vec<(String, String)> {
        self.0
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn sources(&self) -> Vec<String> {
        self.runs().into_iter().map(|(source, _)| source).collect()
    }

    pub fn inputs(&self) -> Vec<String> {
        self.runs().into_iter().map(|(_, input)| input).collect()
    }

    pub fn len(&self) -> usize {
        self.sources().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// VM instance that replays scripted runs; unscripted runs are [`ScriptedRun::Silent`]
#[derive(Debug)]
pub struct ScriptedVm {
    runs: VecDeque<ScriptedRun>,
    input: String,
    pending: Option<String>,
    log: ExecutionLog,
}

impl VmInstance for ScriptedVm {
    fn execute(&mut self, source: &str) -> std::result::Result<(), ExecutionError> {
        self.log.push(source, &self.input);
        self.pending = None;
        match self.runs.pop_front().unwrap_or(ScriptedRun::Silent) {
            ScriptedRun::Output(text) => {
                self.pending = Some(text);
                Ok(())
            }
            ScriptedRun::Silent => Ok(()),
            ScriptedRun::Fail(description) => Err(ExecutionError::new(description)),
        }
    }

    fn set_input(&mut self, input: &str) {
        self.input = input.to_string();
    }

    fn get_output(&mut self) -> Option<String> {
        self.pending.take()
    }
}

/// Module double with a fixed catalog
#[derive(Debug, Default)]
pub struct ScriptedModule {
    catalog: ExampleCatalog,
    runs: Mutex<Vec<ScriptedRun>>,
    instantiate_error: Option<String>,
    log: ExecutionLog,
}

impl ScriptedModule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_example(mut self, name: &str, source: &str) -> Self {
        self.catalog.insert(name, source);
        self
    }

    /// Queue runs for the instance created by the next `instantiate`
    pub fn with_runs(self, runs: impl IntoIterator<Item = ScriptedRun>) -> Self {
        self.runs
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .extend(runs);
        self
    }

    /// Make `instantiate` fail with this message
    pub fn failing_instantiate(mut self, message: &str) -> Self {
        self.instantiate_error = Some(message.to_string());
        self
    }

    pub fn execution_log(&self) -> ExecutionLog {
        self.log.clone()
    }

    pub fn into_handle(self) -> ModuleHandle {
        Arc::new(self)
    }
}

impl VmModule for ScriptedModule {
    fn instantiate(&self) -> Result<VmHandle> {
        if let Some(message) = &self.instantiate_error {
            return Err(Error::vm_instantiate(message.clone()));
        }
        let runs = std::mem::take(&mut *self.runs.lock().unwrap_or_else(|p| p.into_inner()));
        Ok(VmHandle::new(ScriptedVm {
            runs: runs.into(),
            input: String::new(),
            pending: None,
            log: self.log.clone(),
        }))
    }

    fn get_example(&self, name: &str) -> Option<String> {
        self.catalog.get(name).map(str::to_string)
    }

    fn example_names(&self) -> Vec<String> {
        self.catalog.names().map(str::to_string).collect()
    }
}

/// Loader double resolving to a fixed module or failure
#[derive(Debug, Clone)]
pub struct ScriptedLoader {
    outcome: std::result::Result<ModuleHandle, String>,
    delay: Option<Duration>,
}

impl ScriptedLoader {
    pub fn succeeding(module: ModuleHandle) -> Self {
        Self {
            outcome: Ok(module),
            delay: None,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            delay: None,
        }
    }

    /// Sleep before resolving
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl VmLoader for ScriptedLoader {
    async fn load(&self) -> Result<ModuleHandle> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match &self.outcome {
            Ok(module) => Ok(Arc::clone(module)),
            Err(message) => Err(Error::vm_load(message.clone())),
        }
    }
}
