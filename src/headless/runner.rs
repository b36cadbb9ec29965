//! Headless mode runner

use std::io::Write;

use tracing::{info, warn};

use pikopad_app::config::Settings;
use pikopad_app::{Engine, Message};
use pikopad_core::prelude::*;
use pikopad_core::VmStatus;
use pikopad_vm::VmLoader;

use super::HeadlessEvent;

/// What to run in headless mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessInput {
    /// Run the named example
    Example(String),
    /// Run this source text
    Source(String),
}

/// Initialize the VM, run `input` with `program_input` as its input and
/// report each step to `out`.
///
/// Returns `false` when nothing could be run (VM failed to load or the
/// example is unknown). Execution failures are reported as output and still
/// count as a completed run.
pub async fn run_headless<L, W>(
    settings: Settings,
    loader: L,
    input: HeadlessInput,
    program_input: &str,
    out: &mut W,
) -> Result<bool>
where
    L: VmLoader + Sync + 'static,
    W: Write,
{
    info!("Starting in headless mode");

    let mut engine = Engine::new(settings, loader);
    engine.listen_for_signals();
    engine.start();
    engine.wait_for_vm().await?;

    if engine.should_quit() {
        warn!("Interrupted before the VM was ready");
        return Ok(false);
    }

    match &engine.state.vm_status {
        VmStatus::Ready => {
            HeadlessEvent::vm_ready(engine.state.examples.names.clone()).write_to(out)?;
        }
        VmStatus::Failed { reason } => {
            HeadlessEvent::vm_load_failed(&engine.state.output, reason).write_to(out)?;
            return Ok(false);
        }
        VmStatus::Loading => return Err(Error::ChannelClosed),
    }

    match input {
        HeadlessInput::Example(name) => {
            if !engine.state.examples.names.contains(&name) {
                HeadlessEvent::error(format!("No example named '{}'", name), false)
                    .write_to(out)?;
                return Ok(false);
            }
            engine.process_message(Message::LoadExample { name: name.clone() });
            HeadlessEvent::example_loaded(&name).write_to(out)?;
        }
        HeadlessInput::Source(source) => engine.state.editor.set_text(source),
    }
    engine.state.program_input.set_text(program_input);

    engine.process_message(Message::RunCode);

    let kind = engine
        .state
        .last_outcome
        .as_ref()
        .map(|outcome| outcome.kind())
        .unwrap_or("error");
    HeadlessEvent::output(kind, engine.state.output.clone()).write_to(out)?;

    info!("Headless run finished ({})", kind);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pikopad_vm::test_utils::{ScriptedLoader, ScriptedModule, ScriptedRun};

    fn events(out: &[u8]) -> Vec<serde_json::Value> {
        String::from_utf8_lossy(out)
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_runs_source_and_reports_output() {
        let module = ScriptedModule::new().with_runs([ScriptedRun::Output("hi".to_string())]);
        let log = module.execution_log();
        let loader = ScriptedLoader::succeeding(module.into_handle());
        let mut out = Vec::new();

        let ok = run_headless(
            Settings::default(),
            loader,
            HeadlessInput::Source("print(\"hi\")".to_string()),
            "",
            &mut out,
        )
        .await
        .unwrap();

        assert!(ok);
        assert_eq!(log.sources(), vec!["print(\"hi\")"]);
        let events = events(&out);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0]["event"], "vm_ready");
        assert_eq!(events[1]["event"], "output");
        assert_eq!(events[1]["kind"], "output");
        assert_eq!(events[1]["text"], "hi");
    }

    #[tokio::test]
    async fn test_execution_error_is_reported_as_output() {
        let module = ScriptedModule::new().with_runs([ScriptedRun::Fail(
            "SyntaxError: unexpected token".to_string(),
        )]);
        let mut out = Vec::new();

        let ok = run_headless(
            Settings::default(),
            ScriptedLoader::succeeding(module.into_handle()),
            HeadlessInput::Source("print(".to_string()),
            "",
            &mut out,
        )
        .await
        .unwrap();

        assert!(ok);
        let events = events(&out);
        assert_eq!(events[1]["kind"], "error");
        assert_eq!(events[1]["text"], "Error: SyntaxError: unexpected token");
    }

    #[tokio::test]
    async fn test_runs_named_example() {
        let module = ScriptedModule::new()
            .with_example("fib", "fib(10)")
            .with_runs([ScriptedRun::Output("55".to_string())]);
        let log = module.execution_log();
        let mut out = Vec::new();

        let ok = run_headless(
            Settings::default(),
            ScriptedLoader::succeeding(module.into_handle()),
            HeadlessInput::Example("fib".to_string()),
            "",
            &mut out,
        )
        .await
        .unwrap();

        assert!(ok);
        assert_eq!(log.sources(), vec!["fib(10)"]);
        let events = events(&out);
        assert_eq!(events[0]["examples"], serde_json::json!(["fib"]));
        assert_eq!(events[1]["event"], "example_loaded");
        assert_eq!(events[1]["name"], "fib");
        assert_eq!(events[2]["text"], "55");
    }

    #[tokio::test]
    async fn test_program_input_reaches_vm() {
        let module = ScriptedModule::new()
            .with_example("input", "(i name)\n(o name)")
            .with_runs([ScriptedRun::Output("piko\n".to_string())]);
        let log = module.execution_log();
        let mut out = Vec::new();

        let ok = run_headless(
            Settings::default(),
            ScriptedLoader::succeeding(module.into_handle()),
            HeadlessInput::Example("input".to_string()),
            "piko\n",
            &mut out,
        )
        .await
        .unwrap();

        assert!(ok);
        assert_eq!(log.inputs(), vec!["piko\n".to_string()]);
        assert_eq!(events(&out)[2]["text"], "piko\n");
    }

    #[tokio::test]
    async fn test_unknown_example_runs_nothing() {
        let module = ScriptedModule::new().with_example("fib", "fib(10)");
        let log = module.execution_log();
        let mut out = Vec::new();

        let ok = run_headless(
            Settings::default(),
            ScriptedLoader::succeeding(module.into_handle()),
            HeadlessInput::Example("nope".to_string()),
            "",
            &mut out,
        )
        .await
        .unwrap();

        assert!(!ok);
        assert!(log.is_empty());
        let events = events(&out);
        assert_eq!(events[1]["event"], "error");
        assert_eq!(events[1]["fatal"], false);
    }

    #[tokio::test]
    async fn test_load_failure_stops_run() {
        let mut out = Vec::new();

        let ok = run_headless(
            Settings::default(),
            ScriptedLoader::failing("piko not found"),
            HeadlessInput::Source("print(1)".to_string()),
            "",
            &mut out,
        )
        .await
        .unwrap();

        assert!(!ok);
        let events = events(&out);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["event"], "vm_load_failed");
        assert_eq!(events[0]["message"], "Failed to load VM module");
        assert!(events[0]["reason"]
            .as_str()
            .unwrap()
            .contains("piko not found"));
    }
}
