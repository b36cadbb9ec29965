//! Pikopad - a terminal playground for the Piko interpreter
//!
//! The binary wires the crates together: [`pikopad_app`] holds the
//! controller, [`pikopad_tui`] the interactive host and [`headless`] a
//! scripting host that prints NDJSON events.

pub mod headless;

use std::path::Path;

use pikopad_app::config::Settings;
use pikopad_vm::ProcessVmLoader;

pub use headless::{run_headless, HeadlessEvent, HeadlessInput};

/// Build the interpreter loader described by `settings`.
///
/// The examples directory is resolved against `project_path`.
pub fn build_loader(settings: &Settings, project_path: &Path) -> ProcessVmLoader {
    let loader = ProcessVmLoader::new(settings.vm.command.clone()).with_args(settings.vm.args.clone());
    match settings.vm.examples_dir_in(project_path) {
        Some(dir) => loader.with_examples_dir(dir),
        None => loader,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pikopad_vm::VmLoader;

    #[test]
    fn test_build_loader_uses_configured_command() {
        let mut settings = Settings::default();
        settings.vm.command = "piko-dev".to_string();

        let loader = build_loader(&settings, Path::new("."));

        assert_eq!(loader.command(), "piko-dev");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_build_loader_reads_project_examples() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::create_dir(temp.path().join("examples")).unwrap();
        std::fs::write(temp.path().join("examples/hello.pyx"), "print(\"hello\")").unwrap();

        let mut settings = Settings::default();
        settings.vm.command = "sh".to_string();

        let module = build_loader(&settings, temp.path()).load().await.unwrap();

        assert_eq!(module.get_example("hello").as_deref(), Some("print(\"hello\")"));
    }
}
