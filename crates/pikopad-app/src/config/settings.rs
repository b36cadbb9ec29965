//! Settings file loading

use std::path::Path;

use pikopad_core::prelude::*;

use super::types::Settings;

pub const CONFIG_FILENAME: &str = "config.toml";
pub const PIKOPAD_DIR: &str = ".pikopad";

/// Load settings from `.pikopad/config.toml`.
///
/// A missing, unreadable or invalid file yields the defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = project_path.join(PIKOPAD_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.pikopad/config.toml` with commented defaults if it does not exist
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let pikopad_dir = project_path.join(PIKOPAD_DIR);

    if !pikopad_dir.exists() {
        std::fs::create_dir_all(&pikopad_dir)
            .map_err(|e| Error::config(format!("Failed to create .pikopad dir: {}", e)))?;
    }

    let config_path = pikopad_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Pikopad Configuration

[vm]
command = "piko"          # Interpreter command or path
args = []                 # Arguments placed before the source file
examples_dir = "examples" # Directory of *.pyx example programs
load_timeout_ms = 0       # 0 = wait for the interpreter indefinitely

[ui]
initial_view = "code"     # code, examples or help
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_missing_file() {
        let temp = tempdir().unwrap();
        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_load_settings_custom_values() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(PIKOPAD_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join(CONFIG_FILENAME),
            r#"
[vm]
command = "/opt/piko/bin/piko"
args = ["--quiet"]
examples_dir = "samples"

[ui]
initial_view = "examples"
"#,
        )
        .unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.vm.command, "/opt/piko/bin/piko");
        assert_eq!(settings.vm.args, vec!["--quiet".to_string()]);
        assert_eq!(settings.vm.examples_dir, Some(PathBuf::from("samples")));
        assert_eq!(settings.ui.initial_view, "examples");
    }

    #[test]
    fn test_load_settings_invalid_toml_uses_defaults() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(PIKOPAD_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILENAME), "[vm\ncommand = ").unwrap();

        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_init_config_dir_writes_loadable_defaults() {
        let temp = tempdir().unwrap();

        init_config_dir(temp.path()).unwrap();

        let path = temp.path().join(PIKOPAD_DIR).join(CONFIG_FILENAME);
        assert!(path.exists());
        assert_eq!(load_settings(temp.path()), Settings::default());
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(PIKOPAD_DIR);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(CONFIG_FILENAME), "[ui]\ninitial_view = \"help\"\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        assert_eq!(load_settings(temp.path()).ui.initial_view, "help");
    }
}
