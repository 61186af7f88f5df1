use std::path::PathBuf;

use tracing::info;

use crate::error::CcsError;
use crate::ops::SwitchResult;
use crate::paths;
use crate::persist;
use crate::provider;
use crate::types::{ConfigDir, SwitchAction};

/// Entry point for building a switcher.
pub struct Switcher;

impl Switcher {
    pub fn builder() -> SwitcherBuilder {
        SwitcherBuilder::new()
    }
}

/// Builder for one switcher invocation.
///
/// Each operation consumes the builder and performs at most two reads and one
/// write: the settings file, the provider file, then the settings file again.
/// Nothing is written unless every read and parse succeeded.
pub struct SwitcherBuilder {
    config_dir: Option<ConfigDir>,
}

impl SwitcherBuilder {
    fn new() -> Self {
        Self { config_dir: None }
    }

    /// Set where `settings.json` and the provider files live
    /// (default: `ConfigDir::Home(".claude")`).
    pub fn config_dir(mut self, dir: ConfigDir) -> Self {
        self.config_dir = Some(dir);
        self
    }

    /// Use an explicit directory. `None` keeps the current setting, which
    /// makes it easy to pass an optional CLI flag straight through.
    pub fn config_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.config_dir = Some(ConfigDir::Path(p));
        }
        self
    }

    /// Resolve the effective config directory setting.
    fn effective_config_dir(&self) -> ConfigDir {
        self.config_dir.clone().unwrap_or_default()
    }

    /// Resolve the config directory to a concrete path.
    fn resolved_dir(&self) -> Result<PathBuf, CcsError> {
        paths::resolve_config_dir(&self.effective_config_dir())
    }

    /// Merge `<provider>.json`'s env block into the settings and save them.
    pub fn switch(self, provider_name: &str) -> Result<SwitchResult, CcsError> {
        let dir = self.resolved_dir()?;
        let settings_path = paths::settings_path(&dir);

        let mut settings = persist::load_settings(&settings_path)?;
        let provider = provider::load_provider(&dir, provider_name)?;

        let keys_written = settings.switch(&provider);
        persist::save_settings(&settings_path, &settings)?;

        info!(provider = provider_name, keys_written, "switched provider");
        Ok(SwitchResult::Switched {
            provider: provider.name,
            path: settings_path,
            keys_written,
        })
    }

    /// Remove the env block from the settings and save them.
    pub fn reset(self) -> Result<SwitchResult, CcsError> {
        let dir = self.resolved_dir()?;
        let settings_path = paths::settings_path(&dir);

        let mut settings = persist::load_settings(&settings_path)?;
        settings.reset();
        persist::save_settings(&settings_path, &settings)?;

        info!("reset to default");
        Ok(SwitchResult::Reset {
            path: settings_path,
        })
    }

    /// List the provider files in the config directory. Settings are not touched.
    pub fn list(self) -> Result<SwitchResult, CcsError> {
        let dir = self.resolved_dir()?;
        let names = paths::list_providers(&dir)?;
        Ok(SwitchResult::Providers { dir, names })
    }

    /// Handle a `SwitchAction` and print the result to stdout.
    pub fn handle_and_print(self, action: &SwitchAction) -> Result<(), CcsError> {
        let result = self.handle(action)?;
        println!("{result}");
        Ok(())
    }

    /// Handle a `SwitchAction` (switch / reset / list).
    pub fn handle(self, action: &SwitchAction) -> Result<SwitchResult, CcsError> {
        match action {
            SwitchAction::Switch { provider } => self.switch(provider),
            SwitchAction::Reset => self.reset(),
            SwitchAction::List => self.list(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{FULL_SETTINGS, GLM_PROVIDER, write};
    use serde_json::{Value, json};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn switcher(dir: &Path) -> SwitcherBuilder {
        Switcher::builder().config_dir(ConfigDir::Path(dir.to_path_buf()))
    }

    fn settings_json(dir: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(dir.join("settings.json")).unwrap()).unwrap()
    }

    #[test]
    fn config_dir_defaults_to_home_claude() {
        let builder = Switcher::builder();
        assert_eq!(builder.effective_config_dir(), ConfigDir::Home(".claude"));
    }

    #[test]
    fn config_path_none_keeps_default() {
        let builder = Switcher::builder().config_path(None);
        assert_eq!(builder.effective_config_dir(), ConfigDir::Home(".claude"));
    }

    #[test]
    fn config_path_some_overrides() {
        let builder = Switcher::builder().config_path(Some("/cfg".into()));
        assert_eq!(
            builder.effective_config_dir(),
            ConfigDir::Path("/cfg".into())
        );
    }

    #[test]
    fn switch_merges_additively_on_disk() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "settings.json", r#"{"env": {"A": 1, "B": 2}}"#);
        write(dir.path(), "p.json", r#"{"env": {"B": 3, "C": 4}}"#);

        let result = switcher(dir.path()).switch("p").unwrap();
        assert_eq!(
            result,
            SwitchResult::Switched {
                provider: "p".into(),
                path: dir.path().join("settings.json"),
                keys_written: 2,
            }
        );
        assert_eq!(
            settings_json(dir.path()),
            json!({"env": {"A": 1, "B": 3, "C": 4}})
        );
    }

    #[test]
    fn switch_preserves_every_other_field() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "settings.json", FULL_SETTINGS);
        write(dir.path(), "glm.json", GLM_PROVIDER);

        switcher(dir.path()).switch("glm").unwrap();

        let mut expected: Value = serde_json::from_str(FULL_SETTINGS).unwrap();
        expected["env"]["ANTHROPIC_AUTH_TOKEN"] = json!("sk-test");
        assert_eq!(settings_json(dir.path()), expected);
    }

    #[test]
    fn reset_removes_env_and_keeps_unknown() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "settings.json", r#"{"X": "value", "env": {"A": 1}}"#);

        let result = switcher(dir.path()).reset().unwrap();
        assert!(matches!(result, SwitchResult::Reset { .. }));

        let text = fs::read_to_string(dir.path().join("settings.json")).unwrap();
        assert!(!text.contains("\"env\""));
        assert_eq!(settings_json(dir.path()), json!({"X": "value"}));
    }

    #[test]
    fn provider_without_env_leaves_settings_untouched() {
        let dir = TempDir::new().unwrap();
        let original = r#"{"X":"value","env":{"A":1}}"#;
        write(dir.path(), "settings.json", original);
        write(dir.path(), "empty.json", "{}");

        let err = switcher(dir.path()).switch("empty").unwrap_err();
        assert!(matches!(err, CcsError::MissingEnv { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("settings.json")).unwrap(),
            original
        );
    }

    #[test]
    fn nonexistent_provider_leaves_settings_untouched() {
        let dir = TempDir::new().unwrap();
        let original = r#"{"X":"value"}"#;
        write(dir.path(), "settings.json", original);

        let err = switcher(dir.path()).switch("doesnotexist").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            fs::read_to_string(dir.path().join("settings.json")).unwrap(),
            original
        );
    }

    #[test]
    fn malformed_provider_leaves_settings_untouched() {
        let dir = TempDir::new().unwrap();
        let original = r#"{"X":"value"}"#;
        write(dir.path(), "settings.json", original);
        write(dir.path(), "bad.json", "{ nope");

        let err = switcher(dir.path()).switch("bad").unwrap_err();
        assert!(matches!(err, CcsError::Malformed { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("settings.json")).unwrap(),
            original
        );
    }

    #[test]
    fn missing_settings_file_fails_and_is_not_created() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "glm.json", GLM_PROVIDER);

        let err = switcher(dir.path()).switch("glm").unwrap_err();
        assert!(err.is_not_found());
        assert!(!dir.path().join("settings.json").exists());

        let err = switcher(dir.path()).reset().unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn malformed_settings_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "settings.json", "not json");
        let err = switcher(dir.path()).reset().unwrap_err();
        assert!(matches!(err, CcsError::Malformed { .. }));
        assert_eq!(
            fs::read_to_string(dir.path().join("settings.json")).unwrap(),
            "not json"
        );
    }

    #[test]
    fn switch_then_reset_round_trip() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "settings.json", r#"{"model": "opus", "plansDirectory": "p"}"#);
        write(dir.path(), "glm.json", GLM_PROVIDER);

        switcher(dir.path()).switch("glm").unwrap();
        assert!(settings_json(dir.path())["env"].is_object());

        switcher(dir.path()).reset().unwrap();
        assert_eq!(
            settings_json(dir.path()),
            json!({"model": "opus", "plansDirectory": "p"})
        );
    }

    #[test]
    fn handle_dispatches_actions() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "settings.json", "{}");
        write(dir.path(), "glm.json", GLM_PROVIDER);
        write(dir.path(), "kimi.json", r#"{"env": {}}"#);

        let listed = switcher(dir.path()).handle(&SwitchAction::List).unwrap();
        assert_eq!(
            listed,
            SwitchResult::Providers {
                dir: dir.path().to_path_buf(),
                names: vec!["glm".into(), "kimi".into()],
            }
        );

        let switched = switcher(dir.path())
            .handle(&SwitchAction::Switch {
                provider: "kimi".into(),
            })
            .unwrap();
        assert_eq!(switched.to_string(), "Switched to provider 'kimi'");
        assert_eq!(settings_json(dir.path()), json!({"env": {}}));

        let reset = switcher(dir.path()).handle(&SwitchAction::Reset).unwrap();
        assert_eq!(reset.to_string(), "Reset to default (removed env key)");
        assert_eq!(settings_json(dir.path()), json!({}));
    }

    #[test]
    fn list_does_not_require_settings() {
        let dir = TempDir::new().unwrap();
        let result = switcher(dir.path()).list().unwrap();
        assert_eq!(
            result.to_string(),
            format!("No providers found in {}", dir.path().display())
        );
    }
}
