#[cfg(test)]
pub mod test {
    use std::fs;
    use std::path::Path;

    use serde_json::{Map, Value};

    use crate::provider::ProviderDocument;

    /// A settings file with every known field plus several the switcher
    /// doesn't model.
    pub const FULL_SETTINGS: &str = r#"{
  "permissions": {
    "allow": ["Bash(git status)", "Read(~/.zshrc)"],
    "deny": []
  },
  "model": "opus",
  "statusLine": {
    "type": "command",
    "command": "~/.claude/statusline.sh",
    "padding": 0
  },
  "enabledPlugins": {
    "rust-analyzer@official": true
  },
  "env": {
    "ANTHROPIC_BASE_URL": "https://open.bigmodel.cn/api/anthropic",
    "ANTHROPIC_MODEL": "glm-4.6",
    "API_TIMEOUT_MS": 3000000,
    "CLAUDE_CODE_DISABLE_NONESSENTIAL_TRAFFIC": 1
  },
  "plansDirectory": "/home/user/plans",
  "alwaysThinkingEnabled": true,
  "cleanupPeriodDays": 30,
  "hooks": {
    "PreToolUse": [
      {"matcher": "Bash", "hooks": [{"type": "command", "command": "echo ok"}]}
    ]
  },
  "feedbackSurveyState": null
}"#;

    pub const GLM_PROVIDER: &str = r#"{
  "env": {
    "ANTHROPIC_AUTH_TOKEN": "sk-test",
    "ANTHROPIC_BASE_URL": "https://open.bigmodel.cn/api/anthropic",
    "API_TIMEOUT_MS": 3000000
  }
}"#;

    pub fn object(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            other => panic!("expected a JSON object, got {other}"),
        }
    }

    /// Provider document named `test` with the given env block.
    pub fn provider(env: Value) -> ProviderDocument {
        ProviderDocument {
            name: "test".into(),
            env: object(env),
        }
    }

    /// Write `content` to `dir/name`.
    pub fn write(dir: &Path, name: &str, content: &str) {
        fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn fixtures_are_valid_json() {
        let settings: Value = serde_json::from_str(FULL_SETTINGS).unwrap();
        assert!(settings.is_object());
        let glm: Value = serde_json::from_str(GLM_PROVIDER).unwrap();
        assert!(glm["env"].is_object());
    }
}
