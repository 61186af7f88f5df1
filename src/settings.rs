//! The shared settings document.
//!
//! `settings.json` belongs to another program. Only a handful of its top-level
//! keys mean anything here; everything else is carried in [`SettingsDocument::extra`]
//! and written back exactly as it was read.
//!
//! Parsing goes through a plain JSON object: each known key is moved out of the
//! object into its typed slot when its value has the expected type, and
//! whatever remains becomes the unknown-field bag. Serializing reverses that,
//! known fields first, then the bag. A known key with an unexpected type (say
//! `"model": 3`) is left in the bag, so it survives untouched as well.
//!
//! Add a key to the typed set only when the switcher has to read or write it.
//! Keys nobody here touches belong in the bag.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::merge;
use crate::provider::ProviderDocument;

/// Top-level keys with a typed slot on [`SettingsDocument`].
pub const KNOWN_FIELDS: [&str; 5] = [
    "permissions",
    "model",
    "statusLine",
    "enabledPlugins",
    "env",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct SettingsDocument {
    pub permissions: Option<Map<String, Value>>,
    pub model: Option<String>,
    pub status_line: Option<Map<String, Value>>,
    pub enabled_plugins: Option<Map<String, Value>>,
    /// Environment variables handed to the owning application.
    pub env: Option<Map<String, Value>>,
    /// Every other top-level key, in file order.
    pub extra: Map<String, Value>,
}

impl SettingsDocument {
    /// Merge the provider's env block into ours, creating it if absent.
    ///
    /// Keys the provider doesn't mention are left alone. Returns the number of
    /// keys written.
    pub fn switch(&mut self, provider: &ProviderDocument) -> usize {
        self.extra.shift_remove("env");
        let env = self.env.get_or_insert_with(Map::new);
        let written = merge::merge_env(env, &provider.env);
        debug!(written, total = env.len(), "merged provider env");
        written
    }

    /// Drop the env block entirely. The key disappears from the saved file.
    pub fn reset(&mut self) {
        self.extra.shift_remove("env");
        if let Some(env) = self.env.take() {
            debug!(removed = env.len(), "cleared env");
        }
    }
}

impl From<Map<String, Value>> for SettingsDocument {
    fn from(mut raw: Map<String, Value>) -> Self {
        let permissions = take_object(&mut raw, "permissions");
        let model = match raw.get("model") {
            Some(Value::String(_)) => match raw.shift_remove("model") {
                Some(Value::String(s)) => Some(s),
                _ => None,
            },
            _ => None,
        };
        let status_line = take_object(&mut raw, "statusLine");
        let enabled_plugins = take_object(&mut raw, "enabledPlugins");
        let env = take_object(&mut raw, "env");

        Self {
            permissions,
            model,
            status_line,
            enabled_plugins,
            env,
            extra: raw,
        }
    }
}

impl From<SettingsDocument> for Map<String, Value> {
    fn from(doc: SettingsDocument) -> Self {
        let mut out = Map::new();
        if let Some(v) = doc.permissions {
            out.insert("permissions".into(), Value::Object(v));
        }
        if let Some(v) = doc.model {
            out.insert("model".into(), Value::String(v));
        }
        if let Some(v) = doc.status_line {
            out.insert("statusLine".into(), Value::Object(v));
        }
        if let Some(v) = doc.enabled_plugins {
            out.insert("enabledPlugins".into(), Value::Object(v));
        }
        if let Some(v) = doc.env {
            out.insert("env".into(), Value::Object(v));
        }
        // Typed slots win on a name clash.
        for (key, value) in doc.extra {
            out.entry(key).or_insert(value);
        }
        out
    }
}

fn take_object(raw: &mut Map<String, Value>, key: &str) -> Option<Map<String, Value>> {
    if !matches!(raw.get(key), Some(Value::Object(_))) {
        return None;
    }
    match raw.shift_remove(key) {
        Some(Value::Object(m)) => Some(m),
        _ => None,
    }
}
