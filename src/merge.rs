use serde_json::{Map, Value};

/// Shallow-merge `overlay` into `base`.
/// Every key of `overlay` is set on `base`, replacing whatever was there.
/// Keys only present in `base` are kept. Nested objects are not merged.
///
/// Returns the number of keys written.
pub fn merge_env(base: &mut Map<String, Value>, overlay: &Map<String, Value>) -> usize {
    for (key, value) in overlay {
        base.insert(key.clone(), value.clone());
    }
    overlay.len()
}
