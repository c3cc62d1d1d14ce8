//! Target environments that loaded entries are written into.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// A string-to-string store that env files are loaded into.
///
/// Implemented for [`ProcessEnv`] (the real process environment) and for
/// `HashMap<String, String>`, which keeps loads isolated from process state.
pub trait EnvStore {
    /// Returns the current value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// The environment of the running process.
///
/// The process environment is shared, unsynchronized state. Loading into it
/// from several threads at once, or while other threads read it, is the
/// caller's responsibility to avoid.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        if !is_valid_key(key) {
            return None;
        }
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // `set_var` panics on these instead of returning an error.
        let reason = if key.is_empty() {
            Some("key is empty")
        } else if key.contains('=') {
            Some("key contains '='")
        } else if key.contains('\0') {
            Some("key contains a NUL byte")
        } else if value.contains('\0') {
            Some("value contains a NUL byte")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(Error::EnvironmentSet {
                key: key.to_string(),
                reason,
            });
        }

        std::env::set_var(key, value);
        Ok(())
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['=', '\0'])
}

impl EnvStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
