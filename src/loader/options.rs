use serde::Deserialize;

/// Settings that control how entries are applied to the target store.
///
/// Deserializable so loader settings can live in an application's own config
/// file; missing fields take their defaults.
///
/// ```no_run
/// use envload::Options;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct AppConfig {
///     #[serde(default)]
///     dotenv: Options,
/// }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Replace values that are already set (and non-empty) in the target.
    pub override_existing: bool,

    /// Force the `dotenv: KEY=VALUE` stdout diagnostic on or off.
    ///
    /// When `None`, the diagnostic is printed whenever `DEBUG` is non-empty at
    /// the time each line is applied. `DEBUG` is looked up in the target store
    /// first and in the process environment if the store has no entry.
    pub debug: Option<bool>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn override_existing(mut self, enabled: bool) -> Self {
        self.override_existing = enabled;
        self
    }

    #[must_use]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = Some(enabled);
        self
    }
}
