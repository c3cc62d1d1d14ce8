use std::io::BufRead;
use std::path::{Path, PathBuf};

use super::file::load_file;
use super::populate::populate;
use super::Options;
use crate::env::{EnvStore, ProcessEnv};
use crate::error::Result;

/// An env file registered with a [`Loader`].
#[derive(Debug, Clone)]
struct FileSource {
    path: PathBuf,
    required: bool,
}

/// Builder for loading one or more env files into an environment store.
///
/// Files are loaded in registration order. With the default options a value
/// that is already set is kept, so earlier files win over later ones and the
/// existing environment wins over both. With
/// [`override_existing`](Self::override_existing) later files win instead.
///
/// ## Example
///
/// ```no_run
/// use envload::Loader;
///
/// Loader::builder()
///     .with_file(".env", true)
///     .with_file(".env.local", false)
///     .load()?;
/// # Ok::<(), envload::Error>(())
/// ```
///
/// Loading into an isolated store instead of the process environment:
///
/// ```no_run
/// use std::collections::HashMap;
/// use envload::Loader;
///
/// let mut env: HashMap<String, String> = HashMap::new();
/// Loader::builder()
///     .with_file("config/test.env", true)
///     .override_existing(true)
///     .load_into(&mut env)?;
/// # Ok::<(), envload::Error>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .load() is called"]
pub struct Loader {
    files: Vec<FileSource>,
    options: Options,
}

impl Loader {
    /// Creates a new loader with no files and default options.
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds an env file to be loaded.
    ///
    /// If `required` is `true`, loading fails if the file cannot be opened.
    /// Optional files that are missing are silently skipped.
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.files.push(FileSource {
            path: path.as_ref().to_path_buf(),
            required,
        });
        self
    }

    /// Replaces all options.
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Replace values that are already set in the target store.
    pub fn override_existing(mut self, enabled: bool) -> Self {
        self.options.override_existing = enabled;
        self
    }

    /// Forces the `dotenv: KEY=VALUE` diagnostic on or off, ignoring `DEBUG`.
    pub fn debug(mut self, enabled: bool) -> Self {
        self.options.debug = Some(enabled);
        self
    }

    /// Returns the options that will be used when loading.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Loads every registered file into the process environment.
    pub fn load(self) -> Result<()> {
        self.load_into(&mut ProcessEnv)
    }

    /// Loads every registered file into `store`.
    ///
    /// Stops at the first error. Files and lines processed before it stay
    /// applied.
    pub fn load_into<S: EnvStore + ?Sized>(self, store: &mut S) -> Result<()> {
        for source in &self.files {
            load_file(&source.path, source.required, store, &self.options)?;
        }
        Ok(())
    }

    /// Loads entries from `reader` into `store` using this loader's options.
    ///
    /// Registered files are ignored.
    pub fn load_reader_into<R, S>(&self, reader: R, store: &mut S) -> Result<()>
    where
        R: BufRead,
        S: EnvStore + ?Sized,
    {
        populate(reader, store, &self.options)
    }
}
