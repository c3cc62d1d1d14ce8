//! Loading env files into an environment store.

mod builder;
mod file;
mod options;
mod populate;

use std::io::BufRead;
use std::path::Path;

pub use builder::Loader;
pub use options::Options;

use crate::env::{EnvStore, ProcessEnv};
use crate::error::Result;

/// File name used by [`load`].
pub const DEFAULT_FILE: &str = ".env";

/// Loads `.env` from the current working directory into the process
/// environment.
///
/// Existing non-empty variables are kept. Fails if the file cannot be opened.
pub fn load() -> Result<()> {
    load_from_path(DEFAULT_FILE)
}

/// Loads the env file at `path` into the process environment.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<()> {
    load_from_path_into(path, &mut ProcessEnv, &Options::default())
}

/// Loads entries from `reader` into the process environment.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<()> {
    load_from_reader_into(reader, &mut ProcessEnv, &Options::default())
}

/// Loads the env file at `path` into `store`.
pub fn load_from_path_into<S>(path: impl AsRef<Path>, store: &mut S, options: &Options) -> Result<()>
where
    S: EnvStore + ?Sized,
{
    file::load_file(path.as_ref(), true, store, options).map(|_| ())
}

/// Loads entries from `reader` into `store`.
///
/// Entries are applied in line order as they are read. On error, lines
/// before the failing one remain applied.
pub fn load_from_reader_into<R, S>(reader: R, store: &mut S, options: &Options) -> Result<()>
where
    R: BufRead,
    S: EnvStore + ?Sized,
{
    populate::populate(reader, store, options)
}
