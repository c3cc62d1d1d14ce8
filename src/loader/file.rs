//! File-backed loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::populate::populate;
use super::Options;
use crate::env::EnvStore;
use crate::error::{Error, Result};

/// Opens `path` and applies its entries to `store`.
///
/// If `required` is false, a missing file is skipped and `Ok(false)` is
/// returned. Returns `Ok(true)` once the file has been loaded.
///
/// The file handle is dropped on every return path. A read-only handle has
/// no buffered state to flush, so only the parse result is reported.
pub(crate) fn load_file<S>(
    path: &Path,
    required: bool,
    store: &mut S,
    options: &Options,
) -> Result<bool>
where
    S: EnvStore + ?Sized,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            tracing::debug!(path = %path.display(), "optional env file not found, skipping");
            return Ok(false);
        }
        Err(e) => {
            return Err(Error::FileOpen {
                path: path.to_path_buf(),
                source: e,
            })
        }
    };

    tracing::debug!(path = %path.display(), "loading env file");
    populate(BufReader::new(file), store, options)?;
    Ok(true)
}
