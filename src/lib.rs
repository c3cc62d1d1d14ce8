//! Load shell-style `KEY=VALUE` files into the environment.
//!
//! ```no_run
//! // Reads `.env` from the working directory; existing variables win.
//! envload::load()?;
//!
//! // Any other file.
//! envload::load_from_path("config/dev.env")?;
//! # Ok::<(), envload::Error>(())
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Every other line must
//! contain `=`; the key and value are trimmed, and a value wrapped in double
//! quotes keeps its inner text verbatim.

pub mod env;
mod error;
pub mod loader;
pub mod parse;

pub use env::{EnvStore, ProcessEnv};
pub use error::{Error, Result};
pub use loader::{
    load, load_from_path, load_from_path_into, load_from_reader, load_from_reader_into, Loader,
    Options, DEFAULT_FILE,
};
pub use parse::{parse_line, parse_reader, Entry, LineError};
