//! Applies parsed lines to an [`EnvStore`].

use std::io::{self, BufRead, Write};

use super::Options;
use crate::env::EnvStore;
use crate::error::Result;
use crate::parse::{entries, Entry};

/// Reads `reader` line by line and applies each entry to `store`.
///
/// Entries are applied as they are read, so lines before a failing line stay
/// applied when an error is returned. Debug diagnostics go to stdout.
pub(crate) fn populate<R, S>(reader: R, store: &mut S, options: &Options) -> Result<()>
where
    R: BufRead,
    S: EnvStore + ?Sized,
{
    populate_with(reader, store, options, &mut io::stdout().lock())
}

/// Like [`populate`], writing `dotenv: KEY=VALUE` diagnostics to `out`.
fn populate_with<R, S, W>(reader: R, store: &mut S, options: &Options, out: &mut W) -> Result<()>
where
    R: BufRead,
    S: EnvStore + ?Sized,
    W: Write,
{
    let mut applied = 0usize;

    for entry in entries(reader) {
        if apply(entry?, store, options, out)? {
            applied += 1;
        }
    }

    tracing::debug!(applied, "env entries loaded");
    Ok(())
}

/// Applies one entry. Returns `false` when an existing value was kept.
fn apply<S, W>(entry: Entry, store: &mut S, options: &Options, out: &mut W) -> Result<bool>
where
    S: EnvStore + ?Sized,
    W: Write,
{
    let Entry { key, value } = entry;

    if debug_enabled(store, options) {
        // Diagnostics never fail a load.
        if let Err(e) = writeln!(out, "dotenv: {key}={value}") {
            tracing::warn!(error = %e, "failed to write debug diagnostic");
        }
    }

    if !options.override_existing && store.get(&key).is_some_and(|v| !v.is_empty()) {
        tracing::trace!(key = %key, "keeping existing value");
        return Ok(false);
    }

    store.set(&key, &value)?;
    tracing::debug!(key = %key, "set env variable");
    Ok(true)
}

/// `Options::debug` wins; otherwise `DEBUG` from the store, falling back to
/// the process environment when the store has no `DEBUG` entry.
fn debug_enabled<S: EnvStore + ?Sized>(store: &S, options: &Options) -> bool {
    options.debug.unwrap_or_else(|| match store.get("DEBUG") {
        Some(value) => !value.is_empty(),
        None => std::env::var_os("DEBUG").is_some_and(|v| !v.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::collections::HashMap;
    use std::io::{BufReader, Read};

    fn load(lines: &[&str], store: &mut HashMap<String, String>, options: Options) -> Result<()> {
        populate(lines.join("\n").as_bytes(), store, &options)
    }

    fn store(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_populates_and_preserves_existing() {
        let mut env = store(&[("existing", "foo")]);
        let lines = [
            "DEBUG=1",
            "  #doesnt = exist",
            "foo=bar",
            "fooSpace= bar",
            "fooQuote=\" baz \"",
            "baz=hello world",
            "bazSpace=\"hello world   \"",
            "bazEqual=hello=world",
            "existing=baz",
        ];

        load(&lines, &mut env, Options::default()).unwrap();

        let expected = store(&[
            ("DEBUG", "1"),
            ("existing", "foo"),
            ("foo", "bar"),
            ("fooSpace", "bar"),
            ("fooQuote", " baz "),
            ("baz", "hello world"),
            ("bazSpace", "hello world   "),
            ("bazEqual", "hello=world"),
        ]);
        assert_eq!(env, expected);
        assert!(!env.contains_key("#doesnt"));
    }

    #[test]
    fn test_override_existing_replaces_values() {
        let mut env = store(&[("existing", "foo")]);
        let lines = ["  #doesnt = exist", "foo=bar", "existing=baz"];

        load(&lines, &mut env, Options::new().override_existing(true)).unwrap();

        assert_eq!(env, store(&[("existing", "baz"), ("foo", "bar")]));
    }

    #[test]
    fn test_empty_existing_value_is_replaced() {
        let mut env = store(&[("key", "")]);

        load(&["key=value"], &mut env, Options::default()).unwrap();

        assert_eq!(env["key"], "value");
    }

    #[test]
    fn test_later_line_does_not_override_earlier_line() {
        let mut env = HashMap::new();

        load(&["key=first", "key=second"], &mut env, Options::default()).unwrap();

        assert_eq!(env["key"], "first");
    }

    #[test]
    fn test_comment_never_mutates() {
        let mut env = HashMap::new();

        load(&["#skip=me", "   # also = skipped"], &mut env, Options::default()).unwrap();

        assert!(env.is_empty());
    }

    #[test]
    fn test_quoted_whitespace_preserved() {
        let mut env = HashMap::new();

        load(&["a=\"  x  \""], &mut env, Options::default()).unwrap();

        assert_eq!(env["a"], "  x  ");
    }

    #[test]
    fn test_malformed_line_keeps_earlier_entries() {
        let mut env = HashMap::new();

        let result = load(&["foo=bar", "bad", "baz=qux"], &mut env, Options::default());

        assert!(matches!(
            result,
            Err(Error::MalformedLine { line: 2, ref content }) if content == "bad"
        ));
        assert_eq!(env, store(&[("foo", "bar")]));
    }

    #[test]
    fn test_malformed_first_line_mutates_nothing() {
        let mut env = HashMap::new();

        let result = load(&["bad"], &mut env, Options::default());

        assert!(matches!(result, Err(Error::MalformedLine { line: 1, .. })));
        assert!(env.is_empty());
    }

    #[test]
    fn test_unbalanced_quotes_error() {
        let mut env = HashMap::new();

        let result = load(&["foo=\"bar"], &mut env, Options::default());

        assert!(matches!(
            result,
            Err(Error::UnbalancedQuotes { line: 1, ref value }) if value == "\"bar"
        ));
        assert!(env.is_empty());
    }

    #[test]
    fn test_debug_flag_read_from_store() {
        let env = store(&[("DEBUG", "1")]);
        assert!(debug_enabled(&env, &Options::default()));
        assert!(!debug_enabled(&env, &Options::new().debug(false)));

        // An empty entry in the store shadows the process `DEBUG`.
        let env = store(&[("DEBUG", "")]);
        assert!(!debug_enabled(&env, &Options::default()));
        assert!(debug_enabled(&env, &Options::new().debug(true)));
    }

    #[test]
    fn test_debug_falls_back_to_process_env() {
        std::env::set_var("DEBUG", "1");

        let empty: HashMap<String, String> = HashMap::new();
        let enabled = debug_enabled(&empty, &Options::default());
        let shadowed = debug_enabled(&store(&[("DEBUG", "")]), &Options::default());

        std::env::remove_var("DEBUG");

        assert!(enabled);
        assert!(!shadowed);
    }

    #[test]
    fn test_debug_diagnostic_output() {
        let mut env = store(&[("DEBUG", "")]);
        let mut out = Vec::new();

        populate_with(
            "DEBUG=1\nfoo=\" bar \"\n".as_bytes(),
            &mut env,
            &Options::default(),
            &mut out,
        )
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "dotenv: foo= bar \n");
        assert_eq!(env["foo"], " bar ");
    }

    #[test]
    fn test_debug_diagnostic_printed_for_kept_values() {
        let mut env = store(&[("existing", "foo")]);
        let mut out = Vec::new();

        populate_with(
            "existing=baz\n# comment\n".as_bytes(),
            &mut env,
            &Options::new().debug(true),
            &mut out,
        )
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "dotenv: existing=baz\n");
        assert_eq!(env["existing"], "foo");
    }

    #[test]
    fn test_debug_disabled_writes_nothing() {
        let mut env = store(&[("DEBUG", "1")]);
        let mut out = Vec::new();

        populate_with(
            "foo=bar\n".as_bytes(),
            &mut env,
            &Options::new().debug(false),
            &mut out,
        )
        .unwrap();

        assert!(out.is_empty());
    }

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "disk on fire"));
            }
            self.served = true;
            let data = b"foo=bar\n";
            buf[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }
    }

    #[test]
    fn test_read_error_aborts_after_partial_apply() {
        let mut env = HashMap::new();
        let reader = BufReader::new(FailingReader { served: false });

        let result = populate(reader, &mut env, &Options::default());

        assert!(matches!(result, Err(Error::StreamRead { line: 2, .. })));
        assert_eq!(env, store(&[("foo", "bar")]));
    }
}
