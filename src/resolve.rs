//! Pure path resolution against an environment snapshot.
//!
//! `get_path` picks a single path from a variable-or-fallback pair;
//! `gen_paths` turns a colon-separated spec string into a lazy sequence of
//! paths. Neither touches the filesystem.

use std::path::PathBuf;

use crate::env::EnvSnapshot;
use crate::error::BaseDirError;

/// Resolve a single path from an environment variable or a fallback.
///
/// Precedence:
/// - a non-empty snapshot value for `variable` wins, taken verbatim;
/// - otherwise `fallback` is returned;
/// - otherwise `MissingConfiguration`.
///
/// No existence or absoluteness check is performed.
pub fn get_path(
    env: &EnvSnapshot,
    variable: Option<&str>,
    fallback: Option<PathBuf>,
) -> Result<PathBuf, BaseDirError> {
    let value = variable
        .and_then(|name| env.var(name))
        .filter(|v| !v.is_empty());
    single_path(value, fallback, variable)
}

// Single-path construction shared by `get_path` and `PathSpec` segments.
fn single_path(
    value: Option<&str>,
    fallback: Option<PathBuf>,
    variable: Option<&str>,
) -> Result<PathBuf, BaseDirError> {
    value
        .map(PathBuf::from)
        .or(fallback)
        .ok_or_else(|| BaseDirError::MissingConfiguration {
            variable: variable.map(str::to_owned),
        })
}

/// Lazily resolve a colon-separated path list from `variable`, falling back
/// to `fallback` when the variable is unset or empty.
///
/// Fails immediately, before any element is produced, when neither source
/// yields a non-empty spec string. The returned [`PathSpec`] yields one
/// `Result` per segment in priority order; re-invoke `gen_paths` to restart
/// the sequence.
pub fn gen_paths(
    env: &EnvSnapshot,
    variable: &str,
    fallback: Option<&str>,
) -> Result<PathSpec, BaseDirError> {
    let spec = env
        .var(variable)
        .filter(|v| !v.is_empty())
        .or(fallback)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| BaseDirError::MissingConfiguration {
            variable: Some(variable.to_owned()),
        })?;
    Ok(PathSpec {
        spec,
        pos: Some(0),
    })
}

/// Lazy iterator over the segments of a colon-separated path spec.
///
/// Each segment goes through the same single-path construction as
/// [`get_path`] with no variable and the segment as fallback. An empty
/// segment (consecutive, leading, or trailing colons) therefore resolves
/// like a missing value and yields `MissingConfiguration`; the iterator is
/// fused after the first error, so a malformed element aborts the rest of
/// the sequence.
#[derive(Debug, Clone)]
pub struct PathSpec {
    spec: String,
    // Byte offset of the next segment; `None` once exhausted or errored.
    pos: Option<usize>,
}

impl Iterator for PathSpec {
    type Item = Result<PathBuf, BaseDirError>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos?;
        let rest = &self.spec[start..];
        let (segment, next) = match rest.find(':') {
            Some(i) => (&rest[..i], Some(start + i + 1)),
            None => (rest, None),
        };
        self.pos = next;
        let fallback = (!segment.is_empty()).then(|| PathBuf::from(segment));
        let item = single_path(None, fallback, None);
        if item.is_err() {
            self.pos = None;
        }
        Some(item)
    }
}
