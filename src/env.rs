use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Immutable capture of the pieces of process state the resolver consults:
/// environment variables, the user's home directory, and the current uid.
///
/// A snapshot is taken once and never re-read; every lookup against the same
/// snapshot sees the same values. Tests build synthetic snapshots with
/// [`EnvSnapshot::from_parts`] instead of mutating the process environment.
#[derive(Debug, Clone)]
pub struct EnvSnapshot {
    vars: HashMap<String, String>,
    home: Option<PathBuf>,
    uid: u32,
}

impl EnvSnapshot {
    /// Capture the live process environment.
    ///
    /// Entries whose name or value is not valid UTF-8 are dropped; the
    /// variables this crate consults carry plain path strings in practice.
    pub fn capture() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        let home = directories_next::UserDirs::new().map(|u| u.home_dir().to_path_buf());
        let uid = nix::unistd::Uid::current().as_raw();
        Self { vars, home, uid }
    }

    /// Build a snapshot from explicit parts, bypassing the process
    /// environment entirely.
    pub fn from_parts(vars: HashMap<String, String>, home: Option<PathBuf>, uid: u32) -> Self {
        Self { vars, home, uid }
    }

    /// Raw value of `name`, or `None` when the variable is not in the
    /// snapshot. Empty values are returned as-is; emptiness is interpreted
    /// by the resolver, not here.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// The user's home directory, when the platform could determine one.
    pub fn home(&self) -> Option<&Path> {
        self.home.as_deref()
    }

    /// Uid of the capturing process (or whatever was supplied to
    /// `from_parts`).
    pub fn uid(&self) -> u32 {
        self.uid
    }
}
