//! The standard base-directory locations, computed once per environment
//! snapshot.

use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::env::EnvSnapshot;
use crate::error::BaseDirError;
use crate::resolve::{gen_paths, get_path};

const DATA_DIRS_FALLBACK: &str = "/usr/local/share/:/usr/share/";
const CONFIG_DIRS_FALLBACK: &str = "/etc/xdg";

/// The seven standard locations of the base-directory specification.
///
/// `data_dirs` and `config_dirs` are system-wide search paths in descending
/// priority; the `*_home` values are the per-user, highest-priority
/// locations. The record is immutable once built: it reflects the snapshot
/// it was computed from, never the live environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardLocations {
    pub home: PathBuf,
    pub data_home: PathBuf,
    pub config_home: PathBuf,
    pub state_home: PathBuf,
    pub cache_home: PathBuf,
    pub data_dirs: Vec<PathBuf>,
    pub config_dirs: Vec<PathBuf>,
    /// Usable for per-user runtime state. Only carries the XDG runtime-dir
    /// guarantees when `XDG_RUNTIME_DIR` was set; see
    /// [`StandardLocations::from_env`].
    pub runtime_dir: PathBuf,
}

impl StandardLocations {
    /// Compute every standard location from `env`.
    ///
    /// Fails with `HomeNotFound` when the snapshot carries no home
    /// directory, and with `MissingConfiguration` when a malformed
    /// colon-separated list (empty segment) aborts one of the search paths.
    ///
    /// When `XDG_RUNTIME_DIR` is unset or empty, `runtime_dir` falls back to
    /// `/tmp/user-<uid>` and a warning is logged: the fallback is
    /// conventionally writable but carries none of the permission or
    /// uniqueness guarantees of a real runtime directory, so callers
    /// relying on those must check them (or use
    /// [`StandardLocations::ensure_runtime_dir`]).
    pub fn from_env(env: &EnvSnapshot) -> Result<Self, BaseDirError> {
        let home = env.home().ok_or(BaseDirError::HomeNotFound)?.to_path_buf();

        let data_home = get_path(env, Some("XDG_DATA_HOME"), Some(home.join(".local/share")))?;
        let config_home = get_path(env, Some("XDG_CONFIG_HOME"), Some(home.join(".config")))?;
        let state_home = get_path(env, Some("XDG_STATE_HOME"), Some(home.join(".local/state")))?;
        let cache_home = get_path(env, Some("XDG_CACHE_HOME"), Some(home.join(".cache")))?;

        let data_dirs = gen_paths(env, "XDG_DATA_DIRS", Some(DATA_DIRS_FALLBACK))?
            .collect::<Result<Vec<_>, _>>()?;
        let config_dirs = gen_paths(env, "XDG_CONFIG_DIRS", Some(CONFIG_DIRS_FALLBACK))?
            .collect::<Result<Vec<_>, _>>()?;

        let runtime_fallback = PathBuf::from(format!("/tmp/user-{}", env.uid()));
        if env.var("XDG_RUNTIME_DIR").map_or(true, str::is_empty) {
            log::warn!(
                "XDG_RUNTIME_DIR is not set, using {}: no permission or uniqueness guarantees",
                runtime_fallback.display()
            );
        }
        let runtime_dir = get_path(env, Some("XDG_RUNTIME_DIR"), Some(runtime_fallback))?;

        Ok(Self {
            home,
            data_home,
            config_home,
            state_home,
            cache_home,
            data_dirs,
            config_dirs,
            runtime_dir,
        })
    }

    /// The process-wide locations, computed exactly once from the live
    /// environment at first use and never recomputed.
    ///
    /// Tests that need different values build their own instance with
    /// [`StandardLocations::from_env`] and a synthetic snapshot instead.
    pub fn global() -> Result<&'static StandardLocations, &'static BaseDirError> {
        static GLOBAL: Lazy<Result<StandardLocations, BaseDirError>> =
            Lazy::new(|| StandardLocations::from_env(&EnvSnapshot::capture()));
        GLOBAL.as_ref()
    }
}
