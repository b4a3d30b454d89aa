//! XDG base-directory lookup.
//!
//! Resolves the standard user/system directory locations (data, config,
//! state, cache, runtime) from an environment snapshot, and provides the
//! two resource operations on top of them: ensure a writable subdirectory
//! exists under a primary location, and find the highest-priority existing
//! occurrence of a subpath across a list of candidate directories.

pub mod env;
pub mod error;
pub mod locations;
pub mod resolve;
pub mod resource;

pub use crate::env::EnvSnapshot;
pub use crate::error::BaseDirError;
pub use crate::locations::StandardLocations;
pub use crate::resolve::{gen_paths, get_path, PathSpec};
pub use crate::resource::{ensure_resource, find_resource, Found};
