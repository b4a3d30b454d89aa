//! Resource helpers on top of the standard locations: create a writable
//! subdirectory under a base, or walk a priority-ordered list of bases for
//! an existing subpath.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::BaseDirError;
use crate::locations::StandardLocations;

/// Ensure a subdirectory of `base` exists and return its path.
///
/// The components are joined onto `base` (each component may itself contain
/// separators). The joined path must stay lexically within `base`: an
/// absolute component or `..` traversal past `base` fails with `PathEscape`
/// before anything touches the filesystem. Creation uses `create_dir_all`
/// semantics, so an already-existing directory is success and concurrent
/// calls for the same path are race-tolerant.
pub fn ensure_resource<I>(base: &Path, sub_paths: I) -> Result<PathBuf, BaseDirError>
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let sub_path = join_components(sub_paths);
    let path = base.join(&sub_path);
    check_contained(base, &sub_path, &path)?;
    fs::create_dir_all(&path).map_err(|source| BaseDirError::Filesystem {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Walk `base_paths` in priority order, yielding `base/sub_path` for every
/// base where it currently exists.
///
/// The sub-path is joined once, not per-base. Existence is checked lazily,
/// at the moment an element is produced. A containment violation yields
/// `Err(PathEscape)` for that element and ends the sequence; re-invoke
/// `find_resource` to walk the list again.
pub fn find_resource<B, S>(base_paths: B, sub_paths: S) -> Found
where
    B: IntoIterator<Item = PathBuf>,
    S: IntoIterator,
    S::Item: AsRef<Path>,
{
    Found {
        bases: base_paths.into_iter().collect::<Vec<_>>().into_iter(),
        sub_path: join_components(sub_paths),
        done: false,
    }
}

/// Lazy iterator returned by [`find_resource`]: existing occurrences of a
/// subpath across a list of bases, highest priority first. Fused after the
/// first error.
#[derive(Debug)]
pub struct Found {
    bases: std::vec::IntoIter<PathBuf>,
    sub_path: PathBuf,
    done: bool,
}

impl Iterator for Found {
    type Item = Result<PathBuf, BaseDirError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        for base in self.bases.by_ref() {
            let path = base.join(&self.sub_path);
            if let Err(e) = check_contained(&base, &self.sub_path, &path) {
                self.done = true;
                return Some(Err(e));
            }
            if path.exists() {
                return Some(Ok(path));
            }
        }
        self.done = true;
        None
    }
}

fn join_components<I>(sub_paths: I) -> PathBuf
where
    I: IntoIterator,
    I::Item: AsRef<Path>,
{
    let mut sub = PathBuf::new();
    for part in sub_paths {
        sub.push(part.as_ref());
    }
    sub
}

// Lexical containment: the sub-path must not carry the joined path out of
// `base`. Root/prefix components restart the join and `..` past the top
// climbs out; both are escapes, whether or not the paths exist.
fn check_contained(base: &Path, sub_path: &Path, joined: &Path) -> Result<(), BaseDirError> {
    let mut depth: usize = 0;
    for component in sub_path.components() {
        match component {
            Component::Normal(_) => depth += 1,
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return Err(escape(base, joined));
                }
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => return Err(escape(base, joined)),
        }
    }
    Ok(())
}

fn escape(base: &Path, joined: &Path) -> BaseDirError {
    BaseDirError::PathEscape {
        base: base.to_path_buf(),
        path: joined.to_path_buf(),
    }
}

impl StandardLocations {
    /// Ensure a subdirectory of `data_home` exists. See [`ensure_resource`].
    pub fn ensure_data_resource<I>(&self, sub_paths: I) -> Result<PathBuf, BaseDirError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        ensure_resource(&self.data_home, sub_paths)
    }

    /// Ensure a subdirectory of `config_home` exists. See [`ensure_resource`].
    pub fn ensure_config_resource<I>(&self, sub_paths: I) -> Result<PathBuf, BaseDirError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        ensure_resource(&self.config_home, sub_paths)
    }

    /// Ensure a subdirectory of `state_home` exists. See [`ensure_resource`].
    pub fn ensure_state_resource<I>(&self, sub_paths: I) -> Result<PathBuf, BaseDirError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        ensure_resource(&self.state_home, sub_paths)
    }

    /// Ensure a subdirectory of `cache_home` exists. See [`ensure_resource`].
    pub fn ensure_cache_resource<I>(&self, sub_paths: I) -> Result<PathBuf, BaseDirError>
    where
        I: IntoIterator,
        I::Item: AsRef<Path>,
    {
        ensure_resource(&self.cache_home, sub_paths)
    }

    /// Search `data_home` followed by `data_dirs` for an existing subpath.
    pub fn find_data_resource<S>(&self, sub_paths: S) -> Found
    where
        S: IntoIterator,
        S::Item: AsRef<Path>,
    {
        let bases =
            std::iter::once(self.data_home.clone()).chain(self.data_dirs.iter().cloned());
        find_resource(bases, sub_paths)
    }

    /// Search `config_home` followed by `config_dirs` for an existing subpath.
    pub fn find_config_resource<S>(&self, sub_paths: S) -> Found
    where
        S: IntoIterator,
        S::Item: AsRef<Path>,
    {
        let bases =
            std::iter::once(self.config_home.clone()).chain(self.config_dirs.iter().cloned());
        find_resource(bases, sub_paths)
    }

    /// Create `runtime_dir` with mode `0o700` when it is missing.
    ///
    /// The XDG runtime directory must be private to the user; when this
    /// crate fell back to the `/tmp/user-<uid>` default the directory does
    /// not exist yet and gets created here with owner-only permissions.
    /// Succeeds silently when the directory is already present.
    pub fn ensure_runtime_dir(&self) -> Result<&Path, BaseDirError> {
        use std::os::unix::fs::DirBuilderExt;
        let mut builder = fs::DirBuilder::new();
        builder.recursive(true).mode(0o700);
        builder
            .create(&self.runtime_dir)
            .map_err(|source| BaseDirError::Filesystem {
                path: self.runtime_dir.clone(),
                source,
            })?;
        Ok(&self.runtime_dir)
    }
}
