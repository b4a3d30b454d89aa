use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by base-directory resolution and the resource helpers.
#[derive(Error, Debug)]
pub enum BaseDirError {
    /// Neither the environment variable nor the supplied fallback produced a
    /// usable path.
    #[error(
        "no usable path: neither `{}` nor a fallback is set",
        .variable.as_deref().unwrap_or("<no variable>")
    )]
    MissingConfiguration { variable: Option<String> },

    /// The platform could not determine the current user's home directory.
    #[error("could not determine home directory")]
    HomeNotFound,

    /// A joined sub-path is not lexically contained in its base directory.
    #[error("path `{}` escapes base directory `{}`", .path.display(), .base.display())]
    PathEscape { base: PathBuf, path: PathBuf },

    /// Directory creation failed for a reason other than pre-existence.
    #[error("failed to create directory `{}`", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
