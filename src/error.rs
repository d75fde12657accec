use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolverError {
    /// Raised by the hosted-service path when `PERSISTENCE` is unset, names an
    /// unknown backend, or names a backend no registration is wired for. The
    /// service must fail to start; there is no default provider.
    #[error("No DbContext defined")]
    NoContextDefined,

    /// Tooling path only: `PERSISTENCE` was set to something that is not a
    /// recognized persistence kind.
    #[error("unrecognized PERSISTENCE value: {0}")]
    UnknownPersistence(String),

    /// The settings file has no `ConnectionStrings` entry for the selected
    /// backend.
    #[error("no connection string configured for {0}")]
    MissingConnectionString(String),

    /// A SQLite connection-string template did not contain the path
    /// placeholder exactly once.
    #[error("connection string template must contain `#PATH#` exactly once: {template}")]
    MalformedTemplate { template: String },

    #[error("failed to read settings file {}", .path.display())]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings file {}", .path.display())]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
