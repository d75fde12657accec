use std::env;
use std::io;
use std::path::PathBuf;

/// Environment variable naming the database backend to use.
pub const PERSISTENCE_VAR: &str = "PERSISTENCE";

/// Environment variable naming the deployment environment, which selects the
/// `appsettings.{environment}.json` file.
pub const ENVIRONMENT_VAR: &str = "ASPNETCORE_ENVIRONMENT";

/// Environment assumed when `ASPNETCORE_ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "Development";

/// Snapshot of the process environment the resolver reads.
///
/// Captured once at startup so the resolution functions stay pure: tests build
/// one by hand instead of mutating process-wide environment variables.
#[derive(Debug, Clone)]
pub struct RuntimeEnv {
    /// `ASPNETCORE_ENVIRONMENT`, if set.
    pub environment: Option<String>,
    /// `PERSISTENCE`, if set.
    pub persistence: Option<String>,
    /// Base directory for resolving relative SQLite paths and locating the
    /// sibling project directory in the tooling path.
    pub working_dir: PathBuf,
}

impl RuntimeEnv {
    pub fn from_process() -> io::Result<Self> {
        Ok(Self {
            environment: env::var(ENVIRONMENT_VAR).ok(),
            persistence: env::var(PERSISTENCE_VAR).ok(),
            working_dir: env::current_dir()?,
        })
    }
}
