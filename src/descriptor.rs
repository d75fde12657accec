use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ResolverError;

/// Which database backend a deployment uses, as named by the `PERSISTENCE`
/// environment variable. Matching is case-sensitive: `sqlite` is not a
/// recognized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PersistenceKind {
    Sqlite,
    SqlServer,
    PostgreSql,
    InMemory,
}

impl PersistenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersistenceKind::Sqlite => "Sqlite",
            PersistenceKind::SqlServer => "SqlServer",
            PersistenceKind::PostgreSql => "PostgreSql",
            PersistenceKind::InMemory => "InMemory",
        }
    }
}

impl fmt::Display for PersistenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersistenceKind {
    type Err = ResolverError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Sqlite" => Ok(PersistenceKind::Sqlite),
            "SqlServer" => Ok(PersistenceKind::SqlServer),
            "PostgreSql" => Ok(PersistenceKind::PostgreSql),
            "InMemory" => Ok(PersistenceKind::InMemory),
            other => Err(ResolverError::UnknownPersistence(other.to_string())),
        }
    }
}

/// Resolved connection for one backend, ready to hand to a driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    Sqlite { connection_string: String },
    SqlServer { connection_string: String },
    PostgreSql { connection_string: String },
    InMemory { database_name: String },
}

/// Outcome of a tooling resolution: the selected backend plus the connection
/// string looked up for it, if any. InMemory deployments carry no connection
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConnectionDescriptor {
    pub kind: PersistenceKind,
    pub connection_string: Option<String>,
}

impl ConnectionDescriptor {
    /// Maps the descriptor onto a design-time provider configuration.
    ///
    /// Returns `None` when the descriptor cannot drive a provider: InMemory is
    /// not wired for design-time construction, and the server backends need a
    /// connection string. Callers get an unconfigured context in that case,
    /// which is the historical behavior of the schema tooling.
    pub fn provider(&self) -> Option<ProviderConfig> {
        let connection_string = self.connection_string.clone()?;
        match self.kind {
            PersistenceKind::Sqlite => Some(ProviderConfig::Sqlite { connection_string }),
            PersistenceKind::SqlServer => Some(ProviderConfig::SqlServer { connection_string }),
            PersistenceKind::PostgreSql => Some(ProviderConfig::PostgreSql { connection_string }),
            PersistenceKind::InMemory => None,
        }
    }
}
