use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ResolverError;

/// The slice of an `appsettings.{environment}.json` file the resolver cares
/// about. Other sections (`Logging`, `AllowedHosts`, ...) are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppSettings {
    #[serde(rename = "ConnectionStrings", default)]
    pub connection_strings: BTreeMap<String, String>,
}

impl AppSettings {
    /// Loads `appsettings.{environment}.json` from `base_path`.
    ///
    /// Read and parse failures are surfaced with the offending path attached;
    /// nothing is retried or translated beyond that.
    pub fn load(base_path: &Path, environment: &str) -> Result<Self, ResolverError> {
        let path = base_path.join(format!("appsettings.{environment}.json"));
        let content = fs::read_to_string(&path).map_err(|source| ResolverError::SettingsRead {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content)
            .map_err(|source| ResolverError::SettingsParse { path, source })
    }

    pub fn connection_string(&self, name: &str) -> Option<&str> {
        self.connection_strings.get(name).map(String::as_str)
    }
}
