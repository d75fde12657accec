use std::path::Path;

use tracing::info;
use uuid::Uuid;

use crate::descriptor::{ConnectionDescriptor, PersistenceKind, ProviderConfig};
use crate::env::{DEFAULT_ENVIRONMENT, RuntimeEnv};
use crate::error::ResolverError;
use crate::settings::AppSettings;

/// Placeholder inside a SQLite connection-string template that stands for a
/// runtime-resolved filesystem path.
pub const PATH_TOKEN: &str = "#PATH#";

/// Lifetime the caller's service container should register the context with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceLifetime {
    Singleton,
    Scoped,
    Transient,
}

/// What the hosted-service path hands to the service container: a fully
/// resolved provider plus the lifetime to register it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRegistration {
    pub provider: ProviderConfig,
    pub lifetime: ServiceLifetime,
}

/// Substitutes the `#PATH#` placeholder in a connection-string template with
/// `base_path`.
///
/// The template must contain the placeholder exactly once. The suffix after
/// the placeholder is path-joined onto `base_path`, so both
/// `Data Source=#PATH#/app.db` and `Data Source=#PATH#app.db` resolve to the
/// same string.
pub fn resolve_path_in_connection_string(
    base_path: &Path,
    template: &str,
) -> Result<String, ResolverError> {
    let parts: Vec<&str> = template.split(PATH_TOKEN).collect();
    if parts.len() != 2 {
        return Err(ResolverError::MalformedTemplate {
            template: template.to_string(),
        });
    }
    let suffix = parts[1].trim_start_matches(['/', '\\']);
    Ok(format!("{}{}", parts[0], base_path.join(suffix).display()))
}

/// Startup-time resolution for a hosted service.
///
/// Dispatches on the `PERSISTENCE` value captured in `env` and returns the
/// provider registration for the caller's service container. An unset or
/// unrecognized value is a fatal configuration error: the service must not
/// come up with a silently chosen default backend.
pub fn configure_hosted(
    env: &RuntimeEnv,
    settings: &AppSettings,
) -> Result<ProviderRegistration, ResolverError> {
    let kind = env
        .persistence
        .as_deref()
        .and_then(|raw| raw.parse::<PersistenceKind>().ok())
        .ok_or(ResolverError::NoContextDefined)?;

    let provider = match kind {
        PersistenceKind::InMemory => ProviderConfig::InMemory {
            database_name: Uuid::new_v4().to_string(),
        },
        PersistenceKind::Sqlite => {
            let template = require_connection_string(settings, kind)?;
            ProviderConfig::Sqlite {
                connection_string: resolve_path_in_connection_string(&env.working_dir, template)?,
            }
        }
        PersistenceKind::SqlServer => ProviderConfig::SqlServer {
            connection_string: require_connection_string(settings, kind)?.to_string(),
        },
        // Recognized kind, but startup registration was never wired for it.
        PersistenceKind::PostgreSql => return Err(ResolverError::NoContextDefined),
    };

    Ok(ProviderRegistration {
        provider,
        lifetime: ServiceLifetime::Scoped,
    })
}

/// Design-time resolution for offline schema tooling.
///
/// Loads `appsettings.{environment}.json` from the sibling `project_name`
/// directory next to the working directory, looks up the connection string
/// for the selected backend and applies SQLite path substitution. Environment
/// defaults to `Development` and persistence to `Sqlite` when unset.
pub fn resolve_for_tooling(
    project_name: &str,
    env: &RuntimeEnv,
) -> Result<ConnectionDescriptor, ResolverError> {
    let environment = env.environment.as_deref().unwrap_or(DEFAULT_ENVIRONMENT);
    let kind: PersistenceKind = env
        .persistence
        .as_deref()
        .unwrap_or(PersistenceKind::Sqlite.as_str())
        .parse()?;
    info!("environment is {environment}, persistence is {kind}");

    let base_path = env.working_dir.join("..").join(project_name);
    let settings = AppSettings::load(&base_path, environment)?;

    let mut connection_string = settings.connection_string(kind.as_str()).map(str::to_string);
    if kind == PersistenceKind::Sqlite {
        let template = connection_string.ok_or_else(|| {
            ResolverError::MissingConnectionString(kind.as_str().to_string())
        })?;
        connection_string = Some(resolve_path_in_connection_string(&base_path, &template)?);
    }

    match connection_string.as_deref() {
        Some(connection_string) => info!("connection string is {connection_string}"),
        None => info!("no connection string configured for {kind}"),
    }

    Ok(ConnectionDescriptor {
        kind,
        connection_string,
    })
}

/// Resolves the design-time connection and constructs a context through the
/// caller-supplied factory.
pub fn create_db_context<C>(
    project_name: &str,
    env: &RuntimeEnv,
    build: impl FnOnce(ConnectionDescriptor) -> C,
) -> Result<C, ResolverError> {
    let descriptor = resolve_for_tooling(project_name, env)?;
    Ok(build(descriptor))
}

fn require_connection_string(
    settings: &AppSettings,
    kind: PersistenceKind,
) -> Result<&str, ResolverError> {
    settings
        .connection_string(kind.as_str())
        .ok_or_else(|| ResolverError::MissingConnectionString(kind.as_str().to_string()))
}
