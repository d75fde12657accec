//! Database persistence resolution for appsettings-driven deployments.
//!
//! Reads the `PERSISTENCE` and `ASPNETCORE_ENVIRONMENT` variables (captured
//! once into a [`RuntimeEnv`]) together with an `appsettings.{env}.json` file
//! and produces a ready-to-use connection descriptor for one of the supported
//! backends: SQLite, SQL Server, PostgreSQL or an in-memory store.
//!
//! Two entry points exist. [`configure_hosted`] runs at application startup
//! and yields a [`ProviderRegistration`] for the caller's service container.
//! [`resolve_for_tooling`] (and its [`create_db_context`] wrapper) is the
//! design-time path used by offline schema tooling, which loads settings from
//! a sibling project directory and builds a context directly.
//!
//! SQLite connection strings may carry a `#PATH#` placeholder that is replaced
//! with a runtime-resolved filesystem path; see
//! [`resolve_path_in_connection_string`].

#![forbid(unsafe_code)]

pub use self::descriptor::{ConnectionDescriptor, PersistenceKind, ProviderConfig};
pub use self::env::RuntimeEnv;
pub use self::error::ResolverError;
pub use self::resolver::{
    PATH_TOKEN, ProviderRegistration, ServiceLifetime, configure_hosted, create_db_context,
    resolve_for_tooling, resolve_path_in_connection_string,
};
pub use self::settings::AppSettings;

pub mod descriptor;
pub mod env;
pub mod error;
pub mod resolver;
pub mod settings;
