use std::env;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use super::config_types::{DatabaseConfiguration, LoggingConfiguration, ServerConfiguration};

const RESOURCES_DIR_VAR: &str = "VELA_RESOURCES_DIR";

#[derive(Debug, Deserialize)]
pub struct Configuration {
    pub server: ServerConfiguration,
    pub database: DatabaseConfiguration,
    pub logging: LoggingConfiguration,
}

impl Configuration {
    /// Layers, lowest precedence first: built-in defaults, `application.yml`,
    /// `application-<profile>.yml` for each entry of `RUST_PROFILES_ACTIVE`,
    /// `VELA__<SECTION>__<KEY>` variables, and finally `PORT` / `DATABASE_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        let resources_dir = env::var(RESOURCES_DIR_VAR).unwrap_or_else(|_| "resources".to_string());
        let profiles_raw_string = env::var("RUST_PROFILES_ACTIVE").unwrap_or_default();

        Self::build(
            &resources_dir,
            &active_profiles(&profiles_raw_string),
            env::var("PORT").ok(),
            env::var("DATABASE_URL").ok(),
        )?
        .try_deserialize()
    }

    fn build(
        resources_dir: &str,
        profiles: &[&str],
        port: Option<String>,
        database_url: Option<String>,
    ) -> Result<Config, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("database.run_migrations", true)?
            .set_default("database.max_connections", 10)?
            .set_default("logging.jaeger_enabled", false)?
            .set_default("logging.level.root", "info")?
            .add_source(File::with_name(&format!("{resources_dir}/application.yml")).required(false));

        for profile in profiles {
            builder = builder.add_source(
                File::with_name(&format!("{resources_dir}/application-{profile}.yml")).required(false),
            );
        }

        builder
            .add_source(Environment::with_prefix("VELA").prefix_separator("__").separator("__"))
            .set_override_option("server.port", port)?
            .set_override_option("database.url", database_url)?
            .build()
    }
}

fn active_profiles(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_are_trimmed_and_empty_entries_dropped() {
        assert_eq!(active_profiles(" local, ,prod ,"), vec!["local", "prod"]);
        assert!(active_profiles("").is_empty());
    }

    #[test]
    fn defaults_apply_without_any_resource_file() {
        let config: Configuration = Configuration::build(
            "does-not-exist",
            &[],
            None,
            Some("sqlite::memory:".to_string()),
        )
        .and_then(Config::try_deserialize)
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.database.run_migrations);
        assert!(!config.logging.jaeger_enabled);
        assert_eq!(config.logging.level.root.as_deref(), Some("info"));
    }

    #[test]
    fn port_variable_overrides_every_other_layer() {
        let config: Configuration = Configuration::build(
            "does-not-exist",
            &[],
            Some("8088".to_string()),
            Some("sqlite::memory:".to_string()),
        )
        .and_then(Config::try_deserialize)
        .unwrap();

        assert_eq!(config.server.port, 8088);
        assert_eq!(config.database.url, "sqlite::memory:");
    }

    #[test]
    fn missing_database_url_is_a_configuration_error() {
        let config: Result<Configuration, ConfigError> =
            Configuration::build("does-not-exist", &[], None, None).and_then(Config::try_deserialize);

        assert!(config.is_err());
    }
}
