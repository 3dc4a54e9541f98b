//! Layered configuration: built-in defaults, then an optional YAML file, then
//! `STOREFRONT_*` environment variables, then a plain `DATABASE_URL`.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Yaml},
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "storefront.yaml";
pub const ENV_PREFIX: &str = "STOREFRONT_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Sea-ORM connection string (`sqlite://`, `postgres://` or `mysql://`)
    pub database_url: String,
    /// Address the HTTP server listens on
    pub bind_addr: String,
    /// `tracing` filter directives; `RUST_LOG` takes precedence
    pub log: String,
    /// Insert the sample catalog after migrating, when the tables are empty
    pub seed_on_start: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite://storefront.db?mode=rwc".to_string(),
            bind_addr: "0.0.0.0:3000".to_string(),
            log: "info,sea_orm=warn".to_string(),
            seed_on_start: false,
        }
    }
}

impl AppConfig {
    /// The full provider stack. `path` replaces `storefront.yaml`; a missing
    /// file contributes nothing.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Env::raw().only(&["DATABASE_URL"]))
    }

    /// # Errors
    ///
    /// Returns a `figment::Error` when a layer holds a value of the wrong type.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        Self::figment(path).extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_any_source() {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .extract()
            .unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
        assert!(!config.seed_on_start);
    }

    #[test]
    fn yaml_overrides_only_the_keys_it_names() {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::string(
                "database_url: 'sqlite::memory:'\nseed_on_start: true\n",
            ))
            .extract()
            .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert!(config.seed_on_start);
        assert_eq!(config.log, "info,sea_orm=warn");
    }

    #[test]
    fn later_layers_win() {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::string("bind_addr: 127.0.0.1:8080\n"))
            .merge(Serialized::default("bind_addr", "127.0.0.1:9090"))
            .extract()
            .unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:9090");
    }

    #[test]
    fn wrong_type_is_an_error() {
        let result: Result<AppConfig, _> = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::string("seed_on_start: [1, 2]\n"))
            .extract();
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_is_ignored() {
        let config = AppConfig::figment(Some(Path::new("does-not-exist.yaml")))
            .extract::<AppConfig>()
            .unwrap();
        assert!(!config.bind_addr.is_empty());
    }
}
