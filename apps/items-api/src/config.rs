use core_config::{AppInfo, FromEnv, app_info, env_parse_or_default, server::ServerConfig};
use database::postgres::PostgresConfig;
use strum::{Display, EnumString};

pub use core_config::Environment;

/// Where items are kept, selected with `ITEMS_BACKEND`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StorageBackend {
    /// Process-local map, lost on restart
    #[default]
    Memory,
    Postgres,
}

/// Application configuration composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub backend: StorageBackend,
    /// Only used when `backend` is [`StorageBackend::Postgres`]
    pub database: PostgresConfig,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            environment: Environment::from_env(),
            backend: env_parse_or_default("ITEMS_BACKEND", "memory")?,
            database: PostgresConfig::from_env()?,
        })
    }
}
