//! Configuration loading

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment,
    FeedConfig, MediaConfig, RedisConfig, ServerConfig, SnowflakeConfig,
};
