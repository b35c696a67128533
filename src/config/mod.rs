//! Client and logging configuration

mod app_config;

pub use app_config::{
    AppConfig, ClientConfig, LogFormat, LoggingConfig, DEFAULT_BASE_ENDPOINT, DEFAULT_TIMEOUT,
};
