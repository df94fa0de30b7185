use anyhow::Context;
use serde::Deserialize;
use std::net::SocketAddr;

pub const DEFAULT_CONFIG_FILE: &str = "config/directory";
pub const ENV_PREFIX: &str = "SUPERVISOR_DIRECTORY";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub api: ApiSettings,
    pub notify: NotifySettings,
    pub page: PageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind_addr: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotifySettings {
    pub mail_domain: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PageSettings {
    pub title: String,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("Invalid server.bind_addr {:?}", self.bind_addr))
    }
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from(DEFAULT_CONFIG_FILE)
}

/// Defaults, then the optional file at `path`, then `SUPERVISOR_DIRECTORY__*`
/// environment variables (`__` separates nested keys).
pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .set_default("server.bind_addr", "0.0.0.0:8080")?
        .set_default("api.base_url", "https://supervisor-back.onrender.com")?
        .set_default("notify.mail_domain", "gmail.com")?
        .set_default("page.title", "Supervisors")?
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
