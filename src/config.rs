use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub hubspot: HubSpotConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_contact_email")]
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
            contact_email: default_contact_email(),
        }
    }
}

impl SiteConfig {
    /// Absolute URL of a site path, e.g. `/contact`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

fn default_site_name() -> String {
    "Kairos Performance".to_string()
}

fn default_base_url() -> String {
    "https://kairosperformance.ai".to_string()
}

fn default_contact_email() -> String {
    "hello@kairosperformance.ai".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct HubSpotConfig {
    #[serde(default = "default_hubspot_endpoint")]
    pub endpoint: String,
    /// Account identifier. Required to accept submissions.
    #[serde(default)]
    pub portal_id: Option<String>,
    /// Form identifier. Required to accept submissions.
    #[serde(default)]
    pub form_id: Option<String>,
    #[serde(default = "default_page_name")]
    pub page_name: String,
}

impl Default for HubSpotConfig {
    fn default() -> Self {
        Self {
            endpoint: default_hubspot_endpoint(),
            portal_id: None,
            form_id: None,
            page_name: default_page_name(),
        }
    }
}

fn default_hubspot_endpoint() -> String {
    kairos_contact::hubspot::DEFAULT_ENDPOINT.to_string()
}

fn default_page_name() -> String {
    kairos_contact::hubspot::DEFAULT_PAGE_NAME.to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. HUBSPOT_PORTAL_ID / HUBSPOT_FORM_ID
    /// 2. Environment variables (KAIROS__HUBSPOT__PORTAL_ID, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: a missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("KAIROS")
                .separator("__")
                .try_parsing(true),
        );

        // Plain variable names used by hosted deployments
        if let Ok(portal_id) = env::var("HUBSPOT_PORTAL_ID") {
            builder = builder.set_override("hubspot.portal_id", portal_id)?;
        }
        if let Ok(form_id) = env::var("HUBSPOT_FORM_ID") {
            builder = builder.set_override("hubspot.form_id", form_id)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.site.base_url.trim().is_empty() {
            return Err("Site base_url must not be empty".to_string());
        }
        if self.hubspot.endpoint.trim().is_empty() {
            return Err("HubSpot endpoint must not be empty".to_string());
        }
        Ok(())
    }
}
