//! API configuration

use domain_contact::CrmConfig;
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// MySQL connection string
    pub database_url: String,
    /// Hosted CRM tenant domain ({tenant}.freshsales.io)
    pub crm_tenant_domain: String,
    /// CRM API key
    pub crm_api_key: String,
    /// Overrides the hosted CRM URL entirely when set
    pub crm_base_url: Option<String>,
    /// CRM request timeout in seconds
    pub crm_timeout_secs: u64,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "mysql://localhost/contacts".to_string(),
            crm_tenant_domain: "example".to_string(),
            crm_api_key: String::new(),
            crm_base_url: None,
            crm_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the CRM adapter configuration.
    ///
    /// An explicit base URL wins over the tenant-derived hosted URL.
    pub fn crm_config(&self) -> CrmConfig {
        let mut crm = match &self.crm_base_url {
            Some(url) => CrmConfig::new(url, &self.crm_api_key),
            None => CrmConfig::for_tenant(&self.crm_tenant_domain, &self.crm_api_key),
        };
        crm.timeout_secs = self.crm_timeout_secs;
        crm
    }
}
