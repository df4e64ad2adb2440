use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "APP_ENV";

/// Configuration options for the catalog service.
///
/// Sources are layered as `config/default.yaml`, then `config/{APP_ENV}.yaml`,
/// then `APP__SECTION__KEY` environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: HttpConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: BasicAuthConfig,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());

        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "HttpConfig::default_address")]
    pub address: String,
    #[serde(default = "HttpConfig::default_port")]
    pub port: u16,
}

impl HttpConfig {
    fn default_address() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: Self::default_address(),
            port: Self::default_port(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "DatabaseConfig::default_url")]
    pub url: String,
    #[serde(default = "DatabaseConfig::default_pool_size")]
    pub pool_size: u32,
}

impl DatabaseConfig {
    fn default_url() -> String {
        "app.db".to_string()
    }

    fn default_pool_size() -> u32 {
        8
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            pool_size: Self::default_pool_size(),
        }
    }
}

/// The single credential pair accepted by the API.
#[derive(Clone, Deserialize)]
pub struct BasicAuthConfig {
    #[serde(default = "BasicAuthConfig::default_username")]
    pub username: String,
    #[serde(default = "BasicAuthConfig::default_password")]
    pub password: String,
}

impl BasicAuthConfig {
    fn default_username() -> String {
        "admin".to_string()
    }

    fn default_password() -> String {
        "password123".to_string()
    }
}

impl Default for BasicAuthConfig {
    fn default() -> Self {
        Self {
            username: Self::default_username(),
            password: Self::default_password(),
        }
    }
}

impl std::fmt::Debug for BasicAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}
