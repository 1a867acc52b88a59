use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub assets: AssetSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub results: ResultSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 3000 }

/// Location of the built single-page application
#[derive(Debug, Clone, Deserialize)]
pub struct AssetSettings {
    #[serde(default = "default_asset_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            dir: default_asset_dir(),
            index_file: default_index_file(),
        }
    }
}

impl AssetSettings {
    pub fn index_path(&self) -> PathBuf {
        self.dir.join(&self.index_file)
    }
}

fn default_asset_dir() -> PathBuf { PathBuf::from("wwwroot") }
fn default_index_file() -> String { "index.html".to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// Venue file replacing the bundled catalog
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResultSettings {
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

impl Default for ResultSettings {
    fn default() -> Self {
        Self {
            featured_count: default_featured_count(),
        }
    }
}

fn default_featured_count() -> usize { crate::core::matcher::DEFAULT_FEATURED_COUNT }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "full".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local configuration file (config/local.toml)
    /// 4. Environment variables (prefixed with NIGHTOUT__)
    /// 5. PORT, LOG_LEVEL and LOG_FORMAT
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., NIGHTOUT__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("NIGHTOUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_overrides(settings, &PlatformOverrides::from_env())?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path.
    ///
    /// PORT, LOG_LEVEL and LOG_FORMAT still take precedence over the file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("NIGHTOUT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_overrides(settings, &PlatformOverrides::from_env())?;

        settings.try_deserialize()
    }
}

/// Unprefixed variables set by hosting platforms and process managers
#[derive(Debug, Clone, Default)]
pub struct PlatformOverrides {
    pub port: Option<String>,
    pub log_level: Option<String>,
    pub log_format: Option<String>,
}

impl PlatformOverrides {
    pub fn from_env() -> Self {
        use std::env;

        Self {
            port: env::var("PORT").ok(),
            log_level: env::var("LOG_LEVEL").ok(),
            log_format: env::var("LOG_FORMAT").ok(),
        }
    }
}

/// Layer platform overrides on top of every other source
pub fn apply_overrides(settings: Config, overrides: &PlatformOverrides) -> Result<Config, ConfigError> {
    let mut builder = Config::builder().add_source(settings);

    if let Some(port) = &overrides.port {
        let port: u16 = port
            .trim()
            .parse()
            .map_err(|e| ConfigError::Message(format!("Invalid PORT {:?}: {}", port, e)))?;
        builder = builder.set_override("server.port", i64::from(port))?;
    }
    if let Some(level) = &overrides.log_level {
        builder = builder.set_override("logging.level", level.as_str())?;
    }
    if let Some(format) = &overrides.log_format {
        builder = builder.set_override("logging.format", format.as_str())?;
    }

    builder.build()
}
