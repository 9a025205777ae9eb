use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::report::ReportSourceConfig;

pub const DEFAULT_PORT: u16 = 8080;

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
    pub report: ReportSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    pub fn load() -> Result<Self> {
        let explicit_path = env::var("CHIPREPORT_CONFIG").ok();
        let config_path = explicit_path
            .clone()
            .unwrap_or_else(|| "config.toml".to_string());

        let mut builder = config::Config::builder();

        if Path::new(&config_path).exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(&config_path)));
        } else if explicit_path.is_some() {
            bail!("CHIPREPORT_CONFIG points to missing file {}", config_path);
        }

        builder = builder.add_source(
            config::Environment::with_prefix("CHIPREPORT")
                .separator("_")
                .list_separator(",")
                .with_list_parse_key("report.files")
                .try_parsing(true),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            bail!("server.host must be specified");
        }
        if self.server.port == 0 {
            bail!("server.port must be non-zero");
        }
        self.report.to_runtime()?;
        Ok(())
    }

    /// Address the HTTP listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log filter used when `RUST_LOG` is unset
    pub fn log_filter(&self) -> String {
        if self.server.debug {
            "chipreport=debug,tower_http=debug".to_string()
        } else {
            self.logging.level.clone()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub debug: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            debug: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ReportSection {
    pub source: ReportSourceKind,
    pub files: Vec<String>,
}

impl ReportSection {
    pub fn to_runtime(&self) -> Result<ReportSourceConfig> {
        match self.source {
            ReportSourceKind::Static => Ok(ReportSourceConfig::Static),
            ReportSourceKind::Netlist => {
                let files: Vec<PathBuf> = self
                    .files
                    .iter()
                    .map(|f| f.trim())
                    .filter(|f| !f.is_empty())
                    .map(PathBuf::from)
                    .collect();

                if files.is_empty() {
                    bail!("report.files must list at least one netlist when source is 'netlist'");
                }

                Ok(ReportSourceConfig::Netlist { files })
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportSourceKind {
    #[default]
    Static,
    Netlist,
}
