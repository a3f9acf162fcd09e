use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub mod validator;

use crate::cli::Cli;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub document: DocumentSettings,
    #[serde(default)]
    pub generator: GeneratorSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DocumentSettings {
    /// OpenAPI document (YAML or JSON) to mock
    pub path: PathBuf,
}

#[derive(Debug, Default, Deserialize, Serialize, Clone)]
pub struct GeneratorSettings {
    #[serde(default)]
    pub reference_scope: ReferenceScope,
}

/// How long a generated `$ref` value is reused.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferenceScope {
    /// One value per reference for the whole document pass
    #[default]
    Document,
    /// Fresh values for every response schema
    Response,
}

impl Settings {
    pub fn new_with_cli(cli: &Cli) -> Result<Self, anyhow::Error> {
        let config_path = &cli.config;
        let file = Config::builder()
            .add_source(File::from(config_path.clone()).required(false))
            .build()?;
        let document_from_file = file.get_string("document.path").is_ok();

        let s = Self::builder()?.add_source(file).build()?;
        let mut settings: Settings = s.try_deserialize()?;

        // document paths in the config file are relative to the file itself;
        // the built-in default stays relative to the working directory
        if let Some(root) = config_path.parent().filter(|_| document_from_file) {
            if settings.document.path.is_relative() {
                settings.document.path = root.join(&settings.document.path);
            }
        }

        settings.apply_cli_overrides(cli);

        Self::validated(settings)
    }

    /// Load `<root>/oasmock.{toml,yaml,json}`. A relative document path is
    /// taken relative to `root`.
    pub fn from_root(root: &str) -> Result<Self, anyhow::Error> {
        let config_path = Path::new(root).join("oasmock");
        let s = Self::builder()?
            .add_source(File::from(config_path).required(false))
            .build()?;

        let mut settings: Settings = s.try_deserialize()?;

        if settings.document.path.is_relative() {
            settings.document.path = Path::new(root).join(&settings.document.path);
        }

        Self::validated(settings)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("document.path", "openapi.yaml")?
            .set_default("generator.reference_scope", "document")?)
    }

    fn apply_cli_overrides(&mut self, cli: &Cli) {
        if let Some(host) = &cli.host {
            self.server.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.server.port = port;
        }
        if let Some(document) = &cli.document {
            self.document.path = document.clone();
        }
    }

    fn validated(settings: Settings) -> Result<Self, anyhow::Error> {
        validator::ConfigValidator::validate(&settings).map_err(|errors| {
            let error_messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                error_messages.join("\n")
            )
        })?;

        Ok(settings)
    }
}
