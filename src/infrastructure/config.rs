use std::path::PathBuf;

use color_eyre::eyre::Result;
use config::ConfigError;
use serde::Deserialize;

use crate::{
    domain::highlight::DEFAULT_KEYWORDS,
    infrastructure::cli::SortColumn,
    presentation::config::{keybindings, styles},
    utils,
};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Review behaviour: ordering, required schema, highlighting and export naming
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ReviewConfig {
    #[serde(default)]
    pub sort_column: SortColumn,
    #[serde(default = "default_required_columns")]
    pub required_columns: Vec<String>,
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    #[serde(default = "default_export_suffix")]
    pub export_suffix: String,
}

fn default_required_columns() -> Vec<String> {
    [
        SortColumn::Title.column_name(),
        SortColumn::PublicationTitle.column_name(),
        crate::domain::table::PUBLICATION_YEAR,
    ]
    .map(String::from)
    .to_vec()
}

fn default_keywords() -> Vec<String> {
    DEFAULT_KEYWORDS.map(String::from).to_vec()
}

fn default_export_suffix() -> String {
    String::from("litreview")
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            sort_column: SortColumn::default(),
            required_columns: default_required_columns(),
            keywords: default_keywords(),
            export_suffix: default_export_suffix(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub review: ReviewConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
}

impl Config {
    /// The embedded defaults only
    pub fn defaults() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Defaults overlaid with any `config.*` file found in the config directory
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_dir(utils::get_config_dir())
    }

    pub fn from_dir(config_dir: PathBuf) -> Result<Self, ConfigError> {
        let default_config = Self::defaults()?;
        let data_dir = utils::get_data_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
            let mut cfg = default_config;
            cfg.config._data_dir = data_dir;
            cfg.config._config_dir = config_dir;
            return Ok(cfg);
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }

        if cfg.review.keywords.is_empty() {
            cfg.review.keywords.clone_from(&default_config.review.keywords);
        }

        Ok(cfg)
    }
}
