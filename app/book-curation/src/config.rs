use crate::{
    APP_NAME,
    errors::{BookError, BookResult},
};
use gpui::{App, Global};
use serde::{Deserialize, Serialize};
use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::{Level, event};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BookCurationConfig {
    /// Directory the generated files land in, the working directory when unset.
    #[serde(rename = "outputDir")]
    pub output_dir: Option<PathBuf>,
    /// Entity-escape user text in generated pages. Off keeps the raw embedding.
    #[serde(rename = "escapeHtml", default)]
    pub escape_html: bool,
}

impl Global for BookCurationConfig {}

impl BookCurationConfig {
    pub fn path() -> BookResult<PathBuf> {
        let file = dirs_next::config_dir()
            .ok_or(BookError::ConfigDir)?
            .join(APP_NAME);
        if !file.exists() {
            std::fs::create_dir_all(&file)?;
        }
        Ok(file.join(CONFIG_FILE_NAME))
    }
    pub fn get() -> BookResult<Self> {
        Self::load_from(Self::path()?)
    }
    fn load_from(config_path: PathBuf) -> BookResult<Self> {
        let config = match std::fs::read_to_string(&config_path) {
            Ok(file) => match toml::from_str(&file) {
                Ok(config) => config,
                Err(err) => {
                    event!(Level::WARN, "invalid config, rewriting defaults: {}", err);
                    Self::write_default(&config_path)?
                }
            },
            Err(e) => {
                if let ErrorKind::NotFound = e.kind() {
                    Self::write_default(&config_path)?
                } else {
                    return Err(e.into());
                }
            }
        };
        Ok(config)
    }
    fn write_default(config_path: &Path) -> BookResult<Self> {
        let config = Self::default();
        let config_str = toml::to_string_pretty(&config)?;
        std::fs::write(config_path, config_str)?;
        Ok(config)
    }
    pub(crate) fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

pub fn init(cx: &mut App) {
    let config = match BookCurationConfig::get() {
        Ok(config) => config,
        Err(err) => {
            event!(Level::ERROR, "load config failed: {}", err);
            BookCurationConfig::default()
        }
    };
    event!(Level::INFO, output_dir = ?config.output_dir(), escape_html = config.escape_html, "config loaded");
    cx.set_global(config);
}
