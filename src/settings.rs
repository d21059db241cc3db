//! Runtime settings for the `shelver` binary.
//!
//! Values are layered with the `config` crate: built-in defaults first, then
//! an optional settings file (`shelver.json`, `shelver.toml`, ...), then
//! `SHELVER_*` environment variables such as `SHELVER_SAMPLE_SIZE=40`.

use std::path::PathBuf;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::error::{CatalogError, Result};

pub const DEFAULT_SETTINGS_FILE: &str = "shelver";
pub const DEFAULT_OUTPUT_PATH: &str = "book_catalog.txt";

/// Where the books fed to the catalog come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookSource {
    Fixed,
    Random,
    File,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub source: BookSource,
    pub sample_size: usize,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub books_path: Option<PathBuf>,
    pub output_path: String,
    pub preview: usize,
}

impl Settings {
    /// Loads settings from `file` (extension optional) or from `shelver.*`
    /// in the working directory, then applies `SHELVER_*` variables. A
    /// missing default file is not an error.
    pub fn load(file: Option<&str>) -> Result<Self> {
        let name = file.unwrap_or(DEFAULT_SETTINGS_FILE);
        Self::build(
            Self::defaults()?
                .add_source(File::with_name(name).required(file.is_some()))
                .add_source(Environment::with_prefix("SHELVER")),
        )
    }

    /// Loads defaults and `file` only, ignoring the environment.
    pub fn load_file(file: &str) -> Result<Self> {
        Self::build(Self::defaults()?.add_source(File::with_name(file)))
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("source", "fixed")?
            .set_default("sample_size", 20_i64)?
            .set_default("output_path", DEFAULT_OUTPUT_PATH)?
            .set_default("preview", 5_i64)?)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.source == BookSource::File && self.books_path.is_none() {
            return Err(CatalogError::Config(
                "source is 'file' but no books_path was given".into(),
            ));
        }
        Ok(())
    }

    /// The listing file to write, or `None` when writing is disabled by an
    /// empty `output_path`.
    pub fn output(&self) -> Option<PathBuf> {
        let trimmed = self.output_path.trim();
        (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
    }
}
