//! Configuration for savebin
//!
//! Centralized configuration with sensible defaults. The default file name is
//! an explicit per-store setting here, not a process-wide mutable global.

use std::path::PathBuf;

/// Main configuration for a [`SaveStore`](crate::SaveStore) instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Path Configuration
    // -------------------------------------------------------------------------
    /// Base directory for all store files, created on demand
    pub base_dir: PathBuf,

    /// File name used when callers do not pick one explicitly
    pub default_file_name: String,

    /// Extension selector applied when assembling store file paths
    pub file_format: FileFormat,
}

/// On-disk file extension selector
///
/// Cosmetic only: the record byte layout is identical across extensions.
/// `.bin` is the fallback when no other format is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    /// Binary save file, `.bin`
    #[default]
    Bin,

    /// Conventional game-save extension, `.sav`
    Sav,

    /// Generic data file, `.dat`
    Dat,
}

impl FileFormat {
    /// File extension for this format, including the leading dot
    pub fn extension(&self) -> &'static str {
        match self {
            FileFormat::Sav => ".sav",
            FileFormat::Dat => ".dat",
            FileFormat::Bin => ".bin",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("./saved_games"),
            default_file_name: "GameSave".to_string(),
            file_format: FileFormat::Bin,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the base directory for store files
    pub fn base_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.base_dir = path.into();
        self
    }

    /// Set the default file name
    pub fn default_file_name(mut self, name: impl Into<String>) -> Self {
        self.config.default_file_name = name.into();
        self
    }

    /// Set the file format used for path assembly
    pub fn file_format(mut self, format: FileFormat) -> Self {
        self.config.file_format = format;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
