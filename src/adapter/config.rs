//! Configuration
//!
//! 設定ファイル（JSON）の読み込み

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapter::render::svg_renderer::DEFAULT_LINE_COLOR;
use crate::application::dto::chart_config::ChartConfig;
use crate::domain::services::chart_layout::Padding;

pub const DEFAULT_CONFIG_PATH: &str = "~/.weightlog/config.json";
pub const DEFAULT_DATA_FILE: &str = "~/.weightlog/store.json";
pub const DEFAULT_STORE_KEY: &str = "lambRecords";

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct PaddingConfig {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for PaddingConfig {
    fn default() -> Self {
        let padding = Padding::default();
        Self {
            top: padding.top,
            right: padding.right,
            bottom: padding.bottom,
            left: padding.left,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Key-value store file holding the serialized records
    pub data_file: String,
    /// Key the records are stored under
    pub store_key: String,

    // Chart
    pub chart_width: f64,
    pub chart_height: f64,
    pub padding: PaddingConfig,
    pub resize_debounce_ms: u64,
    /// Polyline and marker color in the SVG output
    pub line_color: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: DEFAULT_DATA_FILE.to_string(),
            store_key: DEFAULT_STORE_KEY.to_string(),
            chart_width: 600.0,
            chart_height: 300.0,
            padding: PaddingConfig::default(),
            resize_debounce_ms: 250,
            line_color: DEFAULT_LINE_COLOR.to_string(),
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load(path: &str) -> Result<Self> {
        let path = expand_path(path);

        if !path.exists() {
            info!(
                "No config file at {}, using default configuration",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;
        Ok(config)
    }

    /// Data file path with `~` expanded
    pub fn data_path(&self) -> PathBuf {
        expand_path(&self.data_file)
    }

    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig::new(
            self.chart_width,
            self.chart_height,
            Padding {
                top: self.padding.top,
                right: self.padding.right,
                bottom: self.padding.bottom,
                left: self.padding.left,
            },
            Duration::from_millis(self.resize_debounce_ms),
        )
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    let expanded = shellexpand::tilde(path);
    Path::new(expanded.as_ref()).to_path_buf()
}
