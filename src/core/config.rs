//! Configuration system: TOML file + validated defaults.

#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chart::{ChartMode, PERMITTED_CHART_LIMITS};
use crate::core::errors::{LexError, Result};
use crate::query::sort::{SortDirection, SortField};

/// Full lexidash configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DashboardConfig {
    pub data: DataConfig,
    pub view: ViewConfig,
    pub chart: ChartConfig,
    pub log: LogConfig,
}

/// Where the precomputed word-count snapshot comes from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the snapshot file.
    pub path: PathBuf,
    /// Serialized shape of the snapshot.
    pub format: DataFormat,
}

/// Supported snapshot encodings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    /// JSON array of `{word, count}` objects.
    #[default]
    Json,
    /// Tab-separated `word<TAB>count` lines, as emitted by the upstream job.
    Tsv,
}

/// List view defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ViewConfig {
    pub page_size: usize,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

/// Chart defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChartConfig {
    pub limit: usize,
    pub mode: ChartMode,
}

/// Event log destination. `None` disables file logging (stderr still used
/// for degraded writes).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct LogConfig {
    pub path: Option<PathBuf>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/wordcount.json"),
            format: DataFormat::Json,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: 50,
            sort_field: SortField::Count,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            limit: 20,
            mode: ChartMode::RankedBar,
        }
    }
}

impl DashboardConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(LexError::MissingConfig {
                path: path.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path).map_err(|e| LexError::io(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Check semantic constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.view.page_size == 0 {
            return Err(LexError::InvalidConfig {
                details: "view.page_size must be greater than zero".to_string(),
            });
        }
        if !PERMITTED_CHART_LIMITS.contains(&self.chart.limit) {
            return Err(LexError::InvalidConfig {
                details: format!(
                    "chart.limit must be one of {:?}, got {}",
                    PERMITTED_CHART_LIMITS, self.chart.limit
                ),
            });
        }
        if self.data.path.as_os_str().is_empty() {
            return Err(LexError::InvalidConfig {
                details: "data.path must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
