use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stores user-configurable CLI preferences and metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Preferred display language tag (`en` or `zh`). Kept as a plain tag so
    /// unknown values survive the round trip and resolve at the call site.
    pub locale: String,
    /// The year the plan targets; the review period is the year before it.
    #[serde(default = "Config::default_plan_year")]
    pub plan_year: i32,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for the persisted snapshot. Defaults to the
    /// platform data directory.
    pub data_root: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for exported files. Defaults to
    /// `~/Documents/Lifewheel`.
    pub export_root: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "zh".into(),
            plan_year: Self::default_plan_year(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            data_root: None,
            export_root: None,
        }
    }
}

impl Config {
    pub fn default_plan_year() -> i32 {
        2026
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_data_root(&self) -> PathBuf {
        if let Some(path) = &self.data_root {
            return path.clone();
        }

        let base = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("lifewheel")
    }

    pub fn resolve_export_root(&self) -> PathBuf {
        if let Some(path) = &self.export_root {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join("Lifewheel")
    }
}
