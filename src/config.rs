//! Storage, report and clipboard settings.

use std::{env, path::PathBuf, time::Duration};

use directories::ProjectDirs;

const APP_QUALIFIER: &str = "dev";
const APP_ORG: &str = "MAVE";
const APP_NAME: &str = "TaipeiMetroDex";

/// Storage key the cart snapshot is saved under.
pub const DEFAULT_STORAGE_KEY: &str = "mave_cart";

/// Overrides the directory the file store writes into.
pub const DATA_DIR_ENV: &str = "METRODEX_DATA_DIR";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
    /// Falls back to the platform config directory when unset.
    pub data_dir: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let data_dir = env::var_os(DATA_DIR_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self {
            data_dir,
            ..Self::default()
        }
    }

    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(dir.into()),
            ..Self::default()
        }
    }

    /// Full path of the snapshot file, if a directory can be resolved.
    pub fn data_file(&self) -> Option<PathBuf> {
        let dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)?
                .config_dir()
                .to_path_buf(),
        };
        Some(dir.join(format!("{}.json", self.storage_key)))
    }
}

/// Fixed text around the exported portfolio lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    pub title: String,
    pub total_label: String,
    pub attribution: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "我的交易清單".to_string(),
            total_label: "總估值：".to_string(),
            attribution: " （[MAVE](https://taipeimetrodex-mave.pages.dev/)）".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CopyConfig {
    /// A clipboard write taking longer than this counts as failed.
    pub timeout: Duration,
    pub success_text: String,
    pub failure_text: String,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            success_text: "已複製".to_string(),
            failure_text: "複製失敗，請手動複製。".to_string(),
        }
    }
}
