use crate::error::{CloudError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_SHEET_ID: &str = "1KUm0d2ieWXLM9iwAGIiIOs2ePDCnApBe88GuRbf3Qr8";
pub const DEFAULT_OUTPUT_DIR: &str = "files";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sheet_id: String,
    pub output_dir: PathBuf,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sheet_id: DEFAULT_SHEET_ID.into(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout_seconds: 60,
            user_agent: concat!("opportunity-cloud/", env!("CARGO_PKG_VERSION")).into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CloudError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("opportunity-cloud").join("config.json"))
    }

    /// シートID（URLでも可）を検証して設定する
    pub fn set_sheet(&mut self, input: &str) -> Result<()> {
        self.sheet_id = crate::source::sheet_id_from_input(input)?;
        Ok(())
    }
}
