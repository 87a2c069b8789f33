use crate::error::{CrimePredictError, Result};
use crime_predict_common::{Endpoint, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 接続先を上書きする環境変数
pub const BASE_URL_ENV: &str = "CRIME_PREDICT_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CrimePredictError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("crime-predict").join("config.json"))
    }

    /// 接続先（優先順: 引数 > 環境変数 > 設定ファイル）
    pub fn endpoint(&self, override_url: Option<&str>) -> Endpoint {
        if let Some(url) = override_url {
            return Endpoint::new(url);
        }
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Endpoint::new(url),
            _ => Endpoint::new(self.base_url.as_str()),
        }
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CrimePredictError::InvalidUrl(url));
        }
        self.base_url = url;
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        check_timeout(seconds)?;
        self.timeout_seconds = seconds;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        check_timeout(self.timeout_seconds)
    }
}

fn check_timeout(seconds: u64) -> Result<()> {
    if seconds == 0 {
        return Err(CrimePredictError::Config("タイムアウトは1秒以上にしてください".into()));
    }
    Ok(())
}
