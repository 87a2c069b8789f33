use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrimePredictError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("接続先URLが不正です: {0}")]
    InvalidUrl(String),

    #[error("API呼び出しエラー: {0}")]
    ApiCall(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] crime_predict_common::Error),
}

pub type Result<T> = std::result::Result<T, CrimePredictError>;
