//! バックエンドAPI

pub mod predict;

use crime_predict_common::{Endpoint, DEFAULT_BASE_URL};

/// ビルド時の接続先（`PREDICT_API_BASE`、空文字なら同一オリジン）
pub fn api_base() -> &'static str {
    option_env!("PREDICT_API_BASE").unwrap_or(DEFAULT_BASE_URL)
}

pub fn endpoint() -> Endpoint {
    Endpoint::new(api_base())
}
