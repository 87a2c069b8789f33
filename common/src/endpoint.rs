//! バックエンドのURLとレスポンス本文の解析

use crate::error::{Error, Result};
use crate::types::{ErrorDetail, PredictionResponse};

/// 開発用バックエンド
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const PREDICT_PATH: &str = "/predict";
pub const ADDRESS_PATH: &str = "/address";
pub const ACCURACY_PATH: &str = "/accuracy";

/// バックエンドの接続先
///
/// ベースURLが空の場合は同一オリジンの相対パスになる（開発プロキシ用）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Endpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn predict_url(&self) -> String {
        self.url(PREDICT_PATH)
    }

    pub fn accuracy_url(&self) -> String {
        self.url(ACCURACY_PATH)
    }
}

/// 予測レスポンス本文を解析
pub fn parse_prediction_response(body: &str) -> Result<PredictionResponse> {
    serde_json::from_str(body).map_err(|e| Error::MalformedResponse(e.to_string()))
}

/// エラー本文から `detail` を取り出す
pub fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorDetail>(body)
        .ok()
        .map(|d| d.message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_predict_url() {
        assert_eq!(Endpoint::default().predict_url(), "http://localhost:8000/predict");
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let endpoint = Endpoint::new("https://api.example.com/ ");
        assert_eq!(endpoint.predict_url(), "https://api.example.com/predict");
        assert_eq!(endpoint.accuracy_url(), "https://api.example.com/accuracy");
    }

    #[test]
    fn test_empty_base_is_same_origin() {
        assert_eq!(Endpoint::new("").predict_url(), "/predict");
    }

    #[test]
    fn test_parse_prediction() {
        let response = parse_prediction_response(r#"{"prediction":"X","data":null}"#).unwrap();
        assert_eq!(response.prediction, "X");
    }

    #[test]
    fn test_parse_missing_prediction() {
        let result = parse_prediction_response(r#"{"data":{}}"#);
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_not_json() {
        let result = parse_prediction_response("<html>Bad Gateway</html>");
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_error_detail() {
        assert_eq!(
            error_detail(r#"{"detail":"La date est invalide."}"#).as_deref(),
            Some("La date est invalide.")
        );
        assert!(error_detail("Internal Server Error").is_none());
    }
}
