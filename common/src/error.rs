//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid coordinate for {field}: {value:?}")]
    InvalidCoordinate { field: &'static str, value: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_status_with_detail() {
        let error = Error::Status {
            status: 400,
            detail: Some("La date est invalide.".to_string()),
        };
        assert_eq!(format!("{}", error), "HTTP error: 400 (La date est invalide.)");
    }

    #[test]
    fn test_error_display_status_without_detail() {
        let error = Error::Status { status: 502, detail: None };
        assert_eq!(format!("{}", error), "HTTP error: 502");
    }

    #[test]
    fn test_error_display_coordinate() {
        let error = Error::InvalidCoordinate {
            field: "longitude",
            value: "abc".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("longitude"));
        assert!(display.contains("\"abc\""));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::Network("接続拒否".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("Network"));
        assert!(debug.contains("接続拒否"));
    }
}
