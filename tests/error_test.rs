//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use crime_predict::config::Config;
use crime_predict::error::CrimePredictError;
use crime_predict_common::{FieldId, FormState};
use tempfile::tempdir;

/// 壊れた設定ファイル
#[test]
fn test_config_invalid_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ invalid }").unwrap();

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(CrimePredictError::JsonParse(_))));
}

/// 日時が空のまま送信
#[test]
fn test_submit_without_date() {
    let mut form = FormState::new();
    form.set(FieldId::Longitude, "1.0");
    form.set(FieldId::Latitude, "2.0");

    let err: CrimePredictError = form.begin_submit().unwrap_err().into();
    assert!(matches!(
        err,
        CrimePredictError::Common(crime_predict_common::Error::InvalidDate(_))
    ));
    assert!(form.prediction_result().is_none());
}

/// CrimePredictErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        CrimePredictError::Config("テスト設定エラー".to_string()),
        CrimePredictError::InvalidUrl("localhost".to_string()),
        CrimePredictError::Common(crime_predict_common::Error::MalformedResponse(
            "missing field `prediction`".to_string(),
        )),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: CrimePredictError = io_err.into();

    assert!(matches!(err, CrimePredictError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// 透過的エラー（common::Errorのメッセージがそのまま表示される）
#[test]
fn test_error_chain_transparent() {
    let common_err = crime_predict_common::Error::Status {
        status: 400,
        detail: Some("Les informations sont incomplètes.".to_string()),
    };
    let err: CrimePredictError = common_err.into();

    let display = format!("{}", err);
    assert_eq!(display, "HTTP error: 400 (Les informations sont incomplètes.)");
}
