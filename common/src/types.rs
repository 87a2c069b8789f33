//! 予測APIのリクエスト/レスポンス型
//!
//! CLIとWeb(WASM)で共有される型:
//! - PredictionRequest: `POST /predict` の本文
//! - PredictionResponse: 予測結果
//! - AddressLookup / ModelAccuracy: 補助エンドポイントのレスポンス

use serde::{Deserialize, Serialize};

/// 日時の各フィールド（月・日は1始まり、時は24時間制）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    pub annee: i32,
    pub mois: u32,
    pub jour: u32,
    pub heure: u32,
    pub minute: u32,
    pub seconde: u32,
}

/// 座標
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub longitude: f64,
    pub latitude: f64,
}

/// 予測リクエスト
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub dates: DateParts,
    pub pd_district: String,
    pub adresse: String,
    pub position: Position,
}

/// 予測レスポンス
///
/// フォームが使うのは `prediction` のみ。`data` はバックエンドが
/// 正規化した入力のエコーで、CLIの `--json` 出力で表示する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    pub prediction: String,
    #[serde(default)]
    pub data: Option<IncidentEcho>,
}

/// バックエンドがエコーする事件データ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IncidentEcho {
    pub dates: String,
    pub day_of_week: String,
    pub pd_district: String,
    pub address: String,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
}

/// 住所検索結果（`GET /address/{address}`, `POST /address`）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressLookup {
    pub address: Option<String>,
    pub valid: bool,
    pub adresse_location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// モデル精度（`GET /accuracy`）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelAccuracy {
    pub tree: f64,
    pub rf: f64,
    pub knn: f64,
    pub global_accuracy: f64,
}

/// バックエンドのエラー本文（FastAPIの `{"detail": ...}`）
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ErrorDetail {
    pub detail: serde_json::Value,
}

impl ErrorDetail {
    /// `detail` を表示用文字列にする（バリデーションエラーは配列で返る）
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
