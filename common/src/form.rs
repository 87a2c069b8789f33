//! 予測フォームの状態
//!
//! 入力値はフィールドごとの文字列として保持し、送信時に
//! [`PredictionRequest`] へ変換する。送信ごとにチケットを発行し、
//! 最新の送信に対応するレスポンスだけを結果として反映する。

use crate::datetime::date_parts;
use crate::error::{Error, Result};
use crate::types::{Position, PredictionRequest, PredictionResponse};

/// フォームのフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Date,
    District,
    Address,
    Longitude,
    Latitude,
}

/// 入力欄の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    DateTimeLocal,
    Text,
    Number,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::DateTimeLocal => "datetime-local",
            InputKind::Text => "text",
            InputKind::Number => "number",
        }
    }
}

/// 入力欄の定義
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: FieldId,
    /// `name` と `id` に使う
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub step: Option<&'static str>,
}

/// 表示順の入力欄
pub const FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        field: FieldId::Date,
        name: "date",
        label: "Horodatage de l'incident criminel",
        kind: InputKind::DateTimeLocal,
        step: Some("1"),
    },
    FieldSpec {
        field: FieldId::District,
        name: "nom",
        label: "Nom du district de police",
        kind: InputKind::Text,
        step: None,
    },
    FieldSpec {
        field: FieldId::Address,
        name: "adresse",
        label: "Adresse approximative de l'incident criminel",
        kind: InputKind::Text,
        step: None,
    },
    FieldSpec {
        field: FieldId::Longitude,
        name: "longitude",
        label: "Longitude",
        kind: InputKind::Number,
        step: Some("any"),
    },
    FieldSpec {
        field: FieldId::Latitude,
        name: "latitude",
        label: "Latitude",
        kind: InputKind::Number,
        step: Some("any"),
    },
];

/// 送信チケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// 送信1回分
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub ticket: Ticket,
    pub request: PredictionRequest,
}

/// フォーム状態（ビューの生存期間のみ保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub date: String,
    pub district: String,
    pub address: String,
    pub longitude: String,
    pub latitude: String,
    prediction_result: Option<String>,
    error: Option<String>,
    submitted: u64,
    pending: Option<Ticket>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// フィールド値を取得
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Date => &self.date,
            FieldId::District => &self.district,
            FieldId::Address => &self.address,
            FieldId::Longitude => &self.longitude,
            FieldId::Latitude => &self.latitude,
        }
    }

    /// フィールド値を設定
    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldId::Date => self.date = value,
            FieldId::District => self.district = value,
            FieldId::Address => self.address = value,
            FieldId::Longitude => self.longitude = value,
            FieldId::Latitude => self.latitude = value,
        }
    }

    pub fn prediction_result(&self) -> Option<&str> {
        self.prediction_result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// 応答待ちの送信があるか
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// 入力値からリクエストを組み立てる
    pub fn to_request(&self) -> Result<PredictionRequest> {
        Ok(PredictionRequest {
            dates: date_parts(&self.date)?,
            pd_district: self.district.clone(),
            adresse: self.address.clone(),
            position: Position {
                longitude: parse_coordinate("longitude", &self.longitude)?,
                latitude: parse_coordinate("latitude", &self.latitude)?,
            },
        })
    }

    /// 送信開始
    ///
    /// 前回の結果とエラーを消去する。変換に失敗した場合はエラーを記録し、
    /// チケットは発行しない。
    pub fn begin_submit(&mut self) -> Result<Submission> {
        self.prediction_result = None;
        self.error = None;

        match self.to_request() {
            Ok(request) => {
                self.submitted += 1;
                let ticket = Ticket(self.submitted);
                self.pending = Some(ticket);
                Ok(Submission { ticket, request })
            }
            Err(e) => {
                self.pending = None;
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// レスポンスを反映
    ///
    /// 最新の送信以外のレスポンスは破棄して `false` を返す。
    pub fn apply_response(&mut self, ticket: Ticket, outcome: Result<PredictionResponse>) -> bool {
        if self.pending != Some(ticket) {
            log::warn!("stale prediction response dropped (ticket {})", ticket.0);
            return false;
        }

        self.pending = None;
        match outcome {
            Ok(response) => self.prediction_result = Some(response.prediction),
            Err(e) => self.error = Some(e.to_string()),
        }
        true
    }
}

fn parse_coordinate(field: &'static str, raw: &str) -> Result<f64> {
    let invalid = || Error::InvalidCoordinate {
        field,
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| invalid())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid())
    }
}
