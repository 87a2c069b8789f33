//! Crime Predict Common Library
//!
//! CLIとWeb(WASM)で共有される型とフォームロジック

pub mod types;
pub mod error;
pub mod datetime;
pub mod form;
pub mod endpoint;

pub use types::{
    AddressLookup, DateParts, IncidentEcho, ModelAccuracy, Position, PredictionRequest,
    PredictionResponse,
};
pub use error::{Error, Result};
pub use datetime::{date_parts, parse_local_datetime};
pub use form::{FieldId, FieldSpec, FormState, InputKind, Submission, Ticket, FIELDS};
pub use endpoint::{error_detail, parse_prediction_response, Endpoint, DEFAULT_BASE_URL};
