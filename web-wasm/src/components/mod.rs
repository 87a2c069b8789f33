//! UIコンポーネント

pub mod header;
pub mod prediction_form;
pub mod prediction_result;
