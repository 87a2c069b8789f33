//! 予測APIクライアント
//!
//! フォームと同じリクエストを reqwest で送る。リトライはしない。

use crate::error::{CrimePredictError, Result};
use crime_predict_common::endpoint::ADDRESS_PATH;
use crime_predict_common::{
    error_detail, parse_prediction_response, AddressLookup, Endpoint, Error, ModelAccuracy,
    Position, PredictionRequest, PredictionResponse,
};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct PredictionClient {
    http: Client,
    endpoint: Endpoint,
}

impl PredictionClient {
    pub fn new(endpoint: Endpoint, timeout_seconds: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// `POST /predict`
    pub async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResponse> {
        let url = self.endpoint.predict_url();
        log::debug!("POST {} - {}", url, serde_json::to_string(request)?);

        let response = self.http.post(&url).json(request).send().await?;
        let body = checked_body(response).await?;
        let prediction = parse_prediction_response(&body)?;

        log::info!("POST {} - Success", url);
        Ok(prediction)
    }

    /// `GET /address/{address}`
    pub async fn lookup_address(&self, address: &str) -> Result<AddressLookup> {
        let mut url = self.parse_url(ADDRESS_PATH)?;
        url.path_segments_mut()
            .map_err(|_| CrimePredictError::InvalidUrl(self.endpoint.base_url().to_string()))?
            .push(address);

        log::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        json_body(response).await
    }

    /// `POST /address`
    pub async fn reverse_geocode(&self, position: Position) -> Result<AddressLookup> {
        let url = self.parse_url(ADDRESS_PATH)?;

        log::debug!("POST {}", url);
        let response = self.http.post(url).json(&position).send().await?;
        json_body(response).await
    }

    /// `GET /accuracy`
    pub async fn accuracy(&self) -> Result<ModelAccuracy> {
        let url = self.endpoint.accuracy_url();

        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        json_body(response).await
    }

    fn parse_url(&self, path: &str) -> Result<Url> {
        Url::parse(&self.endpoint.url(path))
            .map_err(|_| CrimePredictError::InvalidUrl(self.endpoint.base_url().to_string()))
    }
}

/// 2xx以外は `detail` 付きのエラーにする
async fn checked_body(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        log::warn!("Non-OK response: {}", status);
        return Err(Error::Status {
            status: status.as_u16(),
            detail: error_detail(&body),
        }
        .into());
    }
    Ok(body)
}

async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = checked_body(response).await?;
    serde_json::from_str(&body)
        .map_err(|e| Error::MalformedResponse(e.to_string()).into())
}
