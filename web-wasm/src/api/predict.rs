//! 予測API呼び出し
//!
//! フォームは [`Predictor`] 経由でバックエンドを呼ぶ。本番は
//! [`HttpPredictor`]（ブラウザの fetch）、テストでは差し替える。

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use crime_predict_common::{
    error_detail, parse_prediction_response, Endpoint, Error, PredictionRequest,
    PredictionResponse, Result,
};

/// 予測の送信先
pub trait Predictor {
    fn predict(&self, request: PredictionRequest) -> LocalBoxFuture<'static, Result<PredictionResponse>>;
}

/// fetch による予測API呼び出し
#[derive(Debug, Clone)]
pub struct HttpPredictor {
    endpoint: Endpoint,
}

impl HttpPredictor {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }
}

impl Predictor for HttpPredictor {
    fn predict(&self, request: PredictionRequest) -> LocalBoxFuture<'static, Result<PredictionResponse>> {
        let url = self.endpoint.predict_url();
        async move { post_prediction(&url, &request).await }.boxed_local()
    }
}

fn js_error(value: JsValue) -> Error {
    Error::Network(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

/// `POST /predict`
async fn post_prediction(url: &str, request: &PredictionRequest) -> Result<PredictionResponse> {
    let body = serde_json::to_string(request)?;
    log::debug!("POST {} - {}", url, body);

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Network("window unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    if !resp.ok() {
        log::warn!("POST {} - Non-OK response: {}", url, resp.status());
        return Err(Error::Status {
            status: resp.status(),
            detail: error_detail(&text),
        });
    }

    let response = parse_prediction_response(&text)?;
    log::info!("POST {} - Success", url);
    Ok(response)
}
