use log::{debug, warn};
use serde::de::DeserializeOwned;
use shared::{DatasetRecord, FeaturePayload, ModelKind, PredictionResult};
use std::str::FromStr;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::transport::{HttpRequest, Transport};

/// The only boundary between the application and the prediction service.
///
/// Predictions are never retried, cached or substituted. Catalog listing
/// falls back to the bundled snapshot when the service cannot list.
#[derive(Debug, Clone)]
pub struct PredictionClient<T> {
    config: ClientConfig,
    base: String,
    transport: T,
}

impl<T: Transport> PredictionClient<T> {
    pub fn new(config: ClientConfig, transport: T) -> Result<Self, ClientError> {
        Url::parse(&config.base_url)?;
        let base = config.base_url.trim_end_matches('/').to_string();
        Ok(Self { config, base, transport })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn predict_url(&self, model: ModelKind) -> Result<Url, ClientError> {
        let url = Url::parse_with_params(&format!("{}/predict", self.base), &[("model", model.code())])?;
        Ok(url)
    }

    pub fn list_url(&self) -> String {
        format!("{}/koi/list", self.base)
    }

    /// `POST {base}/predict?model={code}` with the full fourteen-field payload.
    pub async fn request_prediction(
        &self,
        payload: &FeaturePayload,
        model: ModelKind,
    ) -> Result<PredictionResult, ClientError> {
        let url = self.predict_url(model)?;
        let body = serde_json::to_string(payload)?;
        let request = HttpRequest::post_json(url.as_str(), body).with_headers(&self.config.headers);

        debug!("Requesting prediction from {}", url);
        let raw: PredictionResult = self.fetch_json(request).await?;
        debug!("Prediction response: {:?}", raw);

        let (result, rescaled) = raw.normalized();
        if rescaled {
            warn!(
                "Prediction confidence arrived on a 0-100 scale, rescaled to {}",
                result.confidence
            );
        }
        Ok(result)
    }

    /// Same as [`Self::request_prediction`] but takes the model as its query code.
    pub async fn request_prediction_with_code(
        &self,
        payload: &FeaturePayload,
        code: &str,
    ) -> Result<PredictionResult, ClientError> {
        let model = ModelKind::from_str(code).map_err(|_| ClientError::InvalidModel(code.to_string()))?;
        self.request_prediction(payload, model).await
    }

    /// `GET {base}/koi/list`, falling back to the bundled snapshot on any failure.
    ///
    /// An empty listing is a valid answer. Errors only when the snapshot itself
    /// cannot be loaded.
    pub async fn list_catalog(&self) -> Result<Vec<DatasetRecord>, ClientError> {
        let request = HttpRequest::get(self.list_url()).with_headers(&self.config.headers);
        match self.fetch_json::<Vec<DatasetRecord>>(request).await {
            Ok(records) => {
                debug!("Loaded {} catalog records from service", records.len());
                Ok(records)
            }
            Err(e) => {
                warn!("Catalog listing failed ({}), loading {}", e, self.config.fallback_url);
                let records: Vec<DatasetRecord> =
                    self.fetch_json(HttpRequest::get(self.config.fallback_url.as_str())).await?;
                debug!("Loaded {} catalog records from snapshot", records.len());
                Ok(records)
            }
        }
    }

    async fn fetch_json<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, ClientError> {
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ClientError::Status { status: response.status, body: response.body });
        }
        Ok(serde_json::from_str(&response.body)?)
    }
}
