use gloo_net::http::{Request, Response};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{AiNotification, InsightsEnvelope, PaymentReceipt, QrPaymentRequest};

const API_BASE_URL: &str = "http://localhost:8081";

/// What a backend call can fail with. The `Display` string is exactly what
/// the stores record and the banners show.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-2xx answer; carries the backend's `message` when it sent one.
    #[error("{0}")]
    Backend(String),
    #[error("could not reach the server: {0}")]
    Network(String),
    #[error("unexpected response from the server: {0}")]
    Decode(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Error responses may carry a JSON `message` field; anything else falls
/// back to the caller's generic text.
async fn backend_error(resp: Response, fallback: String) -> ApiError {
    match resp.json::<ErrorBody>().await {
        Ok(ErrorBody { message: Some(msg) }) => ApiError::Backend(msg),
        _ => ApiError::Backend(fallback),
    }
}

/// Multipart upload of a bank statement. The success body is opaque text.
pub async fn upload_csv(file: web_sys::File) -> Result<String, ApiError> {
    let url = format!("{}/api/transactions/upload", API_BASE_URL);
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Network("could not build the upload form".to_string()))?;
    form.append_with_blob("file", &file)
        .map_err(|_| ApiError::Network("could not attach the file".to_string()))?;

    let resp = Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(backend_error(resp, "Failed to upload file".to_string()).await);
    }
    resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn fetch_insights() -> Result<InsightsEnvelope, ApiError> {
    let url = format!("{}/api/transactions/insights", API_BASE_URL);
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        let fallback = format!("Failed to fetch insights - Status: {}", resp.status());
        return Err(backend_error(resp, fallback).await);
    }
    resp.json::<InsightsEnvelope>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// The five most recent generated notifications, oldest first.
pub async fn fetch_ai_notifications() -> Result<Vec<AiNotification>, ApiError> {
    let url = format!("{}/api/insights/last5NlpNotifications", API_BASE_URL);
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(backend_error(resp, "Failed to fetch AI notifications".to_string()).await);
    }
    resp.json::<Vec<AiNotification>>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn submit_qr_payment(request: &QrPaymentRequest) -> Result<PaymentReceipt, ApiError> {
    let url = format!("{}/api/payments/qr", API_BASE_URL);
    let resp = Request::post(&url)
        .json(request)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(backend_error(resp, "Payment failed".to_string()).await);
    }
    resp.json::<PaymentReceipt>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_reads_optional_message() {
        let with: ErrorBody = serde_json::from_str(r#"{"message":"Insufficient balance"}"#).unwrap();
        assert_eq!(with.message.as_deref(), Some("Insufficient balance"));

        let without: ErrorBody = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(without.message, None);
    }
}
