use crate::{consts, errors::MeterApiError};
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client, Response,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// JSON payload the server attaches to non-2xx replies.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub fn connect() -> Result<Client, MeterApiError> {
    let mut headers = HeaderMap::new();

    headers.insert(
        reqwest::header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    let client = Client::builder()
        .user_agent(consts::get_user_agent())
        .default_headers(headers)
        .timeout(Duration::from_secs(15))
        .build()?;
    Ok(client)
}

pub async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, MeterApiError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .map(|body| body.error);
        return Err(MeterApiError::ErrorStatus {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
