use crate::{
    client::{connect, decode},
    config::Config,
    errors::MeterApiError,
};
use reqwest::Client;
use water_monitor_lib::billing::dto::{MonthlyConsumption, PaymentRequest, PaymentResult};
use water_monitor_lib::dashboard::dto::{ResetOutcome, Statistics};

pub mod client;
pub mod config;
pub mod consts;
pub mod errors;

/// HTTP client for the water meter server.
#[derive(Debug, Clone)]
pub struct MeterApi {
    base_url: String,
    client: Client,
}

impl MeterApi {
    pub fn new(config: Config) -> Result<Self, MeterApiError> {
        let client = connect()?;
        Ok(MeterApi {
            base_url: config.base_url,
            client,
        })
    }

    /// Readouts and chart series for the trailing `days` window.
    pub async fn statistics(&self, days: u16) -> Result<Statistics, MeterApiError> {
        let url = format!("{}/get_data?days={}", self.base_url, days);
        decode(self.client.get(url).send().await?).await
    }

    /// Drops every stored reading.
    pub async fn reset(&self) -> Result<ResetOutcome, MeterApiError> {
        let url = format!("{}/reset", self.base_url);
        decode(self.client.post(url).send().await?).await
    }

    /// Bill for `month` (`YYYY-MM`), or for the current month when `None`.
    pub async fn consumption(
        &self,
        month: Option<&str>,
    ) -> Result<MonthlyConsumption, MeterApiError> {
        let url = match month {
            Some(month) => format!("{}/api/consumption?month={}", self.base_url, month),
            None => format!("{}/api/consumption", self.base_url),
        };
        decode(self.client.get(url).send().await?).await
    }

    pub async fn pay(&self, request: &PaymentRequest) -> Result<PaymentResult, MeterApiError> {
        let url = format!("{}/api/pay", self.base_url);
        decode(self.client.post(url).json(request).send().await?).await
    }
}
