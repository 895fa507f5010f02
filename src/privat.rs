use std::time::Duration;

use chrono::NaiveDate;
use log::debug;

use crate::error::FetchError;
use crate::exchange_rates::ExchangeRatesResponse;

const PRIVAT_API_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates";

/// The archive is keyed by day in the bank's own `DD.MM.YYYY` format.
const DATE_KEY_FORMAT: &str = "%d.%m.%Y";

/// A stalled connection should fail the run instead of hanging it forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// One archive lookup per calendar day. Implemented by the real client
/// below and by stubs in the collector tests.
pub trait FetchRates {
    async fn fetch(&self, date: NaiveDate) -> Result<ExchangeRatesResponse, FetchError>;
}

/// Client for the public PrivatBank currency archive.
pub struct PrivatApi {
    base_url: String,
    client: reqwest::Client,
}

impl PrivatApi {
    pub fn new() -> Self {
        Self::with_base_url(PRIVAT_API_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        PrivatApi {
            base_url: base_url.to_string(),
            client: reqwest::Client::new(),
        }
    }
}

impl FetchRates for PrivatApi {
    async fn fetch(&self, date: NaiveDate) -> Result<ExchangeRatesResponse, FetchError> {
        let url = format!("{}?json&date={}", self.base_url, date_key(date));
        debug!("fetch | url: {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
