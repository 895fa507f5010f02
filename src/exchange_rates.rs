use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Serialize;

/// Payload of the archive endpoint. Only the fields this program reads are
/// modeled; bank metadata and the NBU reference rates are ignored.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRatesResponse {
    #[serde(default)]
    pub exchange_rate: Vec<RateRecord>,
}

/// One currency entry of the `exchangeRate` list. The archive omits
/// `saleRate`/`purchaseRate` for some records, so every field defaults: a
/// record missing them comes through with zero rates rather than failing the
/// whole day's parse.
#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct RateRecord {
    pub currency: String,
    pub sale_rate: Decimal,
    pub purchase_rate: Decimal,
}
