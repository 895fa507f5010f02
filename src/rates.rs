use anyhow::Result;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::exchange_rates::RateRecord;
use crate::privat::{FetchRates, date_key};

/// Sale and purchase quotes for one currency on one day. A zero value can
/// mean either a recorded zero rate or a record that omitted the field; the
/// archive does not let us tell the two apart.
#[derive(Debug, Serialize, PartialEq)]
pub struct CurrencyQuote {
    pub sale: Decimal,
    pub purchase: Decimal,
}

impl From<&RateRecord> for CurrencyQuote {
    fn from(record: &RateRecord) -> Self {
        CurrencyQuote {
            sale: record.sale_rate,
            purchase: record.purchase_rate,
        }
    }
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DayQuotes {
    #[serde(rename = "EUR")]
    pub eur: CurrencyQuote,
    #[serde(rename = "USD")]
    pub usd: CurrencyQuote,
}

impl DayQuotes {
    /// Takes the first EUR and the first USD record of the day; a day
    /// missing either currency yields nothing.
    fn from_records(records: &[RateRecord]) -> Option<DayQuotes> {
        let eur = records.iter().find(|r| r.currency == "EUR")?;
        let usd = records.iter().find(|r| r.currency == "USD")?;

        Some(DayQuotes {
            eur: eur.into(),
            usd: usd.into(),
        })
    }
}

/// Rates for a single archive day, keyed the same way the query was.
#[derive(Debug, Serialize, PartialEq)]
pub struct DailyRates {
    pub date: String,
    pub rates: DayQuotes,
}

/// Walks backwards from `start` one calendar day per iteration, fetching
/// each day in turn. Days the archive has no EUR or USD data for are
/// skipped, so the report can come out shorter than `days`; the most recent
/// day always comes first.
pub async fn collect<F: FetchRates>(
    api: &F,
    start: NaiveDate,
    days: u32,
) -> Result<Vec<DailyRates>> {
    let mut cursor = start;
    let mut report = Vec::new();

    for _ in 0..days {
        let data = api.fetch(cursor).await?;

        match DayQuotes::from_records(&data.exchange_rate) {
            Some(rates) => report.push(DailyRates {
                date: date_key(cursor),
                rates,
            }),
            None => debug!("no EUR/USD rates for {}", date_key(cursor)),
        }

        cursor = cursor
            .pred_opt()
            .ok_or(anyhow::anyhow!("Can't get the day before {}", cursor))?;
    }

    Ok(report)
}
